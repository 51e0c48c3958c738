use serde::{Deserialize, Serialize};

use crate::{ids::QueueId, view::TableRow};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserQueues {
    pub rows: Vec<QueueRow>,
}

/// A call queue the user is an agent of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueRow {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub extension: Option<String>,
    pub join_info: JoinInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinInfo {
    pub joined: bool,
    pub location_and_queue_id: QueueId,
    /// Whether the queue lets agents change their own joined state.
    pub allow_join_enabled: bool,
}

impl TableRow for QueueRow {
    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.location.clone(),
            self.extension.clone().unwrap_or_default(),
            self.join_info.joined.to_string(),
            self.join_info.location_and_queue_id.to_string(),
        ]
    }
}
