use serde::{Deserialize, Serialize};

use crate::view::TableRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPhones {
    pub rows: Vec<PhoneRow>,
}

/// A desk phone registered to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneRow {
    pub model: String,
    /// Colon separated, as formatted by the portal.
    pub mac: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl TableRow for PhoneRow {
    fn cells(&self) -> Vec<String> {
        vec![
            self.model.clone(),
            self.mac.clone(),
            self.status.clone().unwrap_or_default(),
        ]
    }
}
