use serde::{Deserialize, Serialize};

use crate::ids::OptionId;

/// Call feature flags of the logged-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOptions {
    pub call_intercept: bool,
    pub call_waiting: bool,
}

impl UserOptions {
    pub fn get(&self, id: OptionId) -> bool {
        match id {
            OptionId::CallIntercept => self.call_intercept,
            OptionId::CallWaiting => self.call_waiting,
        }
    }
}
