use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const QUEUE_ID_PATTERN: &str = r"^([^.\s]+)\.([^.\s]+)$";
static QUEUE_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(QUEUE_ID_PATTERN).expect("Invalid regex pattern"));

/// A user option the portal lets the user toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionId {
    #[serde(rename = "callIntercept")]
    CallIntercept,
    #[serde(rename = "callWaiting")]
    CallWaiting,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unexpected option id \"{0}\", expected callIntercept or callWaiting")]
pub struct OptionIdError(pub String);

impl OptionId {
    pub const ALL: [OptionId; 2] = [OptionId::CallIntercept, OptionId::CallWaiting];

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionId::CallIntercept => "callIntercept",
            OptionId::CallWaiting => "callWaiting",
        }
    }
}

impl FromStr for OptionId {
    type Err = OptionIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "callIntercept" | "call-intercept" => Ok(OptionId::CallIntercept),
            "callWaiting" | "call-waiting" => Ok(OptionId::CallWaiting),
            other => Err(OptionIdError(other.to_owned())),
        }
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one call queue, written `location_id.queue_id` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QueueId {
    pub location_id: String,
    pub queue_id: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid queue id \"{0}\", expected location_id.queue_id")]
pub struct QueueIdError(pub String);

impl FromStr for QueueId {
    type Err = QueueIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = QUEUE_ID_REGEX
            .captures(s)
            .ok_or_else(|| QueueIdError(s.to_owned()))?;
        Ok(Self {
            location_id: captures[1].to_owned(),
            queue_id: captures[2].to_owned(),
        })
    }
}

impl TryFrom<String> for QueueId {
    type Error = QueueIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<QueueId> for String {
    fn from(id: QueueId) -> Self {
        id.to_string()
    }
}

impl fmt::Display for QueueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.location_id, self.queue_id)
    }
}
