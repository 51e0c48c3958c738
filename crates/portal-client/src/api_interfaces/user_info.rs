use serde::{Deserialize, Serialize};

use crate::view::TableRow;

/// Identity details of the logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub numbers: Vec<PhoneNumberEntry>,
    pub location_name: String,
}

/// One number owned by the user.
///
/// Current deployments send [`PhoneNumber`]. Prefix-less deployments send the
/// deprecated [`LegacyPhoneNumber`] shape, which is accepted but should not be
/// relied on for new code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PhoneNumberEntry {
    Current(PhoneNumber),
    Legacy(LegacyPhoneNumber),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub extension: Option<String>,
    pub location: NumberLocation,
    pub phone_number_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberLocation {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyPhoneNumber {
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub primary: bool,
}

impl TableRow for PhoneNumberEntry {
    fn cells(&self) -> Vec<String> {
        match self {
            PhoneNumberEntry::Current(number) => vec![
                number.phone_number.clone().unwrap_or_default(),
                number.extension.clone().unwrap_or_default(),
                number.location.name.clone(),
                number.phone_number_type.clone(),
            ],
            PhoneNumberEntry::Legacy(number) => vec![
                number.value.clone(),
                number.kind.clone(),
                number.primary.to_string(),
            ],
        }
    }
}

impl UserInfo {
    pub fn location_label(&self) -> String {
        format!("Location: {}", self.location_name)
    }
}
