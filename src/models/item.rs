use serde::{Deserialize, Serialize};

/// Identity of the content item the host is currently displaying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemInfo {
    /// Display label
    pub name: String,
    /// Stable unique identifier, used as the analytics lookup key
    pub codename: String,
}

impl ItemInfo {
    pub fn new(name: impl Into<String>, codename: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            codename: codename.into(),
        }
    }
}
