//! Ledger-wide settings and the shallow-merge patch applied to them.

use serde::{Deserialize, Serialize};

/// Process-wide settings carried in the persisted store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// The year the calendar currently displays.
    pub current_year: i32,
    /// The user's display name. Empty when never set.
    #[serde(default)]
    pub user_name: String,
    /// Optional opaque identifier for the user, when one has been assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_identifier: Option<String>,
}

/// A partial settings update.
///
/// Fields left as `None` keep their current value; the merge is shallow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsPatch {
    /// New current year, if changing.
    pub current_year: Option<i32>,
    /// New user name, if changing.
    pub user_name: Option<String>,
    /// New user identifier, if changing.
    pub user_identifier: Option<String>,
}

impl Settings {
    /// Applies a patch, replacing only the fields the patch carries.
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(year) = patch.current_year {
            self.current_year = year;
        }
        if let Some(name) = patch.user_name {
            self.user_name = name;
        }
        if let Some(id) = patch.user_identifier {
            self.user_identifier = Some(id);
        }
    }
}
