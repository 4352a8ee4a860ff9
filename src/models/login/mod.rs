pub mod validators;

use serde_derive::{Deserialize, Serialize};

/// Credentials entered on the login screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginInput {
    pub phone: String,
    pub password: String,
}
