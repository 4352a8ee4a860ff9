pub mod validators;

use serde_derive::{Deserialize, Serialize};

/// Account details entered on the sign-up screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignUpInput {
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}
