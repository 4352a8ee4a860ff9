use serde_derive::{Deserialize, Serialize};

/// A provider as listed on the doctor search screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
    /// 0.0 to 5.0
    pub rating: f32,
    pub experience_years: u32,
    /// Consultation fee in minor currency units
    pub consultation_fee: u32,
    pub available: bool,
    #[serde(default)]
    pub languages: Vec<String>,
}
