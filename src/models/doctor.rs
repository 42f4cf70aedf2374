use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub gender: String,
    /// Free-text availability as entered on the Add Doctor form.
    pub available: String,
}

/// Add Doctor form payload.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDoctor {
    pub name: String,
    pub phone: String,
    pub gender: String,
    pub available: String,
}
