use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub current_stock: u32,
    pub minimum_stock_level: u32,
    /// Backend-assigned path of the uploaded item image, when one exists.
    #[serde(default)]
    pub image_path: Option<String>,
}

impl MedicalItem {
    /// Drives the inventory screen's low-stock highlight only; the stock
    /// invariant is never enforced server-side from this client.
    pub fn is_low_stock(&self) -> bool {
        self.current_stock < self.minimum_stock_level
    }
}

/// Inventory form payload. Sent as multipart text parts alongside the
/// optional image file.
#[derive(Debug, Clone)]
pub struct NewMedicalItem {
    pub name: String,
    pub description: String,
    pub current_stock: u32,
    pub minimum_stock_level: u32,
}

impl Default for NewMedicalItem {
    fn default() -> Self {
        // Form defaults: empty fields, minimum stock pre-filled at 5.
        Self {
            name: String::new(),
            description: String::new(),
            current_stock: 0,
            minimum_stock_level: 5,
        }
    }
}

/// Image selected by the shell's picker, ready for multipart upload.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}
