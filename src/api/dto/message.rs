//! Confirmation messages.

use serde::Serialize;

/// Body returned after a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub delete_successful: bool,
    pub message: String,
}

impl DeleteResponse {
    pub fn baked_good() -> Self {
        Self {
            delete_successful: true,
            message: "Baked good deleted.".to_string(),
        }
    }
}
