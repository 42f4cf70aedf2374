//! Doctor collection endpoints (`/Dapi` prefix).

use crate::error::ClientError;
use crate::models::{Doctor, NewDoctor};
use crate::validation;

use super::ApiClient;

impl ApiClient {
    pub async fn list_doctors(&self) -> Result<Vec<Doctor>, ClientError> {
        self.get_json("/Dapi/doctor").await
    }

    /// Create a doctor after local required-field validation.
    pub async fn create_doctor(&self, doctor: &NewDoctor) -> Result<Doctor, ClientError> {
        let errors = validation::validate_doctor(doctor);
        if !errors.is_clean() {
            return Err(ClientError::Validation(errors));
        }
        self.post_json("/Dapi/doctor", doctor).await
    }

    pub async fn delete_doctor(&self, id: i64) -> Result<(), ClientError> {
        self.delete(&format!("/Dapi/{id}")).await
    }
}
