//! Patient collection endpoints (`/Papi` prefix).
//!
//! Note the backend's delete route drops the collection segment
//! (`DELETE /Papi/{id}`, not `/Papi/patient/{id}`).

use crate::error::ClientError;
use crate::models::{NewPatient, Patient};
use crate::validation;

use super::ApiClient;

impl ApiClient {
    pub async fn list_patients(&self) -> Result<Vec<Patient>, ClientError> {
        self.get_json("/Papi/patient").await
    }

    /// Create a patient after local required-field validation.
    pub async fn create_patient(&self, patient: &NewPatient) -> Result<Patient, ClientError> {
        let errors = validation::validate_patient(patient);
        if !errors.is_clean() {
            return Err(ClientError::Validation(errors));
        }
        self.post_json("/Papi/patient", patient).await
    }

    pub async fn delete_patient(&self, id: i64) -> Result<(), ClientError> {
        self.delete(&format!("/Papi/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionManager;
    use std::sync::{Arc, Mutex};

    #[tokio::test]
    async fn create_rejects_incomplete_form_without_network() {
        let session = Arc::new(Mutex::new(SessionManager::in_memory()));
        let client = ApiClient::new("http://127.0.0.1:1", session).unwrap();

        let result = client.create_patient(&NewPatient::default()).await;
        match result {
            Err(ClientError::Validation(errors)) => assert_eq!(errors.len(), 5),
            other => panic!("Expected Validation, got: {other:?}"),
        }
    }
}
