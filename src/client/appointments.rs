//! Appointment collection endpoints (`/Aapi` prefix).

use crate::error::ClientError;
use crate::models::{Appointment, Doctor, NewAppointment, Patient};
use crate::validation;

use super::ApiClient;

/// Directories needed by the Add Appointment pickers.
#[derive(Debug, Clone)]
pub struct AppointmentFormData {
    pub doctors: Vec<Doctor>,
    pub patients: Vec<Patient>,
}

impl ApiClient {
    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, ClientError> {
        self.get_json("/Aapi/appointments").await
    }

    /// Create an appointment after local validation of the time and both
    /// participant selections.
    pub async fn create_appointment(
        &self,
        appointment: &NewAppointment,
    ) -> Result<Appointment, ClientError> {
        let errors = validation::validate_appointment(appointment);
        if !errors.is_clean() {
            return Err(ClientError::Validation(errors));
        }
        self.post_json("/Aapi/appointments", appointment).await
    }

    pub async fn delete_appointment(&self, id: i64) -> Result<(), ClientError> {
        self.delete(&format!("/Aapi/{id}")).await
    }

    /// Joint fetch for the form's pickers. The two lists populate disjoint
    /// state, so no ordering is required between them.
    pub async fn load_appointment_form(&self) -> Result<AppointmentFormData, ClientError> {
        let (doctors, patients) = tokio::try_join!(self.list_doctors(), self.list_patients())?;
        Ok(AppointmentFormData { doctors, patients })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionManager;
    use std::sync::{Arc, Mutex};

    #[tokio::test]
    async fn create_rejects_missing_participants_without_network() {
        let session = Arc::new(Mutex::new(SessionManager::in_memory()));
        let client = ApiClient::new("http://127.0.0.1:1", session).unwrap();

        let result = client.create_appointment(&NewAppointment::default()).await;
        match result {
            Err(ClientError::Validation(errors)) => {
                assert!(errors.get("appointmentTime").is_some());
                assert!(errors.get("doctorId").is_some());
                assert!(errors.get("patientId").is_some());
            }
            other => panic!("Expected Validation, got: {other:?}"),
        }
    }
}
