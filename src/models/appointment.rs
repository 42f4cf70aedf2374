use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    /// Backend-formatted timestamp, passed through verbatim for display.
    pub appointment_time: String,
    pub doctor_id: i64,
    pub patient_id: i64,
}

/// Add Appointment form payload. Participant ids stay optional until the
/// pickers are filled in; validation rejects submission while either is
/// missing.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub appointment_time: String,
    pub doctor_id: Option<i64>,
    pub patient_id: Option<i64>,
}
