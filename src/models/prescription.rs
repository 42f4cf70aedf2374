use serde::{Deserialize, Serialize};

/// Nested participant reference. Some backend responses embed
/// `doctor`/`patient` objects instead of flat ids; only the id matters to
/// this client, names are looked up in the fetched directories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartyRef {
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    pub id: i64,
    #[serde(default)]
    pub patient_id: Option<i64>,
    #[serde(default)]
    pub doctor_id: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub patient: Option<PartyRef>,
    #[serde(default)]
    pub doctor: Option<PartyRef>,
    #[serde(default)]
    pub items: Vec<PrescriptionItem>,
}

impl Prescription {
    /// Flat id when present, otherwise the nested object's id.
    pub fn resolved_doctor_id(&self) -> Option<i64> {
        self.doctor_id.or(self.doctor.as_ref().map(|d| d.id))
    }

    pub fn resolved_patient_id(&self) -> Option<i64> {
        self.patient_id.or(self.patient.as_ref().map(|p| p.id))
    }
}

/// Persisted prescription item as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionItem {
    #[serde(default)]
    pub id: Option<i64>,
    pub medical_item_id: i64,
    pub quantity: u32,
    #[serde(default)]
    pub dosage: String,
    #[serde(default)]
    pub frequency: String,
    #[serde(default)]
    pub timing: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub prescription_id: Option<i64>,
}

/// Item payload for create/update calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionItemPayload {
    pub medical_item_id: i64,
    pub quantity: u32,
    pub dosage: String,
    pub frequency: String,
    pub timing: String,
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prescription_id: Option<i64>,
}

/// Full prescription payload for create/update calls.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPrescription {
    pub patient_id: i64,
    pub doctor_id: i64,
    /// Always a string; the backend rejects null notes.
    pub notes: String,
    pub items: Vec<PrescriptionItemPayload>,
}

/// Enriched row for the prescription listing screen: participant ids joined
/// against the doctor/patient directories.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionListing {
    pub id: i64,
    pub patient_name: String,
    pub doctor_name: String,
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_flat_ids() {
        let p: Prescription =
            serde_json::from_str(r#"{"id":1,"patientId":10,"doctorId":20}"#).unwrap();
        assert_eq!(p.resolved_patient_id(), Some(10));
        assert_eq!(p.resolved_doctor_id(), Some(20));
    }

    #[test]
    fn resolves_nested_ids() {
        let p: Prescription =
            serde_json::from_str(r#"{"id":1,"patient":{"id":10},"doctor":{"id":20}}"#).unwrap();
        assert_eq!(p.resolved_patient_id(), Some(10));
        assert_eq!(p.resolved_doctor_id(), Some(20));
    }

    #[test]
    fn flat_id_wins_over_nested() {
        let p: Prescription = serde_json::from_str(
            r#"{"id":1,"patientId":10,"patient":{"id":99},"doctorId":20,"doctor":{"id":88}}"#,
        )
        .unwrap();
        assert_eq!(p.resolved_patient_id(), Some(10));
        assert_eq!(p.resolved_doctor_id(), Some(20));
    }

    #[test]
    fn dangling_references_resolve_to_none() {
        let p: Prescription = serde_json::from_str(r#"{"id":1}"#).unwrap();
        assert_eq!(p.resolved_patient_id(), None);
        assert_eq!(p.resolved_doctor_id(), None);
    }

    #[test]
    fn item_payload_omits_missing_prescription_id() {
        let payload = PrescriptionItemPayload {
            medical_item_id: 3,
            quantity: 2,
            dosage: "1 tablet".into(),
            frequency: "morning".into(),
            timing: "after meal".into(),
            duration: "7 days".into(),
            prescription_id: None,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("prescriptionId"));
        assert!(json.contains("\"medicalItemId\":3"));
    }
}
