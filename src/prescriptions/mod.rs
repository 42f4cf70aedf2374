//! Prescription authoring: draft composition, the client-side stock
//! invariant, and the listing enrichment helpers.

pub mod composer;

pub use composer::{ComposerError, DraftItem, NewItemInput, PrescriptionComposer};

use crate::error::ClientError;
use crate::models::{
    Doctor, NewPrescription, Patient, Prescription, PrescriptionItem, PrescriptionItemPayload,
    PrescriptionListing,
};

/// Defaults substituted for optional item fields left empty at submission.
pub const DEFAULT_DOSAGE: &str = "1 tablet";
pub const DEFAULT_FREQUENCY: &str = "morning";
pub const DEFAULT_TIMING: &str = "after meal";
pub const DEFAULT_DURATION: &str = "7 days";

/// Remote seam the composer drives. `ApiClient` is the production
/// implementation; tests substitute a recording mock.
#[allow(async_fn_in_trait)]
pub trait PrescriptionBackend {
    async fn create_item(
        &self,
        payload: &PrescriptionItemPayload,
    ) -> Result<PrescriptionItem, ClientError>;
    async fn delete_item(&self, id: i64) -> Result<(), ClientError>;
    async fn create(&self, prescription: &NewPrescription) -> Result<Prescription, ClientError>;
    async fn update(
        &self,
        id: i64,
        prescription: &NewPrescription,
    ) -> Result<Prescription, ClientError>;
}

/// Join fetched prescriptions against the doctor/patient directories for
/// the listing screen. Tolerates both flat-id and nested-object response
/// shapes; dangling references render as "N/A".
pub fn enrich_prescriptions(
    prescriptions: &[Prescription],
    doctors: &[Doctor],
    patients: &[Patient],
) -> Vec<PrescriptionListing> {
    prescriptions
        .iter()
        .map(|prescription| {
            let doctor_name = prescription
                .resolved_doctor_id()
                .and_then(|id| doctors.iter().find(|d| d.id == id))
                .map(|d| d.name.clone())
                .unwrap_or_else(|| "N/A".to_string());
            let patient_name = prescription
                .resolved_patient_id()
                .and_then(|id| patients.iter().find(|p| p.id == id))
                .map(|p| p.full_name())
                .unwrap_or_else(|| "N/A".to_string());
            PrescriptionListing {
                id: prescription.id,
                patient_name,
                doctor_name,
                notes: prescription.notes.clone().unwrap_or_default(),
            }
        })
        .collect()
}
