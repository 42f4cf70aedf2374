//! Prescription draft composer.
//!
//! Maintains the ordered item list behind the prescription form and
//! enforces the stock invariant: cumulative drafted quantity per medical
//! item never exceeds that item's known stock. In edit mode (persisted
//! prescription) item adds and removes are synced to the backend
//! immediately; in create mode the whole draft stays local until submit.

use crate::error::ClientError;
use crate::models::{
    MedicalItem, NewPrescription, Prescription, PrescriptionItem, PrescriptionItemPayload,
};

use super::{
    PrescriptionBackend, DEFAULT_DOSAGE, DEFAULT_DURATION, DEFAULT_FREQUENCY, DEFAULT_TIMING,
};

// ═══════════════════════════════════════════════════════════
// Types
// ═══════════════════════════════════════════════════════════

/// Errors surfaced inline on the prescription form.
#[derive(Debug, thiserror::Error)]
pub enum ComposerError {
    #[error("Please select a medication")]
    MedicationNotSelected,

    #[error("Selected medication not found")]
    UnknownMedication,

    #[error("Quantity must be at least 1")]
    ZeroQuantity,

    /// The add would push the cumulative drafted quantity past the item's
    /// known stock. `available` is what can still be requested.
    #[error("Insufficient stock. Only {available} available")]
    InsufficientStock { available: u32 },

    #[error("At least one medication is required")]
    NoItems,

    #[error("No draft item at index {0}")]
    NoSuchItem(usize),

    #[error("Patient must be selected")]
    MissingPatient,

    #[error("Doctor must be selected")]
    MissingDoctor,

    #[error(transparent)]
    Backend(#[from] ClientError),
}

/// Item entry form state. Field defaults match the form's pre-filled
/// values; the same defaults are re-substituted at submit for any field
/// the user blanked out.
#[derive(Debug, Clone)]
pub struct NewItemInput {
    pub medical_item_id: Option<i64>,
    pub quantity: u32,
    pub dosage: String,
    pub frequency: String,
    pub timing: String,
    pub duration: String,
}

impl Default for NewItemInput {
    fn default() -> Self {
        Self {
            medical_item_id: None,
            quantity: 1,
            dosage: DEFAULT_DOSAGE.into(),
            frequency: DEFAULT_FREQUENCY.into(),
            timing: DEFAULT_TIMING.into(),
            duration: DEFAULT_DURATION.into(),
        }
    }
}

/// One row of the draft. `id` is present only for items already persisted
/// on the backend (edit mode).
#[derive(Debug, Clone)]
pub struct DraftItem {
    pub id: Option<i64>,
    pub medical_item_id: i64,
    pub quantity: u32,
    pub dosage: String,
    pub frequency: String,
    pub timing: String,
    pub duration: String,
    /// Catalog name resolved at add/load time for display.
    pub medical_item_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ComposerMode {
    Create,
    Edit { prescription_id: i64 },
}

// ═══════════════════════════════════════════════════════════
// PrescriptionComposer
// ═══════════════════════════════════════════════════════════

pub struct PrescriptionComposer {
    mode: ComposerMode,
    patient_id: Option<i64>,
    doctor_id: Option<i64>,
    notes: String,
    items: Vec<DraftItem>,
    catalog: Vec<MedicalItem>,
}

impl PrescriptionComposer {
    /// Fresh draft for a new prescription.
    pub fn new(catalog: Vec<MedicalItem>) -> Self {
        Self {
            mode: ComposerMode::Create,
            patient_id: None,
            doctor_id: None,
            notes: String::new(),
            items: Vec::new(),
            catalog,
        }
    }

    /// Composer over a persisted prescription and its already-saved items.
    /// Items referencing medications missing from the catalog display as
    /// "Unknown".
    pub fn edit(
        prescription: &Prescription,
        persisted_items: Vec<PrescriptionItem>,
        catalog: Vec<MedicalItem>,
    ) -> Self {
        let items = persisted_items
            .into_iter()
            .map(|item| {
                let name = catalog
                    .iter()
                    .find(|m| m.id == item.medical_item_id)
                    .map(|m| m.name.clone())
                    .unwrap_or_else(|| "Unknown".to_string());
                DraftItem {
                    id: item.id,
                    medical_item_id: item.medical_item_id,
                    quantity: item.quantity,
                    dosage: item.dosage,
                    frequency: item.frequency,
                    timing: item.timing,
                    duration: item.duration,
                    medical_item_name: name,
                }
            })
            .collect();

        Self {
            mode: ComposerMode::Edit {
                prescription_id: prescription.id,
            },
            patient_id: prescription.resolved_patient_id(),
            doctor_id: prescription.resolved_doctor_id(),
            notes: prescription.notes.clone().unwrap_or_default(),
            items,
            catalog,
        }
    }

    // ── Form state ───────────────────────────────────────

    pub fn set_patient(&mut self, patient_id: i64) {
        self.patient_id = Some(patient_id);
    }

    pub fn set_doctor(&mut self, doctor_id: i64) {
        self.doctor_id = Some(doctor_id);
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    pub fn items(&self) -> &[DraftItem] {
        &self.items
    }

    pub fn is_edit_mode(&self) -> bool {
        matches!(self.mode, ComposerMode::Edit { .. })
    }

    /// Cumulative drafted quantity for one medical item.
    pub fn drafted_quantity(&self, medical_item_id: i64) -> u32 {
        self.items
            .iter()
            .filter(|item| item.medical_item_id == medical_item_id)
            .map(|item| item.quantity)
            .sum()
    }

    // ── Item operations ──────────────────────────────────

    /// Add a draft item, enforcing the stock invariant. On failure the
    /// draft list is left unchanged. In edit mode a successful add is
    /// persisted immediately and the stored id kept for later removal.
    pub async fn add_item<B: PrescriptionBackend>(
        &mut self,
        backend: &B,
        input: NewItemInput,
    ) -> Result<(), ComposerError> {
        let medical_item_id = input
            .medical_item_id
            .ok_or(ComposerError::MedicationNotSelected)?;
        let selected = self
            .catalog
            .iter()
            .find(|item| item.id == medical_item_id)
            .ok_or(ComposerError::UnknownMedication)?;

        if input.quantity == 0 {
            return Err(ComposerError::ZeroQuantity);
        }

        let already_drafted = self.drafted_quantity(medical_item_id);
        if selected.current_stock < already_drafted + input.quantity {
            return Err(ComposerError::InsufficientStock {
                available: selected.current_stock.saturating_sub(already_drafted),
            });
        }
        let name = selected.name.clone();

        match self.mode {
            ComposerMode::Edit { prescription_id } => {
                let payload = PrescriptionItemPayload {
                    medical_item_id,
                    quantity: input.quantity,
                    dosage: input.dosage,
                    frequency: input.frequency,
                    timing: input.timing,
                    duration: input.duration,
                    prescription_id: Some(prescription_id),
                };
                let stored = backend.create_item(&payload).await?;
                self.items.push(DraftItem {
                    id: stored.id,
                    medical_item_id: stored.medical_item_id,
                    quantity: stored.quantity,
                    dosage: stored.dosage,
                    frequency: stored.frequency,
                    timing: stored.timing,
                    duration: stored.duration,
                    medical_item_name: name,
                });
            }
            ComposerMode::Create => {
                self.items.push(DraftItem {
                    id: None,
                    medical_item_id,
                    quantity: input.quantity,
                    dosage: input.dosage,
                    frequency: input.frequency,
                    timing: input.timing,
                    duration: input.duration,
                    medical_item_name: name,
                });
            }
        }
        Ok(())
    }

    /// Remove a draft item. A persisted item is deleted remotely first;
    /// local state only changes after that call succeeds. Purely local
    /// items never touch the network.
    pub async fn remove_item<B: PrescriptionBackend>(
        &mut self,
        backend: &B,
        index: usize,
    ) -> Result<(), ComposerError> {
        let item = self
            .items
            .get(index)
            .ok_or(ComposerError::NoSuchItem(index))?;

        if let Some(item_id) = item.id {
            backend.delete_item(item_id).await?;
        }
        self.items.remove(index);
        Ok(())
    }

    /// Submit the draft. An empty draft fails before any backend call.
    /// Optional item fields left blank get the form defaults; ids go out
    /// as integers.
    pub async fn submit<B: PrescriptionBackend>(
        &self,
        backend: &B,
    ) -> Result<Prescription, ComposerError> {
        if self.items.is_empty() {
            return Err(ComposerError::NoItems);
        }
        let patient_id = self.patient_id.ok_or(ComposerError::MissingPatient)?;
        let doctor_id = self.doctor_id.ok_or(ComposerError::MissingDoctor)?;

        let payload = NewPrescription {
            patient_id,
            doctor_id,
            notes: self.notes.clone(),
            items: self
                .items
                .iter()
                .map(|item| PrescriptionItemPayload {
                    medical_item_id: item.medical_item_id,
                    quantity: item.quantity,
                    dosage: or_default(&item.dosage, DEFAULT_DOSAGE),
                    frequency: or_default(&item.frequency, DEFAULT_FREQUENCY),
                    timing: or_default(&item.timing, DEFAULT_TIMING),
                    duration: or_default(&item.duration, DEFAULT_DURATION),
                    prescription_id: None,
                })
                .collect(),
        };

        let stored = match self.mode {
            ComposerMode::Edit { prescription_id } => {
                backend.update(prescription_id, &payload).await?
            }
            ComposerMode::Create => backend.create(&payload).await?,
        };
        Ok(stored)
    }
}

fn or_default(value: &str, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
