//! Prescription and prescription-item endpoints.

use crate::error::ClientError;
use crate::models::{
    Doctor, MedicalItem, NewPrescription, Patient, Prescription, PrescriptionItem,
    PrescriptionItemPayload,
};
use crate::prescriptions::PrescriptionBackend;

use super::ApiClient;

/// Everything the prescription form needs at open: the medication catalog
/// plus both participant directories.
#[derive(Debug, Clone)]
pub struct PrescriptionFormData {
    pub medical_items: Vec<MedicalItem>,
    pub doctors: Vec<Doctor>,
    pub patients: Vec<Patient>,
}

impl ApiClient {
    pub async fn list_prescriptions(&self) -> Result<Vec<Prescription>, ClientError> {
        self.get_json("/api/prescriptions").await
    }

    pub async fn get_prescription(&self, id: i64) -> Result<Prescription, ClientError> {
        self.get_json(&format!("/api/prescriptions/{id}")).await
    }

    pub async fn create_prescription(
        &self,
        prescription: &NewPrescription,
    ) -> Result<Prescription, ClientError> {
        self.post_json("/api/prescriptions", prescription).await
    }

    pub async fn update_prescription(
        &self,
        id: i64,
        prescription: &NewPrescription,
    ) -> Result<Prescription, ClientError> {
        self.put_json(&format!("/api/prescriptions/{id}"), prescription)
            .await
    }

    pub async fn delete_prescription(&self, id: i64) -> Result<(), ClientError> {
        self.delete(&format!("/api/prescriptions/{id}")).await
    }

    pub async fn list_prescription_items(
        &self,
        prescription_id: i64,
    ) -> Result<Vec<PrescriptionItem>, ClientError> {
        self.get_json(&format!(
            "/api/prescription-items/prescription/{prescription_id}"
        ))
        .await
    }

    pub async fn get_prescription_item(&self, id: i64) -> Result<PrescriptionItem, ClientError> {
        self.get_json(&format!("/api/prescription-items/{id}")).await
    }

    pub async fn create_prescription_item(
        &self,
        payload: &PrescriptionItemPayload,
    ) -> Result<PrescriptionItem, ClientError> {
        self.post_json("/api/prescription-items", payload).await
    }

    pub async fn update_prescription_item(
        &self,
        id: i64,
        payload: &PrescriptionItemPayload,
    ) -> Result<PrescriptionItem, ClientError> {
        self.put_json(&format!("/api/prescription-items/{id}"), payload)
            .await
    }

    pub async fn delete_prescription_item(&self, id: i64) -> Result<(), ClientError> {
        self.delete(&format!("/api/prescription-items/{id}")).await
    }

    /// Joint fetch for the prescription form. The three lists populate
    /// disjoint state; no ordering is required between them.
    pub async fn load_prescription_form(&self) -> Result<PrescriptionFormData, ClientError> {
        let (medical_items, doctors, patients) = tokio::try_join!(
            self.list_medical_items(),
            self.list_doctors(),
            self.list_patients()
        )?;
        Ok(PrescriptionFormData {
            medical_items,
            doctors,
            patients,
        })
    }

    /// Joint fetch of a persisted prescription and its items for edit mode.
    pub async fn load_prescription_for_edit(
        &self,
        id: i64,
    ) -> Result<(Prescription, Vec<PrescriptionItem>), ClientError> {
        tokio::try_join!(self.get_prescription(id), self.list_prescription_items(id))
    }
}

impl PrescriptionBackend for ApiClient {
    async fn create_item(
        &self,
        payload: &PrescriptionItemPayload,
    ) -> Result<PrescriptionItem, ClientError> {
        self.create_prescription_item(payload).await
    }

    async fn delete_item(&self, id: i64) -> Result<(), ClientError> {
        self.delete_prescription_item(id).await
    }

    async fn create(&self, prescription: &NewPrescription) -> Result<Prescription, ClientError> {
        self.create_prescription(prescription).await
    }

    async fn update(
        &self,
        id: i64,
        prescription: &NewPrescription,
    ) -> Result<Prescription, ClientError> {
        self.update_prescription(id, prescription).await
    }
}
