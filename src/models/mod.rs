pub mod appointment;
pub mod doctor;
pub mod enums;
pub mod medical_item;
pub mod patient;
pub mod prescription;
pub mod user;

pub use appointment::{Appointment, NewAppointment};
pub use doctor::{Doctor, NewDoctor};
pub use enums::Role;
pub use medical_item::{ImageUpload, MedicalItem, NewMedicalItem};
pub use patient::{NewPatient, Patient};
pub use prescription::{
    NewPrescription, PartyRef, Prescription, PrescriptionItem, PrescriptionItemPayload,
    PrescriptionListing,
};
pub use user::{SignupForm, User};
