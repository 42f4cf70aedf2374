//! Client-side required-field validation for the entry forms.
//!
//! Every create screen validates locally before any request is sent; a
//! non-clean [`FieldErrors`] blocks submission and is rendered inline next
//! to the offending field by the shell.

use crate::models::{NewAppointment, NewDoctor, NewPatient, Role, SignupForm};

// ═══════════════════════════════════════════════════════════
// FieldErrors
// ═══════════════════════════════════════════════════════════

/// Ordered field → message map. Insertion order matches form layout so the
/// shell can surface the first error next to the first offending field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(&'static str, String)>);

impl FieldErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push((field, message.into()));
    }

    /// Message for a specific field, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn is_clean(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|(field, msg)| format!("{field}: {msg}"))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{joined}")
    }
}

fn require(errors: &mut FieldErrors, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.push(field, message);
    }
}

// ═══════════════════════════════════════════════════════════
// Form validators
// ═══════════════════════════════════════════════════════════

/// Add Patient form: every field is required.
pub fn validate_patient(patient: &NewPatient) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require(
        &mut errors,
        "firstName",
        &patient.first_name,
        "FirstName must not be empty",
    );
    require(
        &mut errors,
        "lastName",
        &patient.last_name,
        "LastName must not be empty",
    );
    require(&mut errors, "phone", &patient.phone, "Phone no must not be empty");
    require(
        &mut errors,
        "address",
        &patient.address,
        "Address must not be empty",
    );
    require(
        &mut errors,
        "gender",
        &patient.gender,
        "Gender must not be empty",
    );
    errors
}

/// Add Doctor form: every field is required.
pub fn validate_doctor(doctor: &NewDoctor) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require(&mut errors, "name", &doctor.name, "Name must not be empty");
    require(
        &mut errors,
        "phone",
        &doctor.phone,
        "Phone number must not be empty",
    );
    require(
        &mut errors,
        "gender",
        &doctor.gender,
        "Gender must not be empty",
    );
    require(
        &mut errors,
        "available",
        &doctor.available,
        "Availability must not be empty",
    );
    errors
}

/// Add Appointment form: time plus both participant selections.
pub fn validate_appointment(appointment: &NewAppointment) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require(
        &mut errors,
        "appointmentTime",
        &appointment.appointment_time,
        "Appointment time must not be empty",
    );
    if appointment.doctor_id.is_none() {
        errors.push("doctorId", "Doctor must be selected");
    }
    if appointment.patient_id.is_none() {
        errors.push("patientId", "Patient must be selected");
    }
    errors
}

/// Signup form: length minimums, matching passwords, and a role the signup
/// screen actually offers (super admin accounts are never self-registered).
pub fn validate_signup(form: &SignupForm, confirm_password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if form.username.trim().len() < 3 {
        errors.push("username", "Username must be at least 3 characters");
    }
    if !form.email.contains('@') {
        errors.push("email", "Email must be a valid address");
    }
    if form.password.len() < 8 {
        errors.push("password", "Password must be at least 8 characters");
    }
    if form.password != confirm_password {
        errors.push("confirmPassword", "Passwords don't match");
    }
    if form.role == Role::SuperAdmin {
        errors.push("role", "Account type must be Admin, Doctor or Patient");
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_patient() -> NewPatient {
        NewPatient {
            first_name: "Asha".into(),
            last_name: "Rao".into(),
            phone: "5550100".into(),
            address: "12 Hill Road".into(),
            gender: "female".into(),
        }
    }

    #[test]
    fn complete_patient_is_clean() {
        assert!(validate_patient(&full_patient()).is_clean());
    }

    #[test]
    fn empty_patient_flags_every_field() {
        let errors = validate_patient(&NewPatient::default());
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get("firstName"), Some("FirstName must not be empty"));
        assert_eq!(errors.get("gender"), Some("Gender must not be empty"));
    }

    #[test]
    fn whitespace_only_field_is_rejected() {
        let mut patient = full_patient();
        patient.address = "   ".into();
        let errors = validate_patient(&patient);
        assert_eq!(errors.len(), 1);
        assert!(errors.get("address").is_some());
    }

    #[test]
    fn doctor_requires_all_fields() {
        let errors = validate_doctor(&NewDoctor::default());
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get("phone"), Some("Phone number must not be empty"));
    }

    #[test]
    fn appointment_requires_participants() {
        let errors = validate_appointment(&NewAppointment {
            appointment_time: "2026-09-01T10:30".into(),
            doctor_id: None,
            patient_id: Some(4),
        });
        assert_eq!(errors.len(), 1);
        assert!(errors.get("doctorId").is_some());
    }

    #[test]
    fn signup_rejects_short_password_and_mismatch() {
        let form = SignupForm {
            username: "priya".into(),
            email: "priya@example.com".into(),
            password: "short".into(),
            role: Role::Doctor,
        };
        let errors = validate_signup(&form, "different");
        assert!(errors.get("password").is_some());
        assert!(errors.get("confirmPassword").is_some());
    }

    #[test]
    fn signup_rejects_super_admin_role() {
        let form = SignupForm {
            username: "priya".into(),
            email: "priya@example.com".into(),
            password: "longenough".into(),
            role: Role::SuperAdmin,
        };
        let errors = validate_signup(&form, "longenough");
        assert_eq!(errors.len(), 1);
        assert!(errors.get("role").is_some());
    }

    #[test]
    fn clean_signup_passes() {
        let form = SignupForm {
            username: "priya".into(),
            email: "priya@example.com".into(),
            password: "longenough".into(),
            role: Role::Patient,
        };
        assert!(validate_signup(&form, "longenough").is_clean());
    }

    #[test]
    fn field_errors_display_joins_entries() {
        let mut errors = FieldErrors::new();
        errors.push("name", "Name must not be empty");
        errors.push("phone", "Phone number must not be empty");
        let rendered = errors.to_string();
        assert!(rendered.contains("name: Name must not be empty"));
        assert!(rendered.contains("; phone:"));
    }
}
