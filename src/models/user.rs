use serde::{Deserialize, Serialize};

use super::Role;

/// Registered account as returned by the user-administration endpoints.
/// Username/email/roles can be missing on partially-created accounts; the
/// admin workflow normalizes them before display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub roles: Option<Vec<String>>,
    #[serde(default)]
    pub approved: Option<bool>,
}

/// Registration payload. The confirm-password field never leaves the client.
#[derive(Debug, Clone, Serialize)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl Default for SignupForm {
    fn default() -> Self {
        // Signup screen pre-selects the Admin account type.
        Self {
            username: String::new(),
            email: String::new(),
            password: String::new(),
            role: Role::Admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerates_sparse_backend_rows() {
        let user: User = serde_json::from_str(r#"{"id":12}"#).unwrap();
        assert!(user.username.is_none());
        assert!(user.roles.is_none());
    }

    #[test]
    fn signup_form_serializes_wire_role() {
        let form = SignupForm {
            username: "dr_rao".into(),
            email: "rao@example.com".into(),
            password: "longenough".into(),
            role: Role::Doctor,
        };
        let json = serde_json::to_string(&form).unwrap();
        assert!(json.contains("\"role\":\"DOCTOR\""));
    }
}
