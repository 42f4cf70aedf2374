use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Account role, gating feature visibility across the app.
///
/// Wire form is the backend's SCREAMING_SNAKE spelling. An absent role means
/// the user is unauthenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SuperAdmin,
    Admin,
    Doctor,
    Patient,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::SuperAdmin, Role::Admin, Role::Doctor, Role::Patient];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "SUPER_ADMIN",
            Self::Admin => "ADMIN",
            Self::Doctor => "DOCTOR",
            Self::Patient => "PATIENT",
        }
    }

    /// Parse a backend role string, tolerating stray whitespace and
    /// lowercase spellings (the backend is not consistent about either).
    pub fn parse_lenient(s: &str) -> Result<Self, ClientError> {
        let normalized = s.trim().to_uppercase();
        match normalized.as_str() {
            "SUPER_ADMIN" => Ok(Self::SuperAdmin),
            "ADMIN" => Ok(Self::Admin),
            "DOCTOR" => Ok(Self::Doctor),
            "PATIENT" => Ok(Self::Patient),
            _ => Err(ClientError::InvalidEnum {
                field: "Role".into(),
                value: s.into(),
            }),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUPER_ADMIN" => Ok(Self::SuperAdmin),
            "ADMIN" => Ok(Self::Admin),
            "DOCTOR" => Ok(Self::Doctor),
            "PATIENT" => Ok(Self::Patient),
            _ => Err(ClientError::InvalidEnum {
                field: "Role".into(),
                value: s.into(),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
