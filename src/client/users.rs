//! User administration endpoints (super admin screens).

use serde::Serialize;

use crate::error::ClientError;
use crate::models::{Role, User};

use super::ApiClient;

#[derive(Debug, Serialize)]
struct ApprovePayload {
    approved: bool,
}

#[derive(Debug, Serialize)]
struct RolePayload {
    role: Role,
}

impl ApiClient {
    /// List users by approval state (`?approved=true|false`).
    pub async fn list_users(&self, approved: bool) -> Result<Vec<User>, ClientError> {
        self.get_json(&format!("/api/users?approved={approved}")).await
    }

    /// Joint fetch of approved and pending users for the management screen.
    pub async fn load_user_directory(&self) -> Result<(Vec<User>, Vec<User>), ClientError> {
        tokio::try_join!(self.list_users(true), self.list_users(false))
    }

    pub async fn approve_user(&self, user_id: i64) -> Result<(), ClientError> {
        self.patch_json_unit(
            &format!("/api/users/{user_id}/approve"),
            &ApprovePayload { approved: true },
        )
        .await
    }

    /// Rejection and deletion share the backend's delete route.
    pub async fn delete_user(&self, user_id: i64) -> Result<(), ClientError> {
        self.delete(&format!("/api/users/{user_id}")).await
    }

    pub async fn change_user_role(&self, user_id: i64, role: Role) -> Result<(), ClientError> {
        self.put_json_unit(&format!("/api/users/{user_id}/role"), &RolePayload { role })
            .await
    }
}
