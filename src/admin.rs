//! User-management screen logic: normalization, super-admin filtering,
//! search, and sorting. All pure; the endpoints live in `client::users`.

use crate::models::{Role, User};

/// Display-ready account row with the backend's optional fields filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub roles: Vec<String>,
    pub approved: bool,
}

impl DirectoryUser {
    /// Role shown in the row's picker (first backend role).
    pub fn primary_role(&self) -> Option<&str> {
        self.roles.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Username,
    Email,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Column sort state. Tapping the active column flips direction; tapping
/// another column restarts ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            key: SortKey::Username,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortConfig {
    pub fn toggle(self, key: SortKey) -> Self {
        let direction = if self.key == key && self.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        Self { key, direction }
    }
}

/// Fill in missing optional fields so the screen never renders nulls.
pub fn normalize_user(user: User) -> DirectoryUser {
    DirectoryUser {
        id: user.id,
        username: user.username.unwrap_or_default(),
        email: user.email.unwrap_or_default(),
        roles: user.roles.unwrap_or_default(),
        approved: user.approved.unwrap_or(false),
    }
}

/// Normalize a fetched list, dropping super-admin accounts — they are never
/// managed from this screen.
pub fn prepare_directory(users: Vec<User>) -> Vec<DirectoryUser> {
    users
        .into_iter()
        .map(normalize_user)
        .filter(|user| !user.roles.iter().any(|r| r == Role::SuperAdmin.as_str()))
        .collect()
}

/// Case-insensitive substring match over username and email.
pub fn search(users: &[DirectoryUser], term: &str) -> Vec<DirectoryUser> {
    let needle = term.to_lowercase();
    users
        .iter()
        .filter(|user| {
            user.username.to_lowercase().contains(&needle)
                || user.email.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Stable sort by the configured column.
pub fn sort(users: &mut [DirectoryUser], config: SortConfig) {
    users.sort_by(|a, b| {
        let ordering = match config.key {
            SortKey::Username => a.username.cmp(&b.username),
            SortKey::Email => a.email.cmp(&b.email),
        };
        match config.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}
