//! Role gate: pure mapping from the session's role to what the shell may
//! show. There is no state machine here beyond logged-out / logged-in;
//! every answer is a function of the current role alone.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::models::Role;
use crate::session::Session;

// ═══════════════════════════════════════════════════════════
// Capabilities
// ═══════════════════════════════════════════════════════════

/// Navigation destinations the drawer can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavTarget {
    Login,
    Signup,
    Patients,
    Doctors,
    Appointments,
    Prescriptions,
    MedicalInventory,
    UserManagement,
}

/// Per-screen action buttons gated by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    EditRecord,
    DeleteRecord,
    CreatePrescription,
    EditPrescription,
    DeletePrescription,
    ManageInventory,
    ManageUsers,
}

/// Drawer entries visible for a role. Unauthenticated users only see the
/// auth screens; any signed-in role gets the four record screens; super
/// admins additionally get inventory and user management.
pub fn visible_nav(role: Option<Role>) -> BTreeSet<NavTarget> {
    let mut nav = BTreeSet::new();
    match role {
        None => {
            nav.insert(NavTarget::Login);
            nav.insert(NavTarget::Signup);
        }
        Some(role) => {
            nav.insert(NavTarget::Patients);
            nav.insert(NavTarget::Doctors);
            nav.insert(NavTarget::Appointments);
            nav.insert(NavTarget::Prescriptions);
            if role == Role::SuperAdmin {
                nav.insert(NavTarget::MedicalInventory);
                nav.insert(NavTarget::UserManagement);
            }
        }
    }
    nav
}

/// Action buttons enabled for a role.
pub fn allowed_actions(role: Option<Role>) -> BTreeSet<Action> {
    let mut actions = BTreeSet::new();
    let Some(role) = role else {
        return actions;
    };
    if matches!(role, Role::SuperAdmin | Role::Admin) {
        actions.insert(Action::EditRecord);
    }
    if role == Role::SuperAdmin {
        actions.insert(Action::DeleteRecord);
        actions.insert(Action::ManageInventory);
        actions.insert(Action::ManageUsers);
    }
    if role == Role::Doctor {
        actions.insert(Action::CreatePrescription);
        actions.insert(Action::EditPrescription);
        actions.insert(Action::DeletePrescription);
    }
    actions
}

/// Convenience check used by list screens.
pub fn can(role: Option<Role>, action: Action) -> bool {
    allowed_actions(role).contains(&action)
}

// ═══════════════════════════════════════════════════════════
// Route guard
// ═══════════════════════════════════════════════════════════

/// Outcome of guarding a protected screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Grant,
    /// No usable session: send the user to Login.
    RedirectToLogin,
    /// Authenticated but the role is not on the screen's allow list.
    RedirectToRoleCheck,
}

/// Screen-level guard: a missing session or role falls back to Login, a
/// known role outside `allowed_roles` goes to the role-check screen.
pub fn guard_route(session: Option<&Session>, allowed_roles: &[Role]) -> RouteDecision {
    let Some(session) = session else {
        return RouteDecision::RedirectToLogin;
    };
    let Some(role) = session.role else {
        return RouteDecision::RedirectToLogin;
    };
    if allowed_roles.contains(&role) {
        RouteDecision::Grant
    } else {
        RouteDecision::RedirectToRoleCheck
    }
}
