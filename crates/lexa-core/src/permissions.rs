//! Advisory permission guards for the case detail surface.
//!
//! These only decide what the client offers to do. The marketplace API
//! re-verifies authorization on every call and stays the real boundary.

use serde::Serialize;

use crate::entities::{Application, Case};
use crate::enums::{ApplicationStatus, CaseStatus, Role};
use crate::errors::CoreError;

/// The signed-in user as seen by the guards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    pub user_id: String,
    pub role: Role,
}

impl Viewer {
    #[must_use]
    pub fn new(user_id: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            role,
        }
    }

    #[must_use]
    pub fn is_lawyer(&self) -> bool {
        self.role == Role::Lawyer
    }

    #[must_use]
    pub fn is_client(&self) -> bool {
        self.role == Role::Client
    }
}

/// Clients see their own cases; lawyers see OPEN cases and those assigned
/// to them; admins see everything.
///
/// # Errors
///
/// Returns [`CoreError::Forbidden`] naming the reason access is refused.
pub fn can_view_case(viewer: &Viewer, case: &Case) -> Result<(), CoreError> {
    match viewer.role {
        Role::Admin => Ok(()),
        Role::Client if case.is_owned_by(&viewer.user_id) => Ok(()),
        Role::Client => Err(CoreError::forbidden("not your case")),
        Role::Lawyer if case.status == CaseStatus::Open => Ok(()),
        Role::Lawyer if case.is_assigned_to(&viewer.user_id) => Ok(()),
        Role::Lawyer => Err(CoreError::forbidden("assigned to another lawyer")),
    }
}

/// Uploads are allowed in every non-terminal state.
#[must_use]
pub const fn can_upload(case: &Case) -> bool {
    case.status.accepts_uploads()
}

#[must_use]
pub fn can_apply(viewer: &Viewer, case: &Case, form_open: bool) -> bool {
    viewer.is_lawyer()
        && case.status == CaseStatus::Open
        && !case.has_assigned_lawyer()
        && !form_open
}

#[must_use]
pub fn can_review_application(viewer: &Viewer, case: &Case, application: &Application) -> bool {
    viewer.is_client()
        && case.is_owned_by(&viewer.user_id)
        && case.status == CaseStatus::Evaluation
        && application.status == ApplicationStatus::Submitted
}

/// Whether the owning client may move the case to `target`
/// (`CLOSED` or `CANCELED`).
#[must_use]
pub fn can_close_or_cancel(viewer: &Viewer, case: &Case, target: CaseStatus) -> bool {
    matches!(target, CaseStatus::Closed | CaseStatus::Canceled)
        && viewer.is_client()
        && case.is_owned_by(&viewer.user_id)
        && case.status.can_transition_to(target)
}

/// Flags the case views render from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CasePermissions {
    pub can_upload: bool,
    pub can_apply: bool,
    pub can_review_applications: bool,
    pub can_close: bool,
    pub can_cancel: bool,
    pub can_comment: bool,
}

impl CasePermissions {
    #[must_use]
    pub fn for_viewer(viewer: &Viewer, case: &Case) -> Self {
        let party = case.is_owned_by(&viewer.user_id)
            || case.is_assigned_to(&viewer.user_id)
            || viewer.role == Role::Admin;
        Self {
            can_upload: can_upload(case),
            can_apply: can_apply(viewer, case, false),
            can_review_applications: viewer.is_client()
                && case.is_owned_by(&viewer.user_id)
                && case.status == CaseStatus::Evaluation,
            can_close: can_close_or_cancel(viewer, case, CaseStatus::Closed),
            can_cancel: can_close_or_cancel(viewer, case, CaseStatus::Canceled),
            can_comment: party && !case.status.is_terminal(),
        }
    }
}
