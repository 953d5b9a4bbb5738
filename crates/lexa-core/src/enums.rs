//! Roles, status enums, and comment kinds for Lexa.
//!
//! Statuses serialize exactly as the marketplace API emits them
//! (`SCREAMING_SNAKE_CASE`). Status enums with state machines provide
//! `allowed_next_states()` so the client can hide actions the server would
//! refuse anyway. The server remains the authority on every transition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Account role as carried in the `roles` array of an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Role {
    #[serde(rename = "ROLE_CLIENT")]
    Client,
    #[serde(rename = "ROLE_LAWYER")]
    Lawyer,
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Client => "ROLE_CLIENT",
            Self::Lawyer => "ROLE_LAWYER",
            Self::Admin => "ROLE_ADMIN",
        }
    }

    /// The role that drives the UI: the first recognised entry, or `Client`
    /// when the list is empty or unrecognised.
    #[must_use]
    pub fn primary<S: AsRef<str>>(roles: &[S]) -> Self {
        roles
            .iter()
            .find_map(|raw| raw.as_ref().parse().ok())
            .unwrap_or(Self::Client)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    /// Accepts both the wire form (`ROLE_LAWYER`) and the short form (`lawyer`).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_uppercase();
        let short = normalized.strip_prefix("ROLE_").unwrap_or(&normalized);
        match short {
            "CLIENT" => Ok(Self::Client),
            "LAWYER" => Ok(Self::Lawyer),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(CoreError::validation(format!("unknown role '{raw}'"))),
        }
    }
}

// ---------------------------------------------------------------------------
// CaseStatus
// ---------------------------------------------------------------------------

/// Status of a case through its lifecycle.
///
/// ```text
/// OPEN → EVALUATION → ACCEPTED → CLOSED
///   ↘        ↘           ↘
///            CANCELED
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaseStatus {
    Open,
    Evaluation,
    Accepted,
    Closed,
    Canceled,
}

impl CaseStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Open => &[Self::Evaluation, Self::Canceled],
            Self::Evaluation => &[Self::Accepted, Self::Canceled],
            Self::Accepted => &[Self::Closed, Self::Canceled],
            Self::Closed | Self::Canceled => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Closed | Self::Canceled)
    }

    /// Documents may be attached in every non-terminal state, ACCEPTED
    /// included, since the case is still being followed up.
    #[must_use]
    pub const fn accepts_uploads(self) -> bool {
        !self.is_terminal()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Evaluation => "EVALUATION",
            Self::Accepted => "ACCEPTED",
            Self::Closed => "CLOSED",
            Self::Canceled => "CANCELED",
        }
    }

    /// Human-facing label, in the marketplace's locale.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Abierto",
            Self::Evaluation => "En evaluación",
            Self::Accepted => "Aceptado",
            Self::Closed => "Cerrado",
            Self::Canceled => "Cancelado",
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ApplicationStatus
// ---------------------------------------------------------------------------

/// Status of a lawyer's application to a case.
///
/// ```text
/// SUBMITTED → ACCEPTED
///           → REJECTED
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Submitted,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Submitted => &[Self::Accepted, Self::Rejected],
            Self::Accepted | Self::Rejected => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Submitted)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Submitted => "SUBMITTED",
            Self::Accepted => "ACCEPTED",
            Self::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// InvitationStatus
// ---------------------------------------------------------------------------

/// Status of a client's invitation to a lawyer.
///
/// ```text
/// PENDING → ACCEPTED
///         → REJECTED
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl InvitationStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Accepted, Self::Rejected],
            Self::Accepted | Self::Rejected => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Accepted => "ACCEPTED",
            Self::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for InvitationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CommentType
// ---------------------------------------------------------------------------

/// Kind of comment attached to a case.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommentType {
    #[default]
    General,
    Final,
}

impl CommentType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "GENERAL",
            Self::Final => "FINAL",
        }
    }

    /// Path segment of the creation endpoint (`/api/v1/comments/{segment}`).
    #[must_use]
    pub const fn endpoint_segment(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Final => "final",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::General => "Comentario general",
            Self::Final => "Comentario final",
        }
    }
}

impl fmt::Display for CommentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Specialty names
// ---------------------------------------------------------------------------

const SPECIALTY_NAMES: &[(&str, &str)] = &[
    ("CRIMINAL_LAW", "Derecho Penal"),
    ("CIVIL_LITIGATION", "Derecho Civil"),
    ("LABOR_LAW", "Derecho Laboral"),
    ("FAMILY_LAW", "Derecho de Familia"),
    ("CORPORATE_LAW", "Derecho Corporativo"),
    ("TAX_LAW", "Derecho Tributario"),
    ("IMMIGRATION_LAW", "Derecho Migratorio"),
    ("REAL_ESTATE_LAW", "Derecho Inmobiliario"),
    ("INTELLECTUAL_PROPERTY", "Propiedad Intelectual"),
    ("ENVIRONMENTAL_LAW", "Derecho Ambiental"),
    ("EMPLOYMENT_LAW", "Derecho Laboral"),
    ("BANKRUPTCY_LAW", "Derecho Concursal"),
    ("PERSONAL_INJURY", "Daños Personales"),
    ("MEDICAL_MALPRACTICE", "Mala Praxis Médica"),
    ("ESTATE_PLANNING", "Planificación Patrimonial"),
    ("ELDER_LAW", "Derecho de la Tercera Edad"),
    ("CONSTITUTIONAL_LAW", "Derecho Constitucional"),
    ("INTERNATIONAL_LAW", "Derecho Internacional"),
    ("SECURITIES_LAW", "Derecho de Valores"),
    ("CONSUMER_PROTECTION", "Protección al Consumidor"),
    ("CONTRACT_LAW", "Derecho Contractual"),
    ("EDUCATION_LAW", "Derecho Educativo"),
    ("ENTERTAINMENT_LAW", "Derecho del Entretenimiento"),
    ("SPORTS_LAW", "Derecho Deportivo"),
    ("MILITARY_LAW", "Derecho Militar"),
    ("ADMINISTRATIVE_LAW", "Derecho Administrativo"),
    ("HEALTHCARE_LAW", "Derecho Sanitario"),
    ("INSURANCE_LAW", "Derecho de Seguros"),
    ("CONSTRUCTION_LAW", "Derecho de la Construcción"),
    ("MARITIME_LAW", "Derecho Marítimo"),
    ("HUMAN_RIGHTS_LAW", "Derechos Humanos"),
    ("SOCIAL_SECURITY_LAW", "Derecho de la Seguridad Social"),
    ("PRODUCT_LIABILITY", "Responsabilidad de Productos"),
    ("MUNICIPAL_LAW", "Derecho Municipal"),
    ("AGRICULTURAL_LAW", "Derecho Agrario"),
    ("CYBER_LAW", "Derecho Cibernético"),
    ("DATA_PRIVACY_LAW", "Derecho de Protección de Datos"),
    ("AVIATION_LAW", "Derecho Aeronáutico"),
    ("ANIMAL_LAW", "Derecho Animal"),
];

/// Display name for a specialty code such as `CRIMINAL_LAW`.
/// Unknown codes are returned unchanged.
#[must_use]
pub fn specialty_display_name(code: &str) -> &str {
    SPECIALTY_NAMES
        .iter()
        .find(|(key, _)| *key == code)
        .map_or(code, |(_, name)| name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(role_lawyer, Role, Role::Lawyer, "ROLE_LAWYER");
    test_serde_roundtrip!(case_evaluation, CaseStatus, CaseStatus::Evaluation, "EVALUATION");
    test_serde_roundtrip!(case_canceled, CaseStatus, CaseStatus::Canceled, "CANCELED");
    test_serde_roundtrip!(
        application_submitted,
        ApplicationStatus,
        ApplicationStatus::Submitted,
        "SUBMITTED"
    );
    test_serde_roundtrip!(
        invitation_pending,
        InvitationStatus,
        InvitationStatus::Pending,
        "PENDING"
    );
    test_serde_roundtrip!(comment_final, CommentType, CommentType::Final, "FINAL");

    // --- Role parsing ---

    #[test]
    fn role_parses_wire_and_short_forms() {
        assert_eq!("ROLE_LAWYER".parse::<Role>().unwrap(), Role::Lawyer);
        assert_eq!("lawyer".parse::<Role>().unwrap(), Role::Lawyer);
        assert_eq!(" Admin ".parse::<Role>().unwrap(), Role::Admin);
        assert!("ROLE_JUDGE".parse::<Role>().is_err());
    }

    #[test]
    fn primary_role_defaults_to_client() {
        let empty: [&str; 0] = [];
        assert_eq!(Role::primary(&empty), Role::Client);
        assert_eq!(Role::primary(&["ROLE_UNKNOWN"]), Role::Client);
        assert_eq!(Role::primary(&["ROLE_LAWYER", "ROLE_CLIENT"]), Role::Lawyer);
    }

    // --- Transition tests ---

    #[test]
    fn case_happy_path_transitions() {
        assert!(CaseStatus::Open.can_transition_to(CaseStatus::Evaluation));
        assert!(CaseStatus::Evaluation.can_transition_to(CaseStatus::Accepted));
        assert!(CaseStatus::Accepted.can_transition_to(CaseStatus::Closed));
    }

    #[test]
    fn case_cancel_reachable_from_non_terminal_states() {
        for status in [CaseStatus::Open, CaseStatus::Evaluation, CaseStatus::Accepted] {
            assert!(status.can_transition_to(CaseStatus::Canceled), "{status}");
        }
    }

    #[test]
    fn case_transitions_are_monotonic() {
        assert!(!CaseStatus::Evaluation.can_transition_to(CaseStatus::Open));
        assert!(!CaseStatus::Accepted.can_transition_to(CaseStatus::Evaluation));
        assert!(!CaseStatus::Open.can_transition_to(CaseStatus::Closed));
        assert!(CaseStatus::Closed.allowed_next_states().is_empty());
        assert!(CaseStatus::Canceled.allowed_next_states().is_empty());
    }

    #[test]
    fn uploads_blocked_only_in_terminal_states() {
        assert!(CaseStatus::Open.accepts_uploads());
        assert!(CaseStatus::Evaluation.accepts_uploads());
        assert!(CaseStatus::Accepted.accepts_uploads());
        assert!(!CaseStatus::Closed.accepts_uploads());
        assert!(!CaseStatus::Canceled.accepts_uploads());
    }

    #[test]
    fn application_and_invitation_transitions() {
        assert!(ApplicationStatus::Submitted.can_transition_to(ApplicationStatus::Accepted));
        assert!(ApplicationStatus::Submitted.can_transition_to(ApplicationStatus::Rejected));
        assert!(!ApplicationStatus::Rejected.can_transition_to(ApplicationStatus::Accepted));
        assert!(InvitationStatus::Pending.can_transition_to(InvitationStatus::Rejected));
        assert!(InvitationStatus::Accepted.allowed_next_states().is_empty());
    }

    #[test]
    fn comment_endpoint_segments() {
        assert_eq!(CommentType::General.endpoint_segment(), "general");
        assert_eq!(CommentType::Final.endpoint_segment(), "final");
    }

    #[test]
    fn specialty_names_translate_known_codes() {
        assert_eq!(specialty_display_name("FAMILY_LAW"), "Derecho de Familia");
        assert_eq!(specialty_display_name("SPACE_LAW"), "SPACE_LAW");
    }
}
