//! One-at-a-time recommendation feed for the home screen.
//!
//! Lawyers page through suggested cases, clients through lawyers they have
//! not yet invited to their active case. Skips live only in memory for the
//! current session.

use std::collections::HashSet;

use crate::entities::{Case, Invitation, LawyerProfile};
use crate::enums::CaseStatus;

/// Cover message sent when a lawyer accepts a suggested case.
pub const INTEREST_MESSAGE: &str = "Estoy interesado en este caso";

/// Invitation text sent when a client accepts a recommended lawyer.
#[must_use]
pub fn invitation_message(case_title: &str) -> String {
    format!("Nos gustaría que revises el caso \"{case_title}\".")
}

/// Session-scoped list of candidates. The head is always the one on display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed<T> {
    items: Vec<T>,
}

impl<T> Feed<T> {
    #[must_use]
    pub const fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.items.first()
    }

    /// Drop the current candidate without acting on it.
    pub fn skip(&mut self) {
        drop(self.take_current());
    }

    /// Remove and return the current candidate, e.g. after it was accepted.
    pub fn take_current(&mut self) -> Option<T> {
        (!self.items.is_empty()).then(|| self.items.remove(0))
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

/// The case a client is currently recruiting for: the first OPEN or
/// EVALUATION case, else the first case at all.
#[must_use]
pub fn select_active_case(cases: &[Case]) -> Option<&Case> {
    cases
        .iter()
        .find(|c| matches!(c.status, CaseStatus::Open | CaseStatus::Evaluation))
        .or_else(|| cases.first())
}

/// Lawyers who have no invitation yet for the case the invitations belong to.
#[must_use]
pub fn exclude_invited(lawyers: Vec<LawyerProfile>, invitations: &[Invitation]) -> Vec<LawyerProfile> {
    let invited: HashSet<&str> = invitations.iter().map(|i| i.lawyer_id.as_str()).collect();
    lawyers
        .into_iter()
        .filter(|l| !invited.contains(l.user_id.as_str()))
        .collect()
}
