//! Case board: the list of OPEN cases lawyers browse, and the per-profile
//! case lists.

use std::cmp::Reverse;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entities::{Case, Specialty};
use crate::enums::CaseStatus;
use crate::errors::CoreError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseSort {
    #[default]
    Newest,
    Oldest,
    Relevance,
}

impl FromStr for CaseSort {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "relevance" => Ok(Self::Relevance),
            other => Err(CoreError::validation(format!("unknown sort '{other}'"))),
        }
    }
}

/// Filters for the available-cases board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseQuery {
    /// Case-insensitive substring of title or description.
    pub search: Option<String>,
    /// Case-insensitive substring of the specialty's display name or code.
    pub specialty: Option<String>,
    pub sort: CaseSort,
}

impl CaseQuery {
    fn needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// Title hits weigh 2, description hits 1.
    fn score(case: &Case, needle: Option<&str>) -> u8 {
        needle.map_or(0, |n| {
            u8::from(case.title.to_lowercase().contains(n)) * 2
                + u8::from(case.description.to_lowercase().contains(n))
        })
    }

    fn matches_specialty(&self, case: &Case, catalog: &[Specialty]) -> bool {
        let Some(wanted) = self
            .specialty
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
        else {
            return true;
        };
        let Some(specialty) = case
            .specialty_id
            .and_then(|id| catalog.iter().find(|s| s.id == id))
        else {
            return false;
        };
        specialty.display_name().to_lowercase().contains(&wanted)
            || specialty.name.to_lowercase().contains(&wanted)
    }

    /// OPEN cases that match the query, in the requested order.
    #[must_use]
    pub fn apply(&self, cases: Vec<Case>, catalog: &[Specialty]) -> Vec<Case> {
        let needle = self.needle();
        let mut matched: Vec<Case> = cases
            .into_iter()
            .filter(|c| c.status == CaseStatus::Open)
            .filter(|c| needle.as_deref().is_none_or(|n| Self::score(c, Some(n)) > 0))
            .filter(|c| self.matches_specialty(c, catalog))
            .collect();

        match self.sort {
            CaseSort::Newest => matched.sort_by_key(|c| Reverse(c.created_at)),
            CaseSort::Oldest => matched.sort_by_key(|c| c.created_at),
            CaseSort::Relevance => {
                matched.sort_by_key(|c| Reverse(Self::score(c, needle.as_deref())));
            }
        }
        matched
    }
}

/// Which side of a case a profile sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseParty {
    Client,
    Lawyer,
}

/// Cases a profile owns (client) or is assigned to (lawyer), newest first.
#[must_use]
pub fn cases_for_profile(cases: Vec<Case>, user_id: &str, party: CaseParty) -> Vec<Case> {
    let mut mine: Vec<Case> = cases
        .into_iter()
        .filter(|c| match party {
            CaseParty::Client => c.is_owned_by(user_id),
            CaseParty::Lawyer => c.is_assigned_to(user_id),
        })
        .collect();
    mine.sort_by_key(|c| Reverse(c.created_at));
    mine
}
