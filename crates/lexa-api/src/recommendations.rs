//! Home-screen recommendation feed.
//!
//! Lawyers page through suggested cases and express interest by applying
//! with a stock message. Clients page through lawyers they have not yet
//! invited to their active case and invite them.

use lexa_core::entities::{Application, Case, Invitation, LawyerProfile};
use lexa_core::enums::Role;
use lexa_core::feed::{
    Feed, INTEREST_MESSAGE, exclude_invited, invitation_message, select_active_case,
};
use lexa_core::permissions::Viewer;

use crate::{ApiClient, ApiError};

/// Candidates for the signed-in viewer.
#[derive(Debug, Clone)]
pub enum FeedItems {
    /// Suggested OPEN cases for a lawyer.
    Cases(Feed<Case>),
    /// Lawyers to invite to the client's active case.
    Lawyers { case: Case, feed: Feed<LawyerProfile> },
    /// Nothing to recommend: a client with no cases, or an admin.
    Empty,
}

/// What accepting the current candidate produced.
#[derive(Debug, Clone)]
pub enum Accepted {
    Application(Application),
    Invitation(Invitation),
}

/// Load the feed for `viewer`.
///
/// # Errors
///
/// Returns any error from the underlying requests.
pub async fn load_feed(client: &ApiClient, viewer: &Viewer) -> Result<FeedItems, ApiError> {
    match viewer.role {
        Role::Lawyer => {
            let cases = client.suggested_cases(&viewer.user_id).await?;
            tracing::debug!(count = cases.len(), "suggested cases loaded");
            Ok(FeedItems::Cases(Feed::new(cases)))
        }
        Role::Client => {
            let cases = client.cases_by_client(&viewer.user_id).await?;
            let Some(case) = select_active_case(&cases).cloned() else {
                return Ok(FeedItems::Empty);
            };
            let lawyers = client.list_lawyers().await?;
            let invitations = client.invitations_by_case(&case.id).await?;
            let candidates = exclude_invited(lawyers, &invitations);
            tracing::debug!(case = %case.id, count = candidates.len(), "recommended lawyers loaded");
            Ok(FeedItems::Lawyers {
                case,
                feed: Feed::new(candidates),
            })
        }
        Role::Admin => Ok(FeedItems::Empty),
    }
}

impl FeedItems {
    #[must_use]
    pub fn remaining(&self) -> usize {
        match self {
            Self::Cases(feed) => feed.remaining(),
            Self::Lawyers { feed, .. } => feed.remaining(),
            Self::Empty => 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Pass on the current candidate. Nothing is sent.
    pub fn skip(&mut self) {
        match self {
            Self::Cases(feed) => feed.skip(),
            Self::Lawyers { feed, .. } => feed.skip(),
            Self::Empty => {}
        }
    }

    /// Act on the current candidate and drop it from the feed.
    ///
    /// A lawyer applies to the case; a client invites the lawyer. On error
    /// the candidate stays current so the action can be retried.
    ///
    /// # Errors
    ///
    /// Returns any error from the application or invitation request.
    pub async fn accept(
        &mut self,
        client: &ApiClient,
        viewer: &Viewer,
    ) -> Result<Option<Accepted>, ApiError> {
        let accepted = match self {
            Self::Cases(feed) => {
                let Some(case) = feed.current() else {
                    return Ok(None);
                };
                let application = client
                    .submit_application(&case.id, &viewer.user_id, INTEREST_MESSAGE)
                    .await?;
                feed.take_current();
                Accepted::Application(application)
            }
            Self::Lawyers { case, feed } => {
                let Some(lawyer) = feed.current() else {
                    return Ok(None);
                };
                let invitation = client
                    .invite_lawyer(&case.id, &lawyer.user_id, &invitation_message(&case.title))
                    .await?;
                feed.take_current();
                Accepted::Invitation(invitation)
            }
            Self::Empty => return Ok(None),
        };
        Ok(Some(accepted))
    }
}
