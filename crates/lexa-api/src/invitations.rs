//! Invitation endpoints (client → lawyer solicitations).

use lexa_core::entities::Invitation;
use lexa_core::requests::InviteLawyerRequest;
use lexa_core::validation::validate_message;

use crate::http::{segment, with_query};
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a blank message, or the server's error.
    pub async fn invite_lawyer(
        &self,
        case_id: &str,
        lawyer_id: &str,
        message: &str,
    ) -> Result<Invitation, ApiError> {
        let message = validate_message("message", message)?;
        let body = InviteLawyerRequest {
            case_id: case_id.to_string(),
            lawyer_id: lawyer_id.to_string(),
            message: message.to_string(),
        };
        self.post_json("/api/v1/invitations", &body).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn invitations_by_case(&self, case_id: &str) -> Result<Vec<Invitation>, ApiError> {
        self.get_json(&with_query("/api/v1/invitations/case", &[("caseId", case_id)]))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn invitations_by_lawyer(
        &self,
        lawyer_id: &str,
    ) -> Result<Vec<Invitation>, ApiError> {
        self.get_json(&with_query(
            "/api/v1/invitations/lawyer",
            &[("lawyerId", lawyer_id)],
        ))
        .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the server refuses.
    pub async fn accept_invitation(&self, invitation_id: &str) -> Result<Invitation, ApiError> {
        self.put_empty(&format!(
            "/api/v1/invitations/{}/accept",
            segment(invitation_id)
        ))
        .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the server refuses.
    pub async fn reject_invitation(&self, invitation_id: &str) -> Result<Invitation, ApiError> {
        self.put_empty(&format!(
            "/api/v1/invitations/{}/reject",
            segment(invitation_id)
        ))
        .await
    }
}
