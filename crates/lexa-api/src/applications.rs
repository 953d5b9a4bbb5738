//! Application endpoints (lawyer → case proposals).

use lexa_core::entities::Application;
use lexa_core::requests::SubmitApplicationRequest;
use lexa_core::validation::validate_message;

use crate::http::{segment, with_query};
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// Submit a cover message for a case. Blank messages never leave the
    /// process.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a blank message, or the server's
    /// error (e.g. a duplicate pending application).
    pub async fn submit_application(
        &self,
        case_id: &str,
        lawyer_id: &str,
        message: &str,
    ) -> Result<Application, ApiError> {
        let message = validate_message("message", message)?;
        let body = SubmitApplicationRequest {
            case_id: case_id.to_string(),
            lawyer_id: lawyer_id.to_string(),
            message: message.to_string(),
        };
        self.post_json("/api/v1/applications", &body).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_applications(&self) -> Result<Vec<Application>, ApiError> {
        self.get_json("/api/v1/applications").await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn applications_by_case(&self, case_id: &str) -> Result<Vec<Application>, ApiError> {
        self.get_json(&with_query("/api/v1/applications", &[("caseId", case_id)]))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn applications_by_lawyer(
        &self,
        lawyer_id: &str,
    ) -> Result<Vec<Application>, ApiError> {
        self.get_json(&with_query(
            "/api/v1/applications/lawyer",
            &[("lawyerId", lawyer_id)],
        ))
        .await
    }

    /// Accept an application. The server moves the case to ACCEPTED and
    /// assigns the lawyer; callers should re-fetch rather than infer that.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the server refuses.
    pub async fn accept_application(
        &self,
        application_id: &str,
        client_id: &str,
    ) -> Result<Application, ApiError> {
        self.put_empty(&with_query(
            &format!("/api/v1/applications/{}/accept", segment(application_id)),
            &[("clientId", client_id)],
        ))
        .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the server refuses.
    pub async fn reject_application(
        &self,
        application_id: &str,
        client_id: &str,
    ) -> Result<Application, ApiError> {
        self.put_empty(&with_query(
            &format!("/api/v1/applications/{}/reject", segment(application_id)),
            &[("clientId", client_id)],
        ))
        .await
    }
}
