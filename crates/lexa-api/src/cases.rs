//! Case endpoints.

use lexa_core::entities::Case;
use lexa_core::enums::CaseStatus;
use lexa_core::requests::CreateCaseRequest;

use crate::http::{segment, with_query};
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the server refuses it.
    pub async fn create_case(&self, request: &CreateCaseRequest) -> Result<Case, ApiError> {
        self.post_json("/api/v1/cases", request).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_cases(&self) -> Result<Vec<Case>, ApiError> {
        self.get_json("/api/v1/cases").await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown id.
    pub async fn get_case(&self, case_id: &str) -> Result<Case, ApiError> {
        self.get_json(&format!("/api/v1/cases/{}", segment(case_id)))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn cases_by_client(&self, client_id: &str) -> Result<Vec<Case>, ApiError> {
        self.get_json(&format!("/api/v1/cases/clients/{}", segment(client_id)))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn cases_by_lawyer(&self, lawyer_id: &str) -> Result<Vec<Case>, ApiError> {
        self.get_json(&format!("/api/v1/cases/lawyer/{}", segment(lawyer_id)))
            .await
    }

    /// Server-side matches for a lawyer.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn suggested_cases(&self, lawyer_id: &str) -> Result<Vec<Case>, ApiError> {
        self.get_json(&with_query(
            "/api/v1/cases/suggested",
            &[("lawyerId", lawyer_id)],
        ))
        .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn cases_by_status(&self, status: CaseStatus) -> Result<Vec<Case>, ApiError> {
        self.get_json(&with_query(
            "/api/v1/cases/status",
            &[("status", status.as_str())],
        ))
        .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the server refuses the transition.
    pub async fn close_case(&self, case_id: &str, client_id: &str) -> Result<Case, ApiError> {
        self.put_empty(&with_query(
            &format!("/api/v1/cases/{}/close", segment(case_id)),
            &[("clientId", client_id)],
        ))
        .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the server refuses the transition.
    pub async fn cancel_case(&self, case_id: &str, client_id: &str) -> Result<Case, ApiError> {
        self.put_empty(&with_query(
            &format!("/api/v1/cases/{}/cancel", segment(case_id)),
            &[("clientId", client_id)],
        ))
        .await
    }
}
