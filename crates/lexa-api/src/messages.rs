//! Case chat messages.

use lexa_core::entities::Message;
use lexa_core::requests::SendMessageRequest;
use lexa_core::validation::validate_message;

use crate::http::{segment, with_query};
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a blank message, or the server's error.
    pub async fn send_message(
        &self,
        case_id: &str,
        sender_id: &str,
        content: &str,
    ) -> Result<Message, ApiError> {
        let content = validate_message("message", content)?;
        let path = with_query(
            &format!("/api/v1/cases/{}/messages", segment(case_id)),
            &[("senderId", sender_id)],
        );
        self.post_json(
            &path,
            &SendMessageRequest {
                content: content.to_string(),
            },
        )
        .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn messages_by_case(&self, case_id: &str) -> Result<Vec<Message>, ApiError> {
        self.get_json(&format!("/api/v1/cases/{}/messages", segment(case_id)))
            .await
    }
}
