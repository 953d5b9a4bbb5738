//! Comment endpoints. General and final comments post to separate paths.

use lexa_core::entities::Comment;
use lexa_core::enums::CommentType;
use lexa_core::requests::CreateCommentRequest;
use lexa_core::validation::validate_message;

use crate::http::with_query;
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for blank content, or the server's error.
    pub async fn add_comment(
        &self,
        case_id: &str,
        author_id: &str,
        content: &str,
        comment_type: CommentType,
    ) -> Result<Comment, ApiError> {
        let content = validate_message("comment", content)?;
        let body = CreateCommentRequest {
            case_id: case_id.to_string(),
            author_id: author_id.to_string(),
            content: content.to_string(),
            comment_type,
        };
        let path = format!("/api/v1/comments/{}", comment_type.endpoint_segment());
        self.post_json(&path, &body).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn comments_by_case(&self, case_id: &str) -> Result<Vec<Comment>, ApiError> {
        self.get_json(&with_query("/api/v1/comments", &[("caseId", case_id)]))
            .await
    }
}
