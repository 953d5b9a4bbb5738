//! Case detail workflow.
//!
//! [`CaseDetail`] gathers everything one case's collaboration surface shows
//! and drives the status-dependent actions. It never infers state after a
//! write: every action re-fetches what it may have changed.

use std::collections::HashMap;

use lexa_core::entities::{Application, Case, Comment, Document, Message};
use lexa_core::enums::CaseStatus;
use lexa_core::errors::CoreError;
use lexa_core::permissions::{
    CasePermissions, Viewer, can_apply, can_review_application, can_view_case,
};
use lexa_core::requests::CreateCaseRequest;
use lexa_core::timeline::{TimelineEvent, TimelineSources, build_timeline};
use lexa_core::validation::{FileCandidate, validate_new_case, validate_upload};

use crate::documents::LocalFile;
use crate::resolver::ProfileResolver;
use crate::{ApiClient, ApiError};

/// One case with its sub-resources and resolved party names.
#[derive(Debug, Clone)]
pub struct CaseDetail {
    pub case: Case,
    pub viewer: Viewer,
    pub applications: Vec<Application>,
    pub documents: Vec<Document>,
    pub comments: Vec<Comment>,
    pub messages: Vec<Message>,
    pub names: HashMap<String, String>,
    pub permissions: CasePermissions,
}

fn or_empty<T>(
    fetched: Result<Vec<T>, ApiError>,
    what: &str,
    case_id: &str,
) -> Result<Vec<T>, ApiError> {
    match fetched {
        Ok(items) => Ok(items),
        Err(ApiError::Unauthorized) => Err(ApiError::Unauthorized),
        Err(error) => {
            tracing::warn!(case = case_id, %error, "could not load case {what}; showing none");
            Ok(Vec::new())
        }
    }
}

impl CaseDetail {
    /// Fetch a case for the signed-in viewer.
    ///
    /// Applications are only fetched while they matter: in EVALUATION (for
    /// review) and ACCEPTED (for the timeline).
    ///
    /// # Errors
    ///
    /// - [`ApiError::Auth`] when nobody is signed in
    /// - [`ApiError::Validation`] wrapping `Forbidden` when the viewer may
    ///   not see this case
    /// - any error fetching the case or its applications; documents,
    ///   comments and messages are best-effort
    pub async fn load(client: &ApiClient, case_id: &str) -> Result<Self, ApiError> {
        let viewer = client.session().require_viewer()?;
        let case = client.get_case(case_id).await?;
        can_view_case(&viewer, &case)?;

        let mut detail = Self {
            permissions: CasePermissions::for_viewer(&viewer, &case),
            case,
            viewer,
            applications: Vec::new(),
            documents: Vec::new(),
            comments: Vec::new(),
            messages: Vec::new(),
            names: HashMap::new(),
        };
        detail.reload_applications(client).await?;
        detail.reload_sub_resources(client).await?;
        detail.resolve_names(client).await?;
        Ok(detail)
    }

    /// Documents, comments and messages. A failed fetch leaves that list
    /// empty; only a 401 aborts.
    async fn reload_sub_resources(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        let case_id = self.case.id.as_str();
        self.documents = or_empty(client.documents_by_case(case_id).await, "documents", case_id)?;
        self.comments = or_empty(client.comments_by_case(case_id).await, "comments", case_id)?;
        self.messages = or_empty(client.messages_by_case(case_id).await, "messages", case_id)?;
        Ok(())
    }

    async fn reload_case(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        self.case = client.get_case(&self.case.id).await?;
        self.permissions = CasePermissions::for_viewer(&self.viewer, &self.case);
        Ok(())
    }

    async fn reload_applications(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        self.applications = if matches!(
            self.case.status,
            CaseStatus::Evaluation | CaseStatus::Accepted
        ) {
            client.applications_by_case(&self.case.id).await?
        } else {
            Vec::new()
        };
        Ok(())
    }

    async fn resolve_names(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        let mut resolver = ProfileResolver::new(client);
        if !self.applications.is_empty() {
            match client.list_lawyers().await {
                Ok(lawyers) => resolver.prime_lawyers(&lawyers),
                Err(ApiError::Unauthorized) => return Err(ApiError::Unauthorized),
                Err(error) => tracing::debug!(%error, "lawyer directory unavailable"),
            }
        }
        let ids: Vec<String> = std::iter::once(self.case.client_id.clone())
            .chain(self.case.assigned_lawyer_id.clone())
            .chain(self.applications.iter().map(|a| a.lawyer_id.clone()))
            .chain(self.documents.iter().map(|d| d.uploaded_by.clone()))
            .chain(self.comments.iter().map(|c| c.author_id.clone()))
            .chain(self.messages.iter().map(|m| m.sender_id.clone()))
            .filter(|id| !self.names.contains_key(id))
            .collect();
        let resolved = resolver.resolve_many(ids.iter().map(String::as_str)).await?;
        self.names.extend(resolved);
        Ok(())
    }

    /// Reload everything, keeping names already resolved.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying requests.
    pub async fn refresh(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        self.reload_case(client).await?;
        can_view_case(&self.viewer, &self.case)?;
        self.reload_applications(client).await?;
        self.reload_sub_resources(client).await?;
        self.resolve_names(client).await
    }

    #[must_use]
    pub fn display_name(&self, user_id: &str) -> Option<&str> {
        self.names.get(user_id).map(String::as_str)
    }

    /// Applications the viewer may accept or reject right now.
    pub fn reviewable_applications(&self) -> impl Iterator<Item = &Application> {
        self.applications
            .iter()
            .filter(|a| can_review_application(&self.viewer, &self.case, a))
    }

    #[must_use]
    pub fn timeline(&self) -> Vec<TimelineEvent> {
        build_timeline(
            TimelineSources {
                case: &self.case,
                applications: &self.applications,
                documents: &self.documents,
                comments: &self.comments,
            },
            |id| self.names.get(id).cloned(),
        )
    }

    /// Apply to this case as the signed-in lawyer, then re-fetch the case.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when applying is not offered or the
    /// message is blank; no request is made in either case.
    pub async fn submit_application(
        &mut self,
        client: &ApiClient,
        message: &str,
    ) -> Result<Application, ApiError> {
        if !can_apply(&self.viewer, &self.case, false) {
            return Err(CoreError::Forbidden(format!(
                "applications are only accepted on unassigned OPEN cases (case is {})",
                self.case.status
            ))
            .into());
        }
        let application = client
            .submit_application(&self.case.id, &self.viewer.user_id, message)
            .await?;
        self.reload_case(client).await?;
        Ok(application)
    }

    fn reviewable(&self, application_id: &str) -> Result<(), ApiError> {
        let application = self
            .applications
            .iter()
            .find(|a| a.id == application_id)
            .ok_or_else(|| CoreError::NotFound {
                entity_type: "application".into(),
                id: application_id.to_string(),
            })?;
        if can_review_application(&self.viewer, &self.case, application) {
            Ok(())
        } else {
            Err(CoreError::Forbidden(format!(
                "application {application_id} cannot be reviewed (case {}, application {})",
                self.case.status, application.status
            ))
            .into())
        }
    }

    /// Accept an application, then re-fetch the case and its applications.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when the application is unknown or
    /// not reviewable, or the server's error.
    pub async fn accept_application(
        &mut self,
        client: &ApiClient,
        application_id: &str,
    ) -> Result<(), ApiError> {
        self.reviewable(application_id)?;
        client
            .accept_application(application_id, &self.viewer.user_id)
            .await?;
        self.reload_case(client).await?;
        self.reload_applications(client).await?;
        self.resolve_names(client).await
    }

    /// Reject an application, then re-fetch the applications.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when the application is unknown or
    /// not reviewable, or the server's error.
    pub async fn reject_application(
        &mut self,
        client: &ApiClient,
        application_id: &str,
    ) -> Result<(), ApiError> {
        self.reviewable(application_id)?;
        client
            .reject_application(application_id, &self.viewer.user_id)
            .await?;
        self.reload_applications(client).await
    }
}

/// New case form with attachments.
#[derive(Debug, Clone)]
pub struct NewCase {
    pub title: String,
    pub description: String,
    pub specialty_id: Option<i64>,
    pub files: Vec<LocalFile>,
}

/// Outcome of [`create_case_with_documents`]. The case exists even when
/// some uploads failed.
#[derive(Debug)]
pub struct CreatedCase {
    pub case: Case,
    pub uploaded: Vec<Document>,
    pub failed: Vec<(FileCandidate, ApiError)>,
}

/// Create a case, then upload its files one by one, continuing past
/// individual failures.
///
/// # Errors
///
/// Returns an error only if the case itself could not be created (missing
/// fields, not signed in, or the server refused).
pub async fn create_case_with_documents(
    client: &ApiClient,
    new_case: NewCase,
) -> Result<CreatedCase, ApiError> {
    let user = client.session().require_user()?;
    let specialty_id = validate_new_case(
        &new_case.title,
        &new_case.description,
        new_case.specialty_id,
    )?;

    let case = client
        .create_case(&CreateCaseRequest {
            title: new_case.title.trim().to_string(),
            description: new_case.description.trim().to_string(),
            client_id: user.id.clone(),
            specialty_id,
        })
        .await?;
    tracing::info!(case = %case.id, files = new_case.files.len(), "case created");

    let mut uploaded = Vec::new();
    let mut failed: Vec<(FileCandidate, ApiError)> = Vec::new();
    for file in new_case.files {
        if let Err(error) = validate_upload(&file.candidate) {
            failed.push((file.candidate, error.into()));
            continue;
        }
        match client.upload_document(&case, &user.id, &file).await {
            Ok(doc) => uploaded.push(doc),
            Err(error @ ApiError::Unauthorized) => return Err(error),
            Err(error) => {
                tracing::warn!(file = %file.candidate.filename, %error, "upload failed; continuing");
                failed.push((file.candidate, error));
            }
        }
    }

    Ok(CreatedCase {
        case,
        uploaded,
        failed,
    })
}
