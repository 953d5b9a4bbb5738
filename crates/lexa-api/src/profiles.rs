//! Lawyer and client profiles, and the specialty catalog.

use lexa_core::entities::{ClientProfile, LawyerProfile, Specialty};
use lexa_core::requests::{
    CreateClientRequest, CreateLawyerRequest, UpdateClientProfileRequest,
    UpdateLawyerProfileRequest, UpdateSpecialtiesRequest,
};
use lexa_core::validation::validate_profile_fields;

use crate::http::segment;
use crate::{ApiClient, ApiError};

impl ApiClient {
    // ── Lawyers ────────────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when name or DNI is missing, or the
    /// server's error.
    pub async fn create_lawyer(
        &self,
        request: &CreateLawyerRequest,
    ) -> Result<LawyerProfile, ApiError> {
        validate_profile_fields(&request.firstname, &request.lastname, &request.dni)?;
        self.post_json("/api/v1/lawyers", request).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_lawyers(&self) -> Result<Vec<LawyerProfile>, ApiError> {
        self.get_json("/api/v1/lawyers").await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when the user has no lawyer profile.
    pub async fn lawyer_by_user(&self, user_id: &str) -> Result<LawyerProfile, ApiError> {
        self.get_json(&format!("/api/v1/lawyers/{}", segment(user_id)))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when name or DNI is missing, or the
    /// server's error.
    pub async fn update_lawyer(
        &self,
        user_id: &str,
        request: &UpdateLawyerProfileRequest,
    ) -> Result<LawyerProfile, ApiError> {
        validate_profile_fields(&request.firstname, &request.lastname, &request.dni)?;
        self.put_json(&format!("/api/v1/lawyers/{}", segment(user_id)), request)
            .await
    }

    /// Replace a lawyer's specialty codes.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the server refuses.
    pub async fn update_lawyer_specialties(
        &self,
        user_id: &str,
        specialties: Vec<String>,
    ) -> Result<LawyerProfile, ApiError> {
        self.put_json(
            &format!("/api/v1/lawyers/{}/specialties", segment(user_id)),
            &UpdateSpecialtiesRequest { specialties },
        )
        .await
    }

    // ── Clients ────────────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when name or DNI is missing, or the
    /// server's error.
    pub async fn create_client(
        &self,
        request: &CreateClientRequest,
    ) -> Result<ClientProfile, ApiError> {
        validate_profile_fields(&request.firstname, &request.lastname, &request.dni)?;
        self.post_json("/api/v1/clients", request).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_clients(&self) -> Result<Vec<ClientProfile>, ApiError> {
        self.get_json("/api/v1/clients").await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when the user has no client profile.
    pub async fn client_by_user(&self, user_id: &str) -> Result<ClientProfile, ApiError> {
        self.get_json(&format!("/api/v1/clients/{}", segment(user_id)))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when name or DNI is missing, or the
    /// server's error.
    pub async fn update_client(
        &self,
        user_id: &str,
        request: &UpdateClientProfileRequest,
    ) -> Result<ClientProfile, ApiError> {
        validate_profile_fields(&request.firstname, &request.lastname, &request.dni)?;
        self.put_json(&format!("/api/v1/clients/{}", segment(user_id)), request)
            .await
    }

    // ── Specialties ────────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_specialties(&self) -> Result<Vec<Specialty>, ApiError> {
        self.get_json("/api/v1/lawyer-specialties").await
    }
}
