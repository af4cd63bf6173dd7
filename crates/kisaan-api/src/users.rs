//! User endpoints.

use kisaan_core::entities::{NewUser, User, UserCreated};

use crate::{ApiClient, error::ApiError, http};

impl ApiClient {
    /// `POST /api/users`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the server rejects the payload.
    pub async fn create_user(&self, user: &NewUser) -> Result<UserCreated, ApiError> {
        http::decode(self.post("/api/users", user).await?).await
    }

    /// `GET /api/users/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`]; an unknown user is `ApiError::Api { status: 404, .. }`.
    pub async fn get_user(&self, id: i64) -> Result<User, ApiError> {
        http::decode(self.get(&format!("/api/users/{id}")).await?).await
    }
}
