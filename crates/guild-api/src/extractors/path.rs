//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::response::ApiError;

/// Character name taken from the `:name` path segment, percent-decoded
///
/// Trimming and length checks happen in the services.
#[derive(Debug, Clone)]
pub struct NamePath(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for NamePath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(name) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        Ok(NamePath(name))
    }
}
