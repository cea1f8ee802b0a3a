//! Mapping of backend errors onto HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use mergington::data::ErrorDetail;
use mergington::errors::DirectoryError;
use mergington::log;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error("Missing required query parameter: {0}")]
    MissingQuery(&'static str),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Directory(DirectoryError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Directory(DirectoryError::AlreadySignedUp { .. })
            | ApiError::Directory(DirectoryError::NotSignedUp { .. }) => StatusCode::BAD_REQUEST,
            ApiError::MissingQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Directory(err) => {
                log::debug!("Rejecting request for {} with {}: {}", err.activity(), status, err)
            }
            ApiError::MissingQuery(param) => {
                log::debug!("Rejecting request with {}: missing {}", status, param)
            }
        }

        let body = Json(ErrorDetail {
            detail: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        let not_found: ApiError = DirectoryError::NotFound {
            activity: "Chess".into(),
        }
        .into();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.to_string(), "Activity not found");

        let duplicate: ApiError = DirectoryError::AlreadySignedUp {
            activity: "Chess".into(),
            email: "a@mergington.edu".into(),
        }
        .into();
        assert_eq!(duplicate.status(), StatusCode::BAD_REQUEST);

        let absent: ApiError = DirectoryError::NotSignedUp {
            activity: "Chess".into(),
            email: "a@mergington.edu".into(),
        }
        .into();
        assert_eq!(absent.status(), StatusCode::BAD_REQUEST);

        assert_eq!(
            ApiError::MissingQuery("email").status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[tokio::test]
    async fn renders_detail_body() {
        let response = ApiError::from(DirectoryError::NotFound {
            activity: "Chess".into(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorDetail = mergington::serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.detail, "Activity not found");
    }
}
