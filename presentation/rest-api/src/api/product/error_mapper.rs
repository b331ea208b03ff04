use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ProductError::InvalidId => (StatusCode::BAD_REQUEST, "ValidationError"),
            ProductError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
            // Record validation only happens during load; seeing one here is a server fault.
            ProductError::InvalidRecord
            | ProductError::MissingField(_)
            | ProductError::InvalidField(_)
            | ProductError::TitleEmpty
            | ProductError::NegativePrice
            | ProductError::NegativeStock => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.to_string(),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_invalid_id_to_bad_request() {
        let (status, json) = ProductError::InvalidId.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.name, "ValidationError");
        assert_eq!(json.0.message, "product.invalid_id");
    }

    #[test]
    fn should_map_repository_error_to_internal_error() {
        let (status, json) =
            ProductError::Repository(RepositoryError::SourceUnavailable).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.name, "InternalError");
        assert_eq!(json.0.message, "repository.persistence");
    }
}
