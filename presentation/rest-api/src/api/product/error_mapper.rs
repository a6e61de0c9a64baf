use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::NameLength => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.name_length",
            ),
            ProductError::DescriptionLength => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.description_length",
            ),
            ProductError::CategoryLength => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.category_length",
            ),
            ProductError::PriceOutOfRange => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.price_out_of_range",
            ),
            ProductError::QuantityOutOfRange => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.quantity_out_of_range",
            ),
            ProductError::CreatedDateInFuture => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.created_date_in_future",
            ),
            ProductError::ExpiryDateInPast => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.expiry_date_in_past",
            ),
            ProductError::NotFound(_) => {
                (StatusCode::NOT_FOUND, "NotFound", "product.not_found")
            }
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
            ProductError::Cache(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "cache.operation",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
