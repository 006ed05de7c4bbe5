//! Error handling for the Sanabel Bakery inventory backend
//!
//! Provides consistent error responses in English and Arabic

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::Serialize;
use shared::ledger::LedgerError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_ar: String,
    },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Duplicate id for {0}")]
    DuplicateId(String),

    // Constraint violations
    #[error("Category is referenced by existing items")]
    CategoryInUse,

    #[error("Item is referenced by existing transactions")]
    ItemInUse,

    // Business logic errors
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock {
        available: Decimal,
        requested: Decimal,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::NotFound(resource) => AppError::NotFound(resource.to_string()),
            LedgerError::DuplicateId(resource) => AppError::DuplicateId(resource.to_string()),
            LedgerError::CategoryInUse => AppError::CategoryInUse,
            LedgerError::ItemInUse => AppError::ItemInUse,
            LedgerError::Invalid { field, reason } => AppError::Validation {
                field: field.to_string(),
                message: reason.to_string(),
                message_ar: "قيمة غير صالحة".to_string(),
            },
        }
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_ar: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::Validation {
                field,
                message,
                message_ar,
            } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: message.clone(),
                    message_ar: message_ar.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message_en: format!("{} not found", resource),
                    message_ar: format!("غير موجود: {}", resource),
                    field: None,
                },
            ),
            AppError::DuplicateId(resource) => (
                StatusCode::CONFLICT,
                ErrorDetail {
                    code: "DUPLICATE_ID".to_string(),
                    message_en: format!("A {} with this id already exists", resource),
                    message_ar: "المعرف مستخدم من قبل".to_string(),
                    field: None,
                },
            ),
            AppError::CategoryInUse => (
                StatusCode::CONFLICT,
                ErrorDetail {
                    code: "CATEGORY_IN_USE".to_string(),
                    message_en: "Cannot delete a category that still has items".to_string(),
                    message_ar: "لا يمكن حذف التصنيف لأنه يحتوي على مواد".to_string(),
                    field: None,
                },
            ),
            AppError::ItemInUse => (
                StatusCode::CONFLICT,
                ErrorDetail {
                    code: "ITEM_IN_USE".to_string(),
                    message_en: "Cannot delete an item that has recorded transactions".to_string(),
                    message_ar: "لا يمكن حذف المادة لأنها مرتبطة بمعاملات".to_string(),
                    field: None,
                },
            ),
            AppError::InsufficientStock {
                available,
                requested,
            } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorDetail {
                    code: "INSUFFICIENT_STOCK".to_string(),
                    message_en: format!(
                        "Requested quantity {} exceeds available stock {}",
                        requested, available
                    ),
                    message_ar: "الكمية المطلوبة أكبر من الكمية المتوفرة في المخزون".to_string(),
                    field: None,
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message_en: format!("Configuration error: {}", msg),
                    message_ar: "خطأ في إعدادات النظام".to_string(),
                    field: None,
                },
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message_en: "An internal server error occurred".to_string(),
                    message_ar: "حدث خطأ داخلي في الخادم".to_string(),
                    field: None,
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

/// Lift a domain validation result into an `AppError::Validation`
/// carrying the Arabic message shown to the user.
pub fn invalid(
    field: &str,
    result: Result<(), &'static str>,
    message_ar: &str,
) -> AppResult<()> {
    result.map_err(|message| AppError::Validation {
        field: field.to_string(),
        message: message.to_string(),
        message_ar: message_ar.to_string(),
    })
}
