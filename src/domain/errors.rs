use serde::Serialize;
use thiserror::Error;

/// A single field-level validation failure, as reported to API clients
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Flatten `validator` output into field errors, sorted by field name so
/// responses are stable across runs.
pub fn field_errors(errors: &validator::ValidationErrors) -> Vec<FieldError> {
    let mut result: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("invalid value ({})", e.code));
                FieldError::new(field.clone(), message)
            })
        })
        .collect();
    result.sort_by(|a, b| a.field.cmp(&b.field));
    result
}

/// Domain invariant violations raised by value objects and entities
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Invalid shares: {0}")]
    InvalidShares(String),

    #[error("Invalid trade type: {0}")]
    InvalidTradeType(String),
}

impl ValidationError {
    /// Name of the request field the violation belongs to
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidPrice(_) => "price",
            ValidationError::InvalidShares(_) => "shares",
            ValidationError::InvalidTradeType(_) => "type",
        }
    }
}

impl From<ValidationError> for FieldError {
    fn from(error: ValidationError) -> Self {
        FieldError::new(error.field(), error.to_string())
    }
}

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password hashing failed: {0}")]
    Hashing(String),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TokenError {
    #[error("Token is invalid")]
    Invalid,

    #[error("Token has expired")]
    Expired,

    #[error("Failed to sign token: {0}")]
    Signing(String),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LedgerError {
    #[error("Trade not found: {0}")]
    NotFound(u64),
}

/// Errors surfaced to HTTP callers. Every variant renders as JSON with a
/// `message` field.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    ReadOnly(String),

    #[error("{0}")]
    MalformedBody(String),

    #[error("{0}")]
    DuplicateEmail(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<CredentialError> for ApiError {
    fn from(error: CredentialError) -> Self {
        match error {
            CredentialError::Validation(errors) => ApiError::Validation(errors),
            CredentialError::DuplicateEmail(_) => {
                ApiError::DuplicateEmail("Email already registered".to_string())
            }
            CredentialError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            CredentialError::Hashing(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::Invalid | TokenError::Expired => {
                ApiError::Forbidden("Token is invalid or expired".to_string())
            }
            TokenError::Signing(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<LedgerError> for ApiError {
    fn from(error: LedgerError) -> Self {
        match error {
            LedgerError::NotFound(_) => ApiError::NotFound("Trade not found".to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::Validation(vec![error.into()])
    }
}
