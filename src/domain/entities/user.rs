use serde::Deserialize;
use validator::Validate;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A registered account. The password is only ever held as a bcrypt hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub password_hash: String,
}

/// Email/password pair submitted on signup and login.
///
/// Missing fields deserialize as empty strings so that signup reports them as
/// field-level validation errors rather than as a malformed body. The password
/// is wiped from memory when the value is dropped.
#[derive(Clone, Deserialize, Validate, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    #[serde(default)]
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 6, message = "must be at least 6 characters long"))]
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
