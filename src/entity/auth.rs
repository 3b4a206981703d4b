//! Authentication payloads exchanged with the auth collaborator.
//!
//! Token issuance, verification, and password hashing all happen outside
//! this layer; these are plain transport records.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::Entity;
use crate::document::DocumentReader;
use crate::error::ValidationResult;

/// Credentials submitted for authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthLogin {
    pub email: String,
    /// Plaintext at this layer.
    pub password: String,
}

impl Entity for AuthLogin {
    const NAME: &'static str = "AuthLogin";
    const DESCRIPTION: &'static str = "Credentials submitted for authentication";

    fn from_document(document: &Value) -> ValidationResult<Self> {
        let mut doc = DocumentReader::new(Self::NAME, document)?;
        let email = doc.required_text("email");
        let password = doc.required_text("password");
        doc.finish()?;
        Ok(Self { email, password })
    }

    fn example() -> Value {
        json!({
            "email": "example@example.com",
            "password": "password123",
        })
    }
}

/// Credential pair returned after successful authentication.
///
/// No structure, expiry, or signature scheme is defined here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    pub access_token: String,
    pub refresh_token: String,
}

impl Entity for AuthToken {
    const NAME: &'static str = "AuthToken";
    const DESCRIPTION: &'static str = "Credential pair returned after authentication";

    fn from_document(document: &Value) -> ValidationResult<Self> {
        let mut doc = DocumentReader::new(Self::NAME, document)?;
        let access_token = doc.required_text("access_token");
        let refresh_token = doc.required_text("refresh_token");
        doc.finish()?;
        Ok(Self {
            access_token,
            refresh_token,
        })
    }

    fn example() -> Value {
        json!({
            "access_token": "access-3f2b8c",
            "refresh_token": "refresh-9d41ae",
        })
    }
}
