//! Account-holder model and its closed value sets.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{Entity, WireEnum};
use crate::document::DocumentReader;
use crate::error::ValidationResult;

/// Gender of an account holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl WireEnum for Gender {
    const ALLOWED: &'static [&'static str] = &["Male", "Female"];

    fn from_wire(value: &str) -> Option<Self> {
        match value {
            "Male" => Some(Gender::Male),
            "Female" => Some(Gender::Female),
            _ => None,
        }
    }

    fn as_wire(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// Marital status of an account holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
}

impl WireEnum for MaritalStatus {
    const ALLOWED: &'static [&'static str] = &["Single", "Married", "Divorced", "Widowed"];

    fn from_wire(value: &str) -> Option<Self> {
        match value {
            "Single" => Some(MaritalStatus::Single),
            "Married" => Some(MaritalStatus::Married),
            "Divorced" => Some(MaritalStatus::Divorced),
            "Widowed" => Some(MaritalStatus::Widowed),
            _ => None,
        }
    }

    fn as_wire(&self) -> &'static str {
        match self {
            MaritalStatus::Single => "Single",
            MaritalStatus::Married => "Married",
            MaritalStatus::Divorced => "Divorced",
            MaritalStatus::Widowed => "Widowed",
        }
    }
}

impl fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// An account holder / patient.
///
/// The email is the natural key: no two users should coexist with the same
/// email. Uniqueness is the storage layer's job, as is `insurance_no`
/// uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique human-readable identifier; also the Display representation.
    pub email: String,

    /// Plaintext at this layer; hashing belongs to the auth collaborator.
    pub password: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,

    pub nationality: String,

    pub full_name: String,

    pub gender: Gender,

    /// Free-form date text; defaults to the construction-time timestamp.
    #[serde(default = "crate::defaults::timestamp_now")]
    pub date_of_birth: String,

    pub marital_status: MaritalStatus,

    /// Expected unique across the system; not enforced here.
    pub insurance_no: String,

    /// Names the patient allows to act on their behalf, in trust order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trusted_personnel: Option<Vec<String>>,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.email)
    }
}

impl Entity for User {
    const NAME: &'static str = "User";
    const DESCRIPTION: &'static str = "A data model for storing information about account holders";

    fn from_document(document: &Value) -> ValidationResult<Self> {
        let mut doc = DocumentReader::new(Self::NAME, document)?;
        let email = doc.required_text("email");
        let password = doc.required_text("password");
        let mobile = doc.optional_text("mobile");
        let nationality = doc.required_text("nationality");
        let full_name = doc.required_text("full_name");
        let gender = doc.required_enum::<Gender>("gender");
        let date_of_birth = doc.text_or_else("date_of_birth", crate::defaults::timestamp_now);
        let marital_status = doc.required_enum::<MaritalStatus>("marital_status");
        let insurance_no = doc.required_text("insurance_no");
        let trusted_personnel = doc.optional_text_list("trusted_personnel");
        doc.finish()?;

        Ok(Self {
            email,
            password,
            mobile,
            nationality,
            full_name,
            gender: gender.unwrap(), // finish() rejected the document otherwise
            date_of_birth,
            marital_status: marital_status.unwrap(),
            insurance_no,
            trusted_personnel,
        })
    }

    fn example() -> Value {
        json!({
            "email": "example@example.com",
            "password": "password123",
            "mobile": "123-456-7890",
            "nationality": "USA",
            "full_name": "John Doe",
            "gender": "Male",
            "date_of_birth": "2023-04-10",
            "marital_status": "Single",
            "insurance_no": "123456789",
            "trusted_personnel": ["Jane Doe", "Bob Smith"],
        })
    }
}
