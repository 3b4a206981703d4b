//! Entity definitions for the schema layer.
//!
//! Every record the surrounding service constructs from client input is
//! defined here: account holders, medications, prescriptions, and the
//! authentication payloads exchanged with the auth collaborator.
//!
//! # Design Principles
//!
//! - Construction from untyped documents always validates
//! - Every field error in a document is reported, not just the first
//! - Declared defaults come from factories invoked per construction call
//! - Entities are plain values; nothing here performs I/O

mod auth;
mod medication;
mod prescription;
mod user;

pub use auth::{AuthLogin, AuthToken};
pub use medication::{Medication, MedicationType};
pub use prescription::{Issuer, PrescribedMedication, Prescription};
pub use user::{Gender, MaritalStatus, User};

use serde::Serialize;
use serde_json::Value;

use crate::error::ValidationResult;

/// A validated record type with a document representation.
///
/// `from_document` and `to_document` are inverses: a document produced by
/// `to_document` always reconstructs an equal entity, and a fully-populated
/// valid document survives the round trip unchanged.
pub trait Entity: Serialize + Sized {
    /// Entity title as shown in generated documentation.
    const NAME: &'static str;
    /// One-line description for documentation generators.
    const DESCRIPTION: &'static str;

    /// Constructs the entity from an untyped document, applying declared
    /// defaults and reporting every field violation.
    fn from_document(document: &Value) -> ValidationResult<Self>;

    /// Canonical example payload; always passes `from_document`.
    fn example() -> Value;

    /// Plain key-value representation for transport or storage. Enum values
    /// serialize as their wire strings; absent optionals are omitted.
    fn to_document(&self) -> Value {
        // In-memory entities hold only strings, bools, lists, and closed
        // enums, so serialization cannot fail.
        serde_json::to_value(self).expect("entity serialization")
    }
}

/// A closed set of allowed wire strings.
///
/// Consumption sites match exhaustively on the variants; any string outside
/// `ALLOWED` is rejected at construction.
pub trait WireEnum: Sized + Copy {
    /// Every allowed wire string, in declaration order.
    const ALLOWED: &'static [&'static str];

    /// Parses a wire string; `None` when outside the closed set.
    fn from_wire(value: &str) -> Option<Self>;

    /// The canonical wire string for this variant.
    fn as_wire(&self) -> &'static str;
}
