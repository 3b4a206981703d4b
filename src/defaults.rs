//! Default-value factories.
//!
//! Each factory is invoked once per construction call, so two documents
//! omitting the same field never share a timestamp or identifier.

use chrono::Utc;
use uuid::Uuid;

/// Current UTC time as an RFC 3339 string.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339()
}

/// Fresh identifier for a new prescription.
pub fn prescription_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_is_nonempty() {
        assert!(!timestamp_now().is_empty());
    }

    #[test]
    fn test_prescription_ids_are_unique_per_call() {
        assert_ne!(prescription_id(), prescription_id());
    }
}
