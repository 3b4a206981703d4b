//! Medication catalog model.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{Entity, WireEnum};
use crate::document::DocumentReader;
use crate::error::ValidationResult;

/// Category of a catalog medication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MedicationType {
    #[serde(rename = "pain killers")]
    PainKillers,
    #[serde(rename = "analgesics")]
    Analgesics,
    #[serde(rename = "hygiene")]
    Hygiene,
    #[serde(rename = "anti-inflammatory")]
    AntiInflammatory,
}

impl WireEnum for MedicationType {
    const ALLOWED: &'static [&'static str] =
        &["pain killers", "analgesics", "hygiene", "anti-inflammatory"];

    fn from_wire(value: &str) -> Option<Self> {
        match value {
            "pain killers" => Some(MedicationType::PainKillers),
            "analgesics" => Some(MedicationType::Analgesics),
            "hygiene" => Some(MedicationType::Hygiene),
            "anti-inflammatory" => Some(MedicationType::AntiInflammatory),
            _ => None,
        }
    }

    fn as_wire(&self) -> &'static str {
        match self {
            MedicationType::PainKillers => "pain killers",
            MedicationType::Analgesics => "analgesics",
            MedicationType::Hygiene => "hygiene",
            MedicationType::AntiInflammatory => "anti-inflammatory",
        }
    }
}

impl fmt::Display for MedicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// A catalog entry for a drug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medication {
    pub name: String,
    pub purpose: String,
    /// URL of the catalog image.
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub medication_type: MedicationType,
    /// Free-form date text; defaults to the construction-time timestamp.
    #[serde(default = "crate::defaults::timestamp_now")]
    pub expiration_date: String,
}

impl Entity for Medication {
    const NAME: &'static str = "Medication";
    const DESCRIPTION: &'static str = "A data model for storing information about medications";

    fn from_document(document: &Value) -> ValidationResult<Self> {
        let mut doc = DocumentReader::new(Self::NAME, document)?;
        let name = doc.required_text("name");
        let purpose = doc.required_text("purpose");
        let image = doc.required_text("image");
        let description = doc.optional_text("description");
        let medication_type = doc.required_enum::<MedicationType>("medication_type");
        let expiration_date = doc.text_or_else("expiration_date", crate::defaults::timestamp_now);
        doc.finish()?;

        Ok(Self {
            name,
            purpose,
            image,
            description,
            medication_type: medication_type.unwrap(), // finish() rejected the document otherwise
            expiration_date,
        })
    }

    fn example() -> Value {
        json!({
            "name": "Aspirin",
            "purpose": "Pain relief",
            "image": "https://www.example.com/aspirin.jpg",
            "description": "Aspirin is a nonsteroidal anti-inflammatory drug (NSAID) used to treat pain, fever, and inflammation.",
            "medication_type": "analgesics",
            "expiration_date": "2024-04-10",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Reason;

    #[test]
    fn test_example_validates() {
        let medication = Medication::from_document(&Medication::example()).unwrap();
        assert_eq!(medication.name, "Aspirin");
        assert_eq!(medication.medication_type, MedicationType::Analgesics);
    }

    #[test]
    fn test_every_medication_type_parses() {
        for wire in MedicationType::ALLOWED {
            let parsed = MedicationType::from_wire(wire).unwrap();
            assert_eq!(parsed.as_wire(), *wire);
        }
    }

    #[test]
    fn test_unknown_medication_type_rejected() {
        let mut doc = Medication::example();
        doc["medication_type"] = json!("antibiotics");
        let err = Medication::from_document(&doc).unwrap_err();
        assert!(matches!(
            err.errors[0].reason,
            Reason::UnknownVariant { .. }
        ));
    }

    #[test]
    fn test_expiration_date_defaults_when_absent() {
        let doc = json!({
            "name": "Aspirin",
            "purpose": "Pain relief",
            "image": "https://www.example.com/aspirin.jpg",
            "medication_type": "analgesics",
        });
        let medication = Medication::from_document(&doc).unwrap();
        assert!(!medication.expiration_date.is_empty());
        assert_eq!(medication.description, None);
    }
}
