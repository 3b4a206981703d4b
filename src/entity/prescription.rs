//! Prescription records and their line items.
//!
//! `patient_email`, `issuer`, and `medication_name` are advisory text, not
//! enforced references; integrity checks belong to the storage layer.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::Entity;
use crate::document::DocumentReader;
use crate::error::ValidationResult;

/// A prescription issuer, e.g. a physician.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issuer {
    pub name: String,
}

impl Entity for Issuer {
    const NAME: &'static str = "Issuer";
    const DESCRIPTION: &'static str = "A prescription issuer such as a physician";

    fn from_document(document: &Value) -> ValidationResult<Self> {
        let mut doc = DocumentReader::new(Self::NAME, document)?;
        let name = doc.required_text("name");
        doc.finish()?;
        Ok(Self { name })
    }

    fn example() -> Value {
        json!({ "name": "Dr John Doe" })
    }
}

/// One line item within a prescription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrescribedMedication {
    /// Free text; not a reference into the medication catalog.
    pub medication_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// Free text; not a reference to an Issuer record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
}

impl Entity for PrescribedMedication {
    const NAME: &'static str = "Prescribed Medication";
    const DESCRIPTION: &'static str = "A data model for storing information about a prescription";

    fn from_document(document: &Value) -> ValidationResult<Self> {
        let mut doc = DocumentReader::new(Self::NAME, document)?;
        let medication_name = doc.required_text("medication_name");
        let instructions = doc.optional_text("instructions");
        let issuer = doc.optional_text("issuer");
        doc.finish()?;
        Ok(Self {
            medication_name,
            instructions,
            issuer,
        })
    }

    fn example() -> Value {
        json!({
            "medication_name": "Ibuprofen",
            "instructions": "Take one tablet every six hours as needed for pain",
            "issuer": "Dr John Doe",
        })
    }
}

/// A patient's prescription record.
///
/// The line-item order is meaningful: it reflects how medications are
/// listed on the prescription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    /// Generated fresh for each new record.
    #[serde(default = "crate::defaults::prescription_id")]
    pub id: String,

    /// Intended to match a User email; not enforced here.
    pub patient_email: String,

    #[serde(default = "crate::defaults::timestamp_now")]
    pub prescription_date: String,

    pub prescription_list: Vec<PrescribedMedication>,

    /// Whether the patient has picked the prescription up.
    #[serde(default)]
    pub collected: bool,
}

impl Entity for Prescription {
    const NAME: &'static str = "Prescription";
    const DESCRIPTION: &'static str = "A data model for storing information about a prescription";

    fn from_document(document: &Value) -> ValidationResult<Self> {
        let mut doc = DocumentReader::new(Self::NAME, document)?;
        let id = doc.text_or_else("id", crate::defaults::prescription_id);
        let patient_email = doc.required_text("patient_email");
        let prescription_date = doc.text_or_else("prescription_date", crate::defaults::timestamp_now);

        let mut prescription_list = Vec::new();
        if let Some(items) = doc.required_array("prescription_list") {
            for (index, item) in items.iter().enumerate() {
                match PrescribedMedication::from_document(item) {
                    Ok(line) => prescription_list.push(line),
                    Err(failure) => {
                        doc.nested_failure(&format!("prescription_list[{index}]"), failure)
                    }
                }
            }
        }

        let collected = doc.flag_or("collected", false);
        doc.finish()?;

        Ok(Self {
            id,
            patient_email,
            prescription_date,
            prescription_list,
            collected,
        })
    }

    fn example() -> Value {
        json!({
            "id": "c4b7f3d0-5a52-4b3a-9c6e-2f8a1d7e6b90",
            "patient_email": "example@example.com",
            "prescription_date": "2023-04-10",
            "prescription_list": [PrescribedMedication::example()],
            "collected": false,
        })
    }
}
