//! Entity Invariant Tests
//!
//! Tests for the entity construction contracts:
//! - Round-trip law: example payloads construct and re-serialize unchanged
//! - Required fields are named when missing
//! - Enumerated fields reject anything outside their closed set
//! - Defaults come from per-call factories, never shared constants
//! - Every violation in a document is reported at once

use medischema::catalog::catalog;
use medischema::entity::{
    AuthLogin, AuthToken, Entity, Gender, Issuer, MaritalStatus, Medication, MedicationType,
    PrescribedMedication, Prescription, User, WireEnum,
};
use medischema::error::Reason;
use serde_json::{json, Value};

// =============================================================================
// Helper Functions
// =============================================================================

/// Asserts the round-trip law for one entity: its example constructs, the
/// document representation reproduces the example, and reconstruction yields
/// an equal entity.
fn assert_round_trip<E>()
where
    E: Entity + PartialEq + std::fmt::Debug,
{
    let example = E::example();
    let entity = E::from_document(&example)
        .unwrap_or_else(|e| panic!("{} example must validate: {e}", E::NAME));
    assert_eq!(entity.to_document(), example, "{}", E::NAME);

    let again = E::from_document(&entity.to_document()).unwrap();
    assert_eq!(entity, again, "{}", E::NAME);
}

/// Asserts that removing each listed field from the example yields an error
/// naming exactly that field.
fn assert_required_fields<E>(fields: &[&str])
where
    E: Entity + std::fmt::Debug,
{
    for field in fields {
        let mut doc = E::example();
        doc.as_object_mut().unwrap().remove(*field);
        let err = E::from_document(&doc)
            .err()
            .unwrap_or_else(|| panic!("{} must reject missing '{field}'", E::NAME));
        assert!(
            err.errors
                .iter()
                .any(|e| e.field == *field && e.reason == Reason::Missing),
            "{}: expected missing-field error for '{field}', got {err}",
            E::NAME
        );
    }
}

fn minimal_user_doc() -> Value {
    json!({
        "email": "a@b.com",
        "password": "x",
        "nationality": "USA",
        "full_name": "A B",
        "gender": "Male",
        "marital_status": "Single",
        "insurance_no": "1",
    })
}

// =============================================================================
// Round-Trip Law
// =============================================================================

#[test]
fn test_round_trip_law_holds_for_every_entity() {
    assert_round_trip::<User>();
    assert_round_trip::<AuthLogin>();
    assert_round_trip::<AuthToken>();
    assert_round_trip::<Issuer>();
    assert_round_trip::<Medication>();
    assert_round_trip::<PrescribedMedication>();
    assert_round_trip::<Prescription>();
}

#[test]
fn test_catalog_examples_match_entity_examples() {
    // The registry serves the same fixtures the entities expose.
    for descriptor in catalog() {
        assert!(descriptor.example.is_object(), "{}", descriptor.name);
    }
    assert_eq!(catalog().iter().filter(|d| d.name == "User").count(), 1);
}

#[test]
fn test_construction_is_deterministic_for_full_documents() {
    // A document with every field present yields the same entity every time.
    let example = User::example();
    let first = User::from_document(&example).unwrap();
    for _ in 0..50 {
        assert_eq!(User::from_document(&example).unwrap(), first);
    }
}

// =============================================================================
// Required Fields
// =============================================================================

#[test]
fn test_missing_required_fields_are_named() {
    assert_required_fields::<User>(&[
        "email",
        "password",
        "nationality",
        "full_name",
        "gender",
        "marital_status",
        "insurance_no",
    ]);
    assert_required_fields::<AuthLogin>(&["email", "password"]);
    assert_required_fields::<AuthToken>(&["access_token", "refresh_token"]);
    assert_required_fields::<Issuer>(&["name"]);
    assert_required_fields::<Medication>(&["name", "purpose", "image", "medication_type"]);
    assert_required_fields::<PrescribedMedication>(&["medication_name"]);
    assert_required_fields::<Prescription>(&["patient_email", "prescription_list"]);
}

#[test]
fn test_every_violation_is_reported_at_once() {
    let doc = json!({
        "email": "a@b.com",
        "mobile": 911,
        "gender": "Other",
    });
    let err = User::from_document(&doc).unwrap_err();
    assert!(err.mentions("password"));
    assert!(err.mentions("nationality"));
    assert!(err.mentions("full_name"));
    assert!(err.mentions("marital_status"));
    assert!(err.mentions("insurance_no"));
    assert!(err.mentions("mobile"));
    assert!(err.mentions("gender"));
    assert!(!err.mentions("email"));
}

// =============================================================================
// Closed Enumerations
// =============================================================================

#[test]
fn test_every_enum_member_round_trips() {
    for wire in Gender::ALLOWED {
        let mut doc = minimal_user_doc();
        doc["gender"] = json!(wire);
        let user = User::from_document(&doc).unwrap();
        assert_eq!(user.gender.as_wire(), *wire);
        assert_eq!(user.to_document()["gender"], json!(wire));
    }
    for wire in MaritalStatus::ALLOWED {
        let mut doc = minimal_user_doc();
        doc["marital_status"] = json!(wire);
        let user = User::from_document(&doc).unwrap();
        assert_eq!(user.marital_status.as_wire(), *wire);
    }
    for wire in MedicationType::ALLOWED {
        let mut doc = Medication::example();
        doc["medication_type"] = json!(wire);
        let medication = Medication::from_document(&doc).unwrap();
        assert_eq!(medication.medication_type.as_wire(), *wire);
        assert_eq!(medication.to_document()["medication_type"], json!(wire));
    }
}

#[test]
fn test_values_outside_closed_sets_are_rejected() {
    let cases = [
        ("gender", "male"),          // wire strings are case-sensitive
        ("gender", "Nonbinary"),
        ("marital_status", "Engaged"),
    ];
    for (field, value) in cases {
        let mut doc = minimal_user_doc();
        doc[field] = json!(value);
        let err = User::from_document(&doc).unwrap_err();
        assert!(
            matches!(
                &err.errors[0].reason,
                Reason::UnknownVariant { value: v, .. } if v == value
            ),
            "{field}={value}: got {err}"
        );
    }

    let mut doc = Medication::example();
    doc["medication_type"] = json!("painkillers");
    let err = Medication::from_document(&doc).unwrap_err();
    match &err.errors[0].reason {
        Reason::UnknownVariant { allowed, .. } => {
            assert_eq!(*allowed, MedicationType::ALLOWED);
        }
        other => panic!("expected enumeration error, got {other:?}"),
    }
}

// =============================================================================
// Default Factories
// =============================================================================

#[test]
fn test_prescription_defaults_are_fresh_per_call() {
    let doc = json!({
        "patient_email": "a@b.com",
        "prescription_list": [],
    });
    let first = Prescription::from_document(&doc).unwrap();
    let second = Prescription::from_document(&doc).unwrap();
    assert_ne!(first.id, second.id);
    assert!(!first.prescription_date.is_empty());
    assert!(!first.collected);
}

#[test]
fn test_minimal_user_defaults() {
    let user = User::from_document(&minimal_user_doc()).unwrap();
    assert_eq!(user.mobile, None);
    assert_eq!(user.trusted_personnel, None);
    assert!(!user.date_of_birth.is_empty());

    // Absent optionals stay absent in the document representation.
    let doc = user.to_document();
    let map = doc.as_object().unwrap();
    assert!(!map.contains_key("mobile"));
    assert!(!map.contains_key("trusted_personnel"));
}

#[test]
fn test_single_item_prescription_list() {
    let doc = json!({
        "patient_email": "a@b.com",
        "prescription_list": [{ "medication_name": "Ibuprofen" }],
    });
    let prescription = Prescription::from_document(&doc).unwrap();
    assert!(!prescription.collected);
    assert_eq!(prescription.prescription_list.len(), 1);
    let line = &prescription.prescription_list[0];
    assert_eq!(line.medication_name, "Ibuprofen");
    assert_eq!(line.instructions, None);
    assert_eq!(line.issuer, None);
}

#[test]
fn test_line_item_order_is_preserved() {
    let doc = json!({
        "patient_email": "a@b.com",
        "prescription_list": [
            { "medication_name": "Ibuprofen" },
            { "medication_name": "Paracetamol" },
            { "medication_name": "Aspirin" },
        ],
    });
    let prescription = Prescription::from_document(&doc).unwrap();
    let names: Vec<_> = prescription
        .prescription_list
        .iter()
        .map(|line| line.medication_name.as_str())
        .collect();
    assert_eq!(names, ["Ibuprofen", "Paracetamol", "Aspirin"]);
}

// =============================================================================
// Display & Documentation
// =============================================================================

#[test]
fn test_user_display_is_email() {
    let user = User::from_document(&minimal_user_doc()).unwrap();
    assert_eq!(user.to_string(), "a@b.com");
}

#[test]
fn test_catalog_examples_validate_against_their_entities() {
    // Descriptor fixtures are the same payloads the Entity impls expose,
    // each of which validates in test_round_trip_law_holds_for_every_entity;
    // here we pin the catalog to those payloads.
    assert_eq!(catalog().len(), 7);
    for (descriptor, example) in [
        ("User", User::example()),
        ("AuthLogin", AuthLogin::example()),
        ("AuthToken", AuthToken::example()),
        ("Issuer", Issuer::example()),
        ("Medication", Medication::example()),
        ("Prescribed Medication", PrescribedMedication::example()),
        ("Prescription", Prescription::example()),
    ] {
        let entry = catalog()
            .iter()
            .find(|d| d.name == descriptor)
            .unwrap_or_else(|| panic!("catalog missing {descriptor}"));
        assert_eq!(entry.example, example);
    }
}
