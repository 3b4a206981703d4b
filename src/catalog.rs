//! Process-wide registry of entity descriptors.
//!
//! Documentation generators read the table to render titles, descriptions,
//! and example payloads. The table is built once on first access and never
//! changes; there is nothing to tear down.

use std::sync::OnceLock;

use serde_json::Value;

use crate::entity::{
    AuthLogin, AuthToken, Entity, Issuer, Medication, PrescribedMedication, Prescription, User,
};

/// Documentation descriptor for one entity.
#[derive(Debug, Clone)]
pub struct EntityDescriptor {
    /// Entity title.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Canonical example payload; passes the entity's own validation.
    pub example: Value,
}

fn describe<E: Entity>() -> EntityDescriptor {
    EntityDescriptor {
        name: E::NAME,
        description: E::DESCRIPTION,
        example: E::example(),
    }
}

/// All entities defined by this crate, in documentation order.
pub fn catalog() -> &'static [EntityDescriptor] {
    static CATALOG: OnceLock<Vec<EntityDescriptor>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        vec![
            describe::<User>(),
            describe::<AuthLogin>(),
            describe::<AuthToken>(),
            describe::<Issuer>(),
            describe::<Medication>(),
            describe::<PrescribedMedication>(),
            describe::<Prescription>(),
        ]
    })
}

/// Looks up a descriptor by entity title.
pub fn find(name: &str) -> Option<&'static EntityDescriptor> {
    catalog().iter().find(|descriptor| descriptor.name == name)
}
