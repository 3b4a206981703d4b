//! medischema - validated entity schema layer for a medical-records and
//! pharmacy service
//!
//! Entities are constructed from untyped JSON documents submitted by the
//! surrounding web service and handed back as plain documents for the
//! storage layer. Construction validates; validation failures list every
//! offending field.

pub mod catalog;
pub mod defaults;
pub mod entity;
pub mod error;

mod document;
