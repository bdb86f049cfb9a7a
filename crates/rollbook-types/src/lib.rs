//! Foundation types for the Rollbook course registry.
//!
//! This crate provides the entity records managed by the registry store and
//! the opaque identifier that links them. Every other Rollbook crate depends
//! on `rollbook-types`.
//!
//! # Key Types
//!
//! - [`RecordId`] — Opaque string identifier, freshly generated as UUID v7
//! - [`CourseType`] — A category describing the mode of a course
//! - [`Course`] — A course by name
//! - [`CourseOffering`] — One pairing of a course with a course type
//! - [`Student`] — A registration against a specific offering

pub mod id;
pub mod records;

pub use id::RecordId;
pub use records::{Course, CourseOffering, CourseType, Student};
