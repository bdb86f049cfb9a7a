//! Entity records managed by the registry store.
//!
//! All records serialize as camelCase JSON, matching the shape the original
//! admin tool persisted. Records are created only through the store's add
//! operations; constructors here take a pre-generated id so the store stays
//! the single source of fresh ids.

use serde::{Deserialize, Serialize};

use crate::id::RecordId;

/// A category describing the mode of a course (e.g. "Individual", "Group").
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseType {
    pub id: RecordId,
    pub name: String,
}

/// A course by name (e.g. "Math", "Chemistry").
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: RecordId,
    pub name: String,
}

/// One specific pairing of a course with a course type.
///
/// Offerings are the unit students register against. Both foreign keys are
/// plain ids; the store maintains referential integrity by cascading delete,
/// not by validating them at creation time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseOffering {
    pub id: RecordId,
    pub course_id: RecordId,
    pub course_type_id: RecordId,
}

/// A student registration against a specific offering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub course_offering_id: RecordId,
}
