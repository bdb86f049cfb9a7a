//! Dashboard summary of the registry contents.

use rollbook_types::{CourseOffering, CourseType};
use serde::Serialize;

/// Counts for the dashboard view: one total per collection plus a
/// per-course-type breakdown and the most popular offering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub course_types: usize,
    pub courses: usize,
    pub offerings: usize,
    pub students: usize,
    /// One entry per course type, in collection order.
    pub breakdown: Vec<CourseTypeBreakdown>,
    /// The offering with the most registered students. `None` while no
    /// offering has any students; ties resolve to the earliest offering in
    /// collection order.
    pub most_popular_offering: Option<MostPopularOffering>,
}

/// The offering with the highest registration count, resolved for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MostPopularOffering {
    pub offering: CourseOffering,
    /// Display name, `Unknown`-degraded like
    /// [`full_offering_name`](crate::Registry::full_offering_name).
    pub name: String,
    pub student_count: usize,
}

/// Offering and registration counts for a single course type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CourseTypeBreakdown {
    pub course_type: CourseType,
    /// Offerings paired with this course type.
    pub offering_count: usize,
    /// Students registered to any of those offerings.
    pub student_count: usize,
}
