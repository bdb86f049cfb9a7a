use std::fmt;

/// A named persistence slot, one per registry collection.
///
/// The canonical names match the local-storage keys of the original tool,
/// so data persisted by it parses unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    CourseTypes,
    Courses,
    CourseOfferings,
    Students,
}

impl Slot {
    /// All slots, in display order.
    pub const ALL: [Slot; 4] = [
        Slot::CourseTypes,
        Slot::Courses,
        Slot::CourseOfferings,
        Slot::Students,
    ];

    /// The canonical slot name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CourseTypes => "courseTypes",
            Self::Courses => "courses",
            Self::CourseOfferings => "courseOfferings",
            Self::Students => "students",
        }
    }

    /// File name used by the file backend for this slot.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_match_original_keys() {
        assert_eq!(Slot::CourseTypes.as_str(), "courseTypes");
        assert_eq!(Slot::Courses.as_str(), "courses");
        assert_eq!(Slot::CourseOfferings.as_str(), "courseOfferings");
        assert_eq!(Slot::Students.as_str(), "students");
    }

    #[test]
    fn all_covers_every_slot_once() {
        let names: std::collections::HashSet<_> =
            Slot::ALL.iter().map(Slot::as_str).collect();
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn file_name_appends_extension() {
        assert_eq!(Slot::Students.file_name(), "students.json");
    }
}
