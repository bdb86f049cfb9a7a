use rollbook_persist::{load_collection, save_collection, Slot, SlotStore};
use rollbook_types::{Course, CourseOffering, CourseType, RecordId, Student};

use crate::error::StoreResult;
use crate::summary::{CourseTypeBreakdown, MostPopularOffering, Summary};

/// Placeholder for any part of an offering name that cannot be resolved.
const UNKNOWN: &str = "Unknown";

/// The registry store: four insertion-ordered collections plus the
/// persistence backend they are mirrored to.
///
/// Instantiate once at application start with [`Registry::open`] and pass
/// by reference to the presentation layer. Consumers re-fetch collections
/// after mutations; there is no observer machinery.
pub struct Registry {
    backend: Box<dyn SlotStore>,
    course_types: Vec<CourseType>,
    courses: Vec<Course>,
    offerings: Vec<CourseOffering>,
    students: Vec<Student>,
}

impl Registry {
    /// Open a registry over a persistence backend, loading all four
    /// collections. Missing or malformed slots load as empty.
    pub fn open(backend: impl SlotStore + 'static) -> StoreResult<Self> {
        let backend: Box<dyn SlotStore> = Box::new(backend);
        let course_types = load_collection(backend.as_ref(), Slot::CourseTypes)?;
        let courses = load_collection(backend.as_ref(), Slot::Courses)?;
        let offerings = load_collection(backend.as_ref(), Slot::CourseOfferings)?;
        let students = load_collection(backend.as_ref(), Slot::Students)?;
        Ok(Self {
            backend,
            course_types,
            courses,
            offerings,
            students,
        })
    }

    // ---- Course types ----

    /// Append a new course type. Duplicate names are permitted.
    pub fn add_course_type(&mut self, name: impl Into<String>) -> StoreResult<CourseType> {
        let record = CourseType {
            id: RecordId::generate(),
            name: name.into(),
        };
        tracing::debug!(id = %record.id, name = %record.name, "add course type");
        self.course_types.push(record.clone());
        self.persist_course_types()?;
        Ok(record)
    }

    /// Replace the name of the matching course type.
    ///
    /// Returns `false` (nothing changed, nothing persisted) if the id is
    /// absent.
    pub fn update_course_type(
        &mut self,
        id: &RecordId,
        name: impl Into<String>,
    ) -> StoreResult<bool> {
        let Some(record) = self.course_types.iter_mut().find(|ct| ct.id == *id) else {
            return Ok(false);
        };
        record.name = name.into();
        self.persist_course_types()?;
        Ok(true)
    }

    /// Remove the matching course type, then every offering that references
    /// it.
    ///
    /// The cascade stops at offerings: students registered to an offering
    /// removed this way keep their now-dangling `courseOfferingId`. See
    /// [`Registry::orphaned_students`].
    pub fn delete_course_type(&mut self, id: &RecordId) -> StoreResult<bool> {
        let before = self.course_types.len();
        self.course_types.retain(|ct| ct.id != *id);
        if self.course_types.len() == before {
            return Ok(false);
        }
        tracing::debug!(id = %id, "delete course type");
        self.offerings.retain(|o| o.course_type_id != *id);
        self.persist_course_types()?;
        self.persist_offerings()?;
        Ok(true)
    }

    /// All course types, in insertion order.
    pub fn course_types(&self) -> &[CourseType] {
        &self.course_types
    }

    /// The course type with the given id, if any.
    pub fn course_type_by_id(&self, id: &RecordId) -> Option<&CourseType> {
        self.course_types.iter().find(|ct| ct.id == *id)
    }

    // ---- Courses ----

    /// Append a new course. Duplicate names are permitted.
    pub fn add_course(&mut self, name: impl Into<String>) -> StoreResult<Course> {
        let record = Course {
            id: RecordId::generate(),
            name: name.into(),
        };
        tracing::debug!(id = %record.id, name = %record.name, "add course");
        self.courses.push(record.clone());
        self.persist_courses()?;
        Ok(record)
    }

    /// Replace the name of the matching course. `false` if the id is absent.
    pub fn update_course(&mut self, id: &RecordId, name: impl Into<String>) -> StoreResult<bool> {
        let Some(record) = self.courses.iter_mut().find(|c| c.id == *id) else {
            return Ok(false);
        };
        record.name = name.into();
        self.persist_courses()?;
        Ok(true)
    }

    /// Remove the matching course, then every offering that references it.
    ///
    /// Same one-level cascade as [`Registry::delete_course_type`]: students
    /// of the removed offerings are left dangling.
    pub fn delete_course(&mut self, id: &RecordId) -> StoreResult<bool> {
        let before = self.courses.len();
        self.courses.retain(|c| c.id != *id);
        if self.courses.len() == before {
            return Ok(false);
        }
        tracing::debug!(id = %id, "delete course");
        self.offerings.retain(|o| o.course_id != *id);
        self.persist_courses()?;
        self.persist_offerings()?;
        Ok(true)
    }

    /// All courses, in insertion order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// The course with the given id, if any.
    pub fn course_by_id(&self, id: &RecordId) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == *id)
    }

    // ---- Course offerings ----

    /// Append a new offering pairing a course with a course type.
    ///
    /// Neither foreign key is checked for existence; the presentation layer
    /// only offers ids from its own selection lists.
    pub fn add_course_offering(
        &mut self,
        course_id: RecordId,
        course_type_id: RecordId,
    ) -> StoreResult<CourseOffering> {
        let record = CourseOffering {
            id: RecordId::generate(),
            course_id,
            course_type_id,
        };
        tracing::debug!(id = %record.id, "add course offering");
        self.offerings.push(record.clone());
        self.persist_offerings()?;
        Ok(record)
    }

    /// Replace both foreign keys on the matching offering. `false` if the
    /// id is absent.
    pub fn update_course_offering(
        &mut self,
        id: &RecordId,
        course_id: RecordId,
        course_type_id: RecordId,
    ) -> StoreResult<bool> {
        let Some(record) = self.offerings.iter_mut().find(|o| o.id == *id) else {
            return Ok(false);
        };
        record.course_id = course_id;
        record.course_type_id = course_type_id;
        self.persist_offerings()?;
        Ok(true)
    }

    /// Remove the matching offering, then every student registered to it.
    pub fn delete_course_offering(&mut self, id: &RecordId) -> StoreResult<bool> {
        let before = self.offerings.len();
        self.offerings.retain(|o| o.id != *id);
        if self.offerings.len() == before {
            return Ok(false);
        }
        tracing::debug!(id = %id, "delete course offering");
        self.students.retain(|s| s.course_offering_id != *id);
        self.persist_offerings()?;
        self.persist_students()?;
        Ok(true)
    }

    /// All offerings, in insertion order.
    pub fn offerings(&self) -> &[CourseOffering] {
        &self.offerings
    }

    /// The offering with the given id, if any.
    pub fn offering_by_id(&self, id: &RecordId) -> Option<&CourseOffering> {
        self.offerings.iter().find(|o| o.id == *id)
    }

    /// Offerings paired with the given course type, in insertion order.
    /// Empty (never absent) when nothing matches.
    pub fn offerings_by_course_type(&self, course_type_id: &RecordId) -> Vec<CourseOffering> {
        self.offerings
            .iter()
            .filter(|o| o.course_type_id == *course_type_id)
            .cloned()
            .collect()
    }

    /// Display name for an offering: `"<CourseTypeName> - <CourseName>"`.
    ///
    /// Each unresolvable reference degrades to the literal `Unknown`; an
    /// unresolvable offering yields exactly `Unknown`.
    pub fn full_offering_name(&self, id: &RecordId) -> String {
        let Some(offering) = self.offering_by_id(id) else {
            return UNKNOWN.to_string();
        };
        let type_name = self
            .course_type_by_id(&offering.course_type_id)
            .map_or(UNKNOWN, |ct| ct.name.as_str());
        let course_name = self
            .course_by_id(&offering.course_id)
            .map_or(UNKNOWN, |c| c.name.as_str());
        format!("{type_name} - {course_name}")
    }

    // ---- Students ----

    /// Append a new student registration.
    ///
    /// No existence check on the offering id, no uniqueness check on email;
    /// input validation belongs to the presentation layer.
    pub fn add_student(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        course_offering_id: RecordId,
    ) -> StoreResult<Student> {
        let record = Student {
            id: RecordId::generate(),
            name: name.into(),
            email: email.into(),
            course_offering_id,
        };
        tracing::debug!(id = %record.id, name = %record.name, "add student");
        self.students.push(record.clone());
        self.persist_students()?;
        Ok(record)
    }

    /// All students, in insertion order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Students registered to the given offering, in insertion order.
    /// Empty (never absent) when nothing matches.
    pub fn students_by_offering(&self, course_offering_id: &RecordId) -> Vec<Student> {
        self.students
            .iter()
            .filter(|s| s.course_offering_id == *course_offering_id)
            .cloned()
            .collect()
    }

    /// Number of students registered to the given offering.
    pub fn student_count(&self, course_offering_id: &RecordId) -> usize {
        self.students
            .iter()
            .filter(|s| s.course_offering_id == *course_offering_id)
            .count()
    }

    /// Students whose offering no longer exists.
    ///
    /// These are left behind when a course or course type delete cascades
    /// through an offering (the cascade stops one level deep). Read-only
    /// diagnostic; changes nothing.
    pub fn orphaned_students(&self) -> Vec<Student> {
        self.students
            .iter()
            .filter(|s| self.offering_by_id(&s.course_offering_id).is_none())
            .cloned()
            .collect()
    }

    // ---- Dashboard ----

    /// The offering with the most registered students.
    ///
    /// `None` while no offering has any students; ties resolve to the
    /// earliest offering in collection order.
    pub fn most_popular_offering(&self) -> Option<MostPopularOffering> {
        let mut best: Option<(&CourseOffering, usize)> = None;
        for offering in &self.offerings {
            let count = self.student_count(&offering.id);
            if count > 0 && best.map_or(true, |(_, c)| count > c) {
                best = Some((offering, count));
            }
        }
        best.map(|(offering, student_count)| MostPopularOffering {
            offering: offering.clone(),
            name: self.full_offering_name(&offering.id),
            student_count,
        })
    }

    /// Collection totals plus the per-course-type breakdown and the most
    /// popular offering.
    pub fn summary(&self) -> Summary {
        let breakdown = self
            .course_types
            .iter()
            .map(|ct| {
                let offering_count = self
                    .offerings
                    .iter()
                    .filter(|o| o.course_type_id == ct.id)
                    .count();
                let student_count = self
                    .students
                    .iter()
                    .filter(|s| {
                        self.offering_by_id(&s.course_offering_id)
                            .is_some_and(|o| o.course_type_id == ct.id)
                    })
                    .count();
                CourseTypeBreakdown {
                    course_type: ct.clone(),
                    offering_count,
                    student_count,
                }
            })
            .collect();
        Summary {
            course_types: self.course_types.len(),
            courses: self.courses.len(),
            offerings: self.offerings.len(),
            students: self.students.len(),
            breakdown,
            most_popular_offering: self.most_popular_offering(),
        }
    }

    // ---- Persistence mirror ----

    fn persist_course_types(&self) -> StoreResult<()> {
        save_collection(self.backend.as_ref(), Slot::CourseTypes, &self.course_types)?;
        Ok(())
    }

    fn persist_courses(&self) -> StoreResult<()> {
        save_collection(self.backend.as_ref(), Slot::Courses, &self.courses)?;
        Ok(())
    }

    fn persist_offerings(&self) -> StoreResult<()> {
        save_collection(self.backend.as_ref(), Slot::CourseOfferings, &self.offerings)?;
        Ok(())
    }

    fn persist_students(&self) -> StoreResult<()> {
        save_collection(self.backend.as_ref(), Slot::Students, &self.students)?;
        Ok(())
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("course_types", &self.course_types.len())
            .field("courses", &self.courses.len())
            .field("offerings", &self.offerings.len())
            .field("students", &self.students.len())
            .finish()
    }
}
