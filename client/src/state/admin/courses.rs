//! Course management: catalog table plus the create/edit modal with its
//! syllabus editor.

#[cfg(test)]
#[path = "courses_test.rs"]
mod courses_test;

use time::{Date, OffsetDateTime};

use super::{EditTarget, Links, distinct, next_id, split_list};
use crate::mock;
use crate::net::types::Author;
use crate::state::listing::matches_search;
use crate::state::moderation::{self, CourseStatus, count_with_status, impl_moderated, remove_by_id};
use crate::state::projects::Member;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CourseLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Self {
        Self::ALL.into_iter().find(|l| l.as_str() == value).unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instructor {
    pub author: Author,
    pub verified: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CourseStats {
    pub students: u32,
    pub lessons: u32,
    pub completion_rate: u8,
    pub rating: f32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub id: String,
    pub user: Author,
    pub content: String,
    pub rating: u8,
    pub submitted_at: Date,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SyllabusSection {
    pub title: String,
    pub duration: String,
    pub topics: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub instructor: Instructor,
    pub category: String,
    pub status: CourseStatus,
    pub created_at: Date,
    pub last_updated: Date,
    pub tags: Vec<String>,
    pub members: Vec<Member>,
    pub stats: CourseStats,
    pub feedback: Vec<Feedback>,
    pub links: Links,
    pub thumbnail: Option<String>,
    pub duration: String,
    pub level: CourseLevel,
    pub prerequisites: Vec<String>,
    pub syllabus: Vec<SyllabusSection>,
}

impl_moderated!(Course, CourseStatus);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyllabusField {
    Title,
    Duration,
    /// Comma-separated.
    Topics,
}

/// Fields of the create/edit course modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub level: CourseLevel,
    pub duration: String,
    pub thumbnail: String,
    /// Comma-separated.
    pub prerequisites: String,
    /// Comma-separated.
    pub tags: String,
    pub website: String,
    pub syllabus: Vec<SyllabusSection>,
}

impl Default for CourseDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: String::new(),
            level: CourseLevel::Beginner,
            duration: String::new(),
            thumbnail: String::new(),
            prerequisites: String::new(),
            tags: String::new(),
            website: String::new(),
            syllabus: vec![SyllabusSection::default()],
        }
    }
}

impl CourseDraft {
    /// Prefill the modal from an existing course.
    #[must_use]
    pub fn from_course(course: &Course) -> Self {
        Self {
            title: course.title.clone(),
            description: course.description.clone(),
            category: course.category.clone(),
            level: course.level,
            duration: course.duration.clone(),
            thumbnail: course.thumbnail.clone().unwrap_or_default(),
            prerequisites: course.prerequisites.join(", "),
            tags: course.tags.join(", "),
            website: course.links.website.clone().unwrap_or_default(),
            syllabus: if course.syllabus.is_empty() { vec![SyllabusSection::default()] } else { course.syllabus.clone() },
        }
    }

    pub fn add_section(&mut self) {
        self.syllabus.push(SyllabusSection::default());
    }

    pub fn update_section(&mut self, index: usize, field: SyllabusField, value: &str) {
        let Some(section) = self.syllabus.get_mut(index) else {
            return;
        };
        match field {
            SyllabusField::Title => section.title = value.to_owned(),
            SyllabusField::Duration => section.duration = value.to_owned(),
            SyllabusField::Topics => section.topics = split_list(value),
        }
    }

    pub fn remove_section(&mut self, index: usize) {
        if index < self.syllabus.len() {
            self.syllabus.remove(index);
        }
    }

    /// # Errors
    ///
    /// Returns the message for the first missing required field.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("Course title is required");
        }
        if self.description.trim().is_empty() {
            return Err("Description is required");
        }
        if self.category.trim().is_empty() {
            return Err("Category is required");
        }
        Ok(())
    }

    fn thumbnail(&self) -> Option<String> {
        let t = self.thumbnail.trim();
        (!t.is_empty()).then(|| t.to_owned())
    }

    /// Sections with no title are dropped on save.
    fn syllabus(&self) -> Vec<SyllabusSection> {
        self.syllabus.iter().filter(|s| !s.title.trim().is_empty()).cloned().collect()
    }

    fn apply(&self, course: &mut Course) {
        course.title = self.title.trim().to_owned();
        course.description = self.description.trim().to_owned();
        course.category.clone_from(&self.category);
        course.level = self.level;
        course.duration.clone_from(&self.duration);
        course.thumbnail = self.thumbnail();
        course.prerequisites = split_list(&self.prerequisites);
        course.tags = split_list(&self.tags);
        course.links.website = Links::from_fields("", &self.website, "").website;
        course.syllabus = self.syllabus();
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CourseFilter {
    pub search: String,
    pub category: Option<String>,
    pub status: Option<CourseStatus>,
}

impl CourseFilter {
    #[must_use]
    pub fn matches(&self, course: &Course) -> bool {
        matches_search(&self.search, &[&course.title, &course.description])
            && self.category.as_ref().is_none_or(|c| *c == course.category)
            && self.status.is_none_or(|s| s == course.status)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CourseManagement {
    pub courses: Vec<Course>,
    pub filter: CourseFilter,
    pub modal: Option<EditTarget>,
}

impl Default for CourseManagement {
    fn default() -> Self {
        Self { courses: mock::admin::courses(), filter: CourseFilter::default(), modal: None }
    }
}

impl CourseManagement {
    #[must_use]
    pub fn filtered(&self) -> Vec<Course> {
        self.courses.iter().filter(|c| self.filter.matches(c)).cloned().collect()
    }

    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        distinct(self.courses.iter().map(|c| c.category.as_str()))
    }

    #[must_use]
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Draft for the currently open modal.
    #[must_use]
    pub fn modal_draft(&self) -> CourseDraft {
        match &self.modal {
            Some(EditTarget::Edit(id)) => self.course(id).map(CourseDraft::from_course).unwrap_or_default(),
            _ => CourseDraft::default(),
        }
    }

    /// Update the course `existing` names, or append a new one when `None`.
    /// Updates bump `last_updated`; new courses start pending under the admin
    /// instructor with zeroed stats and no members or feedback.
    ///
    /// # Errors
    ///
    /// Returns the validation message, or `"Course not found"` for an unknown id.
    pub fn save(&mut self, existing: Option<&str>, draft: &CourseDraft) -> Result<String, &'static str> {
        draft.validate()?;
        let today = OffsetDateTime::now_utc().date();

        if let Some(id) = existing {
            let course = self.courses.iter_mut().find(|c| c.id == id).ok_or("Course not found")?;
            draft.apply(course);
            course.last_updated = today;
            log::info!("updated course {id}");
            return Ok(id.to_owned());
        }

        let id = next_id(self.courses.iter().map(|c| c.id.as_str()));
        let mut course = Course {
            id: id.clone(),
            title: String::new(),
            description: String::new(),
            instructor: Instructor { author: mock::admin::admin_author(), verified: true },
            category: String::new(),
            status: CourseStatus::Pending,
            created_at: today,
            last_updated: today,
            tags: Vec::new(),
            members: Vec::new(),
            stats: CourseStats::default(),
            feedback: Vec::new(),
            links: Links::default(),
            thumbnail: None,
            duration: String::new(),
            level: CourseLevel::Beginner,
            prerequisites: Vec::new(),
            syllabus: Vec::new(),
        };
        draft.apply(&mut course);
        self.courses.push(course);
        log::info!("created course {id}");
        Ok(id)
    }

    pub fn update_status(&mut self, id: &str, status: CourseStatus) -> bool {
        moderation::update_status(&mut self.courses, id, status)
    }

    pub fn remove(&mut self, id: &str) -> bool {
        remove_by_id(&mut self.courses, id)
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        count_with_status(&self.courses, CourseStatus::Active)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        count_with_status(&self.courses, CourseStatus::Pending)
    }

    /// Mean rating across all courses, `0.0` when there are none.
    #[must_use]
    pub fn average_rating(&self) -> f32 {
        if self.courses.is_empty() {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let len = self.courses.len() as f32;
        self.courses.iter().map(|c| c.stats.rating).sum::<f32>() / len
    }
}
