use super::*;

fn draft() -> CourseDraft {
    CourseDraft {
        title: "Systems Programming".to_owned(),
        description: "Memory, threads and IO".to_owned(),
        category: "Backend Development".to_owned(),
        level: CourseLevel::Advanced,
        tags: "Rust, Systems".to_owned(),
        ..CourseDraft::default()
    }
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn filters_by_search_and_status() {
    let mut store = CourseManagement::default();
    store.filter.search = "node".to_owned();
    assert_eq!(store.filtered()[0].id, "2");

    store.filter = CourseFilter { status: Some(CourseStatus::Active), ..CourseFilter::default() };
    assert_eq!(store.filtered()[0].id, "1");

    store.filter = CourseFilter { category: Some("Web Development".to_owned()), ..CourseFilter::default() };
    assert_eq!(store.filtered().len(), 1);
}

// =============================================================
// Save
// =============================================================

#[test]
fn save_new_course_appends_pending_admin_course() {
    let mut store = CourseManagement::default();
    let id = store.save(None, &draft()).unwrap();
    assert_eq!(id, "3");

    let course = store.course("3").unwrap();
    assert_eq!(course.status, CourseStatus::Pending);
    assert_eq!(course.instructor.author.name, "Admin");
    assert_eq!(course.stats, CourseStats::default());
    assert_eq!(course.level, CourseLevel::Advanced);
    assert!(course.syllabus.is_empty());
    assert_eq!(store.pending_count(), 2);
}

#[test]
fn save_existing_course_updates_in_place() {
    let mut store = CourseManagement::default();
    let before = store.course("1").unwrap().clone();
    let mut edit = CourseDraft::from_course(&before);
    edit.title = "Advanced React Patterns".to_owned();

    assert_eq!(store.save(Some("1"), &edit), Ok("1".to_owned()));
    let after = store.course("1").unwrap();
    assert_eq!(after.title, "Advanced React Patterns");
    assert_eq!(after.status, before.status);
    assert_eq!(after.syllabus, before.syllabus);
    assert_eq!(after.feedback, before.feedback);
    assert!(after.last_updated > before.last_updated);
    assert_eq!(store.courses.len(), 2);
}

#[test]
fn save_unknown_id_or_invalid_draft_fails() {
    let mut store = CourseManagement::default();
    assert_eq!(store.save(Some("99"), &draft()), Err("Course not found"));
    let blank = CourseDraft { title: String::new(), ..draft() };
    assert_eq!(store.save(None, &blank), Err("Course title is required"));
    assert_eq!(store.courses.len(), 2);
}

#[test]
fn save_after_remove_does_not_reuse_an_id() {
    let mut store = CourseManagement::default();
    assert!(store.remove("1"));
    let id = store.save(None, &draft()).unwrap();
    assert_eq!(id, "3");
    assert_eq!(store.courses.iter().filter(|c| c.id == id).count(), 1);

    assert!(store.update_status("2", CourseStatus::Archived));
    assert_eq!(store.course("3").unwrap().status, CourseStatus::Pending);
    assert!(store.remove("3"));
    assert_eq!(store.courses.len(), 1);
}

// =============================================================
// Syllabus editor
// =============================================================

#[test]
fn syllabus_sections_can_be_edited() {
    let mut d = CourseDraft::default();
    assert_eq!(d.syllabus.len(), 1);
    d.update_section(0, SyllabusField::Title, "Ownership");
    d.update_section(0, SyllabusField::Topics, "moves, borrows ,lifetimes");
    d.add_section();
    d.update_section(1, SyllabusField::Duration, "1 week");
    d.update_section(7, SyllabusField::Title, "ignored");

    assert_eq!(d.syllabus[0].topics, vec!["moves".to_owned(), "borrows".to_owned(), "lifetimes".to_owned()]);
    assert_eq!(d.syllabus[1].duration, "1 week");

    d.remove_section(0);
    d.remove_section(5);
    assert_eq!(d.syllabus.len(), 1);
}

#[test]
fn modal_draft_prefills_when_editing() {
    let mut store = CourseManagement::default();
    assert_eq!(store.modal_draft(), CourseDraft::default());
    store.modal = Some(EditTarget::Edit("2".to_owned()));
    let d = store.modal_draft();
    assert_eq!(d.level, CourseLevel::Intermediate);
    assert_eq!(d.tags, "Node.js, Express, MongoDB");
}

// =============================================================
// Counts
// =============================================================

#[test]
fn counts_and_rating() {
    let mut store = CourseManagement::default();
    assert_eq!((store.active_count(), store.pending_count()), (1, 1));
    assert!((store.average_rating() - 2.4).abs() < 1e-4);
    assert!(store.remove("1"));
    assert_eq!(store.active_count(), 0);
    store.courses.clear();
    assert!(store.average_rating().abs() < f32::EPSILON);
}
