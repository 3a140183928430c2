//! End-to-end filter-and-paginate pipeline over catalog entities.

use portal_domain::catalog::Course;
use portal_domain::ids::CourseId;
use portal_domain::money::{Currency, Money};
use portal_i18n::{Locale, LocalizedText};
use portal_query::{paginate, Criteria, StatusFilter, TableView};

fn course(name: LocalizedText, category: &str, published: bool) -> Course {
    Course {
        id: CourseId::generate(),
        name,
        description: LocalizedText::default(),
        category: Some(category.to_string()),
        service_center: None,
        price: Money::zero(Currency::USD),
        is_free: false,
        is_published: published,
        is_featured: false,
        created_at: 0,
    }
}

fn catalog() -> Vec<Course> {
    vec![
        course(
            LocalizedText::localized([("en", "Intro to Drilling"), ("ar", "مقدمة")]),
            "Engineering",
            true,
        ),
        course(
            LocalizedText::localized([("en", "Advanced Geo")]),
            "Geology",
            false,
        ),
    ]
}

#[test]
fn search_category_and_status_compose() {
    let courses = catalog();
    let criteria = Criteria::new()
        .with_search("intro")
        .with_selection("category", "all")
        .with_status(StatusFilter::Published);

    let hits = criteria.apply(&courses, Locale::En);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name.resolve(Locale::En), "Intro to Drilling");
}

#[test]
fn unpublished_status_selects_the_other_course() {
    let courses = catalog();
    let criteria = Criteria::new()
        .with_selection("category", "all")
        .with_status(StatusFilter::Unpublished);

    let hits = criteria.apply(&courses, Locale::En);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name.resolve(Locale::En), "Advanced Geo");
}

#[test]
fn no_match_yields_one_empty_page() {
    let courses = catalog();
    let criteria = Criteria::new().with_search("zzz");

    let hits = criteria.apply(&courses, Locale::En);
    assert!(hits.is_empty());

    let page = paginate(&hits, 1, 10);
    assert!(page.items.is_empty());
    assert_eq!(page.pagination.total_pages, 1);
}

#[test]
fn category_filter_narrows() {
    let courses = catalog();
    let criteria = Criteria::new().with_selection("category", "Geology");
    let hits = criteria.apply(&courses, Locale::En);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].category.as_deref(), Some("Geology"));
}

#[test]
fn filtered_order_preserves_input_order() {
    let mut courses = catalog();
    courses.push(course(
        LocalizedText::plain("Intro to Logging"),
        "Engineering",
        true,
    ));

    let criteria = Criteria::new().with_search("intro");
    let names: Vec<_> = criteria
        .apply(&courses, Locale::En)
        .into_iter()
        .map(|c| c.name.resolve(Locale::En).to_string())
        .collect();
    assert_eq!(names, ["Intro to Drilling", "Intro to Logging"]);
}

#[test]
fn locale_switch_changes_the_haystack() {
    let courses = catalog();
    // The Arabic title only matches when resolution lands on the ar key.
    let criteria = Criteria::new().with_search("مقدمة");
    assert_eq!(criteria.apply(&courses, Locale::Ar).len(), 1);
    // Under English resolution the en value wins, so the Arabic query
    // finds nothing.
    assert!(criteria.apply(&courses, Locale::En).is_empty());
}

#[test]
fn table_view_runs_the_whole_pipeline() {
    let mut view = TableView::new(catalog(), 10);
    view.set_search("intro");
    view.set_status(StatusFilter::Published);

    let page = view.visible(Locale::En);
    assert_eq!(page.len(), 1);
    assert_eq!(page.pagination.total, 1);
    assert_eq!(page.pagination.page_window(), vec![1]);
}
