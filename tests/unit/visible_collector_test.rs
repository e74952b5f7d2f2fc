//! Unit tests for the VisibleCollector: label filtering, the select-all
//! exclusion, and the nesting guard.

use calgroups::page::{PageFixture, SimulatedPage};
use calgroups::services::visible_collector::VisibleCollector;
use rstest::rstest;

use calgroups::page::sim::ControlFixture;

fn page_with(controls: Vec<ControlFixture>) -> SimulatedPage {
    SimulatedPage::from_fixture(PageFixture {
        loose_controls: controls,
        ..PageFixture::default()
    })
}

#[test]
fn test_collects_labeled_checkbox_in_list_item() {
    let page = page_with(vec![ControlFixture::calendar("Work", true)]);
    let calendars = VisibleCollector::new(&page).collect();

    assert_eq!(calendars.len(), 1);
    let entry = calendars.get("Work").unwrap();
    assert!(entry.checked);
    assert_eq!(entry.id, "Work");
}

/// Controls whose label matches a select-all/deselect phrase look like
/// calendar checkboxes but must never be treated as calendars.
#[rstest]
#[case("Select all calendars")]
#[case("Select all")]
#[case("Deselect all")]
#[case("Deselect everything in this list")]
#[case("Deselection committee")]
fn test_control_phrases_are_excluded(#[case] label: &str) {
    let page = page_with(vec![ControlFixture::calendar(label, true)]);
    let calendars = VisibleCollector::new(&page).collect();
    assert!(calendars.is_empty(), "label {:?} should be excluded", label);
}

/// A similarly named real calendar is not caught by the phrase filter — the
/// match is a case-sensitive substring check against the exact phrases.
#[rstest]
#[case("Selected works")]
#[case("Committee selections")]
fn test_near_miss_labels_are_kept(#[case] label: &str) {
    let page = page_with(vec![ControlFixture::calendar(label, false)]);
    let calendars = VisibleCollector::new(&page).collect();
    assert!(calendars.contains(label));
}

#[test]
fn test_unlabeled_and_empty_labels_are_skipped() {
    let page = page_with(vec![
        ControlFixture {
            label: None,
            in_list_item: true,
            ..ControlFixture::default()
        },
        ControlFixture {
            label: Some(String::new()),
            in_list_item: true,
            ..ControlFixture::default()
        },
        ControlFixture::calendar("Work", true),
    ]);
    let calendars = VisibleCollector::new(&page).collect();
    assert_eq!(calendars.len(), 1);
}

/// The nesting guard: a checkbox neither inside a list item nor inside a
/// calendars-labeled container is some unrelated page control.
#[rstest]
#[case(false, false, false)]
#[case(true, false, true)]
#[case(false, true, true)]
#[case(true, true, true)]
fn test_nesting_guard(
    #[case] in_list_item: bool,
    #[case] in_calendar_list: bool,
    #[case] expected: bool,
) {
    let page = page_with(vec![ControlFixture {
        label: Some("Work".to_string()),
        in_list_item,
        in_calendar_list,
        ..ControlFixture::default()
    }]);
    let calendars = VisibleCollector::new(&page).collect();
    assert_eq!(calendars.contains("Work"), expected);
}

/// Duplicate labels collapse to the most recently observed state.
#[test]
fn test_duplicate_labels_last_observation_wins() {
    let page = page_with(vec![
        ControlFixture::calendar("Work", true),
        ControlFixture::calendar("Work", false),
    ]);
    let calendars = VisibleCollector::new(&page).collect();

    assert_eq!(calendars.len(), 1);
    assert!(!calendars.get("Work").unwrap().checked);
}

#[test]
fn test_dom_id_is_kept_when_present() {
    let page = page_with(vec![ControlFixture {
        label: Some("Work".to_string()),
        dom_id: Some("cb-17".to_string()),
        in_list_item: true,
        ..ControlFixture::default()
    }]);
    let calendars = VisibleCollector::new(&page).collect();
    assert_eq!(calendars.get("Work").unwrap().id, "cb-17");
}

/// Collecting reads without side effects: two collects agree and no clicks
/// are dispatched.
#[test]
fn test_collect_is_idempotent() {
    let page = page_with(vec![
        ControlFixture::calendar("Work", true),
        ControlFixture::calendar("Personal", false),
    ]);
    let collector = VisibleCollector::new(&page);

    let first = collector.collect().into_entries();
    let second = collector.collect().into_entries();
    assert_eq!(first, second);
    assert!(page.clicks().is_empty());
}
