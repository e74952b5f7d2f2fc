//! Unit tests for the checkUI probe: one issue string per missing host
//! dependency, `healthy` iff none are missing.

use calgroups::page::sim::{ContainerFixture, ControlFixture, SectionFixture};
use calgroups::page::{PageFixture, SimulatedPage};
use calgroups::services::ui_health::check_ui;
use calgroups::types::page::SectionLabel;
use calgroups::types::settings::EngineSettings;

fn settings() -> EngineSettings {
    EngineSettings::default()
}

#[test]
fn test_sample_page_is_healthy() {
    let page = SimulatedPage::sample();
    let report = check_ui(&page, &settings());

    assert!(report.healthy);
    assert!(report.issues.is_empty());
}

#[test]
fn test_missing_sections_are_reported() {
    let page = SimulatedPage::from_fixture(PageFixture {
        sections: vec![SectionFixture {
            label: SectionLabel::MyCalendars,
            collapsed: false,
        }],
        containers: vec![ContainerFixture {
            rows: (0..10)
                .map(|i| ControlFixture::calendar(&format!("Cal {}", i), true))
                .collect(),
            ..ContainerFixture::default()
        }],
        ..PageFixture::default()
    });

    let report = check_ui(&page, &settings());

    assert!(!report.healthy);
    assert_eq!(
        report.issues,
        vec!["Could not find \"Other calendars\" section".to_string()]
    );
}

#[test]
fn test_missing_checkboxes_and_containers_are_reported() {
    let page = SimulatedPage::from_fixture(PageFixture::default());

    let report = check_ui(&page, &settings());

    assert!(!report.healthy);
    assert_eq!(
        report.issues,
        vec![
            "No calendar checkboxes found".to_string(),
            "No scrollable calendar containers found".to_string(),
        ]
    );
}

/// An unlabeled checkbox does not satisfy the checkbox probe.
#[test]
fn test_unlabeled_checkboxes_do_not_count() {
    let page = SimulatedPage::from_fixture(PageFixture {
        loose_controls: vec![ControlFixture {
            label: None,
            ..ControlFixture::default()
        }],
        ..PageFixture::default()
    });

    let report = check_ui(&page, &settings());
    assert!(report
        .issues
        .contains(&"No calendar checkboxes found".to_string()));
}

/// A container that barely overflows is within scrollbar rounding noise and
/// does not count as scrollable.
#[test]
fn test_epsilon_filters_rounding_noise() {
    let page = SimulatedPage::from_fixture(PageFixture {
        containers: vec![ContainerFixture {
            client_height: 195.0,
            // 5 rows * 40px = 200px: overflows by 5px, under the 10px epsilon
            rows: (0..5)
                .map(|i| ControlFixture::calendar(&format!("Cal {}", i), true))
                .collect(),
            ..ContainerFixture::default()
        }],
        ..PageFixture::default()
    });

    let report = check_ui(&page, &settings());
    assert!(report
        .issues
        .contains(&"No scrollable calendar containers found".to_string()));
}

/// Unlike the scanner, the probe also accepts a scrollable container inside
/// the main pane — it checks for virtualization support, not scan targets.
#[test]
fn test_main_pane_container_satisfies_scrollable_probe() {
    let page = SimulatedPage::from_fixture(PageFixture {
        containers: vec![ContainerFixture {
            in_main_pane: true,
            rows: (0..10)
                .map(|i| ControlFixture::calendar(&format!("Cal {}", i), true))
                .collect(),
            ..ContainerFixture::default()
        }],
        ..PageFixture::default()
    });

    let report = check_ui(&page, &settings());
    assert!(!report
        .issues
        .contains(&"No scrollable calendar containers found".to_string()));
}
