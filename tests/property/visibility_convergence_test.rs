//! Property-based tests for visibility synchronization.
//!
//! For any virtualized calendar list and any set of targets, driving
//! visibility must leave every targeted calendar that exists on the page in
//! its desired state, never touch untargeted calendars, and restore the
//! container's scroll offset.

use calgroups::database::Database;
use calgroups::page::sim::{ContainerFixture, ControlFixture};
use calgroups::page::{PageFixture, SimulatedPage};
use calgroups::services::sync_coordinator::SyncCoordinator;
use calgroups::types::calendar::VisibilityTarget;
use calgroups::types::settings::{EngineSettings, ScanTiming};
use proptest::prelude::*;

fn fast_settings() -> EngineSettings {
    EngineSettings {
        timing: ScanTiming::zero(),
        ..EngineSettings::default()
    }
}

/// Strategy: initial checked states for a list of 1..30 uniquely named rows,
/// plus desired states for a subset of names (some possibly not on the page).
fn arb_case() -> impl Strategy<Value = (Vec<bool>, Vec<(u8, bool)>)> {
    (
        prop::collection::vec(any::<bool>(), 1..30),
        prop::collection::vec((0u8..35, any::<bool>()), 0..10),
    )
}

fn name(i: usize) -> String {
    format!("Calendar {}", i)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn sync_converges_to_desired_states((initial, raw_targets) in arb_case()) {
        let rows: Vec<ControlFixture> = initial
            .iter()
            .enumerate()
            .map(|(i, &checked)| ControlFixture::calendar(&name(i), checked))
            .collect();
        let page = SimulatedPage::from_fixture(PageFixture {
            containers: vec![ContainerFixture {
                rows,
                ..ContainerFixture::default()
            }],
            ..PageFixture::default()
        });
        let db = Database::open_in_memory().unwrap();
        let settings = fast_settings();

        // Deduplicate target names; the last desired state per name wins in
        // the request map, so keep only that one.
        let mut targets: Vec<VisibilityTarget> = Vec::new();
        for (n, visible) in &raw_targets {
            let target_name = name(*n as usize);
            targets.retain(|t| t.name != target_name);
            targets.push(VisibilityTarget { name: target_name, visible: *visible });
        }

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        let outcome = runtime.block_on(async {
            SyncCoordinator::new(&page, &db, &settings)
                .set_visibility(&targets)
                .await
        });

        prop_assert!(outcome.success);

        let on_page = |t: &VisibilityTarget| {
            t.name
                .strip_prefix("Calendar ")
                .and_then(|s| s.parse::<usize>().ok())
                .map(|i| i < initial.len())
                .unwrap_or(false)
        };

        // Every target that exists on the page ends in its desired state and
        // is counted; targets that don't exist are simply not delivered.
        let present = targets.iter().filter(|t| on_page(t)).count();
        prop_assert_eq!(outcome.toggled, present);
        for target in targets.iter().filter(|t| on_page(t)) {
            prop_assert_eq!(
                page.checked_anywhere(&target.name),
                Some(target.visible),
                "{} did not converge",
                target.name
            );
        }

        // Untargeted calendars are untouched.
        for (i, &checked) in initial.iter().enumerate() {
            if !targets.iter().any(|t| t.name == name(i)) {
                prop_assert_eq!(page.checked_anywhere(&name(i)), Some(checked));
            }
        }

        // The container's offset is back where it started.
        prop_assert_eq!(page.scroll_top_of(page.container_id(0)), Some(0.0));
    }

    // Re-running the same request is idempotent: the second run dispatches no
    // clicks at all.
    #[test]
    fn second_sync_dispatches_nothing((initial, raw_targets) in arb_case()) {
        let rows: Vec<ControlFixture> = initial
            .iter()
            .enumerate()
            .map(|(i, &checked)| ControlFixture::calendar(&name(i), checked))
            .collect();
        let page = SimulatedPage::from_fixture(PageFixture {
            containers: vec![ContainerFixture {
                rows,
                ..ContainerFixture::default()
            }],
            ..PageFixture::default()
        });
        let db = Database::open_in_memory().unwrap();
        let settings = fast_settings();

        let targets: Vec<VisibilityTarget> = raw_targets
            .iter()
            .map(|(n, visible)| VisibilityTarget { name: name(*n as usize), visible: *visible })
            .collect();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        runtime.block_on(async {
            let coordinator = SyncCoordinator::new(&page, &db, &settings);
            coordinator.set_visibility(&targets).await;
            let clicks_after_first = page.clicks().len();
            coordinator.set_visibility(&targets).await;
            prop_assert_eq!(page.clicks().len(), clicks_after_first);
            Ok(())
        })?;
    }
}
