//! Exhaustive scanner for calgroups.
//!
//! Drives every scroll container outside the main content pane through its
//! full scroll range, collecting the visible calendar set at each step and
//! merging into a superset. The host virtualizes long calendar lists — rows
//! not physically rendered are invisible to any query — and may mount
//! different rows depending on scroll direction, hence the forward+backward
//! double pass with settle delays rather than a single sweep.
//!
//! Not cancellable mid-flight: a scan runs to completion, typically several
//! seconds at production timing. Containers are processed strictly
//! sequentially; concurrent scrolling of multiple containers is never
//! attempted.

use tokio::time::sleep;

use crate::page::PageAdapter;
use crate::services::visible_collector::VisibleCollector;
use crate::types::calendar::{CalendarCollection, CalendarEntry};
use crate::types::page::{NodeId, SectionLabel, ToggleState, MAIN_PANE_RULES};
use crate::types::scroll::{forward_positions, reverse_positions, scroll_step};
use crate::types::settings::EngineSettings;

/// Locates the main content pane by trying each detection strategy in
/// priority order. `None` means no rule matched; scanning proceeds without
/// an exclusion zone.
pub fn find_main_pane<P: PageAdapter>(page: &P) -> Option<NodeId> {
    MAIN_PANE_RULES.iter().find_map(|rule| page.query_pane(rule))
}

/// Scroll containers outside the main pane whose overflow exceeds the
/// configured epsilon. Discovered fresh on every call — the host layout can
/// change between requests, so container handles are never cached.
pub fn discover_containers<P: PageAdapter>(
    page: &P,
    settings: &EngineSettings,
    exclude: Option<NodeId>,
) -> Vec<NodeId> {
    page.scroll_candidates(exclude)
        .into_iter()
        .filter(|&id| {
            page.scroll_metrics(id)
                .map(|m| m.is_scrollable(settings.scroll_epsilon_px))
                .unwrap_or(false)
        })
        .collect()
}

/// Asynchronous full enumeration of the sidebar's calendar entries.
pub struct ExhaustiveScanner<'a, P: PageAdapter> {
    page: &'a P,
    settings: &'a EngineSettings,
}

impl<'a, P: PageAdapter> ExhaustiveScanner<'a, P> {
    pub fn new(page: &'a P, settings: &'a EngineSettings) -> Self {
        Self { page, settings }
    }

    /// Runs the full scan and returns the merged entries in
    /// first-observation order.
    ///
    /// Finding no scrollable container is a degraded-but-valid outcome, not
    /// an error: the result is then whatever a single collect saw (the host
    /// list may simply be short enough not to need virtualization).
    pub async fn scan(&self) -> Vec<CalendarEntry> {
        let mut calendars = CalendarCollection::new();
        let collector = VisibleCollector::new(self.page);

        let main_pane = find_main_pane(self.page);

        self.expand_sections().await;

        let containers = discover_containers(self.page, self.settings, main_pane);
        for container in containers {
            self.sweep_container(container, &collector, &mut calendars)
                .await;
        }

        // Final pass at whatever the natural resting scroll position is.
        calendars.merge(collector.collect());

        calendars.into_entries()
    }

    /// Expands the known collapsible sections through their own toggles,
    /// then waits once for the host's re-render. The wait is unconditional:
    /// the host may still be animating a collapse the toggle state has
    /// already stopped reporting.
    async fn expand_sections(&self) {
        for section in SectionLabel::ALL {
            if self.page.section_toggle(section) == Some(ToggleState::Collapsed) {
                self.page.activate_section_toggle(section);
            }
        }
        sleep(self.settings.timing.section_settle()).await;
    }

    /// Walks one container through its full range: stepped descent, forced
    /// bottom, stepped ascent, forced top — collecting after every move —
    /// then restores the container's original offset.
    async fn sweep_container(
        &self,
        container: NodeId,
        collector: &VisibleCollector<'a, P>,
        calendars: &mut CalendarCollection,
    ) {
        let Some(metrics) = self.page.scroll_metrics(container) else {
            return;
        };
        if metrics.scroll_height <= metrics.client_height {
            return;
        }

        let original_scroll = metrics.scroll_top;
        let step = scroll_step(&metrics, self.settings.min_scroll_step_px);
        let timing = &self.settings.timing;

        for pos in forward_positions(metrics.scroll_height, step) {
            self.page.set_scroll_top(container, pos);
            sleep(timing.step_settle()).await;
            calendars.merge(collector.collect());
        }

        // The stepped walk can land short of the exact bottom; force it.
        self.page.set_scroll_top(container, metrics.scroll_height);
        sleep(timing.edge_settle()).await;
        calendars.merge(collector.collect());

        for pos in reverse_positions(metrics.scroll_height, step) {
            self.page.set_scroll_top(container, pos);
            sleep(timing.step_settle()).await;
            calendars.merge(collector.collect());
        }

        self.page.set_scroll_top(container, 0.0);
        sleep(timing.edge_settle()).await;
        calendars.merge(collector.collect());

        // Scanning must not leave visible UI state altered.
        self.page.set_scroll_top(container, original_scroll);
    }
}
