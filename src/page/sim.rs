//! Simulated host page for tests, the demo binary, and the RPC dev harness.
//!
//! Models the parts of the host sidebar this engine depends on: labeled
//! checkboxes nested in list items, collapsible sections, and virtualized
//! scroll containers where a row exists in the "DOM" only while its y-range
//! intersects the scrolled viewport. Rows may additionally be biased to mount
//! only while scrolling in one direction, mimicking the host's
//! direction-dependent row recycling.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::page::PageAdapter;
use crate::types::page::{ControlSnapshot, NodeId, PaneRule, SectionLabel, ToggleState};
use crate::types::scroll::ScrollMetrics;

/// Node id the simulated main content pane answers to.
pub const MAIN_PANE_ID: NodeId = 1;

const FIRST_CONTAINER_ID: NodeId = 10;

fn default_true() -> bool {
    true
}

/// Direction-dependent mounting behavior for one row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MountBias {
    /// Mounts whenever scrolled into view.
    #[default]
    Any,
    /// Mounts only while the container's last scroll moved downward.
    DownwardOnly,
    /// Mounts only while the container's last scroll moved upward.
    UpwardOnly,
}

/// One checkbox-like control in a fixture.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlFixture {
    pub label: Option<String>,
    pub checked: bool,
    pub dom_id: Option<String>,
    #[serde(default = "default_true")]
    pub in_list_item: bool,
    pub in_calendar_list: bool,
    pub mount_bias: MountBias,
}

impl ControlFixture {
    /// A typical calendar row: labeled, checked state given, inside a list item.
    pub fn calendar(label: &str, checked: bool) -> Self {
        Self {
            label: Some(label.to_string()),
            checked,
            in_list_item: true,
            ..Self::default()
        }
    }
}

/// One scroll container in a fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerFixture {
    /// Section whose collapse state gates this container's rows.
    pub section: Option<SectionLabel>,
    /// Whether the container lives inside the main content pane.
    pub in_main_pane: bool,
    pub client_height: f64,
    pub row_height: f64,
    pub rows: Vec<ControlFixture>,
    pub scroll_top: f64,
}

impl Default for ContainerFixture {
    fn default() -> Self {
        Self {
            section: None,
            in_main_pane: false,
            client_height: 200.0,
            row_height: 40.0,
            rows: Vec::new(),
            scroll_top: 0.0,
        }
    }
}

/// Which pane-detection strategies the simulated page answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MainPaneFixture {
    pub role_main: bool,
    pub day_view: bool,
    pub calendar_label: bool,
}

impl Default for MainPaneFixture {
    fn default() -> Self {
        Self {
            role_main: true,
            day_view: false,
            calendar_label: false,
        }
    }
}

/// Presence and initial collapse state of one sidebar section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionFixture {
    pub label: SectionLabel,
    #[serde(default)]
    pub collapsed: bool,
}

/// Serializable description of a simulated page, loadable from disk by the
/// RPC binary's dev harness.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageFixture {
    pub main_pane: MainPaneFixture,
    pub sections: Vec<SectionFixture>,
    pub containers: Vec<ContainerFixture>,
    /// Controls mounted unconditionally, outside any container.
    pub loose_controls: Vec<ControlFixture>,
}

impl Default for PageFixture {
    fn default() -> Self {
        Self {
            main_pane: MainPaneFixture::default(),
            sections: vec![
                SectionFixture {
                    label: SectionLabel::MyCalendars,
                    collapsed: false,
                },
                SectionFixture {
                    label: SectionLabel::OtherCalendars,
                    collapsed: false,
                },
            ],
            containers: Vec::new(),
            loose_controls: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScrollDirection {
    None,
    Down,
    Up,
}

#[derive(Debug)]
struct SimContainer {
    id: NodeId,
    section: Option<SectionLabel>,
    in_main_pane: bool,
    client_height: f64,
    row_height: f64,
    rows: Vec<ControlFixture>,
    scroll_top: f64,
    last_direction: ScrollDirection,
}

impl SimContainer {
    fn scroll_height(&self) -> f64 {
        self.rows.len() as f64 * self.row_height
    }

    fn max_scroll(&self) -> f64 {
        (self.scroll_height() - self.client_height).max(0.0)
    }

    /// Indices of rows currently mounted: inside the viewport and matching
    /// the container's last scroll direction when biased.
    fn mounted_rows(&self) -> Vec<usize> {
        let top = self.scroll_top;
        let bottom = self.scroll_top + self.client_height;
        (0..self.rows.len())
            .filter(|&i| {
                let row_top = i as f64 * self.row_height;
                let row_bottom = row_top + self.row_height;
                if row_bottom <= top || row_top >= bottom {
                    return false;
                }
                match self.rows[i].mount_bias {
                    MountBias::Any => true,
                    MountBias::DownwardOnly => self.last_direction == ScrollDirection::Down,
                    MountBias::UpwardOnly => self.last_direction == ScrollDirection::Up,
                }
            })
            .collect()
    }
}

#[derive(Debug)]
struct SectionState {
    collapsed: bool,
}

#[derive(Debug)]
struct SimState {
    main_pane: MainPaneFixture,
    my_calendars: Option<SectionState>,
    other_calendars: Option<SectionState>,
    containers: Vec<SimContainer>,
    loose_controls: Vec<ControlFixture>,
    clicks: Vec<String>,
}

impl SimState {
    fn section(&self, label: SectionLabel) -> Option<&SectionState> {
        match label {
            SectionLabel::MyCalendars => self.my_calendars.as_ref(),
            SectionLabel::OtherCalendars => self.other_calendars.as_ref(),
        }
    }

    fn section_mut(&mut self, label: SectionLabel) -> Option<&mut SectionState> {
        match label {
            SectionLabel::MyCalendars => self.my_calendars.as_mut(),
            SectionLabel::OtherCalendars => self.other_calendars.as_mut(),
        }
    }

    fn section_collapsed(&self, label: Option<SectionLabel>) -> bool {
        label
            .and_then(|l| self.section(l))
            .map(|s| s.collapsed)
            .unwrap_or(false)
    }

    fn snapshot(control: &ControlFixture) -> ControlSnapshot {
        ControlSnapshot {
            label: control.label.clone(),
            checked: control.checked,
            dom_id: control.dom_id.clone(),
            in_list_item: control.in_list_item,
            in_calendar_list: control.in_calendar_list,
        }
    }

    /// Visits every mounted control; stops early when `f` returns true.
    fn for_each_mounted(&mut self, mut f: impl FnMut(&mut ControlFixture) -> bool) {
        for control in &mut self.loose_controls {
            if f(control) {
                return;
            }
        }
        for ci in 0..self.containers.len() {
            if self.section_collapsed(self.containers[ci].section) {
                continue;
            }
            let mounted = self.containers[ci].mounted_rows();
            for ri in mounted {
                if f(&mut self.containers[ci].rows[ri]) {
                    return;
                }
            }
        }
    }
}

/// In-memory host page implementing [`PageAdapter`].
#[derive(Debug)]
pub struct SimulatedPage {
    state: Mutex<SimState>,
}

impl SimulatedPage {
    pub fn from_fixture(fixture: PageFixture) -> Self {
        let mut my_calendars = None;
        let mut other_calendars = None;
        for section in &fixture.sections {
            let state = SectionState {
                collapsed: section.collapsed,
            };
            match section.label {
                SectionLabel::MyCalendars => my_calendars = Some(state),
                SectionLabel::OtherCalendars => other_calendars = Some(state),
            }
        }

        let containers = fixture
            .containers
            .into_iter()
            .enumerate()
            .map(|(i, c)| SimContainer {
                id: FIRST_CONTAINER_ID + i as NodeId,
                section: c.section,
                in_main_pane: c.in_main_pane,
                client_height: c.client_height,
                row_height: c.row_height,
                rows: c.rows,
                scroll_top: c.scroll_top,
                last_direction: ScrollDirection::None,
            })
            .collect();

        Self {
            state: Mutex::new(SimState {
                main_pane: fixture.main_pane,
                my_calendars,
                other_calendars,
                containers,
                loose_controls: fixture.loose_controls,
                clicks: Vec::new(),
            }),
        }
    }

    /// A small development page: three immediately visible calendars plus a
    /// virtualized list long enough to need scrolling.
    pub fn sample() -> Self {
        let long_list: Vec<ControlFixture> = (1..=25)
            .map(|i| ControlFixture::calendar(&format!("Subscribed calendar {}", i), i % 2 == 0))
            .collect();

        Self::from_fixture(PageFixture {
            containers: vec![
                ContainerFixture {
                    section: Some(SectionLabel::MyCalendars),
                    client_height: 160.0,
                    row_height: 40.0,
                    rows: vec![
                        ControlFixture::calendar("Work", true),
                        ControlFixture::calendar("Personal", false),
                        ControlFixture::calendar("Holidays", true),
                    ],
                    ..ContainerFixture::default()
                },
                ContainerFixture {
                    section: Some(SectionLabel::OtherCalendars),
                    client_height: 200.0,
                    row_height: 40.0,
                    rows: long_list,
                    ..ContainerFixture::default()
                },
            ],
            loose_controls: vec![ControlFixture {
                label: Some("Select all calendars".to_string()),
                in_list_item: false,
                ..ControlFixture::default()
            }],
            ..PageFixture::default()
        })
    }

    /// Node id of the `i`-th fixture container.
    pub fn container_id(&self, index: usize) -> NodeId {
        FIRST_CONTAINER_ID + index as NodeId
    }

    /// Current scroll offset of a container, for restoration assertions.
    pub fn scroll_top_of(&self, container: NodeId) -> Option<f64> {
        let state = self.state.lock().unwrap();
        state
            .containers
            .iter()
            .find(|c| c.id == container)
            .map(|c| c.scroll_top)
    }

    /// Labels clicked so far, in dispatch order.
    pub fn clicks(&self) -> Vec<String> {
        self.state.lock().unwrap().clicks.clone()
    }

    /// How many activations were dispatched on the given label.
    pub fn click_count(&self, label: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .clicks
            .iter()
            .filter(|c| c.as_str() == label)
            .count()
    }

    /// Collapse state of a section, `None` when the section is absent.
    pub fn is_section_collapsed(&self, section: SectionLabel) -> Option<bool> {
        let state = self.state.lock().unwrap();
        state.section(section).map(|s| s.collapsed)
    }

    /// Checked state regardless of mounting, for convergence assertions.
    pub fn checked_anywhere(&self, label: &str) -> Option<bool> {
        let state = self.state.lock().unwrap();
        for control in &state.loose_controls {
            if control.label.as_deref() == Some(label) {
                return Some(control.checked);
            }
        }
        for container in &state.containers {
            for row in &container.rows {
                if row.label.as_deref() == Some(label) {
                    return Some(row.checked);
                }
            }
        }
        None
    }
}

impl PageAdapter for SimulatedPage {
    fn query_pane(&self, rule: &PaneRule) -> Option<NodeId> {
        let state = self.state.lock().unwrap();
        let hit = match rule {
            PaneRule::Role("main") => state.main_pane.role_main,
            PaneRule::ViewName("day") => state.main_pane.day_view,
            PaneRule::LabelContains(text) => {
                state.main_pane.calendar_label && "Calendar".contains(text)
            }
            _ => false,
        };
        if hit {
            Some(MAIN_PANE_ID)
        } else {
            None
        }
    }

    fn section_toggle(&self, section: SectionLabel) -> Option<ToggleState> {
        let state = self.state.lock().unwrap();
        state.section(section).map(|s| {
            if s.collapsed {
                ToggleState::Collapsed
            } else {
                ToggleState::Expanded
            }
        })
    }

    fn activate_section_toggle(&self, section: SectionLabel) -> bool {
        let mut state = self.state.lock().unwrap();
        match state.section_mut(section) {
            Some(s) if s.collapsed => {
                s.collapsed = false;
                true
            }
            _ => false,
        }
    }

    fn labeled_checkboxes(&self) -> Vec<ControlSnapshot> {
        let mut state = self.state.lock().unwrap();
        let mut out = Vec::new();
        state.for_each_mounted(|control| {
            out.push(SimState::snapshot(control));
            false
        });
        out
    }

    fn checkbox_state(&self, label: &str) -> Option<bool> {
        let mut state = self.state.lock().unwrap();
        let mut found = None;
        state.for_each_mounted(|control| {
            if control.label.as_deref() == Some(label) {
                found = Some(control.checked);
                true
            } else {
                false
            }
        });
        found
    }

    fn click_checkbox(&self, label: &str) -> bool {
        let mut state = self.state.lock().unwrap();
        let mut clicked = false;
        state.for_each_mounted(|control| {
            if control.label.as_deref() == Some(label) {
                control.checked = !control.checked;
                clicked = true;
                true
            } else {
                false
            }
        });
        if clicked {
            state.clicks.push(label.to_string());
        }
        clicked
    }

    fn scroll_candidates(&self, exclude: Option<NodeId>) -> Vec<NodeId> {
        let state = self.state.lock().unwrap();
        state
            .containers
            .iter()
            .filter(|c| !(exclude == Some(MAIN_PANE_ID) && c.in_main_pane))
            .map(|c| c.id)
            .collect()
    }

    fn scroll_metrics(&self, container: NodeId) -> Option<ScrollMetrics> {
        let state = self.state.lock().unwrap();
        state
            .containers
            .iter()
            .find(|c| c.id == container)
            .map(|c| ScrollMetrics {
                scroll_top: c.scroll_top,
                scroll_height: c.scroll_height(),
                client_height: c.client_height,
            })
    }

    fn set_scroll_top(&self, container: NodeId, offset: f64) -> bool {
        let mut state = self.state.lock().unwrap();
        let Some(c) = state.containers.iter_mut().find(|c| c.id == container) else {
            return false;
        };
        let clamped = offset.clamp(0.0, c.max_scroll());
        if clamped > c.scroll_top {
            c.last_direction = ScrollDirection::Down;
        } else if clamped < c.scroll_top {
            c.last_direction = ScrollDirection::Up;
        }
        c.scroll_top = clamped;
        true
    }
}
