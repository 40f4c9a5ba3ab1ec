pub mod diagnosis;
pub mod fleet_table;
pub mod layout;
pub mod sidebar;
pub mod status_bar;
pub mod toast;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::fleet::{FleetRegistry, FleetSummary};
use crate::theme::{Theme, ThemeManager};

use self::{
    diagnosis::DiagnosisPanel,
    fleet_table::FleetTable,
    layout::AppLayout,
    sidebar::Sidebar,
    status_bar::{
        ClockSegment, DataLinkSegment, FleetStatusSegment, MeterSegment,
        NavigationHintsSegment, StatusBar,
    },
    toast::{ToastManager, ToastRenderer},
};

// Re-export sidebar actions for the event layer
pub use sidebar::SidebarAction;

// Re-export the data-link state for the app's status refresh
pub use status_bar::DataLinkStatus;

// Re-export toast types for external use
pub use toast::{Toast, ToastContent, ToastLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Sidebar,
    FleetTable,
    Diagnosis,
}

pub struct UI {
    focused_pane: FocusedPane,
    sidebar: Sidebar,
    fleet_table: FleetTable,
    diagnosis: DiagnosisPanel,
    layout: AppLayout,
    theme_manager: ThemeManager,
    status_bar: StatusBar,
    toast_manager: ToastManager,
}

impl UI {
    pub fn new() -> Self {
        let mut ui = Self {
            focused_pane: FocusedPane::FleetTable,
            sidebar: Sidebar::new(),
            fleet_table: FleetTable::new(),
            diagnosis: DiagnosisPanel::new(),
            layout: AppLayout::new(),
            theme_manager: ThemeManager::new(),
            status_bar: StatusBar::default(),
            toast_manager: ToastManager::new(),
        };

        // Initialize status bar with default segments
        ui.initialize_status_bar();
        ui
    }

    fn initialize_status_bar(&mut self) {
        let fleet_segment = FleetStatusSegment {
            summary: FleetSummary::default(),
        };
        self.status_bar.add_segment("fleet".to_string(), fleet_segment);

        let link_segment = DataLinkSegment {
            status: DataLinkStatus::Checking,
        };
        self.status_bar.add_segment("link".to_string(), link_segment);

        let meter_segment = MeterSegment {
            paused: false,
            ticks_applied: 0,
        };
        self.status_bar.add_segment("meter".to_string(), meter_segment);

        let clock_segment = ClockSegment {
            current_time: chrono::Local::now().format("%H:%M").to_string(),
        };
        self.status_bar.add_segment("clock".to_string(), clock_segment);

        self.update_navigation_hints();
    }

    pub fn render(&mut self, frame: &mut Frame, registry: &FleetRegistry) {
        let size = frame.size();
        let areas = self.layout.calculate_layout(size);

        if let Some(sidebar_area) = areas.sidebar {
            self.render_sidebar(frame, sidebar_area);
        }

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(11)])
            .split(areas.main);

        self.render_fleet_table(frame, main_chunks[0], registry);
        self.render_diagnosis(frame, main_chunks[1]);
        self.render_status_bar(frame, areas.status_bar);

        // Render toasts last so they overlay every pane
        let theme = self.theme_manager.current_theme();
        ToastRenderer::render(frame, size, self.toast_manager.toasts(), theme);
    }

    fn render_sidebar(&mut self, frame: &mut Frame, area: Rect) {
        let is_focused = matches!(self.focused_pane, FocusedPane::Sidebar);
        let theme = self.theme_manager.current_theme();
        self.sidebar.render(frame, area, theme, is_focused);
    }

    fn render_fleet_table(&mut self, frame: &mut Frame, area: Rect, registry: &FleetRegistry) {
        let is_focused = matches!(self.focused_pane, FocusedPane::FleetTable);
        let theme = self.theme_manager.current_theme();
        self.fleet_table.render(frame, area, registry, theme, is_focused);
    }

    fn render_diagnosis(&mut self, frame: &mut Frame, area: Rect) {
        let is_focused = matches!(self.focused_pane, FocusedPane::Diagnosis);
        let theme = self.theme_manager.current_theme();
        self.diagnosis.render(frame, area, theme, is_focused);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let theme = self.theme_manager.current_theme();
        self.status_bar.render(frame, area, theme);
    }

    // Navigation methods
    pub fn next_pane(&mut self) {
        self.focused_pane = match self.focused_pane {
            FocusedPane::Sidebar => FocusedPane::FleetTable,
            FocusedPane::FleetTable => FocusedPane::Diagnosis,
            FocusedPane::Diagnosis => {
                if self.layout.is_sidebar_visible() {
                    FocusedPane::Sidebar
                } else {
                    FocusedPane::FleetTable
                }
            }
        };
        self.update_navigation_hints();
    }

    pub fn previous_pane(&mut self) {
        self.focused_pane = match self.focused_pane {
            FocusedPane::Sidebar => FocusedPane::Diagnosis,
            FocusedPane::FleetTable => {
                if self.layout.is_sidebar_visible() {
                    FocusedPane::Sidebar
                } else {
                    FocusedPane::Diagnosis
                }
            }
            FocusedPane::Diagnosis => FocusedPane::FleetTable,
        };
        self.update_navigation_hints();
    }

    pub fn focused_pane(&self) -> FocusedPane {
        self.focused_pane
    }

    pub fn set_focused_pane(&mut self, pane: FocusedPane) {
        if matches!(pane, FocusedPane::Sidebar) && !self.layout.is_sidebar_visible() {
            return;
        }
        self.focused_pane = pane;
        self.update_navigation_hints();
    }

    /// Flip sidebar visibility. Invoking twice restores the original state.
    pub fn toggle_sidebar(&mut self) {
        self.layout.toggle_sidebar();
        if !self.layout.is_sidebar_visible()
            && matches!(self.focused_pane, FocusedPane::Sidebar)
        {
            self.focused_pane = FocusedPane::FleetTable;
        }
        self.update_navigation_hints();
    }

    pub fn is_sidebar_visible(&self) -> bool {
        self.layout.is_sidebar_visible()
    }

    pub fn set_sidebar_visible(&mut self, visible: bool) {
        self.layout.set_sidebar_visible(visible);
        if !visible && matches!(self.focused_pane, FocusedPane::Sidebar) {
            self.focused_pane = FocusedPane::FleetTable;
        }
    }

    // Accessors for pane components
    pub fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    pub fn sidebar_mut(&mut self) -> &mut Sidebar {
        &mut self.sidebar
    }

    pub fn fleet_table_mut(&mut self) -> &mut FleetTable {
        &mut self.fleet_table
    }

    pub fn diagnosis(&self) -> &DiagnosisPanel {
        &self.diagnosis
    }

    pub fn diagnosis_mut(&mut self) -> &mut DiagnosisPanel {
        &mut self.diagnosis
    }

    // Toast management methods
    pub fn notify(&mut self, message: impl Into<String>, level: ToastLevel) {
        self.toast_manager.notify(message, level);
    }

    pub fn toast_manager(&self) -> &ToastManager {
        &self.toast_manager
    }

    pub fn toast_manager_mut(&mut self) -> &mut ToastManager {
        &mut self.toast_manager
    }

    /// Drop expired toasts; called once per event-loop pass.
    pub fn update_toasts(&mut self) {
        self.toast_manager.update();
    }

    pub fn dismiss_toast(&mut self) -> bool {
        self.toast_manager.dismiss_newest()
    }

    // Theme management methods
    pub fn set_theme(&mut self, theme_name: &str) -> Result<(), String> {
        self.theme_manager.set_theme(theme_name)
    }

    pub fn current_theme(&self) -> &Theme {
        self.theme_manager.current_theme()
    }

    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    // Status bar management methods
    pub fn update_navigation_hints(&mut self) {
        let current_pane_name = match self.focused_pane {
            FocusedPane::Sidebar => "Navigation",
            FocusedPane::FleetTable => "Fleet",
            FocusedPane::Diagnosis => "Diagnosis",
        };

        let nav_segment = NavigationHintsSegment {
            current_pane: current_pane_name.to_string(),
            available_shortcuts: self.get_current_shortcuts(),
        };

        self.status_bar.add_segment("navigation".to_string(), nav_segment);
    }

    fn get_current_shortcuts(&self) -> Vec<(String, String)> {
        match self.focused_pane {
            FocusedPane::Sidebar => vec![
                ("Tab".to_string(), "Switch".to_string()),
                ("j/k".to_string(), "Navigate".to_string()),
                ("Enter".to_string(), "Select".to_string()),
                ("b".to_string(), "Hide".to_string()),
            ],
            FocusedPane::FleetTable => vec![
                ("Tab".to_string(), "Switch".to_string()),
                ("j/k".to_string(), "Navigate".to_string()),
                ("d".to_string(), "Diagnose".to_string()),
                ("p".to_string(), "Pause Meter".to_string()),
                ("q".to_string(), "Quit".to_string()),
            ],
            FocusedPane::Diagnosis => vec![
                ("Enter".to_string(), "Analyze".to_string()),
                ("Esc".to_string(), "Back".to_string()),
                ("x".to_string(), "Dismiss Toast".to_string()),
            ],
        }
    }

    pub fn update_fleet_status(&mut self, summary: FleetSummary) {
        let fleet_segment = FleetStatusSegment { summary };
        self.status_bar.add_segment("fleet".to_string(), fleet_segment);
    }

    pub fn update_data_link(&mut self, status: DataLinkStatus) {
        let link_segment = DataLinkSegment { status };
        self.status_bar.add_segment("link".to_string(), link_segment);
    }

    pub fn update_meter_status(&mut self, paused: bool, ticks_applied: u64) {
        let meter_segment = MeterSegment {
            paused,
            ticks_applied,
        };
        self.status_bar.add_segment("meter".to_string(), meter_segment);
    }

    pub fn update_clock(&mut self, time: String) {
        let clock_segment = ClockSegment { current_time: time };
        self.status_bar.add_segment("clock".to_string(), clock_segment);
    }
}

impl Default for UI {
    fn default() -> Self {
        Self::new()
    }
}
