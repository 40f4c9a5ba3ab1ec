//! Navigation sidebar
//!
//! Collapsible pane listing the dashboard panels and session actions. Its
//! visibility is a single flag on the layout; this module only handles
//! item selection and rendering.

use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// What an activated sidebar item asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarAction {
    FocusFleet,
    FocusDiagnosis,
    ToggleMeter,
    DismissToast,
    Quit,
}

/// Sidebar entry types
#[derive(Debug, Clone)]
enum NavItem {
    Section { label: &'static str },
    Action {
        label: &'static str,
        shortcut: &'static str,
        action: SidebarAction,
    },
}

/// Sidebar state and rendering
pub struct Sidebar {
    items: Vec<NavItem>,
    list_state: ListState,
}

impl Sidebar {
    pub fn new() -> Self {
        let items = vec![
            NavItem::Section { label: "Panels" },
            NavItem::Action {
                label: "Fleet overview",
                shortcut: "f",
                action: SidebarAction::FocusFleet,
            },
            NavItem::Action {
                label: "Diagnosis",
                shortcut: "d",
                action: SidebarAction::FocusDiagnosis,
            },
            NavItem::Section { label: "Session" },
            NavItem::Action {
                label: "Pause/resume meter",
                shortcut: "p",
                action: SidebarAction::ToggleMeter,
            },
            NavItem::Action {
                label: "Dismiss toast",
                shortcut: "x",
                action: SidebarAction::DismissToast,
            },
            NavItem::Action {
                label: "Quit",
                shortcut: "q",
                action: SidebarAction::Quit,
            },
        ];

        let mut list_state = ListState::default();
        list_state.select(Some(1)); // First actionable item
        Self { items, list_state }
    }

    /// Move selection down, skipping section labels.
    pub fn select_next(&mut self) {
        let current = self.list_state.selected().unwrap_or(0);
        let mut next = current;
        for candidate in (current + 1)..self.items.len() {
            if matches!(self.items[candidate], NavItem::Action { .. }) {
                next = candidate;
                break;
            }
        }
        self.list_state.select(Some(next));
    }

    /// Move selection up, skipping section labels.
    pub fn select_previous(&mut self) {
        let current = self.list_state.selected().unwrap_or(0);
        let mut previous = current;
        for candidate in (0..current).rev() {
            if matches!(self.items[candidate], NavItem::Action { .. }) {
                previous = candidate;
                break;
            }
        }
        self.list_state.select(Some(previous));
    }

    /// Action behind the currently selected item.
    pub fn activate(&self) -> Option<SidebarAction> {
        match self.items.get(self.list_state.selected()?) {
            Some(NavItem::Action { action, .. }) => Some(*action),
            _ => None,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme, is_focused: bool) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.get_component_style("border", is_focused))
            .title(" Navigation ");

        let list_items: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| match item {
                NavItem::Section { label } => ListItem::new(Line::from(Span::styled(
                    format!(" {}", label),
                    Style::default().fg(theme.colors.sidebar.section_label),
                ))),
                NavItem::Action { label, shortcut, .. } => ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("   {} ", label),
                        Style::default().fg(theme.colors.sidebar.item_normal),
                    ),
                    Span::styled(
                        format!("[{}]", shortcut),
                        Style::default().fg(theme.colors.sidebar.shortcut_hint),
                    ),
                ])),
            })
            .collect();

        let list = List::new(list_items)
            .block(block)
            .highlight_style(theme.get_selected_style("sidebar"));

        frame.render_stateful_widget(list, area, &mut self.list_state);
    }
}

impl Default for Sidebar {
    fn default() -> Self {
        Self::new()
    }
}
