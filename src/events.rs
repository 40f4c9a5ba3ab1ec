use crate::fleet::FleetRegistry;
use crate::ui::{FocusedPane, SidebarAction, UI};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct EventHandler {
    should_quit: bool,
}

/// Result of handling a key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    AnalyzeFault(String), // Fault code to run through the analyzer
    ToggleMeter,          // Pause or resume the service meter ticker
}

impl EventHandler {
    pub fn new() -> Self {
        Self { should_quit: false }
    }

    pub async fn handle_key_event(
        &mut self,
        key: KeyEvent,
        ui: &mut UI,
        registry: &FleetRegistry,
    ) -> EventResult {
        // Ctrl+C quits from anywhere, even while typing a fault code
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return EventResult::Continue;
        }

        // Text input routing for the diagnosis prompt
        if ui.focused_pane() == FocusedPane::Diagnosis {
            match key.code {
                KeyCode::Char(c) => {
                    ui.diagnosis_mut().handle_char(c);
                    return EventResult::Continue;
                }
                KeyCode::Backspace => {
                    ui.diagnosis_mut().backspace();
                    return EventResult::Continue;
                }
                KeyCode::Enter => {
                    if let Some(code) = ui.diagnosis_mut().submit() {
                        return EventResult::AnalyzeFault(code);
                    }
                    return EventResult::Continue;
                }
                KeyCode::Esc => {
                    ui.set_focused_pane(FocusedPane::FleetTable);
                    return EventResult::Continue;
                }
                _ => {}
            }
        }

        match key.code {
            // Global quit
            KeyCode::Char('q') => {
                self.should_quit = true;
            }

            // Navigation between panes
            KeyCode::Tab => {
                ui.next_pane();
            }
            KeyCode::BackTab => {
                ui.previous_pane();
            }

            // Vim-style pane movement
            KeyCode::Char('h') => {
                ui.previous_pane();
            }
            KeyCode::Char('l') => {
                ui.next_pane();
            }
            KeyCode::Char('j') | KeyCode::Down => match ui.focused_pane() {
                FocusedPane::Sidebar => {
                    ui.sidebar_mut().select_next();
                }
                FocusedPane::FleetTable => {
                    ui.fleet_table_mut().select_next(registry.machines().len());
                }
                FocusedPane::Diagnosis => {}
            },
            KeyCode::Char('k') | KeyCode::Up => match ui.focused_pane() {
                FocusedPane::Sidebar => {
                    ui.sidebar_mut().select_previous();
                }
                FocusedPane::FleetTable => {
                    ui.fleet_table_mut().select_previous();
                }
                FocusedPane::Diagnosis => {}
            },

            // Sidebar visibility
            KeyCode::Char('b') => {
                ui.toggle_sidebar();
            }

            // Jump to the diagnosis prompt
            KeyCode::Char('d') => {
                ui.set_focused_pane(FocusedPane::Diagnosis);
            }

            // Pause or resume the service meter
            KeyCode::Char('p') => {
                return EventResult::ToggleMeter;
            }

            // Dismiss the most recent toast
            KeyCode::Char('x') => {
                ui.dismiss_toast();
            }

            // Enter activates the highlighted sidebar entry
            KeyCode::Enter => {
                if ui.focused_pane() == FocusedPane::Sidebar {
                    return self.handle_sidebar_select(ui);
                }
            }

            _ => {}
        }

        EventResult::Continue
    }

    fn handle_sidebar_select(&mut self, ui: &mut UI) -> EventResult {
        match ui.sidebar().activate() {
            Some(SidebarAction::FocusFleet) => {
                ui.set_focused_pane(FocusedPane::FleetTable);
            }
            Some(SidebarAction::FocusDiagnosis) => {
                ui.set_focused_pane(FocusedPane::Diagnosis);
            }
            Some(SidebarAction::ToggleMeter) => {
                return EventResult::ToggleMeter;
            }
            Some(SidebarAction::DismissToast) => {
                ui.dismiss_toast();
            }
            Some(SidebarAction::Quit) => {
                self.should_quit = true;
            }
            None => {}
        }
        EventResult::Continue
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ToastLevel;

    fn plain(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn test_q_requests_quit() {
        let mut handler = EventHandler::new();
        let mut ui = UI::new();
        let registry = FleetRegistry::with_sample_fleet();

        assert!(!handler.should_quit());
        handler
            .handle_key_event(plain(KeyCode::Char('q')), &mut ui, &registry)
            .await;
        assert!(handler.should_quit());
    }

    #[tokio::test]
    async fn test_b_toggles_sidebar() {
        let mut handler = EventHandler::new();
        let mut ui = UI::new();
        let registry = FleetRegistry::with_sample_fleet();
        let initial = ui.is_sidebar_visible();

        handler
            .handle_key_event(plain(KeyCode::Char('b')), &mut ui, &registry)
            .await;
        assert_ne!(ui.is_sidebar_visible(), initial);

        handler
            .handle_key_event(plain(KeyCode::Char('b')), &mut ui, &registry)
            .await;
        assert_eq!(ui.is_sidebar_visible(), initial);
    }

    #[tokio::test]
    async fn test_typed_chars_route_to_diagnosis_input() {
        let mut handler = EventHandler::new();
        let mut ui = UI::new();
        let registry = FleetRegistry::with_sample_fleet();

        ui.set_focused_pane(FocusedPane::Diagnosis);
        for c in ['E', '3', '6', '0'] {
            handler
                .handle_key_event(plain(KeyCode::Char(c)), &mut ui, &registry)
                .await;
        }
        assert_eq!(ui.diagnosis().input(), "E360");

        // q is text here, not a quit command
        handler
            .handle_key_event(plain(KeyCode::Char('q')), &mut ui, &registry)
            .await;
        assert!(!handler.should_quit());

        handler
            .handle_key_event(plain(KeyCode::Backspace), &mut ui, &registry)
            .await;
        assert_eq!(ui.diagnosis().input(), "E360");
    }

    #[tokio::test]
    async fn test_enter_submits_fault_code() {
        let mut handler = EventHandler::new();
        let mut ui = UI::new();
        let registry = FleetRegistry::with_sample_fleet();

        ui.set_focused_pane(FocusedPane::Diagnosis);
        for c in "70-2".chars() {
            handler
                .handle_key_event(plain(KeyCode::Char(c)), &mut ui, &registry)
                .await;
        }
        let result = handler
            .handle_key_event(plain(KeyCode::Enter), &mut ui, &registry)
            .await;
        assert_eq!(result, EventResult::AnalyzeFault("70-2".to_string()));
        assert!(ui.diagnosis().input().is_empty());
    }

    #[tokio::test]
    async fn test_p_requests_meter_toggle() {
        let mut handler = EventHandler::new();
        let mut ui = UI::new();
        let registry = FleetRegistry::with_sample_fleet();

        let result = handler
            .handle_key_event(plain(KeyCode::Char('p')), &mut ui, &registry)
            .await;
        assert_eq!(result, EventResult::ToggleMeter);
    }

    #[tokio::test]
    async fn test_x_dismisses_newest_toast() {
        let mut handler = EventHandler::new();
        let mut ui = UI::new();
        let registry = FleetRegistry::with_sample_fleet();

        ui.notify("Filter change overdue", ToastLevel::Warning);
        assert!(ui.toast_manager().has_toasts());

        handler
            .handle_key_event(plain(KeyCode::Char('x')), &mut ui, &registry)
            .await;
        assert!(!ui.toast_manager().has_toasts());
    }
}
