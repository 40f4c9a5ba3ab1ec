use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutAreas {
    /// None while the sidebar is hidden.
    pub sidebar: Option<Rect>,
    pub main: Rect,
    pub status_bar: Rect,
}

pub struct AppLayout {
    sidebar_width: u16,
    sidebar_visible: bool,
}

impl AppLayout {
    pub fn new() -> Self {
        Self {
            sidebar_width: 24,
            sidebar_visible: true,
        }
    }

    /// Flip the sidebar visibility flag. Two calls restore the original
    /// state; nothing else in the app writes this flag.
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_visible = !self.sidebar_visible;
    }

    pub fn is_sidebar_visible(&self) -> bool {
        self.sidebar_visible
    }

    pub fn set_sidebar_visible(&mut self, visible: bool) {
        self.sidebar_visible = visible;
    }

    pub fn calculate_layout(&self, area: Rect) -> LayoutAreas {
        // First, split vertically to reserve space for the status bar
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main content area
                Constraint::Length(3), // Status bar (fixed height)
            ])
            .split(area);

        let content_area = vertical_chunks[0];
        let status_bar = vertical_chunks[1];

        if !self.sidebar_visible {
            return LayoutAreas {
                sidebar: None,
                main: content_area,
                status_bar,
            };
        }

        // Then split the content area: [Sidebar | Main panel]
        let horizontal_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(self.sidebar_width), // Fixed width for navigation
                Constraint::Min(30),                    // Remaining space for panels
            ])
            .split(content_area);

        LayoutAreas {
            sidebar: Some(horizontal_chunks[0]),
            main: horizontal_chunks[1],
            status_bar,
        }
    }

    pub fn set_sidebar_width(&mut self, width: u16) {
        self.sidebar_width = width;
    }
}

impl Default for AppLayout {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_toggle_restores_visibility() {
        let mut layout = AppLayout::new();
        let initial = layout.is_sidebar_visible();

        layout.toggle_sidebar();
        assert_eq!(layout.is_sidebar_visible(), !initial);

        layout.toggle_sidebar();
        assert_eq!(layout.is_sidebar_visible(), initial);
    }

    #[test]
    fn test_hidden_sidebar_frees_the_column() {
        let mut layout = AppLayout::new();
        let area = Rect::new(0, 0, 120, 40);

        let with_sidebar = layout.calculate_layout(area);
        assert!(with_sidebar.sidebar.is_some());

        layout.toggle_sidebar();
        let without_sidebar = layout.calculate_layout(area);
        assert!(without_sidebar.sidebar.is_none());
        assert!(without_sidebar.main.width > with_sidebar.main.width);
    }

    #[test]
    fn test_layout_survives_tiny_areas() {
        let layout = AppLayout::new();
        let areas = layout.calculate_layout(Rect::new(0, 0, 0, 0));
        assert_eq!(areas.main.width, 0);
    }
}
