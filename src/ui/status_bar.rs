use crate::fleet::FleetSummary;
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::collections::HashMap;

/// Trait for status bar segments that can be rendered
pub trait StatusSegment {
    /// Get the content to display in this segment
    fn content(&self) -> String;

    /// Get the minimum width required for this segment
    fn min_width(&self) -> u16;

    /// Get the priority of this segment (higher = more important)
    fn priority(&self) -> u8;

    /// Whether this segment should be visible
    fn is_visible(&self) -> bool {
        true
    }

    /// Get custom styling for this segment (optional)
    fn custom_style(&self, _theme: &Theme) -> Option<Style> {
        None
    }
}

/// Fleet overview segment showing machine counts by status
#[derive(Debug, Clone)]
pub struct FleetStatusSegment {
    pub summary: FleetSummary,
}

impl StatusSegment for FleetStatusSegment {
    fn content(&self) -> String {
        if self.summary.breakdown > 0 {
            format!(
                "Fleet: {}/{} up ✗{}",
                self.summary.operational, self.summary.total, self.summary.breakdown
            )
        } else {
            format!("Fleet: {}/{} up", self.summary.operational, self.summary.total)
        }
    }

    fn min_width(&self) -> u16 {
        14
    }

    fn priority(&self) -> u8 {
        90 // High priority
    }

    fn custom_style(&self, theme: &Theme) -> Option<Style> {
        if self.summary.breakdown > 0 {
            Some(
                Style::default()
                    .fg(theme.colors.palette.error)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            None
        }
    }
}

/// State of the simulated telematics link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataLinkStatus {
    Online,
    Checking,
    Offline,
}

/// Data-link indicator segment
#[derive(Debug, Clone)]
pub struct DataLinkSegment {
    pub status: DataLinkStatus,
}

impl StatusSegment for DataLinkSegment {
    fn content(&self) -> String {
        match self.status {
            DataLinkStatus::Online => "Link: ● online".to_string(),
            DataLinkStatus::Checking => "Link: ⟳ checking".to_string(),
            DataLinkStatus::Offline => "Link: ○ offline".to_string(),
        }
    }

    fn min_width(&self) -> u16 {
        14
    }

    fn priority(&self) -> u8 {
        70
    }

    fn custom_style(&self, theme: &Theme) -> Option<Style> {
        match self.status {
            DataLinkStatus::Offline => Some(Style::default().fg(theme.colors.palette.warning)),
            _ => None,
        }
    }
}

/// Service-meter simulation segment
#[derive(Debug, Clone)]
pub struct MeterSegment {
    pub paused: bool,
    pub ticks_applied: u64,
}

impl StatusSegment for MeterSegment {
    fn content(&self) -> String {
        if self.paused {
            "SMU: ⏸ paused".to_string()
        } else {
            format!("SMU: ▶ {} ticks", self.ticks_applied)
        }
    }

    fn min_width(&self) -> u16 {
        12
    }

    fn priority(&self) -> u8 {
        60
    }

    fn custom_style(&self, theme: &Theme) -> Option<Style> {
        if self.paused {
            Some(Style::default().fg(theme.colors.palette.text_muted))
        } else {
            None
        }
    }
}

/// Wall-clock segment
#[derive(Debug, Clone)]
pub struct ClockSegment {
    pub current_time: String,
}

impl StatusSegment for ClockSegment {
    fn content(&self) -> String {
        self.current_time.clone()
    }

    fn min_width(&self) -> u16 {
        8
    }

    fn priority(&self) -> u8 {
        50
    }
}

/// Navigation hints segment
#[derive(Debug, Clone)]
pub struct NavigationHintsSegment {
    pub current_pane: String,
    pub available_shortcuts: Vec<(String, String)>, // (key, description)
}

impl StatusSegment for NavigationHintsSegment {
    fn content(&self) -> String {
        let shortcuts: Vec<String> = self
            .available_shortcuts
            .iter()
            .take(3) // Show max 3 shortcuts to avoid crowding
            .map(|(key, desc)| format!("{}:{}", key, desc))
            .collect();

        format!("{} | {}", self.current_pane, shortcuts.join(" "))
    }

    fn min_width(&self) -> u16 {
        30
    }

    fn priority(&self) -> u8 {
        30
    }

    fn custom_style(&self, theme: &Theme) -> Option<Style> {
        Some(Style::default().fg(theme.colors.palette.text_muted))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeparatorStyle {
    Simple,  // |
    Minimal, // space
}

/// Status bar composed of prioritized segments
pub struct StatusBar {
    segments: HashMap<String, Box<dyn StatusSegment>>,
    segment_order: Vec<String>,
    separator_style: SeparatorStyle,
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            segments: HashMap::new(),
            segment_order: Vec::new(),
            separator_style: SeparatorStyle::Simple,
        }
    }

    /// Add or replace a status segment. New segments slot in by priority.
    pub fn add_segment<T: StatusSegment + 'static>(&mut self, name: String, segment: T) {
        self.segments.insert(name.clone(), Box::new(segment));
        if !self.segment_order.contains(&name) {
            let priority = self.segments[&name].priority();
            let insert_pos = self
                .segment_order
                .iter()
                .position(|existing_name| self.segments[existing_name].priority() < priority)
                .unwrap_or(self.segment_order.len());
            self.segment_order.insert(insert_pos, name);
        }
    }

    pub fn remove_segment(&mut self, name: &str) {
        self.segments.remove(name);
        self.segment_order.retain(|n| n != name);
    }

    pub fn set_separator_style(&mut self, style: SeparatorStyle) {
        self.separator_style = style;
    }

    /// One-line summary of the bar's configuration for logs and tests.
    pub fn get_status_summary(&self) -> String {
        format!(
            "StatusBar: {} segments, style: {:?}",
            self.segments.len(),
            self.separator_style
        )
    }

    /// Render the status bar
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if area.height == 0 {
            return;
        }

        let visible_segments: Vec<_> = self
            .segment_order
            .iter()
            .filter_map(|name| {
                self.segments.get(name).and_then(|segment| {
                    if segment.is_visible() {
                        Some(segment)
                    } else {
                        None
                    }
                })
            })
            .collect();

        if visible_segments.is_empty() {
            return;
        }

        let available_width = area.width.saturating_sub(2); // Account for borders
        let content = self.create_segments_content(&visible_segments, available_width, theme);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.get_component_style("status_bar", false));

        let paragraph = Paragraph::new(content)
            .block(block)
            .alignment(Alignment::Left)
            .style(theme.get_component_style("status_bar", false));

        frame.render_widget(paragraph, area);
    }

    fn separator_width(&self) -> u16 {
        match self.separator_style {
            SeparatorStyle::Simple => 3, // " | "
            SeparatorStyle::Minimal => 2,
        }
    }

    fn separator(&self, theme: &Theme) -> Span {
        let separator_text = match self.separator_style {
            SeparatorStyle::Simple => " | ",
            SeparatorStyle::Minimal => "  ",
        };
        Span::styled(
            separator_text,
            Style::default().fg(theme.colors.status_bar.section_separator),
        )
    }

    fn create_segments_content(
        &self,
        visible_segments: &[&Box<dyn StatusSegment>],
        available_width: u16,
        theme: &Theme,
    ) -> Line {
        let mut spans = Vec::new();
        let mut remaining_width = available_width;

        for (i, segment) in visible_segments.iter().enumerate() {
            if remaining_width < segment.min_width() {
                break;
            }
            if i > 0 {
                spans.push(self.separator(theme));
                remaining_width = remaining_width.saturating_sub(self.separator_width());
            }

            let content = segment.content();
            let display_content = truncate_to_width(&content, remaining_width);
            remaining_width =
                remaining_width.saturating_sub(display_content.chars().count() as u16);

            let style = segment
                .custom_style(theme)
                .unwrap_or_else(|| Style::default().fg(theme.colors.status_bar.text));
            spans.push(Span::styled(display_content, style));
        }

        Line::from(spans)
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

/// Char-aware truncation with a trailing ellipsis marker.
fn truncate_to_width(content: &str, width: u16) -> String {
    let width = width as usize;
    let char_count = content.chars().count();
    if char_count <= width {
        return content.to_string();
    }
    if width <= 3 {
        return content.chars().take(width).collect();
    }
    let mut truncated: String = content.chars().take(width - 3).collect();
    truncated.push_str("...");
    truncated
}
