/// Toast notification system for user feedback
///
/// Non-intrusive notifications stacked in the top-right corner. A toast
/// stays until the operator dismisses it; callers may opt in to a timeout.
/// Message text is sanitized on construction so displayed bytes can never
/// smuggle terminal control sequences; styled content goes through the
/// separate rich constructor.
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::collections::VecDeque;
use tokio::time::{Duration, Instant};
use uuid::Uuid;

/// Header title shared by every toast panel
const TOAST_TITLE: &str = "Fleetdeck Alert";

/// Default cap on simultaneously visible toasts
const MAX_VISIBLE_TOASTS: usize = 4;

/// Notification urgency, presentation only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    /// Parse a level name, falling back to Info for anything unknown.
    ///
    /// This is the only path untyped severity text enters through, so the
    /// fallback rule lives here rather than in every caller.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => ToastLevel::Success,
            "warning" => ToastLevel::Warning,
            "error" => ToastLevel::Error,
            _ => ToastLevel::Info,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ToastLevel::Info => "info",
            ToastLevel::Success => "success",
            ToastLevel::Warning => "warning",
            ToastLevel::Error => "error",
        }
    }
}

/// Toast body content
///
/// `Text` is the default channel: plain text, sanitized on construction.
/// `Rich` is the explicit opt-in for pre-styled lines.
#[derive(Debug, Clone)]
pub enum ToastContent {
    Text(String),
    Rich(Vec<Line<'static>>),
}

impl ToastContent {
    /// Plain text content. Control bytes other than newlines are stripped
    /// and tabs become spaces, so the message renders as literal text.
    pub fn text(message: impl Into<String>) -> Self {
        Self::Text(sanitize_message(&message.into()))
    }

    /// Pre-styled content, used only by callers that build their own lines.
    pub fn rich(lines: Vec<Line<'static>>) -> Self {
        Self::Rich(lines)
    }

    /// The text an operator sees, without styling.
    pub fn visible_text(&self) -> String {
        match self {
            ToastContent::Text(text) => text.clone(),
            ToastContent::Rich(lines) => lines
                .iter()
                .map(|line| {
                    line.spans
                        .iter()
                        .map(|span| span.content.as_ref())
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    fn line_count(&self, width: u16) -> u16 {
        let width = width.max(1) as usize;
        match self {
            ToastContent::Text(text) => text
                .lines()
                .map(|line| (line.chars().count().max(1)).div_ceil(width) as u16)
                .sum::<u16>()
                .max(1),
            ToastContent::Rich(lines) => lines.len().max(1) as u16,
        }
    }
}

/// Strip control bytes that could corrupt the terminal or fake styling.
fn sanitize_message(message: &str) -> String {
    message
        .chars()
        .map(|c| if c == '\t' { ' ' } else { c })
        .filter(|c| *c == '\n' || !c.is_control())
        .collect()
}

/// One toast notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: String,
    pub content: ToastContent,
    pub level: ToastLevel,
    pub created_at: Instant,
    /// None keeps the toast until it is dismissed.
    pub timeout: Option<Duration>,
}

impl Toast {
    /// Create a sticky toast that lives until dismissed.
    pub fn new(content: ToastContent, level: ToastLevel) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content,
            level,
            created_at: Instant::now(),
            timeout: None,
        }
    }

    /// Create a toast that also auto-expires after `timeout`.
    pub fn with_timeout(content: ToastContent, level: ToastLevel, timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..Self::new(content, level)
        }
    }

    /// Expired toasts are swept by the manager; sticky toasts never expire.
    pub fn is_expired(&self) -> bool {
        match self.timeout {
            Some(timeout) => self.created_at.elapsed() >= timeout,
            None => false,
        }
    }

    /// Remaining lifetime fraction for timed toasts, None for sticky ones.
    pub fn remaining_percentage(&self) -> Option<f64> {
        let timeout = self.timeout?;
        let elapsed = self.created_at.elapsed();
        if elapsed >= timeout {
            Some(0.0)
        } else {
            Some(1.0 - (elapsed.as_secs_f64() / timeout.as_secs_f64()))
        }
    }

    pub fn icon(&self) -> &'static str {
        match self.level {
            ToastLevel::Info => "ℹ",
            ToastLevel::Success => "✓",
            ToastLevel::Warning => "⚠",
            ToastLevel::Error => "✗",
        }
    }

    /// (accent, text, background) colors for this level.
    pub fn colors(&self, theme: &Theme) -> (Color, Color, Color) {
        let accent = match self.level {
            ToastLevel::Info => theme.colors.palette.info,
            ToastLevel::Success => theme.colors.palette.success,
            ToastLevel::Warning => theme.colors.palette.warning,
            ToastLevel::Error => theme.colors.palette.error,
        };
        (
            accent,
            theme.colors.palette.text_primary,
            theme.colors.palette.surface,
        )
    }
}

/// Queue of active toasts with a visibility cap
#[derive(Debug)]
pub struct ToastManager {
    toasts: VecDeque<Toast>,
    max_visible: usize,
    default_timeout: Option<Duration>,
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastManager {
    pub fn new() -> Self {
        Self {
            toasts: VecDeque::new(),
            max_visible: MAX_VISIBLE_TOASTS,
            default_timeout: None,
        }
    }

    /// Emit one notification. The message is treated as plain text.
    pub fn notify(&mut self, message: impl Into<String>, level: ToastLevel) {
        let toast = match self.default_timeout {
            Some(timeout) => Toast::with_timeout(ToastContent::text(message), level, timeout),
            None => Toast::new(ToastContent::text(message), level),
        };
        self.push(toast);
    }

    /// Emit a notification that auto-expires after `timeout`.
    pub fn notify_with_timeout(
        &mut self,
        message: impl Into<String>,
        level: ToastLevel,
        timeout: Duration,
    ) {
        self.push(Toast::with_timeout(ToastContent::text(message), level, timeout));
    }

    /// Emit pre-styled content through the explicit rich channel.
    pub fn notify_rich(&mut self, lines: Vec<Line<'static>>, level: ToastLevel) {
        self.push(Toast::new(ToastContent::rich(lines), level));
    }

    fn push(&mut self, toast: Toast) {
        // Evict the oldest toast at capacity
        if self.toasts.len() >= self.max_visible {
            self.toasts.pop_front();
        }
        self.toasts.push_back(toast);
    }

    /// Remove a specific toast by id.
    pub fn dismiss(&mut self, toast_id: &str) {
        self.toasts.retain(|toast| toast.id != toast_id);
    }

    /// Remove the newest toast, the one on top of the stack.
    pub fn dismiss_newest(&mut self) -> bool {
        self.toasts.pop_back().is_some()
    }

    /// Sweep expired timed toasts.
    pub fn update(&mut self) {
        self.toasts.retain(|toast| !toast.is_expired());
    }

    pub fn toasts(&self) -> &VecDeque<Toast> {
        &self.toasts
    }

    pub fn has_toasts(&self) -> bool {
        !self.toasts.is_empty()
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    pub fn set_max_visible(&mut self, max: usize) {
        self.max_visible = max.max(1);
        while self.toasts.len() > self.max_visible {
            self.toasts.pop_front();
        }
    }

    /// Timeout applied to plain `notify` calls; None keeps them sticky.
    pub fn set_default_timeout(&mut self, timeout: Option<Duration>) {
        self.default_timeout = timeout;
    }
}

/// Convenience emitters for the common levels
impl ToastManager {
    pub fn info<S: Into<String>>(&mut self, message: S) {
        self.notify(message, ToastLevel::Info);
    }

    pub fn success<S: Into<String>>(&mut self, message: S) {
        self.notify(message, ToastLevel::Success);
    }

    pub fn warning<S: Into<String>>(&mut self, message: S) {
        self.notify(message, ToastLevel::Warning);
    }

    pub fn error<S: Into<String>>(&mut self, message: S) {
        self.notify(message, ToastLevel::Error);
    }
}

/// Toast overlay renderer
pub struct ToastRenderer;

impl ToastRenderer {
    /// Render the toast stack in the top-right corner, newest on top.
    ///
    /// An area too small to hold a toast panel renders nothing; missing
    /// screen space is never an error.
    pub fn render(frame: &mut Frame, area: Rect, toasts: &VecDeque<Toast>, theme: &Theme) {
        if toasts.is_empty() || area.width < 12 || area.height < 5 {
            return;
        }

        let toast_width = area.width.min(44);
        let x = area.right().saturating_sub(toast_width + 2).max(area.x);
        let mut current_y = area.y + 1;
        let bottom = area.y + area.height.saturating_sub(1);

        for toast in toasts.iter().rev() {
            let body_width = toast_width.saturating_sub(2);
            let height = 2 + toast.content.line_count(body_width).min(3);
            if current_y + height > bottom {
                break;
            }

            let toast_area = Rect {
                x,
                y: current_y,
                width: toast_width,
                height,
            };
            Self::render_toast(frame, toast_area, toast, theme);
            current_y += height + 1;
        }
    }

    /// Render one toast panel: bordered container, header line with title
    /// and dismiss hint, body with the message.
    fn render_toast(frame: &mut Frame, area: Rect, toast: &Toast, theme: &Theme) {
        // Clear the area first for proper overlay
        frame.render_widget(Clear, area);

        let (accent_color, text_color, bg_color) = toast.colors(theme);

        let header = Line::from(vec![
            Span::styled(
                format!(" {} ", toast.icon()),
                Style::default().fg(accent_color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(TOAST_TITLE, Style::default().fg(text_color)),
        ]);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent_color))
            .style(Style::default().bg(bg_color))
            .title(Title::from(header))
            .title(Title::from(Span::styled("[x]", Style::default().fg(accent_color))).alignment(Alignment::Right));

        let body_area = block.inner(area);
        frame.render_widget(block, area);

        let body_lines: Vec<Line> = match &toast.content {
            ToastContent::Text(text) => text
                .lines()
                .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(text_color))))
                .collect(),
            ToastContent::Rich(lines) => lines.clone(),
        };
        let body = Paragraph::new(body_lines)
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Left);
        frame.render_widget(body, body_area);

        if toast.remaining_percentage().is_some() {
            Self::render_progress_bar(frame, area, toast, accent_color);
        }
    }

    /// Remaining-lifetime bar along the bottom border of timed toasts.
    fn render_progress_bar(frame: &mut Frame, area: Rect, toast: &Toast, accent_color: Color) {
        let Some(remaining) = toast.remaining_percentage() else {
            return;
        };
        let progress_area = Rect {
            x: area.x + 1,
            y: area.y + area.height.saturating_sub(1),
            width: area.width.saturating_sub(2),
            height: 1,
        };
        let filled_width = ((progress_area.width as f64) * remaining) as usize;
        if filled_width == 0 {
            return;
        }

        let bar = Paragraph::new("─".repeat(filled_width)).style(Style::default().fg(accent_color));
        frame.render_widget(bar, progress_area);
    }
}
