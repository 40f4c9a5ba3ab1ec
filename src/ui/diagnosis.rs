//! Diagnosis panel
//!
//! Operator enters a fault code, the analyzer resolves it, and the report
//! is rendered here. Toast feedback for hit/miss comes from the caller so
//! this panel stays purely presentational.

use crate::diagnostics::{FaultReport, ReportSource};
use crate::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub struct DiagnosisPanel {
    input: String,
    last_report: Option<FaultReport>,
}

impl DiagnosisPanel {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            last_report: None,
        }
    }

    pub fn handle_char(&mut self, c: char) {
        if !c.is_control() && self.input.len() < 32 {
            self.input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Take the typed code for analysis, clearing the field.
    /// Returns None when nothing was typed.
    pub fn submit(&mut self) -> Option<String> {
        let code = self.input.trim().to_string();
        self.input.clear();
        if code.is_empty() {
            None
        } else {
            Some(code)
        }
    }

    pub fn set_report(&mut self, report: FaultReport) {
        self.last_report = Some(report);
    }

    pub fn last_report(&self) -> Option<&FaultReport> {
        self.last_report.as_ref()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme, is_focused: bool) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(area);

        self.render_input(frame, chunks[0], theme, is_focused);
        self.render_report(frame, chunks[1], theme, is_focused);
    }

    fn render_input(&self, frame: &mut Frame, area: Rect, theme: &Theme, is_focused: bool) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.get_component_style("border", is_focused))
            .title(" Fault Code ");

        let mut spans = vec![Span::styled(
            self.input.clone(),
            theme.get_component_style("input", is_focused),
        )];
        if is_focused {
            spans.push(Span::styled(
                "▏",
                Style::default().fg(theme.colors.palette.accent),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, area);
    }

    fn render_report(&self, frame: &mut Frame, area: Rect, theme: &Theme, is_focused: bool) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.get_component_style("border", is_focused))
            .title(" Diagnosis ");

        let label = Style::default().fg(theme.colors.diagnosis.report_label);
        let value = Style::default().fg(theme.colors.diagnosis.report_value);

        let lines: Vec<Line> = match &self.last_report {
            None => vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Type a fault code and press Enter.",
                    Style::default().fg(theme.colors.diagnosis.prompt),
                )),
                Line::from(Span::styled("Example: EID 0126-3", label)),
            ],
            Some(report) => match &report.entry {
                Some(entry) => {
                    let mut lines = vec![
                        Line::from(vec![
                            Span::styled("Code:     ", label),
                            Span::styled(entry.code.clone(), value),
                            Span::styled(format!("  ({})", entry.brand.label()), label),
                        ]),
                        Line::from(vec![
                            Span::styled("Problem:  ", label),
                            Span::styled(entry.problem.clone(), value),
                        ]),
                        Line::from(vec![
                            Span::styled("Severity: ", label),
                            Span::styled(
                                entry.severity.label(),
                                Style::default()
                                    .fg(entry.severity.color(theme))
                                    .add_modifier(Modifier::BOLD),
                            ),
                        ]),
                        Line::from(vec![
                            Span::styled("Action:   ", label),
                            Span::styled(entry.action.clone(), value),
                        ]),
                        Line::from(vec![
                            Span::styled("Cost:     ", label),
                            Span::styled(format!("{} units", entry.cost_units), value),
                        ]),
                    ];
                    if report.source == ReportSource::Backend {
                        lines.push(Line::from(Span::styled("Resolved remotely.", label)));
                    }
                    lines
                }
                None => {
                    let mut lines = vec![Line::from(vec![
                        Span::styled("Code ", label),
                        Span::styled(report.code.clone(), value),
                        Span::styled(
                            " is not in the local catalog.",
                            Style::default().fg(theme.colors.diagnosis.miss),
                        ),
                    ])];
                    if let Some(brand) = report.shape.brand_hint() {
                        lines.push(Line::from(Span::styled(
                            format!("Format matches {} codes.", brand.label()),
                            label,
                        )));
                    }
                    lines.push(Line::from(Span::styled(
                        "Consult the machine service manual.",
                        label,
                    )));
                    lines
                }
            },
        };

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
        frame.render_widget(paragraph, area);
    }
}

impl Default for DiagnosisPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_editing() {
        let mut panel = DiagnosisPanel::new();
        for c in "e360".chars() {
            panel.handle_char(c);
        }
        assert_eq!(panel.input(), "e360");

        panel.backspace();
        assert_eq!(panel.input(), "e36");
    }

    #[test]
    fn test_control_chars_are_not_typed() {
        let mut panel = DiagnosisPanel::new();
        panel.handle_char('\x1b');
        panel.handle_char('E');
        assert_eq!(panel.input(), "E");
    }

    #[test]
    fn test_submit_drains_and_skips_empty() {
        let mut panel = DiagnosisPanel::new();
        assert_eq!(panel.submit(), None);

        for c in " 70-2 ".chars() {
            panel.handle_char(c);
        }
        assert_eq!(panel.submit(), Some("70-2".to_string()));
        assert_eq!(panel.input(), "");
    }
}
