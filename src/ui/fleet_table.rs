//! Fleet table pane
//!
//! Machine roster with the live SMU column. The displayed hour values come
//! straight from the registry cells the ticker mutates.

use crate::fleet::FleetRegistry;
use crate::theme::Theme;
use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

pub struct FleetTable {
    table_state: TableState,
}

impl FleetTable {
    pub fn new() -> Self {
        let mut table_state = TableState::default();
        table_state.select(Some(0));
        Self { table_state }
    }

    pub fn select_next(&mut self, row_count: usize) {
        if row_count == 0 {
            return;
        }
        let next = match self.table_state.selected() {
            Some(current) if current + 1 < row_count => current + 1,
            Some(current) => current,
            None => 0,
        };
        self.table_state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        let previous = self.table_state.selected().map(|c| c.saturating_sub(1));
        self.table_state.select(previous.or(Some(0)));
    }

    pub fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        registry: &FleetRegistry,
        theme: &Theme,
        is_focused: bool,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.get_component_style("border", is_focused))
            .title(" Fleet ");

        let header = Row::new(vec!["Model", "Serial", "Type", "Status", "SMU Hours", "Serviced"])
            .style(Style::default().fg(theme.colors.fleet_table.header))
            .bottom_margin(1);

        let rows: Vec<Row> = registry
            .machines()
            .iter()
            .map(|machine| {
                Row::new(vec![
                    Cell::from(Span::styled(
                        machine.model.clone(),
                        Style::default().fg(theme.colors.fleet_table.model),
                    )),
                    Cell::from(Span::styled(
                        machine.serial.clone(),
                        Style::default().fg(theme.colors.fleet_table.serial),
                    )),
                    Cell::from(machine.kind.label()),
                    Cell::from(Span::styled(
                        format!("{} {}", machine.status.symbol(), machine.status.label()),
                        Style::default().fg(machine.status.color(theme)),
                    )),
                    Cell::from(Span::styled(
                        machine.smu_display.clone(),
                        Style::default().fg(theme.colors.fleet_table.smu_value),
                    )),
                    Cell::from(machine.last_service.format("%Y-%m-%d").to_string()),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(16),
                Constraint::Length(9),
                Constraint::Length(11),
                Constraint::Length(14),
                Constraint::Length(10),
                Constraint::Length(10),
            ],
        )
        .header(header)
        .block(block)
        .highlight_style(theme.get_selected_style("fleet_table"));

        frame.render_stateful_widget(table, area, &mut self.table_state);
    }
}

impl Default for FleetTable {
    fn default() -> Self {
        Self::new()
    }
}
