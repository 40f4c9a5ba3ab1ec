use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tokio::time::{Duration, Instant};
use tracing::{debug, info};

use crate::config::DashboardConfig;
use crate::diagnostics::{FaultAnalyzer, FaultBackend, FaultReport, FaultSeverity, ReportSource};
use crate::events::{EventHandler, EventResult};
use crate::fleet::FleetRegistry;
use crate::ticker::MeterTicker;
use crate::ui::{DataLinkStatus, ToastLevel, UI};

pub struct App {
    should_quit: bool,
    ui: UI,
    event_handler: EventHandler,
    registry: FleetRegistry,
    ticker: MeterTicker,
    analyzer: FaultAnalyzer,
    startup_toast_level: ToastLevel,
}

impl App {
    pub fn new(config: DashboardConfig) -> Self {
        let mut ui = UI::new();

        if let Err(e) = ui.set_theme(&config.ui.theme) {
            debug!("Keeping default theme: {}", e);
        }
        ui.set_sidebar_visible(config.ui.sidebar_visible);
        ui.toast_manager_mut().set_max_visible(config.toast.max_visible);
        ui.toast_manager_mut()
            .set_default_timeout(config.toast_default_timeout());

        let mut ticker = MeterTicker::new(config.meter_interval());
        ticker.set_paused(config.meter.start_paused);

        Self {
            should_quit: false,
            ui,
            event_handler: EventHandler::new(),
            registry: FleetRegistry::with_sample_fleet(),
            ticker,
            analyzer: FaultAnalyzer::new(),
            startup_toast_level: config.startup_toast_level(),
        }
    }

    /// Attach a remote fault analysis backend. Without one the analyzer
    /// answers from the local catalog only.
    pub fn set_fault_backend(&mut self, backend: Arc<dyn FaultBackend>) {
        self.analyzer.set_backend(backend);
    }

    pub async fn run(&mut self) -> Result<()> {
        // Check if we're running in a proper terminal
        if !std::io::stdout().is_tty() {
            return Err(anyhow::anyhow!(
                "Fleetdeck requires a proper terminal (TTY) to run. Please run this application in a terminal emulator."
            ));
        }

        // Setup terminal
        enable_raw_mode().map_err(|e| anyhow::anyhow!("Failed to enable raw mode: {}. Make sure you're running in a proper terminal.", e))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .map_err(|e| anyhow::anyhow!("Failed to setup terminal: {}. Make sure your terminal supports these features.", e))?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)
            .map_err(|e| anyhow::anyhow!("Failed to create terminal: {}", e))?;

        // Run the main loop
        let result = self.run_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn run_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        let mut last_tick = Instant::now();
        let tick_rate = Duration::from_millis(50);

        info!("fleetdeck: active and ready");
        self.ui.update_data_link(if self.analyzer.has_backend() {
            DataLinkStatus::Online
        } else {
            DataLinkStatus::Offline
        });
        self.ui
            .notify("Dashboard active and ready", self.startup_toast_level);

        loop {
            // Apply any service meter ticks that have come due
            let applied = self.ticker.poll(Instant::now(), &mut self.registry);
            if applied > 0 {
                debug!("Applied {} service meter tick(s)", applied);
            }

            // Clear expired toasts
            self.ui.update_toasts();

            // Refresh status bar segments
            self.ui.update_fleet_status(self.registry.summary());
            self.ui
                .update_meter_status(self.ticker.is_paused(), self.ticker.ticks_applied());
            self.ui
                .update_clock(chrono::Local::now().format("%H:%M").to_string());

            // Draw UI
            terminal.draw(|f| self.ui.render(f, &self.registry))?;

            // Handle events
            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    let event_result = self
                        .event_handler
                        .handle_key_event(key, &mut self.ui, &self.registry)
                        .await;

                    match event_result {
                        EventResult::Continue => {}
                        EventResult::AnalyzeFault(code) => {
                            self.handle_fault_analysis(&code).await;
                        }
                        EventResult::ToggleMeter => {
                            self.toggle_meter();
                        }
                    }

                    if self.event_handler.should_quit() {
                        self.should_quit = true;
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                last_tick = Instant::now();
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Run one code through the analyzer and surface the outcome as a
    /// report plus a toast.
    async fn handle_fault_analysis(&mut self, code: &str) {
        let report = self.analyzer.analyze(code).await;
        self.notify_for_report(&report);
        self.ui.diagnosis_mut().set_report(report);
    }

    fn notify_for_report(&mut self, report: &FaultReport) {
        match &report.entry {
            Some(entry) => {
                let level = match entry.severity {
                    FaultSeverity::Minor => ToastLevel::Info,
                    FaultSeverity::Warning => ToastLevel::Warning,
                    FaultSeverity::Critical => ToastLevel::Error,
                };
                let origin = match report.source {
                    ReportSource::Catalog => "catalog",
                    ReportSource::Backend => "remote analysis",
                };
                self.ui
                    .notify(format!("{}: {} ({})", entry.code, entry.problem, origin), level);
            }
            None => {
                self.ui.notify(
                    format!("Code {} is not in the local catalog", report.code),
                    ToastLevel::Warning,
                );
            }
        }
    }

    fn toggle_meter(&mut self) {
        let paused = !self.ticker.is_paused();
        self.ticker.set_paused(paused);
        info!("Service meter paused: {}", paused);
        let message = if paused {
            "Service meter paused"
        } else {
            "Service meter resumed"
        };
        self.ui.notify(message, ToastLevel::Info);
    }
}
