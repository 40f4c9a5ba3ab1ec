//! Fleet registry
//!
//! In-memory registry of the machines shown on the dashboard. The SMU
//! column is the backing store for the counter displays: each row holds
//! the displayed text, and the registry exposes those cells through the
//! `DisplaySurface` seam so the meter ticker can advance them.

use crate::meter::SmuValue;
use crate::surface::{CounterHandle, DisplaySurface};
use crate::theme::Theme;
use chrono::NaiveDate;
use ratatui::style::Color;

/// Equipment category of a machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineKind {
    Excavator,
    Bulldozer,
    Grader,
    DumpTruck,
}

impl MachineKind {
    pub fn label(&self) -> &'static str {
        match self {
            MachineKind::Excavator => "Excavator",
            MachineKind::Bulldozer => "Bulldozer",
            MachineKind::Grader => "Grader",
            MachineKind::DumpTruck => "Dump Truck",
        }
    }
}

/// Operational state of a machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineStatus {
    Operational,
    Breakdown,
    InService,
}

impl MachineStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MachineStatus::Operational => "Operational",
            MachineStatus::Breakdown => "Breakdown",
            MachineStatus::InService => "In Service",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            MachineStatus::Operational => "●",
            MachineStatus::Breakdown => "✗",
            MachineStatus::InService => "◐",
        }
    }

    pub fn color(&self, theme: &Theme) -> Color {
        match self {
            MachineStatus::Operational => theme.colors.fleet_table.status_operational,
            MachineStatus::Breakdown => theme.colors.fleet_table.status_breakdown,
            MachineStatus::InService => theme.colors.fleet_table.status_in_service,
        }
    }
}

/// One machine row on the dashboard
#[derive(Debug, Clone)]
pub struct Machine {
    pub id: u64,
    pub model: String,
    pub serial: String,
    pub kind: MachineKind,
    pub status: MachineStatus,
    /// Displayed SMU reading, mutated in place by the ticker.
    pub smu_display: String,
    pub last_service: NaiveDate,
}

impl Machine {
    pub fn new(
        id: u64,
        model: impl Into<String>,
        serial: impl Into<String>,
        kind: MachineKind,
        status: MachineStatus,
        smu_hours: i64,
        last_service: NaiveDate,
    ) -> Self {
        Self {
            id,
            model: model.into(),
            serial: serial.into(),
            kind,
            status,
            smu_display: SmuValue::from_whole_hours(smu_hours).to_string(),
            last_service,
        }
    }

    /// Parsed SMU reading, None while the display text is not numeric.
    pub fn smu_hours(&self) -> Option<SmuValue> {
        SmuValue::parse(&self.smu_display)
    }
}

/// Aggregate counts for the status bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FleetSummary {
    pub total: usize,
    pub operational: usize,
    pub breakdown: usize,
    pub in_service: usize,
}

/// In-memory machine registry, seeded at startup and reset on relaunch
#[derive(Debug, Default)]
pub struct FleetRegistry {
    machines: Vec<Machine>,
}

impl FleetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the demo fleet.
    pub fn with_sample_fleet() -> Self {
        fn date(y: i32, m: u32, d: u32) -> NaiveDate {
            NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
        }

        Self {
            machines: vec![
                Machine::new(
                    1,
                    "CAT 336D",
                    "MBD0254",
                    MachineKind::Excavator,
                    MachineStatus::Operational,
                    4250,
                    date(2026, 6, 14),
                ),
                Machine::new(
                    2,
                    "CAT D8R",
                    "9EM0124",
                    MachineKind::Bulldozer,
                    MachineStatus::Breakdown,
                    8900,
                    date(2026, 4, 2),
                ),
                Machine::new(
                    3,
                    "Komatsu PC200-8",
                    "C60214",
                    MachineKind::Excavator,
                    MachineStatus::InService,
                    6120,
                    date(2026, 7, 30),
                ),
                Machine::new(
                    4,
                    "Komatsu HD465-7",
                    "7EK0331",
                    MachineKind::DumpTruck,
                    MachineStatus::Operational,
                    10480,
                    date(2026, 5, 21),
                ),
                Machine::new(
                    5,
                    "CAT 140M",
                    "B9D0412",
                    MachineKind::Grader,
                    MachineStatus::Operational,
                    2310,
                    date(2026, 8, 9),
                ),
            ],
        }
    }

    pub fn machines(&self) -> &[Machine] {
        &self.machines
    }

    pub fn machine(&self, id: u64) -> Option<&Machine> {
        self.machines.iter().find(|m| m.id == id)
    }

    pub fn len(&self) -> usize {
        self.machines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.machines.is_empty()
    }

    pub fn summary(&self) -> FleetSummary {
        let mut summary = FleetSummary {
            total: self.machines.len(),
            operational: 0,
            breakdown: 0,
            in_service: 0,
        };
        for machine in &self.machines {
            match machine.status {
                MachineStatus::Operational => summary.operational += 1,
                MachineStatus::Breakdown => summary.breakdown += 1,
                MachineStatus::InService => summary.in_service += 1,
            }
        }
        summary
    }

    fn machine_mut(&mut self, id: u64) -> Option<&mut Machine> {
        self.machines.iter_mut().find(|m| m.id == id)
    }
}

impl DisplaySurface for FleetRegistry {
    fn counter_handles(&self) -> Vec<CounterHandle> {
        self.machines.iter().map(|m| CounterHandle::new(m.id)).collect()
    }

    fn value(&self, handle: CounterHandle) -> Option<String> {
        self.machine(handle.0).map(|m| m.smu_display.clone())
    }

    fn set_value(&mut self, handle: CounterHandle, value: String) -> bool {
        match self.machine_mut(handle.0) {
            Some(machine) => {
                machine.smu_display = value;
                true
            }
            None => false,
        }
    }
}
