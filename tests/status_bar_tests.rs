use fleetdeck::fleet::FleetSummary;
use fleetdeck::theme::Theme;
use fleetdeck::ui::status_bar::{
    ClockSegment, DataLinkSegment, FleetStatusSegment, MeterSegment,
    NavigationHintsSegment, SeparatorStyle, StatusBar, StatusSegment,
};
// Imported through the ui re-export, the path the app layer uses
use fleetdeck::ui::DataLinkStatus;

#[test]
fn test_fleet_status_segment() {
    let segment = FleetStatusSegment {
        summary: FleetSummary {
            total: 5,
            operational: 3,
            breakdown: 1,
            in_service: 1,
        },
    };

    assert_eq!(segment.content(), "Fleet: 3/5 up ✗1");
    assert_eq!(segment.min_width(), 14);
    assert_eq!(segment.priority(), 90);
    assert!(segment.is_visible());
}

#[test]
fn test_fleet_status_segment_no_breakdowns() {
    let segment = FleetStatusSegment {
        summary: FleetSummary {
            total: 4,
            operational: 4,
            breakdown: 0,
            in_service: 0,
        },
    };

    assert_eq!(segment.content(), "Fleet: 4/4 up");
}

#[test]
fn test_data_link_segment_states() {
    let online = DataLinkSegment {
        status: DataLinkStatus::Online,
    };
    assert_eq!(online.content(), "Link: ● online");

    let checking = DataLinkSegment {
        status: DataLinkStatus::Checking,
    };
    assert_eq!(checking.content(), "Link: ⟳ checking");

    let offline = DataLinkSegment {
        status: DataLinkStatus::Offline,
    };
    assert_eq!(offline.content(), "Link: ○ offline");
    assert_eq!(offline.priority(), 70);
}

#[test]
fn test_meter_segment() {
    let running = MeterSegment {
        paused: false,
        ticks_applied: 12,
    };
    assert_eq!(running.content(), "SMU: ▶ 12 ticks");

    let paused = MeterSegment {
        paused: true,
        ticks_applied: 12,
    };
    assert_eq!(paused.content(), "SMU: ⏸ paused");
}

#[test]
fn test_clock_segment() {
    let segment = ClockSegment {
        current_time: "14:30".to_string(),
    };

    assert_eq!(segment.content(), "14:30");
    assert_eq!(segment.min_width(), 8);
    assert_eq!(segment.priority(), 50);
}

#[test]
fn test_navigation_hints_segment() {
    let segment = NavigationHintsSegment {
        current_pane: "Fleet".to_string(),
        available_shortcuts: vec![
            ("Tab".to_string(), "Switch".to_string()),
            ("j/k".to_string(), "Navigate".to_string()),
            ("d".to_string(), "Diagnose".to_string()),
        ],
    };

    assert_eq!(segment.content(), "Fleet | Tab:Switch j/k:Navigate d:Diagnose");
    assert_eq!(segment.priority(), 30);
}

#[test]
fn test_navigation_hints_segment_many_shortcuts() {
    let segment = NavigationHintsSegment {
        current_pane: "Diagnosis".to_string(),
        available_shortcuts: vec![
            ("Enter".to_string(), "Analyze".to_string()),
            ("Esc".to_string(), "Back".to_string()),
            ("Tab".to_string(), "Switch".to_string()),
            ("b".to_string(), "Sidebar".to_string()),
            ("q".to_string(), "Quit".to_string()),
        ],
    };

    // Only the first three shortcuts fit the bar
    assert_eq!(
        segment.content(),
        "Diagnosis | Enter:Analyze Esc:Back Tab:Switch"
    );
}

#[test]
fn test_status_bar_creation() {
    let status_bar = StatusBar::new();
    assert_eq!(
        status_bar.get_status_summary(),
        "StatusBar: 0 segments, style: Simple"
    );
}

#[test]
fn test_status_bar_add_segments() {
    let mut status_bar = StatusBar::new();

    let fleet_segment = FleetStatusSegment {
        summary: FleetSummary {
            total: 5,
            operational: 5,
            breakdown: 0,
            in_service: 0,
        },
    };

    let clock_segment = ClockSegment {
        current_time: "10:30".to_string(),
    };

    status_bar.add_segment("fleet".to_string(), fleet_segment);
    status_bar.add_segment("clock".to_string(), clock_segment);

    assert_eq!(
        status_bar.get_status_summary(),
        "StatusBar: 2 segments, style: Simple"
    );
}

#[test]
fn test_status_bar_remove_segment() {
    let mut status_bar = StatusBar::new();

    status_bar.add_segment(
        "clock".to_string(),
        ClockSegment {
            current_time: "09:00".to_string(),
        },
    );
    assert_eq!(
        status_bar.get_status_summary(),
        "StatusBar: 1 segments, style: Simple"
    );

    status_bar.remove_segment("clock");
    assert_eq!(
        status_bar.get_status_summary(),
        "StatusBar: 0 segments, style: Simple"
    );
}

#[test]
fn test_status_bar_separator_styles() {
    let mut status_bar = StatusBar::new();

    status_bar.set_separator_style(SeparatorStyle::Minimal);
    assert_eq!(
        status_bar.get_status_summary(),
        "StatusBar: 0 segments, style: Minimal"
    );

    status_bar.set_separator_style(SeparatorStyle::Simple);
    assert_eq!(
        status_bar.get_status_summary(),
        "StatusBar: 0 segments, style: Simple"
    );
}

#[test]
fn test_status_segment_styling() {
    let theme = Theme::industrial_dark();

    // A fleet with breakdowns gets the alert style
    let fleet_with_breakdown = FleetStatusSegment {
        summary: FleetSummary {
            total: 5,
            operational: 4,
            breakdown: 1,
            in_service: 0,
        },
    };
    assert!(fleet_with_breakdown.custom_style(&theme).is_some());

    // A healthy fleet uses the default style
    let fleet_healthy = FleetStatusSegment {
        summary: FleetSummary {
            total: 5,
            operational: 5,
            breakdown: 0,
            in_service: 0,
        },
    };
    assert!(fleet_healthy.custom_style(&theme).is_none());

    let nav_segment = NavigationHintsSegment {
        current_pane: "Fleet".to_string(),
        available_shortcuts: vec![],
    };
    assert!(nav_segment.custom_style(&theme).is_some());
}

#[test]
fn test_data_link_status_values() {
    assert_eq!(DataLinkStatus::Online, DataLinkStatus::Online);
    assert_ne!(DataLinkStatus::Online, DataLinkStatus::Offline);
    assert_ne!(DataLinkStatus::Checking, DataLinkStatus::Offline);
}

#[test]
fn test_status_bar_default() {
    let status_bar = StatusBar::default();
    assert_eq!(
        status_bar.get_status_summary(),
        "StatusBar: 0 segments, style: Simple"
    );
}
