use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Base color palette shared by every component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorPalette {
    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub surface: Color,
    pub overlay: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_inverse: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,
    pub selection_text: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // Special purpose colors
    pub accent: Color,
    pub disabled: Color,
}

/// Complete theme color scheme
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeColors {
    pub palette: ColorPalette,

    // Component-specific colors
    pub sidebar: SidebarColors,
    pub fleet_table: FleetTableColors,
    pub diagnosis: DiagnosisColors,
    pub status_bar: StatusBarColors,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SidebarColors {
    pub item_normal: Color,
    pub item_selected: Color,
    pub section_label: Color,
    pub shortcut_hint: Color,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetTableColors {
    pub header: Color,
    pub model: Color,
    pub serial: Color,
    pub smu_value: Color,
    pub status_operational: Color,
    pub status_breakdown: Color,
    pub status_in_service: Color,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosisColors {
    pub prompt: Color,
    pub input: Color,
    pub report_label: Color,
    pub report_value: Color,
    pub miss: Color,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusBarColors {
    pub background: Color,
    pub text: Color,
    pub section_separator: Color,
    pub active_indicator: Color,
}

impl ThemeColors {
    /// Industrial dark theme colors, warm grays with an amber accent
    pub fn industrial_dark() -> Self {
        let palette = ColorPalette {
            background: Color::Rgb(18, 18, 22),
            foreground: Color::Rgb(222, 220, 214),
            surface: Color::Rgb(28, 28, 32),
            overlay: Color::Rgb(38, 38, 42),

            text_primary: Color::Rgb(222, 220, 214),
            text_secondary: Color::Rgb(164, 160, 152),
            text_muted: Color::Rgb(118, 114, 108),
            text_inverse: Color::Rgb(18, 18, 22),

            border: Color::Rgb(70, 68, 64),
            border_focused: Color::Rgb(255, 179, 0),
            selection: Color::Rgb(255, 179, 0),
            selection_text: Color::Rgb(18, 18, 22),

            success: Color::Rgb(94, 180, 93),
            warning: Color::Rgb(245, 166, 35),
            error: Color::Rgb(226, 74, 58),
            info: Color::Rgb(77, 159, 220),

            accent: Color::Rgb(255, 179, 0),
            disabled: Color::Rgb(98, 96, 92),
        };

        Self {
            palette: palette.clone(),
            sidebar: SidebarColors {
                item_normal: palette.text_secondary,
                item_selected: palette.selection_text,
                section_label: palette.accent,
                shortcut_hint: palette.text_muted,
            },
            fleet_table: FleetTableColors {
                header: palette.accent,
                model: palette.text_primary,
                serial: palette.text_muted,
                smu_value: Color::Rgb(143, 188, 110),
                status_operational: palette.success,
                status_breakdown: palette.error,
                status_in_service: palette.warning,
            },
            diagnosis: DiagnosisColors {
                prompt: palette.accent,
                input: palette.text_primary,
                report_label: palette.text_secondary,
                report_value: palette.text_primary,
                miss: palette.warning,
            },
            status_bar: StatusBarColors {
                background: palette.surface,
                text: palette.text_primary,
                section_separator: palette.border,
                active_indicator: palette.accent,
            },
        }
    }

    /// Industrial light theme colors
    pub fn industrial_light() -> Self {
        let palette = ColorPalette {
            background: Color::Rgb(249, 248, 244),
            foreground: Color::Rgb(40, 38, 36),
            surface: Color::Rgb(240, 238, 232),
            overlay: Color::Rgb(230, 228, 222),

            text_primary: Color::Rgb(40, 38, 36),
            text_secondary: Color::Rgb(104, 100, 94),
            text_muted: Color::Rgb(150, 146, 140),
            text_inverse: Color::Rgb(249, 248, 244),

            border: Color::Rgb(204, 200, 192),
            border_focused: Color::Rgb(191, 121, 0),
            selection: Color::Rgb(191, 121, 0),
            selection_text: Color::Rgb(249, 248, 244),

            success: Color::Rgb(56, 142, 60),
            warning: Color::Rgb(217, 130, 10),
            error: Color::Rgb(198, 40, 40),
            info: Color::Rgb(21, 101, 192),

            accent: Color::Rgb(191, 121, 0),
            disabled: Color::Rgb(170, 166, 160),
        };

        Self {
            palette: palette.clone(),
            sidebar: SidebarColors {
                item_normal: palette.text_secondary,
                item_selected: palette.selection_text,
                section_label: palette.accent,
                shortcut_hint: palette.text_muted,
            },
            fleet_table: FleetTableColors {
                header: palette.accent,
                model: palette.text_primary,
                serial: palette.text_muted,
                smu_value: Color::Rgb(85, 124, 58),
                status_operational: palette.success,
                status_breakdown: palette.error,
                status_in_service: palette.warning,
            },
            diagnosis: DiagnosisColors {
                prompt: palette.accent,
                input: palette.text_primary,
                report_label: palette.text_secondary,
                report_value: palette.text_primary,
                miss: palette.warning,
            },
            status_bar: StatusBarColors {
                background: palette.surface,
                text: palette.text_primary,
                section_separator: palette.border,
                active_indicator: palette.accent,
            },
        }
    }

    /// High contrast theme for accessibility
    pub fn high_contrast() -> Self {
        let palette = ColorPalette {
            background: Color::Black,
            foreground: Color::White,
            surface: Color::Rgb(32, 32, 32),
            overlay: Color::Rgb(48, 48, 48),

            text_primary: Color::White,
            text_secondary: Color::Rgb(200, 200, 200),
            text_muted: Color::Rgb(160, 160, 160),
            text_inverse: Color::Black,

            border: Color::Rgb(128, 128, 128),
            border_focused: Color::Yellow,
            selection: Color::Yellow,
            selection_text: Color::Black,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Cyan,

            accent: Color::Yellow,
            disabled: Color::Rgb(88, 88, 88),
        };

        Self {
            palette: palette.clone(),
            sidebar: SidebarColors {
                item_normal: palette.text_secondary,
                item_selected: palette.selection_text,
                section_label: palette.accent,
                shortcut_hint: palette.text_muted,
            },
            fleet_table: FleetTableColors {
                header: palette.accent,
                model: palette.text_primary,
                serial: palette.text_muted,
                smu_value: palette.success,
                status_operational: palette.success,
                status_breakdown: palette.error,
                status_in_service: palette.warning,
            },
            diagnosis: DiagnosisColors {
                prompt: palette.accent,
                input: palette.text_primary,
                report_label: palette.text_secondary,
                report_value: palette.text_primary,
                miss: palette.warning,
            },
            status_bar: StatusBarColors {
                background: palette.surface,
                text: palette.text_primary,
                section_separator: palette.border,
                active_indicator: palette.accent,
            },
        }
    }
}
