use crate::theme::color::ThemeColors;
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Component-specific styling definitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentStyle {
    pub normal: StyleDefinition,
    pub focused: StyleDefinition,
    pub selected: StyleDefinition,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleDefinition {
    pub fg: Option<String>, // Color name reference
    pub bg: Option<String>,
    pub modifiers: Vec<String>, // Modifier names
}

/// Complete style set for all UI components
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleSet {
    pub sidebar: ComponentStyle,
    pub fleet_table: ComponentStyle,
    pub diagnosis: ComponentStyle,
    pub status_bar: ComponentStyle,
    pub border: ComponentStyle,
    pub input: ComponentStyle,
}

impl StyleSet {
    /// Get ratatui Style for a component in a specific state
    pub fn get_style(&self, component: &str, focused: bool, colors: &ThemeColors) -> Style {
        let component_style = self.component(component);
        let style_def = if focused {
            &component_style.focused
        } else {
            &component_style.normal
        };
        self.apply_style_definition(style_def, colors)
    }

    /// Get style for selected state
    pub fn get_selected_style(&self, component: &str, colors: &ThemeColors) -> Style {
        let component_style = self.component(component);
        self.apply_style_definition(&component_style.selected, colors)
    }

    fn component(&self, component: &str) -> &ComponentStyle {
        match component {
            "sidebar" => &self.sidebar,
            "fleet_table" => &self.fleet_table,
            "diagnosis" => &self.diagnosis,
            "status_bar" => &self.status_bar,
            "border" => &self.border,
            "input" => &self.input,
            _ => &self.border, // Default fallback
        }
    }

    fn apply_style_definition(&self, style_def: &StyleDefinition, colors: &ThemeColors) -> Style {
        let mut style = Style::default();

        if let Some(fg_name) = &style_def.fg {
            if let Some(color) = self.resolve_color_name(fg_name, colors) {
                style = style.fg(color);
            }
        }

        if let Some(bg_name) = &style_def.bg {
            if let Some(color) = self.resolve_color_name(bg_name, colors) {
                style = style.bg(color);
            }
        }

        for modifier_name in &style_def.modifiers {
            if let Some(modifier) = self.resolve_modifier_name(modifier_name) {
                style = style.add_modifier(modifier);
            }
        }

        style
    }

    fn resolve_color_name(&self, color_name: &str, colors: &ThemeColors) -> Option<Color> {
        match color_name {
            // Palette colors
            "background" => Some(colors.palette.background),
            "foreground" => Some(colors.palette.foreground),
            "surface" => Some(colors.palette.surface),
            "overlay" => Some(colors.palette.overlay),
            "text_primary" => Some(colors.palette.text_primary),
            "text_secondary" => Some(colors.palette.text_secondary),
            "text_muted" => Some(colors.palette.text_muted),
            "text_inverse" => Some(colors.palette.text_inverse),
            "border" => Some(colors.palette.border),
            "border_focused" => Some(colors.palette.border_focused),
            "selection" => Some(colors.palette.selection),
            "selection_text" => Some(colors.palette.selection_text),
            "success" => Some(colors.palette.success),
            "warning" => Some(colors.palette.warning),
            "error" => Some(colors.palette.error),
            "info" => Some(colors.palette.info),
            "accent" => Some(colors.palette.accent),
            "disabled" => Some(colors.palette.disabled),

            // Component-specific colors
            "item_normal" => Some(colors.sidebar.item_normal),
            "item_selected" => Some(colors.sidebar.item_selected),
            "section_label" => Some(colors.sidebar.section_label),
            "shortcut_hint" => Some(colors.sidebar.shortcut_hint),

            "table_header" => Some(colors.fleet_table.header),
            "model" => Some(colors.fleet_table.model),
            "serial" => Some(colors.fleet_table.serial),
            "smu_value" => Some(colors.fleet_table.smu_value),

            "prompt" => Some(colors.diagnosis.prompt),
            "report_label" => Some(colors.diagnosis.report_label),
            "report_value" => Some(colors.diagnosis.report_value),

            "status_bg" => Some(colors.status_bar.background),
            "status_text" => Some(colors.status_bar.text),
            "status_separator" => Some(colors.status_bar.section_separator),
            "status_active" => Some(colors.status_bar.active_indicator),

            _ => None,
        }
    }

    fn resolve_modifier_name(&self, modifier_name: &str) -> Option<Modifier> {
        match modifier_name {
            "bold" => Some(Modifier::BOLD),
            "italic" => Some(Modifier::ITALIC),
            "underlined" => Some(Modifier::UNDERLINED),
            "reversed" => Some(Modifier::REVERSED),
            "dim" => Some(Modifier::DIM),
            _ => None,
        }
    }
}

impl Default for StyleSet {
    fn default() -> Self {
        Self {
            sidebar: ComponentStyle {
                normal: StyleDefinition {
                    fg: Some("item_normal".to_string()),
                    bg: None,
                    modifiers: vec![],
                },
                focused: StyleDefinition {
                    fg: Some("item_normal".to_string()),
                    bg: None,
                    modifiers: vec![],
                },
                selected: StyleDefinition {
                    fg: Some("item_selected".to_string()),
                    bg: Some("selection".to_string()),
                    modifiers: vec!["bold".to_string()],
                },
            },
            fleet_table: ComponentStyle {
                normal: StyleDefinition {
                    fg: Some("model".to_string()),
                    bg: None,
                    modifiers: vec![],
                },
                focused: StyleDefinition {
                    fg: Some("model".to_string()),
                    bg: None,
                    modifiers: vec![],
                },
                selected: StyleDefinition {
                    fg: Some("selection_text".to_string()),
                    bg: Some("selection".to_string()),
                    modifiers: vec!["bold".to_string()],
                },
            },
            diagnosis: ComponentStyle {
                normal: StyleDefinition {
                    fg: Some("report_value".to_string()),
                    bg: None,
                    modifiers: vec![],
                },
                focused: StyleDefinition {
                    fg: Some("report_value".to_string()),
                    bg: None,
                    modifiers: vec![],
                },
                selected: StyleDefinition {
                    fg: Some("selection_text".to_string()),
                    bg: Some("selection".to_string()),
                    modifiers: vec![],
                },
            },
            status_bar: ComponentStyle {
                normal: StyleDefinition {
                    fg: Some("status_text".to_string()),
                    bg: Some("status_bg".to_string()),
                    modifiers: vec![],
                },
                focused: StyleDefinition {
                    fg: Some("status_text".to_string()),
                    bg: Some("status_bg".to_string()),
                    modifiers: vec!["bold".to_string()],
                },
                selected: StyleDefinition {
                    fg: Some("status_active".to_string()),
                    bg: Some("status_bg".to_string()),
                    modifiers: vec!["bold".to_string()],
                },
            },
            border: ComponentStyle {
                normal: StyleDefinition {
                    fg: Some("border".to_string()),
                    bg: None,
                    modifiers: vec![],
                },
                focused: StyleDefinition {
                    fg: Some("border_focused".to_string()),
                    bg: None,
                    modifiers: vec!["bold".to_string()],
                },
                selected: StyleDefinition {
                    fg: Some("border_focused".to_string()),
                    bg: None,
                    modifiers: vec!["bold".to_string()],
                },
            },
            input: ComponentStyle {
                normal: StyleDefinition {
                    fg: Some("text_primary".to_string()),
                    bg: Some("surface".to_string()),
                    modifiers: vec![],
                },
                focused: StyleDefinition {
                    fg: Some("text_primary".to_string()),
                    bg: Some("surface".to_string()),
                    modifiers: vec![],
                },
                selected: StyleDefinition {
                    fg: Some("selection_text".to_string()),
                    bg: Some("selection".to_string()),
                    modifiers: vec![],
                },
            },
        }
    }
}
