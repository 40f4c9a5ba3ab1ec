pub mod color;
pub mod style;

use ratatui::style::Style;
use serde::{Deserialize, Serialize};

pub use color::{ColorPalette, ThemeColors};
pub use style::{ComponentStyle, StyleSet};

/// Main theme structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
    pub styles: StyleSet,
}

impl Theme {
    /// Create the industrial dark theme
    pub fn industrial_dark() -> Self {
        Self {
            name: "Industrial Dark".to_string(),
            description: "Dark theme with amber accents for workshop displays".to_string(),
            colors: ThemeColors::industrial_dark(),
            styles: StyleSet::default(),
        }
    }

    /// Create the industrial light theme
    pub fn industrial_light() -> Self {
        Self {
            name: "Industrial Light".to_string(),
            description: "Light variant for well-lit control rooms".to_string(),
            colors: ThemeColors::industrial_light(),
            styles: StyleSet::default(),
        }
    }

    /// Create a high contrast theme for accessibility
    pub fn high_contrast() -> Self {
        Self {
            name: "High Contrast".to_string(),
            description: "High contrast theme for better accessibility".to_string(),
            colors: ThemeColors::high_contrast(),
            styles: StyleSet::default(),
        }
    }

    /// Get style for a specific UI component
    pub fn get_component_style(&self, component: &str, focused: bool) -> Style {
        self.styles.get_style(component, focused, &self.colors)
    }

    /// Get selected-state style for a specific UI component
    pub fn get_selected_style(&self, component: &str) -> Style {
        self.styles.get_selected_style(component, &self.colors)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::industrial_dark()
    }
}

/// Theme manager for switching between the built-in themes
#[derive(Debug)]
pub struct ThemeManager {
    themes: Vec<Theme>,
    current_theme: String,
}

impl ThemeManager {
    pub fn new() -> Self {
        let themes = vec![
            Theme::industrial_dark(),
            Theme::industrial_light(),
            Theme::high_contrast(),
        ];

        Self {
            current_theme: themes[0].name.clone(),
            themes,
        }
    }

    /// Get the currently active theme
    pub fn current_theme(&self) -> &Theme {
        self.themes
            .iter()
            .find(|t| t.name == self.current_theme)
            .unwrap_or(&self.themes[0])
    }

    /// Switch to a different theme. Names match case-insensitively, with
    /// hyphens and underscores treated as spaces, so the config value
    /// "industrial-dark" selects "Industrial Dark".
    pub fn set_theme(&mut self, theme_name: &str) -> Result<(), String> {
        let wanted = Self::normalize_name(theme_name);
        if let Some(theme) = self
            .themes
            .iter()
            .find(|t| Self::normalize_name(&t.name) == wanted)
        {
            self.current_theme = theme.name.clone();
            Ok(())
        } else {
            Err(format!("Theme '{}' not found", theme_name))
        }
    }

    fn normalize_name(name: &str) -> String {
        name.trim()
            .chars()
            .map(|c| match c {
                '-' | '_' => ' ',
                c => c.to_ascii_lowercase(),
            })
            .collect()
    }

    /// Get list of available themes
    pub fn available_themes(&self) -> Vec<&str> {
        self.themes.iter().map(|t| t.name.as_str()).collect()
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}
