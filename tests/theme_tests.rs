use fleetdeck::theme::{Theme, ThemeManager};

#[test]
fn test_theme_creation() {
    let dark_theme = Theme::industrial_dark();
    assert_eq!(dark_theme.name, "Industrial Dark");
    assert!(!dark_theme.description.is_empty());

    let light_theme = Theme::industrial_light();
    assert_eq!(light_theme.name, "Industrial Light");

    let high_contrast_theme = Theme::high_contrast();
    assert_eq!(high_contrast_theme.name, "High Contrast");
}

#[test]
fn test_theme_manager() {
    let mut manager = ThemeManager::new();

    // Industrial Dark is the default
    assert_eq!(manager.current_theme().name, "Industrial Dark");

    assert!(manager.set_theme("Industrial Light").is_ok());
    assert_eq!(manager.current_theme().name, "Industrial Light");

    assert!(manager.set_theme("High Contrast").is_ok());
    assert_eq!(manager.current_theme().name, "High Contrast");

    assert!(manager.set_theme("Nonexistent Theme").is_err());
    assert_eq!(manager.current_theme().name, "High Contrast");

    let available = manager.available_themes();
    assert!(available.contains(&"Industrial Dark"));
    assert!(available.contains(&"Industrial Light"));
    assert!(available.contains(&"High Contrast"));
    assert_eq!(available[0], "Industrial Dark");
}

#[test]
fn test_theme_manager_accepts_config_slugs() {
    let mut manager = ThemeManager::new();

    // Config files use kebab-case names
    assert!(manager.set_theme("industrial-light").is_ok());
    assert_eq!(manager.current_theme().name, "Industrial Light");

    assert!(manager.set_theme("HIGH_CONTRAST").is_ok());
    assert_eq!(manager.current_theme().name, "High Contrast");
}

#[test]
fn test_component_styles() {
    let theme = Theme::industrial_dark();

    let focused_border = theme.get_component_style("border", true);
    let unfocused_border = theme.get_component_style("border", false);
    assert_ne!(focused_border, unfocused_border);

    // Unknown components fall back to a usable default
    let fallback = theme.get_component_style("no_such_component", false);
    assert!(fallback.fg.is_some());
}

#[test]
fn test_default_theme() {
    let theme = Theme::default();
    assert_eq!(theme.name, "Industrial Dark");
}
