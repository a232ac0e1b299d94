//! Visual theme and styling.

use console::Style;

/// Neviraller's visual theme.
#[derive(Debug, Clone)]
pub struct InstallerTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for informational elements (blue italic).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (green bold).
    pub header: Style,
    /// Style for version transitions (grey italic).
    pub transition: Style,
}

impl Default for InstallerTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl InstallerTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().blue().italic(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().green(),
            transition: Style::new().dim().italic(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            transition: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a skipped message (icon + text in dim).
    pub fn format_skipped(&self, msg: &str) -> String {
        format!("{}", self.dim.apply_to(format!("○ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// Presence icon used in the dependency table.
    pub fn presence_icon(&self, present: bool) -> String {
        if present {
            format!("{}", self.success.apply_to("✓"))
        } else {
            format!("{}", self.error.apply_to("✗"))
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = InstallerTheme::plain();
        let msg = theme.format_success("Complete");
        assert_eq!(msg, "✓ Complete");
    }

    #[test]
    fn theme_formats_warning() {
        let theme = InstallerTheme::plain();
        let msg = theme.format_warning("Caution");
        assert!(msg.contains("⚠"));
        assert!(msg.contains("Caution"));
    }

    #[test]
    fn theme_formats_error() {
        let theme = InstallerTheme::plain();
        let msg = theme.format_error("Failed");
        assert!(msg.contains("✗"));
        assert!(msg.contains("Failed"));
    }

    #[test]
    fn theme_formats_skipped() {
        let theme = InstallerTheme::plain();
        assert_eq!(theme.format_skipped("Skipped"), "○ Skipped");
    }

    #[test]
    fn presence_icons() {
        let theme = InstallerTheme::plain();
        assert_eq!(theme.presence_icon(true), "✓");
        assert_eq!(theme.presence_icon(false), "✗");
    }

    #[test]
    fn default_impl_matches_new() {
        let default = InstallerTheme::default();
        let new = InstallerTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
