use crossterm::style::Color;
use dialoguer::theme::Theme;
use std::fmt;

/// Design tokens for the one-start console.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PROGRESS: &str = "●";
    pub const ARROW: &str = "↳";

    // Selection states (for MultiSelect).
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";

    // Workflow steps.
    pub const DEV: &str = "▶";
    pub const BUILD: &str = "📦";
    pub const UPLOAD: &str = "📡";
    pub const EXTRACT: &str = "🔍";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PROGRESS: &str = "[..]";
    pub const ARROW: &str = "[>]";

    // Selection states (for MultiSelect).
    pub const SELECTED: &str = "[x]";
    pub const UNSELECTED: &str = "[ ]";

    pub const DEV: &str = "[DEV]";
    pub const BUILD: &str = "[BUILD]";
    pub const UPLOAD: &str = "[UPLOAD]";
    pub const EXTRACT: &str = "[EXTRACT]";
}

// ----------------------------------------------------------------------------
// OneStartTheme - Custom dialoguer theme with ●/○ icons
// ----------------------------------------------------------------------------

/// Custom theme for dialoguer prompts using the design tokens above.
///
/// Uses `●` for selected items and `○` for unselected items (Unicode mode),
/// or `[x]` and `[ ]` in ASCII fallback mode.
///
/// Wraps `ColorfulTheme` (or `SimpleTheme` when color is off) and only
/// overrides the multi-select item formatting.
pub struct OneStartTheme {
    unicode: bool,
    inner: Box<dyn Theme>,
}

impl OneStartTheme {
    /// * `unicode` - Whether to use Unicode symbols (●/○) or ASCII fallback ([x]/[ ])
    /// * `color` - Whether prompts may use ANSI colors
    pub fn new(unicode: bool, color: bool) -> Self {
        let inner: Box<dyn Theme> = if color {
            Box::new(dialoguer::theme::ColorfulTheme::default())
        } else {
            Box::new(dialoguer::theme::SimpleTheme)
        };
        Self { unicode, inner }
    }

    pub fn selected_icon(&self) -> &'static str {
        if self.unicode {
            icons::SELECTED
        } else {
            icons_ascii::SELECTED
        }
    }

    pub fn unselected_icon(&self) -> &'static str {
        if self.unicode {
            icons::UNSELECTED
        } else {
            icons_ascii::UNSELECTED
        }
    }
}

impl Theme for OneStartTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_prompt(f, prompt)
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        self.inner.format_error(f, err)
    }

    fn format_select_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_select_prompt(f, prompt)
    }

    fn format_select_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        self.inner.format_select_prompt_selection(f, prompt, sel)
    }

    fn format_select_prompt_item(
        &self,
        f: &mut dyn fmt::Write,
        text: &str,
        active: bool,
    ) -> fmt::Result {
        self.inner.format_select_prompt_item(f, text, active)
    }

    fn format_multi_select_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_multi_select_prompt(f, prompt)
    }

    fn format_multi_select_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        selections: &[&str],
    ) -> fmt::Result {
        self.inner
            .format_multi_select_prompt_selection(f, prompt, selections)
    }

    // This is the only method we customize for ●/○ icons
    fn format_multi_select_prompt_item(
        &self,
        f: &mut dyn fmt::Write,
        text: &str,
        checked: bool,
        active: bool,
    ) -> fmt::Result {
        let icon = if checked {
            self.selected_icon()
        } else {
            self.unselected_icon()
        };

        if active {
            write!(f, "> {} {}", icon, text)
        } else {
            write!(f, "  {} {}", icon, text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_unicode_icons() {
        let theme = OneStartTheme::new(true, false);
        assert_eq!(theme.selected_icon(), "●");
        assert_eq!(theme.unselected_icon(), "○");
    }

    #[test]
    fn test_theme_ascii_icons() {
        let theme = OneStartTheme::new(false, false);
        assert_eq!(theme.selected_icon(), "[x]");
        assert_eq!(theme.unselected_icon(), "[ ]");
    }

    #[test]
    fn test_multi_select_item_marks_active_row() {
        let theme = OneStartTheme::new(true, false);
        let mut out = String::new();
        theme
            .format_multi_select_prompt_item(&mut out, "eu", true, true)
            .unwrap();
        assert_eq!(out, "> ● eu");
    }
}
