use std::path::Path;

use crate::config::{ConfigWarning, WarningKind};
use crate::ui::context::UiContext;
use crate::ui::messages;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning], ui: &UiContext) {
    let icon = Icon::Warning.colored(ui.color, ui.unicode);
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", path.display(), line),
            None => path.display().to_string(),
        };
        let (line, hint) = match &w.kind {
            WarningKind::UnknownKey => (
                messages::unknown_config_key(&w.key, &location),
                w.suggestion.as_ref().map(|s| format!("Did you mean '{}'?", s)),
            ),
            WarningKind::UnknownPlaceholder { field } => (
                messages::unknown_placeholder(&w.key, field, &location),
                Some(match &w.suggestion {
                    Some(s) => format!("Did you mean '{{{}}}'?", s),
                    None => messages::literal_braces_hint(&w.key),
                }),
            ),
        };
        eprintln!("{} {}", icon, line);

        if let Some(hint) = hint {
            eprintln!("   {}\n", ColoredText::dim(hint).render(ui.color));
        }
    }
}

/// One status line: icon plus message
pub fn status_line(icon: Icon, text: &ColoredText, ui: &UiContext) -> String {
    format!(
        "{} {}",
        icon.colored(ui.color, ui.unicode),
        text.render(ui.color)
    )
}
