use wheelwright::{ConfigWarning, WarningKind};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

pub fn print_config_warnings(ui: &UiContext, warnings: &[ConfigWarning]) {
    if ui.json {
        for w in warnings {
            let (kind, value) = match &w.kind {
                WarningKind::UnknownKey => ("unknown_key", None),
                WarningKind::InvalidValue { value, .. } => ("invalid_value", Some(value)),
            };
            let _ = crate::ui::json::emit(serde_json::json!({
                "event": "config_warning",
                "kind": kind,
                "key": w.key,
                "value": value,
                "file": w.file.as_ref().map(|f| f.display().to_string()),
                "line": w.line,
                "suggestion": w.suggestion,
            }));
        }
        return;
    }

    let icon = Icon::Warning.colored(ui.color, ui.unicode);
    for w in warnings {
        eprintln!("{} {}", icon, describe(w));

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?", suggestion);
        }
    }
}

fn describe(w: &ConfigWarning) -> String {
    let location = match (&w.file, w.line) {
        (Some(file), Some(line)) => format!("{}:{}", file.display(), line),
        (Some(file), None) => file.display().to_string(),
        (None, _) => "the environment".to_string(),
    };

    match &w.kind {
        WarningKind::UnknownKey => format!("Unknown config key '{}' in {}", w.key, location),
        WarningKind::InvalidValue { value, expected } => format!(
            "Ignoring invalid value '{}' for {} in {} (expected one of: {})",
            value, w.key, location, expected
        ),
    }
}
