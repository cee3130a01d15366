use wheelwright::WheelwrightError;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::context::UiContext;

/// Exit code for an error surfaced by a command.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<WheelwrightError>()
        .map(WheelwrightError::exit_code)
        .unwrap_or(1)
}

pub fn format_wheelwright_error(
    err: &WheelwrightError,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let block = ErrorBlock::new(err.to_string()).with_file(err.file());

    let block = match err {
        WheelwrightError::MissingField { field, .. } => block.with_fix(format!(
            "Add a line starting at column 0:\n  {} = <value>",
            field
        )),
        WheelwrightError::InvalidConfig { .. } => {
            block.with_fix("Fix the TOML syntax in the configuration file and try again.")
        }
        WheelwrightError::ToolNotFound { .. } => block.with_fix(
            "Install the interpreter, or point WHEELWRIGHT_PYTHON (or [toolchain] python) at one.",
        ),
        WheelwrightError::Io { .. } | WheelwrightError::ToolFailed { .. } => block,
    };

    block.render(supports_color, supports_unicode)
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    if let Some(ww) = err.downcast_ref::<WheelwrightError>() {
        return format_wheelwright_error(ww, supports_color, supports_unicode);
    }

    ErrorBlock::new(format!("{:#}", err)).render(supports_color, supports_unicode)
}

/// Report a failed command on stderr, or as an `error` event in JSON mode.
pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
            "exit_code": exit_code(err),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    eprint!("{}", format_error(err, ui.color, ui.unicode));
}
