//! Clean command UI views

use std::path::Path;

use wheelwright::application::CleanResult;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

fn relative<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}

/// Render the clean result
pub fn render_clean_result(
    result: &CleanResult,
    project_root: &Path,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    if result.removed.is_empty() && result.skipped.is_empty() {
        out.push_str(&format!(
            "{} {}\n",
            Icon::Clean.colored(supports_color, supports_unicode),
            ColoredText::dim("Nothing to clean").render(supports_color)
        ));
        return out;
    }

    let verb = if dry_run { "Would remove" } else { "Removed" };
    for path in &result.removed {
        out.push_str(&format!(
            "{} {} {}\n",
            Icon::Clean.colored(supports_color, supports_unicode),
            verb,
            relative(path, project_root).display()
        ));
    }

    for skipped in &result.skipped {
        out.push_str(&format!(
            "{} {} ({})\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::warning(relative(&skipped.path, project_root).display().to_string())
                .render(supports_color),
            skipped.reason
        ));
    }

    if dry_run && !result.removed.is_empty() {
        out.push_str(
            &ColoredText::dim("Run without --dry-run to remove.\n").render(supports_color),
        );
    }

    out
}
