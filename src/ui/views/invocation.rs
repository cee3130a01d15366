//! Dry-run view: the commands that would have run

use wheelwright::Invocation;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_invocations(
    invocations: &[Invocation],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    for invocation in invocations {
        out.push_str(&format!(
            "{} {}\n",
            Icon::Run.colored(supports_color, supports_unicode),
            ColoredText::info(invocation.command_line()).render(supports_color)
        ));
    }
    out
}
