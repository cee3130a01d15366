//! Info command handler

use anyhow::Result;

use super::CommandContext;
use crate::ui::json;
use crate::ui::views::info::render_info;

pub fn cmd_info(ctx: &CommandContext) -> Result<()> {
    let descriptor = ctx.descriptor()?;

    if ctx.ui.json {
        let _ = json::emit(json::event("info", &descriptor));
    } else {
        print!("{}", render_info(&descriptor, ctx.ui.color, ctx.ui.unicode));
    }
    Ok(())
}
