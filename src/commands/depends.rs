//! Depends command handler

use anyhow::Result;

use wheelwright::application::DependsUseCase;

use super::CommandContext;
use crate::ui::json;
use crate::ui::primitives::icon::Icon;

pub fn cmd_depends(ctx: &CommandContext) -> Result<()> {
    let packages = &ctx.config.depends.packages;

    ctx.with_runner(|runner| Ok(DependsUseCase::new(runner, ctx.toolchain()).execute(packages)?))?;

    if ctx.ui.json {
        let _ = json::emit(serde_json::json!({
            "event": "depends",
            "packages": packages,
        }));
    } else if !ctx.dry_run && !packages.is_empty() {
        println!(
            "{} Installed {}",
            Icon::Success.colored(ctx.ui.color, ctx.ui.unicode),
            packages.join(", ")
        );
    }
    Ok(())
}
