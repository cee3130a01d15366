//! Build command handler

use anyhow::Result;

use wheelwright::application::BuildUseCase;
use wheelwright::infrastructure::LocalFs;

use super::CommandContext;
use crate::ui::json;
use crate::ui::views::build::render_build_report;

/// Execute the build command
pub fn cmd_build(ctx: &CommandContext) -> Result<()> {
    let descriptor = ctx.descriptor()?;

    let report = ctx.with_runner(|runner| {
        let use_case = BuildUseCase::new(runner, LocalFs::new(), ctx.toolchain());
        Ok(use_case.execute(&descriptor)?)
    })?;

    if ctx.ui.json {
        let _ = json::emit(json::event("build", &report));
    } else {
        print!(
            "{}",
            render_build_report(&report, ctx.ui.color, ctx.ui.unicode)
        );
    }
    Ok(())
}
