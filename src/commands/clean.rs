//! Clean command handler
//!
//! Removes build output. Needs no package metadata, so it works even when
//! the metadata file is broken or missing.

use anyhow::{bail, Result};

use wheelwright::application::{CleanOptions, CleanUseCase};
use wheelwright::infrastructure::LocalFs;

use super::CommandContext;
use crate::ui::json;
use crate::ui::views::clean::render_clean_result;

/// Execute the clean command
pub fn cmd_clean(ctx: &CommandContext) -> Result<()> {
    let options = CleanOptions::new()
        .with_dry_run(ctx.dry_run)
        .with_extra_paths(ctx.config.clean.extra_paths.clone());

    let result = CleanUseCase::new(LocalFs::new()).execute(&ctx.project_root, &options);

    if ctx.ui.json {
        let _ = json::emit(serde_json::json!({
            "event": "clean",
            "dry_run": ctx.dry_run,
            "removed": result.removed,
            "absent": result.absent,
            "skipped": result
                .skipped
                .iter()
                .map(|s| serde_json::json!({
                    "path": s.path,
                    "reason": s.reason.to_string(),
                }))
                .collect::<Vec<_>>(),
        }));
    } else {
        print!(
            "{}",
            render_clean_result(
                &result,
                &ctx.project_root,
                ctx.dry_run,
                ctx.ui.color,
                ctx.ui.unicode
            )
        );
    }

    if !result.is_success() {
        bail!("{} path(s) could not be removed", result.skipped.len());
    }
    Ok(())
}
