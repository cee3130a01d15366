//! Install, uninstall and reinstall handlers

use anyhow::Result;

use wheelwright::application::InstallUseCase;
use wheelwright::infrastructure::LocalFs;

use super::CommandContext;
use crate::ui::json;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::build::{render_install_report, render_uninstalled};

pub fn cmd_install(ctx: &CommandContext) -> Result<()> {
    let descriptor = ctx.descriptor()?;

    let report = ctx.with_runner(|runner| {
        let use_case = InstallUseCase::new(runner, LocalFs::new(), ctx.toolchain());
        Ok(use_case.install(&descriptor)?)
    })?;

    if ctx.ui.json {
        let _ = json::emit(json::event("install", &report));
    } else if !ctx.dry_run {
        print!(
            "{}",
            render_install_report(&report, ctx.ui.color, ctx.ui.unicode)
        );
    }
    Ok(())
}

pub fn cmd_uninstall(ctx: &CommandContext) -> Result<()> {
    let descriptor = ctx.descriptor()?;

    ctx.with_runner(|runner| {
        let use_case = InstallUseCase::new(runner, LocalFs::new(), ctx.toolchain());
        Ok(use_case.uninstall(&descriptor)?)
    })?;

    if ctx.ui.json {
        let _ = json::emit(serde_json::json!({
            "event": "uninstall",
            "name": descriptor.normalized_name,
        }));
    } else if !ctx.dry_run {
        print!(
            "{}",
            render_uninstalled(&descriptor.normalized_name, ctx.ui.color, ctx.ui.unicode)
        );
    }
    Ok(())
}

pub fn cmd_reinstall(ctx: &CommandContext) -> Result<()> {
    let descriptor = ctx.descriptor()?;

    let report = ctx.with_runner(|runner| {
        let use_case = InstallUseCase::new(runner, LocalFs::new(), ctx.toolchain());
        Ok(use_case.reinstall(&descriptor)?)
    })?;

    let uninstall_error = report.uninstall_error.as_ref().map(ToString::to_string);

    if ctx.ui.json {
        let _ = json::emit(serde_json::json!({
            "event": "reinstall",
            "uninstall_error": uninstall_error,
            "install": report.install,
        }));
        return Ok(());
    }

    if let Some(message) = uninstall_error {
        eprintln!(
            "{} uninstall failed, installed anyway: {}",
            Icon::Warning.colored(ctx.ui.color, ctx.ui.unicode),
            message
        );
    }
    if !ctx.dry_run {
        print!(
            "{}",
            render_install_report(&report.install, ctx.ui.color, ctx.ui.unicode)
        );
    }
    Ok(())
}
