//! Build and install views

use wheelwright::application::{BuildReport, InstallReport};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_build_report(
    report: &BuildReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if report.dry_run {
        return String::new();
    }

    if !report.present {
        return format!(
            "{} {} {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::warning("Build finished but the expected artifact is missing:")
                .render(supports_color),
            report.artifact.display()
        );
    }

    let mut out = format!(
        "{} Built {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        ColoredText::success(report.artifact.display().to_string())
            .bold()
            .render(supports_color)
    );
    if let Some(hash) = &report.sha256 {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            ColoredText::dim(hash.as_str()).render(supports_color)
        ));
    }
    out
}

pub fn render_install_report(
    report: &InstallReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    if let Some(built) = &report.built {
        out.push_str(&render_build_report(built, supports_color, supports_unicode));
    }
    out.push_str(&format!(
        "{} Installed {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        report.artifact_path
    ));
    out
}

pub fn render_uninstalled(name: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} Uninstalled {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        name
    )
}
