//! Info command view

use wheelwright::PackageDescriptor;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;

pub fn render_info(
    descriptor: &PackageDescriptor,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(
        Icon::Package,
        format!("{} {}", descriptor.raw_name, descriptor.version),
    );
    header.add("Name", descriptor.raw_name.as_str());
    header.add("Normalized", descriptor.normalized_name.as_str());
    header.add("Version", descriptor.version.as_str());
    header.add("Artifact", descriptor.artifact_path.as_str());
    header.render(supports_color, supports_unicode)
}
