use std::path::PathBuf;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

#[derive(Debug, Clone)]
pub struct ErrorBlock {
    file: Option<PathBuf>,
    message: String,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            file: None,
            message: message.into(),
            fix: None,
        }
    }

    pub fn with_file(mut self, file: Option<impl Into<PathBuf>>) -> Self {
        self.file = file.map(Into::into);
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = format!(
            "{} {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error("ERROR").bold().render(supports_color)
        );

        if let Some(file) = &self.file {
            out.push_str(&format!(
                "  {}\n",
                ColoredText::dim(file.display().to_string()).render(supports_color)
            ));
        }
        out.push_str(&format!("  {}\n", self.message));

        if let Some(fix) = &self.fix {
            out.push('\n');
            for (i, line) in fix.lines().enumerate() {
                if i == 0 {
                    out.push_str(&format!("  FIX: {}\n", line));
                } else {
                    out.push_str(&format!("  {}\n", line));
                }
            }
        }

        out
    }
}
