use inksac::prelude::*;

/// Formats the `cool_shell: ...` lines written to the error stream.
#[derive(Debug, Clone, Copy)]
pub struct Highlighter {
    color_support: ColorSupport,
}

impl Highlighter {
    /// Colors only when `enabled` and the terminal can show it.
    pub fn new(enabled: bool) -> Self {
        let color_support = if enabled {
            check_color_support().unwrap_or(ColorSupport::NoColor)
        } else {
            ColorSupport::NoColor
        };
        Self { color_support }
    }

    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    pub fn diagnostic(&self, program: &str, message: &str) -> String {
        self.highlight_error(&format!("{}: {}", program, message))
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return error.to_string();
        }

        let error_style = Style::builder()
            .foreground(Color::Red)
            .bold()
            .build();

        error.style(error_style).to_string()
    }
}
