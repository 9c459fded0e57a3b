//! Status vocabulary for report lines.

use super::theme::Theme;

/// Kinds of report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check passed.
    Success,
    /// A fix was applied.
    Fixed,
    /// Non-fatal warning.
    Warning,
    /// Error.
    Failed,
}

impl StatusKind {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Fixed => "+",
            Self::Warning => "⚠",
            Self::Failed => "✗",
        }
    }

    /// Bracketed text for non-TTY output.
    pub fn bracketed(self) -> &'static str {
        match self {
            Self::Success => "[ok]",
            Self::Fixed => "[fixed]",
            Self::Warning => "[warn]",
            Self::Failed => "[FAIL]",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &Theme) -> String {
        let icon = self.icon();
        match self {
            Self::Success | Self::Fixed => theme.success.apply_to(icon).to_string(),
            Self::Warning => theme.warning.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &Theme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }

    /// Format a status line for non-TTY: bracketed + message.
    pub fn format_plain(self, msg: &str) -> String {
        format!("{} {}", self.bracketed(), msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_returns_unicode_symbols() {
        assert_eq!(StatusKind::Success.icon(), "✓");
        assert_eq!(StatusKind::Warning.icon(), "⚠");
        assert_eq!(StatusKind::Failed.icon(), "✗");
    }

    #[test]
    fn format_includes_icon_and_message() {
        let theme = Theme::plain();
        assert_eq!(
            StatusKind::Success.format(&theme, "README.md exists"),
            "✓ README.md exists"
        );
    }

    #[test]
    fn format_plain_uses_brackets() {
        assert_eq!(StatusKind::Failed.format_plain("LICENSE"), "[FAIL] LICENSE");
        assert_eq!(StatusKind::Fixed.format_plain("x"), "[fixed] x");
    }
}
