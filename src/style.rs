//! ANSI terminal styling.
//!
//! A fixed table of escape codes and a pure formatting function. Styled
//! text always ends with a reset so styles never leak into later output.

/// Escape code that clears all active styles.
pub const RESET: &str = "\x1b[0m";

/// Terminal colors and text styles understood by [`paint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Black foreground.
    Black,
    /// Red foreground.
    Red,
    /// Green foreground.
    Green,
    /// Yellow foreground.
    Yellow,
    /// Blue foreground.
    Blue,
    /// Purple foreground.
    Purple,
    /// Cyan foreground.
    Cyan,
    /// White foreground.
    White,
    /// Bold weight.
    Bold,
    /// Italic slant.
    Italic,
    /// Underlined text.
    Underline,
    /// Struck-through text.
    Strike,
}

impl Style {
    /// The ANSI escape code for this style.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Black => "\x1b[30m",
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Purple => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
            Self::White => "\x1b[37m",
            Self::Bold => "\x1b[1m",
            Self::Italic => "\x1b[3m",
            Self::Underline => "\x1b[4m",
            Self::Strike => "\x1b[9m",
        }
    }
}

/// Wrap `text` in the given styles, applied in order, then append a reset.
///
/// An empty style list yields the text with only the reset appended.
#[must_use]
pub fn paint(text: &str, styles: &[Style]) -> String {
    let mut out = String::with_capacity(text.len() + (styles.len() + 1) * RESET.len());
    for style in styles {
        out.push_str(style.code());
    }
    out.push_str(text);
    out.push_str(RESET);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_style() {
        assert_eq!(paint("hi", &[Style::Red]), "\x1b[31mhi\x1b[0m");
    }

    #[test]
    fn test_styles_apply_in_order() {
        assert_eq!(
            paint("done", &[Style::Bold, Style::Green, Style::Underline]),
            "\x1b[1m\x1b[32m\x1b[4mdone\x1b[0m"
        );
    }

    #[test]
    fn test_empty_style_list_still_resets() {
        assert_eq!(paint("plain", &[]), "plain\x1b[0m");
    }

    #[test]
    fn test_every_style_has_a_distinct_code() {
        let all = [
            Style::Black,
            Style::Red,
            Style::Green,
            Style::Yellow,
            Style::Blue,
            Style::Purple,
            Style::Cyan,
            Style::White,
            Style::Bold,
            Style::Italic,
            Style::Underline,
            Style::Strike,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }
}
