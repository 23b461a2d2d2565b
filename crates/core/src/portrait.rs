use unicode_width::UnicodeWidthStr;

const PORTRAIT: &[&str] = &[
    "    ▄▄▓▓▓▓▓▓▄▄",
    "  ▄▓▓▀▀▀▀▀▀▀▀▓▓▄",
    " ▐▓▀          ▀▓▌",
    " ▐▌  ▄▄▄  ▄▄▄  ▐▌",
    " ▐▌  ▀▀▀  ▀▀▀  ▐▌",
    " ▐▌     ▐▌     ▐▌",
    " ▐▌    ▀▀▀▀    ▐▌",
    "  ▀▄   ░░░░   ▄▀",
    "    ▀▄▄▄▄▄▄▄▄▀",
    "   ▄▄▒▒▓▓▓▓▒▒▄▄",
    " ▐▒▒▓▓▓▓▓▓▓▓▓▓▒▒▌",
];

/// Portrait rows, top to bottom, without trailing padding
#[must_use]
pub const fn lines() -> &'static [&'static str] {
    PORTRAIT
}

/// Display width of the widest portrait row
#[must_use]
pub fn width() -> usize {
    PORTRAIT.iter().map(|line| line.width()).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portrait_dimensions() {
        assert_eq!(lines().len(), 11);
        assert_eq!(width(), 17);
    }

    #[test]
    fn test_portrait_uses_only_spaces_and_blocks() {
        for line in lines() {
            assert!(
                line.chars()
                    .all(|c| c == ' ' || ('\u{2580}'..='\u{259F}').contains(&c)),
                "unexpected character in {line:?}"
            );
        }
    }
}
