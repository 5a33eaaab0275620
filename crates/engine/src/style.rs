// crates/engine/src/style.rs
//! 文字種ごとの色付け

const DIGIT_STYLE: &[u8] = b"\x1B[1;34m";
const LETTER_STYLE: &[u8] = b"\x1B[1;32m";
const RESET: &[u8] = b"\x1B[0m";

/// Display class of a single output byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteStyle {
    /// ASCII `0-9`, bold blue.
    Digit,
    /// ASCII `A-Z` / `a-z`, bold green.
    Letter,
    /// Everything else, written as is.
    Plain,
}

impl ByteStyle {
    #[must_use]
    pub const fn classify(byte: u8) -> Self {
        if byte.is_ascii_digit() {
            Self::Digit
        } else if byte.is_ascii_alphabetic() {
            Self::Letter
        } else {
            Self::Plain
        }
    }

    const fn prefix(self) -> Option<&'static [u8]> {
        match self {
            Self::Digit => Some(DIGIT_STYLE),
            Self::Letter => Some(LETTER_STYLE),
            Self::Plain => None,
        }
    }

    /// Append `byte` to `out`, wrapped in this style's escape codes.
    pub fn paint_into(self, byte: u8, out: &mut Vec<u8>) {
        match self.prefix() {
            Some(prefix) => {
                out.extend_from_slice(prefix);
                out.push(byte);
                out.extend_from_slice(RESET);
            }
            None => out.push(byte),
        }
    }

    /// Styled representation of one byte.
    #[must_use]
    pub fn paint(byte: u8) -> Vec<u8> {
        let mut out = Vec::with_capacity(12);
        Self::classify(byte).paint_into(byte, &mut out);
        out
    }
}
