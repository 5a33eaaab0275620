use derive_builder::Builder;

/// Size of each read from the underlying stream.
pub const BUF_SIZE: usize = 4096;
/// Line buffer bound. One slot is reserved, so a line keeps at most `MAX_LINE - 1` bytes.
pub const MAX_LINE: usize = 4096;
/// Upper bound of a line after tab expansion and end-marker insertion.
pub const EXPANDED_CAPACITY: usize = MAX_LINE * 4;
pub const TERMINAL_WIDTH: usize = 80;
pub const LINE_DISPLAY_WIDTH: usize = 64;
/// Right-justified width of the line-number field.
pub const NUMBER_WIDTH: usize = 6;

/// Display options for one run. Built once, then only read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Builder)]
#[builder(setter(into), default, build_fn(validate = "Self::validate"))]
#[allow(clippy::struct_excessive_bools)]
pub struct StreamConfig {
    pub number_all: bool,
    pub number_nonblank: bool,
    pub show_ends: bool,
    pub show_tabs: bool,
    pub center: bool,
    pub use_color: bool,
}

impl StreamConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.number_all == Some(true) && self.number_nonblank == Some(true) {
            return Err("number_all and number_nonblank are mutually exclusive".to_string());
        }
        Ok(())
    }
}

impl StreamConfig {
    /// 中央寄せ時の左マージン（固定幅から算出、行の実際の長さは見ない）
    #[must_use]
    pub const fn margin(&self) -> usize {
        if self.center {
            (TERMINAL_WIDTH - LINE_DISPLAY_WIDTH) / 2
        } else {
            0
        }
    }

    /// Whether a line gets a number prefix.
    #[must_use]
    pub const fn shows_number(&self, nonblank: bool) -> bool {
        self.number_all || (self.number_nonblank && nonblank)
    }

    /// Whether the line counter moves past a line.
    ///
    /// Without any numbering flag the counter advances on every line, as under
    /// `number_all`, but its value is never displayed.
    #[must_use]
    pub const fn advances_counter(&self, nonblank: bool) -> bool {
        if self.number_nonblank {
            nonblank
        } else {
            true
        }
    }
}
