// crates/engine/src/renderer.rs
use crate::assembler::Line;
use crate::config::{EXPANDED_CAPACITY, NUMBER_WIDTH, StreamConfig};
use crate::style::ByteStyle;
use std::io::{self, Write};

const TAB_MARKER: &[u8] = b"^I";
const END_MARKER: u8 = b'$';

/// Formats logical lines according to a [`StreamConfig`].
///
/// Reuses its buffers between calls; one renderer serves a whole run.
#[derive(Debug)]
pub struct LineRenderer {
    config: StreamConfig,
    expanded: Vec<u8>,
    scratch: Vec<u8>,
}

impl LineRenderer {
    #[must_use]
    pub fn new(config: StreamConfig) -> Self {
        Self {
            config,
            expanded: Vec::with_capacity(EXPANDED_CAPACITY),
            scratch: Vec::with_capacity(EXPANDED_CAPACITY),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &StreamConfig {
        &self.config
    }

    /// Tab expansion and end marker. Returns the content bytes of the line.
    pub fn expand(&mut self, line: &[u8]) -> &[u8] {
        expand_into(&self.config, line, &mut self.expanded);
        &self.expanded
    }

    /// Write one fully formatted line, including its trailing newline.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if writing fails.
    pub fn render<W: Write + ?Sized>(
        &mut self,
        line: &Line,
        number: usize,
        out: &mut W,
    ) -> io::Result<()> {
        expand_into(&self.config, line.as_bytes(), &mut self.expanded);

        self.scratch.clear();
        let margin = self.config.margin();
        self.scratch.resize(margin, b' ');

        if self.config.shows_number(line.is_nonblank()) {
            write!(self.scratch, "{number:>width$}\t", width = NUMBER_WIDTH)?;
        }

        if self.config.use_color {
            for &b in &self.expanded {
                ByteStyle::classify(b).paint_into(b, &mut self.scratch);
            }
        } else {
            self.scratch.extend_from_slice(&self.expanded);
        }
        self.scratch.push(b'\n');

        out.write_all(&self.scratch)
    }
}

fn expand_into(config: &StreamConfig, line: &[u8], expanded: &mut Vec<u8>) {
    expanded.clear();
    if config.show_tabs {
        for &b in line {
            if b == b'\t' {
                expanded.extend_from_slice(TAB_MARKER);
            } else {
                expanded.push(b);
            }
        }
    } else {
        expanded.extend_from_slice(line);
    }
    if config.show_ends {
        expanded.push(END_MARKER);
    }
    debug_assert!(expanded.len() <= EXPANDED_CAPACITY);
}
