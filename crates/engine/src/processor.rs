use crate::assembler::LineAssembler;
use crate::error::{EngineError, Result};
use crate::filesystem::InputSource;
use crate::renderer::LineRenderer;
use crate::stats::StreamStats;
use std::io::{Read, Write};

/// Display one opened stream through `renderer`.
///
/// The line counter starts at 1 for every stream.
///
/// # Errors
///
/// Returns [`EngineError::Read`] when the stream fails mid-read (lines already
/// written stay written) and [`EngineError::Write`] when the sink fails.
pub fn process_stream<R: Read, W: Write + ?Sized>(
    reader: R,
    source_name: &str,
    renderer: &mut LineRenderer,
    out: &mut W,
) -> Result<StreamStats> {
    let mut stats = StreamStats::new(source_name);
    let mut assembler = LineAssembler::new(reader);
    let mut line_num: usize = 1;

    for line in assembler.by_ref() {
        let line = line.map_err(|e| EngineError::Read {
            source_name: source_name.to_string(),
            source: e,
        })?;

        if line.truncated() > 0 {
            log::debug!(
                "{source_name}: line {} truncated, {} bytes dropped",
                stats.lines + 1,
                line.truncated()
            );
            stats.truncated_lines += 1;
        }

        let nonblank = line.is_nonblank();
        renderer
            .render(&line, line_num, out)
            .map_err(EngineError::Write)?;

        stats.lines += 1;
        if nonblank {
            stats.nonblank += 1;
        }
        if renderer.config().advances_counter(nonblank) {
            line_num += 1;
        }
    }

    stats.bytes = assembler.bytes_read();
    Ok(stats)
}

/// Open, display and flush one source.
///
/// # Errors
///
/// Returns [`EngineError::SourceOpen`] if the source cannot be opened, plus
/// anything [`process_stream`] or the final flush reports.
pub fn process_source<W: Write + ?Sized>(
    source: &InputSource,
    renderer: &mut LineRenderer,
    out: &mut W,
) -> Result<StreamStats> {
    let reader = source.open()?;
    let result = process_stream(reader, &source.name(), renderer, out);
    // 読み込み失敗でも出力済みの行は流す
    out.flush().map_err(EngineError::Write)?;
    result
}
