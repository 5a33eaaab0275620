// crates/engine/src/lib.rs
//! Line assembly and rendering engine behind the `neko` command.

pub mod assembler;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod processor;
pub mod renderer;
pub mod stats;
pub mod style;

use crate::config::StreamConfig;
use crate::error::EngineError;
use crate::filesystem::InputSource;
use crate::renderer::LineRenderer;
use crate::stats::RunResult;
use std::io::Write;

/// Display every source in order.
///
/// A failing source is passed to `on_error` as soon as it fails (after its
/// output so far has been flushed), recorded in `RunResult::errors`, and the
/// run moves on to the next one. A write failure on `out` ends the run, since
/// every later source would hit the same sink.
pub fn run<W, F>(
    config: &StreamConfig,
    sources: &[InputSource],
    out: &mut W,
    mut on_error: F,
) -> RunResult
where
    W: Write + ?Sized,
    F: FnMut(&EngineError),
{
    let mut renderer = LineRenderer::new(*config);
    let mut result = RunResult::default();

    for source in sources {
        log::debug!("displaying {source}");
        match processor::process_source(source, &mut renderer, out) {
            Ok(stats) => {
                log::debug!(
                    "{source}: {} lines, {} bytes, {} truncated",
                    stats.lines,
                    stats.bytes,
                    stats.truncated_lines
                );
                result.stats.push(stats);
            }
            Err(e) => {
                // メッセージ自体にソース名が含まれる
                log::debug!("{e}");
                on_error(&e);
                let fatal = e.is_write();
                result.errors.push((source.name(), e));
                if fatal {
                    break;
                }
            }
        }
    }

    result
}
