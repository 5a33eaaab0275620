// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::{AppError, Result};
pub use neko_engine::config::{StreamConfig, StreamConfigBuilder};
use neko_engine::error::EngineError;

impl TryFrom<&Args> for StreamConfig {
    type Error = AppError;

    fn try_from(args: &Args) -> Result<Self> {
        StreamConfigBuilder::default()
            .number_all(args.number_all)
            .number_nonblank(args.number_nonblank)
            .show_ends(args.show_ends)
            .show_tabs(args.show_tabs)
            .center(args.center)
            .use_color(args.use_color)
            .build()
            .map_err(|e| EngineError::Config(e.to_string()).into())
    }
}
