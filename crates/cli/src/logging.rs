// crates/cli/src/logging.rs
use crate::args::Args;
use crate::error::Result;

/// Default filter for a `-v` count. `RUST_LOG` takes precedence.
#[must_use]
pub const fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize logging based on verbosity level
///
/// # Errors
///
/// Returns an error if a global logger is already installed.
pub fn init(args: &Args) -> Result<()> {
    if args.quiet {
        return Ok(());
    }

    let env = env_logger::Env::default().default_filter_or(level_for(args.verbose));
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init()?;
    Ok(())
}
