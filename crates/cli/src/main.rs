use clap::Parser;
use neko_cli::args::Args;
use neko_cli::config::StreamConfig;
use neko_engine::filesystem::InputSource;
use std::io::{self, BufWriter};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("neko: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<ExitCode> {
    neko_cli::logging::init(args)?;
    let config = StreamConfig::try_from(args)?;
    log::debug!("{config:?}");

    let sources = InputSource::from_operands(&args.files);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    // エラーメッセージにはソース名が含まれる
    let result = neko_engine::run(&config, &sources, &mut out, |err| {
        eprintln!("neko: {err}");
    });

    Ok(if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
