use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tlu_mask::config::Config;
use tlu_mask::engine::{report_error, run_trigger_config};
use tlu_mask::error::InputError;
use tlu_mask::format::OutputFormat;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Converts a trigger configuration such as XX1110 into TLU trigger masks.
///
/// Each character describes one trigger line: 1 must be present, 0 must be
/// absent, X may be either.
#[derive(Parser)]
#[clap(version)]
pub struct Args {
    #[clap(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Exit with a failure status when the configuration is rejected
    #[clap(long)]
    strict: bool,

    /// Trigger configuration; anything after it is ignored
    #[clap(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        num_args = 0..
    )]
    pattern: Vec<OsString>,
}

fn main() -> eyre::Result<ExitCode> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(io::stderr),
        )
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(format) = args.format {
        config.format = format;
    }
    config.strict |= args.strict;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mask = match args.pattern.first() {
        Some(pattern) => run_trigger_config(
            &pattern.to_string_lossy(),
            &mut out,
            config.format,
        )?,
        None => {
            report_error(&mut out, &InputError::MissingArgument)?;
            None
        }
    };

    out.flush()?;

    if mask.is_none() && config.strict {
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
