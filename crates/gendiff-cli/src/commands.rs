use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

/// Send logs to stderr so stdout carries only the diff. `--verbose` forces
/// debug level, otherwise `RUST_LOG` applies with a default of `warn`.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    debug!(
        file1 = %cli.file1.display(),
        file2 = %cli.file2.display(),
        format = %cli.format,
        "comparing files"
    );

    let out = gendiff::gen_diff(&cli.file1, &cli.file2, &cli.format)?;
    println!("{}", out);
    Ok(())
}
