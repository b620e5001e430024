use std::io::{self, Read, Write};
use std::process::ExitCode;

use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use json_normalize::{normalize_slice, EnvVarConfig, NormalizeError, INVALID_JSON_MESSAGE};

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the document
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match EnvVarConfig::try_from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };
    debug!("Loaded config: {:?}", config);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_invalid_input() => {
            match &e {
                NormalizeError::Parse(inner) => debug!("Rejected input: {}", inner),
                NormalizeError::InputTooLarge { size, limit } => {
                    debug!("Rejected input: {} bytes exceeds limit of {}", size, limit)
                }
                _ => {}
            }
            eprintln!("{INVALID_JSON_MESSAGE}");
            if config.strict_exit {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("Normalization aborted: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Reads all of stdin, normalizes it and writes exactly one line to stdout.
fn run(config: &EnvVarConfig) -> Result<(), NormalizeError> {
    let mut input = Vec::new();
    io::stdin().lock().read_to_end(&mut input)?;
    debug!("Read {} bytes from stdin", input.len());

    #[cfg(feature = "debug_document")]
    info!("Input document: {}", String::from_utf8_lossy(&input));

    let output = normalize_slice(&input, config.max_input_bytes)?;

    #[cfg(feature = "debug_document")]
    info!("Normalized document: {}", output);
    #[cfg(not(feature = "debug_document"))]
    info!("Normalized {} bytes into {} bytes", input.len(), output.len());

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}")?;
    stdout.flush()?;
    Ok(())
}
