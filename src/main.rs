//! storynorm - issue description normalizer.
//!
//! Reads a description from stdin and prints the normalized form. With no
//! input, runs the built-in sample descriptions through the pipeline and
//! prints each original/processed pair for manual inspection.

use std::io::Read;
use std::process::ExitCode;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use storynorm::Result;

/// Sample descriptions exercised when nothing is piped in.
const SAMPLES: [&str; 2] = [
    "As a developer, I want X so Y\n\nh2. Description\n\nSome description here.\n\nh2. Acceptance Criteria\n* Item 1\n* Item 2",
    "*As a developer, I want X so Y*\n\nDescription here.\n\n*Acceptance Criteria:*\n* Item 1\n* Item 2\n\n*Success Metrics:*\n* Metric 1",
];

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    if input.trim().is_empty() {
        run_samples();
        return Ok(());
    }

    if let Some(output) = storynorm::process(Some(&input)) {
        println!("{output}");
    }
    Ok(())
}

fn run_samples() {
    for sample in SAMPLES {
        println!("Original:");
        println!("{sample}");
        println!("\nProcessed:");
        if let Some(output) = storynorm::process(Some(sample)) {
            println!("{output}");
        }
        println!("\n{}\n", "=".repeat(50));
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,storynorm=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
