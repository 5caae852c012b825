//! Sampling client binary.
//!
//! Runs the configured number of invocations against the service and prints
//! each observed instance's share of the responses.

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use counting_client::{config, sampler, HttpProbe};
use counting_core::error::Result;
use counting_core::Report;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "counting-client failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cfg = config::load()?;
    let plan = &cfg.client;
    let probe = HttpProbe::new(plan)?;

    println!("Running {} invocations on service at {}", plan.rounds, probe.url());
    let tally = sampler::run(&probe, plan.rounds, &plan.error_key).await;

    if tally.unlabeled() > 0 {
        tracing::warn!(
            unlabeled = tally.unlabeled(),
            header = %plan.header_key,
            "some responses had no instance id and are missing from the results"
        );
    }

    let report = Report::from_tally(&tally, plan.rounds);
    println!("\nResults:\n--------");
    print!("{report}");
    Ok(())
}
