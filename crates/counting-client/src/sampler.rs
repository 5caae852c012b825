//! The sampling loop.

use counting_core::Tally;

use crate::probe::Probe;

/// Run exactly `rounds` probes, one after another, and return the tally.
///
/// A failed round is recorded under `error_key` and the run continues; nothing
/// aborts it. A response without an identifier is left out of the keyed counts
/// (see [`Tally::unlabeled`]).
pub async fn run<P: Probe + ?Sized>(probe: &P, rounds: u64, error_key: &str) -> Tally {
    let mut tally = Tally::new(error_key);

    for round in 0..rounds {
        tracing::info!(round, "Performing round {round}");
        match probe.probe().await {
            Ok(id) => {
                if !tally.record(&id) {
                    tracing::warn!(round, "response carried no instance id, not counted");
                }
            }
            Err(e) => {
                tracing::warn!(round, error = %e, "Error during request {round}");
                tally.record_error();
            }
        }
    }

    tally
}
