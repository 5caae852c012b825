//! Sampling loop scenarios with scripted probes.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use counting_client::{sampler, Probe};
use counting_core::error::{CountingError, Result};
use counting_core::{Report, DEFAULT_ERROR_KEY};

/// Replays a fixed script of outcomes and counts how often it was called.
struct ScriptedProbe {
    script: Mutex<VecDeque<Option<&'static str>>>,
    calls: AtomicU64,
}

impl ScriptedProbe {
    /// `Some(id)` answers with that header value, `None` fails the round.
    fn new(script: impl IntoIterator<Item = Option<&'static str>>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            calls: AtomicU64::new(0),
        }
    }

    fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Probe for ScriptedProbe {
    async fn probe(&self) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.script.lock().unwrap().pop_front() {
            Some(Some(id)) => Ok(id.to_string()),
            Some(None) => Err(CountingError::Transport("connection refused".into())),
            None => panic!("probe called more often than scripted"),
        }
    }
}

#[tokio::test]
async fn all_rounds_from_one_instance() {
    let probe = ScriptedProbe::new(std::iter::repeat(Some("A")).take(10));
    let tally = sampler::run(&probe, 10, DEFAULT_ERROR_KEY).await;

    assert_eq!(probe.calls(), 10);
    assert_eq!(tally.get("A"), 10);
    assert_eq!(tally.total(), 10);
    assert!(!tally.contains(DEFAULT_ERROR_KEY));

    let report = Report::from_tally(&tally, 10);
    assert_eq!(report.to_string(), "Service A: 100.000000 percent\n");
}

#[tokio::test]
async fn transport_failures_never_abort_the_run() {
    let script = [
        Some("A"), None, Some("A"), Some("A"), None,
        Some("A"), Some("A"), None, Some("A"), Some("A"),
    ];
    let probe = ScriptedProbe::new(script);
    let tally = sampler::run(&probe, 10, DEFAULT_ERROR_KEY).await;

    assert_eq!(probe.calls(), 10);
    assert_eq!(tally.get("A"), 7);
    assert_eq!(tally.get("Error"), 3);

    let report = Report::from_tally(&tally, 10);
    assert_eq!(report.line("A").unwrap().percentage, 70.0);
    assert_eq!(report.line("Error").unwrap().percentage, 30.0);
}

#[tokio::test]
async fn every_round_failing_only_counts_errors() {
    let probe = ScriptedProbe::new(std::iter::repeat(None).take(6));
    let tally = sampler::run(&probe, 6, "Failed").await;

    assert_eq!(tally.get("Failed"), 6);
    assert_eq!(tally.len(), 1);
    assert_eq!(tally.total(), 6);
}

#[tokio::test]
async fn missing_header_is_dropped() {
    let probe = ScriptedProbe::new([Some("A"), Some(""), Some("B"), Some("A")]);
    let tally = sampler::run(&probe, 4, DEFAULT_ERROR_KEY).await;

    assert_eq!(tally.get("A"), 2);
    assert_eq!(tally.get("B"), 1);
    assert_eq!(tally.errors(), 0);
    assert_eq!(tally.total(), 3);
    assert_eq!(tally.unlabeled(), 1);
}

#[tokio::test]
async fn round_count_is_exact() {
    for rounds in [0u64, 1, 2, 17] {
        let script = (0..rounds).map(|i| match i % 3 {
            0 => Some("A"),
            1 => Some("B"),
            _ => None,
        });
        let probe = ScriptedProbe::new(script);
        let tally = sampler::run(&probe, rounds, DEFAULT_ERROR_KEY).await;

        assert_eq!(probe.calls(), rounds);
        assert_eq!(tally.total(), rounds, "rounds={rounds}");

        let report = Report::from_tally(&tally, rounds);
        if rounds > 0 {
            assert!((report.total_percentage() - 100.0).abs() < 1e-9, "rounds={rounds}");
        } else {
            assert!(report.lines().is_empty());
        }
    }
}
