//! Observation hooks for the analyze endpoint.
//!
//! Handlers report outcomes to an [`AnalysisObserver`] held in the
//! application state instead of logging directly, so the logging and metrics
//! sinks are chosen once at startup and can be swapped out in tests.

use analyzer::TextAnalysis;

use crate::error::ClientInputError;

/// Receives the outcome of every analyze request.
pub trait AnalysisObserver: Send + Sync + 'static {
    /// Called after text was analyzed successfully.
    fn analyzed(&self, analysis: &TextAnalysis);

    /// Called when the request was rejected as invalid client input.
    fn rejected(&self, error: &ClientInputError);

    /// Called on an unexpected failure, before the generic 500 is returned.
    fn failed(&self, detail: &str);
}

/// Production observer: structured `tracing` events and `metrics` counters.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl AnalysisObserver for TracingObserver {
    fn analyzed(&self, analysis: &TextAnalysis) {
        tracing::info!(
            word_count = analysis.word_count,
            character_count = analysis.character_count,
            blank = analysis.is_blank(),
            "analyzed text with {} words and {} characters",
            analysis.word_count,
            analysis.character_count,
        );
        metrics::counter!("analyze_requests_total", "outcome" => "ok").increment(1);
        metrics::histogram!("analyze_words").record(analysis.word_count as f64);
        metrics::histogram!("analyze_characters").record(analysis.character_count as f64);
    }

    fn rejected(&self, error: &ClientInputError) {
        tracing::debug!(kind = error.kind(), "rejected analyze request: {error}");
        metrics::counter!("analyze_requests_total", "outcome" => "rejected").increment(1);
    }

    fn failed(&self, detail: &str) {
        tracing::error!(error = %detail, "error processing analyze request");
        metrics::counter!("analyze_requests_total", "outcome" => "error").increment(1);
    }
}
