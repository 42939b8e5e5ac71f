//! Vote counter metrics.

use emojivoto_store::VoteObserver;
use metrics::counter;

/// Registra la metrica de votos.
pub fn register_vote_metrics() {
    metrics::describe_counter!("emojivoto_votes_total", "Number of emoji votes");
}

/// Observer que cuenta votos por emoji en `emojivoto_votes_total`.
#[derive(Debug, Clone, Copy, Default)]
pub struct VoteMetrics;

impl VoteObserver for VoteMetrics {
    fn vote_recorded(&self, choice: &str, _total: u64) {
        counter!("emojivoto_votes_total", "emoji" => choice.to_string()).increment(1);
    }
}
