// Compilation options

use lookalike_core::enums::{Sampling, Strategy, UnmappedPolicy};

/// Factor by which a shuffled request oversamples the product sequence
/// before shuffling and truncating.
pub const OVERSAMPLE_FACTOR: usize = 3;

/// Default hard limit on candidates for uncapped requests.
pub const DEFAULT_UNCAPPED_CEILING: usize = 1_000_000;

/// Options controlling how a word is compiled into candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Decomposition strategy.
    pub strategy: Strategy,
    /// Maximum number of candidates; `None` asks for all of them (subject
    /// to `uncapped_ceiling`).
    pub max_candidates: Option<usize>,
    /// Ordered prefix or oversampled shuffle.
    pub sampling: Sampling,
    /// Treatment of characters without look-alikes in per-character mode.
    pub unmapped: UnmappedPolicy,
    /// Whether substitutable chunks may also keep their literal text.
    pub include_literal: bool,
    /// Hard limit applied when `max_candidates` is `None`.
    pub uncapped_ceiling: usize,
    /// Seed for the shuffle; `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::Greedy,
            max_candidates: Some(1),
            sampling: Sampling::Shuffled,
            unmapped: UnmappedPolicy::Literal,
            include_literal: true,
            uncapped_ceiling: DEFAULT_UNCAPPED_CEILING,
            seed: None,
        }
    }
}

impl CompileOptions {
    /// Options for a deterministic ordered prefix of `max_candidates`.
    pub fn ordered(strategy: Strategy, max_candidates: Option<usize>) -> Self {
        Self {
            strategy,
            max_candidates,
            sampling: Sampling::Ordered,
            ..Self::default()
        }
    }

    /// Whether the final list is shuffled: only capped requests are.
    pub fn shuffles(&self) -> bool {
        self.sampling == Sampling::Shuffled && self.max_candidates.is_some()
    }

    /// Number of candidates to draw from the product sequence.
    pub fn fetch_limit(&self) -> usize {
        match self.max_candidates {
            Some(k) if self.sampling == Sampling::Shuffled => k.saturating_mul(OVERSAMPLE_FACTOR),
            Some(k) => k,
            None => self.uncapped_ceiling,
        }
    }
}
