use itertools::Itertools;

use crate::{ExactProb, Prob, Trial};

/// the best found propability that at least one chosen trial fails,
/// together with the chosen trials as ascending indices into the solved trial slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub probability: Prob,
    pub chosen: Vec<usize>,
}

impl Solution {
    /// no trial is run, so no fault can be observed.
    pub fn empty() -> Self {
        Self {
            probability: Prob::NEVER,
            chosen: Vec::new(),
        }
    }

    /// `trials` must be the slice this solution was computed for.
    pub fn total_time(&self, trials: &[Trial]) -> usize {
        self.chosen.iter().map(|&i| trials[i].time()).sum()
    }

    /// fault propability of the chosen trials, recomputed in float arithmetic.
    pub fn fault_probability(&self, trials: &[Trial]) -> Prob {
        Prob::any(self.chosen.iter().map(|&i| trials[i].prob()))
    }

    /// fault propability of the chosen trials, recomputed without rounding.
    pub fn exact_probability(&self, trials: &[Trial]) -> ExactProb {
        ExactProb::any(self.chosen.iter().map(|&i| ExactProb::from(trials[i].prob())))
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.probability.value(), self.chosen.iter().join(" "))
    }
}
