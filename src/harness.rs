//! Randomized cross-check of [`crate::bag::solve`] against [`crate::search::solve_by_search`].
//!
//! Both solvers get the same random trials. Different subsets may reach the optimum,
//! so only the propabilities are compared. The subset of the knapsack is additionally
//! checked to fit the budget and to really reach the claimed propability.

use rand::Rng;
use tracing::debug;

use crate::{bag, search, Error, Result, Solution, Trial};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckConfig {
    /// number of independent random trial sets
    pub rounds: usize,
    /// trials per set, at most [`search::MAX_SEARCH_TRIALS`]
    pub nr_trials: usize,
    /// time budget handed to both solvers
    pub max_time: usize,
    /// trial times are drawn from `0..max_trial_time`
    pub max_trial_time: usize,
    /// largest accepted absolute difference of the two propabilities
    pub tolerance: f64,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            rounds: 10,
            nr_trials: 10,
            max_time: 200,
            max_trial_time: 200,
            tolerance: 1e-10,
        }
    }
}

/// fault propabilities uniform in `0.0..1.0`, times uniform in `0..max_trial_time`.
pub fn random_trials(
    rng: &mut impl Rng,
    nr_trials: usize,
    max_trial_time: usize,
) -> Result<Vec<Trial>> {
    if max_trial_time == 0 {
        return Err(Error::InvalidCheck(
            "maximum trial time must be positive".to_string(),
        ));
    }
    (0..nr_trials)
        .map(|_| Trial::new(rng.gen::<f64>(), rng.gen_range(0..max_trial_time)))
        .collect()
}

#[derive(Debug, Clone)]
pub struct RoundOutcome {
    /// 1-based
    pub round: usize,
    pub trials: Vec<Trial>,
    /// result of the knapsack
    pub got: Solution,
    /// result of the exhaustive search
    pub expected: Solution,
    pub difference: f64,
    /// the knapsack subset fits the budget and reaches its claimed propability
    pub sound: bool,
    pub accepted: bool,
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Test {}: {}, probability: {}",
            self.round,
            self.accepted,
            self.got.probability.value()
        )?;
        if !self.accepted {
            write!(f, ", difference {}", self.difference)?;
            if !self.sound {
                write!(f, ", subset does not reach its probability")?;
            }
        }
        write!(
            f,
            ", subset get: {:?}, subset expected: {:?}",
            self.got.chosen, self.expected.chosen
        )
    }
}

pub fn run_round(rng: &mut impl Rng, config: &CheckConfig, round: usize) -> Result<RoundOutcome> {
    let trials = random_trials(rng, config.nr_trials, config.max_trial_time)?;
    let got = bag::solve(&trials, config.max_time);
    let expected = search::solve_by_search(&trials, config.max_time)?;

    let difference = (got.probability.value() - expected.probability.value()).abs();
    let recomputed = got.exact_probability(&trials).approximate();
    let sound = got.total_time(&trials) <= config.max_time
        && (recomputed.value() - got.probability.value()).abs() < config.tolerance;
    let accepted = sound && difference < config.tolerance;
    debug!(round, difference, sound, accepted, "round finished");

    Ok(RoundOutcome {
        round,
        trials,
        got,
        expected,
        difference,
        sound,
        accepted,
    })
}

#[derive(Debug, Clone, Default)]
pub struct Report {
    pub rounds: Vec<RoundOutcome>,
}

impl Report {
    pub fn accepted(&self) -> bool {
        self.rounds.iter().all(|r| r.accepted)
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for round in &self.rounds {
            writeln!(f, "{round}")?;
        }
        write!(f, "{}", if self.accepted() { "accepted" } else { "fail" })
    }
}

pub fn run_check(rng: &mut impl Rng, config: &CheckConfig) -> Result<Report> {
    if config.nr_trials > search::MAX_SEARCH_TRIALS {
        return Err(Error::InvalidCheck(format!(
            "at most {} trials per round can be searched exhaustively",
            search::MAX_SEARCH_TRIALS
        )));
    }
    let rounds = (1..=config.rounds)
        .map(|round| run_round(&mut *rng, config, round))
        .collect::<Result<Vec<_>>>()?;
    Ok(Report { rounds })
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_trials_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let trials = random_trials(&mut rng, 100, 5).unwrap();
        assert_eq!(trials.len(), 100);
        for trial in trials {
            assert!((0.0..1.0).contains(&trial.prob().value()));
            assert!(trial.time() < 5);
        }
    }

    #[test]
    fn zero_trial_time_is_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(
            random_trials(&mut rng, 3, 0),
            Err(Error::InvalidCheck(_))
        ));
    }

    #[test]
    fn default_check_passes() {
        let mut rng = StdRng::seed_from_u64(2024);
        let report = run_check(&mut rng, &CheckConfig::default()).unwrap();
        assert_eq!(report.rounds.len(), 10);
        assert!(report.accepted(), "{report}");
        assert!(report.to_string().ends_with("accepted"));
    }

    #[test]
    fn tight_budgets_pass() {
        let mut rng = StdRng::seed_from_u64(99);
        let config = CheckConfig {
            rounds: 30,
            nr_trials: 12,
            max_time: 15,
            max_trial_time: 10,
            ..CheckConfig::default()
        };
        let report = run_check(&mut rng, &config).unwrap();
        assert!(report.accepted(), "{report}");
    }

    #[test]
    fn oversized_rounds_are_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = CheckConfig {
            nr_trials: search::MAX_SEARCH_TRIALS + 1,
            ..CheckConfig::default()
        };
        assert!(matches!(
            run_check(&mut rng, &config),
            Err(Error::InvalidCheck(_))
        ));
    }

    #[test]
    fn failed_round_shows_difference() {
        let trials = vec![Trial::new(0.5, 1).unwrap()];
        let outcome = RoundOutcome {
            round: 3,
            got: Solution::empty(),
            expected: bag::solve(&trials, 1),
            trials,
            difference: 0.5,
            sound: true,
            accepted: false,
        };
        assert_eq!(
            outcome.to_string(),
            "Test 3: false, probability: 0, difference 0.5, subset get: [], subset expected: [0]"
        );
    }
}
