//! SA execution loop.
//!
//! # Algorithm
//!
//! 1. Start from the problem's initial solution at temperature `t0`.
//! 2. For each of `stages` cooling stages, evaluate
//!    `iterations_per_stage` neighbors:
//!    a. Skip moves with `delta == 0`.
//!    b. On the first nonzero move, calibrate the acceptance scale
//!       `k = |delta| / (-ln(p0) * t0)` so that move would be accepted with
//!       probability `p0`.
//!    c. Accept improvements; accept worsening moves with probability
//!       `exp(-delta / (k * t))`.
//!    d. Count consecutive moves with `|delta| < percent * cost`; stop
//!       once the count reaches the limit.
//! 3. Multiply the temperature by the cooling rate after each stage.
//! 4. Return the best solution seen.

use rand::Rng;

use super::config::SaConfig;
use super::types::SaProblem;
use crate::random::create_rng;

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// All `stages × iterations_per_stage` moves were evaluated.
    Exhausted,
    /// Too many consecutive moves changed the cost by less than the
    /// stagnation fraction.
    Stagnation,
    /// The acceptance probability could not be evaluated.
    Overflow,
}

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Cost of the initial solution.
    pub initial_cost: f64,

    /// Total number of iterations (neighbor evaluations), skipped moves
    /// included.
    pub iterations: usize,

    /// Temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Calibrated acceptance scale `k`; `None` if every move had zero delta.
    pub acceptance_scale: Option<f64>,

    /// Why the run ended.
    pub stop_reason: StopReason,

    /// Best cost before the first move and after every iteration.
    pub cost_history: Vec<f64>,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA optimization with a generator seeded from `config.seed`
    /// (or from the OS when unset).
    pub fn run<P: SaProblem>(
        problem: &P,
        config: &SaConfig,
    ) -> Result<SaResult<P::Solution>, P::Error> {
        let mut rng = create_rng(config.seed.unwrap_or_else(rand::random));
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs SA optimization drawing from the caller's generator.
    pub fn run_with_rng<P: SaProblem, R: Rng>(
        problem: &P,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult<P::Solution>, P::Error> {
        config.validate()?;

        let mut current = problem.initial_solution(rng)?;
        let mut current_cost = problem.cost(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;
        let initial_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut scale: Option<f64> = None;
        let mut total_iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut stagnant = 0usize;
        let mut stop_reason = StopReason::Exhausted;

        let mut cost_history = Vec::with_capacity(config.max_iterations() + 1);
        cost_history.push(best_cost);

        'stages: for stage in 0..config.stages {
            tracing::debug!(stage, temperature, "cooling stage");

            for _ in 0..config.iterations_per_stage {
                let candidate = problem.neighbor(&current, rng)?;
                let candidate_cost = problem.cost(&candidate);
                let delta = candidate_cost - current_cost;
                total_iterations += 1;

                if delta == 0.0 {
                    cost_history.push(best_cost);
                    continue;
                }

                let k = match scale {
                    Some(k) => k,
                    None => {
                        let k = calibrate_scale(
                            delta,
                            config.initial_temperature,
                            config.initial_acceptance,
                        );
                        tracing::debug!(k, delta, "calibrated acceptance scale");
                        scale = Some(k);
                        k
                    }
                };

                // Metropolis acceptance criterion
                let accept = if delta < 0.0 {
                    improving_moves += 1;
                    true
                } else {
                    match acceptance_probability(delta, k, temperature) {
                        Some(p) => rng.random::<f64>() < p,
                        None => {
                            tracing::warn!(delta, k, temperature, "acceptance test overflowed");
                            stop_reason = StopReason::Overflow;
                            cost_history.push(best_cost);
                            break 'stages;
                        }
                    }
                };

                if accept {
                    current = candidate;
                    current_cost = candidate_cost;
                    accepted_moves += 1;

                    if current_cost < best_cost {
                        best = current.clone();
                        best_cost = current_cost;
                        tracing::debug!(cost = best_cost, iteration = total_iterations, "new best");
                    }
                }

                cost_history.push(best_cost);

                // Stop after too long without significant change
                if delta.abs() < config.stagnation_percent * current_cost {
                    stagnant += 1;
                    if stagnant >= config.stagnation_limit {
                        stop_reason = StopReason::Stagnation;
                        break 'stages;
                    }
                } else {
                    stagnant = 0;
                }
            }

            temperature *= config.cooling_rate;
        }

        Ok(SaResult {
            best,
            best_cost,
            initial_cost,
            iterations: total_iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            acceptance_scale: scale,
            stop_reason,
            cost_history,
        })
    }
}

/// Scale `k` such that a move of size `|delta|` at temperature `t0` is
/// accepted with probability `p0`.
fn calibrate_scale(delta: f64, t0: f64, p0: f64) -> f64 {
    -delta.abs() / (p0.ln() * t0)
}

/// `exp(-delta / (k * t))`, or `None` when the exponent is not
/// representable.
fn acceptance_probability(delta: f64, k: f64, temperature: f64) -> Option<f64> {
    let exponent = -delta / (k * temperature);
    if exponent.is_nan() || exponent > f64::MAX.ln() {
        return None;
    }
    Some(exponent.exp())
}
