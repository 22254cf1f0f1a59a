//! Core trait for Simulated Annealing.

use rand::Rng;

use crate::error::ConfigError;

/// Defines a Simulated Annealing problem.
///
/// The user implements the starting point, neighbor generation and cost
/// evaluation. The SA framework handles temperature management, the
/// acceptance criterion, cooling and stagnation.
///
/// # Minimization
///
/// SA minimizes the cost function. For maximization, negate the cost.
///
/// # Examples
///
/// ```ignore
/// struct Walk;
///
/// impl SaProblem for Walk {
///     type Solution = f64;
///     type Error = ConfigError;
///
///     fn initial_solution<R: Rng>(&self, _rng: &mut R) -> Result<f64, ConfigError> {
///         Ok(10.0)
///     }
///
///     fn cost(&self, x: &f64) -> f64 {
///         x * x
///     }
///
///     fn neighbor<R: Rng>(&self, x: &f64, rng: &mut R) -> Result<f64, ConfigError> {
///         Ok(x + rng.random_range(-1.0..1.0))
///     }
/// }
/// ```
pub trait SaProblem: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + Send;

    /// Failure raised while building or perturbing a solution. Must
    /// absorb configuration errors reported by the runner.
    type Error: From<ConfigError>;

    /// Creates the starting solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Result<Self::Solution, Self::Error>;

    /// Computes the cost of a solution. Lower is better.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Generates a neighbor of the current solution.
    ///
    /// The neighbor must be a fresh value; `solution` is left untouched.
    fn neighbor<R: Rng>(
        &self,
        solution: &Self::Solution,
        rng: &mut R,
    ) -> Result<Self::Solution, Self::Error>;
}
