//! SA configuration.

use crate::error::ConfigError;

/// Configuration for the simulated annealing driver.
///
/// Temperature follows a geometric schedule: `stages` cooling steps of
/// `iterations_per_stage` moves each, multiplying the temperature by
/// `cooling_rate` after every stage.
///
/// # Examples
///
/// ```
/// use u_steiner::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(2.0)
///     .with_cooling_rate(0.9)
///     .with_stages(50)
///     .with_iterations_per_stage(100)
///     .with_stagnation(0.0, 40)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Initial temperature `t0`.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// Number of cooling stages.
    pub stages: usize,

    /// Moves evaluated at each temperature.
    pub iterations_per_stage: usize,

    /// A move whose |delta| is below this fraction of the current cost
    /// counts as stagnant. Set to 0 to disable early stopping.
    pub stagnation_percent: f64,

    /// Consecutive stagnant moves after which the search stops.
    pub stagnation_limit: usize,

    /// Acceptance probability targeted for the first nonzero move at `t0`;
    /// calibrates the acceptance scale.
    pub initial_acceptance: f64,

    /// Independent annealing chains run from the same initial tree.
    pub chains: usize,

    /// Run chains on the rayon pool (requires the `parallel` feature).
    pub parallel: bool,

    /// Random seed for reproducibility. Chain `i` uses `seed + i`.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1.0,
            cooling_rate: 0.95,
            stages: 20,
            iterations_per_stage: 200,
            stagnation_percent: 0.01,
            stagnation_limit: 40,
            initial_acceptance: 0.9999,
            chains: 1,
            parallel: false,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, alpha: f64) -> Self {
        self.cooling_rate = alpha;
        self
    }

    pub fn with_stages(mut self, n: usize) -> Self {
        self.stages = n;
        self
    }

    pub fn with_iterations_per_stage(mut self, n: usize) -> Self {
        self.iterations_per_stage = n;
        self
    }

    /// Sets the stagnation fraction and the number of consecutive
    /// stagnant moves tolerated.
    pub fn with_stagnation(mut self, percent: f64, limit: usize) -> Self {
        self.stagnation_percent = percent;
        self.stagnation_limit = limit;
        self
    }

    pub fn with_initial_acceptance(mut self, p: f64) -> Self {
        self.initial_acceptance = p;
        self
    }

    pub fn with_chains(mut self, n: usize) -> Self {
        self.chains = n;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total move budget, `stages × iterations_per_stage`.
    pub fn max_iterations(&self) -> usize {
        self.stages.saturating_mul(self.iterations_per_stage)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.initial_temperature > 0.0 && self.initial_temperature.is_finite()) {
            return Err(ConfigError(format!(
                "initial_temperature must be positive and finite, got {}",
                self.initial_temperature
            )));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(ConfigError(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        if self.stages == 0 || self.iterations_per_stage == 0 {
            return Err(ConfigError(
                "stages and iterations_per_stage must be positive".into(),
            ));
        }
        if !(self.stagnation_percent >= 0.0 && self.stagnation_percent.is_finite()) {
            return Err(ConfigError(format!(
                "stagnation_percent must be non-negative, got {}",
                self.stagnation_percent
            )));
        }
        if self.stagnation_limit == 0 {
            return Err(ConfigError("stagnation_limit must be positive".into()));
        }
        if !(self.initial_acceptance > 0.0 && self.initial_acceptance < 1.0) {
            return Err(ConfigError(format!(
                "initial_acceptance must be in (0, 1), got {}",
                self.initial_acceptance
            )));
        }
        if self.chains == 0 {
            return Err(ConfigError("chains must be positive".into()));
        }
        Ok(())
    }
}
