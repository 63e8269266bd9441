//! Annealing configuration.

/// Default starting temperature.
pub const DEFAULT_INITIAL_TEMPERATURE: f64 = 10_000.0;
/// Default geometric cooling rate, applied once per iteration.
pub const DEFAULT_COOLING_RATE: f64 = 0.9995;
/// Smallest iteration budget a run receives by default.
pub const MIN_ITERATION_BUDGET: usize = 20_000;
/// Default iterations granted per movable student.
pub const ITERATIONS_PER_STUDENT: usize = 2_000;

/// Configuration for the annealing search.
///
/// The defaults are tuned for classroom-sized grids: a hot start so the
/// early search walks freely, slow geometric cooling, and an iteration
/// budget that scales with the number of movable students.
///
/// # Examples
///
/// ```
/// use u_seating::solver::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(5_000.0)
///     .with_cooling_rate(0.999)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct AnnealConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Geometric cooling rate in (0, 1), applied every iteration:
    /// `T_{k+1} = cooling_rate * T_k`.
    pub cooling_rate: f64,

    /// Hard iteration budget. `None` derives the budget from the
    /// student count, see [`AnnealConfig::iteration_budget`].
    pub max_iterations: Option<usize>,

    /// Random seed for reproducibility. `None` draws a fresh seed, so
    /// two unseeded runs may return different layouts.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: DEFAULT_INITIAL_TEMPERATURE,
            cooling_rate: DEFAULT_COOLING_RATE,
            max_iterations: None,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = Some(n);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The iteration budget for a run with `movable_students` students:
    /// `max_iterations` when set, otherwise
    /// `max(MIN_ITERATION_BUDGET, movable_students * ITERATIONS_PER_STUDENT)`.
    pub fn iteration_budget(&self, movable_students: usize) -> usize {
        self.max_iterations
            .unwrap_or_else(|| MIN_ITERATION_BUDGET.max(movable_students * ITERATIONS_PER_STUDENT))
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            ));
        }
        Ok(())
    }
}
