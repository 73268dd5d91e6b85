use std::time::Duration;

/// Errors produced while configuring or running the solver.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum SolveError {
    /// A divert factor below the minimum of 1.0.
    #[display("divert factor {divert_factor} is less than 1.0")]
    DivertFactorOutOfRange {
        /// The rejected divert factor.
        divert_factor: f64,
    },
    /// Initial and goal states with different grid dimensions.
    #[display("initial grid dimensions {initial:?} do not match goal grid dimensions {goal:?}")]
    DimensionMismatch {
        /// Width and height of the initial grid.
        initial: (u8, u8),
        /// Width and height of the goal grid.
        goal: (u8, u8),
    },
    /// The search exhausted its time budget before reaching the goal.
    #[display("search exceeded the time budget of {budget:?}")]
    Timeout {
        /// The budget that was exceeded.
        budget: Duration,
    },
}
