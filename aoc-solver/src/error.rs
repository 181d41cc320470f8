//! Errors raised while registering, parsing and solving puzzles

use thiserror::Error;

/// Input text a solver could not turn into its shared data
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// A line or record has the wrong shape
    #[error("invalid input: {0}")]
    InvalidFormat(String),
    /// The input ends before something the solver needs
    #[error("incomplete input: {0}")]
    MissingData(String),
}

#[derive(Debug, Error)]
pub enum SolveError {
    /// `solve_part` has no arm for this part
    #[error("part {0} has no implementation")]
    PartNotImplemented(u8),
    /// Part is zero or above `Solver::PARTS`
    #[error("part {0} is outside this solver's parts")]
    PartOutOfRange(u8),
    /// Parsed data admits no answer
    #[error("no answer: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Build a `SolveFailed` from anything that converts into a boxed error,
    /// including plain strings and `anyhow::Error`.
    pub fn failed<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        SolveError::SolveFailed(error.into())
    }
}

/// Failure to produce a solver instance or an answer from the registry
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("no solver registered for {0} day {1}")]
    NotFound(u16, u8),
    #[error("{0} day {1} cannot be stored in the registry")]
    InvalidYearDay(u16, u8),
    #[error(transparent)]
    ParseError(#[from] ParseError),
    #[error(transparent)]
    SolveError(#[from] SolveError),
}

#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Two factories claim the same year and day
    #[error("{0} day {1} is registered twice")]
    DuplicateSolver(u16, u8),
    #[error("{0} day {1} cannot be stored in the registry")]
    InvalidYearDay(u16, u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_error_shows_inner_message() {
        let err = SolverError::from(ParseError::MissingData("no seats".into()));
        assert_eq!(err.to_string(), "incomplete input: no seats");

        let err = SolverError::from(SolveError::failed("no gap"));
        assert_eq!(err.to_string(), "no answer: no gap");
    }

    #[test]
    fn test_failed_keeps_source() {
        let io = std::io::Error::other("empty grid");
        let err = SolveError::failed(io);
        let source = std::error::Error::source(&err).map(|e| e.to_string());
        assert_eq!(source.as_deref(), Some("empty grid"));
    }
}
