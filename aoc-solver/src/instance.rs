//! Parsed, timed solver instances

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Wall-clock interval covering one parse or one solve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Timing {
    /// Run `f` and record when it started and finished.
    pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Timing) {
        let start = Utc::now();
        let value = f();
        (value, Timing { start, end: Utc::now() })
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// Answer to one part with the time spent producing it
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: String,
    pub timing: Timing,
}

/// One year/day bound to its parsed input
///
/// Parsing happens once in [`SolverInstance::new`]; all parts share the
/// parsed data, so a part may leave it in a state the next part relies on.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parsed: Timing,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let (shared, parsed) = Timing::measure(|| S::parse(input));
        Ok(Self {
            year,
            day,
            shared: shared?,
            parsed,
        })
    }
}

/// Object-safe view of a [`SolverInstance`], as handed out by the registry
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn report(solver: &mut dyn DynSolver) -> Result<(), aoc_solver::SolveError> {
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("{}: {} in {}", part, result.answer, result.timing.duration());
///     }
///     println!("parsed in {}", solver.parse_timing().duration());
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve one part, rejecting parts outside `1..=parts()`.
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// When the input was parsed
    fn parse_timing(&self) -> Timing;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    fn parts(&self) -> u8;
}

impl<S: SolverExt> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let (answer, timing) =
            Timing::measure(|| S::solve_part_checked_range(&mut self.shared, part));
        Ok(SolveResult {
            answer: answer?,
            timing,
        })
    }

    fn parse_timing(&self) -> Timing {
        self.parsed
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}
