//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::input::InputStore;
use aoc_solver::{DynSolver, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;
use tracing::{debug, warn};

/// Outcome of one requested part
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ArcExecutorError>,
    pub solve_duration: TimeDelta,
    /// Set on the first result of a parsed day only, so totals count each parse once
    pub parse_duration: Option<TimeDelta>,
}

/// One registered day and the parts selected from it
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs selected days one after another on the calling thread
pub struct Executor {
    registry: SolverRegistry,
    input: InputStore,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            input: config.input.clone(),
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    /// Selected days in ascending (year, day) order
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .storage()
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Read, parse and solve every requested part of one day
    ///
    /// The input is parsed once and the parts run in ascending order on the
    /// same parsed data. A missing input or a parse failure yields the same
    /// error for each requested part.
    pub fn run_day(&self, work: &WorkItem) -> Vec<SolverResult> {
        let (year, day) = (work.year, work.day);

        let input = match self.input.read(year, day) {
            Ok(input) => input,
            Err(source) => {
                warn!(year, day, %source, "input unavailable");
                return failures(work, ExecutorError::Input { year, day, source }.into());
            }
        };

        let mut solver = match self.registry.create_solver(year, day, &input) {
            Ok(solver) => solver,
            Err(e) => {
                warn!(year, day, error = %e, "could not prepare solver");
                return failures(work, ExecutorError::Solver(e).into());
            }
        };
        let parsed = solver.parse_timing().duration();
        debug!(year, day, parse = %parsed, "parsed input");

        let mut parse_duration = Some(parsed);
        work.parts
            .clone()
            .map(|part| solve_part(year, day, part, &mut *solver, parse_duration.take()))
            .collect()
    }
}

fn failures(work: &WorkItem, error: ArcExecutorError) -> Vec<SolverResult> {
    work.parts
        .clone()
        .map(|part| SolverResult {
            year: work.year,
            day: work.day,
            part,
            answer: Err(error.clone()),
            solve_duration: TimeDelta::zero(),
            parse_duration: None,
        })
        .collect()
}

fn solve_part(
    year: u16,
    day: u8,
    part: u8,
    solver: &mut dyn DynSolver,
    parse_duration: Option<TimeDelta>,
) -> SolverResult {
    let (answer, solve_duration) = match solver.solve(part) {
        Ok(result) => {
            let duration = result.timing.duration();
            debug!(year, day, part, solve = %duration, "solved");
            (Ok(result.answer), duration)
        }
        Err(e) => {
            warn!(year, day, part, error = %e, "solve failed");
            let error: ArcExecutorError = ExecutorError::Solver(e.into()).into();
            (Err(error), TimeDelta::zero())
        }
    };

    SolverResult {
        year,
        day,
        part,
        answer,
        solve_duration,
        parse_duration,
    }
}
