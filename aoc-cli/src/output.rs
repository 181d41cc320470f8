//! Printing answers and the closing summary

use crate::executor::SolverResult;
use chrono::TimeDelta;

/// Totals over a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub solved: usize,
    pub failed: usize,
    /// Parse time of every parsed day, including days whose parts failed
    pub parse_time: TimeDelta,
    pub solve_time: TimeDelta,
}

impl Summary {
    pub fn of(results: &[SolverResult]) -> Self {
        let solved = results.iter().filter(|r| r.answer.is_ok()).count();
        Self {
            solved,
            failed: results.len() - solved,
            parse_time: results.iter().filter_map(|r| r.parse_duration).sum(),
            solve_time: results.iter().map(|r| r.solve_duration).sum(),
        }
    }
}

/// Answers go to stdout, failures to stderr
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn print_result(&self, result: &SolverResult) {
        let label = format!("{}/{:02} Part {}", result.year, result.day, result.part);
        match (&result.answer, self.quiet) {
            (Ok(answer), true) => println!("{}", answer),
            (Ok(answer), false) => println!("{}: {} ({})", label, answer, timings(result)),
            (Err(e), true) => eprintln!("{}: {}", label, e),
            (Err(e), false) => eprintln!("{}: failed, {}", label, e),
        }
    }

    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }
        let summary = Summary::of(results);
        println!();
        println!("{} solved, {} failed", summary.solved, summary.failed);
        println!(
            "parse {}, solve {}",
            format_duration(summary.parse_time),
            format_duration(summary.solve_time)
        );
    }
}

fn timings(result: &SolverResult) -> String {
    let solve = format!("solve {}", format_duration(result.solve_duration));
    match result.parse_duration {
        Some(parse) => format!("parse {}, {}", format_duration(parse), solve),
        None => solve,
    }
}

/// Render with the coarsest unit that keeps the value at least 1
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };
    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    match micros {
        0..1_000 => format!("{}µs", micros),
        1_000..1_000_000 => format!("{:.2}ms", micros as f64 / 1e3),
        _ => format!("{:.2}s", micros as f64 / 1e6),
    }
}
