use std::cmp::Ordering;

use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::debug;

const TARGET: i64 = 2020;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 1, tags = ["2020", "search"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                line.trim()
                    .parse::<i64>()
                    .with_context(|| format!("(line {}) expected an integer, got {:?}", line_idx + 1, line))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.sort_unstable();
        let (a, b) = find_pair(shared, TARGET)
            .ok_or_else(|| SolveError::failed(format!("no two entries sum to {}", TARGET)))?;
        debug!(a, b, "found pair");
        a.checked_mul(b)
            .map(|product| product.to_string())
            .ok_or_else(|| SolveError::failed("product overflows i64"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.sort_unstable();
        let (a, b, c) = find_triple(shared, TARGET)
            .ok_or_else(|| SolveError::failed(format!("no three entries sum to {}", TARGET)))?;
        debug!(a, b, c, "found triple");
        a.checked_mul(b)
            .and_then(|ab| ab.checked_mul(c))
            .map(|product| product.to_string())
            .ok_or_else(|| SolveError::failed("product overflows i64"))
    }
}

/// Two entries at distinct positions of an ascending slice summing to `target`
///
/// A sum that overflows `i64` cannot equal `target` and is stepped past in
/// the direction of its sign.
fn find_pair(sorted: &[i64], target: i64) -> Option<(i64, i64)> {
    let (mut lo, mut hi) = (0, sorted.len().checked_sub(1)?);
    while lo < hi {
        let order = match sorted[lo].checked_add(sorted[hi]) {
            Some(sum) => sum.cmp(&target),
            None if sorted[lo] > 0 => Ordering::Greater,
            None => Ordering::Less,
        };
        match order {
            Ordering::Less => lo += 1,
            Ordering::Greater => hi -= 1,
            Ordering::Equal => return Some((sorted[lo], sorted[hi])),
        }
    }
    None
}

fn find_triple(sorted: &[i64], target: i64) -> Option<(i64, i64, i64)> {
    sorted.iter().enumerate().find_map(|(i, &first)| {
        let rest = target.checked_sub(first)?;
        find_pair(&sorted[i + 1..], rest).map(|(second, third)| (first, second, third))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "1721\n979\n366\n299\n675\n1456\n";

    #[test]
    fn test_example_part_1() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "514579");
    }

    #[test]
    fn test_example_part_2() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "241861950");
    }

    #[test]
    fn test_entry_is_not_paired_with_itself() {
        // 1010 + 1010 would only work by reusing the single 1010 entry
        let mut shared = Solver::parse("1010\n5\n7").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::SolveFailed(_))
        ));

        let mut shared = Solver::parse("1010\n5\n1010").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "1020100");
    }

    #[test]
    fn test_find_pair_edge_cases() {
        assert_eq!(find_pair(&[], 2020), None);
        assert_eq!(find_pair(&[2020], 2020), None);
        assert_eq!(find_pair(&[299, 1721], 2020), Some((299, 1721)));
    }

    #[test]
    fn test_extreme_entries_fail_without_panicking() {
        // sum of the two entries does not fit in i64
        let mut shared = Solver::parse("9223372036854775807\n9223372036854775806").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::SolveFailed(_))
        ));
        let mut shared = Solver::parse("9223372036854775807\n9223372036854775806").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 2),
            Err(SolveError::SolveFailed(_))
        ));

        // entries sum to 2020 but their product does not fit
        let mut shared = Solver::parse("-9000000000000000000\n9000000000000002020").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::SolveFailed(e)) if e.to_string().contains("overflow")
        ));
    }

    #[test]
    fn test_find_triple_skips_unrepresentable_remainder() {
        // 2020 - i64::MIN overflows, so that entry cannot start a triple
        assert_eq!(find_triple(&[i64::MIN, 1, 2, 2017], 2020), Some((1, 2, 2017)));
    }

    #[test]
    fn test_parse_rejects_non_numeric_line() {
        let err = Solver::parse("1721\nabc\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{}", err);
    }
}
