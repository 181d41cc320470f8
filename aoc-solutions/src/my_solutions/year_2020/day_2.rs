use anyhow::{anyhow, bail, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::{debug, trace};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 2, tags = ["2020", "parsing"])]
pub struct Solver;

/// Decoded `L-H c` policy descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    pub first: usize,
    pub second: usize,
    pub letter: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordEntry<'a> {
    pub policy: Policy,
    pub password: &'a str,
}

impl Policy {
    /// Old policy: the letter occurs between `first` and `second` times, inclusive.
    pub fn allows_count(&self, password: &str) -> bool {
        let count = password.bytes().filter(|&b| b == self.letter).count();
        (self.first..=self.second).contains(&count)
    }

    /// New policy: exactly one of the 1-based positions `first` and `second`
    /// holds the letter. A position past the end of the password is an error.
    pub fn allows_position(&self, password: &str) -> anyhow::Result<bool> {
        let at = |position: usize| {
            position
                .checked_sub(1)
                .and_then(|index| password.as_bytes().get(index))
                .map(|&b| b == self.letter)
                .ok_or_else(|| {
                    anyhow!(
                        "position {} is past the end of password {:?}",
                        position,
                        password
                    )
                })
        };
        Ok(at(self.first)? != at(self.second)?)
    }
}

impl<'a> PasswordEntry<'a> {
    /// Parse one `L-H c: password` line.
    pub fn parse(line: &'a str) -> anyhow::Result<Self> {
        let (policy, password) = line
            .split_once(':')
            .ok_or_else(|| anyhow!("missing ':' between policy and password"))?;
        let (range, letter) = policy
            .trim()
            .split_once(' ')
            .ok_or_else(|| anyhow!("missing space between range and letter"))?;
        let (first, second) = range
            .split_once('-')
            .ok_or_else(|| anyhow!("missing '-' in range {:?}", range))?;

        let first: usize = first
            .parse()
            .with_context(|| format!("invalid lower bound {:?}", first))?;
        let second: usize = second
            .parse()
            .with_context(|| format!("invalid upper bound {:?}", second))?;
        if first == 0 {
            bail!("policy positions are 1-based, got 0");
        }
        if first > second {
            bail!("lower bound {} exceeds upper bound {}", first, second);
        }

        let letter = match letter.trim().as_bytes() {
            [b] if b.is_ascii() => *b,
            _ => bail!("policy letter must be one ASCII character, got {:?}", letter),
        };

        Ok(PasswordEntry {
            policy: Policy {
                first,
                second,
                letter,
            },
            password: password.trim(),
        })
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<PasswordEntry<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                PasswordEntry::parse(line).with_context(|| format!("(line {})", line_idx + 1))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let valid = shared
            .iter()
            .filter(|entry| entry.policy.allows_count(entry.password))
            .count();
        debug!(valid, total = shared.len(), "count policy");
        Ok(valid.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let valid = shared
            .iter()
            .try_fold(0usize, |valid, entry| {
                let ok = entry.policy.allows_position(entry.password)?;
                trace!(password = entry.password, ok, "position policy");
                anyhow::Ok(valid + usize::from(ok))
            })
            .map_err(SolveError::failed)?;
        debug!(valid, total = shared.len(), "position policy");
        Ok(valid.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "1-3 a: abcde\n1-3 b: cdefg\n2-9 c: ccccccccc\n";

    fn entry(line: &str) -> PasswordEntry<'_> {
        PasswordEntry::parse(line).unwrap()
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(
            entry("2-9 c: ccccccccc"),
            PasswordEntry {
                policy: Policy {
                    first: 2,
                    second: 9,
                    letter: b'c',
                },
                password: "ccccccccc",
            }
        );
    }

    #[test]
    fn test_count_policy() {
        let e = entry("1-3 a: abcde");
        assert!(e.policy.allows_count(e.password));
        let e = entry("1-3 b: cdefg");
        assert!(!e.policy.allows_count(e.password));
        let e = entry("2-9 c: ccccccccc");
        assert!(e.policy.allows_count(e.password));
    }

    #[test]
    fn test_position_policy() {
        let e = entry("1-3 a: abcde");
        assert!(e.policy.allows_position(e.password).unwrap());
        let e = entry("1-3 b: cdefg");
        assert!(!e.policy.allows_position(e.password).unwrap());
        let e = entry("2-9 c: ccccccccc");
        assert!(!e.policy.allows_position(e.password).unwrap());
    }

    #[test]
    fn test_example_answers() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "2");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "1");
    }

    #[test]
    fn test_position_past_end_aborts_part_2() {
        let mut shared = Solver::parse("1-30 a: abc").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "1");
        assert!(matches!(
            Solver::solve_part(&mut shared, 2),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_malformed_lines_rejected() {
        for line in ["1-3 a abcde", "1 a: abcde", "x-3 a: abcde", "0-3 a: abcde", "4-3 a: abcde", "1-3 ab: abcde"] {
            let err = Solver::parse(line).unwrap_err();
            assert!(err.to_string().contains("line 1"), "{}: {}", line, err);
        }
    }
}
