//! Passport processing: blank-line separated `key:value` records checked
//! first for field presence, then against the per-field [`rules`].

pub mod rules;

use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::{debug, trace};

use rules::{Field, FieldRule, RuleError, RULES};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 4, tags = ["2020", "parsing", "validation"])]
pub struct Solver;

/// One decoded record; values borrow from the input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Passport<'a> {
    values: [Option<&'a str>; Field::COUNT],
}

impl<'a> Passport<'a> {
    /// Decode whitespace-separated `key:value` tokens.
    ///
    /// Unknown keys are ignored. When a key repeats, the last value wins.
    pub fn decode<I>(tokens: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut passport = Passport::default();
        for token in tokens {
            let (key, value) = token
                .split_once(':')
                .ok_or_else(|| anyhow!("token {:?} is missing ':'", token))?;
            match Field::from_key(key) {
                Some(field) => {
                    if let Some(previous) = passport.values[field.index()].replace(value) {
                        debug!(%field, previous, value, "duplicate key, keeping last value");
                    }
                }
                None => trace!(key, "ignoring unknown key"),
            }
        }
        Ok(passport)
    }

    pub fn get(&self, field: Field) -> Option<&'a str> {
        self.values[field.index()]
    }

    /// Every field except `cid` is present.
    pub fn has_required_fields(&self) -> bool {
        Field::ALL
            .into_iter()
            .filter(|field| field.is_required())
            .all(|field| self.get(field).is_some())
    }

    /// Apply `rules` in order, stopping at the first one that fails.
    /// A missing field fails its rule.
    pub fn validate(&self, rules: &[&dyn FieldRule]) -> Result<bool, RuleError> {
        for rule in rules {
            let Some(value) = self.get(rule.field()) else {
                return Ok(false);
            };
            if !rule.validate(value)? {
                trace!(field = %rule.field(), value, "rule rejected value");
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Group non-blank lines into records, remembering each record's first line number.
fn split_records(input: &str) -> Vec<(usize, Vec<&str>)> {
    let mut records = Vec::new();
    let mut current: Option<(usize, Vec<&str>)> = None;

    for (line_idx, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            records.extend(current.take());
        } else {
            current
                .get_or_insert_with(|| (line_idx + 1, Vec::new()))
                .1
                .push(line);
        }
    }
    records.extend(current);
    records
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Passport<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        split_records(input)
            .into_iter()
            .map(|(first_line, lines)| {
                Passport::decode(lines.into_iter().flat_map(str::split_whitespace))
                    .with_context(|| format!("(record starting at line {})", first_line))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let valid = shared.iter().filter(|p| p.has_required_fields()).count();
        debug!(valid, total = shared.len(), "presence check");
        Ok(valid.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let valid = shared
            .iter()
            .enumerate()
            .filter(|(index, passport)| match passport.validate(RULES) {
                Ok(valid) => valid,
                Err(error) => {
                    debug!(record = index + 1, %error, "undecodable value, record invalid");
                    false
                }
            })
            .count();
        debug!(valid, total = shared.len(), "rule check");
        Ok(valid.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const PRESENCE_EXAMPLE: &str = "\
ecl:gry pid:860033327 eyr:2020 hcl:#fffffd
byr:1937 iyr:2017 cid:147 hgt:183cm

iyr:2013 ecl:amb cid:350 eyr:2023 pid:028048884
hcl:#cfa07d byr:1929

hcl:#ae17e1 iyr:2013
eyr:2024
ecl:brn pid:760753108 byr:1931
hgt:179cm

hcl:#cfa07d eyr:2025 pid:166559648
iyr:2011 ecl:brn hgt:59in
";

    const INVALID_EXAMPLE: &str = "\
eyr:1972 cid:100
hcl:#18171d ecl:amb hgt:170 pid:186cm iyr:2018 byr:1926

iyr:2019
hcl:#602927 eyr:1967 hgt:170cm
ecl:grn pid:012533040 byr:1946

hcl:dab227 iyr:2012
ecl:brn hgt:182cm pid:021572410 eyr:2020 byr:1992 cid:277

hgt:59cm ecl:zzz
eyr:2038 hcl:74454a iyr:2023
pid:3556412378 byr:2007
";

    const VALID_EXAMPLE: &str = "\
pid:087499704 hgt:74in ecl:grn iyr:2012 eyr:2030 byr:1980
hcl:#623a2f

eyr:2029 ecl:blu cid:129 byr:1989
iyr:2014 pid:896056539 hcl:#a97842 hgt:165cm

hcl:#888785
hgt:164cm byr:2001 iyr:2015 cid:88
pid:545766238 ecl:hzl
eyr:2022

iyr:2010 hgt:158cm hcl:#b6652a ecl:blu byr:1944 eyr:2021 pid:093154719
";

    fn decode(record: &str) -> Passport<'_> {
        Passport::decode(record.split_whitespace()).unwrap()
    }

    #[test]
    fn test_presence_example() {
        let mut shared = Solver::parse(PRESENCE_EXAMPLE).unwrap();
        assert_eq!(shared.len(), 4);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "2");
    }

    #[test]
    fn test_missing_cid_only_is_present() {
        let passport = decode("hcl:#ae17e1 iyr:2013 eyr:2024 ecl:brn pid:760753108 byr:1931 hgt:179cm");
        assert!(passport.has_required_fields());
    }

    #[test]
    fn test_missing_byr_is_not_present() {
        let passport = decode("hcl:#cfa07d eyr:2025 pid:166559648 iyr:2011 ecl:brn hgt:59in cid:1");
        assert!(!passport.has_required_fields());
    }

    #[test]
    fn test_rule_examples() {
        let mut invalid = Solver::parse(INVALID_EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut invalid, 2).unwrap(), "0");

        let mut valid = Solver::parse(VALID_EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut valid, 2).unwrap(), "4");
    }

    #[test]
    fn test_undecodable_value_counts_as_invalid() {
        let passport = decode("byr:19x0 iyr:2015 eyr:2025 hgt:170cm hcl:#123abc ecl:brn pid:000000001");
        assert!(passport.validate(RULES).is_err());

        let mut shared = vec![passport];
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "0");
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let passport = decode("foo:bar byr:1990");
        assert_eq!(passport.get(Field::BirthYear), Some("1990"));
        assert_eq!(passport, decode("byr:1990"));
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let passport = decode("byr:1900 byr:1990");
        assert_eq!(passport.get(Field::BirthYear), Some("1990"));
    }

    #[test]
    fn test_token_without_delimiter_aborts() {
        let err = Solver::parse("byr:1990\n\nbyr 1990\n").unwrap_err();
        assert!(err.to_string().contains("line 3"), "{}", err);
    }

    #[test]
    fn test_records_split_on_repeated_blank_lines() {
        let shared = Solver::parse("byr:1990\n\n\n  \niyr:2015\n").unwrap();
        assert_eq!(shared.len(), 2);
    }
}
