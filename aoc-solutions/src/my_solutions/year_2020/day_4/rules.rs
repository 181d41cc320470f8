//! Per-field validation rules for passports

use std::fmt;

use thiserror::Error;

/// The closed set of passport fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    BirthYear,
    IssueYear,
    ExpirationYear,
    Height,
    HairColor,
    EyeColor,
    PassportId,
    CountryId,
}

impl Field {
    pub const COUNT: usize = 8;

    pub const ALL: [Field; Field::COUNT] = [
        Field::BirthYear,
        Field::IssueYear,
        Field::ExpirationYear,
        Field::Height,
        Field::HairColor,
        Field::EyeColor,
        Field::PassportId,
        Field::CountryId,
    ];

    /// The three-letter key used in records
    pub fn key(self) -> &'static str {
        match self {
            Field::BirthYear => "byr",
            Field::IssueYear => "iyr",
            Field::ExpirationYear => "eyr",
            Field::Height => "hgt",
            Field::HairColor => "hcl",
            Field::EyeColor => "ecl",
            Field::PassportId => "pid",
            Field::CountryId => "cid",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.key() == key)
    }

    /// `cid` is the only optional field.
    pub fn is_required(self) -> bool {
        self != Field::CountryId
    }

    pub(super) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A value that a rule cannot decode as its expected type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("{field}: {value:?} is not a number")]
    NotNumeric { field: Field, value: String },
}

/// One independent check over the value of a single field
///
/// `Ok(false)` means the value decoded but is out of policy; `Err` means it
/// could not be decoded at all.
pub trait FieldRule: Sync {
    fn field(&self) -> Field;

    fn validate(&self, value: &str) -> Result<bool, RuleError>;
}

fn digits(field: Field, value: &str) -> Result<u32, RuleError> {
    let not_numeric = || RuleError::NotNumeric {
        field,
        value: value.to_string(),
    };
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_numeric());
    }
    value.parse().map_err(|_| not_numeric())
}

/// Four-digit year within an inclusive range
#[derive(Debug, Clone, Copy)]
pub struct YearRange {
    pub field: Field,
    pub min: u32,
    pub max: u32,
}

impl FieldRule for YearRange {
    fn field(&self) -> Field {
        self.field
    }

    fn validate(&self, value: &str) -> Result<bool, RuleError> {
        let year = digits(self.field, value)?;
        Ok(value.len() == 4 && (self.min..=self.max).contains(&year))
    }
}

/// Number followed by a unit; each unit has its own inclusive range
#[derive(Debug, Clone, Copy)]
pub struct Height {
    pub units: &'static [(&'static str, u32, u32)],
}

impl FieldRule for Height {
    fn field(&self) -> Field {
        Field::Height
    }

    fn validate(&self, value: &str) -> Result<bool, RuleError> {
        let split = value
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(value.len());
        let (number, unit) = value.split_at(split);
        let number = digits(Field::Height, number)?;

        Ok(self
            .units
            .iter()
            .find(|(name, _, _)| *name == unit)
            .is_some_and(|&(_, min, max)| (min..=max).contains(&number)))
    }
}

/// `#` followed by exactly six lowercase hex digits
#[derive(Debug, Clone, Copy)]
pub struct HexColor {
    pub field: Field,
}

impl FieldRule for HexColor {
    fn field(&self) -> Field {
        self.field
    }

    fn validate(&self, value: &str) -> Result<bool, RuleError> {
        Ok(value.strip_prefix('#').is_some_and(|hex| {
            hex.len() == 6 && hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
        }))
    }
}

/// Value must be one of a fixed list
#[derive(Debug, Clone, Copy)]
pub struct OneOf {
    pub field: Field,
    pub allowed: &'static [&'static str],
}

impl FieldRule for OneOf {
    fn field(&self) -> Field {
        self.field
    }

    fn validate(&self, value: &str) -> Result<bool, RuleError> {
        Ok(self.allowed.contains(&value))
    }
}

/// Fixed-length string of ASCII digits; leading zeros are kept
#[derive(Debug, Clone, Copy)]
pub struct DigitString {
    pub field: Field,
    pub len: usize,
}

impl FieldRule for DigitString {
    fn field(&self) -> Field {
        self.field
    }

    fn validate(&self, value: &str) -> Result<bool, RuleError> {
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RuleError::NotNumeric {
                field: self.field,
                value: value.to_string(),
            });
        }
        Ok(value.len() == self.len)
    }
}

/// The full rule set, applied in this order
pub const RULES: &[&dyn FieldRule] = &[
    &YearRange {
        field: Field::BirthYear,
        min: 1920,
        max: 2002,
    },
    &YearRange {
        field: Field::IssueYear,
        min: 2010,
        max: 2020,
    },
    &YearRange {
        field: Field::ExpirationYear,
        min: 2020,
        max: 2030,
    },
    &Height {
        units: &[("cm", 150, 193), ("in", 59, 76)],
    },
    &HexColor {
        field: Field::HairColor,
    },
    &OneOf {
        field: Field::EyeColor,
        allowed: &["amb", "blu", "brn", "gry", "grn", "hzl", "oth"],
    },
    &DigitString {
        field: Field::PassportId,
        len: 9,
    },
];
