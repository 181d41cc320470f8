use anyhow::{bail, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::{debug, warn};

pub const ROWS: usize = 128;
pub const COLUMNS: usize = 8;

const ROW_CODE_LEN: usize = 7;
const COLUMN_CODE_LEN: usize = 3;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 5, tags = ["2020", "binary"])]
pub struct Solver;

/// Ten-character boarding pass split into its row and column codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardingPass<'a> {
    row_code: &'a str,
    column_code: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Seat {
    pub row: usize,
    pub column: usize,
}

impl Seat {
    pub fn id(self) -> usize {
        self.row * COLUMNS + self.column
    }

    pub fn from_id(id: usize) -> Self {
        Seat {
            row: id / COLUMNS,
            column: id % COLUMNS,
        }
    }
}

impl<'a> BoardingPass<'a> {
    /// Split a pass into `F`/`B` row code and `L`/`R` column code.
    pub fn parse(line: &'a str) -> anyhow::Result<Self> {
        if line.len() != ROW_CODE_LEN + COLUMN_CODE_LEN || !line.is_ascii() {
            bail!(
                "boarding pass {:?} must be {} ASCII characters",
                line,
                ROW_CODE_LEN + COLUMN_CODE_LEN
            );
        }
        let (row_code, column_code) = line.split_at(ROW_CODE_LEN);
        if let Some(b) = row_code.bytes().find(|b| !matches!(b, b'F' | b'B')) {
            bail!("row code {:?} contains {:?}, expected F or B", row_code, b as char);
        }
        if let Some(b) = column_code.bytes().find(|b| !matches!(b, b'L' | b'R')) {
            bail!("column code {:?} contains {:?}, expected L or R", column_code, b as char);
        }
        Ok(BoardingPass {
            row_code,
            column_code,
        })
    }

    pub fn seat(&self) -> Seat {
        Seat {
            row: decode_partition(self.row_code, b'B'),
            column: decode_partition(self.column_code, b'R'),
        }
    }
}

/// Each character halves the remaining range; `upper` keeps the upper half.
/// That is a binary number with `upper` as the one bit.
fn decode_partition(code: &str, upper: u8) -> usize {
    code.bytes()
        .fold(0, |acc, b| (acc << 1) | usize::from(b == upper))
}

/// Occupancy of every seat on the plane
pub struct SeatMap {
    occupied: [[bool; COLUMNS]; ROWS],
}

impl SeatMap {
    pub fn new() -> Self {
        SeatMap {
            occupied: [[false; COLUMNS]; ROWS],
        }
    }

    /// Mark a seat as taken; returns false if it already was.
    pub fn take(&mut self, seat: Seat) -> bool {
        !std::mem::replace(&mut self.occupied[seat.row][seat.column], true)
    }

    pub fn is_taken(&self, id: usize) -> bool {
        let seat = Seat::from_id(id);
        self.occupied
            .get(seat.row)
            .is_some_and(|row| row[seat.column])
    }

    /// First empty seat whose neighbouring IDs are both taken
    pub fn find_gap(&self) -> Option<Seat> {
        (1..ROWS * COLUMNS - 1)
            .find(|&id| !self.is_taken(id) && self.is_taken(id - 1) && self.is_taken(id + 1))
            .map(Seat::from_id)
    }
}

impl Default for SeatMap {
    fn default() -> Self {
        Self::new()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<BoardingPass<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                BoardingPass::parse(line.trim()).with_context(|| format!("(line {})", line_idx + 1))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .map(|pass| pass.seat().id())
            .max()
            .map(|id| id.to_string())
            .ok_or_else(|| SolveError::failed("no boarding passes"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut seats = SeatMap::new();
        for pass in shared.iter() {
            let seat = pass.seat();
            if !seats.take(seat) {
                warn!(row = seat.row, column = seat.column, "seat appears on more than one pass");
            }
        }

        let seat = seats
            .find_gap()
            .ok_or_else(|| SolveError::failed("no empty seat between two taken seats"))?;
        debug!(row = seat.row, column = seat.column, "found gap");
        Ok(seat.id().to_string())
    }
}
