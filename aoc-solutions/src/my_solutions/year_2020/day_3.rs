use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::debug;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 3, tags = ["2020", "grid"])]
pub struct Solver;

const PART_1_SLOPE: Slope = Slope { right: 3, down: 1 };

const PART_2_SLOPES: [Slope; 5] = [
    Slope { right: 1, down: 1 },
    Slope { right: 3, down: 1 },
    Slope { right: 5, down: 1 },
    Slope { right: 7, down: 1 },
    Slope { right: 1, down: 2 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

/// Step vector: `right` columns and `down` rows per move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slope {
    pub right: usize,
    pub down: usize,
}

/// Map of open squares and trees that repeats endlessly to the right
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forest {
    width: usize,
    trees: Vec<bool>,
}

impl Forest {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.trees.len() / self.width
    }

    /// Whether the cell at column `x` (wrapping) and row `y` holds a tree.
    /// Rows below the map are open.
    pub fn is_tree(&self, x: usize, y: usize) -> bool {
        y < self.height() && self.trees[y * self.width + x % self.width]
    }
}

/// Count the trees visited when sliding from `start` along `slope` until
/// falling off the bottom of the map. The start cell counts.
///
/// # Panics
///
/// Panics if `slope.down` is zero.
pub fn count_trees(forest: &Forest, start: Position, slope: Slope) -> usize {
    (start.y..forest.height())
        .step_by(slope.down)
        .enumerate()
        .filter(|&(step, y)| forest.is_tree(start.x + step * slope.right, y))
        .count()
}

impl AocParser for Solver {
    type SharedData<'a> = Forest;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_forest(input).map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }
}

fn parse_forest(input: &str) -> anyhow::Result<Forest> {
    let mut width = None;
    let mut trees = Vec::new();

    for (line_idx, line) in input.lines().map(str::trim).enumerate() {
        if line.is_empty() {
            continue;
        }
        let expected = *width.get_or_insert(line.len());
        if line.len() != expected {
            bail!(
                "(line {}) row has width {}, expected {}",
                line_idx + 1,
                line.len(),
                expected
            );
        }
        for (col, b) in line.bytes().enumerate() {
            trees.push(match b {
                b'#' => true,
                b'.' => false,
                other => bail!(
                    "(line {}, column {}) unexpected character {:?}",
                    line_idx + 1,
                    col + 1,
                    other as char
                ),
            });
        }
    }

    let width = width.ok_or_else(|| anyhow!("map has no rows"))?;
    Ok(Forest { width, trees })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let trees = count_trees(shared, Position { x: 0, y: 0 }, PART_1_SLOPE);
        Ok(trees.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let forest: &Forest = shared;
        let product: usize = PART_2_SLOPES
            .iter()
            .map(|&slope| {
                let trees = count_trees(forest, Position { x: 0, y: 0 }, slope);
                debug!(right = slope.right, down = slope.down, trees, "slope");
                trees
            })
            .product();
        Ok(product.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
..##.......
#...#...#..
.#....#..#.
..#.#...#.#
.#...##..#.
..#.##.....
.#.#.#....#
.#........#
#.##...#...
#...##....#
.#..#...#.#
";

    #[test]
    fn test_parse_dimensions() {
        let forest = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(forest.width(), 11);
        assert_eq!(forest.height(), 11);
        assert!(forest.is_tree(2, 0));
        assert!(forest.is_tree(13, 0), "columns repeat to the right");
        assert!(!forest.is_tree(0, 11));
    }

    #[test]
    fn test_slope_counts() {
        let forest = Solver::parse(EXAMPLE).unwrap();
        let origin = Position { x: 0, y: 0 };
        let counts: Vec<_> = PART_2_SLOPES
            .iter()
            .map(|&slope| count_trees(&forest, origin, slope))
            .collect();
        assert_eq!(counts, vec![2, 7, 3, 4, 2]);
    }

    #[test]
    fn test_count_is_repeatable() {
        let forest = Solver::parse(EXAMPLE).unwrap();
        let origin = Position { x: 0, y: 0 };
        assert_eq!(count_trees(&forest, origin, PART_1_SLOPE), 7);
        assert_eq!(count_trees(&forest, origin, PART_1_SLOPE), 7);
    }

    #[test]
    fn test_example_answers() {
        let mut forest = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut forest, 1).unwrap(), "7");
        assert_eq!(Solver::solve_part(&mut forest, 2).unwrap(), "336");
    }

    #[test]
    fn test_malformed_maps_rejected() {
        assert!(Solver::parse("..#\n.#").is_err());
        assert!(Solver::parse("..#\n.x.").is_err());
        assert!(Solver::parse("\n\n").is_err());
    }
}
