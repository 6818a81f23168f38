use rand::Rng;
use tracing::{debug, trace};

use crate::error::MazeError;
use crate::grid::{Dir, Grid, Pos};
use crate::shuffle::{NeighborOrder, RandomOrder};

/// One pending cell on the backtracking stack: the directions it will try,
/// already permuted, and how many of them it has consumed.
struct Frame {
    pos: Pos,
    dirs: [Dir; 4],
    next: usize,
}

impl Frame {
    fn enter(grid: &mut Grid, pos: Pos, order: &mut impl NeighborOrder) -> Self {
        grid.mark_visited(pos.row, pos.col);
        let mut dirs = Dir::ALL;
        order.order(&mut dirs);
        Self { pos, dirs, next: 0 }
    }
}

/// Depth-first carve from `start`, opening exactly one wall toward every cell
/// it reaches for the first time. Returns how many cells were newly visited.
///
/// Walks neighbors in the order `order` hands back for each cell, and
/// finishes a cell's remaining candidates only after everything reachable
/// through the one it just entered is done. That is the recursive
/// backtracker, unrolled onto a heap stack so grid size never limits call
/// depth.
pub fn carve(grid: &mut Grid, start: Pos, order: &mut impl NeighborOrder) -> usize {
    if grid.is_visited(start.row, start.col) {
        return 0;
    }
    debug!("carving {}x{} maze from {start:?}", grid.rows(), grid.cols());

    let (rows, cols) = (grid.rows(), grid.cols());
    let mut stack = vec![Frame::enter(grid, start, order)];
    let mut visited = 1;

    while let Some(frame) = stack.last_mut() {
        if frame.next == frame.dirs.len() {
            stack.pop();
            continue;
        }
        let dir = frame.dirs[frame.next];
        frame.next += 1;
        let pos = frame.pos;

        let Some(next) = dir.neighbor(pos, rows, cols) else {
            continue;
        };
        if grid.is_visited(next.row, next.col) {
            continue;
        }

        grid.open_toward(pos, dir);
        trace!("opened {dir:?} wall of {pos:?}");
        stack.push(Frame::enter(grid, next, order));
        visited += 1;
    }

    debug!("carve finished, {visited} cells visited");
    visited
}

pub fn random_start(rows: usize, cols: usize, rng: &mut impl Rng) -> Pos {
    Pos::new(rng.gen_range(0..rows), rng.gen_range(0..cols))
}

/// Allocates a `rows` x `cols` grid and carves a perfect maze into it from a
/// random start cell.
pub fn generate<R: Rng>(rows: usize, cols: usize, mut rng: R) -> Result<Grid, MazeError> {
    let mut grid = Grid::new(rows, cols)?;
    let start = random_start(rows, cols, &mut rng);
    carve(&mut grid, start, &mut RandomOrder::new(rng));
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shuffle::{Fixed, Identity};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// The recursive form, kept here to check the stack version against.
    fn carve_recursive(grid: &mut Grid, pos: Pos, order: &mut impl NeighborOrder) {
        if grid.is_visited(pos.row, pos.col) {
            return;
        }
        grid.mark_visited(pos.row, pos.col);
        let mut dirs = Dir::ALL;
        order.order(&mut dirs);
        for dir in dirs {
            let Some(next) = dir.neighbor(pos, grid.rows(), grid.cols()) else {
                continue;
            };
            if grid.is_visited(next.row, next.col) {
                continue;
            }
            grid.open_toward(pos, dir);
            carve_recursive(grid, next, order);
        }
    }

    #[test]
    fn two_by_two_fixed_order() {
        let mut grid = Grid::new(2, 2).unwrap();
        let visited = carve(&mut grid, Pos::new(0, 0), &mut Identity);

        assert_eq!(visited, 4);
        assert!(grid.all_visited());
        assert_eq!(grid.verticals(), &[vec![true], vec![true]]);
        assert_eq!(grid.horizontals(), &[vec![false, true]]);
        assert_eq!(grid.open_wall_count(), 3);
    }

    #[test]
    fn one_by_one_is_a_single_visit() {
        let mut grid = Grid::new(1, 1).unwrap();
        assert_eq!(carve(&mut grid, Pos::new(0, 0), &mut Identity), 1);
        assert!(grid.all_visited());
        assert_eq!(grid.open_wall_count(), 0);
    }

    #[test]
    fn single_row_is_a_corridor() {
        let mut grid = Grid::new(1, 6).unwrap();
        carve(&mut grid, Pos::new(0, 3), &mut RandomOrder::new(StdRng::seed_from_u64(5)));
        assert!(grid.verticals()[0].iter().all(|&open| open));
        assert!(grid.horizontals().is_empty());
    }

    #[test]
    fn recarve_is_a_no_op() {
        let mut grid = generate(6, 9, StdRng::seed_from_u64(11)).unwrap();
        let before = grid.clone();
        let visited = carve(&mut grid, Pos::new(2, 2), &mut Identity);
        assert_eq!(visited, 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn identity_order_is_deterministic() {
        let mut a = Grid::new(7, 5).unwrap();
        let mut b = Grid::new(7, 5).unwrap();
        carve(&mut a, Pos::new(3, 1), &mut Identity);
        carve(&mut b, Pos::new(3, 1), &mut Identity);
        assert_eq!(a, b);
    }

    #[test]
    fn matches_recursive_backtracker() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let rows = rng.gen_range(1..12);
            let cols = rng.gen_range(1..12);
            let start = random_start(rows, cols, &mut rng);

            let mut stacked = Grid::new(rows, cols).unwrap();
            let mut recursive = Grid::new(rows, cols).unwrap();
            carve(&mut stacked, start, &mut RandomOrder::new(StdRng::seed_from_u64(seed)));
            carve_recursive(
                &mut recursive,
                start,
                &mut RandomOrder::new(StdRng::seed_from_u64(seed)),
            );
            assert_eq!(stacked, recursive, "seed {seed}: {rows}x{cols} from {start:?}");
        }
    }

    #[test]
    fn fixed_order_still_spans() {
        let mut grid = Grid::new(5, 5).unwrap();
        carve(
            &mut grid,
            Pos::new(4, 4),
            &mut Fixed([Dir::Left, Dir::Up, Dir::Right, Dir::Down]),
        );
        assert!(grid.all_visited());
        assert_eq!(grid.open_wall_count(), 24);
    }

    #[test]
    fn large_grid_does_not_overflow() {
        let grid = generate(300, 300, StdRng::seed_from_u64(99)).unwrap();
        assert!(grid.all_visited());
        assert_eq!(grid.open_wall_count(), 300 * 300 - 1);
    }

    #[test]
    fn generate_rejects_zero_dimensions() {
        assert!(matches!(
            generate(0, 0, StdRng::seed_from_u64(0)),
            Err(MazeError::InvalidDimensions(0, 0))
        ));
    }
}
