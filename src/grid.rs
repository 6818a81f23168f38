use crate::error::MazeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

impl Dir {
    /// Candidate order used when a cell builds its neighbor list.
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

    /// `(row, col)` offset; rows grow downward, columns grow rightward.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Right => (0, 1),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
        }
    }

    /// The neighboring cell in this direction, or `None` if it falls outside
    /// a `rows` x `cols` grid.
    pub fn neighbor(self, pos: Pos, rows: usize, cols: usize) -> Option<Pos> {
        let (dr, dc) = self.delta();
        let nr = pos.row as isize + dr;
        let nc = pos.col as isize + dc;
        if nr < 0 || nc < 0 {
            return None;
        }
        let nr = nr as usize;
        let nc = nc as usize;
        if nr >= rows || nc >= cols {
            return None;
        }
        Some(Pos::new(nr, nc))
    }
}

/// Visitation flags plus the two passage matrices of an R x C maze.
///
/// `verticals[r][c]` is the wall between `(r, c)` and `(r, c + 1)`;
/// `horizontals[r][c]` is the wall between `(r, c)` and `(r + 1, c)`.
/// `false` means the wall is standing. Indexing outside the matrices panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    visited: Vec<Vec<bool>>,
    verticals: Vec<Vec<bool>>,
    horizontals: Vec<Vec<bool>>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimensions(rows, cols));
        }
        Ok(Self {
            rows,
            cols,
            visited: vec![vec![false; cols]; rows],
            verticals: vec![vec![false; cols - 1]; rows],
            horizontals: vec![vec![false; cols]; rows - 1],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_visited(&self, row: usize, col: usize) -> bool {
        self.visited[row][col]
    }

    pub fn mark_visited(&mut self, row: usize, col: usize) {
        self.visited[row][col] = true;
    }

    pub fn open_vertical(&mut self, row: usize, col: usize) {
        self.verticals[row][col] = true;
    }

    pub fn open_horizontal(&mut self, row: usize, col: usize) {
        self.horizontals[row][col] = true;
    }

    pub fn is_vertical_open(&self, row: usize, col: usize) -> bool {
        self.verticals[row][col]
    }

    pub fn is_horizontal_open(&self, row: usize, col: usize) -> bool {
        self.horizontals[row][col]
    }

    pub fn verticals(&self) -> &[Vec<bool>] {
        &self.verticals
    }

    pub fn horizontals(&self) -> &[Vec<bool>] {
        &self.horizontals
    }

    pub fn all_visited(&self) -> bool {
        self.visited.iter().flatten().all(|&v| v)
    }

    pub fn open_wall_count(&self) -> usize {
        self.verticals
            .iter()
            .chain(self.horizontals.iter())
            .flat_map(|row| row.iter())
            .filter(|&&open| open)
            .count()
    }

    /// Removes the wall on the `dir` side of `pos`. The neighbor must exist.
    pub fn open_toward(&mut self, pos: Pos, dir: Dir) {
        match dir {
            Dir::Left => self.open_vertical(pos.row, pos.col - 1),
            Dir::Right => self.open_vertical(pos.row, pos.col),
            Dir::Up => self.open_horizontal(pos.row - 1, pos.col),
            Dir::Down => self.open_horizontal(pos.row, pos.col),
        }
    }

    /// Whether a token at `pos` can pass in `dir`. Leaving the grid is never open.
    pub fn is_open(&self, pos: Pos, dir: Dir) -> bool {
        if dir.neighbor(pos, self.rows, self.cols).is_none() {
            return false;
        }
        match dir {
            Dir::Left => self.is_vertical_open(pos.row, pos.col - 1),
            Dir::Right => self.is_vertical_open(pos.row, pos.col),
            Dir::Up => self.is_horizontal_open(pos.row - 1, pos.col),
            Dir::Down => self.is_horizontal_open(pos.row, pos.col),
        }
    }
}
