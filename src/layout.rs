use crate::grid::{Grid, Pos};

const BOUNDARY_THICKNESS: f32 = 2.0;
const WALL_THICKNESS: f32 = 5.0;
const GOAL_SCALE: f32 = 0.7;

/// World size the maze is laid out in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

/// Axis-aligned static rectangle, anchored at its centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// Static geometry for a carved grid: border, one segment per standing
/// interior wall, the goal square and the token's starting circle.
#[derive(Debug, Clone)]
pub struct Layout {
    boundary: [Rect; 4],
    walls: Vec<Rect>,
    goal: Rect,
    token: Circle,
}

impl Layout {
    pub fn new(grid: &Grid, dims: Dimensions) -> Self {
        let (w, h) = (dims.width, dims.height);
        let unit_x = w / grid.cols() as f32;
        let unit_y = h / grid.rows() as f32;

        let boundary = [
            Rect::new(w / 2.0, 0.0, w, BOUNDARY_THICKNESS),
            Rect::new(w / 2.0, h, w, BOUNDARY_THICKNESS),
            Rect::new(0.0, h / 2.0, BOUNDARY_THICKNESS, h),
            Rect::new(w, h / 2.0, BOUNDARY_THICKNESS, h),
        ];

        let mut walls = Vec::new();
        for (r, row) in grid.horizontals().iter().enumerate() {
            for (c, &open) in row.iter().enumerate() {
                if open {
                    continue;
                }
                walls.push(Rect::new(
                    c as f32 * unit_x + unit_x / 2.0,
                    r as f32 * unit_y + unit_y,
                    unit_x,
                    WALL_THICKNESS,
                ));
            }
        }
        for (r, row) in grid.verticals().iter().enumerate() {
            for (c, &open) in row.iter().enumerate() {
                if open {
                    continue;
                }
                walls.push(Rect::new(
                    c as f32 * unit_x + unit_x,
                    r as f32 * unit_y + unit_y / 2.0,
                    WALL_THICKNESS,
                    unit_y,
                ));
            }
        }

        let unit = unit_x.min(unit_y);
        let goal = Rect::new(
            w - unit_x / 2.0,
            h - unit_y / 2.0,
            unit * GOAL_SCALE,
            unit * GOAL_SCALE,
        );
        let token = Circle {
            x: unit_x / 2.0,
            y: unit_y / 2.0,
            radius: unit / 2.0,
        };

        Self {
            boundary,
            walls,
            goal,
            token,
        }
    }

    pub fn boundary(&self) -> &[Rect; 4] {
        &self.boundary
    }

    pub fn walls(&self) -> &[Rect] {
        &self.walls
    }

    pub fn goal(&self) -> Rect {
        self.goal
    }

    pub fn token(&self) -> Circle {
        self.token
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Empty,
}

/// Character-cell view of the maze: cell `(r, c)` sits at `(2r + 1, 2c + 1)`
/// and the slot between two neighbors is empty when their wall is open.
pub fn tiles(grid: &Grid) -> Vec<Vec<Tile>> {
    let height = grid.rows() * 2 + 1;
    let width = grid.cols() * 2 + 1;
    let mut out = vec![vec![Tile::Wall; width]; height];

    for r in 0..grid.rows() {
        for c in 0..grid.cols() {
            out[r * 2 + 1][c * 2 + 1] = Tile::Empty;
        }
    }
    for (r, row) in grid.verticals().iter().enumerate() {
        for (c, &open) in row.iter().enumerate() {
            if open {
                out[r * 2 + 1][c * 2 + 2] = Tile::Empty;
            }
        }
    }
    for (r, row) in grid.horizontals().iter().enumerate() {
        for (c, &open) in row.iter().enumerate() {
            if open {
                out[r * 2 + 2][c * 2 + 1] = Tile::Empty;
            }
        }
    }
    out
}

/// Tile coordinates `(x, y)` of a cell's centre.
pub fn tile_of(pos: Pos) -> (usize, usize) {
    (pos.col * 2 + 1, pos.row * 2 + 1)
}
