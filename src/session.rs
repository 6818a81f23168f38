use tracing::info;

use crate::grid::{Dir, Grid, Pos};

/// Anything the physics side can report as touching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Token,
    Goal,
    Wall(usize),
    Boundary(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub a: Entity,
    pub b: Entity,
}

impl Contact {
    pub fn new(a: Entity, b: Entity) -> Self {
        Self { a, b }
    }

    fn is_between(&self, x: Entity, y: Entity) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Playing,
    Solved,
}

/// Tracks the token on a carved grid and flips to `Solved` once the token
/// and the goal are reported in contact.
pub struct Session {
    grid: Grid,
    token: Pos,
    goal: Pos,
    state: State,
}

impl Session {
    pub fn new(grid: Grid) -> Self {
        let goal = Pos::new(grid.rows() - 1, grid.cols() - 1);
        Self {
            grid,
            token: Pos::new(0, 0),
            goal,
            state: State::Playing,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn token(&self) -> Pos {
        self.token
    }

    pub fn goal(&self) -> Pos {
        self.goal
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn handle_contact(&mut self, contact: Contact) -> State {
        if self.state == State::Playing && contact.is_between(Entity::Token, Entity::Goal) {
            info!("token reached the goal at {:?}", self.goal);
            self.state = State::Solved;
        }
        self.state
    }

    /// Moves the token one cell if the wall in `dir` is open. Entering the
    /// goal cell yields the contact the physics side would have reported.
    pub fn move_token(&mut self, dir: Dir) -> Option<Contact> {
        if !self.grid.is_open(self.token, dir) {
            return None;
        }
        self.token = dir.neighbor(self.token, self.grid.rows(), self.grid.cols())?;
        if self.token == self.goal {
            return Some(Contact::new(Entity::Token, Entity::Goal));
        }
        None
    }
}
