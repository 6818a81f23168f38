//! Perfect-maze generation on a rectangular grid.
//!
//! A randomized depth-first carve turns an R x C grid of closed cells into a
//! spanning tree: every cell reachable, exactly `R * C - 1` walls opened, no
//! cycles. [`layout`] turns the result into static geometry and [`session`]
//! tracks the token until it touches the goal.

pub mod carver;
pub mod config;
pub mod error;
pub mod grid;
pub mod layout;
pub mod session;
pub mod shuffle;

pub use carver::{carve, generate};
pub use config::Config;
pub use error::MazeError;
pub use grid::{Dir, Grid, Pos};
