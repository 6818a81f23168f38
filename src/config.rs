use std::str::FromStr;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::MazeError;
use crate::layout::Dimensions;

const DEFAULT_ROWS: usize = 10;
const DEFAULT_COLS: usize = 10;
const DEFAULT_WIDTH: f32 = 600.0;
const DEFAULT_HEIGHT: f32 = 600.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    pub width: f32,
    pub height: f32,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: None,
        }
    }
}

impl Config {
    /// Reads `MAZE_ROWS`, `MAZE_COLS`, `MAZE_WIDTH`, `MAZE_HEIGHT` and
    /// `MAZE_SEED`, falling back to defaults for unset variables.
    pub fn from_env() -> Result<Self, MazeError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, MazeError> {
        let defaults = Self::default();
        let config = Self {
            rows: setting(&lookup, "MAZE_ROWS")?.unwrap_or(defaults.rows),
            cols: setting(&lookup, "MAZE_COLS")?.unwrap_or(defaults.cols),
            width: setting(&lookup, "MAZE_WIDTH")?.unwrap_or(defaults.width),
            height: setting(&lookup, "MAZE_HEIGHT")?.unwrap_or(defaults.height),
            seed: setting(&lookup, "MAZE_SEED")?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), MazeError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(MazeError::InvalidDimensions(self.rows, self.cols));
        }
        if !(self.width > 0.0) {
            return Err(MazeError::InvalidSetting(
                "MAZE_WIDTH".to_string(),
                self.width.to_string(),
            ));
        }
        if !(self.height > 0.0) {
            return Err(MazeError::InvalidSetting(
                "MAZE_HEIGHT".to_string(),
                self.height.to_string(),
            ));
        }
        Ok(())
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn setting<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<Option<T>, MazeError> {
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| MazeError::InvalidSetting(name.to_string(), raw)),
    }
}
