use std::io::{self, Stdout, Write};

use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::QueueableCommand;
use tracing::info;
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthStr;

use maze_carver::layout::{self, Layout, Tile};
use maze_carver::session::Session;
use maze_carver::{generate, Config, MazeError};

const CELL_W: usize = 2;

#[derive(Clone, Copy, PartialEq)]
enum Glyph {
    Token,
    Goal,
    Wall,
    Empty,
}

impl Glyph {
    fn text(self) -> (&'static str, Color) {
        match self {
            Glyph::Token => ("●", Color::Yellow),
            Glyph::Goal => ("◆", Color::Green),
            Glyph::Wall => ("██", Color::Blue),
            Glyph::Empty => ("  ", Color::Reset),
        }
    }
}

fn main() -> Result<(), MazeError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env()?;
    info!("generating {}x{} maze, seed {:?}", config.rows, config.cols, config.seed);

    let grid = generate(config.rows, config.cols, config.rng())?;
    let layout = Layout::new(&grid, config.dimensions());
    info!(
        "{} passages open, {} wall segments to place",
        grid.open_wall_count(),
        layout.walls().len()
    );

    let session = Session::new(grid);
    let mut stdout = io::stdout();
    render(&mut stdout, &session)?;
    Ok(())
}

fn render(stdout: &mut Stdout, session: &Session) -> io::Result<()> {
    let token = layout::tile_of(session.token());
    let goal = layout::tile_of(session.goal());

    for (y, row) in layout::tiles(session.grid()).iter().enumerate() {
        for (x, tile) in row.iter().enumerate() {
            let glyph = if (x, y) == token {
                Glyph::Token
            } else if (x, y) == goal {
                Glyph::Goal
            } else if *tile == Tile::Wall {
                Glyph::Wall
            } else {
                Glyph::Empty
            };
            draw_tile(stdout, glyph)?;
        }
        stdout.queue(Print('\n'))?;
    }
    stdout.flush()
}

fn draw_tile(stdout: &mut Stdout, glyph: Glyph) -> io::Result<()> {
    let (text, color) = glyph.text();
    stdout.queue(SetForegroundColor(color))?;
    stdout.queue(Print(text))?;
    let w = UnicodeWidthStr::width(text);
    if w < CELL_W {
        for _ in 0..(CELL_W - w) {
            stdout.queue(Print(' '))?;
        }
    }
    stdout.queue(ResetColor)?;
    Ok(())
}
