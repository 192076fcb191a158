//! Text layouts for the grid game.
//!
//! ```text
//! %%%%%%%
//! %.P G %
//! %o%%%.%
//! %%%%%%%
//! ```
//!
//! `%` is a wall, `.` food, `o` a capsule, `P` Pacman's start and `G` (or a
//! digit 1-9) a ghost's start. Ghosts are numbered in reading order.

use std::path::Path;
use std::str::FromStr;

use log::debug;

use super::direction::Position;
use super::error::LayoutError;
use super::grid::Grid;
use super::layouts;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    walls: Grid<bool>,
    food: Grid<bool>,
    capsules: Vec<Position>,
    pacman_start: Position,
    ghost_starts: Vec<Position>,
}

impl Layout {
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        // Blank lines around the grid are ignored; rows inside it keep their
        // trailing spaces, since those are open floor.
        let lines: Vec<&str> = text
            .lines()
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        let start = lines
            .iter()
            .position(|line| !line.is_empty())
            .ok_or(LayoutError::EmptyLayout)?;
        let end = lines
            .iter()
            .rposition(|line| !line.is_empty())
            .map_or(start + 1, |last| last + 1);
        let rows = &lines[start..end];

        let width = rows.first().ok_or(LayoutError::EmptyLayout)?.chars().count();
        let height = rows.len();

        let mut walls = Grid::new(width, height, false);
        let mut food = Grid::new(width, height, false);
        let mut capsules = Vec::new();
        let mut pacman_start = None;
        let mut ghost_starts = Vec::new();

        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(LayoutError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }

            for (x, character) in row.chars().enumerate() {
                let position = Position::new(x, y);
                match character {
                    '%' => {
                        walls.set(position, true);
                    }
                    '.' => {
                        food.set(position, true);
                    }
                    'o' => capsules.push(position),
                    'P' => {
                        if pacman_start.replace(position).is_some() {
                            return Err(LayoutError::DuplicatePacman);
                        }
                    }
                    'G' | '1'..='9' => ghost_starts.push(position),
                    ' ' => {}
                    _ => {
                        return Err(LayoutError::UnknownCharacter { character, x, y });
                    }
                }
            }
        }

        Ok(Self {
            walls,
            food,
            capsules,
            pacman_start: pacman_start.ok_or(LayoutError::MissingPacman)?,
            ghost_starts,
        })
    }

    /// Loads a built-in layout by name, falling back to a layout file on disk.
    pub fn load(name_or_path: &str) -> Result<Self, LayoutError> {
        let name = name_or_path.trim_end_matches(".lay");
        if let Some(text) = layouts::builtin(name) {
            debug!("using built-in layout {}", name);
            return Self::parse(text);
        }

        let path = Path::new(name_or_path);
        if !path.is_file() {
            return Err(LayoutError::UnknownLayout(name_or_path.to_string()));
        }
        debug!("reading layout file {}", path.display());
        let text = std::fs::read_to_string(path).map_err(|source| LayoutError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Drops ghosts beyond the first `max_ghosts`.
    pub fn with_max_ghosts(mut self, max_ghosts: usize) -> Self {
        self.ghost_starts.truncate(max_ghosts);
        self
    }

    pub fn width(&self) -> usize {
        self.walls.width()
    }

    pub fn height(&self) -> usize {
        self.walls.height()
    }

    pub fn walls(&self) -> &Grid<bool> {
        &self.walls
    }

    pub fn food(&self) -> &Grid<bool> {
        &self.food
    }

    pub fn capsules(&self) -> &[Position] {
        &self.capsules
    }

    pub fn pacman_start(&self) -> Position {
        self.pacman_start
    }

    pub fn ghost_starts(&self) -> &[Position] {
        &self.ghost_starts
    }

    pub fn num_ghosts(&self) -> usize {
        self.ghost_starts.len()
    }
}

impl FromStr for Layout {
    type Err = LayoutError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
