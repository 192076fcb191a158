use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Layout is empty")]
    EmptyLayout,
    #[error("Layout rows must all be {expected} wide, row {row} is {found}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Unknown layout character {character:?} at ({x}, {y})")]
    UnknownCharacter { character: char, x: usize, y: usize },
    #[error("Layout has no Pacman start position")]
    MissingPacman,
    #[error("Layout has more than one Pacman start position")]
    DuplicatePacman,
    #[error("No built-in layout named `{0}` and no such file")]
    UnknownLayout(String),
    #[error("Could not read layout file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Unknown direction `{0}`")]
    UnknownDirection(String),
}
