//! Reading and writing starting configurations.
//!
//! File format: nine whitespace-separated tokens in row-major order, each a
//! tile label `1`..`8` or `_` for the blank. Line breaks are free; `save`
//! writes one row per line:
//!
//! ```text
//! 1 2 3
//! 4 5 6
//! 7 8 _
//! ```

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::state::{PuzzleState, WIDTH};

/// Loads and validates a configuration from `path`.
pub fn load(path: impl AsRef<Path>) -> Result<PuzzleState> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| Error::Io {
        operation: "read",
        path: path.to_path_buf(),
        source,
    })?;
    let state: PuzzleState = contents.parse()?;
    debug!("loaded {} with blank at {}", path.display(), state.blank_position());
    Ok(state)
}

/// Renders `state` in the format `load` accepts.
pub fn to_text(state: &PuzzleState) -> String {
    let mut output = String::new();
    for row in state.cells().chunks(WIDTH) {
        let tokens: Vec<String> = row.iter().map(char::to_string).collect();
        output.push_str(&tokens.join(" "));
        output.push('\n');
    }
    output
}

/// Writes `state` to `path`, one row per line.
pub fn save(path: impl AsRef<Path>, state: &PuzzleState) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, to_text(state)).map_err(|source| Error::Io {
        operation: "write",
        path: path.to_path_buf(),
        source,
    })?;
    debug!("wrote {}", path.display());
    Ok(())
}
