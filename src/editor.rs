//! Single-image editing session driven by one-character commands.
//!
//! The session retains the decoded original next to the working grid.
//! Every command replaces the working grid with a filter's output; `r`
//! discards all edits by restoring the original.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::FilterParams;
use crate::error::{Error, Result};
use crate::filters;
use crate::grid::PixelGrid;
use crate::io::load_grid;

/// Editor action bound to a single key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    FlipHorizontal,
    FlipVertical,
    Grayscale,
    Vintage,
    Blur,
    Contrast,
    Tint,
    Reset,
}

/// Key bindings, in help order.
pub const KEY_BINDINGS: [(char, Command); 8] = [
    ('h', Command::FlipHorizontal),
    ('f', Command::FlipVertical),
    ('g', Command::Grayscale),
    ('v', Command::Vintage),
    ('b', Command::Blur),
    ('c', Command::Contrast),
    ('t', Command::Tint),
    ('r', Command::Reset),
];

impl Command {
    pub fn from_key(key: char) -> Option<Command> {
        KEY_BINDINGS
            .iter()
            .find(|(k, _)| *k == key)
            .map(|&(_, command)| command)
    }

    pub fn key(self) -> char {
        KEY_BINDINGS
            .iter()
            .find(|(_, c)| *c == self)
            .map_or('?', |&(key, _)| key)
    }

    /// Run the filter behind this command. `Reset` has no filter and
    /// returns the input unchanged.
    pub fn run(self, grid: &PixelGrid, params: &FilterParams) -> Result<PixelGrid> {
        match self {
            Command::FlipHorizontal => Ok(filters::flip_horizontal(grid)),
            Command::FlipVertical => Ok(filters::flip_vertical(grid)),
            Command::Grayscale => filters::grayscale(grid),
            Command::Vintage => filters::color_matrix(grid, &params.vintage_matrix),
            Command::Blur => filters::blur(grid, params.blur_radius, params.blur_border),
            Command::Contrast => filters::contrast(grid, params.contrast_factor),
            Command::Tint => filters::tint(grid, params.tint_factor, params.tint_channel),
            Command::Reset => Ok(grid.clone()),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Command::FlipHorizontal => "flip-horizontal",
            Command::FlipVertical => "flip-vertical",
            Command::Grayscale => "grayscale",
            Command::Vintage => "vintage",
            Command::Blur => "blur",
            Command::Contrast => "contrast",
            Command::Tint => "tint",
            Command::Reset => "reset",
        };
        f.write_str(name)
    }
}

/// Original plus working grid for one image.
#[derive(Clone, Debug)]
pub struct Editor {
    source: Option<PathBuf>,
    original: PixelGrid,
    current: PixelGrid,
}

impl Editor {
    pub fn new(original: PixelGrid) -> Self {
        Self {
            source: None,
            current: original.clone(),
            original,
        }
    }

    /// Decode `path` and start a session on it.
    pub fn open(path: &Path) -> Result<Self> {
        let original = load_grid(path)?;
        Ok(Self {
            source: Some(path.to_path_buf()),
            current: original.clone(),
            original,
        })
    }

    pub fn current(&self) -> &PixelGrid {
        &self.current
    }

    pub fn original(&self) -> &PixelGrid {
        &self.original
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn into_current(self) -> PixelGrid {
        self.current
    }

    /// Apply one command to the working grid.
    ///
    /// On error the working grid is left as it was.
    pub fn apply(&mut self, command: Command, params: &FilterParams) -> Result<()> {
        if command == Command::Reset {
            self.reset();
            return Ok(());
        }
        self.current = command.run(&self.current, params)?;
        log::debug!(
            "applied {command} ('{}'), grid {}x{}",
            command.key(),
            self.current.height(),
            self.current.width()
        );
        Ok(())
    }

    /// Apply the command bound to `key`.
    pub fn apply_key(&mut self, key: char, params: &FilterParams) -> Result<Command> {
        let command = Command::from_key(key).ok_or(Error::UnknownCommand(key))?;
        self.apply(command, params)?;
        Ok(command)
    }

    /// Apply every key in order, skipping whitespace.
    ///
    /// Stops at the first unknown key or failing filter.
    pub fn apply_keys(&mut self, keys: &str, params: &FilterParams) -> Result<Vec<Command>> {
        keys.chars()
            .filter(|c| !c.is_whitespace())
            .map(|key| self.apply_key(key, params))
            .collect()
    }

    /// Discard all edits and restore the retained original.
    pub fn reset(&mut self) {
        self.current = self.original.clone();
        log::info!("reset to original");
    }

    /// Re-decode the source file, replacing both original and working grid.
    ///
    /// Sessions created with [`Editor::new`] have no file and fall back
    /// to [`Editor::reset`].
    pub fn reload(&mut self) -> Result<()> {
        match &self.source {
            Some(path) => {
                let original = load_grid(path)?;
                self.current = original.clone();
                self.original = original;
                log::info!("reloaded {}", path.display());
            }
            None => self.reset(),
        }
        Ok(())
    }
}
