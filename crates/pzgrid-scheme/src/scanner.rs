//! Left-to-right scanning shared by the character-level schemes.

use pzgrid_core::{CellToken, GridBuffer};

use crate::{DecodeError, UnrecognizedInput};

/// A byte cursor over a compact string.
///
/// All grammar symbols are ASCII; a non-ASCII character is only ever skipped,
/// and it is skipped as a whole character.
#[derive(Debug)]
pub(crate) struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    skipped: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            skipped: 0,
        }
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    pub(crate) fn offset(&self) -> usize {
        self.pos
    }

    /// Consumes one ASCII byte returned by [`peek`](Self::peek).
    pub(crate) fn bump(&mut self) {
        debug_assert!(self.peek().is_some_and(|byte| byte.is_ascii()));
        self.pos += 1;
    }

    /// Consumes the maximal run of ASCII digits at the cursor, possibly empty.
    pub(crate) fn take_digits(&mut self) -> &'a str {
        let start = self.pos;
        let len = self.input.as_bytes()[start..]
            .iter()
            .take_while(|byte| byte.is_ascii_digit())
            .count();
        self.pos += len;
        &self.input[start..self.pos]
    }

    /// Consumes everything up to `close` and the delimiter itself.
    ///
    /// Returns `None`, consuming nothing, when `close` does not occur.
    pub(crate) fn take_until(&mut self, close: u8) -> Option<&'a str> {
        let start = self.pos;
        let len = self.input.as_bytes()[start..]
            .iter()
            .position(|&byte| byte == close)?;
        self.pos += len + 1;
        Some(&self.input[start..start + len])
    }

    /// Steps over a character the grammar does not recognize.
    pub(crate) fn skip_unrecognized(&mut self) {
        let len = self.input[self.pos..]
            .chars()
            .next()
            .map_or(0, char::len_utf8);
        self.pos += len;
        self.skipped += 1;
    }

    /// Number of characters passed over by [`skip_unrecognized`](Self::skip_unrecognized).
    pub(crate) fn skipped(&self) -> usize {
        self.skipped
    }

    /// Reports the finished scan.
    pub(crate) fn finish(&self, scheme: &str, policy: UnrecognizedInput, grid: &GridBuffer) {
        log::debug!(
            "{scheme}: decoded {} bytes into {} grid, cursor at {}",
            self.input.len(),
            grid.dims(),
            grid.cursor()
        );
        if self.skipped == 0 {
            return;
        }
        match policy {
            UnrecognizedInput::PermissiveSkip => log::warn!(
                "{scheme}: skipped {} unrecognized characters",
                self.skipped
            ),
            UnrecognizedInput::Noise | UnrecognizedInput::Verbatim => {
                log::debug!("{scheme}: ignored {} noise characters", self.skipped);
            }
        }
    }
}

/// Returns the run-length skip encoded by a lowercase letter: `a` is 1, `z` is 26.
pub(crate) fn run_length(byte: u8) -> Option<usize> {
    byte.is_ascii_lowercase()
        .then(|| usize::from(byte - b'a') + 1)
}

/// Moves the cursor past `step` empty cells.
pub(crate) fn skip_cells(grid: &mut GridBuffer, step: usize) -> Result<(), DecodeError> {
    if step > grid.remaining() {
        return Err(DecodeError::GridOverflow {
            cursor: grid.cursor(),
            step,
            total: grid.total_cells(),
        });
    }
    grid.advance(step)?;
    Ok(())
}

/// Writes `token` under the cursor and moves past it.
pub(crate) fn assign_cell(grid: &mut GridBuffer, token: CellToken) -> Result<(), DecodeError> {
    if grid.remaining() == 0 {
        return Err(DecodeError::GridOverflow {
            cursor: grid.cursor(),
            step: 1,
            total: grid.total_cells(),
        });
    }
    grid.assign(token)?;
    Ok(())
}
