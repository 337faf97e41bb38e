//! Displaying grids as text.

use crate::grid::Grid;
use std::fmt::Write;

/// Turns a grid into text.
pub trait Renderer {
    /// Renders the whole grid.
    fn render(&self, grid: &Grid) -> String;
}

/// Displays each cell as one of two glyphs, one line per row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphRenderer {
    /// The glyph for living cells.
    pub alive: String,

    /// The glyph for dead cells.
    pub dead: String,
}

impl GlyphRenderer {
    /// Uses the given glyphs.
    pub fn new<S: ToString, T: ToString>(alive: S, dead: T) -> Self {
        GlyphRenderer {
            alive: alive.to_string(),
            dead: dead.to_string(),
        }
    }

    /// [Plaintext](https://conwaylife.com/wiki/Plaintext) style:
    ///
    /// * **Dead** cells are represented by `.`;
    /// * **Living** cells are represented by `o`.
    pub fn plaintext() -> Self {
        GlyphRenderer::new('o', '.')
    }

    /// Hearts and skulls, each followed by a space.
    pub fn hearts() -> Self {
        GlyphRenderer::new("❤ ", "☠ ")
    }
}

impl Default for GlyphRenderer {
    fn default() -> Self {
        GlyphRenderer::plaintext()
    }
}

impl Renderer for GlyphRenderer {
    fn render(&self, grid: &Grid) -> String {
        let glyph_len = self.alive.len().max(self.dead.len());
        let mut str = String::with_capacity((grid.width() * glyph_len + 1) * grid.height());
        for row in grid.rows() {
            for &alive in row {
                str.push_str(if alive { &self.alive } else { &self.dead });
            }
            str.push('\n');
        }
        str
    }
}

/// Displays the grid in [RLE](https://conwaylife.com/wiki/Rle) format.
///
/// * **Dead** cells are represented by `b`;
/// * **Living** cells are represented by `o`;
/// * Each row is ended with `$`;
/// * The whole pattern is ended with `!`.
///
/// Runs of the same state are prefixed by their length.
/// Dead cells at the end of a row are omitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RleRenderer;

impl RleRenderer {
    /// Lines in the output are wrapped at this width.
    const LINE_WIDTH: usize = 70;
}

impl Renderer for RleRenderer {
    fn render(&self, grid: &Grid) -> String {
        let mut tokens = Vec::new();
        // Consecutive empty rows are merged into one `n$` token.
        let mut pending_rows = 0;
        for row in grid.rows() {
            let len = row.iter().rposition(|&alive| alive).map_or(0, |i| i + 1);
            if len > 0 {
                if pending_rows > 0 {
                    tokens.push(run(pending_rows, '$'));
                    pending_rows = 0;
                }
                let mut i = 0;
                while i < len {
                    let state = row[i];
                    let count = row[i..len].iter().take_while(|&&s| s == state).count();
                    tokens.push(run(count, if state { 'o' } else { 'b' }));
                    i += count;
                }
            }
            pending_rows += 1;
        }
        tokens.push(String::from("!"));

        let mut str = String::new();
        writeln!(
            str,
            "x = {}, y = {}, rule = B3/S23",
            grid.width(),
            grid.height()
        )
        .unwrap();
        let mut line_len = 0;
        for token in tokens {
            if line_len + token.len() > Self::LINE_WIDTH {
                str.push('\n');
                line_len = 0;
            }
            line_len += token.len();
            str.push_str(&token);
        }
        str.push('\n');
        str
    }
}

fn run(count: usize, tag: char) -> String {
    if count == 1 {
        tag.to_string()
    } else {
        format!("{}{}", count, tag)
    }
}
