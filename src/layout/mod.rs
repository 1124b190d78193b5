//! Surface-independent layout: the line estimator, the row-height-aware table
//! paginator and flowed paragraphs. Everything here talks to a [`Surface`]
//! only, so it can be driven by the PDF backend or by a recording surface in
//! tests.

mod table;
mod text;

use crate::error::Error;
use crate::model::{Align, Border};

pub use table::render_table;
pub use text::{PARAGRAPH_INDENT, render_paragraph};

/// Per-line height of a single-line table cell.
pub const NOMINAL_LINE_HEIGHT: f32 = 10.0;

/// Drawing position in user units, origin top-left, y growing downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cursor {
    pub x: f32,
    pub y: f32,
}

impl Cursor {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A bordered, word-wrapped text block. `line_height` applies to every wrapped
/// line, so the block is `line_height × lines` tall.
#[derive(Clone, Copy, Debug)]
pub struct WrappedCell<'a> {
    pub width: f32,
    pub line_height: f32,
    pub text: &'a str,
    pub border: Border,
    pub align: Align,
    pub fill: bool,
    /// Draw the whole block on the current page even if it runs past the
    /// page-break margin. Surfaces with their own automatic page break must
    /// not split such a block.
    pub keep_on_page: bool,
}

/// The drawing target the layout code renders into. The cursor is explicit
/// state owned by the surface.
pub trait Surface {
    fn cursor(&self) -> Cursor;

    fn set_cursor(&mut self, cursor: Cursor);

    /// (width, height) of the current page.
    fn page_size(&self) -> (f32, f32);

    /// Size of the current font in user units.
    fn font_height(&self) -> f32;

    /// Rendered width of `text` in the current font.
    fn measure_text(&self, text: &str) -> Result<f32, Error>;

    /// Draw `cell` at the cursor. Where the cursor ends up afterwards is the
    /// surface's own convention; callers reposition it explicitly.
    fn draw_wrapped_cell(&mut self, cell: &WrappedCell<'_>) -> Result<(), Error>;

    /// Finish the current page and start a new one.
    fn new_page(&mut self) -> Result<(), Error>;
}

/// Number of display lines `text` occupies when wrapped to `column_width`.
///
/// Explicit `\n` breaks always start a new line; each segment contributes
/// `ceil(width / column_width)` lines and never less than one, so the result is
/// at least 1 even for empty text.
pub fn estimate_lines<S: Surface + ?Sized>(
    surface: &S,
    text: &str,
    column_width: f32,
) -> Result<f32, Error> {
    if !(column_width.is_finite() && column_width > 0.0) {
        return Err(Error::Layout(format!(
            "column width must be positive, got {column_width}"
        )));
    }

    let mut lines = 0.0f32;
    for segment in text.split('\n') {
        let segment = segment.trim_end_matches('\r');
        let width = surface.measure_text(segment)?;
        lines += (width / column_width).ceil().max(1.0);
    }
    Ok(lines)
}

/// Per-line height multiplier that makes a cell of `cell_lines` lines as tall
/// as the tallest cell of its row (`max_lines`).
pub fn height_ratio(cell_lines: f32, max_lines: f32) -> f32 {
    max_lines / cell_lines.max(1.0)
}
