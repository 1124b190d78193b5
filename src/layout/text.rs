use crate::error::Error;
use crate::model::{Align, Border, PageGeometry};

use super::{Cursor, NOMINAL_LINE_HEIGHT, Surface, WrappedCell, estimate_lines};

/// Leading spaces used to indent the first line of a body paragraph.
pub const PARAGRAPH_INDENT: &str = "           ";

/// Flow a body paragraph from the cursor, spanning from the left margin to
/// `page_width - margin`.
///
/// The paragraph is kept whole: when its estimated height (lines × current
/// font size) does not fit above the footer band, it starts on a new page at
/// the top of the content band. The estimate is taken on the bare text; the
/// indent is only added when drawing.
pub fn render_paragraph<S: Surface + ?Sized>(
    surface: &mut S,
    geometry: &PageGeometry,
    text: &str,
    indent: bool,
) -> Result<(), Error> {
    let (page_width, page_height) = surface.page_size();
    let width = page_width - geometry.margin;

    let lines = estimate_lines(surface, text, width)?;
    let content_h = lines * surface.font_height();
    let y = surface.cursor().y;
    let remaining = geometry.content_bottom(page_height) - y;

    log::debug!("PARAGRAPH lines={lines} h={content_h:.2} remaining={remaining:.2}");

    if content_h > remaining {
        surface.new_page()?;
        surface.set_cursor(Cursor::new(geometry.margin, geometry.content_top()));
    } else {
        surface.set_cursor(Cursor::new(geometry.margin, y));
    }

    let body = if indent {
        format!("{PARAGRAPH_INDENT}{text}")
    } else {
        text.to_string()
    };

    surface.draw_wrapped_cell(&WrappedCell {
        width,
        line_height: NOMINAL_LINE_HEIGHT,
        text: &body,
        border: Border::NONE,
        align: Align::Left,
        fill: false,
        keep_on_page: false,
    })
}
