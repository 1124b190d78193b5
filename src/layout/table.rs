use crate::error::Error;
use crate::model::{Align, Border, PageGeometry};

use super::{Cursor, NOMINAL_LINE_HEIGHT, Surface, WrappedCell, estimate_lines, height_ratio};

/// Reject malformed tables before anything is drawn.
fn validate(column_widths: &[f32], rows: &[Vec<String>]) -> Result<(), Error> {
    if column_widths.is_empty() {
        return Err(Error::Layout("table has no columns".into()));
    }
    if let Some((i, w)) = column_widths
        .iter()
        .enumerate()
        .find(|(_, w)| !(w.is_finite() && **w > 0.0))
    {
        return Err(Error::Layout(format!(
            "column {i} has non-positive width {w}"
        )));
    }
    if let Some((ri, row)) = rows
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() != column_widths.len())
    {
        return Err(Error::Layout(format!(
            "row {ri} has {} cells, expected {}",
            row.len(),
            column_widths.len()
        )));
    }
    Ok(())
}

/// Index of the first cell with the largest estimate.
fn tallest_cell(estimates: &[f32]) -> usize {
    let mut best = 0;
    for (i, &lines) in estimates.iter().enumerate() {
        if lines > estimates[best] {
            best = i;
        }
    }
    best
}

/// Render `rows` as a bordered grid at the surface cursor.
///
/// Each row is as tall as its tallest cell (`NOMINAL_LINE_HEIGHT` per estimated
/// line). Shorter cells are drawn with a stretched per-line height so every
/// bottom border lands on the same y. A row never straddles a page: when it does
/// not fit above the footer band a new page is started first.
pub fn render_table<S: Surface + ?Sized>(
    surface: &mut S,
    geometry: &PageGeometry,
    column_widths: &[f32],
    rows: &[Vec<String>],
) -> Result<(), Error> {
    validate(column_widths, rows)?;

    for (ri, row) in rows.iter().enumerate() {
        let estimates = row
            .iter()
            .zip(column_widths)
            .map(|(text, &width)| estimate_lines(surface, text, width))
            .collect::<Result<Vec<f32>, Error>>()?;
        let tallest = tallest_cell(&estimates);
        let max_lines = estimates[tallest];
        let row_h = NOMINAL_LINE_HEIGHT * max_lines;

        let (_, page_height) = surface.page_size();
        let content_bottom = geometry.content_bottom(page_height);
        let content_top = geometry.content_top();
        let y = surface.cursor().y;
        let at_page_top = y <= content_top + 0.01;

        log::debug!(
            "TABLE row={} row_h={:.2} lines={:?} y={:.2} remaining={:.2}",
            ri,
            row_h,
            estimates,
            y,
            content_bottom - y
        );

        if row_h > content_bottom - y {
            if at_page_top {
                log::warn!(
                    "table row {ri} is {row_h:.1} tall, taller than the content band; drawing it overflowing"
                );
            } else {
                surface.new_page()?;
                surface.set_cursor(Cursor::new(geometry.margin, content_top));
            }
        }

        let row_top = surface.cursor();
        let mut x = row_top.x;
        for (i, (text, &width)) in row.iter().zip(column_widths).enumerate() {
            let line_height = if i == tallest {
                NOMINAL_LINE_HEIGHT
            } else {
                NOMINAL_LINE_HEIGHT * height_ratio(estimates[i], max_lines)
            };
            surface.set_cursor(Cursor::new(x, row_top.y));
            surface.draw_wrapped_cell(&WrappedCell {
                width,
                line_height,
                text,
                border: Border::ALL,
                align: Align::Left,
                fill: false,
                keep_on_page: true,
            })?;
            x += width;
        }

        surface.set_cursor(Cursor::new(geometry.margin, row_top.y + row_h));
    }

    Ok(())
}
