use crate::error::Error;
use crate::layout::Cursor;
use crate::model::{Advance, Align, Border, RunningFooter, RunningHeader};

use super::PdfSurface;

const TITLE_ROW_HEIGHT: f32 = 15.0;
const FORM_CODE_LINE_HEIGHT: f32 = 5.0;
const ORG_ROW_HEIGHT: f32 = 15.0;
const ORG_LINE_HEIGHT: f32 = 7.5;
const REVIEWER_ROW_HEIGHT: f32 = 5.0;
const HEADER_GAP: f32 = 20.0;

const SIDE_COL: f32 = 25.0;
const TITLE_COL: f32 = 110.0;
const BODY_COL: f32 = 85.0;

const fn sides(left: bool, top: bool, right: bool, bottom: bool) -> Border {
    Border {
        left,
        top,
        right,
        bottom,
    }
}

/// Font and colour state saved around a header or footer.
struct Snapshot {
    font: Option<usize>,
    size: f32,
    text_color: [u8; 3],
    fill_color: [u8; 3],
}

impl PdfSurface {
    fn begin_decoration(&mut self) -> Snapshot {
        self.in_decoration = true;
        let snapshot = Snapshot {
            font: self.current_font,
            size: self.font_size,
            text_color: self.text_color,
            fill_color: self.fill_color,
        };
        self.text_color = [0, 0, 0];
        snapshot
    }

    fn end_decoration(&mut self, snapshot: Snapshot) {
        self.current_font = snapshot.font;
        self.font_size = snapshot.size;
        self.text_color = snapshot.text_color;
        self.fill_color = snapshot.fill_color;
        self.in_decoration = false;
    }

    /// Boxed header block on every page after the cover.
    pub(super) fn draw_header(&mut self) -> Result<(), Error> {
        if self.page_no <= 1 {
            return Ok(());
        }
        let Some(header) = self.header.clone() else {
            return Ok(());
        };
        let snapshot = self.begin_decoration();
        let result = self.header_rows(&header);
        self.end_decoration(snapshot);
        result
    }

    /// Signature row on every page after the cover.
    pub(super) fn draw_footer(&mut self) -> Result<(), Error> {
        if self.page_no <= 1 {
            return Ok(());
        }
        let Some(footer) = self.footer.clone() else {
            return Ok(());
        };
        let snapshot = self.begin_decoration();
        let result = self.footer_row(&footer);
        self.end_decoration(snapshot);
        result
    }

    /// Title and form code, organisation and page number, then the reviewer.
    fn header_rows(&mut self, header: &RunningHeader) -> Result<(), Error> {
        let family = self.font_family.clone();

        self.set_font(&family, true, 16.0);
        self.boxed(SIDE_COL, TITLE_ROW_HEIGHT, "", sides(true, true, false, false), Align::Left)?;
        self.boxed(TITLE_COL, TITLE_ROW_HEIGHT, &header.title, Border::ALL, Align::Center)?;
        self.set_font(&family, true, 12.0);
        self.multi_cell(
            SIDE_COL,
            FORM_CODE_LINE_HEIGHT,
            &header.form_code,
            sides(false, true, true, true),
            Align::Left,
            false,
        )?;

        // The organisation row starts below the wrapped form code.
        self.set_font(&family, false, 12.0);
        self.boxed(SIDE_COL, ORG_ROW_HEIGHT, "", sides(true, false, false, false), Align::Left)?;
        self.boxed(SIDE_COL, ORG_ROW_HEIGHT, &header.organization_label, Border::ALL, Align::Left)?;
        self.wrapped_in_row(BODY_COL, ORG_LINE_HEIGHT, &header.organization, Border::ALL)?;
        let page_text = format!("{} {}", header.page_label, self.page_no - 1);
        self.boxed(SIDE_COL, ORG_ROW_HEIGHT, &page_text, sides(false, true, true, false), Align::Left)?;
        self.line_break(None);

        self.boxed(SIDE_COL, REVIEWER_ROW_HEIGHT, "", sides(true, false, false, true), Align::Left)?;
        self.boxed(SIDE_COL, REVIEWER_ROW_HEIGHT, &header.reviewer_label, Border::ALL, Align::Left)?;
        self.wrapped_in_row(BODY_COL, REVIEWER_ROW_HEIGHT, &header.reviewer, Border::ALL)?;
        self.boxed(SIDE_COL, REVIEWER_ROW_HEIGHT, "", sides(false, true, true, true), Align::Left)?;

        self.line_break(Some(HEADER_GAP));
        Ok(())
    }

    /// Row of bordered signature cells, a fixed distance above the bottom edge.
    fn footer_row(&mut self, footer: &RunningFooter) -> Result<(), Error> {
        let family = self.font_family.clone();
        self.cursor = Cursor::new(self.left_margin, self.page_height - footer.offset_from_bottom);
        self.set_font(&family, true, footer.font_size);
        for cell in &footer.cells {
            self.boxed(cell.width, footer.row_height, &cell.text, Border::ALL, cell.align)?;
        }
        Ok(())
    }

    /// Single-line cell that leaves the cursor to its right.
    fn boxed(&mut self, width: f32, height: f32, text: &str, border: Border, align: Align) -> Result<(), Error> {
        self.cell(width, height, text, border, align, false, Advance::Right)
    }

    /// Wrapped cell that leaves the cursor on the same row, right of it.
    fn wrapped_in_row(&mut self, width: f32, line_height: f32, text: &str, border: Border) -> Result<(), Error> {
        let start = self.cursor;
        self.multi_cell(width, line_height, text, border, Align::Left, false)?;
        self.cursor = Cursor::new(start.x + width, start.y);
        Ok(())
    }
}
