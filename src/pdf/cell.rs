use pdf_writer::{Name, Str};

use crate::error::Error;
use crate::layout::Cursor;
use crate::model::{Advance, Align, Border};

use super::{PT_PER_MM, PdfSurface};

/// Baseline offset below the vertical centre of a cell, as a fraction of the
/// font size.
const BASELINE_SHIFT: f32 = 0.3;

/// Split `text` into lines no wider than `max_width`.
///
/// Explicit `\n` always breaks, and a trailing `\n` leaves an empty last line. Otherwise a line breaks at its last space, which
/// is consumed; a line without spaces breaks between characters. A single
/// character wider than `max_width` still gets a line of its own.
pub(crate) fn wrap_lines(text: &str, max_width: f32, width_of: impl Fn(char) -> f32) -> Vec<String> {
    let chars: Vec<char> = text.chars().filter(|&c| c != '\r').collect();

    let mut lines = Vec::new();
    let mut sep: Option<usize> = None;
    let (mut i, mut j) = (0usize, 0usize);
    let mut width = 0.0f32;

    while i < chars.len() {
        let c = chars[i];
        if c == '\n' {
            lines.push(chars[j..i].iter().collect());
            i += 1;
            j = i;
            sep = None;
            width = 0.0;
            continue;
        }
        if c == ' ' {
            sep = Some(i);
        }
        width += width_of(c);
        if width > max_width {
            match sep {
                Some(s) => {
                    lines.push(chars[j..s].iter().collect());
                    i = s + 1;
                }
                None => {
                    if i == j {
                        i += 1;
                    }
                    lines.push(chars[j..i].iter().collect());
                }
            }
            j = i;
            sep = None;
            width = 0.0;
        } else {
            i += 1;
        }
    }
    lines.push(chars[j..i].iter().collect());
    lines
}

impl PdfSurface {
    /// PDF y coordinate for a distance `y` from the top edge.
    fn pdf_y(&self, y: f32) -> f32 {
        (self.page_height - y) * PT_PER_MM
    }

    fn current_font(&self) -> Result<usize, Error> {
        self.current_font
            .ok_or_else(|| Error::Font("no font selected".into()))
    }

    /// Width of `text` in the current font, in user units.
    pub(super) fn text_width(&self, text: &str) -> Result<f32, Error> {
        let idx = self.current_font()?;
        Ok(self.fonts[idx].text_width(text, self.font_size) / PT_PER_MM)
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let [r, g, b] = self.fill_color;
        let bottom = self.pdf_y(y + h);
        self.content.save_state();
        self.content
            .set_fill_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
        self.content
            .rect(x * PT_PER_MM, bottom, w * PT_PER_MM, h * PT_PER_MM);
        self.content.fill_nonzero();
        self.content.restore_state();
    }

    fn draw_border(&mut self, x: f32, y: f32, w: f32, h: f32, border: Border) {
        if border.is_none() {
            return;
        }
        let (left, right) = (x * PT_PER_MM, (x + w) * PT_PER_MM);
        let (top, bottom) = (self.pdf_y(y), self.pdf_y(y + h));
        let segments = [
            (border.left, (left, top), (left, bottom)),
            (border.top, (left, top), (right, top)),
            (border.right, (right, top), (right, bottom)),
            (border.bottom, (left, bottom), (right, bottom)),
        ];

        self.content.save_state();
        self.content.set_line_width(self.line_width * PT_PER_MM);
        self.content.set_stroke_rgb(0.0, 0.0, 0.0);
        for (present, from, to) in segments {
            if present {
                self.content.move_to(from.0, from.1);
                self.content.line_to(to.0, to.1);
            }
        }
        self.content.stroke();
        self.content.restore_state();
    }

    fn show_text(&mut self, x: f32, baseline: f32, text: &str) -> Result<(), Error> {
        let idx = self.current_font()?;
        let encoded = self.fonts[idx].encode(text);
        if encoded.is_empty() {
            return Ok(());
        }
        let [r, g, b] = self.text_color;
        let pdf_baseline = self.pdf_y(baseline);
        let font_name = self.fonts[idx].pdf_name.clone();

        self.content.save_state();
        self.content
            .set_fill_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
        self.content.begin_text();
        self.content
            .set_font(Name(font_name.as_bytes()), self.font_size);
        self.content.next_line(x * PT_PER_MM, pdf_baseline);
        self.content.show(Str(&encoded));
        self.content.end_text();
        self.content.restore_state();
        Ok(())
    }

    fn page_break_trigger(&self) -> f32 {
        self.page_height - self.break_margin
    }

    /// Draw a single-line cell at the cursor. A width of 0 extends the cell to
    /// the right margin. Starts a new page first when the cell would cross the
    /// page-break margin.
    #[allow(clippy::too_many_arguments)]
    pub fn cell(
        &mut self,
        width: f32,
        height: f32,
        text: &str,
        border: Border,
        align: Align,
        fill: bool,
        advance: Advance,
    ) -> Result<(), Error> {
        self.ensure_page()?;
        if !self.in_decoration
            && !self.keep_on_page
            && self.cursor.y + height > self.page_break_trigger()
        {
            let x = self.cursor.x;
            self.add_page()?;
            self.cursor.x = x;
        }

        let w = if width == 0.0 {
            self.page_width - self.right_margin - self.cursor.x
        } else {
            width
        };
        let Cursor { x, y } = self.cursor;

        if fill {
            self.fill_rect(x, y, w, height);
        }
        self.draw_border(x, y, w, height, border);

        if !text.is_empty() {
            let text_w = self.text_width(text)?;
            let dx = match align {
                Align::Left => self.cell_margin,
                Align::Center => (w - text_w) / 2.0,
                Align::Right => w - self.cell_margin - text_w,
            };
            let baseline = y + 0.5 * height + BASELINE_SHIFT * self.font_size / PT_PER_MM;
            self.show_text(x + dx, baseline, text)?;
        }

        self.last_height = height;
        match advance {
            Advance::Right => self.cursor.x += w,
            Advance::NextLine => self.cursor = Cursor::new(self.left_margin, y + height),
            Advance::Below => self.cursor.y += height,
        }
        Ok(())
    }

    /// Draw `text` word-wrapped to `width`, one `line_height` row per line.
    ///
    /// Left and right borders are drawn on every line, the top border on the
    /// first and the bottom border on the last. The cursor ends at the left
    /// margin below the block.
    pub fn multi_cell(
        &mut self,
        width: f32,
        line_height: f32,
        text: &str,
        border: Border,
        align: Align,
        fill: bool,
    ) -> Result<(), Error> {
        self.ensure_page()?;
        let w = if width == 0.0 {
            self.page_width - self.right_margin - self.cursor.x
        } else {
            width
        };
        let max_width = w - 2.0 * self.cell_margin;

        let idx = self.current_font()?;
        let font = &self.fonts[idx];
        let scale = self.font_size / 1000.0 / PT_PER_MM;
        let lines = wrap_lines(text, max_width, |c| font.char_width_1000(c) * scale);

        let last = lines.len() - 1;
        for (i, line) in lines.iter().enumerate() {
            let sides = Border {
                left: border.left,
                right: border.right,
                top: border.top && i == 0,
                bottom: border.bottom && i == last,
            };
            self.cell(w, line_height, line, sides, align, fill, Advance::Below)?;
        }
        self.cursor.x = self.left_margin;
        Ok(())
    }

    /// Move to the left margin and down by `height`, or by the height of the
    /// last cell drawn.
    pub fn line_break(&mut self, height: Option<f32>) {
        self.cursor.x = self.left_margin;
        self.cursor.y += height.unwrap_or(self.last_height);
    }

    /// Place the image at `path` with its top-left corner at (`x`, `y`). A zero
    /// `width` or `height` is derived from the other keeping the aspect ratio;
    /// both zero means one pixel per point. Returns the rendered size.
    pub fn image(
        &mut self,
        path: &std::path::Path,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<(f32, f32), Error> {
        self.ensure_page()?;
        let idx = self.images.load(path)?;
        let img = self.images.get(idx);
        let (pw, ph) = (img.pixel_width as f32, img.pixel_height as f32);
        let (w, h) = match (width == 0.0, height == 0.0) {
            (true, true) => (pw / PT_PER_MM, ph / PT_PER_MM),
            (true, false) => (height * pw / ph, height),
            (false, true) => (width, width * ph / pw),
            (false, false) => (width, height),
        };
        let name = img.pdf_name.clone();
        let bottom = self.pdf_y(y + h);

        self.content.save_state();
        self.content.transform([
            w * PT_PER_MM,
            0.0,
            0.0,
            h * PT_PER_MM,
            x * PT_PER_MM,
            bottom,
        ]);
        self.content.x_object(Name(name.as_bytes()));
        self.content.restore_state();
        Ok((w, h))
    }
}
