use pdf_writer::{Content, Filter, Finish, Name, Pdf, Rect, Ref, TextStr};

use crate::error::Error;
use crate::layout::{Cursor, Surface, WrappedCell};

use super::{PT_PER_MM, PdfSurface};

impl PdfSurface {
    pub(super) fn ensure_page(&mut self) -> Result<(), Error> {
        if self.page_no == 0 {
            self.add_page()?;
        }
        Ok(())
    }

    /// Close the current page (drawing its footer) and open a new one with the
    /// cursor at the top-left margin. Pages after the first get the running
    /// header.
    pub fn add_page(&mut self) -> Result<(), Error> {
        if self.page_no > 0 {
            self.draw_footer()?;
            self.pages
                .push(std::mem::replace(&mut self.content, Content::new()));
        }
        self.page_no += 1;
        self.cursor = Cursor::new(self.left_margin, self.top_margin);
        self.draw_header()?;
        log::debug!("PAGE {} started", self.page_no);
        Ok(())
    }

    /// Serialize all pages into a PDF file.
    pub fn finish(mut self) -> Result<Vec<u8>, Error> {
        let t0 = std::time::Instant::now();
        self.ensure_page()?;
        self.draw_footer()?;
        self.pages
            .push(std::mem::replace(&mut self.content, Content::new()));

        let mut pdf = Pdf::new();
        let mut next_id = 1;
        let mut alloc = || {
            let r = Ref::new(next_id);
            next_id += 1;
            r
        };

        let catalog_id = alloc();
        let pages_id = alloc();
        let info_id = alloc();

        let mut font_pairs: Vec<(String, Ref)> = Vec::new();
        for entry in self.fonts.iter().filter(|f| f.is_used()) {
            let font_ref = alloc();
            entry.embed(&mut pdf, font_ref, &mut alloc)?;
            font_pairs.push((entry.pdf_name.clone(), font_ref));
        }
        let t_fonts = t0.elapsed();

        let image_xobjects = self.images.embed(&mut pdf, &mut alloc);

        let n = self.pages.len();
        let page_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();
        let content_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();

        for (i, c) in std::mem::take(&mut self.pages).into_iter().enumerate() {
            let compressed = miniz_oxide::deflate::compress_to_vec_zlib(&c.finish(), 6);
            pdf.stream(content_ids[i], &compressed)
                .filter(Filter::FlateDecode);
        }

        pdf.catalog(catalog_id).pages(pages_id);
        pdf.pages(pages_id)
            .kids(page_ids.iter().copied())
            .count(n as i32);

        let media_box = Rect::new(
            0.0,
            0.0,
            self.page_width * PT_PER_MM,
            self.page_height * PT_PER_MM,
        );
        for i in 0..n {
            let mut page = pdf.page(page_ids[i]);
            page.media_box(media_box)
                .parent(pages_id)
                .contents(content_ids[i]);
            let mut resources = page.resources();
            {
                let mut fonts = resources.fonts();
                for (name, font_ref) in &font_pairs {
                    fonts.pair(Name(name.as_bytes()), *font_ref);
                }
            }
            if !image_xobjects.is_empty() {
                let mut xobjects = resources.x_objects();
                for (name, xobj_ref) in &image_xobjects {
                    xobjects.pair(Name(name.as_bytes()), *xobj_ref);
                }
            }
            resources.finish();
        }

        {
            let mut info = pdf.document_info(info_id);
            if !self.title.is_empty() {
                info.title(TextStr(&self.title));
            }
            info.producer(TextStr(concat!("ghg-report ", env!("CARGO_PKG_VERSION"))));
        }

        log::info!(
            "Assembly: font_embed={:.1}ms, total={:.1}ms, {} pages, {} fonts, {} images",
            t_fonts.as_secs_f64() * 1000.0,
            t0.elapsed().as_secs_f64() * 1000.0,
            n,
            font_pairs.len(),
            image_xobjects.len(),
        );

        Ok(pdf.finish())
    }
}

impl Surface for PdfSurface {
    fn cursor(&self) -> Cursor {
        self.cursor
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }

    fn page_size(&self) -> (f32, f32) {
        (self.page_width, self.page_height)
    }

    fn font_height(&self) -> f32 {
        self.font_size / PT_PER_MM
    }

    fn measure_text(&self, text: &str) -> Result<f32, Error> {
        self.text_width(text)
    }

    fn draw_wrapped_cell(&mut self, cell: &WrappedCell<'_>) -> Result<(), Error> {
        let outer = std::mem::replace(&mut self.keep_on_page, cell.keep_on_page);
        let drawn = self.multi_cell(
            cell.width,
            cell.line_height,
            cell.text,
            cell.border,
            cell.align,
            cell.fill,
        );
        self.keep_on_page = outer;
        drawn
    }

    fn new_page(&mut self) -> Result<(), Error> {
        self.add_page()
    }
}
