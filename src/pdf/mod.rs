mod cell;
mod decorations;
mod images;
mod surface;

use std::path::Path;

use pdf_writer::Content;

use crate::error::Error;
use crate::fonts::FontEntry;
use crate::layout::{self, Cursor};
use crate::model::{Block, Report, RunningFooter, RunningHeader};

use images::ImageStore;

/// Points per millimetre.
const PT_PER_MM: f32 = 72.0 / 25.4;

const A4_WIDTH: f32 = 210.0;
const A4_HEIGHT: f32 = 297.0;

/// Vertical gap inserted before a block of images.
const IMAGE_BLOCK_GAP: f32 = 5.0;
/// Extra space below a stacked image, on top of the block gap.
const STACKED_IMAGE_SPACING: f32 = 10.0;

/// A drawing surface that writes PDF pages.
///
/// Coordinates are millimetres from the top-left corner of the page; they are
/// flipped into PDF user space when content is emitted.
pub struct PdfSurface {
    title: String,
    page_width: f32,
    page_height: f32,
    left_margin: f32,
    top_margin: f32,
    right_margin: f32,
    /// Distance from the bottom edge that triggers an automatic page break.
    break_margin: f32,
    /// Horizontal padding between a cell border and its text.
    cell_margin: f32,
    line_width: f32,
    cursor: Cursor,
    last_height: f32,
    page_no: usize,
    pages: Vec<Content>,
    content: Content,
    fonts: Vec<FontEntry>,
    font_family: String,
    current_font: Option<usize>,
    /// Current font size in points.
    font_size: f32,
    text_color: [u8; 3],
    fill_color: [u8; 3],
    images: ImageStore,
    header: Option<RunningHeader>,
    footer: Option<RunningFooter>,
    in_decoration: bool,
    /// Set while a block that must stay on one page is drawn.
    keep_on_page: bool,
}

impl PdfSurface {
    pub fn new(page_width: f32, page_height: f32) -> Self {
        Self {
            title: String::new(),
            page_width,
            page_height,
            left_margin: 10.0,
            top_margin: 10.0,
            right_margin: 10.0,
            break_margin: 20.0,
            cell_margin: 1.0,
            line_width: 0.2,
            cursor: Cursor::new(10.0, 10.0),
            last_height: 0.0,
            page_no: 0,
            pages: Vec::new(),
            content: Content::new(),
            fonts: Vec::new(),
            font_family: String::new(),
            current_font: None,
            font_size: 12.0,
            text_color: [0, 0, 0],
            fill_color: [255, 255, 255],
            images: ImageStore::default(),
            header: None,
            footer: None,
            in_decoration: false,
            keep_on_page: false,
        }
    }

    pub fn a4() -> Self {
        Self::new(A4_WIDTH, A4_HEIGHT)
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    /// Family used by the running header and footer.
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    pub fn set_header(&mut self, header: Option<RunningHeader>) {
        self.header = header;
    }

    pub fn set_footer(&mut self, footer: Option<RunningFooter>) {
        self.footer = footer;
    }

    /// Register a font face. `file` is tried first; otherwise the face is looked
    /// up among installed fonts, falling back to Helvetica.
    pub fn register_font(&mut self, family: &str, bold: bool, file: Option<&Path>) {
        if self.find_font(family, bold).is_some() {
            return;
        }
        let pdf_name = format!("F{}", self.fonts.len() + 1);
        self.fonts.push(FontEntry::load(family, bold, pdf_name, file));
    }

    fn find_font(&self, family: &str, bold: bool) -> Option<usize> {
        self.fonts
            .iter()
            .position(|f| f.bold == bold && f.family.eq_ignore_ascii_case(family))
    }

    /// Select a font; unregistered faces are resolved on first use.
    pub fn set_font(&mut self, family: &str, bold: bool, size: f32) {
        let idx = match self.find_font(family, bold) {
            Some(idx) => idx,
            None => {
                self.register_font(family, bold, None);
                self.fonts.len() - 1
            }
        };
        self.current_font = Some(idx);
        self.font_size = size;
    }

    pub fn set_text_color(&mut self, rgb: [u8; 3]) {
        self.text_color = rgb;
    }

    pub fn set_fill_color(&mut self, rgb: [u8; 3]) {
        self.fill_color = rgb;
    }

    /// Set the left, top and right margins and the automatic page-break margin.
    pub fn set_margins(&mut self, margin: f32) {
        self.left_margin = margin;
        self.top_margin = margin;
        self.right_margin = margin;
        self.break_margin = margin;
    }

    pub fn left_margin(&self) -> f32 {
        self.left_margin
    }

    pub fn page_count(&self) -> usize {
        self.page_no
    }
}

/// Render `report` to PDF bytes. Font and image paths are resolved against
/// `assets`.
pub fn render(report: &Report, assets: &Path) -> Result<Vec<u8>, Error> {
    let t0 = std::time::Instant::now();

    let mut surface = PdfSurface::a4();
    surface.set_title(&report.title);
    for source in &report.fonts {
        surface.register_font(&source.family, source.bold, Some(&assets.join(&source.file)));
    }
    surface.set_font_family(&report.font_family);
    surface.set_header(report.header.clone());
    surface.set_footer(report.footer.clone());
    surface.set_margins(report.initial_margin);
    surface.set_font(&report.font_family, false, 14.0);
    surface.add_page()?;
    let t_fonts = t0.elapsed();

    for (bi, block) in report.blocks.iter().enumerate() {
        log::trace!("block {bi}: {block:?}");
        render_block(&mut surface, report, assets, block)?;
    }
    let t_layout = t0.elapsed();

    let pages = surface.page_count();
    let bytes = surface.finish()?;
    let t_total = t0.elapsed();

    log::info!(
        "Render phases: fonts={:.1}ms, layout={:.1}ms, assembly={:.1}ms ({} pages)",
        t_fonts.as_secs_f64() * 1000.0,
        (t_layout - t_fonts).as_secs_f64() * 1000.0,
        (t_total - t_layout).as_secs_f64() * 1000.0,
        pages,
    );

    Ok(bytes)
}

fn render_block(
    surface: &mut PdfSurface,
    report: &Report,
    assets: &Path,
    block: &Block,
) -> Result<(), Error> {
    match block {
        Block::Font { bold, size } => surface.set_font(&report.font_family, *bold, *size),
        Block::TextColor { rgb } => surface.set_text_color(*rgb),
        Block::FillColor { rgb } => surface.set_fill_color(*rgb),
        Block::Margins { margin } => surface.set_margins(*margin),
        Block::PageBreak => surface.add_page()?,
        Block::Space { height } => surface.line_break(*height),
        Block::Line {
            text,
            width,
            height,
            border,
            align,
            fill,
            advance,
        } => surface.cell(*width, *height, text, *border, *align, *fill, *advance)?,
        Block::Wrapped {
            text,
            width,
            line_height,
            border,
            align,
            fill,
        } => surface.multi_cell(*width, *line_height, text, *border, *align, *fill)?,
        Block::Paragraph { text, indent } => {
            layout::render_paragraph(surface, &report.geometry, text, *indent)?
        }
        Block::Table {
            column_widths,
            rows,
        } => layout::render_table(surface, &report.geometry, column_widths, rows)?,
        Block::Grid { cells } => {
            let top = surface.cursor;
            let mut x = top.x;
            let mut bottom = top.y;
            for cell in cells {
                surface.cursor = Cursor::new(x, top.y);
                surface.multi_cell(
                    cell.width,
                    cell.line_height,
                    &cell.text,
                    cell.border,
                    cell.align,
                    cell.fill,
                )?;
                bottom = bottom.max(surface.cursor.y);
                x += cell.width;
            }
            surface.cursor = Cursor::new(surface.left_margin, bottom);
        }
        Block::Images {
            files,
            width,
            height,
            gap,
            stacked,
        } => {
            surface.line_break(Some(IMAGE_BLOCK_GAP));
            for (i, file) in files.iter().enumerate() {
                let x = gap + i as f32 * (width + gap);
                let y = surface.cursor.y;
                match surface.image(&assets.join(file), x, y, *width, *height) {
                    Ok((_, h)) if *stacked => {
                        surface.cursor =
                            Cursor::new(surface.left_margin, y + h + gap + STACKED_IMAGE_SPACING);
                    }
                    Ok(_) => {}
                    Err(e) => log::warn!("Skipping image {}: {e}", file.display()),
                }
            }
        }
    }
    Ok(())
}
