#![allow(dead_code)]

use ghg_report::{Border, Cursor, Error, PageGeometry, Surface, WrappedCell};

pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;

/// Width of every character on the recording surface.
pub const CHAR_WIDTH: f32 = 2.0;

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Cell {
        x: f32,
        y: f32,
        width: f32,
        line_height: f32,
        text: String,
        border: Border,
        keep_on_page: bool,
    },
    NewPage,
}

/// A surface that records draw calls instead of producing output. Text is
/// `CHAR_WIDTH` per character wide.
pub struct RecordingSurface {
    pub cursor: Cursor,
    pub font_height: f32,
    pub events: Vec<Event>,
    pub fail_measure: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        let geometry = PageGeometry::default();
        Self {
            cursor: Cursor::new(geometry.margin, geometry.content_top()),
            font_height: 14.0 * 25.4 / 72.0,
            events: Vec::new(),
            fail_measure: false,
        }
    }

    /// Surface with the cursor `remaining` above the footer band.
    pub fn with_remaining(remaining: f32) -> Self {
        let geometry = PageGeometry::default();
        let mut surface = Self::new();
        surface.cursor.y = geometry.content_bottom(PAGE_HEIGHT) - remaining;
        surface
    }

    pub fn cells(&self) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Cell { .. }))
            .collect()
    }

    pub fn page_breaks(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::NewPage))
            .count()
    }
}

pub fn text_of_width(width: f32) -> String {
    "a".repeat((width / CHAR_WIDTH).round() as usize)
}

impl Surface for RecordingSurface {
    fn cursor(&self) -> Cursor {
        self.cursor
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }

    fn page_size(&self) -> (f32, f32) {
        (PAGE_WIDTH, PAGE_HEIGHT)
    }

    fn font_height(&self) -> f32 {
        self.font_height
    }

    fn measure_text(&self, text: &str) -> Result<f32, Error> {
        if self.fail_measure {
            return Err(Error::Font("no font selected".into()));
        }
        Ok(text.chars().count() as f32 * CHAR_WIDTH)
    }

    fn draw_wrapped_cell(&mut self, cell: &WrappedCell<'_>) -> Result<(), Error> {
        self.events.push(Event::Cell {
            x: self.cursor.x,
            y: self.cursor.y,
            width: cell.width,
            line_height: cell.line_height,
            text: cell.text.to_string(),
            border: cell.border,
            keep_on_page: cell.keep_on_page,
        });
        self.cursor.y += cell.line_height;
        Ok(())
    }

    fn new_page(&mut self) -> Result<(), Error> {
        self.events.push(Event::NewPage);
        self.cursor = Cursor::new(10.0, 10.0);
        Ok(())
    }
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}
