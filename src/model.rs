use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Which sides of a cell get a border line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Border {
    pub left: bool,
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
}

impl Border {
    pub const NONE: Border = Border {
        left: false,
        top: false,
        right: false,
        bottom: false,
    };

    pub const ALL: Border = Border {
        left: true,
        top: true,
        right: true,
        bottom: true,
    };

    /// Parse a side list such as `"TL"` or `"LRB"`; `"1"` means all sides and
    /// `""`/`"0"` none.
    pub fn parse(sides: &str) -> Result<Border, String> {
        match sides {
            "" | "0" => return Ok(Border::NONE),
            "1" => return Ok(Border::ALL),
            _ => {}
        }
        let mut border = Border::NONE;
        for ch in sides.chars() {
            match ch.to_ascii_uppercase() {
                'L' => border.left = true,
                'T' => border.top = true,
                'R' => border.right = true,
                'B' => border.bottom = true,
                other => return Err(format!("unknown border side '{other}' in \"{sides}\"")),
            }
        }
        Ok(border)
    }

    pub fn is_none(&self) -> bool {
        *self == Border::NONE
    }
}

impl TryFrom<String> for Border {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Border::parse(&value)
    }
}

impl From<Border> for String {
    fn from(b: Border) -> Self {
        if b == Border::ALL {
            return "1".to_string();
        }
        let mut out = String::new();
        for (present, ch) in [(b.left, 'L'), (b.top, 'T'), (b.right, 'R'), (b.bottom, 'B')] {
            if present {
                out.push(ch);
            }
        }
        out
    }
}

/// Where the cursor goes after a single-line cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advance {
    /// Stay on the same line, right of the cell.
    #[default]
    Right,
    /// Start of the next line at the left margin.
    NextLine,
    /// Directly below the cell, same x.
    Below,
}

/// Vertical band available for flowed content on every page.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub margin: f32,
    pub header_height: f32,
    pub footer_height: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            margin: 20.0,
            header_height: 50.0,
            footer_height: 40.0,
        }
    }
}

impl PageGeometry {
    /// Top of the content band, where a fresh page starts flowing.
    pub fn content_top(&self) -> f32 {
        self.margin + self.header_height
    }

    pub fn content_bottom(&self, page_height: f32) -> f32 {
        page_height - self.footer_height
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontSource {
    pub family: String,
    #[serde(default)]
    pub bold: bool,
    /// Path relative to the assets directory.
    pub file: PathBuf,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunningHeader {
    pub title: String,
    pub form_code: String,
    pub organization_label: String,
    pub organization: String,
    pub reviewer_label: String,
    pub reviewer: String,
    /// Printed before the page number, e.g. "หน้าที่".
    pub page_label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FooterCell {
    pub width: f32,
    pub text: String,
    #[serde(default)]
    pub align: Align,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunningFooter {
    /// Distance of the footer row from the bottom edge.
    pub offset_from_bottom: f32,
    pub font_size: f32,
    pub row_height: f32,
    pub cells: Vec<FooterCell>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub width: f32,
    pub line_height: f32,
    pub text: String,
    #[serde(default = "all_sides")]
    pub border: Border,
    #[serde(default)]
    pub align: Align,
    #[serde(default)]
    pub fill: bool,
}

fn all_sides() -> Border {
    Border::ALL
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Select the report font family in the given weight and size (points).
    Font { bold: bool, size: f32 },
    TextColor { rgb: [u8; 3] },
    FillColor { rgb: [u8; 3] },
    /// Left/top/right margin, also used as the automatic page-break margin.
    Margins { margin: f32 },
    PageBreak,
    /// Vertical gap; `None` repeats the height of the last cell.
    Space { height: Option<f32> },
    /// Single-line cell; width 0 extends to the right margin.
    Line {
        text: String,
        width: f32,
        height: f32,
        #[serde(default)]
        border: Border,
        #[serde(default)]
        align: Align,
        #[serde(default)]
        fill: bool,
        #[serde(default)]
        advance: Advance,
    },
    /// Word-wrapped cell; the cursor ends at the left margin below it.
    Wrapped {
        text: String,
        width: f32,
        line_height: f32,
        #[serde(default)]
        border: Border,
        #[serde(default)]
        align: Align,
        #[serde(default)]
        fill: bool,
    },
    /// Flowed body paragraph that moves to a new page when it does not fit.
    Paragraph {
        text: String,
        #[serde(default)]
        indent: bool,
    },
    /// Row-height-aware paginated table.
    Table {
        column_widths: Vec<f32>,
        rows: Vec<Vec<String>>,
    },
    /// Wrapped cells drawn side by side; the cursor ends below the tallest.
    Grid { cells: Vec<GridCell> },
    Images {
        files: Vec<PathBuf>,
        width: f32,
        height: f32,
        /// Left offset of the first image and the gap between images.
        gap: f32,
        /// Advance the cursor below each image instead of placing them in a row.
        #[serde(default)]
        stacked: bool,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub font_family: String,
    pub fonts: Vec<FontSource>,
    /// Margin of the first (cover) page.
    pub initial_margin: f32,
    #[serde(default)]
    pub geometry: PageGeometry,
    pub header: Option<RunningHeader>,
    pub footer: Option<RunningFooter>,
    pub blocks: Vec<Block>,
}
