use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use memmap2::Mmap;
use pdf_writer::{Name, Pdf, Rect, Ref};
use subsetter::GlyphRemapper;
use ttf_parser::Face;

use crate::error::Error;

/// Parsed TrueType program plus the glyphs drawn with it so far.
struct FontProgram {
    data: Vec<u8>,
    face_index: u32,
    ps_name: String,
    ascent: f32,
    descent: f32,
    cap_height: f32,
    bbox: Rect,
    /// char -> (original glyph id, advance in 1000-units)
    glyphs: HashMap<char, (u16, f32)>,
    remapper: GlyphRemapper,
    /// remapped glyph id -> (char, advance in 1000-units)
    used_glyphs: BTreeMap<u16, (char, f32)>,
}

impl FontProgram {
    fn parse(data: Vec<u8>, face_index: u32, ps_name: String) -> Option<Self> {
        let (ascent, descent, cap_height, bbox, glyphs) = {
            let face = Face::parse(&data, face_index).ok()?;
            let units = face.units_per_em() as f32;
            let to_1000 = |v: f32| v / units * 1000.0;

            let bb = face.global_bounding_box();
            let bbox = Rect::new(
                to_1000(bb.x_min as f32),
                to_1000(bb.y_min as f32),
                to_1000(bb.x_max as f32),
                to_1000(bb.y_max as f32),
            );

            let mut glyphs = HashMap::new();
            if let Some(cmap) = face.tables().cmap {
                for subtable in cmap.subtables.into_iter().filter(|s| s.is_unicode()) {
                    subtable.codepoints(|cp| {
                        let Some(ch) = char::from_u32(cp) else {
                            return;
                        };
                        if let Some(gid) = subtable.glyph_index(cp) {
                            let adv = face.glyph_hor_advance(gid).unwrap_or(0) as f32;
                            glyphs.entry(ch).or_insert((gid.0, to_1000(adv)));
                        }
                    });
                }
            }

            (
                to_1000(face.ascender() as f32),
                to_1000(face.descender() as f32),
                face.capital_height()
                    .map(|h| to_1000(h as f32))
                    .unwrap_or(700.0),
                bbox,
                glyphs,
            )
        };

        Some(Self {
            data,
            face_index,
            ps_name,
            ascent,
            descent,
            cap_height,
            bbox,
            glyphs,
            remapper: GlyphRemapper::new(),
            used_glyphs: BTreeMap::new(),
        })
    }
}

pub(crate) struct FontEntry {
    pub(crate) family: String,
    pub(crate) bold: bool,
    pub(crate) pdf_name: String,
    program: Option<FontProgram>,
    used: bool,
}

impl FontEntry {
    /// Resolve a font by asset file, then by the system font index, then fall
    /// back to Helvetica.
    pub(crate) fn load(family: &str, bold: bool, pdf_name: String, file: Option<&Path>) -> Self {
        let t0 = std::time::Instant::now();
        let ps_name = match bold {
            true => format!("{}-Bold", family.replace(' ', "")),
            false => family.replace(' ', ""),
        };

        let from_file = file.and_then(|path| match std::fs::read(path) {
            Ok(data) => FontProgram::parse(data, 0, ps_name.clone()),
            Err(e) => {
                log::warn!("Cannot read font file {}: {e}", path.display());
                None
            }
        });

        let program = from_file.or_else(|| {
            let (path, face_index) = find_font_file(family, bold)?;
            log::info!("Using system font {} for {family} bold={bold}", path.display());
            let data = std::fs::read(&path).ok()?;
            FontProgram::parse(data, face_index, ps_name)
        });

        if program.is_none() {
            log::warn!("Font not found: {family} bold={bold}, using Helvetica");
        }

        log::debug!(
            "load font: {family} bold={bold} as {pdf_name} → {:.1}ms",
            t0.elapsed().as_secs_f64() * 1000.0,
        );

        Self {
            family: family.to_string(),
            bold,
            pdf_name,
            program,
            used: false,
        }
    }

    pub(crate) fn is_used(&self) -> bool {
        self.used
    }

    /// Advance of `ch` in 1000-units. Characters missing from the font are 0.
    pub(crate) fn char_width_1000(&self, ch: char) -> f32 {
        match &self.program {
            Some(p) => p.glyphs.get(&ch).map_or(0.0, |&(_, w)| w),
            None => {
                let byte = char_to_winansi(ch);
                if byte >= 32 {
                    helvetica_width(byte)
                } else {
                    0.0
                }
            }
        }
    }

    /// Width of `text` in points at `font_size`.
    pub(crate) fn text_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars()
            .map(|ch| self.char_width_1000(ch) * font_size / 1000.0)
            .sum()
    }

    /// Encode `text` for a content stream, recording the glyphs for subsetting.
    pub(crate) fn encode(&mut self, text: &str) -> Vec<u8> {
        self.used = true;
        let Some(program) = self.program.as_mut() else {
            return text.chars().map(char_to_winansi).filter(|&b| b != 0).collect();
        };

        let mut out = Vec::with_capacity(text.len() * 2);
        for ch in text.chars() {
            let Some(&(gid, width)) = program.glyphs.get(&ch) else {
                continue;
            };
            let new_gid = program.remapper.remap(gid);
            program.used_glyphs.insert(new_gid, (ch, width));
            out.extend_from_slice(&new_gid.to_be_bytes());
        }
        out
    }

    /// Write the font dictionaries into `pdf` under `font_ref`.
    pub(crate) fn embed(
        &self,
        pdf: &mut Pdf,
        font_ref: Ref,
        alloc: &mut impl FnMut() -> Ref,
    ) -> Result<(), Error> {
        let Some(program) = &self.program else {
            pdf.type1_font(font_ref)
                .base_font(Name(b"Helvetica"))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
            return Ok(());
        };
        embed_truetype(pdf, font_ref, program, alloc)
    }
}

fn identity_system_info() -> pdf_writer::types::SystemInfo<'static> {
    pdf_writer::types::SystemInfo {
        registry: pdf_writer::Str(b"Adobe"),
        ordering: pdf_writer::Str(b"Identity"),
        supplement: 0,
    }
}

/// Embed a subset TrueType program as a Type0 font with Identity-H encoding.
fn embed_truetype(
    pdf: &mut Pdf,
    font_ref: Ref,
    program: &FontProgram,
    alloc: &mut impl FnMut() -> Ref,
) -> Result<(), Error> {
    let subset_data = subsetter::subset(&program.data, program.face_index, &program.remapper)
        .map_err(|e| Error::Font(format!("subsetting {} failed: {e}", program.ps_name)))?;

    let descriptor_ref = alloc();
    let data_ref = alloc();
    let cid_font_ref = alloc();
    let tounicode_ref = alloc();

    let data_len = i32::try_from(subset_data.len())
        .map_err(|_| Error::Font(format!("{} subset is too large", program.ps_name)))?;
    pdf.stream(data_ref, &subset_data)
        .pair(Name(b"Length1"), data_len);

    let ps_name = program.ps_name.as_bytes();

    pdf.font_descriptor(descriptor_ref)
        .name(Name(ps_name))
        .flags(pdf_writer::types::FontFlags::NON_SYMBOLIC)
        .bbox(program.bbox)
        .italic_angle(0.0)
        .ascent(program.ascent)
        .descent(program.descent)
        .cap_height(program.cap_height)
        .stem_v(80.0)
        .font_file2(data_ref);

    {
        let mut cid = pdf.cid_font(cid_font_ref);
        cid.subtype(pdf_writer::types::CidFontType::Type2);
        cid.base_font(Name(ps_name));
        cid.system_info(identity_system_info());
        cid.font_descriptor(descriptor_ref);
        cid.default_width(0.0);
        cid.cid_to_gid_map_predefined(Name(b"Identity"));
        if !program.used_glyphs.is_empty() {
            let mut w = cid.widths();
            for (&gid, &(_, width)) in &program.used_glyphs {
                w.consecutive(gid, [width]);
            }
        }
    }

    let cmap_name = format!("{}-UTF16", program.ps_name);
    let mut cmap = pdf_writer::types::UnicodeCmap::new(Name(cmap_name.as_bytes()), identity_system_info());
    for (&gid, &(ch, _)) in &program.used_glyphs {
        cmap.pair(gid, ch);
    }
    let cmap_data = cmap.finish();
    pdf.stream(tounicode_ref, cmap_data.as_slice());

    pdf.type0_font(font_ref)
        .base_font(Name(ps_name))
        .encoding_predefined(Name(b"Identity-H"))
        .descendant_font(cid_font_ref)
        .to_unicode(tounicode_ref);

    Ok(())
}

/// (lowercase family name, bold) -> (file path, face index within TTC)
type FontLookup = HashMap<(String, bool), (PathBuf, u32)>;

static FONT_INDEX: OnceLock<FontLookup> = OnceLock::new();

fn font_family_name(face: &Face) -> Option<String> {
    face.names()
        .into_iter()
        .filter(|name| name.name_id == ttf_parser::name_id::FAMILY && name.is_unicode())
        .find_map(|name| name.to_string())
}

#[cfg(target_os = "macos")]
const SYSTEM_FONT_DIRS: &[&str] = &[
    "/Library/Fonts",
    "/System/Library/Fonts",
    "/System/Library/Fonts/Supplemental",
];
#[cfg(target_os = "macos")]
const USER_FONT_DIR: Option<&str> = Some("Library/Fonts");

#[cfg(target_os = "linux")]
const SYSTEM_FONT_DIRS: &[&str] = &["/usr/share/fonts", "/usr/local/share/fonts"];
#[cfg(target_os = "linux")]
const USER_FONT_DIR: Option<&str> = Some(".local/share/fonts");

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
const SYSTEM_FONT_DIRS: &[&str] = &[];
#[cfg(not(any(target_os = "macos", target_os = "linux")))]
const USER_FONT_DIR: Option<&str> = None;

/// Directories searched for installed fonts, `GHG_REPORT_FONTS` entries first.
fn font_directories() -> Vec<PathBuf> {
    let extra = std::env::var_os("GHG_REPORT_FONTS").unwrap_or_default();
    let mut dirs: Vec<PathBuf> = std::env::split_paths(&extra)
        .filter(|p| !p.as_os_str().is_empty())
        .collect();
    dirs.extend(SYSTEM_FONT_DIRS.iter().map(PathBuf::from));
    if let (Some(rel), Some(home)) = (USER_FONT_DIR, std::env::var_os("HOME")) {
        dirs.push(PathBuf::from(home).join(rel));
    }
    if cfg!(windows) {
        let windir = std::env::var_os("WINDIR").map_or_else(|| "C:\\Windows".into(), PathBuf::from);
        dirs.push(windir.join("Fonts"));
    }
    dirs
}

fn is_font_file(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref(),
        Some("ttf" | "otf" | "ttc")
    )
}

fn scan_font_dirs() -> FontLookup {
    let t0 = std::time::Instant::now();
    let mut index = FontLookup::new();
    let mut files_scanned = 0u32;
    let mut visited: HashSet<PathBuf> = HashSet::new();

    let mut stack = font_directories();
    while let Some(dir) = stack.pop() {
        if !visited.insert(dir.clone()) {
            continue;
        }
        let Ok(entries) = std::fs::read_dir(&dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
                continue;
            }
            if !is_font_file(&path) {
                continue;
            }
            let Ok(file) = std::fs::File::open(&path) else {
                continue;
            };
            // SAFETY: font files are only read; a concurrent truncation at worst
            // yields a parse failure for this face.
            let Ok(data) = (unsafe { Mmap::map(&file) }) else {
                continue;
            };
            files_scanned += 1;
            let face_count = ttf_parser::fonts_in_collection(&data).unwrap_or(1);
            for face_index in 0..face_count {
                let Ok(face) = Face::parse(&data, face_index) else {
                    continue;
                };
                if let Some(family) = font_family_name(&face) {
                    index
                        .entry((family.to_lowercase(), face.is_bold()))
                        .or_insert((path.clone(), face_index));
                }
            }
        }
    }

    log::info!(
        "Font scan: {:.1}ms, {} dirs, {} files parsed → {} entries",
        t0.elapsed().as_secs_f64() * 1000.0,
        visited.len(),
        files_scanned,
        index.len(),
    );

    index
}

/// Look up an installed font by family name. Falls back to the regular weight
/// when no bold face is installed.
fn find_font_file(family: &str, bold: bool) -> Option<(PathBuf, u32)> {
    let index = FONT_INDEX.get_or_init(scan_font_dirs);
    let key = family.to_lowercase();
    index
        .get(&(key.clone(), bold))
        .or_else(|| if bold { index.get(&(key, false)) } else { None })
        .cloned()
}

/// Code points of the Windows-1252 block 0x80..=0x9F, indexed from 0x80.
/// Unassigned slots hold `'\0'`.
const CP1252_HIGH: [char; 32] = [
    '\u{20AC}', '\0', '\u{201A}', '\u{0192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02C6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '\0', '\u{017D}', '\0',
    '\0', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{02DC}', '\u{2122}', '\u{0161}', '\u{203A}', '\u{0153}', '\0', '\u{017E}', '\u{0178}',
];

/// WinAnsi byte for `c`, or 0 when the encoding has no slot for it. Thai
/// text always lands on 0.
fn char_to_winansi(c: char) -> u8 {
    match u32::from(c) {
        code @ (0x20..=0x7E | 0xA0..=0xFF) => code as u8,
        _ => CP1252_HIGH
            .iter()
            .position(|&slot| slot != '\0' && slot == c)
            .map_or(0, |i| 0x80 + i as u8),
    }
}

/// Approximate Helvetica advance at 1000 units/em for a WinAnsi byte.
fn helvetica_width(byte: u8) -> f32 {
    match byte {
        32 => 278.0,
        33..=47 => 333.0,
        48..=57 => 556.0,
        58..=64 => 333.0,
        73 | 74 => 278.0,
        77 => 833.0,
        65..=90 => 667.0,
        91..=96 => 333.0,
        102 | 105 | 106 | 108 | 116 => 278.0,
        109 | 119 => 833.0,
        97..=122 => 556.0,
        _ => 556.0,
    }
}
