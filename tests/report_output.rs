use std::path::{Path, PathBuf};

use ghg_report::{
    Block, Border, Cursor, Error, PageGeometry, PdfSurface, Report, Surface, builtin_report,
    estimate_lines, render_report, render_table,
};

/// Family that no system is expected to have installed, so text falls back to
/// Helvetica metrics.
const MISSING_FAMILY: &str = "ghg-report-test-missing";

fn missing_assets() -> PathBuf {
    PathBuf::from("tests/no-such-assets")
}

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("ghg-report-{}-{name}", std::process::id()))
}

/// Page count from the `/Count` entry of the page tree.
fn page_count(pdf: &[u8]) -> Option<usize> {
    let text = String::from_utf8_lossy(pdf);
    let start = text.find("/Count ")? + "/Count ".len();
    let digits: String = text[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

fn minimal_report(blocks: Vec<Block>) -> Report {
    Report {
        title: "test".to_string(),
        font_family: MISSING_FAMILY.to_string(),
        fonts: Vec::new(),
        initial_margin: 20.0,
        geometry: PageGeometry::default(),
        header: None,
        footer: None,
        blocks,
    }
}

#[test]
fn builtin_report_renders_without_assets() {
    let _ = env_logger::try_init();
    let report = builtin_report();

    let bytes = render_report(&report, &missing_assets()).expect("render builtin report");

    assert!(bytes.starts_with(b"%PDF-"));
    let explicit_breaks = report
        .blocks
        .iter()
        .filter(|b| matches!(b, Block::PageBreak))
        .count();
    let pages = page_count(&bytes).expect("page tree count");
    assert!(
        pages > explicit_breaks,
        "{pages} pages for {explicit_breaks} explicit breaks"
    );
}

#[test]
fn builtin_report_switches_to_content_margin_after_cover() {
    let report = builtin_report();
    assert_eq!(report.initial_margin, 50.0);
    let first_margin = report.blocks.iter().position(|b| matches!(b, Block::Margins { .. }));
    let first_break = report.blocks.iter().position(|b| matches!(b, Block::PageBreak));
    assert!(first_margin.is_some() && first_margin < first_break);
    assert!(report.header.is_some() && report.footer.is_some());
}

#[test]
fn generate_report_writes_the_file() {
    let output = scratch_path("out.pdf");
    let report = minimal_report(vec![Block::Paragraph {
        text: "Hello".to_string(),
        indent: true,
    }]);

    ghg_report::generate_report(&report, &missing_assets(), &output).unwrap();

    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
    assert_eq!(page_count(&bytes), Some(1));
    std::fs::remove_file(&output).ok();
}

#[test]
fn long_table_paginates_in_the_pdf() {
    let rows: Vec<Vec<String>> = (0..30)
        .map(|i| vec![format!("row {i}"), "value".to_string()])
        .collect();
    let report = minimal_report(vec![
        Block::Font {
            bold: false,
            size: 14.0,
        },
        Block::Table {
            column_widths: vec![60.0, 120.0],
            rows,
        },
    ]);

    let bytes = render_report(&report, &missing_assets()).unwrap();

    // First page starts at the top margin (20 mm): 23 rows fit above the
    // footer band, the remaining 7 go to a second page.
    assert_eq!(page_count(&bytes), Some(2));
}

#[test]
fn invalid_table_fails_the_render() {
    let report = minimal_report(vec![Block::Table {
        column_widths: vec![60.0, 120.0],
        rows: vec![vec!["only one".to_string()]],
    }]);

    let err = render_report(&report, &missing_assets()).unwrap_err();
    assert!(matches!(err, Error::Layout(_)), "{err}");
}

#[test]
fn missing_images_are_skipped() {
    let report = minimal_report(vec![Block::Images {
        files: vec![PathBuf::from("nope.png"), PathBuf::from("nope.jpg")],
        width: 45.0,
        height: 45.0,
        gap: 5.0,
        stacked: false,
    }]);

    let bytes = render_report(&report, &missing_assets()).unwrap();
    assert_eq!(page_count(&bytes), Some(1));
}

#[test]
fn png_images_are_embedded() {
    let dir = scratch_path("assets");
    std::fs::create_dir_all(&dir).unwrap();
    let img = image::RgbaImage::from_fn(8, 4, |x, _| image::Rgba([x as u8 * 30, 0, 0, 128]));
    img.save(dir.join("dot.png")).unwrap();

    let report = minimal_report(vec![Block::Images {
        files: vec![PathBuf::from("dot.png"), PathBuf::from("dot.png")],
        width: 40.0,
        height: 0.0,
        gap: 5.0,
        stacked: true,
    }]);
    let bytes = render_report(&report, &dir).unwrap();
    let text = String::from_utf8_lossy(&bytes);

    // One XObject for the image plus its soft mask, shared by both placements.
    assert_eq!(text.matches("/Subtype /Image").count(), 2);
    assert!(text.contains("/SMask"));
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn surface_draws_tables_across_pages() {
    let geometry = PageGeometry::default();
    let mut surface = PdfSurface::a4();
    surface.set_margins(geometry.margin);
    surface.set_font(MISSING_FAMILY, false, 14.0);
    surface.add_page().unwrap();
    surface.set_cursor(Cursor::new(geometry.margin, geometry.content_top()));

    let rows: Vec<Vec<String>> = (0..30).map(|i| vec![format!("{i}")]).collect();
    render_table(&mut surface, &geometry, &[100.0], &rows).unwrap();

    // 18 nominal rows fit in the 187 mm content band.
    assert_eq!(surface.page_count(), 2);
    assert!((surface.cursor().y - (geometry.content_top() + 120.0)).abs() < 1e-3);
    let bytes = surface.finish().unwrap();
    assert_eq!(page_count(&bytes), Some(2));
}

#[test]
fn wrapped_cell_leaves_cursor_at_left_margin_below() {
    let mut surface = PdfSurface::a4();
    surface.set_margins(20.0);
    surface.set_font(MISSING_FAMILY, false, 12.0);
    surface.add_page().unwrap();
    surface.set_cursor(Cursor::new(80.0, 40.0));

    // Two explicit lines, 8 mm each.
    surface
        .multi_cell(50.0, 8.0, "first\nsecond", Border::ALL, ghg_report::Align::Left, false)
        .unwrap();

    assert_eq!(surface.cursor(), Cursor::new(20.0, 56.0));
}

fn oversize_row() -> Vec<Vec<String>> {
    vec![vec![vec!["x"; 25].join("\n"), "short".to_string()]]
}

#[test]
fn oversize_row_stays_whole_on_the_pdf_surface() {
    let geometry = PageGeometry::default();
    let mut surface = PdfSurface::a4();
    surface.set_margins(geometry.margin);
    surface.set_font(MISSING_FAMILY, false, 14.0);
    surface.add_page().unwrap();
    surface.set_cursor(Cursor::new(geometry.margin, geometry.content_top()));

    render_table(&mut surface, &geometry, &[60.0, 60.0], &oversize_row()).unwrap();

    assert_eq!(surface.page_count(), 1);
    assert_eq!(
        surface.cursor(),
        Cursor::new(geometry.margin, geometry.content_top() + 250.0)
    );
}

#[test]
fn oversize_row_on_a_fresh_page_adds_no_blank_page() {
    let geometry = PageGeometry::default();
    let mut surface = PdfSurface::a4();
    surface.set_margins(geometry.margin);
    surface.set_font(MISSING_FAMILY, false, 14.0);
    surface.add_page().unwrap();
    // Cursor sits at the top margin, above the content band.
    assert_eq!(surface.cursor(), Cursor::new(20.0, 20.0));

    render_table(&mut surface, &geometry, &[60.0, 60.0], &oversize_row()).unwrap();

    assert_eq!(surface.page_count(), 1);
    assert_eq!(surface.cursor(), Cursor::new(20.0, 270.0));
}

#[test]
fn trailing_newline_draws_an_empty_last_line() {
    let mut surface = PdfSurface::a4();
    surface.set_margins(20.0);
    surface.set_font(MISSING_FAMILY, false, 12.0);
    surface.add_page().unwrap();
    surface.set_cursor(Cursor::new(20.0, 40.0));

    surface
        .multi_cell(60.0, 10.0, "a\n", Border::ALL, ghg_report::Align::Left, false)
        .unwrap();

    assert_eq!(surface.cursor(), Cursor::new(20.0, 60.0));
}

#[test]
fn drawn_height_matches_the_line_estimate() {
    let mut surface = PdfSurface::a4();
    surface.set_margins(20.0);
    surface.set_font(MISSING_FAMILY, false, 14.0);
    surface.add_page().unwrap();

    for text in ["a\n", "a\n\n", "\n", "", "one\ntwo"] {
        surface.set_cursor(Cursor::new(20.0, 40.0));
        let lines = estimate_lines(&surface, text, 60.0).unwrap();

        surface
            .multi_cell(60.0, 10.0, text, Border::ALL, ghg_report::Align::Left, false)
            .unwrap();

        assert_eq!(surface.cursor().y - 40.0, lines * 10.0, "{text:?}");
    }
}

#[test]
fn content_round_trips_through_json() {
    let report = builtin_report();
    let path = scratch_path("content.json");

    ghg_report::save_report(&report, &path).unwrap();
    let loaded = ghg_report::load_report(&path).unwrap();

    assert_eq!(loaded, report);
    std::fs::remove_file(&path).ok();
}

#[test]
fn malformed_content_is_a_content_error() {
    let path = scratch_path("bad.json");
    std::fs::write(&path, br#"{"title": 3}"#).unwrap();

    let err = ghg_report::load_report(&path).unwrap_err();
    assert!(matches!(err, Error::Content(_)), "{err}");
    std::fs::remove_file(&path).ok();
}

#[test]
fn missing_content_file_is_an_io_error() {
    let err = ghg_report::load_report(Path::new("tests/no-such-content.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn border_sides_parse() {
    assert_eq!(Border::parse("1"), Ok(Border::ALL));
    assert_eq!(Border::parse(""), Ok(Border::NONE));
    assert_eq!(Border::parse("0"), Ok(Border::NONE));
    let tl = Border::parse("TL").unwrap();
    assert!(tl.top && tl.left && !tl.right && !tl.bottom);
    assert!(Border::parse("LX").is_err());

    let json: Border = serde_json::from_str(r#""LRB""#).unwrap();
    assert!(json.left && json.right && json.bottom && !json.top);
    assert_eq!(serde_json::to_string(&Border::ALL).unwrap(), r#""1""#);
}
