mod common;

use common::{Event, RecordingSurface, approx, text_of_width};
use ghg_report::{
    Border, Cursor, Error, NOMINAL_LINE_HEIGHT, PageGeometry, Surface, estimate_lines, render_table,
};

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|s| s.to_string()).collect()
}

fn cell_fields(event: &Event) -> (f32, f32, f32, f32, &str) {
    match event {
        Event::Cell {
            x,
            y,
            width,
            line_height,
            text,
            ..
        } => (*x, *y, *width, *line_height, text.as_str()),
        Event::NewPage => panic!("expected a cell, got a page break"),
    }
}

#[test]
fn single_line_rows_are_nominal_height() {
    let geometry = PageGeometry::default();
    let mut surface = RecordingSurface::new();
    let top = surface.cursor().y;
    let rows = vec![row(&["a", "b"]), row(&["c", "d"]), row(&["e", "f"])];

    render_table(&mut surface, &geometry, &[60.0, 120.0], &rows).unwrap();

    let cells = surface.cells();
    assert_eq!(cells.len(), 6);
    for (i, cell) in cells.iter().enumerate() {
        let (_, y, _, line_height, _) = cell_fields(cell);
        assert_eq!(line_height, NOMINAL_LINE_HEIGHT);
        assert!(approx(y, top + (i / 2) as f32 * 10.0));
    }
    assert!(approx(surface.cursor().y, top + 30.0));
    assert_eq!(surface.cursor().x, geometry.margin);
    assert_eq!(surface.page_breaks(), 0);
}

#[test]
fn cells_are_placed_side_by_side_with_all_borders() {
    let geometry = PageGeometry::default();
    let mut surface = RecordingSurface::new();
    let top = surface.cursor().y;

    render_table(&mut surface, &geometry, &[40.0, 50.0, 60.0], &[row(&["a", "b", "c"])]).unwrap();

    let xs: Vec<f32> = surface.cells().iter().map(|c| cell_fields(c).0).collect();
    assert_eq!(xs, vec![20.0, 60.0, 110.0]);
    for cell in surface.cells() {
        let Event::Cell { y, border, .. } = cell else {
            unreachable!()
        };
        assert!(approx(*y, top));
        assert_eq!(*border, Border::ALL);
    }
}

#[test]
fn shorter_cells_are_stretched_to_the_tallest() {
    let geometry = PageGeometry::default();
    let mut surface = RecordingSurface::new();
    let top = surface.cursor().y;
    let long = text_of_width(200.0);

    render_table(&mut surface, &geometry, &[60.0, 120.0], &[row(&["label", &long])]).unwrap();

    let cells = surface.cells();
    let (_, _, _, first_h, _) = cell_fields(cells[0]);
    let (_, _, _, second_h, _) = cell_fields(cells[1]);
    assert_eq!(first_h, 20.0);
    assert_eq!(second_h, 10.0);
    assert!(approx(surface.cursor().y, top + 20.0));
}

#[test]
fn every_cell_of_a_row_ends_on_the_same_line() {
    let geometry = PageGeometry::default();
    let mut surface = RecordingSurface::new();
    let widths = [40.0, 50.0, 60.0];
    let texts = [
        text_of_width(10.0),
        text_of_width(140.0),
        format!("{}\n{}", text_of_width(70.0), text_of_width(10.0)),
    ];
    let rows = vec![texts.to_vec()];

    render_table(&mut surface, &geometry, &widths, &rows).unwrap();

    let probe = RecordingSurface::new();
    let bottoms: Vec<f32> = surface
        .cells()
        .iter()
        .zip(texts.iter().zip(widths))
        .map(|(cell, (text, width))| {
            let (_, _, _, line_height, _) = cell_fields(cell);
            line_height * estimate_lines(&probe, text, width).unwrap()
        })
        .collect();
    // estimates are 1, 3 and 3
    for bottom in &bottoms {
        assert!(approx(*bottom, 30.0), "{bottoms:?}");
    }
}

#[test]
fn row_that_does_not_fit_starts_a_new_page() {
    let geometry = PageGeometry::default();
    let mut surface = RecordingSurface::with_remaining(15.0);
    let long = text_of_width(200.0);

    render_table(&mut surface, &geometry, &[60.0, 120.0], &[row(&["label", &long])]).unwrap();

    assert_eq!(surface.events[0], Event::NewPage);
    assert_eq!(surface.page_breaks(), 1);
    for cell in surface.cells() {
        let (_, y, _, _, _) = cell_fields(cell);
        assert!(approx(y, geometry.margin + geometry.header_height));
    }
    assert!(approx(surface.cursor().y, geometry.content_top() + 20.0));
}

#[test]
fn row_that_fits_exactly_stays_on_the_page() {
    let geometry = PageGeometry::default();
    let mut surface = RecordingSurface::with_remaining(10.0);

    render_table(&mut surface, &geometry, &[60.0, 120.0], &[row(&["a", "b"])]).unwrap();

    assert_eq!(surface.page_breaks(), 0);
}

#[test]
fn each_overflowing_row_breaks_exactly_once() {
    let geometry = PageGeometry::default();
    let mut surface = RecordingSurface::new();
    // 187 mm band: six 30 mm rows fit on a page, the seventh does not.
    let tall = "a\nb\nc".to_string();
    let rows: Vec<Vec<String>> = (0..14).map(|_| vec![tall.clone()]).collect();

    render_table(&mut surface, &geometry, &[100.0], &rows).unwrap();

    assert_eq!(surface.page_breaks(), 2);
    let mut since_break = 0;
    for event in &surface.events {
        match event {
            Event::NewPage => {
                assert_eq!(since_break, 6);
                since_break = 0;
            }
            Event::Cell { y, .. } => {
                assert!(*y + 30.0 <= geometry.content_bottom(297.0) + 1e-3);
                since_break += 1;
            }
        }
    }
}

#[test]
fn oversize_row_at_page_top_is_drawn_without_a_blank_page() {
    let geometry = PageGeometry::default();
    let mut surface = RecordingSurface::new();
    let huge = vec!["x"; 25].join("\n");

    render_table(&mut surface, &geometry, &[100.0], &[vec![huge]]).unwrap();

    assert_eq!(surface.page_breaks(), 0);
    let (_, y, _, _, _) = cell_fields(surface.cells()[0]);
    assert!(approx(y, geometry.content_top()));
}

#[test]
fn oversize_row_above_the_content_band_is_drawn_in_place() {
    let geometry = PageGeometry::default();
    let mut surface = RecordingSurface::new();
    surface.set_cursor(Cursor::new(geometry.margin, geometry.margin));
    let huge = vec!["x"; 25].join("\n");

    render_table(&mut surface, &geometry, &[100.0], &[vec![huge]]).unwrap();

    assert_eq!(surface.page_breaks(), 0);
    let (y, keep_on_page) = match surface.cells()[0] {
        Event::Cell { y, keep_on_page, .. } => (*y, *keep_on_page),
        Event::NewPage => unreachable!(),
    };
    assert!(approx(y, geometry.margin));
    assert!(keep_on_page);
}

#[test]
fn oversize_row_mid_page_moves_to_a_fresh_page_once() {
    let geometry = PageGeometry::default();
    let mut surface = RecordingSurface::with_remaining(100.0);
    let huge = vec!["x"; 25].join("\n");

    render_table(&mut surface, &geometry, &[100.0], &[vec![huge]]).unwrap();

    assert_eq!(surface.page_breaks(), 1);
    let (_, y, _, _, _) = cell_fields(surface.cells()[0]);
    assert!(approx(y, geometry.content_top()));
}

#[test]
fn empty_cells_are_one_line() {
    let geometry = PageGeometry::default();
    let mut surface = RecordingSurface::new();
    let long = text_of_width(250.0);

    render_table(&mut surface, &geometry, &[60.0, 120.0], &[row(&["", &long])]).unwrap();

    let (_, _, _, empty_h, text) = cell_fields(surface.cells()[0]);
    assert_eq!(text, "");
    assert!(empty_h.is_finite());
    assert_eq!(empty_h, 30.0);
}

#[test]
fn ties_use_nominal_height_for_every_cell() {
    let geometry = PageGeometry::default();
    let mut surface = RecordingSurface::new();
    let text = text_of_width(90.0);

    render_table(&mut surface, &geometry, &[60.0, 60.0], &[row(&[&text, &text])]).unwrap();

    for cell in surface.cells() {
        assert_eq!(cell_fields(cell).3, NOMINAL_LINE_HEIGHT);
    }
}

#[test]
fn mismatched_row_is_rejected_before_drawing() {
    let geometry = PageGeometry::default();
    let mut surface = RecordingSurface::new();
    let rows = vec![row(&["a", "b"]), row(&["only one"])];

    let err = render_table(&mut surface, &geometry, &[60.0, 120.0], &rows).unwrap_err();

    assert!(matches!(err, Error::Layout(_)), "{err}");
    assert!(surface.events.is_empty());
}

#[test]
fn invalid_columns_are_rejected() {
    let geometry = PageGeometry::default();
    let mut surface = RecordingSurface::new();

    let err = render_table(&mut surface, &geometry, &[], &[]).unwrap_err();
    assert!(matches!(err, Error::Layout(_)));

    let err = render_table(&mut surface, &geometry, &[60.0, 0.0], &[row(&["a", "b"])]).unwrap_err();
    assert!(matches!(err, Error::Layout(_)));

    let err = render_table(&mut surface, &geometry, &[-1.0], &[row(&["a"])]).unwrap_err();
    assert!(matches!(err, Error::Layout(_)));
    assert!(surface.events.is_empty());
}

#[test]
fn empty_table_draws_nothing() {
    let geometry = PageGeometry::default();
    let mut surface = RecordingSurface::new();
    let before = surface.cursor();

    render_table(&mut surface, &geometry, &[60.0], &[]).unwrap();

    assert!(surface.events.is_empty());
    assert_eq!(surface.cursor(), before);
}

#[test]
fn surface_errors_propagate() {
    let geometry = PageGeometry::default();
    let mut surface = RecordingSurface::new();
    surface.fail_measure = true;

    let err = render_table(&mut surface, &geometry, &[60.0], &[row(&["a"])]).unwrap_err();
    assert!(matches!(err, Error::Font(_)));
}
