mod error;
mod fonts;
mod layout;
mod model;
mod pdf;
mod report;

pub use error::Error;
pub use layout::{
    Cursor, NOMINAL_LINE_HEIGHT, PARAGRAPH_INDENT, Surface, WrappedCell, estimate_lines,
    height_ratio, render_paragraph, render_table,
};
pub use model::{
    Advance, Align, Block, Border, FontSource, FooterCell, GridCell, PageGeometry, Report,
    RunningFooter, RunningHeader,
};
pub use pdf::PdfSurface;
pub use report::builtin_report;

use std::path::Path;
use std::time::Instant;

/// Render `report` into PDF bytes. Fonts and images named by the report are
/// looked up in `assets`.
pub fn render_report(report: &Report, assets: &Path) -> Result<Vec<u8>, Error> {
    pdf::render(report, assets)
}

pub fn generate_report(report: &Report, assets: &Path, output: &Path) -> Result<(), Error> {
    let t0 = Instant::now();

    let bytes = pdf::render(report, assets)?;
    let t_render = t0.elapsed();

    std::fs::write(output, &bytes).map_err(Error::Io)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: render={:.1}ms, write={:.1}ms, total={:.1}ms (output {} bytes)",
        t_render.as_secs_f64() * 1000.0,
        (t_total - t_render).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        bytes.len(),
    );

    Ok(())
}

/// Read report content from a JSON file.
pub fn load_report(path: &Path) -> Result<Report, Error> {
    let t0 = Instant::now();
    let data = std::fs::read(path)?;
    let report: Report = serde_json::from_slice(&data)?;
    log::info!(
        "Timing: load_content={:.1}ms ({} blocks)",
        t0.elapsed().as_secs_f64() * 1000.0,
        report.blocks.len(),
    );
    Ok(report)
}

/// Write report content as pretty-printed JSON.
pub fn save_report(report: &Report, path: &Path) -> Result<(), Error> {
    let json = serde_json::to_vec_pretty(report)?;
    std::fs::write(path, json)?;
    Ok(())
}
