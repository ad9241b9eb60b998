//! PDF rendering for the exported health report.
//!
//! Builds a fixed-layout A4 document entirely in memory: title, generation
//! date, the medication roster table, and a health-log table for the selected
//! date range. The caller decides where (or whether) the bytes land on disk.

use crate::constants::{DATE_FORMAT_COMPACT, REPORT_FILE_PREFIX, REPORT_TITLE};
use crate::db::health_log::HealthLogEntry;
use crate::db::medications::Medication;
use crate::errors::ReportError;
use chrono::NaiveDate;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rgb,
};
use std::io::BufWriter;
use tracing::debug;

const PAGE_WIDTH: Mm = Mm(210.0);
const PAGE_HEIGHT: Mm = Mm(297.0);
const MARGIN_LEFT: Mm = Mm(20.0);
const MARGIN_RIGHT: Mm = Mm(190.0);
const TOP_Y: Mm = Mm(280.0);
const BOTTOM_Y: Mm = Mm(20.0);
const ROW_HEIGHT: Mm = Mm(5.0);

/// Placeholder rendered for absent optional fields.
const PLACEHOLDER: &str = "-";

/// File name for a report generated on the given date:
/// `health_report_<YYYYMMDD>.pdf`.
pub fn report_filename(generated_on: NaiveDate) -> String {
    format!(
        "{}{}.pdf",
        REPORT_FILE_PREFIX,
        generated_on.format(DATE_FORMAT_COMPACT)
    )
}

/// Renders the health report as a complete in-memory PDF.
///
/// The medication table always lists every medication ever registered; the
/// health-log table holds the entries the caller selected. Either may be
/// empty, in which case the table renders header-only.
///
/// # Errors
///
/// Returns `ReportError::Pdf` if the PDF backend fails.
pub fn build_report(
    medications: &[Medication],
    entries: &[HealthLogEntry],
    generated_on: NaiveDate,
) -> Result<Vec<u8>, ReportError> {
    debug!(
        "Rendering PDF report: {} medications, {} log entries",
        medications.len(),
        entries.len()
    );

    let (doc, page, layer) = PdfDocument::new(REPORT_TITLE, PAGE_WIDTH, PAGE_HEIGHT, "Layer 1");
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::Pdf(format!("font error: {e}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ReportError::Pdf(format!("font error: {e}")))?;

    let mut cursor = Cursor {
        doc: &doc,
        layer: doc.get_page(page).get_layer(layer),
        y: TOP_Y,
    };

    // Title and generation date
    cursor.text(REPORT_TITLE, 14.0, MARGIN_LEFT, &bold);
    cursor.advance(Mm(7.0));
    cursor.text(
        &format!("Generated on: {}", generated_on),
        9.0,
        MARGIN_LEFT,
        &regular,
    );
    cursor.advance(Mm(10.0));

    // Medication roster
    cursor.text("Active Medications", 11.0, MARGIN_LEFT, &bold);
    cursor.advance(Mm(6.0));
    cursor.table_header(&[("Name", MARGIN_LEFT), ("Dosage", Mm(110.0))], &bold);
    for med in medications {
        cursor.row(
            &[(med.name.as_str(), MARGIN_LEFT), (med.dosage.as_str(), Mm(110.0))],
            &regular,
        );
    }
    cursor.rule();
    cursor.advance(Mm(10.0));

    // Health log
    cursor.text("Health Log Entries", 11.0, MARGIN_LEFT, &bold);
    cursor.advance(Mm(6.0));
    cursor.table_header(
        &[
            ("Date", MARGIN_LEFT),
            ("Symptom", Mm(60.0)),
            ("Severity", Mm(120.0)),
            ("Notes", Mm(145.0)),
        ],
        &bold,
    );
    for entry in entries {
        let date = entry.date.to_string();
        let severity = entry
            .severity
            .map(|s| s.to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        let symptom = entry.symptom.as_deref().unwrap_or(PLACEHOLDER);
        let notes = entry
            .notes
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(PLACEHOLDER);
        cursor.row(
            &[
                (date.as_str(), MARGIN_LEFT),
                (symptom, Mm(60.0)),
                (severity.as_str(), Mm(120.0)),
                (notes, Mm(145.0)),
            ],
            &regular,
        );
    }
    cursor.rule();

    drop(cursor);

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| ReportError::Pdf(format!("save error: {e}")))?;
    buf.into_inner()
        .map_err(|e| ReportError::Pdf(format!("buffer error: {e}")))
}

/// Tracks the write position on the current page and starts a fresh page
/// when a row would fall below the bottom margin.
struct Cursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: Mm,
}

impl Cursor<'_> {
    fn text(&mut self, text: &str, size: f32, x: Mm, font: &IndirectFontRef) {
        self.layer.use_text(text, size, x, self.y, font);
    }

    fn advance(&mut self, dy: Mm) {
        self.y -= dy;
        if self.y.0 < BOTTOM_Y.0 {
            let (page, layer) = self.doc.add_page(PAGE_WIDTH, PAGE_HEIGHT, "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = TOP_Y;
        }
    }

    /// Draws a thin horizontal rule just above the current baseline.
    fn rule(&mut self) {
        let y = self.y + Mm(1.5);
        let line = Line {
            points: vec![
                (Point::new(MARGIN_LEFT, y), false),
                (Point::new(MARGIN_RIGHT, y), false),
            ],
            is_closed: false,
        };
        self.layer.set_outline_thickness(0.5);
        self.layer
            .set_outline_color(Color::Rgb(Rgb::new(0.5, 0.5, 0.5, None)));
        self.layer.add_line(line);
    }

    /// Renders the bold header row of a table, ruled above and below.
    fn table_header(&mut self, columns: &[(&str, Mm)], bold: &IndirectFontRef) {
        self.rule();
        for &(label, x) in columns {
            self.text(label, 10.0, x, bold);
        }
        self.advance(ROW_HEIGHT);
        self.rule();
    }

    /// Renders one data row.
    fn row(&mut self, cells: &[(&str, Mm)], font: &IndirectFontRef) {
        for &(value, x) in cells {
            self.text(value, 9.0, x, font);
        }
        self.advance(ROW_HEIGHT);
    }
}
