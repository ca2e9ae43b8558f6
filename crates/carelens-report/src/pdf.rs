//! Paginated PDF booking summary.
//!
//! Renders the booking confirmation document: patient identity block,
//! medical-history answers, the selected test, and the booking date. The
//! render is write-only — the document is produced once and never parsed
//! back. A simple line cursor opens a fresh page whenever the current one
//! runs out of lines.

use std::io::BufWriter;

use chrono::{DateTime, Utc};
use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};
use tracing::debug;

use carelens_contracts::{
    error::{CarelensError, CarelensResult},
    patient::PatientDetails,
};

const PAGE_WIDTH: Mm = Mm(210.0);
const PAGE_HEIGHT: Mm = Mm(297.0);
const LEFT_MARGIN: Mm = Mm(20.0);
const TOP_LINE: Mm = Mm(280.0);
const LINE_STEP: Mm = Mm(8.0);
const GAP_STEP: Mm = Mm(4.0);

/// Lines per page before the cursor opens a new one. Conservative: leaves
/// room for the half-step gaps between blocks.
const LINES_PER_PAGE: usize = 30;

/// Line cursor over a growing document.
///
/// Writes advance downward; once a page holds `LINES_PER_PAGE` lines, a new
/// page is appended and the cursor resets to the top.
struct PageCursor<'d> {
    doc: &'d PdfDocumentReference,
    layer: PdfLayerReference,
    y: Mm,
    lines_on_page: usize,
}

impl<'d> PageCursor<'d> {
    fn new(doc: &'d PdfDocumentReference, layer: PdfLayerReference) -> Self {
        Self {
            doc,
            layer,
            y: TOP_LINE,
            lines_on_page: 0,
        }
    }

    fn advance_page_if_full(&mut self) {
        if self.lines_on_page >= LINES_PER_PAGE {
            let (page, layer) = self.doc.add_page(PAGE_WIDTH, PAGE_HEIGHT, "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = TOP_LINE;
            self.lines_on_page = 0;
        }
    }

    fn heading(&mut self, text: &str, font: &IndirectFontRef) {
        self.advance_page_if_full();
        self.layer.use_text(text, 16.0, LEFT_MARGIN, self.y, font);
        self.y -= LINE_STEP;
        self.lines_on_page += 1;
    }

    fn line(&mut self, text: &str, font: &IndirectFontRef) {
        self.advance_page_if_full();
        self.layer.use_text(text, 12.0, LEFT_MARGIN, self.y, font);
        self.y -= LINE_STEP;
        self.lines_on_page += 1;
    }

    fn gap(&mut self) {
        self.y -= GAP_STEP;
    }
}

/// Render the booking summary and return the PDF bytes.
///
/// Field order is fixed: title, identity block (name, age, gender, email,
/// phone), medical-history answers, selected test name, booking date.
pub fn booking_pdf_bytes(
    details: &PatientDetails,
    test_name: &str,
    booked_at: DateTime<Utc>,
) -> CarelensResult<Vec<u8>> {
    let (doc, page1, layer1) =
        PdfDocument::new("Lab Test Booking Report", PAGE_WIDTH, PAGE_HEIGHT, "Layer 1");

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| CarelensError::Export {
            reason: format!("PDF font error: {}", e),
        })?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| CarelensError::Export {
            reason: format!("PDF font error: {}", e),
        })?;

    let layer = doc.get_page(page1).get_layer(layer1);
    let mut cursor = PageCursor::new(&doc, layer);

    cursor.heading("Lab Test Booking Report", &bold);
    cursor.gap();

    // Patient identity block.
    cursor.line(&format!("Patient Name: {}", details.name), &font);
    cursor.line(&format!("Age: {}", details.age), &font);
    let gender = details.gender.map(|g| g.to_string()).unwrap_or_default();
    cursor.line(&format!("Gender: {}", gender), &font);
    cursor.line(&format!("Email: {}", details.email), &font);
    cursor.line(&format!("Phone: {}", details.phone), &font);
    cursor.gap();

    // Medical-history answers, as entered.
    cursor.line("Medical History:", &bold);
    cursor.line(
        &format!("Frequent Fatigue: {}", details.frequent_fatigue),
        &font,
    );
    cursor.line(
        &format!("Unexplained Bruising: {}", details.unexplained_bruising),
        &font,
    );
    cursor.line(
        &format!("Family Blood Disorders: {}", details.family_blood_disorders),
        &font,
    );
    cursor.gap();

    // Test and booking date.
    cursor.line(&format!("Lab Test: {}", test_name), &font);
    cursor.line(&format!("Date: {}", booked_at.format("%B %d, %Y")), &font);

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf).map_err(|e| CarelensError::Export {
        reason: format!("PDF save error: {}", e),
    })?;
    let bytes = buf.into_inner().map_err(|e| CarelensError::Export {
        reason: format!("PDF buffer error: {}", e),
    })?;

    debug!(bytes = bytes.len(), test_name, "booking PDF rendered");
    Ok(bytes)
}

/// The conventional download name for a booking PDF.
pub fn pdf_file_name(details: &PatientDetails, booked_at: DateTime<Utc>) -> String {
    format!("LabTest_{}_{}.pdf", details.name, booked_at.format("%Y%m%d"))
}
