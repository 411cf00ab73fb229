//! Booking confirmation document.
//!
//! [`compose_booking_document`] lays a [`BookingRecord`] out onto a single
//! A4-sized page. The result is a plain description of the page: a stack of
//! [`Section`]s, each holding absolutely positioned shapes and text spans in
//! millimetres, with the origin at the top-left corner and y growing down the
//! page. Nothing is measured against the record to decide placement; every
//! section has a fixed vertical slot, so the same record always produces the
//! same page.
//!
//! ## Sections
//!
//! From top to bottom: a filled header band, the confirmation card, customer
//! details, car details, the pickup and return panels, the payment summary and
//! a filled footer band, each in its own fixed slot.
//!
//! ## Status colours
//!
//! The booking status and the payment status are coloured independently:
//! green for `Confirmed`/`Paid`, amber for `Pending` and red for anything
//! else, including values the storefront sent that we don't recognise.
//!
//! ## Output
//!
//! Writing the page out is left to the caller. [`Document::to_pdf`] serialises
//! it with the standard Helvetica faces, so the bytes depend only on the
//! record.

mod colour;
mod metrics;
mod pdf;
mod sections;

pub use colour::{colours, tone_colour, Colour};
pub use metrics::{fit_text, width_of_text};

use crate::booking::BookingRecord;
use crate::error::ExportError;
use crate::format::{artifact_file_name, Artifact};
use std::io::Write;
use std::path::Path;

/// Millimetres per PostScript point.
pub const MM_PER_PT: f32 = 25.4 / 72.0;

/// A4, in millimetres.
pub const PAGE_SIZE: (f32, f32) = (210.0, 297.0);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Regular,
    Bold,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpanFont {
    pub weight: FontWeight,
    /// Size in points
    pub size: f32,
}

/// Horizontal anchoring of a span relative to its x coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Centre,
    Right,
}

/// A single line of text whose baseline sits at `coords`.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (f32, f32),
    pub align: Align,
}

impl SpanLayout {
    /// x coordinate where the first glyph starts once alignment is applied.
    pub fn left_edge(&self) -> f32 {
        let width = width_of_text(&self.text, self.font.weight, self.font.size);
        match self.align {
            Align::Left => self.coords.0,
            Align::Centre => self.coords.0 - width / 2.0,
            Align::Right => self.coords.0 - width,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stroke {
    pub colour: Colour,
    /// Line width in millimetres
    pub width: f32,
}

/// A filled and/or outlined rectangle, optionally with rounded corners.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Shape {
    pub rect: Rect,
    pub corner_radius: f32,
    pub fill: Option<Colour>,
    pub stroke: Option<Stroke>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Shape(Shape),
    Text(SpanLayout),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Header,
    Confirmation,
    Customer,
    Car,
    Schedule,
    Payment,
    Footer,
}

/// One horizontal slot of the page.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub kind: SectionKind,
    pub top: f32,
    pub bottom: f32,
    /// Painted in order, so shapes come before the text sitting on them
    pub elements: Vec<Element>,
}

impl Section {
    pub fn texts(&self) -> impl Iterator<Item = &SpanLayout> {
        self.elements.iter().filter_map(|e| match e {
            Element::Text(span) => Some(span),
            Element::Shape(_) => None,
        })
    }

    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.elements.iter().filter_map(|e| match e {
            Element::Shape(shape) => Some(shape),
            Element::Text(_) => None,
        })
    }
}

/// A composed single-page booking confirmation.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub booking_id: String,
    pub title: String,
    /// Page width and height in millimetres
    pub size: (f32, f32),
    pub sections: Vec<Section>,
}

impl Document {
    /// `DriveRent_Booking_<id>.pdf`
    pub fn file_name(&self) -> String {
        artifact_file_name(&self.booking_id, Artifact::Document)
    }

    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Every text span on the page, top section first.
    pub fn texts(&self) -> impl Iterator<Item = &SpanLayout> {
        self.sections.iter().flat_map(|s| s.texts())
    }

    pub fn to_pdf(&self) -> Vec<u8> {
        pdf::render(self)
    }

    pub fn write<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        out.write_all(&self.to_pdf())
    }

    /// Write the PDF into `dir` under [`Document::file_name`], returning the path written.
    pub fn save_in<P: AsRef<Path>>(&self, dir: P) -> Result<std::path::PathBuf, ExportError> {
        let path = dir.as_ref().join(self.file_name());
        std::fs::write(&path, self.to_pdf()).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

/// Lay a booking out onto a single confirmation page.
pub fn compose_booking_document(record: &BookingRecord) -> Document {
    log::debug!("composing confirmation document for booking {}", record.booking_id);

    Document {
        booking_id: record.booking_id.clone(),
        title: format!("DriveRent Booking {}", record.booking_id),
        size: PAGE_SIZE,
        sections: vec![
            sections::header::render(),
            sections::confirmation::render(),
            sections::customer::render(&record.customer),
            sections::car::render(&record.car),
            sections::schedule::render(record),
            sections::payment::render(record),
            sections::footer::render(),
        ],
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::booking::test::sample_record;
    use crate::booking::{BookingStatus, PaymentStatus};

    fn find<'d>(doc: &'d Document, text: &str) -> &'d SpanLayout {
        doc.texts()
            .find(|s| s.text == text)
            .unwrap_or_else(|| panic!("no span with text {text:?}"))
    }

    #[test]
    fn sections_are_stacked_in_order() {
        let doc = compose_booking_document(&sample_record());
        let kinds: Vec<SectionKind> = doc.sections.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::Header,
                SectionKind::Confirmation,
                SectionKind::Customer,
                SectionKind::Car,
                SectionKind::Schedule,
                SectionKind::Payment,
                SectionKind::Footer,
            ]
        );
        for pair in doc.sections.windows(2) {
            assert!(pair[0].bottom <= pair[1].top, "{:?} overlaps", pair[1].kind);
        }
        let header = doc.section(SectionKind::Header).unwrap();
        assert_eq!((header.top, header.bottom), (0.0, 40.0));
        let card = doc.section(SectionKind::Confirmation).unwrap();
        assert_eq!((card.top, card.bottom), (45.0, 70.0));
    }

    #[test]
    fn everything_stays_inside_its_section() {
        let doc = compose_booking_document(&sample_record());
        for section in doc.sections.iter() {
            for shape in section.shapes() {
                assert!(shape.rect.y >= section.top && shape.rect.bottom() <= section.bottom);
                assert!(shape.rect.x >= 0.0 && shape.rect.right() <= doc.size.0);
            }
            for span in section.texts() {
                assert!(span.coords.1 > section.top && span.coords.1 <= section.bottom);
                assert!(span.left_edge() >= 0.0);
            }
        }
    }

    #[test]
    fn renders_record_fields() {
        let doc = compose_booking_document(&sample_record());
        find(&doc, "Name: Jane Doe");
        find(&doc, "Email: jane@example.com");
        find(&doc, "Phone: +1 555 0100");
        find(&doc, "Toyota Camry");
        find(&doc, "Toyota Camry Hybrid");
        find(&doc, "Year: 2022 | Color: Blue");
        find(&doc, "Plate: XYZ-987");
        find(&doc, "1/10/2024");
        find(&doc, "1/13/2024");
        find(&doc, "Downtown Office");
        find(&doc, "Airport Terminal 2");
        let total = find(&doc, "Total: $150.00");
        assert_eq!(total.colour, colours::RED);
    }

    #[test]
    fn missing_optionals_use_placeholders() {
        let mut record = sample_record();
        record.customer.phone = None;
        record.car.year = None;
        record.car.color = None;
        record.car.plate = None;
        let doc = compose_booking_document(&record);
        find(&doc, "Phone: Not provided");
        find(&doc, "Year: 2023 | Color: Silver");
        find(&doc, "Plate: ABC-123");
        // the record itself is untouched
        assert_eq!(record.car.year, None);
    }

    #[test]
    fn status_lines_are_coloured_by_tone() {
        let cases = [
            (BookingStatus::Confirmed, PaymentStatus::Paid, colours::GREEN, colours::GREEN),
            (BookingStatus::Pending, PaymentStatus::Pending, colours::AMBER, colours::AMBER),
            (BookingStatus::Cancelled, PaymentStatus::Refunded, colours::RED, colours::RED),
            (BookingStatus::Completed, PaymentStatus::Failed, colours::RED, colours::RED),
            (BookingStatus::Confirmed, PaymentStatus::Failed, colours::GREEN, colours::RED),
            (
                BookingStatus::Unknown("on hold".into()),
                PaymentStatus::Pending,
                colours::RED,
                colours::AMBER,
            ),
        ];
        for (status, payment, status_colour, payment_colour) in cases {
            let mut record = sample_record();
            record.status = status.clone();
            record.payment_status = payment.clone();
            let doc = compose_booking_document(&record);
            let status_span = find(&doc, &format!("Booking Status: {status}"));
            let payment_span = find(&doc, &format!("Payment Status: {payment}"));
            assert_eq!(status_span.colour, status_colour, "{status:?}");
            assert_eq!(payment_span.colour, payment_colour, "{payment:?}");
        }
    }

    #[test]
    fn header_title_is_centred() {
        let doc = compose_booking_document(&sample_record());
        let title = find(&doc, "DriveRent");
        assert_eq!(title.align, Align::Centre);
        assert_eq!(title.coords.0, PAGE_SIZE.0 / 2.0);
        let width = width_of_text(&title.text, title.font.weight, title.font.size);
        assert!((title.left_edge() + width / 2.0 - PAGE_SIZE.0 / 2.0).abs() < 1e-4);
    }

    #[test]
    fn composition_is_idempotent() {
        let record = sample_record();
        let a = compose_booking_document(&record);
        let b = compose_booking_document(&record);
        assert_eq!(a, b);
        assert_eq!(a.to_pdf(), b.to_pdf());
    }

    #[test]
    fn file_name_uses_booking_id() {
        let doc = compose_booking_document(&sample_record());
        assert_eq!(doc.file_name(), "DriveRent_Booking_BK-1001.pdf");
    }
}
