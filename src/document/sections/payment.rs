use super::{panel, span, CONTENT_WIDTH, MARGIN, PANEL_PADDING, SIZE_BODY, SIZE_HEADING};
use crate::booking::BookingRecord;
use crate::document::{colours, tone_colour, Align, FontWeight, Rect, Section, SectionKind};
use crate::format::format_currency;

pub fn render(record: &BookingRecord) -> Section {
    let x = MARGIN + PANEL_PADDING;

    Section {
        kind: SectionKind::Payment,
        top: 230.0,
        bottom: 265.0,
        elements: vec![
            panel(
                Rect::new(MARGIN, 230.0, CONTENT_WIDTH, 35.0),
                2.0,
                colours::PANEL_FILL,
                colours::PANEL_BORDER,
            ),
            span(
                "Payment Summary",
                FontWeight::Bold,
                SIZE_HEADING,
                colours::TEXT_DARK,
                (x, 238.0),
                Align::Left,
            ),
            span(
                format!("Total: {}", format_currency(record.total_price)),
                FontWeight::Bold,
                18.0,
                colours::RED,
                (x, 247.0),
                Align::Left,
            ),
            span(
                format!("Booking Status: {}", record.status),
                FontWeight::Bold,
                SIZE_BODY,
                tone_colour(record.status.tone()),
                (x, 254.0),
                Align::Left,
            ),
            span(
                format!("Payment Status: {}", record.payment_status),
                FontWeight::Bold,
                SIZE_BODY,
                tone_colour(record.payment_status.tone()),
                (x, 261.0),
                Align::Left,
            ),
        ],
    }
}
