use super::{panel, span, CENTRE_X, CONTENT_WIDTH, MARGIN};
use crate::document::{colours, Align, FontWeight, Rect, Section, SectionKind};

pub const CAPTION: &str = "BOOKING CONFIRMATION";

pub fn render() -> Section {
    Section {
        kind: SectionKind::Confirmation,
        top: 45.0,
        bottom: 70.0,
        elements: vec![
            panel(
                Rect::new(MARGIN, 45.0, CONTENT_WIDTH, 25.0),
                3.0,
                colours::CARD_FILL,
                colours::PRIMARY,
            ),
            span(
                CAPTION,
                FontWeight::Bold,
                16.0,
                colours::PRIMARY_DARK,
                (CENTRE_X, 59.5),
                Align::Centre,
            ),
        ],
    }
}
