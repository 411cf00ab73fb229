use super::{band, span, CENTRE_X};
use crate::document::{colours, Align, FontWeight, Rect, Section, SectionKind, PAGE_SIZE};

pub const TITLE: &str = "DriveRent";
pub const SUBTITLE: &str = "Premium Car Rental Service";

pub fn render() -> Section {
    Section {
        kind: SectionKind::Header,
        top: 0.0,
        bottom: 40.0,
        elements: vec![
            band(Rect::new(0.0, 0.0, PAGE_SIZE.0, 40.0), colours::PRIMARY),
            span(
                TITLE,
                FontWeight::Bold,
                28.0,
                colours::WHITE,
                (CENTRE_X, 20.0),
                Align::Centre,
            ),
            span(
                SUBTITLE,
                FontWeight::Regular,
                12.0,
                colours::PRIMARY_TINT,
                (CENTRE_X, 30.0),
                Align::Centre,
            ),
        ],
    }
}
