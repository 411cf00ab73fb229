use super::{band, span, CENTRE_X};
use crate::document::{colours, Align, FontWeight, Rect, Section, SectionKind, PAGE_SIZE};

pub const THANKS: &str = "Thank you for choosing DriveRent!";
pub const CONTACT: &str = "Questions? support@driverent.com | +1 (555) 123-4567";

pub fn render() -> Section {
    Section {
        kind: SectionKind::Footer,
        top: 270.0,
        bottom: 290.0,
        elements: vec![
            band(Rect::new(0.0, 270.0, PAGE_SIZE.0, 20.0), colours::FOOTER),
            span(
                THANKS,
                FontWeight::Bold,
                12.0,
                colours::WHITE,
                (CENTRE_X, 278.0),
                Align::Centre,
            ),
            span(
                CONTACT,
                FontWeight::Regular,
                9.0,
                colours::FOOTER_MUTED,
                (CENTRE_X, 285.0),
                Align::Centre,
            ),
        ],
    }
}
