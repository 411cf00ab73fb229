use super::{heading, panel, span, CONTENT_WIDTH, MARGIN, PANEL_PADDING, SIZE_BODY};
use crate::booking::Car;
use crate::document::{colours, Align, FontWeight, Rect, Section, SectionKind};

pub const YEAR_PLACEHOLDER: i32 = 2023;
pub const COLOR_PLACEHOLDER: &str = "Silver";
pub const PLATE_PLACEHOLDER: &str = "ABC-123";

pub fn render(car: &Car) -> Section {
    let year = car.year.unwrap_or(YEAR_PLACEHOLDER);
    let color = car.color.as_deref().unwrap_or(COLOR_PLACEHOLDER);
    let plate = car.plate.as_deref().unwrap_or(PLATE_PLACEHOLDER);
    let x = MARGIN + PANEL_PADDING;

    Section {
        kind: SectionKind::Car,
        top: 115.0,
        bottom: 165.0,
        elements: vec![
            heading("Car Details", colours::TEXT_DARK, 120.0),
            span(
                format!("{} {}", car.brand, car.model),
                FontWeight::Bold,
                13.0,
                colours::PRIMARY,
                (MARGIN, 128.0),
                Align::Left,
            ),
            panel(
                Rect::new(MARGIN, 132.0, CONTENT_WIDTH, 33.0),
                2.0,
                colours::PANEL_FILL,
                colours::PANEL_BORDER,
            ),
            span(
                car.name.as_str(),
                FontWeight::Bold,
                12.0,
                colours::TEXT_DARK,
                (x, 141.0),
                Align::Left,
            ),
            span(
                format!("Year: {year} | Color: {color}"),
                FontWeight::Regular,
                SIZE_BODY,
                colours::TEXT_MUTED,
                (x, 149.0),
                Align::Left,
            ),
            span(
                format!("Plate: {plate}"),
                FontWeight::Regular,
                SIZE_BODY,
                colours::TEXT_MUTED,
                (x, 157.0),
                Align::Left,
            ),
        ],
    }
}
