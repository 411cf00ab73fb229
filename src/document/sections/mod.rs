//! The fixed slots of the confirmation page.
//!
//! | Section         | Slot (mm) |
//! |-----------------|-----------|
//! | header band     | 0-40      |
//! | confirmation    | 45-70     |
//! | customer        | 80-105    |
//! | car             | 115-165   |
//! | pickup / return | 170-225   |
//! | payment         | 230-265   |
//! | footer band     | 270-290   |
//!
//! Content sits between the page margins unless it is a full-bleed band.

pub mod car;
pub mod confirmation;
pub mod customer;
pub mod footer;
pub mod header;
pub mod payment;
pub mod schedule;

use super::{Align, Colour, Element, FontWeight, Rect, Shape, SpanFont, SpanLayout, Stroke};

pub(crate) const MARGIN: f32 = 20.0;
pub(crate) const CONTENT_WIDTH: f32 = 170.0;
pub(crate) const CENTRE_X: f32 = 105.0;
/// Inset of text from the edge of a boxed panel
pub(crate) const PANEL_PADDING: f32 = 5.0;

pub(crate) const SIZE_HEADING: f32 = 14.0;
pub(crate) const SIZE_BODY: f32 = 11.0;

pub(crate) fn span(
    text: impl Into<String>,
    weight: FontWeight,
    size: f32,
    colour: Colour,
    coords: (f32, f32),
    align: Align,
) -> Element {
    Element::Text(SpanLayout {
        text: text.into(),
        font: SpanFont { weight, size },
        colour,
        coords,
        align,
    })
}

/// Left-aligned section heading at the margin.
pub(crate) fn heading(text: &str, colour: Colour, y: f32) -> Element {
    span(
        text,
        FontWeight::Bold,
        SIZE_HEADING,
        colour,
        (MARGIN, y),
        Align::Left,
    )
}

pub(crate) fn band(rect: Rect, fill: Colour) -> Element {
    Element::Shape(Shape {
        rect,
        corner_radius: 0.0,
        fill: Some(fill),
        stroke: None,
    })
}

pub(crate) fn panel(rect: Rect, corner_radius: f32, fill: Colour, border: Colour) -> Element {
    Element::Shape(Shape {
        rect,
        corner_radius,
        fill: Some(fill),
        stroke: Some(Stroke {
            colour: border,
            width: 0.5,
        }),
    })
}
