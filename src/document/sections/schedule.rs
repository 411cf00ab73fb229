//! Side-by-side pickup and return panels.

use super::{heading, panel, span, MARGIN, PANEL_PADDING, SIZE_BODY};
use crate::booking::BookingRecord;
use crate::document::{
    colours, fit_text, Align, Colour, Element, FontWeight, Rect, Section, SectionKind,
};
use crate::format::format_date;
use chrono::NaiveDate;

const PANEL_TOP: f32 = 180.0;
const PANEL_WIDTH: f32 = 82.0;
const PANEL_HEIGHT: f32 = 45.0;
const PANEL_GAP: f32 = 6.0;
const SIZE_LOCATION: f32 = 10.0;

struct Stop<'r> {
    caption: &'static str,
    date: NaiveDate,
    location: &'r str,
    fill: Colour,
    accent: Colour,
}

pub fn render(record: &BookingRecord) -> Section {
    let pickup = Stop {
        caption: "PICKUP",
        date: record.pickup_date,
        location: &record.pickup_location,
        fill: colours::PICKUP_FILL,
        accent: colours::PICKUP_ACCENT,
    };
    let dropoff = Stop {
        caption: "RETURN",
        date: record.dropoff_date,
        location: &record.return_location,
        fill: colours::RETURN_FILL,
        accent: colours::RETURN_ACCENT,
    };

    let mut elements = vec![heading("Rental Period & Locations", colours::TEXT_DARK, 175.0)];
    elements.extend(render_stop(&pickup, MARGIN));
    elements.extend(render_stop(&dropoff, MARGIN + PANEL_WIDTH + PANEL_GAP));

    Section {
        kind: SectionKind::Schedule,
        top: 170.0,
        bottom: 225.0,
        elements,
    }
}

fn render_stop(stop: &Stop, left: f32) -> Vec<Element> {
    let x = left + PANEL_PADDING;
    let max_width = PANEL_WIDTH - PANEL_PADDING * 2.0;

    vec![
        panel(
            Rect::new(left, PANEL_TOP, PANEL_WIDTH, PANEL_HEIGHT),
            2.0,
            stop.fill,
            stop.accent,
        ),
        span(
            stop.caption,
            FontWeight::Bold,
            12.0,
            stop.accent,
            (x, PANEL_TOP + 10.0),
            Align::Left,
        ),
        span(
            format_date(stop.date),
            FontWeight::Bold,
            SIZE_BODY,
            colours::TEXT_DARK,
            (x, PANEL_TOP + 20.0),
            Align::Left,
        ),
        span(
            fit_text(stop.location, FontWeight::Regular, SIZE_LOCATION, max_width),
            FontWeight::Regular,
            SIZE_LOCATION,
            colours::TEXT_MUTED,
            (x, PANEL_TOP + 30.0),
            Align::Left,
        ),
    ]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::booking::test::sample_record;

    #[test]
    fn panels_sit_side_by_side() {
        let section = render(&sample_record());
        let rects: Vec<Rect> = section.shapes().map(|s| s.rect).collect();
        assert_eq!(rects.len(), 2);
        assert!(rects[0].right() < rects[1].x);
        assert_eq!(rects[0].y, rects[1].y);
        assert_eq!(rects[1].right(), MARGIN + 170.0);
    }

    #[test]
    fn pickup_is_blue_and_return_is_green() {
        let section = render(&sample_record());
        let captions: Vec<(&str, Colour)> = section
            .texts()
            .filter(|s| s.text == "PICKUP" || s.text == "RETURN")
            .map(|s| (s.text.as_str(), s.colour))
            .collect();
        assert_eq!(
            captions,
            vec![
                ("PICKUP", colours::PICKUP_ACCENT),
                ("RETURN", colours::RETURN_ACCENT)
            ]
        );
        let borders: Vec<Colour> = section
            .elements
            .iter()
            .filter_map(|e| match e {
                Element::Shape(shape) => shape.stroke.map(|s| s.colour),
                Element::Text(_) => None,
            })
            .collect();
        assert_eq!(borders, vec![colours::PICKUP_ACCENT, colours::RETURN_ACCENT]);
    }

    #[test]
    fn long_locations_are_shortened_to_the_panel() {
        let mut record = sample_record();
        record.return_location =
            "International Airport, Terminal 5, Long-Stay Car Park, Level 3, Bay 117".to_string();
        let section = render(&record);
        let location = section
            .texts()
            .find(|s| s.text.starts_with("International"))
            .unwrap();
        assert!(location.text.ends_with("..."));
    }
}
