use super::{heading, span, MARGIN, SIZE_BODY};
use crate::booking::Customer;
use crate::document::{colours, Align, FontWeight, Section, SectionKind};

pub const PHONE_PLACEHOLDER: &str = "Not provided";

pub fn render(customer: &Customer) -> Section {
    let phone = customer.phone.as_deref().unwrap_or(PHONE_PLACEHOLDER);
    let lines = [
        format!("Name: {}", customer.name),
        format!("Email: {}", customer.email),
        format!("Phone: {phone}"),
    ];

    let mut elements = vec![heading("Customer Information", colours::TEXT_DARK, 85.0)];
    for (i, line) in lines.into_iter().enumerate() {
        elements.push(span(
            line,
            FontWeight::Regular,
            SIZE_BODY,
            colours::TEXT_MUTED,
            (MARGIN, 93.0 + 6.0 * i as f32),
            Align::Left,
        ));
    }

    Section {
        kind: SectionKind::Customer,
        top: 80.0,
        bottom: 105.0,
        elements,
    }
}
