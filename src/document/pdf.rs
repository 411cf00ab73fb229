//! Serialisation of a composed [`Document`] to PDF.
//!
//! Layout coordinates are millimetres from the top-left corner; PDF user space
//! is points from the bottom-left, so every y is flipped against the page
//! height. Text uses the base-14 Helvetica faces in WinAnsi encoding and the
//! output carries no timestamps, so identical documents give identical bytes.

use super::{Document, Element, FontWeight, Shape, SpanLayout, MM_PER_PT};
use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

const FONT_REGULAR: Name<'static> = Name(b"F1");
const FONT_BOLD: Name<'static> = Name(b"F2");

// control point offset for approximating a quarter circle with a cubic
const KAPPA: f32 = 0.552_284_8;

fn pt(mm: f32) -> f32 {
    mm / MM_PER_PT
}

pub fn render(doc: &Document) -> Vec<u8> {
    let mut alloc = Ref::new(1);
    let catalog_id = alloc.bump();
    let page_tree_id = alloc.bump();
    let page_id = alloc.bump();
    let content_id = alloc.bump();
    let regular_id = alloc.bump();
    let bold_id = alloc.bump();
    let info_id = alloc.bump();

    let width = pt(doc.size.0);
    let height = pt(doc.size.1);

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id).kids([page_id]).count(1);

    let mut page = pdf.page(page_id);
    page.media_box(Rect::new(0.0, 0.0, width, height));
    page.parent(page_tree_id);
    page.contents(content_id);
    page.resources()
        .fonts()
        .pair(FONT_REGULAR, regular_id)
        .pair(FONT_BOLD, bold_id);
    page.finish();

    pdf.type1_font(regular_id)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));
    pdf.type1_font(bold_id)
        .base_font(Name(b"Helvetica-Bold"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    let mut content = Content::new();
    for section in doc.sections.iter() {
        for element in section.elements.iter() {
            match element {
                Element::Shape(shape) => draw_shape(&mut content, shape, height),
                Element::Text(span) => draw_text(&mut content, span, height),
            }
        }
    }
    pdf.stream(content_id, &content.finish());

    pdf.document_info(info_id)
        .title(TextStr(&doc.title))
        .creator(TextStr(concat!("driverent-export v", env!("CARGO_PKG_VERSION"))));

    pdf.finish()
}

fn draw_shape(content: &mut Content, shape: &Shape, page_height: f32) {
    content.save_state();
    if let Some(fill) = shape.fill {
        let (r, g, b) = fill.as_fractions();
        content.set_fill_rgb(r, g, b);
    }
    if let Some(stroke) = shape.stroke {
        let (r, g, b) = stroke.colour.as_fractions();
        content
            .set_stroke_rgb(r, g, b)
            .set_line_width(pt(stroke.width));
    }

    let x = pt(shape.rect.x);
    let y = page_height - pt(shape.rect.bottom());
    let w = pt(shape.rect.width);
    let h = pt(shape.rect.height);
    if shape.corner_radius > 0.0 {
        rounded_rect(content, x, y, w, h, pt(shape.corner_radius));
    } else {
        content.rect(x, y, w, h);
    }

    match (shape.fill.is_some(), shape.stroke.is_some()) {
        (true, true) => content.fill_nonzero_and_stroke(),
        (true, false) => content.fill_nonzero(),
        (false, true) => content.stroke(),
        (false, false) => content.end_path(),
    };
    content.restore_state();
}

fn rounded_rect(content: &mut Content, x: f32, y: f32, w: f32, h: f32, radius: f32) {
    let r = radius.min(w / 2.0).min(h / 2.0);
    let k = r * KAPPA;
    content
        .move_to(x + r, y)
        .line_to(x + w - r, y)
        .cubic_to(x + w - r + k, y, x + w, y + r - k, x + w, y + r)
        .line_to(x + w, y + h - r)
        .cubic_to(x + w, y + h - r + k, x + w - r + k, y + h, x + w - r, y + h)
        .line_to(x + r, y + h)
        .cubic_to(x + r - k, y + h, x, y + h - r + k, x, y + h - r)
        .line_to(x, y + r)
        .cubic_to(x, y + r - k, x + r - k, y, x + r, y)
        .close_path();
}

fn draw_text(content: &mut Content, span: &SpanLayout, page_height: f32) {
    let font = match span.font.weight {
        FontWeight::Regular => FONT_REGULAR,
        FontWeight::Bold => FONT_BOLD,
    };
    let text = encode_win_ansi(&span.text);
    let (r, g, b) = span.colour.as_fractions();
    content
        .set_fill_rgb(r, g, b)
        .begin_text()
        .set_font(font, span.font.size)
        .next_line(pt(span.left_edge()), page_height - pt(span.coords.1))
        .show(Str(&text))
        .end_text();
}

/// Encode text for the standard fonts, replacing what WinAnsi can't hold with `?`.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    let mut lossy = false;
    for c in text.chars() {
        let byte = match c {
            ' '..='~' | '\u{a0}'..='\u{ff}' => c as u8,
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '™' => 0x99,
            _ => {
                lossy = true;
                b'?'
            }
        };
        out.push(byte);
    }
    if lossy {
        log::warn!("replaced characters the standard PDF fonts can't show in {text:?}");
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::booking::test::sample_record;
    use crate::document::compose_booking_document;

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn encodes_latin1_and_typographic_punctuation() {
        assert_eq!(encode_win_ansi("Hi"), b"Hi".to_vec());
        assert_eq!(encode_win_ansi("café"), vec![b'c', b'a', b'f', 0xE9]);
        assert_eq!(encode_win_ansi("€5 – ok"), vec![0x80, b'5', b' ', 0x96, b' ', b'o', b'k']);
    }

    #[test]
    fn replaces_unencodable_characters() {
        assert_eq!(encode_win_ansi("東京"), b"??".to_vec());
    }

    #[test]
    fn writes_a_single_page_pdf() {
        let bytes = compose_booking_document(&sample_record()).to_pdf();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(contains(&bytes, b"/Helvetica-Bold"));
        assert!(contains(&bytes, b"/WinAnsiEncoding"));
        assert!(contains(&bytes, b"(BOOKING CONFIRMATION)"));
        assert!(contains(&bytes, b"/Count 1"));
    }

    #[test]
    fn page_is_a4() {
        assert!((pt(210.0) - 595.276).abs() < 0.01);
        assert!((pt(297.0) - 841.89).abs() < 0.01);
    }
}
