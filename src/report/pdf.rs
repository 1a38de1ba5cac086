//! PDF backend: draws laid-out pages with `printpdf` builtin fonts and
//! returns the finished document bytes.

use std::io::BufWriter;

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rect,
};

use super::layout::{DrawOp, Font, Page, Rgb};
use crate::config::ReportConfig;
use crate::export::ExportError;

fn mm(pt: f32) -> Mm {
    Mm(pt * 25.4 / 72.0)
}

fn pdf_color(c: Rgb) -> Color {
    Color::Rgb(printpdf::Rgb::new(c.r, c.g, c.b, None))
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    fn get(&self, font: Font) -> &IndirectFontRef {
        match font {
            Font::Regular => &self.regular,
            Font::Bold => &self.bold,
        }
    }
}

/// Renders `pages` (at least one page is always emitted) as a PDF.
pub fn render(title: &str, config: &ReportConfig, pages: &[Page]) -> Result<Vec<u8>, ExportError> {
    let (width, height) = (mm(config.page_width), mm(config.page_height));
    let (doc, page1, layer1) = PdfDocument::new(title, width, height, "Layer 1");

    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ExportError::Pdf(format!("font error: {e}")))?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ExportError::Pdf(format!("font error: {e}")))?,
    };

    for (i, page) in pages.iter().enumerate() {
        let layer = if i == 0 {
            doc.get_page(page1).get_layer(layer1)
        } else {
            let (p, l) = doc.add_page(width, height, format!("Page {}", i + 1));
            doc.get_page(p).get_layer(l)
        };
        for op in &page.ops {
            draw(&layer, op, config.page_height, &fonts);
        }
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| ExportError::Pdf(format!("save error: {e}")))?;
    buf.into_inner()
        .map_err(|e| ExportError::Pdf(format!("buffer error: {e}")))
}

/// Flips from top-left page coordinates to PDF's bottom-left origin.
fn draw(layer: &PdfLayerReference, op: &DrawOp, page_height: f32, fonts: &Fonts) {
    match op {
        DrawOp::Text { text, x, y, size, font, color } => {
            layer.set_fill_color(pdf_color(*color));
            layer.use_text(text.as_str(), *size, mm(*x), mm(page_height - y), fonts.get(*font));
        }
        DrawOp::Rect { x, y, width, height, color } => {
            layer.set_fill_color(pdf_color(*color));
            let rect = Rect::new(
                mm(*x),
                mm(page_height - (y + height)),
                mm(x + width),
                mm(page_height - y),
            )
            .with_mode(PaintMode::Fill);
            layer.add_rect(rect);
        }
        DrawOp::Line { x1, y1, x2, y2, thickness, color } => {
            layer.set_outline_color(pdf_color(*color));
            layer.set_outline_thickness(*thickness);
            layer.add_line(Line {
                points: vec![
                    (Point::new(mm(*x1), mm(page_height - y1)), false),
                    (Point::new(mm(*x2), mm(page_height - y2)), false),
                ],
                is_closed: false,
            });
        }
    }
}
