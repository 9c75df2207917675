//! Page canvas: cursor, font and colour state plus the vector primitives the
//! resume sections are drawn with.
//!
//! All coordinates are millimetres with the origin at the top-left corner of
//! an A4 portrait page; they are converted to PDF points (bottom-left origin)
//! only when an operation is emitted. A canvas is created per render call and
//! consumed by `finish`, which serialises the single page with `lopdf`.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::resume::color::Color;
use crate::resume::font_metrics::{FontSpec, FontStyle, MM_PER_PT};
use crate::resume::wrap::{line_count, wrap_lines};
use crate::resume::RenderError;

pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;
pub const LEFT_MARGIN: f32 = 12.0;
pub const RIGHT_MARGIN: f32 = 12.0;
pub const TOP_MARGIN: f32 = 10.0;
/// Content below this line is considered page overflow.
pub const BOTTOM_MARGIN: f32 = 10.0;
pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - LEFT_MARGIN - RIGHT_MARGIN;
/// Horizontal padding between a cell's edge and its text.
pub const CELL_MARGIN: f32 = 1.0;

/// Bezier control-point factor for quarter circles.
const KAPPA: f32 = 0.552_284_8;

// ────────────────────────────────────────────────────────────────────────────
// Drawing vocabulary
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Fill,
    Stroke,
    FillStroke,
}

impl Paint {
    fn operator(self) -> &'static str {
        match self {
            Paint::Fill => "f",
            Paint::Stroke => "S",
            Paint::FillStroke => "B",
        }
    }

    fn fills(self) -> bool {
        matches!(self, Paint::Fill | Paint::FillStroke)
    }

    fn strokes(self) -> bool {
        matches!(self, Paint::Stroke | Paint::FillStroke)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// Where the cursor goes after a cell is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Next {
    /// Immediately right of the cell, same row.
    Right,
    /// Left margin of the row below.
    NewLine,
}

/// A clickable region pointing at an external URI.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkArea {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub uri: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Canvas
// ────────────────────────────────────────────────────────────────────────────

pub struct Canvas {
    ops: Vec<Operation>,
    links: Vec<LinkArea>,
    x: f32,
    y: f32,
    font: FontSpec,
    text_color: Color,
    fill_color: Color,
    draw_color: Color,
    line_width: f32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            links: Vec::new(),
            x: LEFT_MARGIN,
            y: TOP_MARGIN,
            font: FontSpec::regular(12.0),
            text_color: Color::rgb(0, 0, 0),
            fill_color: Color::rgb(0, 0, 0),
            draw_color: Color::rgb(0, 0, 0),
            line_width: 0.2,
        }
    }

    // ── Cursor ───────────────────────────────────────────────────────────────

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    /// Moves the cursor to `y` and back to the left margin.
    pub fn set_y(&mut self, y: f32) {
        self.x = LEFT_MARGIN;
        self.y = y;
    }

    pub fn set_xy(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Line feed: left margin, `h` further down.
    pub fn ln(&mut self, h: f32) {
        self.x = LEFT_MARGIN;
        self.y += h;
    }

    /// True once the cursor has passed the printable area of the page.
    pub fn overflowed(&self) -> bool {
        self.y > PAGE_HEIGHT - BOTTOM_MARGIN
    }

    // ── Style state ──────────────────────────────────────────────────────────

    pub fn set_font(&mut self, font: FontSpec) {
        self.font = font;
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    pub fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
    }

    pub fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    /// Width of `s` in the current font, in millimetres.
    pub fn string_width(&self, s: &str) -> f32 {
        self.font.string_width(s)
    }

    pub fn links(&self) -> &[LinkArea] {
        &self.links
    }

    // ── Shapes ───────────────────────────────────────────────────────────────

    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, paint: Paint) {
        self.begin_paint(paint);
        self.ops.push(Operation::new(
            "re",
            vec![
                to_pt(x).into(),
                pdf_y(y + h).into(),
                to_pt(w).into(),
                to_pt(h).into(),
            ],
        ));
        self.ops.push(Operation::new(paint.operator(), vec![]));
    }

    /// Rectangle with quarter-circle corners; the radius is capped at half the shorter side.
    pub fn rounded_rect(&mut self, x: f32, y: f32, w: f32, h: f32, radius: f32, paint: Paint) {
        let r = radius.min(w / 2.0).min(h / 2.0);
        if r <= 0.0 {
            self.rect(x, y, w, h, paint);
            return;
        }
        let k = KAPPA * r;
        let (right, bottom) = (x + w, y + h);

        self.begin_paint(paint);
        self.move_to(x + r, y);
        self.line_to(right - r, y);
        self.curve_to((right - r + k, y), (right, y + r - k), (right, y + r));
        self.line_to(right, bottom - r);
        self.curve_to((right, bottom - r + k), (right - r + k, bottom), (right - r, bottom));
        self.line_to(x + r, bottom);
        self.curve_to((x + r - k, bottom), (x, bottom - r + k), (x, bottom - r));
        self.line_to(x, y + r);
        self.curve_to((x, y + r - k), (x + r - k, y), (x + r, y));
        self.ops.push(Operation::new("h", vec![]));
        self.ops.push(Operation::new(paint.operator(), vec![]));
    }

    /// Ellipse inscribed in the box at (`x`, `y`) of size `w` × `h`.
    pub fn ellipse(&mut self, x: f32, y: f32, w: f32, h: f32, paint: Paint) {
        let (rx, ry) = (w / 2.0, h / 2.0);
        let (cx, cy) = (x + rx, y + ry);
        let (kx, ky) = (KAPPA * rx, KAPPA * ry);

        self.begin_paint(paint);
        self.move_to(cx + rx, cy);
        self.curve_to((cx + rx, cy + ky), (cx + kx, cy + ry), (cx, cy + ry));
        self.curve_to((cx - kx, cy + ry), (cx - rx, cy + ky), (cx - rx, cy));
        self.curve_to((cx - rx, cy - ky), (cx - kx, cy - ry), (cx, cy - ry));
        self.curve_to((cx + kx, cy - ry), (cx + rx, cy - ky), (cx + rx, cy));
        self.ops.push(Operation::new("h", vec![]));
        self.ops.push(Operation::new(paint.operator(), vec![]));
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.begin_paint(Paint::Stroke);
        self.move_to(x1, y1);
        self.line_to(x2, y2);
        self.ops.push(Operation::new("S", vec![]));
    }

    // ── Text ─────────────────────────────────────────────────────────────────

    /// Places one line of text in a `w` × `h` cell at the cursor, then moves the cursor.
    ///
    /// A zero width extends the cell to the right margin. Text sits `CELL_MARGIN`
    /// inside the left edge (or is centred) and is vertically
    /// centred. With a `link`, the text's bounding box becomes clickable.
    pub fn cell(&mut self, w: f32, h: f32, text: &str, align: Align, link: Option<&str>, next: Next) {
        let w = if w == 0.0 {
            PAGE_WIDTH - RIGHT_MARGIN - self.x
        } else {
            w
        };

        if !text.is_empty() {
            let text_w = self.string_width(text);
            let dx = match align {
                Align::Left => CELL_MARGIN,
                Align::Center => (w - text_w) / 2.0,
            };
            let font_h = self.font.size_mm();
            let baseline = self.y + 0.5 * h + 0.3 * font_h;
            self.draw_text(self.x + dx, baseline, text);

            if let Some(uri) = link {
                self.links.push(LinkArea {
                    x: self.x + dx,
                    y: self.y + 0.5 * h - 0.5 * font_h,
                    w: text_w,
                    h: font_h,
                    uri: uri.to_string(),
                });
            }
        }

        match next {
            Next::Right => self.x += w,
            Next::NewLine => self.ln(h),
        }
    }

    /// Draws `text` word-wrapped to width `w`, one `h`-high row per line, every
    /// row starting at the current x. Leaves the cursor at the left margin
    /// below the last row and returns the number of rows drawn.
    pub fn multi_cell(&mut self, w: f32, h: f32, text: &str) -> usize {
        let lines = wrap_lines(text, &self.font, w - 2.0 * CELL_MARGIN);
        let x0 = self.x;
        for line in &lines {
            self.x = x0;
            self.cell(w, h, line, Align::Left, None, Next::NewLine);
        }
        self.x = LEFT_MARGIN;
        lines.len()
    }

    fn draw_text(&mut self, x: f32, baseline: f32, text: &str) {
        let [r, g, b] = self.text_color.components();
        self.ops
            .push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
        self.ops.push(Operation::new("BT", vec![]));
        self.ops.push(Operation::new(
            "Tf",
            vec![
                Object::Name(self.font.resource_name().as_bytes().to_vec()),
                self.font.size_pt.into(),
            ],
        ));
        self.ops.push(Operation::new(
            "Td",
            vec![to_pt(x).into(), pdf_y(baseline).into()],
        ));
        self.ops.push(Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        ));
        self.ops.push(Operation::new("ET", vec![]));

        if self.font.underline {
            let top = baseline + self.font.underline_offset();
            let thickness = self.font.underline_thickness();
            let width = self.string_width(text);
            self.ops.push(Operation::new(
                "re",
                vec![
                    to_pt(x).into(),
                    pdf_y(top + thickness).into(),
                    to_pt(width).into(),
                    to_pt(thickness).into(),
                ],
            ));
            self.ops.push(Operation::new("f", vec![]));
        }
    }

    // ── Path helpers ─────────────────────────────────────────────────────────

    fn begin_paint(&mut self, paint: Paint) {
        if paint.fills() {
            let [r, g, b] = self.fill_color.components();
            self.ops
                .push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
        }
        if paint.strokes() {
            let [r, g, b] = self.draw_color.components();
            self.ops
                .push(Operation::new("RG", vec![r.into(), g.into(), b.into()]));
            self.ops
                .push(Operation::new("w", vec![to_pt(self.line_width).into()]));
        }
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.ops
            .push(Operation::new("m", vec![to_pt(x).into(), pdf_y(y).into()]));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.ops
            .push(Operation::new("l", vec![to_pt(x).into(), pdf_y(y).into()]));
    }

    fn curve_to(&mut self, c1: (f32, f32), c2: (f32, f32), end: (f32, f32)) {
        self.ops.push(Operation::new(
            "c",
            vec![
                to_pt(c1.0).into(),
                pdf_y(c1.1).into(),
                to_pt(c2.0).into(),
                pdf_y(c2.1).into(),
                to_pt(end.0).into(),
                pdf_y(end.1).into(),
            ],
        ));
    }

    // ── Output ───────────────────────────────────────────────────────────────

    /// Serialises the page into a complete single-page PDF document.
    pub fn finish(self) -> Result<Vec<u8>, RenderError> {
        let mut doc = Document::with_version("1.4");
        let pages_id = doc.new_object_id();

        let mut fonts = Dictionary::new();
        for style in [
            FontStyle::Regular,
            FontStyle::Bold,
            FontStyle::Italic,
            FontStyle::BoldItalic,
        ] {
            let spec = FontSpec::helvetica(style, 0.0);
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => spec.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(spec.resource_name(), font_id);
        }
        let resources_id = doc.add_object(dictionary! { "Font" => fonts });

        let content = Content {
            operations: self.ops,
        };
        let encoded = content
            .encode()
            .map_err(|e| RenderError::Encode(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

        let annotations: Vec<ObjectId> = self
            .links
            .iter()
            .map(|link| doc.add_object(link_annotation(link)))
            .collect();

        let mut page = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.0_f32.into(), 0.0_f32.into(), to_pt(PAGE_WIDTH).into(), to_pt(PAGE_HEIGHT).into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        };
        if !annotations.is_empty() {
            page.set(
                "Annots",
                Object::Array(annotations.into_iter().map(Object::Reference).collect()),
            );
        }
        let page_id = doc.add_object(page);

        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => Object::Integer(1),
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf)
            .map_err(|e| RenderError::Write(e.to_string()))?;
        Ok(buf)
    }

    #[cfg(test)]
    pub(crate) fn x(&self) -> f32 {
        self.x
    }

    #[cfg(test)]
    pub(crate) fn texts(&self) -> Vec<String> {
        self.ops
            .iter()
            .filter(|op| op.operator == "Tj")
            .filter_map(|op| match op.operands.first() {
                Some(Object::String(bytes, _)) => {
                    Some(bytes.iter().map(|&b| b as char).collect())
                }
                _ => None,
            })
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn operator_count(&self, operator: &str) -> usize {
        self.ops.iter().filter(|op| op.operator == operator).count()
    }
}

/// Rows a `w`-wide multi-cell needs for `text` in `font`, without a canvas.
pub fn wrapped_line_count(font: &FontSpec, w: f32, text: &str) -> usize {
    line_count(text, font, w - 2.0 * CELL_MARGIN)
}

/// Bytes escaped in a link target: controls, space and everything non-ASCII.
const URI_ESCAPES: &AsciiSet = &CONTROLS.add(b' ');

/// URI actions must be 7-bit ASCII, so non-ASCII targets are UTF-8 percent-encoded.
fn encode_uri(uri: &str) -> String {
    utf8_percent_encode(uri, URI_ESCAPES).to_string()
}

fn link_annotation(link: &LinkArea) -> Dictionary {
    dictionary! {
        "Type" => "Annot",
        "Subtype" => "Link",
        "Rect" => vec![
            to_pt(link.x).into(),
            pdf_y(link.y + link.h).into(),
            to_pt(link.x + link.w).into(),
            pdf_y(link.y).into(),
        ],
        "Border" => vec![Object::Integer(0), Object::Integer(0), Object::Integer(0)],
        "A" => dictionary! {
            "S" => "URI",
            "URI" => Object::string_literal(encode_uri(&link.uri)),
        },
    }
}

fn to_pt(mm: f32) -> f32 {
    mm / MM_PER_PT
}

/// Top-down millimetre y to bottom-up PDF points.
fn pdf_y(y: f32) -> f32 {
    to_pt(PAGE_HEIGHT - y)
}

/// Single-byte encoding for the standard fonts; anything outside Latin-1 becomes `?`.
fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| if (c as u32) <= 255 { c as u8 } else { b'?' })
        .collect()
}
