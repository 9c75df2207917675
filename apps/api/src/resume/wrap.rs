//! Greedy word wrap shared by the dry-run measurement and the drawing pass.
//!
//! Cards draw their background before their text, so every variable-height
//! block is measured with `wrap_lines` first and drawn with the very same
//! lines afterwards. Measurement and drawing must never diverge.

use crate::resume::font_metrics::FontSpec;

/// Breaks `text` into lines no wider than `max_width` millimetres.
///
/// Hard line breaks (`\n`) always start a new line and an empty paragraph
/// yields an empty line. Words are separated by single spaces on output; a
/// word wider than a whole line is split between characters. Empty text
/// produces no lines.
pub fn wrap_lines(text: &str, font: &FontSpec, max_width: f32) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let space_w = font.string_width(" ");
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim_end_matches('\r');
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in paragraph.split_whitespace() {
            let word_w = font.string_width(word);

            if !current.is_empty() && current_width + space_w + word_w <= max_width {
                current.push(' ');
                current.push_str(word);
                current_width += space_w + word_w;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0.0;
            }

            if word_w <= max_width {
                current.push_str(word);
                current_width = word_w;
            } else {
                // Overlong word: hard-break it, keep the tail open for the next word.
                for c in word.chars() {
                    let mut buf = [0u8; 4];
                    let c_w = font.string_width(c.encode_utf8(&mut buf));
                    if !current.is_empty() && current_width + c_w > max_width {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0.0;
                    }
                    current.push(c);
                    current_width += c_w;
                }
            }
        }

        lines.push(current);
    }

    lines
}

/// Dry run: the number of lines `text` wraps to, without producing any output.
pub fn line_count(text: &str, font: &FontSpec, max_width: f32) -> usize {
    wrap_lines(text, font, max_width).len()
}
