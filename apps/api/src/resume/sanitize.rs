//! Text sanitiser for the single-byte Helvetica encoding.
//!
//! The standard PDF fonts used by the resume only cover the Latin-1 range, so
//! every string that reaches the page goes through `sanitize` first.

use unicode_normalization::char::decompose_canonical;

/// Typographic characters with a plain Latin-1 stand-in.
const REPLACEMENTS: &[(char, &str)] = &[
    ('\u{2018}', "'"),   // left single quote
    ('\u{2019}', "'"),   // right single quote
    ('\u{201C}', "\""),  // left double quote
    ('\u{201D}', "\""),  // right double quote
    ('\u{2013}', "-"),   // en dash
    ('\u{2014}', "--"),  // em dash
    ('\u{2026}', "..."), // ellipsis
    ('\u{00A0}', " "),   // non-breaking space
    ('\u{200B}', ""),    // zero-width space
    ('\u{200D}', ""),    // zero-width joiner
    ('\u{FEFF}', ""),    // BOM / zero-width no-break space
];

/// Pictographic and symbol blocks that are deleted outright.
const STRIPPED_RANGES: &[(u32, u32)] = &[
    (0xFE00, 0xFE0F),   // variation selectors
    (0x2702, 0x27B0),   // dingbats
    (0x1F600, 0x1F64F), // emoticons
    (0x1F300, 0x1F5FF), // misc symbols and pictographs
    (0x1F680, 0x1F6FF), // transport and map
    (0x1F700, 0x1F77F), // alchemical
    (0x1F780, 0x1F7FF), // geometric shapes extended
    (0x1F800, 0x1F8FF), // supplemental arrows-c
    (0x1F900, 0x1F9FF), // supplemental symbols and pictographs
    (0x1FA00, 0x1FA6F), // chess symbols
    (0x1FA70, 0x1FAFF), // symbols and pictographs extended-a
    (0x2600, 0x26FF),   // misc symbols
    (0x203C, 0x3299),   // punctuation, letterlike, arrows ... enclosed CJK
];

fn is_stripped(c: char) -> bool {
    let code = c as u32;
    STRIPPED_RANGES
        .iter()
        .any(|&(lo, hi)| (lo..=hi).contains(&code))
}

fn is_latin1(c: char) -> bool {
    (c as u32) < 0x100
}

/// Latin-1 and drawable: C0/C1 control codes are excluded except the line feed,
/// which the wrapper treats as a hard break.
fn is_printable_latin1(c: char) -> bool {
    is_latin1(c) && (c == '\n' || !c.is_control())
}

/// Maps arbitrary text onto the Latin-1 repertoire the page fonts can draw.
///
/// Order matters: smart punctuation is substituted before the symbol ranges
/// are stripped, since the dashes and ellipsis sit inside a stripped block.
/// Characters with a canonical decomposition keep only their Latin-1 parts,
/// which turns accented letters into their base letter; anything with no
/// Latin-1 part is dropped. Tabs become spaces and other control codes
/// except `\n` are removed. The result is trimmed.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for c in text.chars() {
        if let Some((_, repl)) = REPLACEMENTS.iter().find(|(from, _)| *from == c) {
            out.push_str(repl);
            continue;
        }
        if is_stripped(c) {
            continue;
        }
        if c == '\t' {
            out.push(' ');
            continue;
        }

        let mut parts = Vec::with_capacity(2);
        decompose_canonical(c, |d| parts.push(d));
        if parts.len() == 1 && parts[0] == c {
            if is_printable_latin1(c) {
                out.push(c);
            }
        } else {
            out.extend(parts.into_iter().filter(|d| is_printable_latin1(*d)));
        }
    }

    out.trim().to_string()
}
