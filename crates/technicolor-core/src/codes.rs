//! Numeric SGR parameter constants and escape sequence assembly.
//!
//! Every escape byte this workspace emits is built from the constants
//! and helpers in this module.

/// Reset all attributes (colors and formatting).
pub const RESET: u8 = 0;

/// Bold / increased intensity.
pub const BOLD: u8 = 1;

/// Italic.
pub const ITALIC: u8 = 3;

/// Underline.
pub const UNDERLINE: u8 = 4;

/// Slow blink.
pub const BLINK: u8 = 5;

/// Reverse video (swap foreground and background).
pub const REVERSE: u8 = 7;

/// Conceal. Support varies between terminal emulators.
pub const CONCEAL: u8 = 8;

/// Double underline.
pub const DOUBLE_UNDERLINE: u8 = 21;

/// Framed.
pub const FRAME: u8 = 51;

/// Encircled.
pub const ENCIRCLE: u8 = 52;

/// Overline.
pub const OVERLINE: u8 = 53;

/// Base of the normal foreground color range (30-37).
pub const FG_BASE: u8 = 30;

/// Base of the normal background color range (40-47).
pub const BG_BASE: u8 = 40;

/// Base of the bright foreground color range (90-97).
pub const FG_BRIGHT_BASE: u8 = 90;

/// Base of the bright background color range (100-107).
pub const BG_BRIGHT_BASE: u8 = 100;

/// Offset between a normal-range color code and its bright counterpart.
pub const BRIGHT_OFFSET: u8 = 60;

/// Attribute names and their codes, canonical names first, then the
/// short aliases used by the inline markup language.
pub const ATTRIBUTES: &[(&str, u8)] = &[
    ("RESET", RESET),
    ("BOLD", BOLD),
    ("ITALIC", ITALIC),
    ("UNDERLINE", UNDERLINE),
    ("BLINK", BLINK),
    ("REVERSE", REVERSE),
    ("CONCEAL", CONCEAL),
    ("DOUBLE_UNDERLINE", DOUBLE_UNDERLINE),
    ("FRAME", FRAME),
    ("ENCIRCLE", ENCIRCLE),
    ("OVERLINE", OVERLINE),
    ("BO", BOLD),
    ("IT", ITALIC),
    ("UL", UNDERLINE),
    ("BL", BLINK),
    ("REV", REVERSE),
];

/// Regex pattern for SGR escape sequences.
pub const ESCAPE: &str = r"\x1b\[[0-9;]*m";

/// Assemble an SGR escape sequence from parameter codes.
///
/// An empty slice produces the empty-parameter sequence `\x1b[m`.
///
/// # Arguments
///
/// * `codes` - SGR parameter codes, emitted in order
///
/// # Example
///
/// ```
/// use technicolor_core::codes::sgr;
/// assert_eq!(sgr(&[1, 31]), "\x1b[1;31m");
/// assert_eq!(sgr(&[]), "\x1b[m");
/// ```
pub fn sgr(codes: &[u8]) -> String {
    let params: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
    format!("\x1b[{}m", params.join(";"))
}

/// Look up an attribute code by name or alias, case-insensitively.
///
/// # Example
///
/// ```
/// use technicolor_core::codes::attribute_code;
/// assert_eq!(attribute_code("BOLD"), Some(1));
/// assert_eq!(attribute_code("ul"), Some(4));
/// assert_eq!(attribute_code("nope"), None);
/// ```
pub fn attribute_code(name: &str) -> Option<u8> {
    ATTRIBUTES
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, code)| *code)
}

/// Create an OSC 8 terminal hyperlink.
///
/// The result prints as `title` and opens `url` in terminals that
/// support the hyperlink convention; others show the bare title.
/// Note that these sequences are not SGR codes, so the width-aware
/// formatter does not account for them.
///
/// # Arguments
///
/// * `title` - The visible link text
/// * `url` - The link destination
///
/// # Example
///
/// ```
/// use technicolor_core::codes::hyperlink;
/// let link = hyperlink("Click here!", "https://example.com");
/// assert_eq!(link, "\x1b]8;;https://example.com\x1b\\Click here!\x1b]8;;\x1b\\");
/// ```
pub fn hyperlink(title: &str, url: &str) -> String {
    format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", url, title)
}
