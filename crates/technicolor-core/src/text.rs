//! Styled text values and escape-aware field formatting.
//!
//! Terminal escape sequences occupy bytes but no columns, so ordinary
//! field formatting under-pads styled strings. [`format_field`] widens
//! the declared field width by the length of every embedded SGR
//! sequence before padding, which keeps styled columns aligned with
//! their unstyled neighbors.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use unicode_width::UnicodeWidthStr;

use crate::codes;
use crate::style::Style;

/// Compiled regex for the [`codes::ESCAPE`] pattern.
static ESCAPE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(codes::ESCAPE).unwrap());

/// The result of applying a [`Style`] to a value.
///
/// Keeps the escape-wrapped form next to the original plain text, so
/// callers can still inspect or measure the unstyled content after
/// styling.
///
/// ```
/// use technicolor_core::Style;
///
/// let styled = Style::from_code(31).apply("hi");
/// assert_eq!(styled.rendered(), "\x1b[31mhi\x1b[0m");
/// assert_eq!(styled.plain(), "hi");
/// assert_eq!(styled.visible_width(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledText {
    rendered: String,
    plain: String,
}

impl StyledText {
    /// Apply `style` to a value, appending a reset.
    pub fn new(style: &Style, text: impl fmt::Display) -> Self {
        let plain = text.to_string();
        let reset = Style::from_code(codes::RESET).render();
        let rendered = format!("{}{}{}", style.render(), plain, reset);
        Self { rendered, plain }
    }

    /// The escape-wrapped form that gets printed.
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    /// The original text without any escape sequences.
    pub fn plain(&self) -> &str {
        &self.plain
    }

    /// Display width of the plain content in terminal columns.
    pub fn visible_width(&self) -> usize {
        self.plain.width()
    }

    /// Format the rendered form under `spec` with escape-aware padding.
    ///
    /// Shorthand for [`format_field`] on [`StyledText::rendered`].
    pub fn format(&self, spec: &str) -> String {
        format_field(&self.rendered, spec)
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

impl AsRef<str> for StyledText {
    fn as_ref(&self) -> &str {
        &self.rendered
    }
}

/// Remove all SGR escape sequences from text.
///
/// # Example
///
/// ```
/// use technicolor_core::visible;
/// assert_eq!(visible("\x1b[1mBold\x1b[0m text"), "Bold text");
/// ```
pub fn visible(text: &str) -> String {
    ESCAPE_RE.replace_all(text, "").to_string()
}

/// Display width of text in terminal columns, ignoring SGR sequences.
///
/// Wide characters count double, per Unicode column conventions.
///
/// # Example
///
/// ```
/// use technicolor_core::visible_width;
/// assert_eq!(visible_width("\x1b[1mHello\x1b[0m"), 5);
/// assert_eq!(visible_width("你好"), 4);
/// ```
pub fn visible_width(text: &str) -> usize {
    visible(text).width()
}

/// Format `value` under a `[[fill]align][width][.precision]` spec,
/// counting only visible characters toward the field width.
///
/// Embedded SGR sequences first contribute their full character length
/// to the declared width, then the value is padded normally, so the
/// visible result occupies exactly the requested columns. A value
/// without escape sequences formats byte-identically to
/// [`format_plain`].
///
/// The precision component still truncates by raw characters, escapes
/// included; truncating a styled value can cut a sequence in half.
///
/// # Arguments
///
/// * `value` - The text to format, possibly containing SGR sequences
/// * `spec` - Field spec such as `"10"`, `"<10"`, `"*^20"` or `"10.5"`
///
/// # Example
///
/// ```
/// use technicolor_core::{format_field, visible};
///
/// let styled = "\x1b[31mhi\x1b[0m";
/// let cell = format_field(styled, "10");
/// assert_eq!(visible(&cell).len(), 10);
/// assert_eq!(format_field("hi", "10"), "hi        ");
/// ```
pub fn format_field(value: &str, spec: &str) -> String {
    let escape_len: usize = ESCAPE_RE
        .find_iter(value)
        .map(|m| m.as_str().chars().count())
        .sum();
    if escape_len == 0 {
        return format_plain(value, spec);
    }
    let adjusted = adjust_width_spec(spec, escape_len);
    format_plain(value, &adjusted)
}

/// Rewrite the width component of a field spec, adding `extra` to the
/// first digit run that denotes a width. A run immediately preceded by
/// `.` is a precision, and a run immediately followed by `f` is part
/// of a float marker; both are left alone. Specs without a width pass
/// through unchanged.
fn adjust_width_spec(spec: &str, extra: usize) -> String {
    let chars: Vec<char> = spec.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        if !chars[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        let start = i;
        let mut end = i;
        while end < chars.len() && chars[end].is_ascii_digit() {
            end += 1;
        }
        let after_dot = start > 0 && chars[start - 1] == '.';
        let before_f = end < chars.len() && chars[end] == 'f';
        if !after_dot && !before_f {
            let run: String = chars[start..end].iter().collect();
            if let Ok(width) = run.parse::<usize>() {
                let mut out: String = chars[..start].iter().collect();
                out.push_str(&(width + extra).to_string());
                out.extend(chars[end..].iter());
                return out;
            }
        }
        i = end;
    }
    spec.to_string()
}

/// Horizontal alignment within a padded field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
    Center,
}

/// A parsed `[[fill]align][width][.precision]` field spec.
struct FieldSpec {
    fill: char,
    align: Align,
    width: Option<usize>,
    precision: Option<usize>,
}

/// Apply a `[[fill]align][width][.precision]` spec to a value the way
/// the standard formatter would, padding and truncating by character
/// count. Strings align left by default. Specs this parser does not
/// understand leave the value unchanged rather than failing an output
/// path.
///
/// # Example
///
/// ```
/// use technicolor_core::format_plain;
/// assert_eq!(format_plain("hi", ">5"), "   hi");
/// assert_eq!(format_plain("hi", "*^6"), "**hi**");
/// assert_eq!(format_plain("truncate", ".4"), "trun");
/// ```
pub fn format_plain(value: &str, spec: &str) -> String {
    let parsed = match parse_spec(spec) {
        Some(parsed) => parsed,
        None => return value.to_string(),
    };

    let truncated: String = match parsed.precision {
        Some(precision) => value.chars().take(precision).collect(),
        None => value.to_string(),
    };

    let width = match parsed.width {
        Some(width) => width,
        None => return truncated,
    };

    let len = truncated.chars().count();
    if len >= width {
        return truncated;
    }

    let pad = width - len;
    let fill = |n: usize| parsed.fill.to_string().repeat(n);
    match parsed.align {
        Align::Left => format!("{}{}", truncated, fill(pad)),
        Align::Right => format!("{}{}", fill(pad), truncated),
        Align::Center => {
            let left = pad / 2;
            format!("{}{}{}", fill(left), truncated, fill(pad - left))
        }
    }
}

fn parse_spec(spec: &str) -> Option<FieldSpec> {
    let chars: Vec<char> = spec.chars().collect();
    let mut i = 0;
    let mut fill = ' ';
    let mut align = Align::Left;

    if chars.len() >= 2 && as_align(chars[1]).is_some() {
        fill = chars[0];
        align = as_align(chars[1])?;
        i = 2;
    } else if let Some(first) = chars.first().copied().and_then(as_align) {
        align = first;
        i = 1;
    }

    let mut width = None;
    let start = i;
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    if i > start {
        let run: String = chars[start..i].iter().collect();
        width = Some(run.parse::<usize>().ok()?);
    }

    let mut precision = None;
    if i < chars.len() && chars[i] == '.' {
        i += 1;
        let start = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        if i == start {
            return None;
        }
        let run: String = chars[start..i].iter().collect();
        precision = Some(run.parse::<usize>().ok()?);
    }

    // Tolerate an explicit string type marker.
    if i < chars.len() && chars[i] == 's' {
        i += 1;
    }

    if i != chars.len() {
        return None;
    }

    Some(FieldSpec {
        fill,
        align,
        width,
        precision,
    })
}

fn as_align(c: char) -> Option<Align> {
    match c {
        '<' => Some(Align::Left),
        '>' => Some(Align::Right),
        '^' => Some(Align::Center),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styled_text_display() {
        let styled = Style::from_code(31).apply("hi");
        assert_eq!(format!("{}", styled), "\x1b[31mhi\x1b[0m");
        assert_eq!(styled.as_ref(), styled.rendered());
    }

    #[test]
    fn test_styled_text_visible_width() {
        let styled = Style::from_code(31).apply("hello");
        assert_eq!(styled.visible_width(), 5);

        let cjk = Style::from_code(31).apply("你好");
        assert_eq!(cjk.visible_width(), 4);
    }

    #[test]
    fn test_visible_strips_sgr() {
        assert_eq!(visible("\x1b[1;31mBold\x1b[0m text"), "Bold text");
        assert_eq!(visible("no codes"), "no codes");
        assert_eq!(visible("\x1b[mempty\x1b[0m"), "empty");
    }

    #[test]
    fn test_visible_keeps_osc_sequences() {
        // Only SGR sequences are stripped; hyperlinks pass through.
        let link = codes::hyperlink("here", "https://example.com");
        assert_eq!(visible(&link), link);
    }

    #[test]
    fn test_visible_width_examples() {
        assert_eq!(visible_width("\x1b[1mHello\x1b[0m"), 5);
        assert_eq!(visible_width(""), 0);
        assert_eq!(visible_width("你好"), 4);
    }

    #[test]
    fn test_format_plain_pads_left_by_default() {
        assert_eq!(format_plain("hi", "5"), "hi   ");
    }

    #[test]
    fn test_format_plain_alignments() {
        assert_eq!(format_plain("hi", "<5"), "hi   ");
        assert_eq!(format_plain("hi", ">5"), "   hi");
        assert_eq!(format_plain("hi", "^5"), " hi  ");
    }

    #[test]
    fn test_format_plain_custom_fill() {
        assert_eq!(format_plain("hi", "*^6"), "**hi**");
        assert_eq!(format_plain("hi", "-<5"), "hi---");
        assert_eq!(format_plain("hi", "0>4"), "00hi");
    }

    #[test]
    fn test_format_plain_precision_truncates() {
        assert_eq!(format_plain("truncate", ".4"), "trun");
        assert_eq!(format_plain("truncate", "6.4"), "trun  ");
        assert_eq!(format_plain("ab", ".4"), "ab");
    }

    #[test]
    fn test_format_plain_no_op_specs() {
        assert_eq!(format_plain("hi", ""), "hi");
        assert_eq!(format_plain("hi", "<"), "hi");
        assert_eq!(format_plain("hi", "1"), "hi");
    }

    #[test]
    fn test_format_plain_type_marker() {
        assert_eq!(format_plain("hi", "5s"), "hi   ");
        assert_eq!(format_plain("truncate", ".4s"), "trun");
    }

    #[test]
    fn test_format_plain_unparseable_passthrough() {
        assert_eq!(format_plain("hi", "5d"), "hi");
        assert_eq!(format_plain("hi", "?!"), "hi");
        assert_eq!(format_plain("hi", "5."), "hi");
    }

    #[test]
    fn test_format_plain_counts_chars_not_bytes() {
        assert_eq!(format_plain("héllo", "7"), "héllo  ");
    }

    #[test]
    fn test_adjust_width_spec_basic() {
        assert_eq!(adjust_width_spec("10", 9), "19");
        assert_eq!(adjust_width_spec("<10", 9), "<19");
        assert_eq!(adjust_width_spec("*^20", 5), "*^25");
    }

    #[test]
    fn test_adjust_width_spec_keeps_precision() {
        assert_eq!(adjust_width_spec("10.5", 3), "13.5");
        assert_eq!(adjust_width_spec(".5", 3), ".5");
    }

    #[test]
    fn test_adjust_width_spec_skips_float_runs() {
        assert_eq!(adjust_width_spec("8f", 3), "8f");
        assert_eq!(adjust_width_spec("25f", 3), "25f");
    }

    #[test]
    fn test_adjust_width_spec_no_width() {
        assert_eq!(adjust_width_spec("", 5), "");
        assert_eq!(adjust_width_spec("<", 5), "<");
    }

    #[test]
    fn test_adjust_width_spec_first_run_wins() {
        // A digit fill character is the first run the scanner sees.
        assert_eq!(adjust_width_spec("0>5", 2), "2>5");
    }

    #[test]
    fn test_format_field_visible_width_is_exact() {
        let value = format!("{}hi{}", "\x1b[31m", "\x1b[0m");
        let cell = format_field(&value, "10");
        assert_eq!(visible(&cell).chars().count(), 10);
        assert!(cell.ends_with("        "));
    }

    #[test]
    fn test_format_field_right_align() {
        let value = "\x1b[31mhi\x1b[0m";
        let cell = format_field(value, ">10");
        assert!(cell.starts_with("        "));
        assert_eq!(visible(&cell).chars().count(), 10);
    }

    #[test]
    fn test_format_field_multiple_escapes() {
        let value = "\x1b[31ma\x1b[0m \x1b[44mb\x1b[0m";
        let cell = format_field(value, "8");
        assert_eq!(visible(&cell).chars().count(), 8);
    }

    #[test]
    fn test_format_field_plain_passthrough() {
        assert_eq!(format_field("hi", "10"), format_plain("hi", "10"));
        assert_eq!(format_field("hi", ""), "hi");
    }

    #[test]
    fn test_format_field_no_width_spec() {
        let value = "\x1b[31mhi\x1b[0m";
        assert_eq!(format_field(value, ""), value);
        assert_eq!(format_field(value, "<"), value);
    }

    #[test]
    fn test_format_field_never_edits_content() {
        let value = "\x1b[31mhi\x1b[0m";
        let cell = format_field(value, "12");
        assert!(cell.contains(value));
    }

    #[test]
    fn test_styled_text_format_method() {
        let styled = Style::from_code(31).apply("hi");
        let cell = styled.format("<10");
        assert_eq!(visible(&cell).chars().count(), 10);
        assert_eq!(cell, format_field(styled.rendered(), "<10"));
    }
}
