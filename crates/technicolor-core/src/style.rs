//! The composable style type and the global enable switch.
//!
//! A [`Style`] is an ordered, deduplicated set of SGR parameter codes.
//! Composition is set union, which makes it associative, commutative,
//! and idempotent: the right algebra for toggling independent terminal
//! attributes. Rendering joins the codes into a single escape sequence.

use std::fmt;
use std::ops::Range;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::codes;
use crate::text::StyledText;

/// Process-wide switch for escape output.
static ENABLED: AtomicBool = AtomicBool::new(true);

/// Color codes that [`Style::lighten`] moves up by [`codes::BRIGHT_OFFSET`].
const NORMAL_COLORS: Range<u8> = 30..50;

/// Color codes that [`Style::darken`] moves down by [`codes::BRIGHT_OFFSET`].
const BRIGHT_COLORS: Range<u8> = 90..110;

/// Enable or disable escape output for the whole process.
///
/// While disabled, [`Style::render`] returns an empty string for every
/// style, so piped or captured output stays clean without changing call
/// sites. Styles still compose and transpose normally.
///
/// # Example
///
/// ```
/// use technicolor_core::{set_enabled, Style};
///
/// let red = Style::from_code(31);
/// set_enabled(false);
/// assert_eq!(red.render(), "");
/// assert_eq!(red.apply("plain").rendered(), "plain");
/// set_enabled(true);
/// assert_eq!(red.render(), "\x1b[31m");
/// ```
pub fn set_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

/// Whether escape output is currently enabled.
pub fn styling_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

/// An immutable set of SGR parameter codes.
///
/// Codes keep first-seen order so rendering is deterministic within a
/// process run, but behave as a set: duplicates collapse on
/// construction and composition unions the code sets.
///
/// ```
/// use technicolor_core::Style;
///
/// let fg = Style::from_code(31);
/// let bg = Style::from_code(44);
/// let both = fg.compose(&bg);
/// assert_eq!(both.codes(), &[31, 44]);
/// assert_eq!(both.render(), "\x1b[31;44m");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    codes: Vec<u8>,
}

impl Style {
    /// Create a style from SGR codes. Duplicates collapse; the first
    /// occurrence keeps its position.
    pub fn new(codes: impl IntoIterator<Item = u8>) -> Self {
        let mut set = Vec::new();
        for code in codes {
            if !set.contains(&code) {
                set.push(code);
            }
        }
        Self { codes: set }
    }

    /// Create a single-code style.
    pub fn from_code(code: u8) -> Self {
        Self { codes: vec![code] }
    }

    /// The codes in rendering order.
    pub fn codes(&self) -> &[u8] {
        &self.codes
    }

    /// Union of the two code sets.
    ///
    /// Composing a style with itself returns an equal style, and the
    /// resulting set does not depend on operand order (only the
    /// rendering order does).
    ///
    /// # Example
    ///
    /// ```
    /// use technicolor_core::Style;
    ///
    /// let a = Style::new([1, 31]);
    /// let b = Style::new([31, 44]);
    /// assert_eq!(a.compose(&b).codes(), &[1, 31, 44]);
    /// assert_eq!(a.compose(&a), a);
    /// ```
    pub fn compose(&self, other: &Style) -> Style {
        Style::new(self.codes.iter().chain(other.codes.iter()).copied())
    }

    /// Map every normal-range color code (30-49) to its bright
    /// counterpart 60 higher. Codes outside the range pass through,
    /// and already-bright codes stay put, so the transform is
    /// idempotent.
    ///
    /// A style holding both a foreground and a background color moves
    /// both at once.
    ///
    /// # Example
    ///
    /// ```
    /// use technicolor_core::Style;
    ///
    /// assert_eq!(Style::from_code(31).lighten().codes(), &[91]);
    /// assert_eq!(Style::from_code(91).lighten().codes(), &[91]);
    /// assert_eq!(Style::from_code(1).lighten().codes(), &[1]);
    /// ```
    pub fn lighten(&self) -> Style {
        self.transpose(NORMAL_COLORS, |c| c + codes::BRIGHT_OFFSET)
    }

    /// Map every bright-range color code (90-109) back down by 60.
    /// The inverse of [`Style::lighten`] on color codes; everything
    /// else passes through.
    pub fn darken(&self) -> Style {
        self.transpose(BRIGHT_COLORS, |c| c - codes::BRIGHT_OFFSET)
    }

    fn transpose(&self, range: Range<u8>, shift: impl Fn(u8) -> u8) -> Style {
        Style::new(
            self.codes
                .iter()
                .map(|&c| if range.contains(&c) { shift(c) } else { c }),
        )
    }

    /// Serialize to an SGR escape sequence.
    ///
    /// This is the only place a style turns into escape bytes. A
    /// zero-code style renders the empty-parameter sequence `\x1b[m`.
    /// While styling is disabled the result is an empty string for
    /// every style.
    pub fn render(&self) -> String {
        if !styling_enabled() {
            return String::new();
        }
        codes::sgr(&self.codes)
    }

    /// Wrap a value in this style followed by a reset.
    ///
    /// Anything printable works; the plain text is kept alongside the
    /// escape-wrapped form on the returned [`StyledText`].
    ///
    /// # Example
    ///
    /// ```
    /// use technicolor_core::Style;
    ///
    /// let styled = Style::from_code(31).apply("hi");
    /// assert_eq!(styled.rendered(), "\x1b[31mhi\x1b[0m");
    /// assert_eq!(styled.plain(), "hi");
    /// ```
    pub fn apply(&self, text: impl fmt::Display) -> StyledText {
        StyledText::new(self, text)
    }
}

impl fmt::Display for Style {
    /// Emits the rendered escape sequence, so printing a style on its
    /// own switches the terminal until the next reset.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
