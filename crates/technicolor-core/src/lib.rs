//! Technicolor Core
//!
//! This crate provides the style algebra, SGR code constants, and
//! width-aware text formatting that the rest of technicolor builds on.
//!
//! # Overview
//!
//! - [`codes`] - numeric SGR parameter constants and sequence assembly
//! - [`style`] - the composable [`Style`] type and the global enable flag
//! - [`text`] - [`StyledText`] values and escape-aware field formatting
//! - [`error`] - error types
//!
//! # Example
//!
//! ```
//! use technicolor_core::{codes, format_field, Style};
//!
//! let red = Style::from_code(31);
//! let loud = red.compose(&Style::from_code(codes::BOLD));
//! let styled = loud.apply("alert");
//! assert_eq!(styled.plain(), "alert");
//!
//! // Padding counts only the visible characters.
//! let cell = format_field(styled.rendered(), "10");
//! assert_eq!(technicolor_core::visible_width(&cell), 10);
//! ```

pub mod codes;
pub mod error;
pub mod style;
pub mod text;

pub use codes::hyperlink;
pub use error::{Error, Result};
pub use style::{set_enabled, styling_enabled, Style};
pub use text::{format_field, format_plain, visible, visible_width, StyledText};
