//! Inline markup replacement.
//!
//! Scans text for `/target/paths/` directives and replaces each one with
//! the target styled by the named registry entries. A directive has the
//! form:
//!
//! ```text
//! /target[/:spec]/path[,path...]/
//! ```
//!
//! - `target` is the text to style (may be empty)
//! - `spec` is an optional field spec, applied to the target before styling
//! - each `path` is a dotted registry path such as `FG.RED` or `BOLD`
//!
//! Directives are resolved leftmost-first, rescanning after every
//! replacement, so the output of one replacement is visible to the next
//! scan.
//!
//! # Example
//!
//! ```
//! use technicolor_config::{Mode, Registry};
//! use technicolor_markup::colorize;
//!
//! let registry = Registry::with_mode(Mode::Light);
//! let out = colorize("a /x/FG.RED/ b", &registry)?;
//! assert_eq!(out, "a \x1b[91mx\x1b[0m b");
//! # Ok::<(), technicolor_core::Error>(())
//! ```

use std::sync::LazyLock;

use log::trace;
use regex::Regex;
use technicolor_config::Registry;
use technicolor_core::{format_field, Error, Result};

/// One styling directive: target, optional `/:spec`, comma-separated paths.
static DIRECTIVE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(.*?)(/:.+?)?/([A-Za-z, .]+)/").unwrap());

/// Replacement passes after which the input is declared non-terminating.
const MAX_PASSES: usize = 1024;

/// Replace every `/target/paths/` directive in `text` with the styled
/// target.
///
/// The optional field spec is applied first, width-aware, then each path
/// is looked up and applied in order, so the first path ends up innermost.
/// Rescans after every replacement until no directive remains.
///
/// # Arguments
///
/// * `text` - input text, possibly containing directives
/// * `registry` - color registry used to resolve paths
///
/// # Errors
///
/// Returns [`Error::Lookup`] when a path does not resolve and
/// [`Error::Markup`] when replacement has not settled after
/// [`MAX_PASSES`] passes.
pub fn colorize(text: &str, registry: &Registry) -> Result<String> {
    let mut updated = text.to_string();

    for pass in 0..MAX_PASSES {
        let caps = match DIRECTIVE_RE.captures(&updated) {
            Some(caps) => caps,
            None => return Ok(updated),
        };
        // Group 0 is the whole directive and always present on a match.
        let range = caps.get(0).expect("group 0 always matches").range();

        let mut styled = caps[1].to_string();
        if let Some(spec) = caps.get(2) {
            // Strip the "/:" introducer.
            styled = format_field(&styled, &spec.as_str()[2..]);
        }
        let paths: Vec<String> = caps[3].split(',').map(|p| p.trim().to_string()).collect();

        for path in &paths {
            let style = registry.lookup(path)?;
            styled = style.apply(&styled).rendered().to_string();
        }

        trace!("pass {}: replacing {}..{} with {:?}", pass, range.start, range.end, styled);
        updated.replace_range(range, &styled);
    }

    // The final pass may have consumed the last directive.
    if DIRECTIVE_RE.is_match(&updated) {
        Err(Error::Markup(format!(
            "replacement did not settle after {} passes",
            MAX_PASSES
        )))
    } else {
        Ok(updated)
    }
}
