//! Disabled-styling tests.
//!
//! The enable flag is process-wide, so these tests live in their own
//! binary where every test drives the flag to the same disabled state.
//! Enabled-path behavior is covered by the other test binaries, which
//! never touch the flag.

use technicolor_config::{Mode, Registry};
use technicolor_core::{set_enabled, styling_enabled, Style};
use technicolor_markup::colorize;

#[test]
fn test_set_enabled_is_observable() {
    set_enabled(false);
    assert!(!styling_enabled());
}

#[test]
fn test_disabled_render_is_empty() {
    set_enabled(false);
    assert_eq!(Style::from_code(91).render(), "");
    assert_eq!(Style::new([91, 1, 104]).render(), "");
    // Even the zero-code style goes quiet.
    assert_eq!(Style::default().render(), "");
}

#[test]
fn test_disabled_apply_yields_plain_text() {
    set_enabled(false);
    let styled = Style::from_code(91).apply("warning");

    assert_eq!(styled.rendered(), "warning");
    assert_eq!(styled.plain(), "warning");
    assert_eq!(format!("{}", styled), "warning");
}

#[test]
fn test_disabled_colorize_strips_directives() {
    set_enabled(false);
    let registry = Registry::with_mode(Mode::Light);

    let out = colorize("a /x/FG.RED/ b", &registry).unwrap();
    assert_eq!(out, "a x b");
}

#[test]
fn test_disabled_colorize_still_formats() {
    set_enabled(false);
    let registry = Registry::with_mode(Mode::Light);

    // The field spec still applies, only the escapes are gone.
    let out = colorize("/x/:>5/FG.RED, BOLD/", &registry).unwrap();
    assert_eq!(out, "    x");
}

#[test]
fn test_disabled_colorize_still_validates_paths() {
    set_enabled(false);
    let registry = Registry::with_mode(Mode::Light);

    assert!(colorize("/x/FG.PINK/", &registry).is_err());
}

#[test]
fn test_disabled_format_pads_plain() {
    set_enabled(false);
    let styled = Style::from_code(91).apply("hi");

    // No escapes in the rendered text, so no width adjustment either.
    assert_eq!(styled.format("10"), "hi        ");
}
