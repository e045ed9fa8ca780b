//! Basic example: compose styles and print styled text.
//!
//! Run with: `cargo run --example basic`

use technicolor_core::codes::{BOLD, UNDERLINE};
use technicolor_core::Style;

fn main() {
    let red = Style::from_code(91);
    let bold = Style::from_code(BOLD);

    println!("{}", red.apply("bright red"));
    println!("{}", red.compose(&bold).apply("bright red and bold"));
    println!("{}", red.darken().apply("darkened to the 30s range"));
    println!("{}", Style::new([UNDERLINE, 96]).apply("underlined cyan"));

    // Compose is a set union, so stacking the same style twice is a no-op.
    let loud = red.compose(&bold);
    assert_eq!(loud.compose(&loud), loud);
}
