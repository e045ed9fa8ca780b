//! Markup example: colorize inline directives in running text.
//!
//! Run with: `cargo run --example markup`

use technicolor_config::Config;
use technicolor_core::Result;
use technicolor_markup::colorize;

fn main() -> Result<()> {
    let registry = Config::default().registry();

    let lines = [
        "build /ok/FG.GREEN, BOLD/ in /1.24s/:>8/FG.YELLOW/",
        "branch /main/FG.CYAN.dark/ is /3/BOLD/ commits ahead",
        "deploy /failed/FG.RED, REVERSE/ (see log)",
    ];

    for line in lines {
        println!("{}", colorize(line, &registry)?);
    }
    Ok(())
}
