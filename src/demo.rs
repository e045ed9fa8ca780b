//! Palette demonstration table.
//!
//! Renders every named attribute and color with its primary code, its
//! dotted path, and a styled sample of the path itself. Transposed
//! variants are listed when they actually change the codes, so
//! attributes show once while colors pick up `.dark` and `.light` rows.

use std::io::{self, Write};

use technicolor_config::Registry;
use technicolor_core::{codes, Result, Style};

/// Visible columns one demo cell occupies: code, label, sample.
const CELL_WIDTH: usize = 44;

/// Print the palette and attribute table to stdout.
pub fn show(registry: &Registry, width: usize) -> Result<()> {
    let entries = collect(registry)?;
    let columns = (width / CELL_WIDTH).max(1);

    let code_style = registry.lookup("FG.CYAN")?;
    let label_style = registry.lookup("FG.WHITE.dark")?;
    let title = registry.lookup("UNDERLINE")?.apply("Demonstrating colors:");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", title)?;
    writeln!(out)?;

    for (idx, (name, style)) in entries.iter().enumerate() {
        let code = style.codes().first().copied().unwrap_or(0);
        write!(
            out,
            "{}{}{}",
            code_style.apply(format!("{:3}:", code)),
            label_style.apply(format!("{:20}", format!("({})", name))),
            style.apply(name).format("20"),
        )?;
        if (idx + 1) % columns == 0 {
            writeln!(out)?;
        }
    }
    if entries.len() % columns != 0 {
        writeln!(out)?;
    }
    out.flush()?;

    Ok(())
}

/// Gather the table entries: attributes, then colors, then transposed
/// variants, sorted so shorter paths come first.
fn collect(registry: &Registry) -> Result<Vec<(String, Style)>> {
    let mut entries: Vec<(String, Style)> = Vec::new();

    // Aliases share codes with their canonical names, list each once
    let mut seen = Vec::new();
    for &(name, code) in codes::ATTRIBUTES {
        if seen.contains(&code) {
            continue;
        }
        seen.push(code);
        entries.push((name.to_string(), Style::from_code(code)));
    }

    // Background samples carry a readable foreground on top
    let text_on_bg = registry.lookup("FG.BLACK.dark")?;
    for (name, fg, bg) in registry.iter_colors() {
        entries.push((format!("FG.{}", name), fg));
        entries.push((format!("BG.{}", name), bg.compose(&text_on_bg)));
    }

    let mut variants = Vec::new();
    for (name, style) in &entries {
        let dark = style.darken();
        if dark != *style {
            variants.push((format!("{}.dark", name), dark));
        }
        let light = style.lighten();
        if light != *style {
            variants.push((format!("{}.light", name), light));
        }
    }
    entries.extend(variants);

    entries.sort_by_key(|(name, _)| name.matches('.').count());
    Ok(entries)
}
