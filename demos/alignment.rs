//! Alignment example: styled fields pad by visible width, not byte length.
//!
//! Run with: `cargo run --example alignment`

use technicolor_config::Config;
use technicolor_core::Result;

fn main() -> Result<()> {
    let registry = Config::default().registry();

    let ok = registry.lookup("FG.GREEN")?;
    let warn = registry.lookup("FG.YELLOW")?.compose(&registry.lookup("BOLD")?);
    let fail = registry.lookup("FG.RED")?.compose(&registry.lookup("REVERSE")?);

    let rows = [
        ("api-gateway", ok.apply("ok")),
        ("scheduler", warn.apply("degraded")),
        ("billing", fail.apply("down")),
    ];

    // The escape bytes inside each cell do not count toward the field width,
    // so the closing brackets line up.
    for (service, state) in rows {
        println!("{:<14} [{}]", service, state.format(">8"));
    }
    Ok(())
}
