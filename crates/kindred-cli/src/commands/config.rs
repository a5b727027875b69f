use anyhow::{Context, Result};

use crate::context::AppContext;

pub fn show(ctx: &AppContext) -> Result<()> {
    let rendered = toml::to_string_pretty(&ctx.config).context("failed to render configuration")?;
    print!("{}", rendered);
    Ok(())
}

pub fn init(ctx: &AppContext) -> Result<()> {
    ctx.settings.save(&ctx.config)?;
    println!("Configuration written.");
    Ok(())
}
