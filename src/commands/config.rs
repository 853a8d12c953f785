//! Config subcommands handler.

use anyhow::Result;

use trackplay::Config;

/// Show the effective configuration as TOML.
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

/// Print the config file path and whether it exists yet.
pub fn handle_path() -> Result<()> {
    let path = Config::config_path()?;
    if path.exists() {
        println!("{}", path.display());
    } else {
        println!("{} (not created yet, defaults in effect)", path.display());
    }
    Ok(())
}
