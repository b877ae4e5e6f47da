use std::path::Path;

use a11y_audit::config::Config;
use a11y_audit_generators::PROVIDERS;
use anyhow::Result;

pub fn run() -> Result<()> {
    let path = Path::new(".a11y-audit.toml");
    if path.exists() {
        eprintln!("Config file already exists: {}", path.display());
        return Ok(());
    }
    std::fs::write(path, Config::default_toml())?;
    println!("Created {}", path.display());
    println!("Generator providers: {}", PROVIDERS.join(", "));
    Ok(())
}
