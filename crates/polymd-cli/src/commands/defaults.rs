use crate::config::defaults::DefaultsConfig;
use crate::error::Result;

pub fn run() -> Result<()> {
    print!("{}", DefaultsConfig::default().to_toml_string());
    Ok(())
}
