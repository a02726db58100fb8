use crate::config::Config;
use crate::error::Result;

/// Show the effective configuration as YAML
pub fn cmd_config_show(config: &Config) -> Result<()> {
    print!("{}", config.to_yaml()?);
    Ok(())
}
