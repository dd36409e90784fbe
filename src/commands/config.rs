//! Config commands - Get and set configuration values

use anyhow::Result;

use crate::colab::settings::{ConfigKey, ConfigStore};
use crate::config;

fn store() -> Result<ConfigStore> {
    let store = ConfigStore::new(config::config_file()?);
    store.ensure_initialized()?;
    Ok(store)
}

/// Execute `config set`
pub fn set(key: &str, value: &str) -> Result<()> {
    let key: ConfigKey = key.parse()?;
    store()?.set(key, value)?;
    println!("Configuration updated: {} = {}", key, value);
    Ok(())
}

/// Execute `config get` and return formatted output
///
/// Displayed values go through the redaction rule, so a stored auth token
/// is never printed.
pub fn get(key: Option<&str>) -> Result<String> {
    let settings = store()?.load()?;

    match key {
        Some(key) => {
            let key: ConfigKey = key.parse()?;
            Ok(format!("{} = {}", key, settings.display_value(key)))
        }
        None => {
            let mut output = String::from("Current configuration:");
            for key in ConfigKey::ALL {
                output.push_str(&format!("\n{} = {}", key, settings.display_value(key)));
            }
            Ok(output)
        }
    }
}
