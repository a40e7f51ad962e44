use crate::core::{
    config::{Config, CONFIG_KEYS},
    error::Result,
    output::{print_section_header, print_success},
};
use colored::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    Show,
    Init,
    Set { key: String, value: String },
}

/// Lines of `config show`, one `key value` pair each
pub fn describe_config(config: &Config) -> Vec<(&'static str, usize)> {
    CONFIG_KEYS
        .iter()
        .map(|&key| {
            let value = match key {
                "max_buttons" => config.max_buttons,
                "side_buttons" => config.side_buttons,
                _ => config.items_per_page,
            };
            (key, value)
        })
        .collect()
}

pub fn execute_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let path = Config::config_file()?;
            let config = Config::load_or_default()?;

            print_section_header("Pager settings");
            for (key, value) in describe_config(&config) {
                println!("  {:<16}{}", key.bright_black(), value.to_string().white());
            }
            println!("\n  {}", path.display().to_string().bright_black());
        }
        ConfigAction::Init => {
            let path = Config::default().save()?;
            print_success(&format!("Wrote default config to {}", path.display()));
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_or_default()?;
            config.set(&key, &value)?;
            config.save()?;
            log::debug!("Config key '{key}' set to {value}");
            print_success(&format!("Set {key} = {}", value.trim()));
        }
    }

    Ok(())
}
