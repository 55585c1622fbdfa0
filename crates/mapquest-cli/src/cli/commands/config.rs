//! `mqgeo config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;
use crate::output::OutputFormat;

pub fn execute(ctx: Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(&ctx),
        ConfigCommands::Set { key, value } => set_config(&key, &value),
        ConfigCommands::Path => show_path(),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let mut config = Config::load()?;
    config.api_key = config.api_key.as_deref().map(mask_key);

    match ctx.output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&config)?),
        OutputFormat::Pretty => {
            let unset = || "(not set)".dimmed().to_string();

            println!("{}", "Current Configuration:".bold());
            println!();
            println!(
                "  {} {}",
                "api_key:".bold(),
                config.api_key.unwrap_or_else(unset)
            );
            println!(
                "  {} {}",
                "output_format:".bold(),
                config.output_format.unwrap_or_default()
            );
            println!(
                "  {} {}",
                "base_url:".bold(),
                config
                    .base_url
                    .unwrap_or_else(|| mapquest::DEFAULT_BASE_URL.to_string())
            );
            println!(
                "  {} {}",
                "timeout_secs:".bold(),
                config
                    .timeout_secs
                    .map_or_else(unset, |secs| secs.to_string())
            );
        }
    }

    Ok(())
}

fn set_config(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    println!("{} {} set.", "Success:".green().bold(), key.cyan());
    Ok(())
}

fn show_path() -> Result<()> {
    let path = Config::path()?;
    println!("{}", path.display());
    Ok(())
}

fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key("Fmjtd%7Cluur2g61nl"), "Fmjt...61nl");
        assert_eq!(mask_key("short"), "****");
    }
}
