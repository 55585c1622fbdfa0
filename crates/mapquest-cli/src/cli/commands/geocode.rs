//! `mqgeo geocode` - Geocode an address.

use anyhow::Result;
use colored::Colorize;
use mapquest::{GeocodeOptions, GeocodeResult};
use serde_json::{Map, Value};

use super::Context;
use crate::cli::args::GeocodeArgs;
use crate::output::OutputFormat;

pub async fn execute(ctx: Context, args: GeocodeArgs) -> Result<()> {
    ctx.configure()?;

    let mut options: GeocodeOptions = args.options.into_iter().collect();
    if let Some(max) = args.max_results {
        options.insert("max_results", max);
    }

    let geocode = mapquest::geocode_address(&args.address, &options).await?;

    if !args.fields.is_empty() {
        if !geocode.address_found() {
            anyhow::bail!("No location found for \"{}\"", args.address);
        }
        return print_fields(&ctx, &geocode, &args.fields);
    }

    match ctx.output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&geocode)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&geocode)?),
        OutputFormat::Pretty => print_pretty(&geocode, &args.address),
    }

    Ok(())
}

fn print_fields(ctx: &Context, geocode: &GeocodeResult, fields: &[String]) -> Result<()> {
    let mut selected = Map::new();
    for field in fields {
        selected.insert(field.clone(), geocode.get(field)?.clone());
    }

    match ctx.output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&selected)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&selected)?),
        OutputFormat::Pretty => {
            for (name, value) in &selected {
                let shown = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                println!("{} {}", format!("{name}:").bold(), shown);
            }
        }
    }

    Ok(())
}

fn print_pretty(geocode: &GeocodeResult, address: &str) {
    if !geocode.address_found() {
        println!("{} No location found for \"{}\"", "Note:".yellow().bold(), address);
        return;
    }

    println!("{}", geocode.provided_location().unwrap_or(address).bold());
    println!();

    if let Some(ll) = geocode.lat_lng() {
        println!("  {} {}, {}", format!("{:<16}", "lat/lng:").bold(), ll.lat, ll.lng);
    }
    row("street:", geocode.street());
    row("city:", geocode.city());
    row("county:", geocode.county());
    row("state:", geocode.state());
    row("country:", geocode.country());
    row("postal code:", geocode.postal_code());
    row("quality:", geocode.geocode_quality());
    row("quality code:", geocode.geocode_quality_code());
    row("side of street:", geocode.side_of_street());
}

fn row(label: &str, value: Option<&str>) {
    let shown = match value {
        Some(v) if !v.is_empty() => v.cyan().to_string(),
        _ => "-".dimmed().to_string(),
    };
    println!("  {} {}", format!("{label:<16}").bold(), shown);
}
