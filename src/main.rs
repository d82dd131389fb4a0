mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use clap::Parser;

use ptocalendar::configuration::Configuration;
use ptocalendar::time::utility::to_iso_string;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Configuration::from_reader(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => Configuration::new(),
    };
    let year = cli.year.unwrap_or_else(|| Local::now().year());

    if cli.json {
        let events = config.holidays_for_calendar(Some(year))?;
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    let calendar = config.pto_calendar()?;
    for y in [Some(year), year.checked_add(1)].into_iter().flatten() {
        println!("Holidays {y} ({}):", config.pto_settings().calendar);
        for h in calendar.observed_holidays_with_names(y) {
            let observed = if h.was_shifted { " (Observed)" } else { "" };
            println!("  {}: {}{}", h.name, h.date.format("%B %d, %Y"), observed);
        }
        println!();
    }

    if let (Some(start), Some(end)) = (&cli.start, &cli.end) {
        let calculator = config.pto_calculator()?;
        let breakdown = calculator.try_get_pto_breakdown(start, end)?;
        let hours = calculator.try_calculate_pto_hours(start, end)?;
        let holidays: Vec<String> = breakdown.holidays_list.iter().map(|d| to_iso_string(*d)).collect();

        println!("{start} to {end}:");
        println!("  Total days: {}", breakdown.total_days);
        println!("  Business days: {}", breakdown.business_days);
        println!("  Weekend days: {}", breakdown.weekend_days);
        println!("  Holiday days: {}", breakdown.holiday_days);
        println!("  Holidays: {}", holidays.join(", "));
        println!("  PTO hours: {hours}");
    }

    Ok(())
}
