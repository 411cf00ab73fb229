use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use cli::{Cli, Commands};
use driverent_export::config::{ExportConfig, CONFIG_FILE};
use driverent_export::format::format_currency;
use driverent_export::pricing::{nights, parse_date};
use driverent_export::{
    calculate_total_price, compose_booking_document, compose_booking_row, BookingRecord,
};
use indicatif::{ProgressBar, ProgressStyle};
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

mod cli;

fn main() -> ExitCode {
    if let Err(e) = try_main() {
        eprintln!("{}: {e:#}", console::style("Error").red());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main() -> Result<()> {
    use clap::Parser;
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match &cli.command {
        Commands::Config => write_default_config(),
        Commands::Price {
            rate,
            pickup,
            dropoff,
        } => print_price(rate, pickup, dropoff),
        Commands::Render {
            records,
            out_dir,
            generated_on,
        } => render(records, out_dir.as_deref(), generated_on.as_deref()),
    }
}

fn write_default_config() -> Result<()> {
    if Path::new(CONFIG_FILE).exists() {
        return Err(anyhow!("{CONFIG_FILE} already exists, refusing to overwrite it"));
    }
    let contents = toml::to_string_pretty(&ExportConfig::default())
        .with_context(|| "Failed to serialize default configuration")?;
    std::fs::write(CONFIG_FILE, contents)
        .with_context(|| format!("Failed to write {CONFIG_FILE}"))?;
    println!("Wrote {CONFIG_FILE}");
    Ok(())
}

fn print_price(rate: &str, pickup: &str, dropoff: &str) -> Result<()> {
    let rate =
        Decimal::from_str(rate.trim()).with_context(|| format!("'{rate}' isn't a valid rate"))?;
    let total = calculate_total_price(rate, pickup, dropoff)
        .with_context(|| "Failed to calculate price")?;
    // both dates already parsed successfully above
    let nights = nights(parse_date(pickup)?, parse_date(dropoff)?);

    println!(
        "{} x {nights} night{}: {}",
        format_currency(rate),
        if nights == 1 { "" } else { "s" },
        console::style(format_currency(total)).bold()
    );
    Ok(())
}

fn load_config() -> Result<ExportConfig> {
    if !Path::new(CONFIG_FILE).exists() {
        log::debug!("no {CONFIG_FILE} found, using defaults");
        return Ok(ExportConfig::default());
    }
    let contents = std::fs::read_to_string(CONFIG_FILE)
        .with_context(|| format!("Failed to load {CONFIG_FILE} contents"))?;
    toml::from_str(&contents).with_context(|| "Failed to parse TOML")
}

fn load_record(path: &Path) -> Result<BookingRecord> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read booking record {}", path.display()))?;
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or_default();
    if is_json {
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON in {}", path.display()))
    } else {
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse TOML in {}", path.display()))
    }
}

fn render(records: &[PathBuf], out_dir: Option<&Path>, generated_on: Option<&str>) -> Result<()> {
    let config = load_config()?;
    if !config.pdf && !config.xlsx {
        println!("No outputs enabled in {CONFIG_FILE}.");
        return Ok(());
    }

    let out_dir = out_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.output_dir.clone());
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let generated_on = match generated_on {
        Some(date) => NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .with_context(|| format!("'{date}' isn't a YYYY-MM-DD date"))?,
        None => chrono::Local::now().date_naive(),
    };

    let progress = ProgressBar::new(records.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("can parse progress style")
            .progress_chars("#>-"),
    );

    let mut written: Vec<PathBuf> = Vec::new();
    for path in records.iter() {
        progress.set_message(path.display().to_string());
        let record = load_record(path)?;

        if !record.is_price_consistent() {
            log::warn!(
                "booking {} has total {} but {} night(s) at {} comes to something else",
                record.booking_id,
                format_currency(record.total_price),
                record.nights(),
                format_currency(record.price_per_day)
            );
        }

        if config.pdf {
            let document = compose_booking_document(&record);
            let path = document
                .save_in(&out_dir)
                .with_context(|| format!("Failed to write PDF for {}", record.booking_id))?;
            written.push(path);
        }
        if config.xlsx {
            let row = compose_booking_row(&record, generated_on);
            let path = row
                .save_in(&out_dir)
                .with_context(|| format!("Failed to write XLSX for {}", record.booking_id))?;
            written.push(path);
        }

        progress.inc(1);
    }
    progress.finish_and_clear();

    for path in written.iter() {
        println!("  {}", path.display());
    }
    Ok(())
}
