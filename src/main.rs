//! Main application entry point and high-level flow coordination.
//!
//! This module orchestrates the CLI after command-line argument parsing is
//! complete. It coordinates between different modules:
//!
//! - `args`: Command-line argument parsing and help/version display
//! - `config`: Configuration loading and validation
//! - `chart`: The calculation engine itself
//! - `commands`: One-shot subcommands (hours, terms, help)
//! - `logger`: Centralized logging functionality
//!
//! The flow is: parse arguments, early-exit for help/version/subcommands,
//! otherwise load configuration, merge CLI flag overrides, build a
//! `ChartRequest`, run the engine once, and render the chart either as
//! structured text or as the serialized JSON record. Errors surface through
//! `anyhow` with the logger's error formatting; no fallback chart is ever
//! shown.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use chrono_tz::Tz;
use std::path::Path;

#[macro_use]
extern crate sajur;

use sajur::args::{CliAction, ParsedArgs};
use sajur::chart::{ChartCalculator, ChartRequest, Gender, SajuChart};
use sajur::commands;
use sajur::config;
use sajur::constants::EXIT_FAILURE;
use sajur::logger::Log;

fn main() {
    let parsed = ParsedArgs::parse(std::env::args());

    let result = match parsed.action {
        CliAction::Calculate {
            date,
            time,
            json,
            timezone,
            gender,
            no_solar_time,
            debug_enabled,
            config_dir,
        } => run_calculation(CalculateParams {
            date,
            time,
            json,
            timezone,
            gender,
            no_solar_time,
            debug_enabled,
            config_dir,
        }),
        CliAction::HoursCommand => commands::hours::run_hours_command(),
        CliAction::TermsCommand => commands::terms::run_terms_command(),
        CliAction::ShowHelp => {
            commands::help::display_help();
            Ok(())
        }
        CliAction::ShowVersion => {
            commands::help::display_version();
            Ok(())
        }
        CliAction::ShowHelpDueToError => {
            commands::help::display_help();
            std::process::exit(EXIT_FAILURE);
        }
    };

    if let Err(error) = result {
        log_pipe!();
        log_error_exit!("{error:#}");
        std::process::exit(EXIT_FAILURE);
    }
}

/// Everything the calculate action needs, bundled to keep main readable.
struct CalculateParams {
    date: String,
    time: Option<String>,
    json: bool,
    timezone: Option<String>,
    gender: Option<String>,
    no_solar_time: bool,
    debug_enabled: bool,
    config_dir: Option<String>,
}

fn run_calculation(params: CalculateParams) -> Result<()> {
    let config = config::load(params.config_dir.as_deref().map(Path::new))?;

    let json = params.json || config.json_output();
    if json {
        // Keep stdout clean for the serialized record
        Log::set_enabled(false);
    }

    let date = NaiveDate::parse_from_str(&params.date, "%Y-%m-%d")
        .with_context(|| format!("invalid date '{}' (expected YYYY-MM-DD)", params.date))?;
    let time = params
        .time
        .as_deref()
        .map(|t| {
            NaiveTime::parse_from_str(t, "%H:%M")
                .with_context(|| format!("invalid time '{t}' (expected HH:MM)"))
        })
        .transpose()?;

    let timezone: Tz = match params.timezone.as_deref() {
        Some(name) => name
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid timezone '{name}': {e}"))?,
        None => config.resolved_timezone()?,
    };
    let gender = params
        .gender
        .as_deref()
        .map(|g| g.parse::<Gender>().map_err(anyhow::Error::msg))
        .transpose()?;

    let mut request = ChartRequest::new(date.year(), date.month(), date.day());
    if let Some(time) = time {
        request = request.at(time.hour(), time.minute());
    }
    if let Some(gender) = gender {
        request = request.with_gender(gender);
    }
    request = request.in_timezone(timezone);
    if params.no_solar_time || !config.use_solar_time() {
        request = request.without_solar_time();
    }

    let calculator = ChartCalculator::with_default_ephemeris();
    let chart = calculator.calculate(&request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&chart)?);
        return Ok(());
    }

    display_chart(&request, &chart, params.debug_enabled);
    Ok(())
}

/// Render a chart with the structured box-drawing layout.
fn display_chart(request: &ChartRequest, chart: &SajuChart, debug_enabled: bool) {
    log_version!();

    let time_display = match request.hour {
        Some(hour) => format!("{hour:02}:{:02}", request.minute),
        None => "time unknown".to_string(),
    };
    log_block_start!(
        "Birth: {:04}-{:02}-{:02} {} ({})",
        request.year,
        request.month,
        request.day,
        time_display,
        chart.meta.timezone
    );

    log_block_start!("Four Pillars");
    log_indented!("Year   {}", chart.year_pillar);
    log_indented!("Month  {}", chart.month_pillar);
    log_indented!("Day    {}", chart.day_pillar);
    match chart.hour_pillar {
        Some(pillar) => log_indented!("Hour   {pillar}"),
        None => log_indented!("Hour   (birth time unknown)"),
    }

    log_block_start!(
        "Day master: {} ({}) {}",
        chart.day_master.stem.hangul(),
        chart.day_master.element.hangul(),
        chart.day_master.description
    );

    if let Some(luck) = chart.luck {
        let direction = match luck.direction {
            sajur::chart::LuckDirection::Forward => "forward",
            sajur::chart::LuckDirection::Backward => "backward",
        };
        log_decorated!("Luck cycle: {direction} from age {}", luck.start_age);
    }

    log_block_start!(
        "Solar longitude: {:.2}°, {}",
        chart.meta.solar_longitude_deg,
        chart.meta.solar_term
    );
    if chart.meta.is_boundary {
        log_pipe!();
        match chart.meta.boundary_reason {
            Some(sajur::chart::BoundaryReason::NearSpringStart) => {
                log_warning!("Within ~36 hours of the spring start (입춘): the year");
                log_indented!("pillar flips at this boundary; verify the birth time.");
            }
            _ => {
                log_warning!("Within ~36 hours of a solar-term boundary: the month");
                log_indented!("pillar flips at this boundary; verify the birth time.");
            }
        }
    }

    if debug_enabled {
        log_pipe!();
        log_debug!("Solar time applied: {}", chart.meta.solar_time_applied);
        log_debug!("Calculation method: {}", chart.meta.calculation_method);
    }

    log_end!();
}
