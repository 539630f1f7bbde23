//! Kairos Explorer
//!
//! Resolves a date to its calendar quarter and logs how the quarter
//! decomposes into months and sub-periods.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kairos_core::{CalendarDay, ReportingPeriod, UnitOfTime, UnitOfTimeGranularity};
use kairos_shared::{AppConfig, AppError, AppResult};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()
        .map_err(AppError::from)
        .context("Failed to load configuration")?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.filter.as_str().into());
    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    explore(&config).context("Failed to explore reporting periods")?;

    Ok(())
}

/// Logs the quarter containing the configured date and how it decomposes.
fn explore(config: &AppConfig) -> AppResult<()> {
    let date = config
        .explorer
        .as_of
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let day = CalendarDay::try_from(date)?;
    let quarter = UnitOfTime::from(day).containing_quarter()?;
    info!(%day, %quarter, "Resolved date");

    let period = ReportingPeriod::new(quarter, quarter)?;
    let most_granular = period.to_most_granular()?;
    info!(%period, %most_granular, "Quarter bounds");

    for month in period.split(UnitOfTimeGranularity::Month)? {
        let days = ReportingPeriod::new(month, month)?
            .split(UnitOfTimeGranularity::Day)?
            .len();
        info!(%month, days, "Month");
    }

    let months = ReportingPeriod::new(
        quarter.first_unit_within(UnitOfTimeGranularity::Month)?,
        quarter.last_unit_within(UnitOfTimeGranularity::Month)?,
    )?;
    let max_units = config.explorer.max_units_in_permutation;
    for permutation in months.create_permutations(max_units)? {
        info!(%permutation, "Sub-period");
    }

    Ok(())
}
