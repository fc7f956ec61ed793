use chrono::{Local, NaiveDate, Utc};
use chrono_tz::Tz;
use clap::Parser;
use serde::Deserialize;

use crate::error::{AppError, Result};

const DEFAULT_CONFIG_PATH: &str = "config/finance_tracker.toml";

/// Categories offered by the add form; any valid name can still be typed.
const DEFAULT_CATEGORIES: &[&str] = &[
    "Utility",
    "Payment",
    "Food",
    "Transport",
    "Groceries",
    "Bills",
    "School",
    "Shopping",
    "Entertainment",
    "Subscriptions",
    "Personal Care",
    "Health",
    "Savings",
    "Investments",
    "Debt",
    "Gifts and Donations",
    "Miscellaneous",
];

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data_file: String,
    pub currency_symbol: String,
    /// IANA name used to decide what "today" is; local time when empty.
    pub timezone: String,
    pub log_file: String,
    pub log_level: String,
    pub categories: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: "transactions.csv".to_string(),
            currency_symbol: engine::DEFAULT_SYMBOL.to_string(),
            timezone: String::new(),
            log_file: "finance_tracker.log".to_string(),
            log_level: "info".to_string(),
            categories: DEFAULT_CATEGORIES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl AppConfig {
    pub fn timezone(&self) -> Result<Option<Tz>> {
        let name = self.timezone.trim();
        if name.is_empty() {
            return Ok(None);
        }
        name.parse::<Tz>()
            .map(Some)
            .map_err(|_| AppError::Timezone(name.to_string()))
    }
}

/// Today's date in `tz`, or in local time.
pub fn today(tz: Option<Tz>) -> NaiveDate {
    match tz {
        Some(tz) => Utc::now().with_timezone(&tz).date_naive(),
        None => Local::now().date_naive(),
    }
}

#[derive(Debug, Parser)]
#[command(name = "finance_tracker", about = "Personal finance ledger in the terminal")]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Ledger CSV file.
    #[arg(long)]
    data_file: Option<String>,
    /// Currency symbol shown next to amounts.
    #[arg(long)]
    currency_symbol: Option<String>,
    /// Override timezone (IANA name).
    #[arg(long)]
    timezone: Option<String>,
    /// Log file path.
    #[arg(long)]
    log_file: Option<String>,
    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    log_level: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("FINANCE_TRACKER"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(data_file) = args.data_file {
        settings.data_file = data_file;
    }
    if let Some(symbol) = args.currency_symbol {
        settings.currency_symbol = symbol;
    }
    if let Some(timezone) = args.timezone {
        settings.timezone = timezone;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = log_file;
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }

    Ok(settings)
}
