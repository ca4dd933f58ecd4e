//! CLI tool for card form validation.
//!
//! # Usage
//!
//! ```bash
//! # Validate a whole form
//! cardform validate --name "John Smith" --number 4111111111111111 --cvv 123 --month 06 --year 26
//!
//! # Validate single fields
//! cardform name "John Smith"
//! cardform number 4111111111111111
//! cardform cvv 123
//! cardform expiry 06 26 --now 2024-01-01
//!
//! # Look up the card network
//! cardform card-type 5500000000000004
//!
//! # Validate JSON lines of form values from a file or stdin
//! cardform batch forms.jsonl --output json
//! ```
//!
//! Exit status is 0 when everything validated, 1 when anything was
//! invalid, and 2 on bad arguments or unreadable input.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use card_form::{
    batch, error::ExpiryError, expiry, format, get_card_type, mask, validate_card_holder_name,
    validate_card_number, validate_cvv, Clock, ExpirationDate, FixedClock, FormReport,
    FormValidator, FormValues, SystemClock, ValidationResult,
};
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cardform")]
#[command(author, version, about = "Payment card form validation tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Treat this day (YYYY-MM-DD, local midnight) as now
    #[arg(long, global = true, value_parser = parse_day)]
    now: Option<NaiveDateTime>,

    /// Years past now an expiration date may lie
    #[arg(long, global = true, default_value_t = expiry::DEFAULT_MAX_YEARS)]
    max_years: u32,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a complete form
    Validate {
        /// Cardholder name
        #[arg(long, default_value = "")]
        name: String,

        /// Card number
        #[arg(long, default_value = "")]
        number: String,

        /// Card verification value
        #[arg(long, default_value = "")]
        cvv: String,

        /// Expiration month (MM)
        #[arg(long, default_value = "")]
        month: String,

        /// Expiration year (YY)
        #[arg(long, default_value = "")]
        year: String,
    },

    /// Validate a cardholder name
    Name {
        /// Name as typed
        value: String,
    },

    /// Validate a card number
    Number {
        /// Card number as typed
        value: String,
    },

    /// Validate a CVV
    Cvv {
        /// CVV as typed
        value: String,
    },

    /// Validate an expiration date
    Expiry {
        /// Month (MM)
        month: String,

        /// Year (YY)
        year: String,
    },

    /// Look up the card network of a number
    CardType {
        /// Card number exactly as typed
        value: String,
    },

    /// Validate forms given as JSON lines
    Batch {
        /// Input file; reads stdin when omitted or "-"
        path: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// System time unless `--now` pinned it.
enum CliClock {
    System(SystemClock),
    Fixed(FixedClock),
}

impl Clock for CliClock {
    fn now(&self) -> NaiveDateTime {
        match self {
            Self::System(c) => c.now(),
            Self::Fixed(c) => c.now(),
        }
    }
}

fn parse_day(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|d| d.and_time(chrono::NaiveTime::MIN))
        .map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Runs one command; `Ok(false)` means the input was invalid.
fn run(cli: Cli) -> Result<bool> {
    let clock = match cli.now {
        Some(now) => CliClock::Fixed(FixedClock::new(now)),
        None => CliClock::System(SystemClock),
    };
    tracing::debug!(now = %clock.now(), max_years = cli.max_years, "clock selected");
    let validator = FormValidator::with_clock(clock).max_years(cli.max_years);
    let output = cli.output;

    match cli.command {
        Commands::Validate {
            name,
            number,
            cvv,
            month,
            year,
        } => {
            let values = FormValues::new(name, number, cvv, ExpirationDate::new(month, year));
            let report = validator.validate(&values);
            print_report(&report, output)?;
            Ok(report.is_form_valid)
        }
        Commands::Name { value } => print_result(&validate_card_holder_name(&value), output),
        Commands::Number { value } => {
            let result = validate_card_number(&value);
            if output == OutputFormat::Text && result.is_valid() {
                let grouped = format::group_digits(&format::strip_whitespace(&value));
                println!("Number: {}", mask::mask_card_number(&grouped));
            }
            print_result(&result, output)
        }
        Commands::Cvv { value } => print_result(&validate_cvv(&value), output),
        Commands::Expiry { month, year } => {
            let date = ExpirationDate::new(month, year);
            let detail = expiry::check_expiration_date_with(&date, validator.clock(), cli.max_years);
            cmd_expiry(detail, output)
        }
        Commands::CardType { value } => {
            let card_type = get_card_type(&value);
            match output {
                OutputFormat::Text => println!("Card Type: {}", card_type),
                OutputFormat::Json => println!("{}", serde_json::to_string(&card_type)?),
            }
            Ok(card_type.is_known())
        }
        Commands::Batch { path } => cmd_batch(&validator, path, output),
    }
}

fn print_result(result: &ValidationResult, output: OutputFormat) -> Result<bool> {
    match output {
        OutputFormat::Text => {
            if result.is_valid() {
                println!("Valid: yes");
            } else {
                println!("Valid: no");
                println!("Error: {}", result.error());
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
    }
    Ok(result.is_valid())
}

fn print_report(report: &FormReport, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Text => {
            println!("Form Valid: {}", if report.is_form_valid { "yes" } else { "no" });
            for (field, result) in report.results.iter() {
                if result.is_valid() {
                    println!("{}: ok", field.label());
                } else {
                    println!("{}: {}", field.label(), result.error());
                }
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}

fn cmd_expiry(detail: std::result::Result<NaiveDate, ExpiryError>, output: OutputFormat) -> Result<bool> {
    let result = ValidationResult::from(detail.clone());
    if output == OutputFormat::Text {
        match &detail {
            Ok(date) => println!("Expires: {}", date.format("%m/%Y")),
            Err(reason) => println!("Reason: {}", reason),
        }
    }
    print_result(&result, output)
}

fn cmd_batch<C: Clock>(validator: &FormValidator<C>, path: Option<PathBuf>, output: OutputFormat) -> Result<bool> {
    let reader: Box<dyn BufRead> = match path {
        Some(p) if p.as_os_str() != "-" => {
            let file = File::open(&p).with_context(|| format!("cannot open {}", p.display()))?;
            Box::new(BufReader::new(file))
        }
        _ => Box::new(BufReader::new(io::stdin())),
    };

    let mut forms = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.context("failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }
        let values: FormValues = serde_json::from_str(&line)
            .with_context(|| format!("line {}: not a form value object", i + 1))?;
        forms.push(values);
    }
    tracing::info!(forms = forms.len(), "batch loaded");

    let reports = batch::validate_forms(validator, &forms);
    let (valid, invalid) = batch::count_reports(&reports);

    match output {
        OutputFormat::Text => {
            for (i, report) in reports.iter().enumerate() {
                let invalid_fields: Vec<String> = report
                    .results
                    .invalid_fields()
                    .iter()
                    .map(|f| f.to_string())
                    .collect();
                if report.is_form_valid {
                    println!("#{}: valid", i + 1);
                } else {
                    println!("#{}: invalid ({})", i + 1, invalid_fields.join(", "));
                }
            }
            println!("Total: {}, Valid: {}, Invalid: {}", forms.len(), valid, invalid);
        }
        OutputFormat::Json => {
            let summary = serde_json::json!({
                "results": reports,
                "summary": { "total": forms.len(), "valid": valid, "invalid": invalid },
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(invalid == 0)
}
