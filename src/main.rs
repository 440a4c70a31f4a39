use clap::{Parser, Subcommand};
use iban_check::batch::{self, BatchReport, IssueLevel};
use iban_check::logging::{self, LogSettings};
use iban_check::registry::{normalize_country_code, CountryFormat, Registry};
use iban_check::util::{group_by_four, normalize, obscure};
use iban_check::{build_iban, checksum, replace_check_digits, validate, Iban};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "iban-check")]
#[command(about = "IBAN validation, checksum and decomposition", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Validate(ValidateArgs),
    Checksum(ChecksumArgs),
    Inspect(InspectArgs),
    Countries(CountriesArgs),
    Batch(BatchArgs),
}

#[derive(Parser)]
struct ValidateArgs {
    #[arg(required = true)]
    ibans: Vec<String>,
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser)]
struct ChecksumArgs {
    iban: String,
}

#[derive(Parser)]
struct InspectArgs {
    iban: String,
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser)]
struct CountriesArgs {
    #[arg(long)]
    country: Option<String>,
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser)]
struct BatchArgs {
    #[arg(long, default_value = "data/iban.json")]
    input: PathBuf,
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Serialize)]
struct ValidateOutput {
    input: String,
    is_valid: bool,
    formatted: Option<String>,
    error: Option<String>,
}

#[derive(Serialize)]
struct InspectOutput<'a> {
    #[serde(flatten)]
    iban: &'a Iban,
    formatted: String,
    country_name: Option<&'static str>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    logging::init_logging("iban-check", &LogSettings::from_env())?;
    let cli = Cli::parse();
    match cli.command {
        Command::Validate(args) => run_validate(args),
        Command::Checksum(args) => run_checksum(args),
        Command::Inspect(args) => run_inspect(args),
        Command::Countries(args) => run_countries(args),
        Command::Batch(args) => run_batch(args),
    }
}

fn run_validate(args: ValidateArgs) -> Result<(), String> {
    let mut outputs = Vec::with_capacity(args.ibans.len());
    for raw in &args.ibans {
        let output = match validate(raw) {
            Ok(result) => ValidateOutput {
                input: obscure(&normalize(raw)),
                is_valid: result.is_valid,
                formatted: result.formatted,
                error: None,
            },
            Err(err) => ValidateOutput {
                input: obscure(&normalize(raw)),
                is_valid: false,
                formatted: None,
                error: Some(err.to_string()),
            },
        };
        outputs.push(output);
    }

    if args.json {
        let json = serde_json::to_string_pretty(&outputs).map_err(|err| err.to_string())?;
        println!("{json}");
    } else {
        for output in &outputs {
            match (&output.formatted, &output.error) {
                (Some(formatted), _) => println!("VALID   {formatted}"),
                (None, Some(error)) => println!("INVALID {}: {}", output.input, error),
                (None, None) => println!("INVALID {}: check digits do not verify", output.input),
            }
        }
    }

    let failed = outputs.iter().filter(|output| !output.is_valid).count();
    if failed > 0 {
        return Err(format!(
            "{} of {} IBAN(s) failed validation",
            failed,
            outputs.len()
        ));
    }
    Ok(())
}

fn run_checksum(args: ChecksumArgs) -> Result<(), String> {
    let digits = checksum(&args.iban).map_err(|err| err.to_string())?;
    let corrected = replace_check_digits(&args.iban, digits).map_err(|err| err.to_string())?;
    let given = normalize(&args.iban);

    println!("Check digits: {digits:02}");
    println!("IBAN: {}", group_by_four(&corrected));
    if given != corrected {
        status(&format!(
            "Given check digits {} replaced by {:02}",
            given.get(2..4).unwrap_or(""),
            digits
        ));
    }
    Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<(), String> {
    let iban = build_iban(&args.iban).map_err(|err| err.to_string())?;
    let country_name = iban.country().map(|country| country.name);

    if args.json {
        let output = InspectOutput {
            iban: &iban,
            formatted: iban.formatted(),
            country_name,
        };
        let json = serde_json::to_string_pretty(&output).map_err(|err| err.to_string())?;
        println!("{json}");
        return Ok(());
    }

    println!("IBAN:         {}", iban.formatted());
    println!(
        "Country:      {} ({})",
        iban.country_code,
        country_name.unwrap_or("unknown")
    );
    println!("Check digits: {}", iban.checksum);
    println!("BBAN:         {}", iban.bban);
    println!(
        "Bank code:    {}",
        iban.bank_code.as_deref().unwrap_or("(not defined for country)")
    );
    Ok(())
}

fn run_countries(args: CountriesArgs) -> Result<(), String> {
    let registry = Registry::standard();
    let countries: Vec<&CountryFormat> = match args.country {
        Some(value) => {
            let code = normalize_country_code(&value)
                .ok_or_else(|| format!("invalid country code in --country: {}", value))?;
            let country = registry
                .get(&code)
                .ok_or_else(|| format!("country <{}> is not in the list", code))?;
            vec![country]
        }
        None => registry.iter().collect(),
    };

    if args.json {
        let json = serde_json::to_string_pretty(&countries).map_err(|err| err.to_string())?;
        println!("{json}");
        return Ok(());
    }

    for country in &countries {
        println!(
            "{}  {:>2}  {:<12} {:<34} {}",
            country.code, country.length, country.bban_format, country.field_layout, country.name
        );
    }
    status(&format!("{} country format(s)", countries.len()));
    Ok(())
}

fn run_batch(args: BatchArgs) -> Result<(), String> {
    let start = Instant::now();
    let report = batch::check_file(&args.input)?;
    let elapsed = start.elapsed();

    status(&format!(
        "Batch {}: records={} valid={} errors={} warnings={}",
        args.input.display(),
        report.total_records,
        report.valid_records,
        report.error_count(),
        report.warning_count()
    ));
    report_issue_kinds(&report, IssueLevel::Error);
    report_issue_kinds(&report, IssueLevel::Warning);

    if let Some(output) = args.output {
        batch::write_report(&output, &report)?;
        status(&format!("Batch report written to {}", output.display()));
    }
    status(&format!("Batch time: {} ms", elapsed.as_millis()));

    if report.error_count() > 0 {
        return Err(format!("batch failed with {} error(s)", report.error_count()));
    }
    Ok(())
}

/// Top issue kinds for one level, most frequent first.
fn report_issue_kinds(report: &BatchReport, level: IssueLevel) {
    const SHOWN: usize = 5;
    let tally = report.tally(level);
    let label = match level {
        IssueLevel::Error => "errors",
        IssueLevel::Warning => "warnings",
    };
    for (message, count) in tally.iter().take(SHOWN) {
        status(&format!("  {label}: {count} x {message}"));
    }
    if tally.len() > SHOWN {
        status(&format!("  {label}: {} more kind(s)", tally.len() - SHOWN));
    }
}

/// Progress and summary lines go through the logger when it would show
/// them, and to stdout otherwise.
fn status(message: &str) {
    if log::log_enabled!(log::Level::Info) {
        log::info!("{}", message);
    } else {
        println!("{message}");
    }
}
