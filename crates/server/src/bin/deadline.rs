use chrono::{NaiveDate, NaiveDateTime};
use clap::{Args, Parser, Subcommand, ValueEnum};
use server::calendar::dates::MIDNIGHT;
use server::config::load_calendar_config;
use server::startup::build_calculator;
use server::telemetry::init_logging;
use server::DeadlinesCalculator;
use shared_types::{AllocatedTrack, CalendarError, DeadlineRule};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "deadline",
    about = "Compute claim deadlines against the live bank holiday calendar",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply a deadline rule to an anchor date
    Compute(ComputeArgs),
    /// List upcoming non-working days (weekends excluded)
    Holidays(HolidaysArgs),
}

#[derive(Args, Debug)]
struct ComputeArgs {
    #[arg(long, value_enum)]
    rule: RuleArg,
    /// Anchor as `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM[:SS]`
    #[arg(long, value_parser = parse_anchor)]
    anchor: NaiveDateTime,
    /// Required for `applicant-response`: small-claim, fast-claim or multi-claim
    #[arg(long, value_parser = parse_track, required_if_eq("rule", "applicant-response"))]
    track: Option<AllocatedTrack>,
}

#[derive(Args, Debug)]
struct HolidaysArgs {
    /// First date to list (defaults to the earliest loaded date)
    #[arg(long)]
    from: Option<NaiveDate>,
    #[arg(long, default_value_t = 20)]
    limit: usize,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum RuleArg {
    ClaimNotification,
    ClaimDetailsNotification,
    ApplicantResponse,
}

fn parse_track(s: &str) -> Result<AllocatedTrack, String> {
    AllocatedTrack::from_str_opt(s).ok_or_else(|| format!("unknown track '{s}'"))
}

fn parse_anchor(s: &str) -> Result<NaiveDateTime, String> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_time(MIDNIGHT));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map_err(|e| format!("invalid anchor '{s}': {e}"))
}

fn rule_for(args: &ComputeArgs) -> Result<DeadlineRule, String> {
    match args.rule {
        RuleArg::ClaimNotification => Ok(DeadlineRule::ClaimNotification),
        RuleArg::ClaimDetailsNotification => Ok(DeadlineRule::ClaimDetailsNotification),
        RuleArg::ApplicantResponse => args
            .track
            .map(|track| DeadlineRule::ApplicantResponse { track })
            .ok_or_else(|| "--track is required for applicant-response".to_string()),
    }
}

async fn load_calculator() -> Result<DeadlinesCalculator, CalendarError> {
    let config = load_calendar_config()?;
    build_calculator(&config).await
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Compute(args) => {
            let rule = match rule_for(&args) {
                Ok(rule) => rule,
                Err(e) => {
                    eprintln!("{e}");
                    return ExitCode::from(2);
                }
            };
            let calculator = match load_calculator().await {
                Ok(calculator) => calculator,
                Err(e) => return refuse(&e),
            };
            let result = calculator.calculate(&rule, args.anchor);
            match serde_json::to_string_pretty(&result) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Failed to render result: {e}");
                    return ExitCode::FAILURE;
                }
            }
        }
        Command::Holidays(args) => {
            let calculator = match load_calculator().await {
                Ok(calculator) => calculator,
                Err(e) => return refuse(&e),
            };
            let indicator = calculator.working_day_indicator();
            let mut days: Vec<NaiveDate> = indicator
                .public_holidays()
                .union(indicator.extra_non_working_days())
                .sorted();
            if let Some(from) = args.from {
                days.retain(|d| *d >= from);
            }
            for day in days.into_iter().take(args.limit) {
                println!("{} {}", day, day.format("%A"));
            }
        }
    }

    ExitCode::SUCCESS
}

fn refuse(err: &CalendarError) -> ExitCode {
    tracing::error!(error = %err, "Calendar could not be loaded; refusing to compute deadlines");
    exit_code_for(err)
}

fn exit_code_for(err: &CalendarError) -> ExitCode {
    if err.is_unavailable() {
        ExitCode::from(69)
    } else {
        ExitCode::from(65)
    }
}
