use std::fmt::Write as _;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::error;

use crate::api::{build_simulate_response, run_http_server};
use crate::core::{
    DEFAULT_TIER_ID, PayoutMode, Tier, compute_quotas, parse_contribution, simulate, tiers,
};
use crate::error::tier_by_id;
use crate::report::{
    DISCLAIMER, EMPTY_PROMPT, advisory, minimum_hint, summary_rows, tier_option_label,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum CliPayoutMode {
    Mensal,
    Bullet,
}

impl From<CliPayoutMode> for PayoutMode {
    fn from(value: CliPayoutMode) -> Self {
        match value {
            CliPayoutMode::Mensal => PayoutMode::Monthly,
            CliPayoutMode::Bullet => PayoutMode::Bullet,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "cotas",
    about = "Tier-based contribution simulator (whole quotas, fixed term, pre-set monthly rate)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the simulator page and the JSON API
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    /// Run one simulation and print the summary
    Simulate(SimulateArgs),
    /// List the available lotes
    Lotes,
}

#[derive(Args, Debug)]
pub struct SimulateArgs {
    #[arg(long, default_value_t = DEFAULT_TIER_ID, help = "Lote id (1-6)")]
    pub lote: u32,
    #[arg(
        long,
        allow_hyphen_values = true,
        help = "Contribution as typed by the user, e.g. 250000, 250.000 or 100.000,50"
    )]
    pub valor: String,
    #[arg(long, value_enum, default_value_t = CliPayoutMode::Mensal)]
    pub modo: CliPayoutMode,
    #[arg(long, help = "Print the API response body instead of the text summary")]
    pub json: bool,
}

pub async fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Serve { port } => {
            if let Err(e) = run_http_server(port).await {
                error!("server error: {e}");
                return ExitCode::from(1);
            }
            ExitCode::SUCCESS
        }
        Command::Simulate(args) => run_simulate(&args),
        Command::Lotes => {
            print!("{}", render_catalog());
            ExitCode::SUCCESS
        }
    }
}

fn run_simulate(args: &SimulateArgs) -> ExitCode {
    let tier = match tier_by_id(args.lote) {
        Ok(tier) => tier,
        Err(e) => {
            error!("{e}");
            return ExitCode::from(2);
        }
    };
    let mode = PayoutMode::from(args.modo);

    if args.json {
        let response = build_simulate_response(tier, parse_contribution(&args.valor), mode);
        match serde_json::to_string_pretty(&response) {
            Ok(body) => println!("{body}"),
            Err(e) => {
                error!("failed to encode response: {e}");
                return ExitCode::from(1);
            }
        }
    } else {
        print!("{}", render_summary(tier, &args.valor, mode));
    }
    ExitCode::SUCCESS
}

pub fn render_catalog() -> String {
    let mut out = String::new();
    for tier in tiers() {
        let _ = writeln!(out, "{:>2}  {}", tier.id, tier_option_label(tier));
    }
    out
}

pub fn render_summary(tier: &Tier, raw_contribution: &str, mode: PayoutMode) -> String {
    let quotas = compute_quotas(parse_contribution(raw_contribution), tier);
    let mut out = String::new();
    let _ = writeln!(out, "{}", minimum_hint(tier));

    match simulate(&quotas, tier, mode) {
        Some(result) => {
            let rows = summary_rows(tier, &result);
            let width = rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);
            for row in rows {
                let pad = width - row.label.chars().count();
                let _ = writeln!(out, "{}{}  {}", row.label, " ".repeat(pad), row.value);
            }
            if let Some(note) = advisory(tier, &quotas) {
                let _ = writeln!(out, "{note}");
            }
        }
        None => {
            let _ = writeln!(out, "{EMPTY_PROMPT}");
        }
    }

    let _ = writeln!(out, "{DISCLAIMER}");
    out
}
