#[macro_use]
extern crate log;

mod export;

use std::{fs::File, io::BufWriter, path::PathBuf};

use anyhow::{Context, anyhow};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use sleepdash_algos::DashboardReport;
use sleepdash_client::{DashboardClient, DashboardResponse, Session};
use sleepdash_types::{DashboardData, SleepGoal};

#[derive(Parser)]
pub struct SleepDashCli {
    /// Dashboard backend URL
    #[arg(env = "SLEEPDASH_ENDPOINT", long)]
    pub endpoint: Option<String>,
    /// LINE user id the dashboard belongs to
    #[arg(env = "SLEEPDASH_USER_ID", long)]
    pub user_id: Option<String>,
    /// Sleep goal used when the backend does not send one
    #[arg(env = "SLEEPDASH_GOAL_MINUTES", long, default_value_t = 450)]
    pub goal_minutes: u32,
    #[clap(subcommand)]
    pub subcommand: SleepDashCommand,
}

#[derive(Subcommand)]
pub enum SleepDashCommand {
    ///
    /// Fetch and print the dashboard for a day
    ///
    Dashboard {
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        json: bool,
    },
    ///
    /// Print the dashboard for a payload stored on disk
    ///
    Score {
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    ///
    /// Export the history window as CSV
    ///
    Export {
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    if let Err(error) = dotenv() {
        println!("{}", error);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("reqwest", log::LevelFilter::Warn)
        .filter_module("hyper_util", log::LevelFilter::Warn)
        .init();

    if let Err(error) = run(SleepDashCli::parse()).await {
        error!("{:#}", error);
        std::process::exit(1);
    }
}

async fn run(cli: SleepDashCli) -> anyhow::Result<()> {
    let SleepDashCli {
        endpoint,
        user_id,
        goal_minutes,
        subcommand,
    } = cli;
    let default_goal = SleepGoal(goal_minutes);

    match subcommand {
        SleepDashCommand::Dashboard { date, json } => {
            let (client, session) = connect(endpoint, user_id)?;
            let date = date.unwrap_or_else(today);
            let data = client
                .fetch_dashboard(&session, date)
                .await
                .context("failed to load dashboard")?;

            print_report(&DashboardReport::build(&data, default_goal), json)
        }
        SleepDashCommand::Score { file, json } => {
            let body = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let data = parse_payload(&body)?;

            print_report(&DashboardReport::build(&data, default_goal), json)
        }
        SleepDashCommand::Export { date, output } => {
            let (client, session) = connect(endpoint, user_id)?;
            let date = date.unwrap_or_else(today);
            let data = client
                .fetch_dashboard(&session, date)
                .await
                .context("failed to load dashboard")?;

            if data.history.is_empty() {
                warn!("no history to export for {date}");
            }

            let output =
                output.unwrap_or_else(|| PathBuf::from(format!("sleep_data_{}.csv", today())));
            let file = File::create(&output)
                .with_context(|| format!("failed to create {}", output.display()))?;
            export::write_history_csv(BufWriter::new(file), &data.history)?;

            info!("exported {} days to {}", data.history.len(), output.display());
            Ok(())
        }
    }
}

fn connect(
    endpoint: Option<String>,
    user_id: Option<String>,
) -> anyhow::Result<(DashboardClient, Session)> {
    let endpoint = endpoint.ok_or(anyhow!("no endpoint, set --endpoint or SLEEPDASH_ENDPOINT"))?;
    let user_id = user_id.ok_or(anyhow!("no user id, set --user-id or SLEEPDASH_USER_ID"))?;

    Ok((DashboardClient::new(endpoint), Session::new(user_id)))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Accepts either the backend envelope or a bare dashboard payload.
fn parse_payload(body: &str) -> anyhow::Result<DashboardData> {
    let value: serde_json::Value = serde_json::from_str(body).context("payload is not JSON")?;

    if value.get("success").is_some() {
        return Ok(DashboardResponse::from_json(body)?.into_result()?);
    }

    serde_json::from_value(value).context("invalid dashboard payload")
}

fn print_report(report: &DashboardReport, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_envelope() {
        let data = parse_payload(r#"{ "success": true, "today": { "totalSleep": 400 }, "streak": 2 }"#)
            .unwrap();
        assert_eq!(data.today.unwrap().total_sleep_minutes, 400);
        assert_eq!(data.streak, 2);
    }

    #[test]
    fn parses_bare_payload() {
        let data = parse_payload(r#"{ "today": { "totalSleep": 400 }, "goalMinutes": 420 }"#).unwrap();
        assert_eq!(data.goal_or(SleepGoal(450)), SleepGoal(420));
    }

    #[test]
    fn failed_envelope_is_an_error() {
        let err = parse_payload(r#"{ "success": false, "error": "no rows" }"#).unwrap_err();
        assert!(err.to_string().contains("no rows"));
    }

    #[test]
    fn rejects_non_json() {
        assert!(parse_payload("not json").is_err());
    }

    #[test]
    fn connect_requires_endpoint_and_user() {
        assert!(connect(None, Some("U1".into())).is_err());
        assert!(connect(Some("https://example.com/exec".into()), None).is_err());

        let (client, session) = connect(Some("https://example.com/exec".into()), Some("U1".into())).unwrap();
        assert_eq!(client.endpoint(), "https://example.com/exec");
        assert_eq!(session.user_id, "U1");
    }
}
