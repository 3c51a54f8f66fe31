use crate::render::{render_answer, render_dashboard, render_scores, render_suggestions};
use chrono::Utc;
use clap::Args;
use complysmart::audit::{AuditApiClient, AuditResponse, AuditSession};
use complysmart::config::AppConfig;
use complysmart::dashboard::COMPLIANCE_SUMMARY;
use complysmart::error::AppError;
use complysmart::scoring::extract_scores;
use complysmart::telemetry;
use std::fs::File;
use std::path::PathBuf;
use tracing::info;

const SIMULATED_REPORT: &str = "Simulated audit: no report was requested from the audit service.";

#[derive(Args, Debug, Default)]
pub(crate) struct DashboardArgs {
    /// Simulate the audit with this score text instead of calling the audit API
    #[arg(long)]
    pub(crate) score_text: Option<String>,
    /// Print the dashboard as JSON
    #[arg(long)]
    pub(crate) json: bool,
    /// Print the detailed audit report after the dashboard
    #[arg(long)]
    pub(crate) show_report: bool,
    /// Write the category scores to a CSV file
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct AskArgs {
    /// Question to forward to the audit service
    #[arg(conflicts_with = "suggested")]
    pub(crate) question: Option<String>,
    /// Ask one of the suggested questions by index (see --list)
    #[arg(long)]
    pub(crate) suggested: Option<usize>,
    /// List the suggested questions and exit
    #[arg(long)]
    pub(crate) list: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ExtractArgs {
    /// Read compliance lines from this file instead of stdin
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
    /// Print the score table as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

fn load_config() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(config)
}

pub(crate) async fn run_dashboard(args: DashboardArgs) -> Result<(), AppError> {
    let DashboardArgs {
        score_text,
        json,
        show_report,
        csv,
    } = args;

    let config = load_config()?;
    let response = match score_text {
        Some(score) => {
            info!("simulating audit from supplied score text");
            AuditResponse {
                score,
                audit: SIMULATED_REPORT.to_string(),
            }
        }
        None => AuditApiClient::new(&config.audit_api)?.run_audit().await?,
    };

    let mut session = AuditSession::new();
    session.record_audit(response, Utc::now());
    let dashboard = session.dashboard().ok_or(AppError::NoAudit)?;

    if json {
        let rendered = serde_json::to_string_pretty(&dashboard).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        render_dashboard(&dashboard);
    }

    if show_report {
        if let Some(report) = session.report() {
            println!("\nDetailed audit report\n{report}");
        }
    }

    if let Some(path) = csv {
        let file = File::create(&path)?;
        extract_scores(COMPLIANCE_SUMMARY).write_csv(file)?;
        info!(path = %path.display(), "wrote compliance scores csv");
    }

    Ok(())
}

pub(crate) async fn run_ask(args: AskArgs) -> Result<(), AppError> {
    if args.list {
        render_suggestions();
        return Ok(());
    }

    let mut session = AuditSession::new();
    match (args.question, args.suggested) {
        (Some(question), _) => session.queue_question(question),
        (None, Some(index)) => {
            session
                .select_suggestion(index)
                .ok_or(AppError::UnknownSuggestion(index))?;
        }
        (None, None) => {}
    }
    let question = session.pending_question().unwrap_or_default().to_string();

    let config = load_config()?;
    let client = AuditApiClient::new(&config.audit_api)?;
    let answer = client.ask(&question).await?;
    session.take_question();

    render_answer(&question, &answer);
    Ok(())
}

pub(crate) fn run_extract(args: ExtractArgs) -> Result<(), AppError> {
    let text = match args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => std::io::read_to_string(std::io::stdin())?,
    };

    let table = extract_scores(&text);
    if args.json {
        let rendered = serde_json::to_string_pretty(&table).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        render_scores(&table);
    }
    Ok(())
}
