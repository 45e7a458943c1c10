//! ask - terminal front-end for the interview question API.

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use interview_api::dashboard::{FormState, HttpBackend};

/// Generate one interview question for a company and role
#[derive(Parser, Debug)]
#[command(name = "ask")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Company name
    #[arg(short, long, required_unless_present = "check")]
    company: Option<String>,

    /// Job title applied for
    #[arg(short, long, required_unless_present = "check")]
    job_title: Option<String>,

    /// Only check that the server is up and print its health
    #[arg(long)]
    check: bool,

    /// Base URL of the running API server
    #[arg(short, long, default_value = "http://localhost:8080")]
    server: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    let backend = HttpBackend::new(cli.server);

    if cli.check {
        let health = backend.health().await.map_err(anyhow::Error::msg)?;
        println!(
            "{} v{} ({}): {}",
            health.service, health.version, health.model, health.status
        );
        return Ok(());
    }

    let mut form = FormState::new(
        cli.company.unwrap_or_default(),
        cli.job_title.unwrap_or_default(),
    );

    eprintln!("면접 질문을 생성하는 중...");
    if !form.submit(&backend).await {
        bail!(form.error.unwrap_or_default());
    }

    for question in &form.questions {
        println!("[{}] {}", question.id, question.question);
        if !question.evaluation_focus.is_empty() {
            println!();
            println!("평가 포인트:");
            for focus in &question.evaluation_focus {
                println!("  - {focus}");
            }
        }
    }
    println!();
    println!("🎉 면접 질문이 준비되었습니다!");

    Ok(())
}
