//! End-to-end demo against a running recognition service.
//!
//! Usage:
//!   cargo run --example verify_face_demo -- <username> <image-path>
//!
//! Reads `FACEGATE_RECOGNITION_URL` (and friends) from the environment or
//! a local `.env` file.

use std::path::Path;
use std::sync::Arc;

use fg_core::domain::value_objects::ImageUpload;
use fg_core::services::access_gate::{AccessGate, AuthorizationView};
use fg_core::services::workflow::WorkflowService;
use fg_infra::HttpRecognitionClient;
use fg_shared::config::{Environment, LogFormat, LoggingConfig};

fn init_tracing() {
    let logging = LoggingConfig::for_environment(Environment::from_env());
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Compact => builder.compact().init(),
    }
}

fn mime_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        _ => "image/jpeg",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let mut args = std::env::args().skip(1);
    let username = args.next().expect("usage: verify_face_demo <username> <image-path>");
    let image_path = args.next().expect("usage: verify_face_demo <username> <image-path>");

    let client = Arc::new(HttpRecognitionClient::from_env()?);

    let health = client.health().await?;
    println!(
        "Service health: {} (model loaded: {})",
        health.status, health.model_loaded
    );

    let path = Path::new(&image_path);
    let bytes = std::fs::read(path)?;
    let image = ImageUpload::new(bytes, mime_for(path));

    let mut workflow = WorkflowService::new(client);
    workflow.submit_username(&username)?;

    let outcome = workflow.submit_image(image).await?;
    println!("Granted: {}", outcome.granted);
    for step in &outcome.steps {
        println!(
            "  [{}] {} - {}",
            if step.passed { "pass" } else { "fail" },
            step.label,
            step.detail_text
        );
    }
    if let Some(reason) = &outcome.failure_reason {
        println!("Reason: {}", reason);
    }
    if outcome.support_required {
        println!("Account denied; contact support.");
    }

    workflow.continue_to_protected()?;
    match AccessGate::commit(workflow.session()) {
        AuthorizationView::Protected { username } => {
            println!("Welcome, {}! The dashboard is open.", username);
        }
        AuthorizationView::Public => println!("Access not granted."),
    }

    Ok(())
}
