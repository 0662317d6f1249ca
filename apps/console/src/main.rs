use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use client_core::{build_request, FormState, SubmissionController, SubmissionPhase, VerdictView};
use shared::domain::{Channel, RequestId, UserId};

#[derive(Parser, Debug)]
struct Args {
    #[arg(long)]
    server_url: String,
    #[arg(long)]
    user_id: String,
    /// Describe the issue to triage.
    #[arg(long)]
    message: String,
    /// Defaults to a fresh session id (req_<random>).
    #[arg(long)]
    request_id: Option<String>,
    #[arg(long, default_value = "web_portal")]
    channel: Channel,
    #[arg(long)]
    product_name: Option<String>,
    #[arg(long)]
    product_version: Option<String>,
    /// Defaults to us-east-1.
    #[arg(long)]
    region: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut form = FormState::new_session();
    form.user_id = UserId::new(args.user_id);
    form.message = args.message;
    form.channel = args.channel;
    if let Some(request_id) = args.request_id {
        form.request_id = RequestId::new(request_id);
    }
    form.product_name = args.product_name;
    form.product_version = args.product_version;
    if let Some(region) = args.region {
        form.region = Some(region);
    }

    if let Err(err) = form.validate() {
        eprintln!("cannot submit: {err}");
        std::process::exit(1);
    }

    let request = build_request(&form, Utc::now());
    println!("Submitting triage request {}", request.request_id);

    let controller = SubmissionController::over_http(args.server_url);
    controller.submit(request).await;

    if controller.phase().await == SubmissionPhase::Succeeded {
        let result = controller.result().await.unwrap_or_default();
        let view = VerdictView::from_result(&result);
        println!("Action:             {}", view.action);
        println!("Category:           {}", view.category);
        println!("Severity:           {}", view.severity);
        println!("Recommended action: {}", view.recommended_action);
        println!("Diagnostics:");
        println!("{}", view.diagnostics);
        Ok(())
    } else {
        let message = controller
            .error()
            .await
            .map(|outcome| outcome.message)
            .unwrap_or_else(|| "unknown error".to_string());
        eprintln!("Triage failed: {message}");
        std::process::exit(1)
    }
}
