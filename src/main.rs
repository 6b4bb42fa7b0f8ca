//! VYSE site core - command line entry point.
//!
//! Reads a contact form as JSON from stdin, pushes it through the same page
//! event flow the browser uses, and prints the resulting notice. Handy for
//! checking relay configuration without a browser.

use anyhow::{Context, Result};
use std::io::Read;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use vyse_site::domain::Field;
use vyse_site::form::NoticeKind;
use vyse_site::{
    Config, ContactForm, Effect, FormFields, Metrics, Page, PageEvent, PageLayout, RelayClient,
    RelaySubmitter, SimulatedSubmitter, SubmissionMode, SubmissionStrategy,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can apply
    let config = Config::from_env()?;

    // Logging goes to stderr; stdout carries the notice
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Submission mode: {:?}", config.submission_mode);

    let metrics = Metrics::new();
    let strategy: Arc<dyn SubmissionStrategy> = match config.submission_mode {
        SubmissionMode::Relay => Arc::new(RelaySubmitter::new(
            RelayClient::new(&config).with_metrics(metrics.clone()),
            config.relay_access_key.clone(),
        )),
        SubmissionMode::Simulated => Arc::new(SimulatedSubmitter::new(Duration::from_millis(
            config.simulated_delay_ms,
        ))),
    };

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read form from stdin")?;
    let fields: FormFields =
        serde_json::from_str(&input).context("Form must be a JSON object of field values")?;

    let form =
        ContactForm::new(strategy, config.support_email.clone()).with_metrics(metrics.clone());
    let mut page = Page::new(
        PageLayout {
            carousel_cards: None,
            viewport_width: 1440,
        },
        Some(form),
    );
    page.init();

    for field in Field::ALL {
        if let Some(value) = fields.get(field) {
            page.handle(PageEvent::FieldInput {
                field,
                value: value.to_string(),
            });
        }
    }

    let mut effects = page.handle(PageEvent::Submit);
    if let Some(pending) = page.take_pending_submission() {
        let outcome = pending.run().await;
        effects = page.handle(PageEvent::SubmissionFinished(outcome));
    }

    info!("Metrics: {:?}", metrics.summary());

    let notice = effects.into_iter().find_map(|effect| match effect {
        Effect::Notice(notice) => Some(notice),
        _ => None,
    });

    match notice {
        Some(notice) if notice.kind == NoticeKind::Success => {
            println!("{}", notice.text);
            Ok(())
        }
        Some(notice) => {
            println!("{}", notice.text);
            error!("Contact form was not sent");
            std::process::exit(1);
        }
        None => anyhow::bail!("Submission produced no notice"),
    }
}
