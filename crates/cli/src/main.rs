//! Support assistant entry point
//!
//! Wires the classification pipeline into the conversation controller and
//! runs the line-oriented turn loop: read one utterance, compute one reply,
//! write one line, until an exit transition.

use std::io::Write;

use tokio::io::AsyncBufReadExt;
use tracing::Instrument;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use uuid::Uuid;

use sahayak_config::{load_settings, Settings};
use sahayak_dialog::{Controller, ReplySelector, ResponseCatalog, SessionState, BANNER};
use sahayak_nlu::{
    create_detector, create_scorer, IntentClassifier, LanguageClassifier, LanguageConfig,
    LanguageProvider, SentimentClassifier, SentimentConfig, SentimentProvider,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Priority: env vars > config/{env}.yaml > config/default.yaml > defaults
    let env = std::env::var("SAHAYAK_ENV").ok();
    let settings = match load_settings(env.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            // Tracing not yet initialized, use eprintln for early logging
            eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
            Settings::default()
        },
    };

    init_tracing(&settings);

    tracing::info!(
        environment = ?settings.environment,
        config = env.as_deref().unwrap_or("default"),
        "Starting {} v{}",
        settings.assistant.name,
        env!("CARGO_PKG_VERSION")
    );

    let controller = build_controller(&settings);

    let session_id = Uuid::new_v4();
    let span = tracing::info_span!("conversation", %session_id);
    run_loop(&controller, &settings).instrument(span).await
}

/// Wire the classifiers into a controller according to settings
fn build_controller(settings: &Settings) -> Controller {
    let language_config = LanguageConfig {
        provider: if settings.assistant.language_detection {
            LanguageProvider::Script
        } else {
            LanguageProvider::Disabled
        },
    };
    let sentiment_config = SentimentConfig {
        provider: if settings.assistant.sentiment_analysis {
            SentimentProvider::Lexicon
        } else {
            SentimentProvider::Disabled
        },
    };

    Controller::new(
        LanguageClassifier::new(create_detector(&language_config)),
        ReplySelector::new(
            IntentClassifier::new(),
            SentimentClassifier::new(create_scorer(&sentiment_config)),
            ResponseCatalog::new(),
        ),
    )
}

/// The blocking read-classify-reply loop
async fn run_loop(controller: &Controller, settings: &Settings) -> anyhow::Result<()> {
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    let mut stdout = std::io::stdout();
    let mut session = SessionState::new();

    if settings.assistant.show_banner {
        println!("\n{BANNER}\n");
    }

    loop {
        print!("You: ");
        stdout.flush()?;

        let Some(line) = lines.next_line().await? else {
            tracing::info!("input closed, ending conversation");
            break;
        };

        let outcome = controller.handle_turn(&mut session, &line).await;
        println!("{}: {}", settings.assistant.name, outcome.text());

        if outcome.is_final() {
            tracing::info!("conversation ended");
            break;
        }
    }

    Ok(())
}

/// Initialize tracing (console only)
///
/// Logs go to stderr so they never interleave with the conversation on
/// stdout.
fn init_tracing(settings: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &settings.observability.log_level;
        format!("sahayak={}", level).into()
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let fmt_layer = if settings.observability.log_json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };
    subscriber.with(fmt_layer).init();
}
