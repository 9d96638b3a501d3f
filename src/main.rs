use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::Context;
use clap::Parser;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use snacknest::{
    app::{self, App, Ports},
    checkout::LoggingMessenger,
    config::SiteConfig,
    contact::LoggingEmailService,
    effects::{sound::{NoAudio, TerminalBell}, AudioSink, PointerKind},
    random::{generate_session, REVEAL_SECTIONS},
    screen::TerminalScreen,
};


// Replay a simulated customer session against the ordering page.
#[derive(Debug, Parser)]
#[command(name = "snacknest", version)]
struct Args {
    // Site configuration (TOML); defaults to the stock menu
    #[arg(long)]
    config: Option<PathBuf>,

    // Seed for the simulated session
    #[arg(long, default_value_t = 42)]
    seed: u64,

    // Number of simulated customer actions
    #[arg(long, default_value_t = 30)]
    actions: usize,

    // Delay between actions, in milliseconds
    #[arg(long, default_value_t = 150)]
    pace_ms: u64,

    // Append frames instead of redrawing in place
    #[arg(long)]
    no_redraw: bool,

    // Behave like a touch-primary device (no hero tilt)
    #[arg(long)]
    touch: bool,

    // Ring the terminal bell when items are added
    #[arg(long)]
    bell: bool,
}


#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("snacknest=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SiteConfig::default(),
    };
    info!(
        restaurant = %config.restaurant,
        items = config.catalog.len(),
        seed = args.seed,
        "starting session"
    );

    let audio: Box<dyn AudioSink + Send> = if args.bell {
        Box::new(TerminalBell)
    } else {
        Box::new(NoAudio)
    };
    let ports = Ports {
        messenger: Box::new(LoggingMessenger),
        audio,
        email: Arc::new(LoggingEmailService),
    };
    let pointer = if args.touch {
        PointerKind::Coarse
    } else {
        PointerKind::Fine
    };

    let (tx, rx) = mpsc::unbounded_channel();
    let app = App::new(&config, pointer, REVEAL_SECTIONS, ports, &tx);

    // Customer: feeds the session at a human pace, then walks away
    let session = generate_session(&config.catalog, args.actions, args.seed);
    let pace = Duration::from_millis(args.pace_ms);
    let customer = tokio::spawn(async move {
        for ev in session {
            if tx.send(ev).is_err() {
                break;
            }
            tokio::time::sleep(pace).await;
        }
    });

    let (app, _screen) = app::run(app, rx, TerminalScreen::new(!args.no_redraw)).await;
    customer.await.context("customer task panicked")?;

    let totals = app.cart().totals();
    info!(
        lines = app.cart().len(),
        items = totals.item_count,
        amount = totals.amount_due,
        "session finished"
    );
    Ok(())
}
