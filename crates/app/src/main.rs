use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::{BankName, IdError};
use services::{BankSource, DirectoryBanks, EmbeddedBanks, HttpBanks, QuizService};
use ui::{App, UiApp, build_app_context};

/// Tabbed multiple-choice quizzes from static question banks.
#[derive(Debug, Parser)]
#[command(name = "quiz", version)]
struct Cli {
    #[command(flatten)]
    source: SourceArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Args)]
struct SourceArgs {
    /// Directory of `<bank>.json` files. Defaults to the built-in sample banks.
    #[arg(long, env = "QUIZ_BANK_DIR", global = true, conflicts_with = "bank_url")]
    bank_dir: Option<PathBuf>,

    /// Base URL serving `<bank>.json` files. Needs `--banks`.
    #[arg(long, env = "QUIZ_BANK_URL", global = true, requires = "banks")]
    bank_url: Option<String>,

    /// Comma-separated bank names to fetch from `--bank-url`, in tab order.
    #[arg(
        long,
        env = "QUIZ_BANKS",
        global = true,
        value_delimiter = ',',
        value_parser = parse_bank_name
    )]
    banks: Vec<BankName>,

    /// Window title and page heading.
    #[arg(long, env = "QUIZ_TITLE", global = true, default_value = "Quiz")]
    title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
enum Command {
    /// Open the quiz window (default).
    Ui,
    /// Load every bank once and report question counts.
    Check,
}

fn parse_bank_name(raw: &str) -> Result<BankName, IdError> {
    BankName::new(raw)
}

struct DesktopApp {
    title: String,
    quiz_service: Arc<QuizService>,
}

impl UiApp for DesktopApp {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }
}

async fn build_source(args: &SourceArgs) -> anyhow::Result<Arc<dyn BankSource>> {
    if let Some(dir) = &args.bank_dir {
        let source = DirectoryBanks::scan(dir)
            .await
            .with_context(|| format!("failed to read bank directory {}", dir.display()))?;
        log::info!("serving question banks from {}", source.root().display());
        return Ok(Arc::new(source));
    }

    if let Some(url) = &args.bank_url {
        log::info!("fetching {} question banks from {url}", args.banks.len());
        return Ok(Arc::new(HttpBanks::new(url.clone(), args.banks.clone())));
    }

    log::info!("using built-in question banks");
    Ok(Arc::new(EmbeddedBanks::builtin()))
}

async fn check(service: &QuizService) -> anyhow::Result<()> {
    let mut failures = 0_usize;
    for name in service.bank_names() {
        match service.load_bank(&name).await {
            Ok(bank) => println!("{name}: {} questions", bank.len()),
            Err(err) => {
                failures += 1;
                println!("{name}: {err}");
            }
        }
    }

    if failures > 0 {
        bail!("{failures} question bank(s) failed to load");
    }
    Ok(())
}

fn launch_ui(title: String, quiz_service: Arc<QuizService>) -> anyhow::Result<()> {
    if quiz_service.bank_names().is_empty() {
        bail!("no question banks found");
    }

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        title: title.clone(),
        quiz_service,
    });
    let context = build_app_context(&app);

    // Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(title)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let source = build_source(&cli.source).await?;
    let service = Arc::new(QuizService::new(source));

    match cli.command.unwrap_or(Command::Ui) {
        Command::Ui => launch_ui(cli.source.title, service),
        Command::Check => check(&service).await,
    }
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run().await {
        eprintln!("{err:#}");
        std::process::exit(2);
    }
}
