use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context as _;
use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, Clock, ProgressOverview, ProgressService};
use tracing::info;
use tracker_core::model::{ProgressStore, Schedule};
use ui::{App, UiApp, build_app_context};

mod config;
mod report;

use config::{AppConfig, Cli, Command};

struct DesktopApp {
    title: String,
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn schedule(&self) -> Arc<Schedule> {
        self.services.schedule()
    }

    fn initial_progress(&self) -> ProgressStore {
        self.services.initial_progress().clone()
    }

    fn progress_service(&self) -> Arc<ProgressService> {
        self.services.progress_service()
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    if quiet {
        return;
    }

    // Honor RUST_LOG if set, otherwise use verbosity flag
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

async fn load_services(config: &AppConfig) -> anyhow::Result<AppServices> {
    AppServices::new_csv(
        &config.schedule_path,
        &config.progress_path,
        Clock::default_clock(),
    )
    .await
    .with_context(|| {
        format!(
            "cannot start with schedule {} and progress {}",
            config.schedule_path.display(),
            config.progress_path.display()
        )
    })
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::from(&cli);
    // Both files are read before anything else so bad input fails here, once.
    let services = load_services(&config).await?;

    match cli.command() {
        Command::Ui => {
            info!(
                schedule = %config.schedule_path.display(),
                progress = %config.progress_path.display(),
                "Launching desktop window"
            );
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                title: config.window_title.clone(),
                services,
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(config.window_title)
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Report => {
            let overview =
                ProgressOverview::build(&services.schedule(), services.initial_progress());
            print!("{}", report::render(&config.window_title, &overview));
            Ok(())
        }
        Command::Reset => {
            let mut store = services.initial_progress().clone();
            let cleared = store.len();
            services
                .progress_service()
                .reset(&mut store)
                .await
                .context("failed to save reset progress")?;
            println!("Cleared {cleared} progress entries.");
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // At this layer (binary glue), printing once is fine.
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}
