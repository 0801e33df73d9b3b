use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Report, Result, WrapErr};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use analytica::application::{
    AiQueryBridge, DashboardLoader, RealtimeFeed, ThemeSession, ViewBinding,
};
use analytica::domain::SlotId;
use analytica::domain::errors::ApiError;
use analytica::domain::ports::{RealtimePort, RealtimeRenderer};
use analytica::infrastructure::{
    AnalyticsClient, AppConfig, CliArgs, Command, RealtimeClient, RealtimeClientConfig,
    StorageManager, SystemClock, ThemeAction,
};
use analytica::presentation::MobileApp;
use analytica::presentation::console::{JsonLineRenderer, PrintSlot};
use analytica::presentation::theme::PaletteSurface;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

struct Context {
    config: AppConfig,
    storage: StorageManager,
}

impl Context {
    fn load(args: &CliArgs) -> Result<Self> {
        let storage = StorageManager::new().wrap_err("Failed to locate config directory")?;
        let mut config = storage
            .load_config(args.config.as_deref())
            .wrap_err("Failed to load configuration")?;
        config.merge_with_args(args);

        Ok(Self { config, storage })
    }

    fn api_client(&self) -> Result<Arc<AnalyticsClient>> {
        let client =
            AnalyticsClient::with_timeout(&self.config.base_url, self.config.request_timeout())?
                .with_access_token(self.config.access_token.clone());
        Ok(Arc::new(client))
    }

    fn theme_session(&self, surface: Arc<PaletteSurface>) -> ThemeSession {
        ThemeSession::new(
            Arc::new(self.storage.preference_store()),
            surface,
            Arc::new(SystemClock),
        )
    }

    fn realtime_client(&self) -> RealtimeClient {
        RealtimeClient::new(
            RealtimeClientConfig::new()
                .with_url(&self.config.realtime_url)
                .with_auto_reconnect(self.config.realtime.auto_reconnect)
                .with_max_reconnect_attempts(self.config.realtime.max_reconnect_attempts),
        )
    }
}

fn failure_hint(error: &ApiError) -> &'static str {
    if error.is_unauthorized() {
        "Not logged in: pass the dashboard access_token cookie with --access-token"
    } else if error.is_recoverable() {
        "Analytics backend unavailable, try again later"
    } else {
        "Analytics backend request failed"
    }
}

fn api_failure(error: ApiError) -> Report {
    let hint = failure_hint(&error);
    Report::new(error).wrap_err(hint)
}

fn kpi_view() -> ViewBinding {
    [
        SlotId::KpiMembers,
        SlotId::KpiCashback,
        SlotId::KpiPartners,
        SlotId::KpiRevenue,
    ]
    .into_iter()
    .fold(ViewBinding::new(), |view, slot| {
        view.bind(slot, Arc::new(PrintSlot::new(slot)))
    })
}

fn run_theme(ctx: &Context, action: &ThemeAction) -> Result<()> {
    let mut session = ctx.theme_session(Arc::new(PaletteSurface::new()));

    match action {
        ThemeAction::Show => session.load_initial_theme()?,
        ThemeAction::Next => {
            session.load_initial_theme()?;
            session.advance_theme()?;
        }
        ThemeAction::Set { name } => session.apply_theme(name)?,
    }

    match session.position() {
        Some(position) => println!("{} ({position})", session.current_name()),
        None => println!("{} (unrecognized)", session.current_name()),
    }
    Ok(())
}

async fn run_live(ctx: &Context, render: bool) -> Result<()> {
    let renderer: Option<Arc<dyn RealtimeRenderer>> = if render {
        Some(Arc::new(JsonLineRenderer))
    } else {
        None
    };
    let mut feed = RealtimeFeed::new(renderer);
    let mut client = ctx.realtime_client();

    let events = client.subscribe()?;
    tokio::select! {
        () = feed.run(events) => {}
        result = tokio::signal::ctrl_c() => {
            result?;
            info!("Interrupted, closing realtime channel");
            client.disconnect();
        }
    }

    info!(
        status = %feed.status(),
        rendered = feed.rendered(),
        malformed = feed.malformed(),
        "Realtime session ended"
    );
    Ok(())
}

async fn run(args: CliArgs) -> Result<()> {
    let ctx = Context::load(&args)?;
    init_logging(&ctx.config)?;

    info!(version = analytica::VERSION, base_url = %ctx.config.base_url, "Starting Analytica");

    match &args.command {
        Command::Theme { action } => run_theme(&ctx, action)?,
        Command::Kpis => {
            DashboardLoader::new(ctx.api_client()?, kpi_view())
                .load_indicators()
                .await
                .map_err(api_failure)?;
        }
        Command::Ask { question } => {
            let question = question.join(" ");
            let view = ViewBinding::new()
                .bind(SlotId::AiResponse, Arc::new(PrintSlot::new(SlotId::AiResponse)));
            let bridge = AiQueryBridge::new(ctx.api_client()?, view);
            if bridge
                .ask_question(Some(&question))
                .await
                .map_err(api_failure)?
                .is_none()
            {
                warn!("No question given");
            }
        }
        Command::Live { no_render } => run_live(&ctx, !no_render).await?,
        Command::Mobile => {
            let surface = Arc::new(PaletteSurface::new());
            let mut session = ctx.theme_session(surface.clone());
            session.load_initial_theme()?;

            let app = MobileApp::new(ctx.api_client()?, session, surface);
            let mut terminal = ratatui::init();
            let result = app.run(&mut terminal).await;
            ratatui::restore();
            result?;
        }
        Command::Dashboard => {
            let mut session = ctx.theme_session(Arc::new(PaletteSurface::new()));
            session.load_initial_theme()?;
            println!("theme: {}", session.current_name());

            if let Err(e) = DashboardLoader::new(ctx.api_client()?, kpi_view())
                .load_indicators()
                .await
            {
                eprintln!("{}: {e}", failure_hint(&e));
            }

            run_live(&ctx, true).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let _ = dotenvy::dotenv();

    run(CliArgs::parse()).await
}
