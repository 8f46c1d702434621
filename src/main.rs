mod app;
mod clock;
mod config;
mod glyph;
mod input;
mod tui;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use clock::state::{Theme, TimeFormat};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "bigclock", version, about = "Big ASCII-art digital clock for the terminal")]
struct Cli {
    /// Theme to start with (cycle with `t`).
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Start in 12-hour format (toggle with `f`).
    #[arg(long)]
    twelve_hour: bool,

    /// Start with seconds hidden (toggle with `s`).
    #[arg(long)]
    hide_seconds: bool,

    /// Override log file path.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    Neon,
    Classic,
    Matrix,
    Cyberpunk,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Neon => Theme::Neon,
            ThemeArg::Classic => Theme::Classic,
            ThemeArg::Matrix => Theme::Matrix,
            ThemeArg::Cyberpunk => Theme::Cyberpunk,
        }
    }
}

impl Cli {
    fn into_config(self) -> config::Config {
        let mut cfg = config::Config::default();
        if let Some(theme) = self.theme {
            cfg.clock.theme = theme.into();
        }
        if self.twelve_hour {
            cfg.clock.format = TimeFormat::TwelveHour;
        }
        if self.hide_seconds {
            cfg.clock.show_seconds = false;
        }
        if let Some(path) = self.log_file {
            cfg.log_file = path;
        }
        cfg
    }
}

/// Log to a file; stdout belongs to the TUI.
fn init_logging(path: &std::path::Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cfg = Cli::parse().into_config();
    init_logging(&cfg.log_file).context("init logging")?;
    tracing::info!(
        theme = cfg.clock.theme.name(),
        format = cfg.clock.format.hours(),
        "clock starting"
    );

    let mut terminal = tui::TerminalGuard::enter().context("init terminal")?;
    let mut app = app::App::new(cfg);
    app.run(terminal.terminal_mut()).await?;

    Ok(())
}
