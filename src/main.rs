use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tokio::signal::unix::{signal, SignalKind};
use tracing::{info, warn};
mod config;
mod error;
mod events;
mod services;
mod utils;

use config::Config;
use services::{
    create_signaller,
    event_loop,
    window_system,
    ProcessInspector,
    ToggleController,
    X11HotkeyListener,
    X11Session,
};
use utils::keymap::PAUSE_KEYSYM;

#[derive(Parser, Debug)]
#[command(name = "pausekey")]
#[command(about = "Приостанавливает и возобновляет процесс активного окна по клавише Pause")]
struct Args {
    /// Путь к файлу конфигурации
    #[arg(short, long, default_value = "pausekey.toml")]
    config: String,

    /// Режим сухого запуска (сигналы не отправляются)
    #[arg(long)]
    dry_run: bool,

    /// Уровень логирования (перекрывает конфигурацию)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Загрузка конфигурации
    let config = Config::load(&args.config)?;

    // Инициализация системы логирования
    let level = args.log_level.as_deref().unwrap_or(&config.logging.level);
    init_tracing(level, &config.logging.format)?;

    info!("Запуск pausekey v{}", env!("CARGO_PKG_VERSION"));
    info!("Конфигурация загружена из: {}", args.config);

    if args.dry_run {
        warn!("Режим сухого запуска - сигналы процессам не отправляются");
    }

    let session = Arc::new(X11Session::connect(config.display.name.as_deref())?);

    window_system::require_active_window(&*session)?;

    let keycode = session.keycode_for_keysym(PAUSE_KEYSYM)?;
    session.grab_key(keycode)?;
    session.select_key_press()?;

    let controller = ToggleController::new(
        session.clone(),
        ProcessInspector::new(&config.process.procfs_root),
        create_signaller(args.dry_run),
    );
    let mut listener = X11HotkeyListener::new(session.clone())?;

    info!("Все компоненты инициализированы");

    let mut sigterm = signal(SignalKind::terminate()).context("Не удалось установить обработчик SIGTERM")?;
    let mut sigint = signal(SignalKind::interrupt()).context("Не удалось установить обработчик SIGINT")?;
    let shutdown = async move {
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    };

    let presses = event_loop::run(&mut listener, &controller, shutdown).await?;

    info!("pausekey завершил работу, обработано нажатий: {}", presses);
    Ok(())
}

fn init_tracing(level: &str, format: &str) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))?;

    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    match format {
        "full" => tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .init(),
        _ => tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .init(),
    }

    Ok(())
}
