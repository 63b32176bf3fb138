use crate::error::{Result, ToggleError};
use crate::services::hotkey_listener::HotkeySource;
use crate::services::toggle_controller::ToggleController;
use crate::services::window_system::WindowSystem;
use std::future::Future;
use tracing::{error, info};

/// Обрабатывает нажатия по одному, в порядке поступления, пока не придёт `shutdown`.
/// Возвращает число обработанных нажатий
pub async fn run<S, W, F>(
    source: &mut S,
    controller: &ToggleController<W>,
    shutdown: F,
) -> Result<usize>
where
    S: HotkeySource + ?Sized,
    W: WindowSystem + ?Sized,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    let mut presses = 0;

    info!("Ожидание нажатий клавиши Pause");

    loop {
        // Нажатия, уже стоящие в очереди, обрабатываются раньше завершения
        tokio::select! {
            biased;

            press = source.next_press() => {
                let press = press?;
                presses += 1;
                info!("Нажатие: {}", press);

                match controller.toggle() {
                    Ok(outcome) => info!("{}", outcome),
                    Err(e) => report(&e),
                }
            }
            _ = &mut shutdown => {
                info!("Получен сигнал завершения");
                return Ok(presses);
            }
        }
    }
}

fn report(err: &ToggleError) {
    match std::error::Error::source(err) {
        Some(cause) => error!(cause = %cause, "{}", err),
        None => error!("{}", err),
    }
}
