//! LuckyDraw - 终端滚动抽奖
//!
//! 在终端中展示横向滚动的奖品滚轴，按空格开始抽奖，
//! 中奖奖品最终停在可视区域正中间

mod app;
mod config;
mod event;
mod i18n;
mod platform;
mod ui;

use app::AppState;
use config::{ensure_config_dir, get_config_path, get_log_path, load_config, save_config, AppConfig};
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use platform::SystemAudioPlayer;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};
use ui::{draw_ui, Theme};

/// 动画进行中的刷新间隔（约 60fps）
const ANIMATION_FRAME: Duration = Duration::from_millis(16);

/// 空闲时的刷新间隔
const IDLE_FRAME: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // TUI 应用中不能输出到控制台，设置 RUST_LOG 时写入日志文件
    init_logging();

    let config_path = get_config_path();
    let config = match load_config(&config_path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Failed to load config {}: {}", config_path.display(), e);
            AppConfig::default()
        }
    };

    run_app(config).await
}

/// 初始化日志（输出到 ~/.luckydraw/luckydraw.log）
fn init_logging() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    let file = ensure_config_dir().and_then(|_| {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(get_log_path())
            .map_err(Into::into)
    });
    if let Ok(file) = file {
        let _ = env_logger::Builder::from_default_env()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .try_init();
    }
}

/// 运行主应用
async fn run_app(config: AppConfig) -> anyhow::Result<()> {
    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let audio = Rc::new(SystemAudioPlayer::detect());
    let mut state = AppState::new(config, audio);
    let theme = Theme::default();
    let mut event_stream = EventStream::new();

    let result = async {
        loop {
            // 推进滚轴动画并处理抽奖完成事件
            let animating = state.tick(Instant::now());
            state.handle_app_events();

            terminal.draw(|frame| {
                draw_ui(frame, &state, &theme);
            })?;

            if state.should_quit {
                break;
            }

            let frame_interval = if animating { ANIMATION_FRAME } else { IDLE_FRAME };
            tokio::select! {
                maybe_event = event_stream.next() => {
                    if let Some(Ok(evt)) = maybe_event {
                        event::handle_event(&mut state, evt)?;
                    }
                }
                _ = tokio::time::sleep(frame_interval) => {}
            }
        }
        anyhow::Ok(())
    }
    .await;

    // 保存配置（开关与语言）
    let config_path = get_config_path();
    if let Err(e) = save_config(&state.config, &config_path) {
        log::warn!("Failed to save config: {}", e);
    }

    // 恢复终端
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
