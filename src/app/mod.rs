//! 应用状态管理模块
//! 包含全局 AppState 和抽奖流程的调用方逻辑

mod status;
mod types;

pub use status::*;
pub use types::*;

use crate::config::AppConfig;
use crate::i18n::{I18n, Language};
use crate::ui::ReelSurface;
use luckydraw::{build_display_sequence, AudioPlayer, DrawConfig};
use rand::Rng;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use uuid::Uuid;

/// 全局应用状态
pub struct AppState {
    /// 应用配置
    pub config: AppConfig,
    /// 当前应用模式
    pub mode: AppMode,
    /// 是否应该退出
    pub should_quit: bool,
    /// 展示序列（奖品标识）
    pub sequence: Vec<String>,
    /// 终端滚轴渲染表面
    pub surface: ReelSurface,
    /// 音效播放服务
    audio: Rc<dyn AudioPlayer>,
    /// 应用事件接收器
    pub event_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// 应用事件发送器（克隆给抽奖完成回调）
    pub event_tx: mpsc::UnboundedSender<AppEvent>,
    /// 正在进行的抽奖会话
    pub current_draw: Option<Uuid>,
    /// 最近一次中奖的奖品标识
    pub last_winner: Option<String>,
    /// 状态栏消息（带时间戳）
    pub status_message: Option<StatusMessage>,
}

impl AppState {
    /// 创建新的应用状态，并生成第一份展示序列
    pub fn new(config: AppConfig, audio: Rc<dyn AudioPlayer>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let mut state = Self {
            config,
            mode: AppMode::default(),
            should_quit: false,
            sequence: Vec::new(),
            surface: ReelSurface::default(),
            audio,
            event_rx,
            event_tx,
            current_draw: None,
            last_winner: None,
            status_message: None,
        };
        if let Err(e) = state.rebuild_sequence() {
            log::warn!("Failed to build display sequence: {}", e);
        }
        state
    }

    /// 推进一帧
    /// 返回是否有动画正在进行（用于决定是否需要持续重绘）
    pub fn tick(&mut self, now: Instant) -> bool {
        // 自动清除过期的状态消息
        if let Some(ref msg) = self.status_message {
            if msg.is_expired() {
                self.status_message = None;
            }
        }

        self.surface.tick(now)
    }

    /// 重新生成展示序列（奖品池或数量设置变化后调用）
    pub fn rebuild_sequence(&mut self) -> anyhow::Result<()> {
        let ids: Vec<String> = self.config.prizes.iter().map(|p| p.id.clone()).collect();
        let settings = &self.config.draw;
        self.sequence = build_display_sequence(&ids, settings.total, settings.visible_count)?;
        self.last_winner = None;
        log::debug!("Display sequence rebuilt with {} items", self.sequence.len());
        Ok(())
    }

    /// 随机挑选中奖奖品
    pub fn pick_winner(&self) -> Option<String> {
        if self.config.prizes.is_empty() {
            return None;
        }
        let idx = rand::rng().random_range(0..self.config.prizes.len());
        Some(self.config.prizes[idx].id.clone())
    }

    /// 开始一次抽奖（随机挑选中奖奖品）
    pub fn start_draw(&mut self) -> anyhow::Result<()> {
        let winner = self
            .pick_winner()
            .ok_or_else(|| anyhow::anyhow!("prize pool is empty"))?;
        self.start_draw_with(winner)
    }

    /// 以指定奖品开始一次抽奖
    pub fn start_draw_with(&mut self, winning_id: String) -> anyhow::Result<()> {
        let settings = self.config.draw.clone();
        settings.validate()?;
        // 动画找不到中奖奖品时不会回调，提前确认它在可寻址区域内
        let offset = luckydraw::resolve_offset(
            &self.sequence,
            &winning_id,
            settings.visible_count,
            settings.item_width as f64,
        )?;
        // 复位后已经停在目标位置，过渡不会产生结束事件，直接跳转收尾
        let animate = settings.open_animation && offset != 0.0;
        if settings.open_animation && !animate {
            log::debug!("Winner already centered, settling without transition");
        }

        let draw_id = Uuid::new_v4();
        let tx = self.event_tx.clone();
        let winner = winning_id.clone();
        let completed = move || {
            let _ = tx.send(AppEvent::DrawFinished {
                draw_id,
                winning_id: winner,
            });
        };

        let mut config = DrawConfig::new(
            winning_id,
            self.sequence.clone(),
            settings.item_width as f64,
            settings.visible_count,
            completed,
        )
        .with_audio(self.audio.clone())
        .with_duration(Duration::from_secs_f64(settings.duration_secs))
        .with_animation(animate)
        .with_sound(settings.open_sound);
        config.audio_start = settings.audio_start;
        config.audio_end = settings.audio_end;

        luckydraw::draw(&mut self.surface, config)?;

        log::info!("Draw {} started", draw_id);
        self.current_draw = Some(draw_id);
        self.last_winner = None;
        self.status_message = Some(StatusMessage::sticky(self.i18n().rolling().to_string()));
        Ok(())
    }

    /// 处理应用内部事件
    pub fn handle_app_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                AppEvent::DrawFinished {
                    draw_id,
                    winning_id,
                } => self.finish_draw(draw_id, winning_id),
            }
        }
    }

    /// 抽奖结束：只接受当前会话的结果，旧会话的回调直接忽略
    fn finish_draw(&mut self, draw_id: Uuid, winning_id: String) {
        if self.current_draw != Some(draw_id) {
            log::debug!("Ignoring stale completion of draw {}", draw_id);
            return;
        }
        self.current_draw = None;

        let name = self
            .config
            .prize(&winning_id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| winning_id.clone());
        log::info!("Draw {} won {}", draw_id, winning_id);
        self.set_status(&self.i18n().winner(&name), StatusKind::Success);
        self.last_winner = Some(winning_id);
    }

    /// 是否正在抽奖
    pub fn is_drawing(&self) -> bool {
        self.current_draw.is_some()
    }

    /// 展示序列对应的奖品名称
    pub fn sequence_labels(&self) -> Vec<String> {
        self.sequence
            .iter()
            .map(|id| {
                self.config
                    .prize(id)
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| id.clone())
            })
            .collect()
    }

    /// 获取当前语言
    pub fn language(&self) -> Language {
        self.config.settings.language
    }

    /// 获取国际化实例
    pub fn i18n(&self) -> I18n {
        I18n::new(self.language())
    }

    /// 切换语言
    pub fn toggle_language(&mut self) {
        self.config.settings.language = self.config.settings.language.toggle();
    }

    /// 切换动画开关
    pub fn toggle_animation(&mut self) {
        self.config.draw.open_animation = !self.config.draw.open_animation;
    }

    /// 切换音效开关
    pub fn toggle_sound(&mut self) {
        self.config.draw.open_sound = !self.config.draw.open_sound;
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: &str, kind: StatusKind) {
        self.status_message = Some(StatusMessage::new(message.to_string(), kind));
    }

    /// 获取状态消息透明度
    pub fn status_opacity(&self) -> f64 {
        self.status_message
            .as_ref()
            .map(|m| m.opacity())
            .unwrap_or(0.0)
    }

    /// 退出当前模式，返回普通模式
    pub fn exit_mode(&mut self) {
        self.mode = AppMode::Normal;
    }
}
