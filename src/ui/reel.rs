//! 奖品滚轴组件
//!
//! `ReelSurface` 是终端上的渲染表面：以帧为单位推进过渡，
//! 在下一帧开始时执行排队的回调，过渡结束时触发一次结束回调。
//! `ReelStrip` 负责把展示序列按当前平移量绘制出来。

use crate::app::AppState;
use crate::ui::Theme;
use luckydraw::reel::TransitionEndHandler;
use luckydraw::{FrameCallback, RenderSurface, TransitionTiming};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Widget},
    Frame,
};
use std::time::Instant;

/// 一段正在进行的过渡
#[derive(Debug, Clone, Copy)]
struct Motion {
    from: f64,
    to: f64,
    started_at: Instant,
    timing: TransitionTiming,
}

impl Motion {
    fn progress(&self, now: Instant) -> f64 {
        let total = self.timing.duration.as_secs_f64();
        if total <= 0.0 {
            return 1.0;
        }
        (now.saturating_duration_since(self.started_at).as_secs_f64() / total).min(1.0)
    }

    fn sample(&self, now: Instant) -> f64 {
        let eased = self.timing.easing.sample(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    fn is_done(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// 终端滚轴渲染表面
pub struct ReelSurface {
    /// 当前过渡参数（作用于之后的平移）
    transition: TransitionTiming,
    /// 平移目标值
    translate: f64,
    /// 正在进行的过渡
    motion: Option<Motion>,
    /// 下一帧要执行的回调
    frame_callbacks: Vec<FrameCallback>,
    /// 过渡结束回调（只保留最后一次注册的）
    transition_end: Option<TransitionEndHandler>,
    /// 最近一帧的时间
    now: Instant,
}

impl Default for ReelSurface {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

impl ReelSurface {
    pub fn new(now: Instant) -> Self {
        Self {
            transition: TransitionTiming::instant(),
            translate: 0.0,
            motion: None,
            frame_callbacks: Vec::new(),
            transition_end: None,
            now,
        }
    }

    /// 推进一帧
    /// 返回是否还有动画或待执行回调（用于决定刷新频率）
    pub fn tick(&mut self, now: Instant) -> bool {
        self.now = now;

        // 先执行上一帧排队的回调，回调中再次排队的留到下一帧
        for callback in std::mem::take(&mut self.frame_callbacks) {
            callback(self);
        }

        if let Some(motion) = self.motion {
            if motion.is_done(now) {
                self.motion = None;
                self.translate = motion.to;
                if let Some(handler) = self.transition_end.take() {
                    handler();
                }
            }
        }

        self.is_busy()
    }

    /// 当前呈现的平移量
    pub fn offset(&self) -> f64 {
        self.offset_at(self.now)
    }

    /// 指定时刻呈现的平移量
    pub fn offset_at(&self, now: Instant) -> f64 {
        match self.motion {
            Some(motion) => motion.sample(now),
            None => self.translate,
        }
    }

    /// 是否正在滚动
    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    /// 是否有动画或待执行回调
    pub fn is_busy(&self) -> bool {
        self.motion.is_some() || !self.frame_callbacks.is_empty()
    }
}

impl RenderSurface for ReelSurface {
    fn set_transition(&mut self, timing: TransitionTiming) {
        self.transition = timing;
    }

    fn set_translate_x(&mut self, offset: f64) {
        let current = self.offset();
        self.translate = offset;
        if self.transition.is_instant() || current == offset {
            self.motion = None;
            return;
        }
        self.motion = Some(Motion {
            from: current,
            to: offset,
            started_at: self.now,
            timing: self.transition,
        });
    }

    fn on_transition_end(&mut self, handler: TransitionEndHandler) {
        self.transition_end = Some(handler);
    }

    fn request_animation_frame(&mut self, callback: FrameCallback) {
        self.frame_callbacks.push(callback);
    }
}

/// 滚轴条 Widget
/// 逐列计算对应的奖品，支持部分可见的奖品
pub struct ReelStrip<'a> {
    labels: &'a [String],
    offset: f64,
    item_width: u16,
    visible_count: u16,
    /// 是否高亮中间位置的奖品
    highlight_center: bool,
    border_style: Style,
    label_style: Style,
    highlight_style: Style,
    marker_style: Style,
}

impl<'a> ReelStrip<'a> {
    pub fn new(labels: &'a [String], offset: f64, item_width: u16, visible_count: u16) -> Self {
        Self {
            labels,
            offset,
            item_width: item_width.max(2),
            visible_count: visible_count.max(1),
            highlight_center: false,
            border_style: Style::default(),
            label_style: Style::default(),
            highlight_style: Style::default().add_modifier(Modifier::REVERSED),
            marker_style: Style::default(),
        }
    }

    pub fn highlight_center(mut self, highlight: bool) -> Self {
        self.highlight_center = highlight;
        self
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.border_style = Style::default().fg(theme.border);
        self.label_style = Style::default().fg(theme.fg);
        self.highlight_style = Style::default()
            .fg(theme.selection_fg)
            .bg(theme.selection)
            .add_modifier(Modifier::BOLD);
        self.marker_style = Style::default().fg(theme.marker);
        self
    }

    /// 视口宽度（列数）
    pub fn viewport_width(&self) -> u16 {
        self.item_width.saturating_mul(self.visible_count)
    }

    /// 视口中第 `col` 列对应的奖品下标与列内位置
    pub fn item_at(&self, col: u16) -> Option<(usize, u16)> {
        let world = col as i64 - self.offset.round() as i64;
        if world < 0 {
            return None;
        }
        let width = self.item_width as i64;
        let idx = (world / width) as usize;
        if idx >= self.labels.len() {
            return None;
        }
        Some((idx, (world % width) as u16))
    }

    /// 当前位于中间槽位的奖品下标
    pub fn center_item(&self) -> Option<usize> {
        self.item_at(self.center_column()).map(|(idx, _)| idx)
    }

    fn center_column(&self) -> u16 {
        (self.visible_count / 2)
            .saturating_mul(self.item_width)
            .saturating_add(self.item_width / 2)
    }

    /// 奖品名称在列内第 `within` 列的字符
    fn label_char(&self, idx: usize, within: u16) -> char {
        let inner = (self.item_width - 1) as usize;
        let chars: Vec<char> = self.labels[idx].chars().take(inner).collect();
        let start = (inner - chars.len()) / 2;
        (within as usize)
            .checked_sub(1 + start)
            .and_then(|i| chars.get(i).copied())
            .unwrap_or(' ')
    }
}

impl Widget for ReelStrip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // 标记行 + 上边框 + 名称 + 下边框 + 标记行
        if area.height < 5 || area.width == 0 {
            return;
        }

        let width = self.viewport_width().min(area.width);
        let left = area.x + (area.width - width) / 2;
        let top = area.y + (area.height - 5) / 2;
        let center_col = self.center_column();
        let center_item = self.center_item();

        for col in 0..width {
            let x = left + col;
            let cell = self.item_at(col);

            let (upper, middle, lower) = match cell {
                Some((_, 0)) => ('┬', '│', '┴'),
                Some((idx, within)) => ('─', self.label_char(idx, within), '─'),
                None => (' ', ' ', ' '),
            };

            let middle_style = match cell {
                Some((idx, within))
                    if within > 0 && self.highlight_center && Some(idx) == center_item =>
                {
                    self.highlight_style
                }
                Some((_, 0)) => self.border_style,
                _ => self.label_style,
            };

            let rows = [
                (1, upper, self.border_style),
                (2, middle, middle_style),
                (3, lower, self.border_style),
            ];
            for (row, symbol, style) in rows {
                if let Some(cell) = buf.cell_mut((x, top + row)) {
                    cell.set_char(symbol);
                    cell.set_style(style);
                }
            }

            if col == center_col {
                for (row, symbol) in [(0, '▼'), (4, '▲')] {
                    if let Some(cell) = buf.cell_mut((x, top + row)) {
                        cell.set_char(symbol);
                        cell.set_style(self.marker_style);
                    }
                }
            }
        }
    }
}

/// 绘制奖品滚轴面板
pub fn draw_reel(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let i18n = state.i18n();
    let block = Block::default()
        .title(i18n.reel())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if state.is_drawing() {
            theme.border_focused
        } else {
            theme.border
        }))
        .style(Style::default().bg(theme.bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let labels = state.sequence_labels();
    let settings = &state.config.draw;
    let strip = ReelStrip::new(
        &labels,
        state.surface.offset(),
        settings.item_width,
        u16::try_from(settings.visible_count).unwrap_or(u16::MAX),
    )
    .highlight_center(state.last_winner.is_some() && !state.surface.is_animating())
    .theme(theme);

    frame.render_widget(strip, inner);
}
