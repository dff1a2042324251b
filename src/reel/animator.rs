//! 抽奖动效模块
//!
//! 每次抽奖都是独立的一次性流程：
//! 1. 复位：零时长过渡，平移归零
//! 2. 开始音效（动画与音效同时开启时）
//! 3. 下一帧：从后往前查找中奖下标，计算偏移
//! 4. 过渡到偏移位置（或瞬间跳转），结束后播放结束音效并回调

use super::sequence::validate_visible_count;
use super::{DrawError, RenderSurface, TransitionTiming};
use crate::audio::{AudioPlayer, SilentAudio};
use std::rc::Rc;
use std::time::Duration;

/// 默认持续时间（秒），应与开始音效的时长保持一致
pub const DEFAULT_DURATION_SECS: f64 = 10.0;

/// 抽奖配置
pub struct DrawConfig<T> {
    /// 中奖物品标识
    pub winning_id: T,
    /// 展示序列（页面上从左到右排列的奖品标识）
    pub sequence: Vec<T>,
    /// 奖品元素宽度（不考虑间距）
    pub item_width: f64,
    /// 一屏展示的奖品个数（奇数）
    pub visible_count: usize,
    /// 动效结束之后的回调
    pub completed: Box<dyn FnOnce()>,
    /// 音效播放服务
    pub audio: Rc<dyn AudioPlayer>,
    /// 开始音效
    pub audio_start: Option<String>,
    /// 结束音效
    pub audio_end: Option<String>,
    /// 持续时间
    pub duration: Duration,
    /// 是否启用动画
    pub open_animation: bool,
    /// 是否启用音效
    pub open_sound: bool,
}

impl<T> DrawConfig<T> {
    /// 创建配置，其余字段使用默认值（10s、启用动画、启用音效、静音播放器）
    pub fn new(
        winning_id: T,
        sequence: Vec<T>,
        item_width: f64,
        visible_count: usize,
        completed: impl FnOnce() + 'static,
    ) -> Self {
        Self {
            winning_id,
            sequence,
            item_width,
            visible_count,
            completed: Box::new(completed),
            audio: Rc::new(SilentAudio),
            audio_start: None,
            audio_end: None,
            duration: Duration::from_secs_f64(DEFAULT_DURATION_SECS),
            open_animation: true,
            open_sound: true,
        }
    }

    pub fn with_audio(mut self, audio: Rc<dyn AudioPlayer>) -> Self {
        self.audio = audio;
        self
    }

    pub fn with_start_audio(mut self, uri: impl Into<String>) -> Self {
        self.audio_start = Some(uri.into());
        self
    }

    pub fn with_end_audio(mut self, uri: impl Into<String>) -> Self {
        self.audio_end = Some(uri.into());
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_animation(mut self, open: bool) -> Self {
        self.open_animation = open;
        self
    }

    pub fn with_sound(mut self, open: bool) -> Self {
        self.open_sound = open;
        self
    }

    /// 检查配置是否合法
    pub fn validate(&self) -> Result<(), DrawError> {
        validate_visible_count(self.visible_count)?;
        if !self.item_width.is_finite() || self.item_width < 0.0 {
            return Err(DrawError::invalid(format!(
                "item width must be a non-negative number, got {}",
                self.item_width
            )));
        }
        Ok(())
    }
}

/// 可寻址区域：去掉末尾 `visible_count / 2` 个预留元素后的序列
pub fn searchable_slice<T>(sequence: &[T], visible_count: usize) -> &[T] {
    let m_index = visible_count / 2;
    &sequence[..sequence.len().saturating_sub(m_index)]
}

/// 计算让中奖物品停在正中间所需的平移量
///
/// 在可寻址区域中从后往前查找，命中多个时取最靠后的一个，
/// 保证滚动距离尽可能长。
pub fn resolve_offset<T: PartialEq>(
    sequence: &[T],
    winning_id: &T,
    visible_count: usize,
    item_width: f64,
) -> Result<f64, DrawError> {
    validate_visible_count(visible_count)?;
    let m_index = visible_count / 2;
    let index = searchable_slice(sequence, visible_count)
        .iter()
        .rposition(|id| id == winning_id)
        .ok_or(DrawError::NotFound)?;
    Ok(-(index as f64 - m_index as f64) * item_width)
}

/// 开始抽奖动效
///
/// 配置不合法时立即返回错误，不修改渲染表面。
/// 中奖物品未找到时只完成复位，不回调也不报错。
pub fn draw<T>(surface: &mut dyn RenderSurface, config: DrawConfig<T>) -> Result<(), DrawError>
where
    T: PartialEq + 'static,
{
    config.validate()?;

    // 每次触发动画之前先复位状态
    surface.set_transition(TransitionTiming::instant());
    surface.set_translate_x(0.0);
    log::debug!("Reel reset, {} items in sequence", config.sequence.len());

    if config.open_sound && config.open_animation {
        if let Some(ref uri) = config.audio_start {
            config.audio.play(uri);
        }
    }

    // 同一帧内重复设置样式没有视觉效果，下一帧再开始滚动
    surface.request_animation_frame(Box::new(move |surface: &mut dyn RenderSurface| {
        commit(surface, config)
    }));
    Ok(())
}

/// 下一帧：计算偏移并进入收尾阶段
fn commit<T: PartialEq>(surface: &mut dyn RenderSurface, config: DrawConfig<T>) {
    let offset = match resolve_offset(
        &config.sequence,
        &config.winning_id,
        config.visible_count,
        config.item_width,
    ) {
        Ok(offset) => offset,
        Err(e) => {
            log::debug!("Draw aborted: {}", e);
            return;
        }
    };
    log::debug!("Reel target offset {}px", offset);

    let DrawConfig {
        completed,
        audio,
        audio_end,
        duration,
        open_animation,
        open_sound,
        ..
    } = config;

    let settle = move || {
        if open_sound {
            if let Some(ref uri) = audio_end {
                audio.play(uri);
            }
        }
        log::info!("Draw settled at {}px", offset);
        completed();
    };

    if open_animation {
        surface.set_transition(TransitionTiming::lucky_draw(duration));
        surface.set_translate_x(offset);
        surface.on_transition_end(Box::new(settle));
    } else {
        surface.set_translate_x(offset);
        settle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reel::{FrameCallback, TransitionEndHandler};
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Transition(TransitionTiming),
        Translate(f64),
    }

    /// 记录所有样式写入的测试表面
    #[derive(Default)]
    struct RecordingSurface {
        ops: Vec<Op>,
        frames: Vec<FrameCallback>,
        transition_end: Option<TransitionEndHandler>,
    }

    impl RecordingSurface {
        fn run_frame(&mut self) {
            for callback in std::mem::take(&mut self.frames) {
                callback(self);
            }
        }

        fn finish_transition(&mut self) {
            if let Some(handler) = self.transition_end.take() {
                handler();
            }
        }

        fn translations(&self) -> Vec<f64> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Translate(x) => Some(*x),
                    _ => None,
                })
                .collect()
        }
    }

    impl RenderSurface for RecordingSurface {
        fn set_transition(&mut self, timing: TransitionTiming) {
            self.ops.push(Op::Transition(timing));
        }

        fn set_translate_x(&mut self, offset: f64) {
            self.ops.push(Op::Translate(offset));
        }

        fn on_transition_end(&mut self, handler: TransitionEndHandler) {
            self.transition_end = Some(handler);
        }

        fn request_animation_frame(&mut self, callback: FrameCallback) {
            self.frames.push(callback);
        }
    }

    #[derive(Default)]
    struct RecordingAudio {
        played: RefCell<Vec<String>>,
    }

    impl AudioPlayer for RecordingAudio {
        fn play(&self, uri: &str) {
            self.played.borrow_mut().push(uri.to_string());
        }
    }

    fn letters(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
        let count = Rc::new(Cell::new(0));
        let handle = count.clone();
        (count, move || handle.set(handle.get() + 1))
    }

    #[test]
    fn test_offset_centers_winner() {
        let offset = resolve_offset(&letters("abcde"), &'c', 3, 100.0).unwrap();
        assert_eq!(offset, -100.0);
    }

    #[test]
    fn test_offset_uses_last_occurrence() {
        let offset = resolve_offset(&letters("abade"), &'a', 3, 100.0).unwrap();
        assert_eq!(offset, -100.0);
    }

    #[test]
    fn test_reserved_tail_is_not_searched() {
        assert_eq!(searchable_slice(&letters("abcde"), 5), &letters("abc")[..]);
        assert_eq!(
            resolve_offset(&letters("abcde"), &'e', 3, 100.0),
            Err(DrawError::NotFound)
        );
        assert_eq!(
            resolve_offset(&letters("abcde"), &'d', 5, 100.0),
            Err(DrawError::NotFound)
        );
    }

    #[test]
    fn test_winner_before_center_scrolls_right() {
        let offset = resolve_offset(&letters("abcdefg"), &'a', 5, 50.0).unwrap();
        assert_eq!(offset, 100.0);
    }

    #[test]
    fn test_animated_draw_waits_for_transition_end() {
        let mut surface = RecordingSurface::default();
        let (count, completed) = counter();
        let config = DrawConfig::new('c', letters("abcde"), 100.0, 3, completed)
            .with_duration(Duration::from_secs(4));

        draw(&mut surface, config).unwrap();
        // 复位同步完成，偏移在下一帧才设置
        assert_eq!(
            surface.ops,
            vec![Op::Transition(TransitionTiming::instant()), Op::Translate(0.0)]
        );

        surface.run_frame();
        assert_eq!(surface.translations(), vec![0.0, -100.0]);
        assert_eq!(
            surface.ops[2],
            Op::Transition(TransitionTiming::lucky_draw(Duration::from_secs(4)))
        );
        assert_eq!(count.get(), 0);

        surface.finish_transition();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_instant_draw_completes_within_frame() {
        let mut surface = RecordingSurface::default();
        let (count, completed) = counter();
        let config =
            DrawConfig::new('c', letters("abcde"), 100.0, 3, completed).with_animation(false);

        draw(&mut surface, config).unwrap();
        assert_eq!(count.get(), 0);

        surface.run_frame();
        assert_eq!(surface.translations(), vec![0.0, -100.0]);
        assert!(surface.transition_end.is_none());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_not_found_only_resets() {
        let mut surface = RecordingSurface::default();
        let audio = Rc::new(RecordingAudio::default());
        let (count, completed) = counter();
        let config = DrawConfig::new('e', letters("abcde"), 100.0, 3, completed)
            .with_audio(audio.clone())
            .with_end_audio("end.mp3");

        draw(&mut surface, config).unwrap();
        surface.run_frame();
        surface.finish_transition();

        assert_eq!(surface.translations(), vec![0.0]);
        assert_eq!(count.get(), 0);
        assert!(audio.played.borrow().is_empty());
    }

    #[test]
    fn test_invalid_config_leaves_surface_untouched() {
        let mut surface = RecordingSurface::default();
        let config = DrawConfig::new('c', letters("abcde"), 100.0, 4, || {});
        assert!(matches!(
            draw(&mut surface, config),
            Err(DrawError::InvalidConfiguration(_))
        ));

        let config = DrawConfig::new('c', letters("abcde"), f64::NAN, 3, || {});
        assert!(draw(&mut surface, config).is_err());
        assert!(surface.ops.is_empty());
        assert!(surface.frames.is_empty());
    }

    #[test]
    fn test_sound_plays_start_and_end_cues() {
        let mut surface = RecordingSurface::default();
        let audio = Rc::new(RecordingAudio::default());
        let config = DrawConfig::new('c', letters("abcde"), 100.0, 3, || {})
            .with_audio(audio.clone())
            .with_start_audio("start.mp3")
            .with_end_audio("end.mp3");

        draw(&mut surface, config).unwrap();
        assert_eq!(*audio.played.borrow(), vec!["start.mp3"]);

        surface.run_frame();
        surface.finish_transition();
        assert_eq!(*audio.played.borrow(), vec!["start.mp3", "end.mp3"]);
    }

    #[test]
    fn test_sound_off_suppresses_both_cues() {
        let mut surface = RecordingSurface::default();
        let audio = Rc::new(RecordingAudio::default());
        let (count, completed) = counter();
        let config = DrawConfig::new('c', letters("abcde"), 100.0, 3, completed)
            .with_audio(audio.clone())
            .with_start_audio("start.mp3")
            .with_end_audio("end.mp3")
            .with_sound(false);

        draw(&mut surface, config).unwrap();
        surface.run_frame();
        surface.finish_transition();

        assert!(audio.played.borrow().is_empty());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_animation_off_suppresses_only_start_cue() {
        let mut surface = RecordingSurface::default();
        let audio = Rc::new(RecordingAudio::default());
        let config = DrawConfig::new('c', letters("abcde"), 100.0, 3, || {})
            .with_audio(audio.clone())
            .with_start_audio("start.mp3")
            .with_end_audio("end.mp3")
            .with_animation(false);

        draw(&mut surface, config).unwrap();
        assert!(audio.played.borrow().is_empty());

        surface.run_frame();
        assert_eq!(*audio.played.borrow(), vec!["end.mp3"]);
    }

    #[test]
    fn test_default_config() {
        let config = DrawConfig::new(1u32, vec![1, 2, 3], 10.0, 1, || {});
        assert_eq!(config.duration, Duration::from_secs(10));
        assert!(config.open_animation);
        assert!(config.open_sound);
        assert!(config.audio_start.is_none());
    }
}
