//! 渲染表面抽象
//! 抽奖动画只通过这个 trait 操作视图，不关心具体是浏览器 DOM 还是终端

use super::Easing;
use std::time::Duration;

/// 下一帧回调，执行时拿到渲染表面本身
pub type FrameCallback = Box<dyn FnOnce(&mut dyn RenderSurface)>;

/// 过渡结束回调（一次性）
pub type TransitionEndHandler = Box<dyn FnOnce()>;

/// 过渡定时参数（对应 CSS `transition: transform <duration> <easing> 0s`）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionTiming {
    /// 持续时间
    pub duration: Duration,
    /// 缓动曲线
    pub easing: Easing,
}

impl TransitionTiming {
    /// 零时长过渡，用于复位和无动画模式
    pub fn instant() -> Self {
        Self {
            duration: Duration::ZERO,
            easing: Easing::Linear,
        }
    }

    /// 抽奖滚动过渡，使用固定的抽奖缓动曲线
    pub fn lucky_draw(duration: Duration) -> Self {
        Self {
            duration,
            easing: Easing::LUCKY_DRAW,
        }
    }

    /// 是否为零时长过渡
    pub fn is_instant(&self) -> bool {
        self.duration.is_zero()
    }

    /// 转换为 CSS transition 字符串
    pub fn to_css(&self) -> String {
        format!(
            "transform {}s {} 0s",
            self.duration.as_secs_f64(),
            self.easing.to_css()
        )
    }
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self::instant()
    }
}

/// 可平移的渲染表面（抽奖容器）
pub trait RenderSurface {
    /// 设置之后的平移所使用的过渡参数
    fn set_transition(&mut self, timing: TransitionTiming);

    /// 设置水平平移量（像素，负数表示向左移动）
    fn set_translate_x(&mut self, offset: f64);

    /// 注册过渡结束回调
    /// 只保留最近一次注册的回调，零时长过渡不会触发
    fn on_transition_end(&mut self, handler: TransitionEndHandler);

    /// 在下一个渲染帧执行回调
    fn request_animation_frame(&mut self, callback: FrameCallback);
}
