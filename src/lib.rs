//! LuckyDraw - 滚动抽奖动效
//!
//! 给定一排横向排列的奖品，计算让中奖奖品停在可视区域正中间所需的偏移量，
//! 并通过过渡动画（或瞬间跳转）展示结果，可选开始/结束音效与完成回调。
//!
//! 核心只有两个函数：
//! - [`build_display_sequence`]：生成带随机填充的展示序列
//! - [`draw`]：复位 → 下一帧计算偏移 → 过渡/跳转 → 收尾
//!
//! 渲染表面（[`RenderSurface`]）与音效播放（[`AudioPlayer`]）均为外部协作者。

pub mod audio;
pub mod reel;

pub use audio::{AudioPlayer, SilentAudio};
pub use reel::{
    build_display_sequence, build_display_sequence_with, draw, resolve_offset, DrawConfig,
    DrawError, Easing, FrameCallback, RenderSurface, TransitionTiming,
};
