//! 抽奖滚动核心模块
//! 包含展示序列生成、偏移计算与动画状态机

mod animator;
mod easing;
mod error;
mod sequence;
mod surface;

pub use animator::*;
pub use easing::*;
pub use error::*;
pub use sequence::*;
pub use surface::*;
