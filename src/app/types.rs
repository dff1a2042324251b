//! 应用类型定义模块

use uuid::Uuid;

/// 应用模式枚举
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AppMode {
    #[default]
    Normal,
    Help,
}

/// 应用内部事件（由抽奖完成回调发出）
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// 抽奖动效结束
    DrawFinished {
        /// 抽奖会话 ID
        draw_id: Uuid,
        /// 中奖奖品标识
        winning_id: String,
    },
}
