//! 状态消息模块

use std::time::Instant;

/// 状态消息类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// 状态消息（带时间戳，用于自动淡出）
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub created_at: Instant,
    /// 是否常驻（抽奖进行中的提示不自动过期）
    pub sticky: bool,
}

impl StatusMessage {
    pub fn new(text: String, kind: StatusKind) -> Self {
        Self {
            text,
            kind,
            created_at: Instant::now(),
            sticky: false,
        }
    }

    pub fn sticky(text: String) -> Self {
        Self {
            sticky: true,
            ..Self::new(text, StatusKind::Info)
        }
    }

    /// 获取消息年龄（秒）
    pub fn age_secs(&self) -> f64 {
        self.created_at.elapsed().as_secs_f64()
    }

    /// 消息是否过期（中奖结果保留 8 秒）
    pub fn is_expired(&self) -> bool {
        !self.sticky && self.age_secs() > 8.0
    }

    /// 获取淡出透明度 (1.0 = 完全可见, 0.0 = 完全透明)
    pub fn opacity(&self) -> f64 {
        if self.sticky {
            return 1.0;
        }
        let age = self.age_secs();
        if age < 6.0 {
            1.0
        } else if age < 8.0 {
            1.0 - (age - 6.0) / 2.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_message_is_visible() {
        let msg = StatusMessage::new("Winner: Gift".to_string(), StatusKind::Success);
        assert_eq!(msg.opacity(), 1.0);
        assert!(!msg.is_expired());
    }

    #[test]
    fn test_sticky_message_never_expires() {
        let mut msg = StatusMessage::sticky("Rolling...".to_string());
        if let Some(earlier) = msg.created_at.checked_sub(std::time::Duration::from_secs(60)) {
            msg.created_at = earlier;
        }
        assert!(!msg.is_expired());
        assert_eq!(msg.opacity(), 1.0);
    }
}
