//! 配置管理模块

mod persistence;

pub use persistence::*;

use crate::i18n::Language;
use serde::{Deserialize, Serialize};

/// 奖品
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prize {
    /// 奖品标识
    pub id: String,
    /// 显示名称
    pub name: String,
}

impl Prize {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

/// 抽奖动效设置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawSettings {
    /// 展示序列总个数
    pub total: usize,
    /// 一屏展示的奖品个数（奇数）
    pub visible_count: usize,
    /// 奖品宽度（终端列数）
    pub item_width: u16,
    /// 滚动持续时间（秒）
    pub duration_secs: f64,
    /// 是否启用动画
    pub open_animation: bool,
    /// 是否启用音效
    pub open_sound: bool,
    /// 开始音效文件
    pub audio_start: Option<String>,
    /// 结束音效文件
    pub audio_end: Option<String>,
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self {
            total: 60,
            visible_count: 5,
            item_width: 14,
            duration_secs: luckydraw::reel::DEFAULT_DURATION_SECS,
            open_animation: true,
            open_sound: true,
            audio_start: None,
            audio_end: None,
        }
    }
}

impl DrawSettings {
    /// 检查设置是否可用于抽奖
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.item_width == 0 {
            anyhow::bail!("item_width must be positive");
        }
        // 视口宽度必须放得进终端坐标
        let viewport = self.visible_count.checked_mul(self.item_width as usize);
        if viewport.map_or(true, |width| width > u16::MAX as usize) {
            anyhow::bail!(
                "visible_count * item_width must not exceed {} columns, got {} * {}",
                u16::MAX,
                self.visible_count,
                self.item_width
            );
        }
        if !self.duration_secs.is_finite() || self.duration_secs < 0.0 {
            anyhow::bail!("duration_secs must be non-negative, got {}", self.duration_secs);
        }
        // 零时长过渡不会产生结束事件，动画模式下必须有时长
        if self.open_animation && self.duration_secs == 0.0 {
            anyhow::bail!("duration_secs must be positive when animation is enabled");
        }
        Ok(())
    }
}

/// 应用设置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppSettings {
    /// 界面语言
    #[serde(default)]
    pub language: Language,
}

/// 应用配置（持久化到 config.json）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 奖品池
    #[serde(default = "default_prizes")]
    pub prizes: Vec<Prize>,
    /// 抽奖动效设置
    #[serde(default)]
    pub draw: DrawSettings,
    /// 应用设置
    #[serde(default)]
    pub settings: AppSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            prizes: default_prizes(),
            draw: DrawSettings::default(),
            settings: AppSettings::default(),
        }
    }
}

impl AppConfig {
    /// 根据标识查找奖品
    pub fn prize(&self, id: &str) -> Option<&Prize> {
        self.prizes.iter().find(|p| p.id == id)
    }
}

/// 默认奖品池
/// 名称按单元格逐字绘制，避免使用宽字符
fn default_prizes() -> Vec<Prize> {
    vec![
        Prize::new("phone", "Phone"),
        Prize::new("laptop", "Laptop"),
        Prize::new("headset", "Headset"),
        Prize::new("coffee", "Coffee"),
        Prize::new("ticket", "Ticket"),
        Prize::new("gift", "Gift Box"),
        Prize::new("coupon", "Coupon"),
        Prize::new("thanks", "Thank You"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let config = AppConfig::default();
        assert!(config.draw.validate().is_ok());
        assert_eq!(config.prizes.len(), 8);
        assert_eq!(config.draw.duration_secs, 10.0);
    }

    #[test]
    fn test_oversized_viewport_rejected() {
        let settings = DrawSettings {
            visible_count: 9999,
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        let settings = DrawSettings {
            visible_count: usize::MAX,
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        // 14 * 4681 = 65534，仍在范围内
        let settings = DrawSettings {
            visible_count: 4681,
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_visible_count_parity_left_to_draw() {
        let settings = DrawSettings {
            visible_count: 4,
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "draw": { "visible_count": 7 } }"#).unwrap();
        assert_eq!(config.draw.visible_count, 7);
        assert_eq!(config.draw.total, 60);
        assert!(config.draw.open_sound);
        assert_eq!(config.prizes.len(), 8);
        assert!(config.prize("laptop").is_some());
    }
}
