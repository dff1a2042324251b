//! 国际化模块
//! 支持中英文切换

use serde::{Deserialize, Serialize};

/// 语言枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    /// 获取语言显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Chinese => "中文",
        }
    }

    /// 切换语言
    pub fn toggle(&self) -> Self {
        match self {
            Language::English => Language::Chinese,
            Language::Chinese => Language::English,
        }
    }
}

/// 国际化文本
pub struct I18n {
    lang: Language,
}

impl I18n {
    pub fn new(lang: Language) -> Self {
        Self { lang }
    }

    // === 标题 ===
    pub fn app_title(&self) -> &'static str {
        match self.lang {
            Language::English => " LuckyDraw ",
            Language::Chinese => " 滚动抽奖 ",
        }
    }

    pub fn reel(&self) -> &'static str {
        match self.lang {
            Language::English => " Prize Reel ",
            Language::Chinese => " 奖品滚轴 ",
        }
    }

    pub fn help(&self) -> &'static str {
        match self.lang {
            Language::English => " Help ",
            Language::Chinese => " 帮助 ",
        }
    }

    // === 开关 ===
    pub fn animation(&self) -> &'static str {
        match self.lang {
            Language::English => "Animation",
            Language::Chinese => "动画",
        }
    }

    pub fn sound(&self) -> &'static str {
        match self.lang {
            Language::English => "Sound",
            Language::Chinese => "音效",
        }
    }

    pub fn on_off(&self, on: bool) -> &'static str {
        match (self.lang, on) {
            (Language::English, true) => "on",
            (Language::English, false) => "off",
            (Language::Chinese, true) => "开",
            (Language::Chinese, false) => "关",
        }
    }

    // === 抽奖状态 ===
    pub fn rolling(&self) -> &'static str {
        match self.lang {
            Language::English => "Rolling...",
            Language::Chinese => "抽奖中...",
        }
    }

    pub fn winner(&self, name: &str) -> String {
        match self.lang {
            Language::English => format!("Winner: {}", name),
            Language::Chinese => format!("中奖：{}", name),
        }
    }

    pub fn reel_rebuilt(&self) -> &'static str {
        match self.lang {
            Language::English => "Reel reshuffled",
            Language::Chinese => "已重新生成奖品序列",
        }
    }

    pub fn draw_failed(&self) -> &'static str {
        match self.lang {
            Language::English => "Draw failed, check the draw settings",
            Language::Chinese => "抽奖失败，请检查抽奖设置",
        }
    }

    pub fn close_hint(&self) -> &'static str {
        match self.lang {
            Language::English => "Press Esc or ? to close",
            Language::Chinese => "按 Esc 或 ? 关闭",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_language() {
        assert_eq!(Language::English.toggle(), Language::Chinese);
        assert_eq!(Language::Chinese.toggle(), Language::English);
    }

    #[test]
    fn test_winner_text() {
        assert_eq!(I18n::new(Language::English).winner("Gift"), "Winner: Gift");
        assert_eq!(I18n::new(Language::Chinese).winner("Gift"), "中奖：Gift");
    }
}
