//! 主题模块
//! 实现 Catppuccin Mocha 配色方案

use ratatui::style::Color;

/// Catppuccin Mocha 配色（只保留用到的颜色）
/// 参考: https://github.com/catppuccin/catppuccin
pub struct CatppuccinMocha;

impl CatppuccinMocha {
    pub const BASE: Color = Color::Rgb(30, 30, 46); // #1e1e2e
    pub const MANTLE: Color = Color::Rgb(24, 24, 37); // #181825
    pub const SURFACE0: Color = Color::Rgb(49, 50, 68); // #313244
    pub const SURFACE1: Color = Color::Rgb(69, 71, 90); // #45475a
    pub const OVERLAY0: Color = Color::Rgb(108, 112, 134); // #6c7086
    pub const TEXT: Color = Color::Rgb(205, 214, 244); // #cdd6f4
    pub const SUBTEXT1: Color = Color::Rgb(186, 194, 222); // #bac2de
    pub const MAUVE: Color = Color::Rgb(203, 166, 247); // #cba6f7
    pub const RED: Color = Color::Rgb(243, 139, 168); // #f38ba8
    pub const PEACH: Color = Color::Rgb(250, 179, 135); // #fab387
    pub const YELLOW: Color = Color::Rgb(249, 226, 175); // #f9e2af
    pub const GREEN: Color = Color::Rgb(166, 227, 161); // #a6e3a1
    pub const BLUE: Color = Color::Rgb(137, 180, 250); // #89b4fa
    pub const LAVENDER: Color = Color::Rgb(180, 190, 254); // #b4befe
}

/// 应用主题
pub struct Theme {
    /// 背景色
    pub bg: Color,
    /// 前景色（文字）
    pub fg: Color,
    /// 边框颜色
    pub border: Color,
    /// 边框颜色（抽奖进行中）
    pub border_focused: Color,
    /// 中奖高亮背景
    pub selection: Color,
    /// 中奖高亮文字
    pub selection_fg: Color,
    /// 中间位置指示箭头
    pub marker: Color,
    /// 状态栏背景
    pub status_bg: Color,
    /// 状态栏文字
    pub status_fg: Color,
    /// 标题颜色
    pub title: Color,
    /// 暗淡文字
    pub muted: Color,
    pub success: Color,
    pub error: Color,
    pub info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::catppuccin_mocha()
    }
}

impl Theme {
    /// 创建 Catppuccin Mocha 主题
    pub fn catppuccin_mocha() -> Self {
        Self {
            bg: CatppuccinMocha::BASE,
            fg: CatppuccinMocha::TEXT,
            border: CatppuccinMocha::SURFACE1,
            border_focused: CatppuccinMocha::LAVENDER,
            selection: CatppuccinMocha::SURFACE0,
            selection_fg: CatppuccinMocha::YELLOW,
            marker: CatppuccinMocha::PEACH,
            status_bg: CatppuccinMocha::MANTLE,
            status_fg: CatppuccinMocha::SUBTEXT1,
            title: CatppuccinMocha::MAUVE,
            muted: CatppuccinMocha::OVERLAY0,
            success: CatppuccinMocha::GREEN,
            error: CatppuccinMocha::RED,
            info: CatppuccinMocha::BLUE,
        }
    }
}
