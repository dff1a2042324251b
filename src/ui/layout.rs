//! 布局管理模块
//! 负责主界面的布局划分

use crate::app::{AppMode, AppState};
use crate::ui::{
    draw_help_popup, draw_prize_list, draw_reel, draw_status_bar, draw_title_bar, Theme,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// 滚轴面板高度（边框 2 行 + 标记行 2 行 + 奖品 3 行 + 上下留白）
pub const REEL_PANEL_HEIGHT: u16 = 9;

/// 绘制主界面
pub fn draw_ui(frame: &mut Frame, state: &AppState, theme: &Theme) {
    // 主布局：顶部标题 + 滚轴 + 奖品池 + 底部状态栏
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                 // 标题栏
            Constraint::Length(REEL_PANEL_HEIGHT), // 奖品滚轴
            Constraint::Min(3),                    // 奖品池
            Constraint::Length(1),                 // 状态栏
        ])
        .split(frame.area());

    draw_title_bar(frame, chunks[0], state, theme);
    draw_reel(frame, chunks[1], state, theme);
    draw_prize_list(frame, chunks[2], state, theme);
    draw_status_bar(frame, chunks[3], state, theme);

    if state.mode == AppMode::Help {
        draw_help_popup(frame, state, theme);
    }
}

/// 计算居中矩形（百分比）
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
