//! 状态栏模块

use crate::app::{AppState, StatusKind};
use crate::i18n::Language;
use crate::ui::Theme;
use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// 获取状态栏帮助项
pub fn get_status_help_items(language: Language) -> Vec<(&'static str, &'static str)> {
    match language {
        Language::English => vec![
            ("Space", "Draw"),
            ("r", "Reshuffle"),
            ("a", "Animation"),
            ("s", "Sound"),
            ("l", "Language"),
            ("?", "Help"),
            ("q", "Quit"),
        ],
        Language::Chinese => vec![
            ("Space", "抽奖"),
            ("r", "重新生成"),
            ("a", "动画"),
            ("s", "音效"),
            ("l", "语言"),
            ("?", "帮助"),
            ("q", "退出"),
        ],
    }
}

/// 绘制状态栏
pub fn draw_status_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    // 有状态消息时优先显示
    if let Some(ref msg) = state.status_message {
        let (icon, color) = match msg.kind {
            StatusKind::Info => ("…", theme.info),
            StatusKind::Success => ("✓", theme.success),
            StatusKind::Error => ("✗", theme.error),
        };
        // 淡出时变暗
        let fg_color = if state.status_opacity() > 0.5 {
            color
        } else {
            theme.border
        };

        let status = Paragraph::new(format!(" {} {}", icon, msg.text))
            .style(Style::default().fg(fg_color))
            .bg(theme.status_bg);
        frame.render_widget(status, area);
        return;
    }

    let key_style = Style::default().fg(theme.info);
    let desc_style = Style::default().fg(theme.status_fg);
    let sep_style = Style::default().fg(theme.border);

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, (key, desc)) in get_status_help_items(state.language()).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(": ", sep_style));
        spans.push(Span::styled(*desc, desc_style));
    }

    let status = Paragraph::new(Line::from(spans)).bg(theme.status_bg);
    frame.render_widget(status, area);
}
