//! 帮助弹窗模块

use crate::app::AppState;
use crate::ui::{centered_rect, Theme};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

/// 帮助弹窗
pub fn draw_help_popup(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let i18n = state.i18n();
    let area = centered_rect(55, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(i18n.help())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.info))
        .style(Style::default().bg(theme.bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let key_style = Style::default().fg(theme.info).add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(theme.fg);
    let section_style = Style::default()
        .fg(theme.title)
        .add_modifier(Modifier::BOLD);

    let sections = match state.language() {
        crate::i18n::Language::English => vec![
            ("DRAW", ""),
            ("  Space/Enter", "Start a draw"),
            ("  r", "Reshuffle the prize reel"),
            ("", ""),
            ("SWITCHES", ""),
            ("  a", "Toggle animation"),
            ("  s", "Toggle sound effects"),
            ("  l", "Switch language"),
            ("", ""),
            ("GENERAL", ""),
            ("  q/Esc/Ctrl+C", "Quit application"),
            ("  ?", "Toggle this help"),
        ],
        crate::i18n::Language::Chinese => vec![
            ("抽奖", ""),
            ("  Space/Enter", "开始抽奖"),
            ("  r", "重新生成奖品序列"),
            ("", ""),
            ("开关", ""),
            ("  a", "切换动画"),
            ("  s", "切换音效"),
            ("  l", "切换语言"),
            ("", ""),
            ("通用", ""),
            ("  q/Esc/Ctrl+C", "退出应用"),
            ("  ?", "显示/隐藏帮助"),
        ],
    };

    let lines: Vec<Line> = sections
        .into_iter()
        .map(|(key, desc)| {
            if desc.is_empty() {
                Line::from(Span::styled(key, section_style))
            } else {
                Line::from(vec![
                    Span::styled(format!("{:<18}", key), key_style),
                    Span::styled(desc, desc_style),
                ])
            }
        })
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    frame.render_widget(Paragraph::new(lines), chunks[0]);
    frame.render_widget(
        Paragraph::new(format!("  {}", i18n.close_hint())).style(
            Style::default()
                .fg(theme.border)
                .add_modifier(Modifier::DIM),
        ),
        chunks[1],
    );
}
