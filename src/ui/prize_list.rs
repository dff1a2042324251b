//! 奖品池组件
//! 显示所有奖品，并标记最近一次的中奖奖品

use crate::app::AppState;
use crate::ui::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

/// 绘制奖品池
pub fn draw_prize_list(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let title = match state.language() {
        crate::i18n::Language::English => format!(" Prize Pool ({}) ", state.config.prizes.len()),
        crate::i18n::Language::Chinese => format!(" 奖品池 ({}) ", state.config.prizes.len()),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg));

    let items: Vec<ListItem> = state
        .config
        .prizes
        .iter()
        .map(|prize| {
            let is_winner = state.last_winner.as_deref() == Some(prize.id.as_str());
            let (prefix, style) = if is_winner {
                (
                    "★ ",
                    Style::default()
                        .fg(theme.selection_fg)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(theme.fg))
            };

            ListItem::new(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(prize.name.clone(), style),
                Span::styled(format!("  ({})", prize.id), Style::default().fg(theme.muted)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
