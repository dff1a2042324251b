//! 标题栏模块

use crate::app::AppState;
use crate::ui::Theme;
use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// 绘制标题栏（应用名 + 动画/音效开关）
pub fn draw_title_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let i18n = state.i18n();
    let settings = &state.config.draw;

    let switch_style = |on: bool| {
        if on {
            Style::default().fg(theme.success)
        } else {
            Style::default().fg(theme.muted)
        }
    };

    let line = Line::from(vec![
        Span::styled(i18n.app_title(), Style::default().fg(theme.title).bold()),
        Span::styled(" │ ", Style::default().fg(theme.border)),
        Span::styled(format!("{}: ", i18n.animation()), Style::default().fg(theme.status_fg)),
        Span::styled(
            i18n.on_off(settings.open_animation),
            switch_style(settings.open_animation),
        ),
        Span::styled("  ", Style::default()),
        Span::styled(format!("{}: ", i18n.sound()), Style::default().fg(theme.status_fg)),
        Span::styled(
            i18n.on_off(settings.open_sound),
            switch_style(settings.open_sound),
        ),
        Span::styled(" │ ", Style::default().fg(theme.border)),
        Span::styled(
            state.language().display_name(),
            Style::default().fg(theme.status_fg),
        ),
    ]);

    let title = Paragraph::new(line).bg(theme.status_bg);
    frame.render_widget(title, area);
}
