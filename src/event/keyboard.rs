//! 键盘事件处理模块

use crate::app::{AppMode, AppState, StatusKind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 处理键盘事件
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> anyhow::Result<bool> {
    // Ctrl+C 在任何模式下都退出
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return Ok(true);
    }

    match state.mode {
        AppMode::Normal => handle_normal_mode(state, key),
        AppMode::Help => handle_help_mode(state, key),
    }
}

/// 处理普通模式下的键盘事件
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => {
            if let Err(e) = state.start_draw() {
                log::warn!("Draw not started: {:#}", e);
                let text = state.i18n().draw_failed();
                state.set_status(text, StatusKind::Error);
            }
        }
        KeyCode::Char('r') => {
            if state.is_drawing() {
                return Ok(false);
            }
            match state.rebuild_sequence() {
                Ok(()) => {
                    let text = state.i18n().reel_rebuilt();
                    state.set_status(text, StatusKind::Info);
                    // 新序列从头展示
                    state.surface = crate::ui::ReelSurface::default();
                }
                Err(e) => {
                    log::warn!("Failed to rebuild display sequence: {:#}", e);
                    let text = state.i18n().draw_failed();
                    state.set_status(text, StatusKind::Error);
                }
            }
        }
        KeyCode::Char('a') => state.toggle_animation(),
        KeyCode::Char('s') => state.toggle_sound(),
        KeyCode::Char('l') => state.toggle_language(),
        KeyCode::Char('?') => state.mode = AppMode::Help,
        KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
        _ => return Ok(false),
    }
    Ok(true)
}

/// 处理帮助弹窗模式下的键盘事件
fn handle_help_mode(state: &mut AppState, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
            state.exit_mode();
            Ok(true)
        }
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use luckydraw::SilentAudio;
    use std::rc::Rc;

    fn press(state: &mut AppState, code: KeyCode) -> bool {
        handle_key_event(state, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
    }

    #[test]
    fn test_space_starts_draw() {
        let mut state = AppState::new(AppConfig::default(), Rc::new(SilentAudio));
        assert!(press(&mut state, KeyCode::Char(' ')));
        assert!(state.is_drawing());
    }

    #[test]
    fn test_help_popup_toggles() {
        let mut state = AppState::new(AppConfig::default(), Rc::new(SilentAudio));
        press(&mut state, KeyCode::Char('?'));
        assert_eq!(state.mode, AppMode::Help);
        // 帮助弹窗中的按键不会触发抽奖
        assert!(!press(&mut state, KeyCode::Char(' ')));
        assert!(!state.is_drawing());
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.mode, AppMode::Normal);
        assert!(!state.should_quit);
    }

    #[test]
    fn test_reshuffle_ignored_while_drawing() {
        let mut state = AppState::new(AppConfig::default(), Rc::new(SilentAudio));
        press(&mut state, KeyCode::Char(' '));
        let before = state.sequence.clone();
        assert!(!press(&mut state, KeyCode::Char('r')));
        assert_eq!(state.sequence, before);
    }

    #[test]
    fn test_quit_keys() {
        let mut state = AppState::new(AppConfig::default(), Rc::new(SilentAudio));
        handle_key_event(
            &mut state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        )
        .unwrap();
        assert!(state.should_quit);
    }
}
