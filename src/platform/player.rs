//! 系统音效播放器
//! 通过系统自带的命令行播放器播放音效文件，播放结束后回收子进程

use luckydraw::AudioPlayer;
use std::path::{Path, PathBuf};
use std::process::Stdio;

/// 按优先级排列的候选播放器
#[cfg(target_os = "macos")]
pub const PLAYER_CANDIDATES: &[&str] = &["afplay", "ffplay"];

#[cfg(not(target_os = "macos"))]
pub const PLAYER_CANDIDATES: &[&str] = &["paplay", "aplay", "ffplay"];

/// 基于子进程的音效播放器
#[derive(Debug, Clone, Default)]
pub struct SystemAudioPlayer {
    /// 检测到的播放器路径（未找到时静音）
    command: Option<PathBuf>,
}

impl SystemAudioPlayer {
    /// 在 PATH 中查找可用的播放器
    pub fn detect() -> Self {
        Self::detect_from(PLAYER_CANDIDATES)
    }

    /// 从给定候选列表中查找第一个存在的播放器
    pub fn detect_from(candidates: &[&str]) -> Self {
        let command = candidates.iter().find_map(|name| which::which(name).ok());
        match command {
            Some(ref path) => log::info!("Using audio player {}", path.display()),
            None => log::info!("No audio player found, sound effects disabled"),
        }
        Self { command }
    }
}

/// 构建播放参数（ffplay 需要关闭窗口并在播放结束后退出）
pub fn player_args(command: &Path, uri: &str) -> Vec<String> {
    let name = command
        .file_stem()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    match name {
        "ffplay" => vec![
            "-nodisp".to_string(),
            "-autoexit".to_string(),
            "-loglevel".to_string(),
            "quiet".to_string(),
            uri.to_string(),
        ],
        _ => vec![uri.to_string()],
    }
}

impl AudioPlayer for SystemAudioPlayer {
    fn play(&self, uri: &str) {
        let Some(ref command) = self.command else {
            log::debug!("Skipping sound {}, no player", uri);
            return;
        };
        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                log::warn!("Cannot play {} outside the runtime: {}", uri, e);
                return;
            }
        };

        let spawned = tokio::process::Command::new(command)
            .args(player_args(command, uri))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(mut child) => {
                let uri = uri.to_string();
                // 播放结束后回收进程
                handle.spawn(async move {
                    match child.wait().await {
                        Ok(status) => log::debug!("Sound {} finished: {}", uri, status),
                        Err(e) => log::warn!("Sound {} wait failed: {}", uri, e),
                    }
                });
            }
            Err(e) => log::warn!("Failed to play {}: {}", uri, e),
        }
    }
}
