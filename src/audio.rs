//! 音效播放抽象

/// 音效播放服务
/// 调用后立即开始播放，不阻塞调用方，播放结束后自行清理
pub trait AudioPlayer {
    /// 播放指定地址的音效
    fn play(&self, uri: &str);
}

/// 静音播放器（不播放任何声音）
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioPlayer for SilentAudio {
    fn play(&self, uri: &str) {
        log::trace!("Silent audio skipped {}", uri);
    }
}
