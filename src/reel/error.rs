//! 抽奖错误类型

use thiserror::Error;

/// 抽奖过程中可能出现的错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    /// 中奖标识不在可寻址区域内（序列末尾的预留填充不参与查找）
    #[error("winning item not found in the addressable region of the display sequence")]
    NotFound,

    /// 配置不合法（可视个数为偶数、奖品池为空等）
    #[error("invalid draw configuration: {0}")]
    InvalidConfiguration(String),
}

impl DrawError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        DrawError::InvalidConfiguration(msg.into())
    }
}
