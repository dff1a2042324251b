//! 平台相关模块

mod player;

pub use player::*;
