//! UI 模块
//! 包含所有 UI 相关组件

mod help_popup;
mod layout;
mod prize_list;
mod reel;
mod status_bar;
mod theme;
mod title_bar;

pub use help_popup::*;
pub use layout::*;
pub use prize_list::*;
pub use reel::*;
pub use status_bar::*;
pub use theme::*;
pub use title_bar::*;
