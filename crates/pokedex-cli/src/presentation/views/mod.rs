// Console views implement Display over view models; tui holds the ratatui widgets

pub mod notice;
pub mod record;
pub mod tui;

pub use notice::NoticeView;
pub use record::{RecordView, render_lines};
