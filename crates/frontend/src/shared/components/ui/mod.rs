pub mod badge;
pub mod input;
pub mod row_actions;
pub mod textarea;

pub use badge::{ActiveBadge, IconBadge};
pub use input::Input;
pub use row_actions::{RowAction, RowActions};
pub use textarea::Textarea;
