pub mod admin_menu;
pub mod detail;
pub mod frames;
pub mod menu;
pub mod toolbar;

pub use admin_menu::AdminMenuPane;
pub use detail::DetailPane;
pub use frames::{provide_nav_context, use_nav_context, LeftView, NavContext};
pub use menu::MenuPane;
pub use toolbar::ToolbarPane;
