mod app;
mod content_panel;
mod theme;
mod utils;

pub use app::DashboardApp;
pub use content_panel::ContentPanel;
