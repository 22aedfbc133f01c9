// Components module - reusable UI building blocks
//
// Shell components are rendered around every screen:
// - Title bar: app name, signed-in user
// - Tab bar: dashboard tabs, once the gate is open
// - Status bar: gate stage, AQI band, alert count, uptime
// - Logs panel: captured tracing events
//
// Form widgets and the toast are shared by the views.

pub mod form;
pub mod logs_panel;
pub mod status_bar;
pub mod tab_bar;
pub mod title_bar;
pub mod toast;

pub use toast::Toast;
