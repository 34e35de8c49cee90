mod scan_log;
mod warning_window;

pub use scan_log::ScanLog;
pub use warning_window::WarningWindow;
