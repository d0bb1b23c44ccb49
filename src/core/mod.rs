/// コアシステムモジュール
pub mod calibration;
pub mod config;
pub mod monitor;
pub mod reading;

pub use calibration::{CalibrationError, CalibrationPoint, PhCalibration};
pub use config::{AppConfig, ConfigError};
pub use monitor::{MonitorError, PhMonitor};
pub use reading::PhReading;
