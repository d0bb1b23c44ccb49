/*!
 * # pH Monitor Library
 *
 * 外部アナログpHセンサーのADC電圧読み取りを、2点校正（pH7.0/pH4.0）と
 * 水温による温度補正を適用してpH値に変換するライブラリ
 *
 * ## モジュール構成
 * - `core`: アプリケーションの核となる機能（設定、校正状態、測定パイプライン）
 * - `sensors`: ホスト連携のインターフェース（電圧/水温ソース、公開先）とテスト用モック
 * - `utils`: ハードウェア非依存の純粋計算関数
 *
 * ポーリングのタイマーとハードウェアのセンサーオブジェクトはホスト側が
 * 所有し、本ライブラリは「1ティックにつき最大1件の測定」だけを担当する。
 */

// 公開モジュール
pub mod core;
pub mod sensors;
pub mod utils;

// 内部で使用する型をまとめてエクスポート
pub use crate::core::calibration::{CalibrationError, CalibrationPoint, PhCalibration};
pub use crate::core::config::{AppConfig, ConfigError};
pub use crate::core::monitor::{MonitorError, PhMonitor};
pub use crate::core::reading::PhReading;
pub use crate::sensors::{PhPublisher, TemperatureSource, VoltageSource};
pub use crate::utils::ph_calc::{clamp_ph, compensate_ph_temperature};

/// ライブラリのバージョン情報
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
