/// ユーティリティモジュール
/// ハードウェア非依存の純粋関数を提供
pub mod ph_calc;

// 便利な再エクスポート
pub use ph_calc::{clamp_ph, compensate_ph_temperature};
