// Mock実装（ホストでのテストで使用可能）
pub mod mock;

use crate::core::reading::PhReading;

/// アナログ電圧ソースのインターフェース
///
/// 外部ADC（pH電極アンプの出力）の最新値を提供する。実機では
/// ハードウェアのセンサーオブジェクトが、テストではMockが実装する。
pub trait VoltageSource {
    /// 最新の電圧値（mV）を返す。まだ有効な値がない場合は `None`。
    ///
    /// ブロックせず即座に返すこと。`None` のティックは測定が
    /// スキップされ、次のティックで再試行される。
    fn read_latest(&mut self) -> Option<f64>;
}

/// 水温ソースのインターフェース
pub trait TemperatureSource {
    /// 最新の水温（℃）を返す。まだ有効な値がない場合は `None`。
    fn read_latest(&mut self) -> Option<f64>;
}

/// 測定値の公開先のインターフェース
///
/// ホスト側のセンサー値シンク（コンポーネントフレームワークの
/// publish機構など）を抽象化する。ティックごとに最大1回呼ばれ、
/// 呼ばれなかったティックは「新しい値なし」を意味する。
pub trait PhPublisher {
    /// 補正・クランプ済みのpH測定値をホストへ公開する
    fn publish(&mut self, reading: &PhReading) -> anyhow::Result<()>;
}

pub use mock::{MockPhPublisher, MockTemperatureSource, MockVoltageSource};
