use super::{PhPublisher, TemperatureSource, VoltageSource};
use crate::core::reading::PhReading;
use std::sync::{Arc, Mutex};

/// テスト用の電圧ソースモック実装
///
/// 実際のADCハードウェアを使わずに電圧読み取りをシミュレートします。
/// `Clone` で共有ハンドルを作り、テスト側から値を差し替えられます。
#[derive(Debug, Clone)]
pub struct MockVoltageSource {
    /// 最新の電圧値（mV）。未設定の場合は「有効な値なし」
    pub latest_mv: Arc<Mutex<Option<f64>>>,
}

impl Default for MockVoltageSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockVoltageSource {
    /// 新しいMockVoltageSourceインスタンスを作成します
    pub fn new() -> Self {
        Self {
            latest_mv: Arc::new(Mutex::new(None)),
        }
    }

    /// テスト用: 最新の電圧値を設定
    pub fn set_voltage(&self, voltage_mv: f64) {
        *self.latest_mv.lock().unwrap() = Some(voltage_mv);
    }

    /// テスト用: 値を未取得状態に戻す
    pub fn clear(&self) {
        *self.latest_mv.lock().unwrap() = None;
    }
}

impl VoltageSource for MockVoltageSource {
    fn read_latest(&mut self) -> Option<f64> {
        *self.latest_mv.lock().unwrap()
    }
}

/// テスト用の水温ソースモック実装
#[derive(Debug, Clone)]
pub struct MockTemperatureSource {
    /// 最新の水温（℃）。未設定の場合は「有効な値なし」
    pub latest_celsius: Arc<Mutex<Option<f64>>>,
}

impl Default for MockTemperatureSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTemperatureSource {
    /// 新しいMockTemperatureSourceインスタンスを作成します
    pub fn new() -> Self {
        Self {
            latest_celsius: Arc::new(Mutex::new(None)),
        }
    }

    /// テスト用: 最新の水温を設定
    pub fn set_temperature(&self, temperature_celsius: f64) {
        *self.latest_celsius.lock().unwrap() = Some(temperature_celsius);
    }

    /// テスト用: 値を未取得状態に戻す
    pub fn clear(&self) {
        *self.latest_celsius.lock().unwrap() = None;
    }
}

impl TemperatureSource for MockTemperatureSource {
    fn read_latest(&mut self) -> Option<f64> {
        *self.latest_celsius.lock().unwrap()
    }
}

/// テスト用の公開先モック実装
///
/// 公開された測定値を記録し、テストで検証できます。
#[derive(Debug, Clone)]
pub struct MockPhPublisher {
    /// 公開された測定値の記録
    pub published: Arc<Mutex<Vec<PhReading>>>,
    /// エラーシミュレーション用のフラグ
    pub simulate_publish_error: Arc<Mutex<bool>>,
}

impl Default for MockPhPublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPhPublisher {
    /// 新しいMockPhPublisherインスタンスを作成します
    pub fn new() -> Self {
        Self {
            published: Arc::new(Mutex::new(Vec::new())),
            simulate_publish_error: Arc::new(Mutex::new(false)),
        }
    }

    /// テスト用: 公開された測定値を取得
    pub fn get_published(&self) -> Vec<PhReading> {
        self.published.lock().unwrap().clone()
    }

    /// テスト用: 公開記録をクリア
    pub fn clear_published(&self) {
        self.published.lock().unwrap().clear();
    }

    /// テスト用: 公開エラーをシミュレート
    pub fn set_publish_error(&self, enable: bool) {
        *self.simulate_publish_error.lock().unwrap() = enable;
    }
}

impl PhPublisher for MockPhPublisher {
    fn publish(&mut self, reading: &PhReading) -> anyhow::Result<()> {
        // エラーシミュレーション
        if *self.simulate_publish_error.lock().unwrap() {
            anyhow::bail!("Simulated publish error");
        }

        self.published.lock().unwrap().push(reading.clone());
        Ok(())
    }
}
