use log::{info, warn};

use crate::core::calibration::{CalibrationError, PhCalibration};
use crate::core::config::AppConfig;
use crate::core::reading::PhReading;
use crate::sensors::{PhPublisher, TemperatureSource, VoltageSource};
use crate::utils::ph_calc::{clamp_ph, compensate_ph_temperature};

/// pH7.0校正バッファの典型的な電圧範囲（mV）
pub const NEUTRAL_CALIBRATION_WINDOW_MV: (f64, f64) = (1322.0, 1678.0);

/// pH4.0校正バッファの典型的な電圧範囲（mV）
pub const ACID_CALIBRATION_WINDOW_MV: (f64, f64) = (1854.0, 2210.0);

/// 測定・校正操作のエラー
#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    /// 入力センサーにまだ有効な値がない（今回のティックはスキップ）
    #[error("センサー値が未取得です: {0}")]
    SensorUnavailable(&'static str),
    /// 校正の縮退（再校正が必要）
    #[error(transparent)]
    Degenerate(#[from] CalibrationError),
    /// 有効な電圧読み取りがない状態で校正操作が呼ばれた
    #[error("有効な電圧読み取りがないため校正できません")]
    CalibrationUnavailable,
}

/// pH測定パイプライン
///
/// ホストのスケジューラーから `tick` が周期的に呼ばれるたびに、
/// 電圧・水温を読み取り、2点校正と温度補正を適用したpH値を1件
/// 生成して公開先へ送る。タイマーやスレッドは内部に持たない。
pub struct PhMonitor<V, T, P> {
    voltage_source: V,
    temperature_source: T,
    publisher: P,
    calibration: PhCalibration,
    compensation_slope: f64,
    reference_temperature_celsius: f64,
}

impl<V, T, P> PhMonitor<V, T, P>
where
    V: VoltageSource,
    T: TemperatureSource,
    P: PhPublisher,
{
    /// 新しいpH測定モジュールを作成
    ///
    /// 校正状態は設定のデフォルト電圧・基準pHで初期化される。
    pub fn new(voltage_source: V, temperature_source: T, publisher: P, config: &AppConfig) -> Self {
        Self {
            voltage_source,
            temperature_source,
            publisher,
            calibration: PhCalibration::from_config(config),
            compensation_slope: config.temp_compensation_slope,
            reference_temperature_celsius: config.reference_temperature_celsius,
        }
    }

    /// 現在の校正状態を取得
    pub fn calibration(&self) -> &PhCalibration {
        &self.calibration
    }

    /// 校正状態を差し替える（ホスト側で永続化した校正の復元用）
    pub fn restore_calibration(&mut self, calibration: PhCalibration) {
        self.calibration = calibration;
    }

    /// 最新のセンサー値から1件のpH測定を生成する（公開は行わない）
    ///
    /// どちらかのセンサーに有効な値がない場合は `SensorUnavailable`、
    /// 校正が縮退している場合は `Degenerate` を返す。いずれも
    /// 次のティックで再試行される回復可能なエラー。
    pub fn poll(&mut self) -> Result<PhReading, MonitorError> {
        let voltage_mv = match self.voltage_source.read_latest() {
            Some(v) if v.is_finite() => v,
            _ => return Err(MonitorError::SensorUnavailable("voltage")),
        };

        let temperature_celsius = match self.temperature_source.read_latest() {
            Some(t) if t.is_finite() => t,
            _ => return Err(MonitorError::SensorUnavailable("water_temperature")),
        };

        let ph_uncompensated = self.calibration.compute_ph(voltage_mv)?;

        let ph_compensated = compensate_ph_temperature(
            ph_uncompensated,
            temperature_celsius,
            self.reference_temperature_celsius,
            self.compensation_slope,
        );

        let (ph_value, is_clamped) = clamp_ph(ph_compensated);
        if is_clamped {
            warn!(
                "pH値が測定範囲外のためクランプしました: {:.2} -> {:.2}",
                ph_compensated, ph_value
            );
        }

        Ok(PhReading::new(
            voltage_mv,
            temperature_celsius,
            ph_uncompensated,
            ph_value,
            is_clamped,
        ))
    }

    /// 1ティック分の測定と公開を実行する
    ///
    /// センサー未取得・校正縮退は回復可能なエラーとして扱い、
    /// そのティックの公開をスキップして `Ok(None)` を返す。
    /// 公開先へのエラーのみ呼び出し側へ伝播する。
    pub fn tick(&mut self) -> anyhow::Result<Option<PhReading>> {
        match self.poll() {
            Ok(reading) => {
                self.publisher.publish(&reading)?;
                info!("pH測定完了: {}", reading.get_summary());
                Ok(Some(reading))
            }
            Err(MonitorError::Degenerate(e)) => {
                warn!("校正が縮退しているため測定をスキップします。再校正してください: {}", e);
                Ok(None)
            }
            Err(e) => {
                info!("今回の測定をスキップします: {}", e);
                Ok(None)
            }
        }
    }

    /// 現在の電圧読み取りを中性点（pH7.0相当）として校正する
    ///
    /// 有効な電圧読み取りがない場合は `CalibrationUnavailable` を返し、
    /// 校正状態は変更しない。成功時は取り込んだ電圧を返す。
    pub fn calibrate_neutral(&mut self) -> Result<f64, MonitorError> {
        let voltage_mv = self.latest_calibration_voltage()?;
        warn_if_outside_window(voltage_mv, NEUTRAL_CALIBRATION_WINDOW_MV, "pH7.0");
        self.calibration.set_neutral_voltage(voltage_mv);
        info!("✓ pH7.0校正完了: {:.2} mV", voltage_mv);
        Ok(voltage_mv)
    }

    /// 現在の電圧読み取りを酸性点（pH4.0相当）として校正する
    pub fn calibrate_acid(&mut self) -> Result<f64, MonitorError> {
        let voltage_mv = self.latest_calibration_voltage()?;
        warn_if_outside_window(voltage_mv, ACID_CALIBRATION_WINDOW_MV, "pH4.0");
        self.calibration.set_acid_voltage(voltage_mv);
        info!("✓ pH4.0校正完了: {:.2} mV", voltage_mv);
        Ok(voltage_mv)
    }

    fn latest_calibration_voltage(&mut self) -> Result<f64, MonitorError> {
        match self.voltage_source.read_latest() {
            Some(v) if v.is_finite() => Ok(v),
            _ => {
                warn!("有効な電圧読み取りがないため校正をスキップします");
                Err(MonitorError::CalibrationUnavailable)
            }
        }
    }
}

/// 校正電圧が典型的なバッファ範囲外の場合に警告を出す
///
/// 範囲外でも校正自体は実行される（拒否はしない）。
fn warn_if_outside_window(voltage_mv: f64, window_mv: (f64, f64), label: &str) {
    let (min_mv, max_mv) = window_mv;
    if voltage_mv < min_mv || voltage_mv > max_mv {
        warn!(
            "{}校正の電圧が典型的な範囲 ({:.0}〜{:.0} mV) 外です: {:.2} mV",
            label, min_mv, max_mv, voltage_mv
        );
    }
}
