use crate::core::config::AppConfig;

/// 工場出荷時の中性点（pH7.0）デフォルト電圧（mV）
pub const DEFAULT_NEUTRAL_VOLTAGE_MV: f64 = 1500.0;

/// 工場出荷時の酸性点（pH4.0）デフォルト電圧（mV）
pub const DEFAULT_ACID_VOLTAGE_MV: f64 = 2032.0;

/// 中性校正バッファの基準pH値
pub const NEUTRAL_REFERENCE_PH: f64 = 7.0;

/// 酸性校正バッファの基準pH値
pub const ACID_REFERENCE_PH: f64 = 4.0;

/// 校正エラー
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum CalibrationError {
    /// 中性点と酸性点の電圧が同一で、傾きが計算できない状態
    #[error("校正が縮退しています: 中性点と酸性点の電圧が同一です ({0:.2} mV)")]
    DegenerateCalibration(f64),
}

/// 校正基準点（測定電圧と基準pHのペア）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationPoint {
    /// 校正時に測定された電圧（mV）
    pub measured_voltage_mv: f64,
    /// 校正バッファ液の基準pH値
    pub reference_ph: f64,
}

impl CalibrationPoint {
    pub const fn new(measured_voltage_mv: f64, reference_ph: f64) -> Self {
        Self {
            measured_voltage_mv,
            reference_ph,
        }
    }
}

/// 2点校正の状態を保持し、電圧→pH変換の一次式を導出する構造体
///
/// 中性点（通常pH7.0）と酸性点（通常pH4.0）の2つの基準点を保持し、
/// 変換係数（傾き・切片）は保持せず都度導出する。各校正操作は
/// 片方の点の電圧だけを上書きするため、順序に依存せず冪等になる。
#[derive(Debug, Clone, PartialEq)]
pub struct PhCalibration {
    neutral: CalibrationPoint,
    acid: CalibrationPoint,
}

impl PhCalibration {
    /// 任意の2点から校正状態を作成
    pub const fn new(neutral: CalibrationPoint, acid: CalibrationPoint) -> Self {
        Self { neutral, acid }
    }

    /// アプリケーション設定のデフォルト電圧・基準pHから校正状態を作成
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            neutral: CalibrationPoint::new(
                config.default_neutral_voltage_mv,
                config.neutral_reference_ph,
            ),
            acid: CalibrationPoint::new(
                config.default_acid_voltage_mv,
                config.acid_reference_ph,
            ),
        }
    }

    /// 中性点の電圧を上書きする（基準pHは変更しない）
    pub fn set_neutral_voltage(&mut self, voltage_mv: f64) {
        self.neutral.measured_voltage_mv = voltage_mv;
    }

    /// 酸性点の電圧を上書きする（基準pHは変更しない）
    pub fn set_acid_voltage(&mut self, voltage_mv: f64) {
        self.acid.measured_voltage_mv = voltage_mv;
    }

    /// 現在の中性点を取得
    pub fn neutral_point(&self) -> CalibrationPoint {
        self.neutral
    }

    /// 現在の酸性点を取得
    pub fn acid_point(&self) -> CalibrationPoint {
        self.acid
    }

    /// 変換式の傾きを導出
    ///
    /// 2点の電圧が同一の場合は除算前に検出し、
    /// `CalibrationError::DegenerateCalibration` を返す。
    pub fn slope(&self) -> Result<f64, CalibrationError> {
        let voltage_diff = self.neutral.measured_voltage_mv - self.acid.measured_voltage_mv;
        if voltage_diff == 0.0 {
            return Err(CalibrationError::DegenerateCalibration(
                self.neutral.measured_voltage_mv,
            ));
        }
        Ok((self.neutral.reference_ph - self.acid.reference_ph) / voltage_diff)
    }

    /// 変換式の切片を導出
    pub fn intercept(&self) -> Result<f64, CalibrationError> {
        let slope = self.slope()?;
        Ok(self.neutral.reference_ph - slope * self.neutral.measured_voltage_mv)
    }

    /// 電圧（mV）を温度補正前のpH値に変換
    pub fn compute_ph(&self, voltage_mv: f64) -> Result<f64, CalibrationError> {
        let slope = self.slope()?;
        let intercept = self.neutral.reference_ph - slope * self.neutral.measured_voltage_mv;
        Ok(slope * voltage_mv + intercept)
    }
}

impl Default for PhCalibration {
    fn default() -> Self {
        Self {
            neutral: CalibrationPoint::new(DEFAULT_NEUTRAL_VOLTAGE_MV, NEUTRAL_REFERENCE_PH),
            acid: CalibrationPoint::new(DEFAULT_ACID_VOLTAGE_MV, ACID_REFERENCE_PH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_calibration_points() {
        let cal = PhCalibration::default();
        assert_eq!(cal.neutral_point().measured_voltage_mv, 1500.0);
        assert_eq!(cal.neutral_point().reference_ph, 7.0);
        assert_eq!(cal.acid_point().measured_voltage_mv, 2032.0);
        assert_eq!(cal.acid_point().reference_ph, 4.0);
    }

    #[test]
    fn test_exact_fidelity_at_reference_points() {
        // 基準点では基準pHを厳密に再現する（許容誤差1e-9）
        let cal = PhCalibration::default();
        let ph_neutral = cal.compute_ph(1500.0).unwrap();
        let ph_acid = cal.compute_ph(2032.0).unwrap();
        assert!((ph_neutral - 7.0).abs() < 1e-9);
        assert!((ph_acid - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_fidelity_after_recalibration() {
        let mut cal = PhCalibration::default();
        cal.set_neutral_voltage(1450.5);
        cal.set_acid_voltage(2100.25);
        assert!((cal.compute_ph(1450.5).unwrap() - 7.0).abs() < 1e-9);
        assert!((cal.compute_ph(2100.25).unwrap() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_midpoint_interpolation() {
        // 中点電圧 1766mV はpH5.5（7.0と4.0の中間）になる
        let cal = PhCalibration::default();
        let ph = cal.compute_ph(1766.0).unwrap();
        assert!((ph - 5.5).abs() < 1e-9);
    }

    #[test]
    fn test_slope_sign_is_negative_for_default() {
        // デフォルト校正では電圧が高いほどpHが低い（負の傾き）
        let cal = PhCalibration::default();
        assert!(cal.slope().unwrap() < 0.0);
    }

    #[test]
    fn test_linearity_monotonic() {
        // 任意の3点で傾きの符号と同方向に単調になる
        let cal = PhCalibration::default();
        let ph1 = cal.compute_ph(1400.0).unwrap();
        let ph2 = cal.compute_ph(1700.0).unwrap();
        let ph3 = cal.compute_ph(2200.0).unwrap();
        assert!(ph1 > ph2);
        assert!(ph2 > ph3);
    }

    #[test]
    fn test_set_neutral_voltage_idempotent() {
        let mut cal1 = PhCalibration::default();
        cal1.set_neutral_voltage(1480.0);

        let mut cal2 = PhCalibration::default();
        cal2.set_neutral_voltage(1480.0);
        cal2.set_neutral_voltage(1480.0);

        assert_eq!(cal1, cal2);
        assert_eq!(
            cal1.compute_ph(1600.0).unwrap(),
            cal2.compute_ph(1600.0).unwrap()
        );
    }

    #[test]
    fn test_calibration_order_independent() {
        let mut cal1 = PhCalibration::default();
        cal1.set_neutral_voltage(1480.0);
        cal1.set_acid_voltage(2050.0);

        let mut cal2 = PhCalibration::default();
        cal2.set_acid_voltage(2050.0);
        cal2.set_neutral_voltage(1480.0);

        assert_eq!(cal1, cal2);
    }

    #[test]
    fn test_degenerate_calibration_detected() {
        let mut cal = PhCalibration::default();
        cal.set_neutral_voltage(1600.0);
        cal.set_acid_voltage(1600.0);

        // 縮退時はすべての入力に対してエラーになる
        for voltage in [0.0, 1000.0, 1600.0, 3000.0] {
            let result = cal.compute_ph(voltage);
            assert_eq!(
                result,
                Err(CalibrationError::DegenerateCalibration(1600.0))
            );
        }
        assert!(cal.slope().is_err());
        assert!(cal.intercept().is_err());
    }

    #[test]
    fn test_degeneracy_is_recoverable() {
        // 縮退は計算ごとに判定され、片方を再校正すれば回復する
        let mut cal = PhCalibration::default();
        cal.set_neutral_voltage(1600.0);
        cal.set_acid_voltage(1600.0);
        assert!(cal.compute_ph(1700.0).is_err());

        cal.set_acid_voltage(2032.0);
        assert!(cal.compute_ph(1700.0).is_ok());
    }

    #[test]
    fn test_intercept_consistency() {
        // pH = slope × v + intercept が基準点で成立する
        let cal = PhCalibration::default();
        let slope = cal.slope().unwrap();
        let intercept = cal.intercept().unwrap();
        assert!((slope * 1500.0 + intercept - 7.0).abs() < 1e-9);
        assert!((slope * 2032.0 + intercept - 4.0).abs() < 1e-9);
    }
}
