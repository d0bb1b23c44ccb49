//! pH計算ユーティリティ
//! ハードウェア非依存の純粋関数を提供

/// 温度補正の基準温度（℃）
pub const DEFAULT_REFERENCE_TEMPERATURE_CELSIUS: f64 = 25.0;

/// ネルンスト応答に基づく温度補正係数（pH/℃）
pub const DEFAULT_TEMP_COMPENSATION_SLOPE: f64 = 0.03;

/// pHの物理的な下限
pub const PH_MIN: f64 = 0.0;

/// pHの物理的な上限
pub const PH_MAX: f64 = 14.0;

/// 温度補正済みのpH値を計算
///
/// pH電極の応答は温度に依存するため、基準温度からの差分に
/// 比例する補正を加算する:
/// `pH_compensated = pH + slope × (T - T_ref)`
///
/// # Arguments
/// - `ph_uncompensated`: 補正前のpH値
/// - `temperature_celsius`: 測定時の水温（℃）
/// - `reference_temperature_celsius`: 基準温度（℃、通常25℃）
/// - `compensation_slope`: 温度補正係数（pH/℃、通常0.03）
///
/// # Returns
/// - 温度補正済みのpH値
///
/// # Examples
/// ```
/// use ph_monitor::utils::ph_calc::compensate_ph_temperature;
///
/// // 基準温度では補正なし
/// let ph = compensate_ph_temperature(5.5, 25.0, 25.0, 0.03);
/// assert_eq!(ph, 5.5);
///
/// // 30℃では +0.03 × 5 = +0.15
/// let ph = compensate_ph_temperature(5.5, 30.0, 25.0, 0.03);
/// assert!((ph - 5.65).abs() < 1e-9);
/// ```
pub fn compensate_ph_temperature(
    ph_uncompensated: f64,
    temperature_celsius: f64,
    reference_temperature_celsius: f64,
    compensation_slope: f64,
) -> f64 {
    let temp_diff = temperature_celsius - reference_temperature_celsius;
    ph_uncompensated + compensation_slope * temp_diff
}

/// pH値を物理的に意味のある範囲 [0.0, 14.0] にクランプ
///
/// 範囲外の値は拒否せずクランプし、クランプが発生したことを
/// 呼び出し側で検証できるようフラグで返す。
///
/// # Returns
/// - `(クランプ後のpH値, クランプが発生したか)`
///
/// # Examples
/// ```
/// use ph_monitor::utils::ph_calc::clamp_ph;
///
/// assert_eq!(clamp_ph(7.2), (7.2, false));
/// assert_eq!(clamp_ph(-1.5), (0.0, true));
/// assert_eq!(clamp_ph(15.3), (14.0, true));
/// ```
pub fn clamp_ph(ph: f64) -> (f64, bool) {
    if ph < PH_MIN {
        (PH_MIN, true)
    } else if ph > PH_MAX {
        (PH_MAX, true)
    } else {
        (ph, false)
    }
}
