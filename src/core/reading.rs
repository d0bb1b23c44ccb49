use chrono::{DateTime, Utc};

/// 1回のポーリングで生成されるpH測定結果（ハードウェア非依存）
///
/// ティックごとに生成され、ホストへ公開された後は保持されない。
#[derive(Debug, Clone, PartialEq)]
pub struct PhReading {
    /// ADC生電圧（mV）
    pub raw_voltage_mv: f64,
    /// 測定時の水温（℃）
    pub water_temperature_celsius: f64,
    /// 温度補正前のpH値
    pub ph_uncompensated: f64,
    /// 温度補正・クランプ適用後の最終pH値
    pub ph_value: f64,
    /// 範囲クランプが発生したか
    pub is_clamped: bool,
    /// 測定時刻
    pub timestamp: DateTime<Utc>,
}

impl PhReading {
    /// 新しい測定結果を作成（測定時刻は現在時刻）
    pub fn new(
        raw_voltage_mv: f64,
        water_temperature_celsius: f64,
        ph_uncompensated: f64,
        ph_value: f64,
        is_clamped: bool,
    ) -> Self {
        Self {
            raw_voltage_mv,
            water_temperature_celsius,
            ph_uncompensated,
            ph_value,
            is_clamped,
            timestamp: Utc::now(),
        }
    }

    /// 測定結果のサマリを取得
    pub fn get_summary(&self) -> String {
        let mut parts = vec![format!("pH:{:.2}", self.ph_value)];

        parts.push(format!("電圧:{:.1}mV", self.raw_voltage_mv));
        parts.push(format!("水温:{:.1}°C", self.water_temperature_celsius));

        if self.is_clamped {
            parts.push("クランプ済み".to_string());
        }

        parts.join(", ")
    }

    /// 測定時刻をログ用に整形
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format("%Y/%m/%d %H:%M:%S%.3f").to_string()
    }
}
