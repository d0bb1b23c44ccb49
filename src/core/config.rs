/// アプリケーション設定
///
/// この構造体はビルド時に`cfg.toml`ファイルから読み込まれた
/// 設定を保持します（ファイルがない場合はデフォルト値を使用）。
#[toml_cfg::toml_config]
pub struct Config {
    #[default(7.0)]
    neutral_reference_ph: f32,

    #[default(4.0)]
    acid_reference_ph: f32,

    #[default(1500.0)] // 一般的なpH7.0バッファの実測値に合わせて調整
    default_neutral_voltage_mv: f32,

    #[default(2032.0)] // 一般的なpH4.0バッファの実測値に合わせて調整
    default_acid_voltage_mv: f32,

    #[default(0.03)] // ネルンスト応答に基づく温度補正係数（pH/℃）
    temp_compensation_slope: f32,

    #[default(25.0)] // 温度補正の基準温度（℃）
    reference_temperature_celsius: f32,

    #[default(1000)] // ポーリング間隔（ミリ秒）。タイマー自体はホストが所有する
    poll_interval_ms: u64,
}

/// 設定エラー
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("基準pH値が同一です: 中性={0}, 酸性={1}")]
    IdenticalReferencePh(f64, f64),
    #[error("デフォルト校正電圧が同一です: {0} mV")]
    IdenticalDefaultVoltage(f64),
    #[error("ポーリング間隔が無効です (1ms以上が必要): {0} ms")]
    InvalidPollInterval(u64),
    #[error("設定値が有限ではありません: {0}")]
    NonFiniteValue(&'static str),
}

/// pH測定モジュールの設定を表す構造体
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 中性校正バッファの基準pH値
    pub neutral_reference_ph: f64,

    /// 酸性校正バッファの基準pH値
    pub acid_reference_ph: f64,

    /// 工場出荷時の中性点電圧（mV）
    pub default_neutral_voltage_mv: f64,

    /// 工場出荷時の酸性点電圧（mV）
    pub default_acid_voltage_mv: f64,

    /// 温度補正係数（pH/℃）
    pub temp_compensation_slope: f64,

    /// 温度補正の基準温度（℃）
    pub reference_temperature_celsius: f64,

    /// ポーリング間隔（ミリ秒）
    pub poll_interval_ms: u64,
}

impl AppConfig {
    /// 設定ファイルから設定をロードします
    pub fn load() -> Result<Self, ConfigError> {
        // toml_cfg によって生成された定数
        let config = CONFIG;

        let app_config = AppConfig {
            neutral_reference_ph: f64::from(config.neutral_reference_ph),
            acid_reference_ph: f64::from(config.acid_reference_ph),
            default_neutral_voltage_mv: f64::from(config.default_neutral_voltage_mv),
            default_acid_voltage_mv: f64::from(config.default_acid_voltage_mv),
            temp_compensation_slope: f64::from(config.temp_compensation_slope),
            reference_temperature_celsius: f64::from(config.reference_temperature_celsius),
            poll_interval_ms: config.poll_interval_ms,
        };

        app_config.validate()?;
        Ok(app_config)
    }

    /// 設定値の妥当性を検証
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("neutral_reference_ph", self.neutral_reference_ph),
            ("acid_reference_ph", self.acid_reference_ph),
            ("default_neutral_voltage_mv", self.default_neutral_voltage_mv),
            ("default_acid_voltage_mv", self.default_acid_voltage_mv),
            ("temp_compensation_slope", self.temp_compensation_slope),
            (
                "reference_temperature_celsius",
                self.reference_temperature_celsius,
            ),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteValue(name));
            }
        }

        // 基準pHが同一だと傾きが0になり校正として意味を成さない
        if self.neutral_reference_ph == self.acid_reference_ph {
            return Err(ConfigError::IdenticalReferencePh(
                self.neutral_reference_ph,
                self.acid_reference_ph,
            ));
        }

        // デフォルト電圧が同一だと初回から縮退状態になる
        if self.default_neutral_voltage_mv == self.default_acid_voltage_mv {
            return Err(ConfigError::IdenticalDefaultVoltage(
                self.default_neutral_voltage_mv,
            ));
        }

        if self.poll_interval_ms == 0 {
            return Err(ConfigError::InvalidPollInterval(self.poll_interval_ms));
        }

        Ok(())
    }
}
