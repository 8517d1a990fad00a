use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationMilliSeconds};

use crate::session::SESSION_KEY;
use crate::simulation::pacing::{SimulationPacing, DEFAULT_FOLLOW_UP_PROBABILITY};

const DEFAULT_PACE_PERCENT: u32 = 100;
const DEFAULT_TYPING_DELAY_MS: u64 = 1_500;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppProfile {
    Dev,
    Prod,
}

impl AppProfile {
    pub fn from_env(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("prod") | Some("production") => Self::Prod,
            _ => Self::Dev,
        }
    }
}

#[serde_as]
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub profile: AppProfile,
    pub session_key: String,
    /// 已按 `pace_percent` 缩放后的节奏。
    pub pacing: SimulationPacing,
    pub pace_percent: u32,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub typing_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile: AppProfile::Dev,
            session_key: SESSION_KEY.to_string(),
            pacing: SimulationPacing::default(),
            pace_percent: DEFAULT_PACE_PERCENT,
            typing_delay: Duration::from_millis(DEFAULT_TYPING_DELAY_MS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        crate::config::load_dotenv();

        Self::from_lookup(read_env)
    }

    /// 从任意键值来源构建配置，未设置或无法解析的键保留默认值。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        config.profile = AppProfile::from_env(lookup("RIKOL_PROFILE"));

        if let Some(key) = lookup("RIKOL_SESSION_KEY").filter(|value| !value.trim().is_empty()) {
            config.session_key = key.trim().to_string();
        }

        let probability = lookup("RIKOL_FOLLOW_UP_PROBABILITY")
            .and_then(|value| value.trim().parse::<f64>().ok())
            .unwrap_or(DEFAULT_FOLLOW_UP_PROBABILITY);

        if let Some(percent) =
            lookup("RIKOL_PACE_PERCENT").and_then(|value| value.trim().parse::<u32>().ok())
        {
            config.pace_percent = percent.max(1);
        }

        config.pacing = SimulationPacing::default()
            .with_follow_up_probability(probability)
            .scaled(config.pace_percent);

        if let Some(ms) =
            lookup("RIKOL_TYPING_DELAY_MS").and_then(|value| value.trim().parse::<u64>().ok())
        {
            config.typing_delay = Duration::from_millis(ms);
        }

        config
    }

    pub fn is_prod(&self) -> bool {
        self.profile == AppProfile::Prod
    }
}

fn read_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .or_else(|| option_env_from_build(key).map(|s| s.to_string()))
}

fn option_env_from_build(key: &str) -> Option<&'static str> {
    match key {
        "RIKOL_PROFILE" => option_env!("RIKOL_PROFILE"),
        "RIKOL_SESSION_KEY" => option_env!("RIKOL_SESSION_KEY"),
        "RIKOL_FOLLOW_UP_PROBABILITY" => option_env!("RIKOL_FOLLOW_UP_PROBABILITY"),
        "RIKOL_PACE_PERCENT" => option_env!("RIKOL_PACE_PERCENT"),
        "RIKOL_TYPING_DELAY_MS" => option_env!("RIKOL_TYPING_DELAY_MS"),
        _ => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() {
    if let Err(err) = dotenvy::dotenv() {
        if !matches!(err, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
        {
            tracing::warn!("failed to load .env: {err}");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[inline]
pub fn load_dotenv() {}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_keeps_defaults() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.session_key, "aicrm_login");
    }

    #[test]
    fn pace_percent_scales_pacing() {
        let config = AppConfig::from_lookup(lookup(&[("RIKOL_PACE_PERCENT", "10")]));
        assert_eq!(config.pace_percent, 10);
        assert_eq!(config.pacing.analyze, Duration::from_millis(80));
        assert_eq!(config.pacing.per_character, Duration::from_millis(5));
    }

    #[test]
    fn zero_pace_is_raised_to_one_percent() {
        let config = AppConfig::from_lookup(lookup(&[("RIKOL_PACE_PERCENT", "0")]));
        assert_eq!(config.pace_percent, 1);
    }

    #[test]
    fn probability_and_profile_are_parsed() {
        let config = AppConfig::from_lookup(lookup(&[
            ("RIKOL_FOLLOW_UP_PROBABILITY", "0.25"),
            ("RIKOL_PROFILE", "production"),
            ("RIKOL_TYPING_DELAY_MS", "300"),
        ]));
        assert_eq!(config.pacing.follow_up_probability, 0.25);
        assert!(config.is_prod());
        assert_eq!(config.typing_delay, Duration::from_millis(300));
    }

    #[test]
    fn garbage_values_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[
            ("RIKOL_FOLLOW_UP_PROBABILITY", "often"),
            ("RIKOL_PACE_PERCENT", "-5"),
        ]));
        assert_eq!(
            config.pacing.follow_up_probability,
            DEFAULT_FOLLOW_UP_PROBABILITY
        );
        assert_eq!(config.pace_percent, DEFAULT_PACE_PERCENT);
    }
}
