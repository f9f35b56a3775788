use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::units::{LengthUnit, ResistanceUnit};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto/ru/en)
    pub language: String,
    /// 계산된 두께를 보여줄 단위
    pub thickness_unit: LengthUnit,
    /// 열저항 표시 단위
    pub resistance_unit: ResistanceUnit,
    /// 열저항 출력 소수 자릿수
    pub precision: usize,
    #[serde(skip)]
    path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            thickness_unit: LengthUnit::Millimeter,
            resistance_unit: ResistanceUnit::SquareMeterKPerW,
            precision: 3,
            path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config file I/O: {e}"),
            ConfigError::Serde(e) => write!(f, "config parse: {e}"),
            ConfigError::Serialize(e) => write!(f, "config serialize: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 작업 디렉터리의 config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_default_at(Path::new(DEFAULT_CONFIG_PATH))
}

/// 지정 경로의 설정을 로드한다. 파일이 없으면 기본값을 그 경로에 저장한다.
pub fn load_or_default_at(path: &Path) -> Result<Config, ConfigError> {
    let mut cfg = if path.exists() {
        let content = fs::read_to_string(path)?;
        toml::from_str::<Config>(&content)?
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        cfg
    };
    cfg.path = path.to_path_buf();
    Ok(cfg)
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 로드했던 파일에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self, &self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: Config = toml::from_str("language = \"en\"").expect("parse");
        assert_eq!(cfg.language, "en");
        assert_eq!(cfg.thickness_unit, LengthUnit::Millimeter);
        assert_eq!(cfg.precision, 3);
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = std::env::temp_dir().join(format!("tpb_cfg_{}", std::process::id()));
        fs::create_dir_all(&dir).expect("tmp dir");
        let path = dir.join("config.toml");
        let _ = fs::remove_file(&path);

        let cfg = load_or_default_at(&path).expect("load");
        assert_eq!(cfg, Config { path: path.clone(), ..Config::default() });
        assert!(path.exists());

        let mut changed = cfg.clone();
        changed.precision = 5;
        changed.save().expect("save");
        let reloaded = load_or_default_at(&path).expect("reload");
        assert_eq!(reloaded.precision, 5);
        let _ = fs::remove_dir_all(&dir);
    }
}
