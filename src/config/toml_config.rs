use crate::core::journal::ExportFormat;
use crate::core::ConfigProvider;
use crate::domain::catalog::{self, to_owned_list};
use crate::utils::error::{ReframeError, Result};
use crate::utils::validation::{
    validate_non_empty_list, validate_one_of, validate_path, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

pub const DEFAULT_STORAGE_PATH: &str = "./.reframe";

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern must compile"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    pub logging: Option<LoggingConfig>,
    #[serde(default)]
    pub catalog: CatalogConfig,
    pub journal: Option<JournalConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_storage_path")]
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_emotions")]
    pub emotions: Vec<String>,
    #[serde(default = "default_common_thoughts")]
    pub common_thoughts: Vec<String>,
    #[serde(default = "default_grounding_activities")]
    pub grounding_activities: Vec<String>,
    #[serde(default = "default_check_in_phrases")]
    pub check_in_phrases: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalConfig {
    pub export_format: Option<String>,
}

fn default_storage_path() -> String {
    DEFAULT_STORAGE_PATH.to_string()
}

fn default_emotions() -> Vec<String> {
    to_owned_list(&catalog::EMOTIONS)
}

fn default_common_thoughts() -> Vec<String> {
    to_owned_list(&catalog::COMMON_THOUGHTS)
}

fn default_grounding_activities() -> Vec<String> {
    to_owned_list(&catalog::GROUNDING_ACTIVITIES)
}

fn default_check_in_phrases() -> Vec<String> {
    to_owned_list(&catalog::CHECK_IN_PHRASES)
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            emotions: default_emotions(),
            common_thoughts: default_common_thoughts(),
            grounding_activities: default_grounding_activities(),
            check_in_phrases: default_check_in_phrases(),
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ReframeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 檔案不存在時使用預設配置
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(
                "Config file {} not found, using defaults",
                path.as_ref().display()
            );
            Ok(Self::default())
        }
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ReframeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("storage.path", &self.storage.path)?;

        validate_non_empty_list("catalog.emotions", &self.catalog.emotions)?;
        validate_non_empty_list("catalog.common_thoughts", &self.catalog.common_thoughts)?;
        validate_non_empty_list(
            "catalog.grounding_activities",
            &self.catalog.grounding_activities,
        )?;
        validate_non_empty_list("catalog.check_in_phrases", &self.catalog.check_in_phrases)?;

        if let Some(level) = self.logging.as_ref().and_then(|l| l.level.as_deref()) {
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        if let Some(format) = self.journal.as_ref().and_then(|j| j.export_format.as_deref()) {
            format
                .parse::<ExportFormat>()
                .map_err(|_| ReframeError::InvalidConfigValueError {
                    field: "journal.export_format".to_string(),
                    value: format.to_string(),
                    reason: format!("Supported formats: {}", ExportFormat::SUPPORTED.join(", ")),
                })?;
        }

        Ok(())
    }

    pub fn set_storage_path(&mut self, path: impl Into<String>) {
        self.storage.path = path.into();
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logging(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    pub fn export_format(&self) -> Result<ExportFormat> {
        match self.journal.as_ref().and_then(|j| j.export_format.as_deref()) {
            Some(format) => format.parse(),
            None => Ok(ExportFormat::default()),
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn storage_path(&self) -> &str {
        &self.storage.path
    }

    fn emotions(&self) -> &[String] {
        &self.catalog.emotions
    }

    fn common_thoughts(&self) -> &[String] {
        &self.catalog.common_thoughts
    }

    fn grounding_activities(&self) -> &[String] {
        &self.catalog.grounding_activities
    }

    fn check_in_phrases(&self) -> &[String] {
        &self.catalog.check_in_phrases
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
