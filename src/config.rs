//! 実行設定
//!
//! 既定値 ← 設定ファイル（~/.config/request-combiner/config.json）← コマンドライン引数 の順に上書きする。

use crate::error::{CombineError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 既定の郵便番号
pub const DEFAULT_ZIPCODE: &str = "92024";
/// 1ファイルあたりの最大出力件数（テスト用の小さい値。本番では 99999 など）
pub const DEFAULT_MAX_REQUESTS_PER_SHEET: usize = 5;
pub const DEFAULT_INPUT_FOLDER: &str = "tests/data";
pub const DEFAULT_LABEL_COLUMN: &str = "Total";
pub const DEFAULT_ID_COLUMN: &str = "ProdID";
pub const DEFAULT_OUTPUT_FILE: &str = "combined_data_just5per.csv";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 入力CSVを置くフォルダ（直下のみ走査）
    pub input_folder: PathBuf,
    /// 1列目（表示用）の列名
    pub label_column: String,
    /// 2列目（商品ID）の列名
    pub id_column: String,
    /// 全出力行の customer_zipcode
    pub zipcode: String,
    /// 1ファイルあたりの最大出力件数
    pub max_requests_per_sheet: usize,
    /// 出力CSVのパス
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_folder: PathBuf::from(DEFAULT_INPUT_FOLDER),
            label_column: DEFAULT_LABEL_COLUMN.into(),
            id_column: DEFAULT_ID_COLUMN.into(),
            zipcode: DEFAULT_ZIPCODE.into(),
            max_requests_per_sheet: DEFAULT_MAX_REQUESTS_PER_SHEET,
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl Config {
    /// 設定ファイルがあれば読み込み、なければ既定値
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Ok(path) => Self::load_from(&path),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CombineError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("request-combiner").join("config.json"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.label_column.is_empty() || self.id_column.is_empty() {
            return Err(CombineError::Config("column names must not be empty".into()));
        }
        if self.max_requests_per_sheet == 0 {
            return Err(CombineError::Config(
                "max_requests_per_sheet must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
