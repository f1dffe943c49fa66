pub mod error;

pub use error::*;

use gendc_core::{Conventions, ManifestFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// 環境定義ファイルの候補（優先順）
const SPEC_CANDIDATES: &[&str] = &["gendc.local.kdl", "gendc.kdl"];

/// 設定ファイル名
const SETTINGS_FILE: &str = "config.yaml";

/// gendcの設定ディレクトリ（~/.config/gendc）
pub fn config_dir() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .ok_or(ConfigError::ConfigDirNotFound)?
        .join("gendc"))
}

/// カレントディレクトリから環境定義ファイルを探す
///
/// 以下の優先順位で検索:
/// 1. カレントディレクトリ: gendc.local.kdl, gendc.kdl
/// 2. ./.gendc/ ディレクトリ内: 同様の順序
///
/// 直接のパス指定（`--config` / GENDC_CONFIG_PATH）は CLI 側で解決する。
pub fn find_spec_file() -> Result<PathBuf> {
    find_spec_file_in(&std::env::current_dir()?)
}

/// 指定ディレクトリから環境定義ファイルを探す
pub fn find_spec_file_in(dir: &Path) -> Result<PathBuf> {
    for base in [dir.to_path_buf(), dir.join(".gendc")] {
        for filename in SPEC_CANDIDATES {
            let path = base.join(filename);
            if path.exists() {
                debug!(path = %path.display(), "Found spec file");
                return Ok(path);
            }
        }
    }

    Err(ConfigError::SpecFileNotFound)
}

/// ユーザー設定（~/.config/gendc/config.yaml）
///
/// ```yaml
/// format: yaml
/// images:
///   app: golang:1.22
///   frontend: node:20
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// マニフェストの出力形式
    pub format: ManifestFormat,
    pub images: ImageSettings,
}

/// 開発用イメージの差し替え
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSettings {
    pub app: Option<String>,
    pub frontend: Option<String>,
}

impl Settings {
    /// 設定ディレクトリから読み込む（ファイルが無ければデフォルト）
    pub fn load() -> Result<Self> {
        match config_dir() {
            Ok(dir) => Self::load_from(&dir.join(SETTINGS_FILE)),
            Err(ConfigError::ConfigDirNotFound) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// 指定パスから読み込む（ファイルが無ければデフォルト）
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "Settings file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content).map_err(|e| ConfigError::InvalidSettings {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// 規約値にイメージ設定を反映
    pub fn apply(&self, conventions: Conventions) -> Conventions {
        conventions.with_images(self.images.app.clone(), self.images.frontend.clone())
    }
}
