use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("設定ディレクトリが見つかりません")]
    ConfigDirNotFound,

    #[error(
        "環境定義ファイルが見つかりません。以下の場所を確認してください:\n\
        - カレントディレクトリ: gendc.local.kdl, gendc.kdl\n\
        - ./.gendc/ ディレクトリ\n\
        または --config（GENDC_CONFIG_PATH 環境変数）で直接指定できます"
    )]
    SpecFileNotFound,

    #[error("設定ファイルが不正です: {path}\n理由: {message}")]
    InvalidSettings { path: PathBuf, message: String },

    #[error("IO エラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
