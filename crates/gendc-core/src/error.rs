use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("KDLパースエラー: {0}")]
    KdlParse(#[from] kdl::KdlError),

    #[error("IO エラー: {path}\n理由: {message}")]
    IoError { path: PathBuf, message: String },

    #[error("無効な設定: {0}")]
    InvalidConfig(String),

    #[error(
        "不明なサービスです: {0}\nヒント: 利用可能なサービスは `gendc catalog` で確認できます"
    )]
    UnknownService(String),

    #[error("サービス名 '{0}' が重複しています（services / app / js の名前は一意にしてください）")]
    DuplicateServiceName(String),

    #[error("ホームディレクトリが見つかりません")]
    HomeDirNotFound,

    #[error("シリアライズエラー: {0}")]
    Serialize(String),

    #[error("テンプレート展開エラー: {0}")]
    TemplateRenderError(String),
}

pub type Result<T> = std::result::Result<T, GenError>;
