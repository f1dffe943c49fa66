//! 環境由来の規約値
//!
//! SSHエージェント・ホームディレクトリ・ユーザーID は全アプリの
//! コンテナ定義に注入される。暗黙に環境変数を読むのではなく、
//! この構造体として明示的にコンポーザーへ渡す。

use crate::error::{GenError, Result};
use std::path::PathBuf;
use tracing::warn;

/// コンテナ起動時に展開される SSH エージェントのプレースホルダー
///
/// 起動時に `SSH_AUTH_SOCK` が未定義ならコンテナの起動が失敗する。
pub const SSH_AUTH_SOCK_PLACEHOLDER: &str = "${SSH_AUTH_SOCK:?Missing SSH_AUTH_SOCK}";

/// コンテナ内のワークスペースルート
pub const WORKSPACE_ROOT: &str = "/workspace";

pub const DEFAULT_APP_IMAGE: &str =
    "europe-west1-docker.pkg.dev/altipla-tools/devcontainers/go:latest";

pub const DEFAULT_FRONTEND_IMAGE: &str =
    "europe-west1-docker.pkg.dev/altipla-tools/devcontainers/node:latest";

/// 規約値
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conventions {
    /// SSH エージェントのソケット（警告の判定にのみ使う）
    pub ssh_auth_sock: Option<String>,
    /// ホストのホームディレクトリ
    pub home: PathBuf,
    /// `USR_ID`（未設定なら空文字）
    pub user_id: String,
    /// `GRP_ID`（未設定なら空文字）
    pub group_id: String,
    /// カスタムアプリのイメージ
    pub app_image: String,
    /// フロントエンドアプリのイメージ
    pub frontend_image: String,
}

impl Conventions {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self {
            ssh_auth_sock: None,
            home: home.into(),
            user_id: String::new(),
            group_id: String::new(),
            app_image: DEFAULT_APP_IMAGE.to_string(),
            frontend_image: DEFAULT_FRONTEND_IMAGE.to_string(),
        }
    }

    /// プロセスの環境変数から規約値を読み込む
    pub fn from_env() -> Result<Self> {
        let home = dirs::home_dir().ok_or(GenError::HomeDirNotFound)?;
        let ssh_auth_sock = std::env::var("SSH_AUTH_SOCK")
            .ok()
            .filter(|sock| !sock.is_empty());

        Ok(Self {
            ssh_auth_sock,
            user_id: std::env::var("USR_ID").unwrap_or_default(),
            group_id: std::env::var("GRP_ID").unwrap_or_default(),
            ..Self::new(home)
        })
    }

    /// イメージを差し替える
    pub fn with_images(mut self, app: Option<String>, frontend: Option<String>) -> Self {
        if let Some(app) = app {
            self.app_image = app;
        }
        if let Some(frontend) = frontend {
            self.frontend_image = frontend;
        }
        self
    }

    /// コンテナの `user`（`"uid:gid"`）
    pub fn user(&self) -> String {
        format!("{}:{}", self.user_id, self.group_id)
    }

    /// ホームディレクトリ配下のパス
    pub fn home_path(&self, relative: &str) -> String {
        format!("{}/{}", self.home.display(), relative)
    }

    /// SSH エージェントが無ければ警告する（生成は続行）
    ///
    /// 警告を出した場合は true を返す。
    pub fn warn_if_agent_missing(&self) -> bool {
        if self.ssh_auth_sock.is_some() {
            return false;
        }

        warn!("SSH_AUTH_SOCK env variable is not defined. SSH agent is not running right now.");
        warn!("You have to configure a SSH agent to run local services.");
        warn!("File will be generated but it won't work until the agent is successfully running.");
        true
    }
}
