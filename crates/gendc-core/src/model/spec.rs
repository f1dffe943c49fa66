//! 環境定義（gendc.kdl の内容）

use crate::catalog::PROXY_SERVICE;
use crate::error::{GenError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// 環境定義
///
/// KDL形式：
/// ```kdl
/// services "postgresql" "caddy"
///
/// app "api" {
///     source "services/api"
///     depends_on "postgresql"
///     domains "api" "admin"
///     env {
///         KEY "value"
///     }
/// }
///
/// js "web" {
///     depends_on "api"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentSpec {
    /// 要求されたカタログサービス名（宣言順を保持）
    #[serde(default)]
    pub services: Vec<String>,
    /// カスタムアプリケーション
    #[serde(default)]
    pub apps: Vec<Application>,
    /// フロントエンド（JS）アプリケーション
    #[serde(default)]
    pub frontends: Vec<FrontendApp>,
}

/// カスタムアプリケーション定義
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub name: String,
    #[serde(default)]
    pub depends_on: Vec<String>,
    /// 規約の環境変数を上書きする値
    #[serde(default)]
    pub env: BTreeMap<String, String>,
    /// ワークスペース内のソースパス（未指定なら name）
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub domains: Vec<String>,
}

impl Application {
    /// 名前だけを指定したアプリケーションを作成
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// ソースパスを解決する
    pub fn source_path(&self) -> &str {
        self.source.as_deref().unwrap_or(&self.name)
    }
}

/// フロントエンドアプリケーション定義
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontendApp {
    pub name: String,
    #[serde(default)]
    pub depends_on: Vec<String>,
}

impl EnvironmentSpec {
    /// ロード直後のデフォルト解決
    ///
    /// ドメインが空のアプリには自身の名前をドメインとして設定する。
    pub fn resolve_defaults(&mut self) {
        for app in &mut self.apps {
            if app.domains.is_empty() {
                app.domains = vec![app.name.clone()];
            }
        }
    }

    /// 指定されたカタログサービスが要求されているか
    pub fn requests(&self, service: &str) -> bool {
        self.services.iter().any(|s| s == service)
    }

    /// リバースプロキシが要求されているか
    pub fn requests_proxy(&self) -> bool {
        self.requests(PROXY_SERVICE)
    }

    /// 重複を除いた要求サービス名（最初の出現順）
    pub fn unique_services(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.services
            .iter()
            .map(String::as_str)
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// マニフェストのキー空間で名前が衝突していないか検証
    ///
    /// services の同名の繰り返しは同じエントリなので許容する。
    pub fn validate(&self) -> Result<()> {
        let mut names: HashSet<&str> = self.unique_services().into_iter().collect();

        let entries = self
            .apps
            .iter()
            .map(|a| a.name.as_str())
            .chain(self.frontends.iter().map(|f| f.name.as_str()));

        for name in entries {
            if !names.insert(name) {
                return Err(GenError::DuplicateServiceName(name.to_string()));
            }
        }

        Ok(())
    }
}
