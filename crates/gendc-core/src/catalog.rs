//! インフラサービスのカタログ
//!
//! 既知のサービス名から完全なコンテナ定義を組み立てます。
//! 認証情報はローカル開発専用の固定値で、秘密情報ではありません。
//! サービスを追加する場合は `CATALOG` にエントリを1つ足すだけで済みます。

use crate::error::{GenError, Result};
use crate::model::ContainerDefinition;
use std::collections::BTreeMap;
use tracing::debug;

/// リバースプロキシのサービス名（ルーティング設定の生成有無を決める）
pub const PROXY_SERVICE: &str = "caddy";

/// ドキュメントストアのサービス名
pub const DOCUMENT_STORE_SERVICE: &str = "ravendb";

/// 生成物（Caddyfile・証明書）を置くディレクトリ（プロジェクトルートからの相対パス）
pub const GENERATED_DIR: &str = "tmp/gendc";

/// ルーティング設定のファイル名
pub const ROUTING_FILE: &str = "Caddyfile";

type Builder = fn() -> ContainerDefinition;

const CATALOG: &[(&str, Builder)] = &[
    (DOCUMENT_STORE_SERVICE, ravendb),
    (PROXY_SERVICE, caddy),
    ("postgresql", postgresql),
    ("sqlserver", sqlserver),
    ("mysql", mysql),
];

/// サービス名をコンテナ定義に展開
pub fn expand(name: &str) -> Result<ContainerDefinition> {
    let (_, build) = CATALOG
        .iter()
        .find(|(entry, _)| *entry == name)
        .ok_or_else(|| GenError::UnknownService(name.to_string()))?;

    debug!(service = %name, "Expanding catalog service");
    Ok(build())
}

/// カタログのサービス名一覧（登録順）
pub fn names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|(name, _)| *name)
}

fn env(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn ravendb() -> ContainerDefinition {
    let mut def = ContainerDefinition::new("ravendb/ravendb:4.2.104-ubuntu.18.04-x64");
    def.stop_signal = Some("SIGKILL".to_string());
    def.environment = env(&[
        ("RAVEN_Setup_Mode", "None"),
        ("RAVEN_License_Eula_Accepted", "true"),
        ("RAVEN_Security_UnsecuredAccessAllowed", "PrivateNetwork"),
    ]);
    def.map_port(8080, 13000);
    def
}

fn caddy() -> ContainerDefinition {
    let mut def = ContainerDefinition::new("caddy:2");
    def.expose_port(443).expose_port(80);
    def.add_volume(
        format!("./{}/{}", GENERATED_DIR, ROUTING_FILE),
        "/etc/caddy/Caddyfile",
    )
    .add_volume(format!("./{}", GENERATED_DIR), "/opt/tls");
    def
}

fn postgresql() -> ContainerDefinition {
    let mut def = ContainerDefinition::new("postgres:14");
    def.expose_port(5432);
    def.environment = env(&[
        ("POSTGRES_USER", "local"),
        ("POSTGRES_PASSWORD", "development"),
        ("POSTGRES_DB", "local"),
    ]);
    def
}

fn sqlserver() -> ContainerDefinition {
    let mut def = ContainerDefinition::new("mcr.microsoft.com/mssql/server:2019-latest");
    def.expose_port(1433);
    def.environment = env(&[("ACCEPT_EULA", "Y"), ("SA_PASSWORD", "DevPassword7!")]);
    def
}

fn mysql() -> ContainerDefinition {
    let mut def = ContainerDefinition::new("mysql:8.0");
    def.expose_port(3306);
    def.environment = env(&[
        ("MYSQL_ROOT_PASSWORD", "rootmysql"),
        ("MYSQL_USER", "local"),
        ("MYSQL_PASSWORD", "development"),
        ("MYSQL_DATABASE", "local"),
    ]);
    def
}
