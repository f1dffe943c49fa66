//! アプリケーションのコンテナ定義を組み立てる
//!
//! 規約値（[`Conventions`]）とアプリ定義だけから決まる純粋な関数群。

use crate::catalog::DOCUMENT_STORE_SERVICE;
use crate::conventions::{Conventions, SSH_AUTH_SOCK_PLACEHOLDER, WORKSPACE_ROOT};
use crate::model::{Application, ContainerDefinition, FrontendApp};
use std::collections::BTreeMap;

/// 変更を監視して再起動するランチャー
const RELOADER_COMMAND: &[&str] = &[
    "/usr/local/bin/reloader",
    "run",
    ".",
    "-r",
    "-e",
    ".pbtext,.yml,.yaml",
    "-w",
    "../pkg",
    "-w",
    "../internal",
    "-w",
    "../protos",
];

const FRONTEND_COMMAND: &[&str] = &["npm", "start"];

/// ホスト側（ホームディレクトリ相対）とコンテナ側のツール・キャッシュディレクトリ
const TOOL_MOUNTS: &[(&str, &str)] = &[
    ("go/bin", "/go/bin"),
    ("go/pkg", "/go/pkg"),
    (".cache/go-build", "/home/container/.cache/go-build"),
    (".config/gcloud", "/home/container/.config/gcloud"),
    (".kube", "/home/container/.kube"),
];

/// カスタムアプリケーションのコンテナ定義
pub fn compose_app(app: &Application, conventions: &Conventions) -> ContainerDefinition {
    let mut environment = agent_environment();
    environment.insert(
        "LOCAL_RAVENDB".to_string(),
        format!("http://{}:8080", DOCUMENT_STORE_SERVICE),
    );
    environment.insert("K_SERVICE".to_string(), app.name.clone());
    // アプリ側の指定が規約値より優先
    environment.extend(app.env.clone());

    let mut def = ContainerDefinition::new(conventions.app_image.clone());
    def.command = to_strings(RELOADER_COMMAND);
    def.environment = environment;
    mount_workspace(&mut def);
    for (host, container) in TOOL_MOUNTS {
        def.add_volume(conventions.home_path(host), container);
    }
    def.user = Some(conventions.user());
    def.working_dir = Some(format!("{}/{}", WORKSPACE_ROOT, app.source_path()));
    def.depends_on = app.depends_on.clone();
    def
}

/// フロントエンドアプリケーションのコンテナ定義
pub fn compose_frontend(app: &FrontendApp, conventions: &Conventions) -> ContainerDefinition {
    let mut def = ContainerDefinition::new(conventions.frontend_image.clone());
    def.command = to_strings(FRONTEND_COMMAND);
    def.environment = agent_environment();
    mount_workspace(&mut def);
    def.user = Some(conventions.user());
    def.working_dir = Some(WORKSPACE_ROOT.to_string());
    def.depends_on = app.depends_on.clone();
    def
}

fn agent_environment() -> BTreeMap<String, String> {
    BTreeMap::from([(
        "SSH_AUTH_SOCK".to_string(),
        SSH_AUTH_SOCK_PLACEHOLDER.to_string(),
    )])
}

/// SSH エージェントの転送とワークスペース全体のマウント
fn mount_workspace(def: &mut ContainerDefinition) {
    def.add_volume(SSH_AUTH_SOCK_PLACEHOLDER, SSH_AUTH_SOCK_PLACEHOLDER)
        .add_volume(".", WORKSPACE_ROOT);
}

fn to_strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}
