//! app / js ノードのパース

use super::{first_string, scalar_to_string, string_arguments};
use crate::error::{GenError, Result};
use crate::model::{Application, FrontendApp};
use kdl::KdlNode;
use tracing::debug;

/// app ノードをパース
pub fn parse_app(node: &KdlNode) -> Result<Application> {
    let name = first_string(node)
        .ok_or_else(|| GenError::InvalidConfig("app requires a name".to_string()))?;

    let mut app = Application::new(name);

    if let Some(children) = node.children() {
        for child in children.nodes() {
            match child.name().value() {
                "source" => {
                    app.source = first_string(child).map(|s| s.to_string());
                }
                "depends_on" => {
                    app.depends_on.extend(string_arguments(child)?);
                }
                "domains" => {
                    app.domains.extend(string_arguments(child)?);
                }
                // env と environment 両方をサポート
                "env" | "environment" => {
                    if let Some(envs) = child.children() {
                        for env_node in envs.nodes() {
                            let key = env_node.name().value().to_string();
                            let value = env_value(&app.name, &key, env_node)?;
                            app.env.insert(key, value);
                        }
                    }
                }
                other => {
                    debug!(app = %app.name, node = %other, "Skipping unknown app node");
                }
            }
        }
    }

    Ok(app)
}

/// js ノードをパース
pub fn parse_frontend(node: &KdlNode) -> Result<FrontendApp> {
    let name = first_string(node)
        .ok_or_else(|| GenError::InvalidConfig("js requires a name".to_string()))?;

    let mut depends_on = Vec::new();
    if let Some(children) = node.children() {
        for child in children.nodes() {
            if child.name().value() == "depends_on" {
                depends_on.extend(string_arguments(child)?);
            }
        }
    }

    Ok(FrontendApp {
        name: name.to_string(),
        depends_on,
    })
}

/// 環境変数の値（引数なしは空文字）
fn env_value(app: &str, key: &str, node: &KdlNode) -> Result<String> {
    match node.entries().iter().find(|e| e.name().is_none()) {
        None => Ok(String::new()),
        Some(entry) => scalar_to_string(entry.value()).ok_or_else(|| {
            GenError::InvalidConfig(format!("app {app}: env {key} cannot be null"))
        }),
    }
}
