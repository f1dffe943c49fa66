//! KDLパーサー
//!
//! gendc.kdl をパースして環境定義を生成します。
//! アプリノードのパース処理はモジュールに分離されています。

mod app;

use app::{parse_app, parse_frontend};

use crate::error::{GenError, Result};
use crate::model::EnvironmentSpec;
use kdl::{KdlDocument, KdlNode, KdlValue};
use tracing::debug;

/// KDL文字列をパース
///
/// パース直後にデフォルト値（ドメイン）を解決する。
pub fn parse_kdl_string(content: &str) -> Result<EnvironmentSpec> {
    let doc: KdlDocument = content.parse()?;
    let mut spec = EnvironmentSpec::default();

    for node in doc.nodes() {
        match node.name().value() {
            "services" => {
                // 複数回書かれた場合は順に追加
                spec.services.extend(string_arguments(node)?);
            }
            "app" => {
                spec.apps.push(parse_app(node)?);
            }
            "js" => {
                spec.frontends.push(parse_frontend(node)?);
            }
            other => {
                debug!(node = %other, "Skipping unknown node");
            }
        }
    }

    spec.resolve_defaults();
    Ok(spec)
}

/// ノードの最初の文字列引数
pub(crate) fn first_string(node: &KdlNode) -> Option<&str> {
    node.entries()
        .iter()
        .find(|e| e.name().is_none())
        .and_then(|e| e.value().as_string())
}

/// ノードの文字列引数をすべて取得（プロパティは除く）
///
/// 名前のリストなので、文字列以外の引数はエラーにする。
pub(crate) fn string_arguments(node: &KdlNode) -> Result<Vec<String>> {
    node.entries()
        .iter()
        .filter(|e| e.name().is_none())
        .map(|e| {
            e.value().as_string().map(|s| s.to_string()).ok_or_else(|| {
                GenError::InvalidConfig(format!(
                    "{} expects string arguments, got {}",
                    node.name().value(),
                    e.value()
                ))
            })
        })
        .collect()
}

/// スカラー値を文字列にする（`8080` → `"8080"`, `#true` → `"true"`）
///
/// `#null` は表現できないので `None`。
pub(crate) fn scalar_to_string(value: &KdlValue) -> Option<String> {
    match value {
        KdlValue::String(s) => Some(s.clone()),
        KdlValue::Integer(i) => Some(i.to_string()),
        KdlValue::Float(f) => Some(f.to_string()),
        KdlValue::Bool(b) => Some(b.to_string()),
        KdlValue::Null => None,
    }
}
