//! マニフェスト（docker-compose.yml）の組み立てと出力

use crate::catalog;
use crate::composer::{compose_app, compose_frontend};
use crate::conventions::Conventions;
use crate::error::{GenError, Result};
use crate::model::{EnvironmentSpec, Manifest};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 生成ファイルであることを示すヘッダー
pub const BANNER: &str = "# AUTOGENERATED. DO NOT MODIFY.\n\
                          # Run `gendc` to regenerate from `gendc.kdl`.\n";

/// 出力形式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManifestFormat {
    /// インデント付きJSON（YAMLとしても有効）
    #[default]
    Json,
    Yaml,
}

/// 環境定義からマニフェストを組み立てる
///
/// カタログ → アプリ → フロントエンドの順に挿入する。
/// 未知のカタログサービスがあれば何も返さずに失敗する。
pub fn build_manifest(spec: &EnvironmentSpec, conventions: &Conventions) -> Result<Manifest> {
    let mut manifest = Manifest::default();

    for name in spec.unique_services() {
        manifest.insert(name, catalog::expand(name)?);
    }

    for app in &spec.apps {
        debug!(app = %app.name, "Composing application");
        manifest.insert(app.name.clone(), compose_app(app, conventions));
    }

    for js in &spec.frontends {
        debug!(app = %js.name, "Composing frontend application");
        manifest.insert(js.name.clone(), compose_frontend(js, conventions));
    }

    Ok(manifest)
}

/// マニフェストをヘッダー付きの文字列にする
pub fn render_manifest(manifest: &Manifest, format: ManifestFormat) -> Result<String> {
    let body = match format {
        ManifestFormat::Json => serde_json::to_string_pretty(manifest)
            .map_err(|e| GenError::Serialize(e.to_string()))?,
        ManifestFormat::Yaml => {
            serde_yaml::to_string(manifest).map_err(|e| GenError::Serialize(e.to_string()))?
        }
    };

    let mut out = String::with_capacity(BANNER.len() + body.len() + 2);
    out.push_str(BANNER);
    out.push('\n');
    out.push_str(&body);
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}
