//! 生成パイプライン
//!
//! 環境定義と規約値から、マニフェストとルーティング設定の両方を
//! メモリ上に生成する。ファイルへの書き込みは呼び出し側の責務で、
//! どちらかの生成に失敗した場合は何も返さない。

use crate::conventions::Conventions;
use crate::error::Result;
use crate::manifest::{ManifestFormat, build_manifest, render_manifest};
use crate::model::EnvironmentSpec;
use crate::routing::render_routing;
use tracing::{info, instrument};

/// 生成オプション
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    pub format: ManifestFormat,
}

/// 生成結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// マニフェストの内容
    pub manifest: String,
    /// ルーティング設定（プロキシ未要求なら None）
    pub routing: Option<String>,
}

/// マニフェストとルーティング設定を生成
///
/// デフォルト値（ドメイン）は複製に対して解決するので、
/// コードで組み立てた環境定義もそのまま渡せる。
#[instrument(skip_all)]
pub fn generate(
    spec: &EnvironmentSpec,
    conventions: &Conventions,
    options: &GenerateOptions,
) -> Result<Generated> {
    let mut spec = spec.clone();
    spec.resolve_defaults();
    spec.validate()?;

    let manifest = build_manifest(&spec, conventions)?;
    conventions.warn_if_agent_missing();

    let rendered = render_manifest(&manifest, options.format)?;
    let routing = render_routing(&spec)?;

    info!(
        services = manifest.services.len(),
        routing = routing.is_some(),
        "Generation complete"
    );

    Ok(Generated {
        manifest: rendered,
        routing,
    })
}
