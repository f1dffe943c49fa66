pub mod catalog;
pub mod check;
pub mod generate;

use anyhow::Context;
use gendc_config::Settings;
use gendc_core::{Conventions, GenerateOptions, Generated};
use std::path::{Path, PathBuf};
use tracing::debug;

/// 環境定義を読み込み、両方の出力をメモリ上に生成する
pub fn prepare(config: Option<&Path>) -> anyhow::Result<Generated> {
    let spec_path = match config {
        Some(path) => path.to_path_buf(),
        None => gendc_config::find_spec_file()?,
    };
    debug!(spec = %spec_path.display(), "Using spec file");

    let settings = Settings::load()?;
    let conventions = settings.apply(Conventions::from_env()?);

    let spec = gendc_core::load_spec(&spec_path)
        .with_context(|| format!("{} の読み込みに失敗しました", spec_path.display()))?;

    let options = GenerateOptions {
        format: settings.format,
    };
    Ok(gendc_core::generate(&spec, &conventions, &options)?)
}

/// 表示用の相対パス
pub fn display_path(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}
