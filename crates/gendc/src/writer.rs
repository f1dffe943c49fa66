//! 生成物の書き込み
//!
//! マニフェストとルーティング設定はどちらも一時ファイルに書き終えてから
//! 置き換える。置き換えの途中で失敗した場合は、置き換え済みのファイルを
//! 元の内容に戻す（両方書くか、どちらも書かないか）。

use anyhow::Context;
use gendc_core::Generated;
use gendc_core::catalog::{GENERATED_DIR, ROUTING_FILE};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// マニフェストのファイル名
pub const MANIFEST_FILE: &str = "docker-compose.yml";

/// 出力先のパス
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub manifest: PathBuf,
    pub generated_dir: PathBuf,
    pub routing: PathBuf,
}

impl OutputPaths {
    pub fn new(root: &Path) -> Self {
        let generated_dir = root.join(GENERATED_DIR);
        Self {
            manifest: root.join(MANIFEST_FILE),
            routing: generated_dir.join(ROUTING_FILE),
            generated_dir,
        }
    }

    /// 生成結果とファイルの組
    fn targets<'a>(&'a self, generated: &'a Generated) -> Vec<(&'a Path, &'a str)> {
        let mut targets = vec![(self.manifest.as_path(), generated.manifest.as_str())];
        if let Some(routing) = &generated.routing {
            targets.push((self.routing.as_path(), routing.as_str()));
        }
        targets
    }
}

/// 両方の出力を書き込み、書き込んだパスを返す
pub fn write_outputs(paths: &OutputPaths, generated: &Generated) -> anyhow::Result<Vec<PathBuf>> {
    fs::create_dir_all(&paths.generated_dir).with_context(|| {
        format!(
            "ディレクトリの作成に失敗しました: {}",
            paths.generated_dir.display()
        )
    })?;

    // すべて書き終えるまで既存ファイルには触れない
    let mut staged = Vec::new();
    for (path, content) in paths.targets(generated) {
        let previous = snapshot(path)?;
        staged.push((path, stage(path, content)?, previous));
    }

    let mut replaced: Vec<(&Path, Option<Vec<u8>>)> = Vec::with_capacity(staged.len());
    for (path, file, previous) in staged {
        if let Err(e) = file.persist(path) {
            rollback(&replaced);
            return Err(e)
                .with_context(|| format!("ファイルの書き込みに失敗しました: {}", path.display()));
        }
        info!(file = %path.display(), "Wrote generated file");
        replaced.push((path, previous));
    }

    Ok(replaced
        .into_iter()
        .map(|(path, _)| path.to_path_buf())
        .collect())
}

/// 内容が生成結果と異なる（または存在しない）ファイルを返す
pub fn drifted(paths: &OutputPaths, generated: &Generated) -> anyhow::Result<Vec<PathBuf>> {
    let mut drifted = Vec::new();

    for (path, content) in paths.targets(generated) {
        let current = match fs::read_to_string(path) {
            Ok(current) => Some(current),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                return Err(e).with_context(|| format!("{} を読み込めません", path.display()));
            }
        };

        if current.as_deref() != Some(content) {
            debug!(file = %path.display(), "File drifted from generated content");
            drifted.push(path.to_path_buf());
        }
    }

    Ok(drifted)
}

/// 置き換え前の内容（存在しなければ None）
fn snapshot(path: &Path) -> anyhow::Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("既存ファイルを読み込めません: {}", path.display())),
    }
}

/// 置き換え済みのファイルを新しい順に元へ戻す
fn rollback(replaced: &[(&Path, Option<Vec<u8>>)]) {
    for (path, previous) in replaced.iter().rev() {
        let result = match previous {
            Some(bytes) => fs::write(path, bytes),
            None => fs::remove_file(path),
        };
        match result {
            Ok(()) => debug!(file = %path.display(), "Restored previous content"),
            Err(e) => warn!(file = %path.display(), error = %e, "Failed to restore previous content"),
        }
    }
}

fn stage(path: &Path, content: &str) -> anyhow::Result<NamedTempFile> {
    let dir = path
        .parent()
        .with_context(|| format!("親ディレクトリがありません: {}", path.display()))?;

    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("一時ファイルを作成できません: {}", dir.display()))?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(file)
}
