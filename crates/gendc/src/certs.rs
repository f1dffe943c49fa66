//! mkcert によるローカル TLS 証明書

use anyhow::Context;
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

/// 証明書がカバーするホスト名
const CERT_HOSTS: &[&str] = &["*.dev.localhost", "*.dev.remote"];

pub const CERT_FILE: &str = "cert.pem";
pub const KEY_FILE: &str = "key.pem";

/// CI 環境で実行されているか
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok_and(|v| !v.is_empty())
}

/// 証明書が無ければ mkcert で生成する
pub fn ensure_certificates(dir: &Path) -> anyhow::Result<()> {
    let cert = dir.join(CERT_FILE);
    let key = dir.join(KEY_FILE);

    if cert.try_exists()? && key.try_exists()? {
        debug!(cert = %cert.display(), "Certificates already present");
        return Ok(());
    }

    info!(dir = %dir.display(), "Generating local certificates with mkcert");
    let output = Command::new("mkcert")
        .arg("-cert-file")
        .arg(&cert)
        .arg("-key-file")
        .arg(&key)
        .args(CERT_HOSTS)
        .output()
        .context("mkcert を実行できません。インストールされているか確認してください")?;

    if !output.status.success() {
        anyhow::bail!(
            "証明書の生成に失敗しました: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(())
}
