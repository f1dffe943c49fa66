use crate::certs;
use crate::writer::{self, OutputPaths};
use colored::Colorize;
use std::path::Path;
use tracing::info;

pub fn handle(root: &Path, config: Option<&Path>, skip_certs: bool) -> anyhow::Result<()> {
    let generated = super::prepare(config)?;
    let paths = OutputPaths::new(root);

    std::fs::create_dir_all(&paths.generated_dir)?;
    if skip_certs || certs::is_ci() {
        info!("Skipping certificate generation");
    } else {
        certs::ensure_certificates(&paths.generated_dir)?;
    }

    let written = writer::write_outputs(&paths, &generated)?;

    println!("{}", "✓ 設定ファイルを生成しました".green().bold());
    for path in &written {
        println!("  {}", super::display_path(root, path).display().to_string().cyan());
    }
    if generated.routing.is_none() {
        println!(
            "  {}",
            "caddy が要求されていないため Caddyfile は生成していません".dimmed()
        );
    }

    Ok(())
}
