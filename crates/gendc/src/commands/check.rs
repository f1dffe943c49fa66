use crate::writer::{self, OutputPaths};
use colored::Colorize;
use std::path::Path;

pub fn handle(root: &Path, config: Option<&Path>) -> anyhow::Result<()> {
    let generated = super::prepare(config)?;
    let paths = OutputPaths::new(root);

    let drifted = writer::drifted(&paths, &generated)?;
    if drifted.is_empty() {
        println!("{}", "✓ 生成済みファイルは最新です".green().bold());
        return Ok(());
    }

    eprintln!("{}", "✗ 生成済みファイルが古くなっています".red().bold());
    for path in &drifted {
        eprintln!("  - {}", super::display_path(root, path).display());
    }
    eprintln!();
    eprintln!("gendc generate を実行して再生成してください");
    std::process::exit(1);
}
