mod certs;
mod commands;
mod writer;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gendc")]
#[command(about = "gendc.kdl からローカル開発用の docker-compose と Caddyfile を生成", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// 環境定義ファイルのパス（省略時は gendc.local.kdl / gendc.kdl を探索）
    #[arg(short, long, global = true, env = "GENDC_CONFIG_PATH")]
    config: Option<PathBuf>,
    /// デバッグログを出力
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// 設定ファイルを生成（デフォルト）
    Generate {
        /// 証明書の生成をスキップ（CI 環境変数があれば常にスキップ）
        #[arg(long)]
        skip_certs: bool,
    },
    /// 生成済みファイルが最新か確認
    Check,
    /// 利用可能なサービスを表示
    Catalog,
    /// バージョン情報を表示
    Version,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let root = std::env::current_dir()?;
    let config = cli.config.as_deref();

    match cli.command.unwrap_or(Commands::Generate { skip_certs: false }) {
        Commands::Generate { skip_certs } => {
            commands::generate::handle(&root, config, skip_certs)?;
        }
        Commands::Check => {
            commands::check::handle(&root, config)?;
        }
        Commands::Catalog => {
            commands::catalog::handle();
        }
        Commands::Version => {
            println!("gendc {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
