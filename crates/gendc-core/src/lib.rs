//! gendc のコンポジションエンジン
//!
//! 環境定義（サービス・アプリ・フロントエンド）から
//! docker-compose のマニフェストと Caddy のルーティング設定を生成します。

pub mod builder;
pub mod catalog;
pub mod composer;
pub mod conventions;
pub mod error;
pub mod generate;
pub mod loader;
pub mod manifest;
pub mod model;
pub mod parser;
pub mod routing;

pub use conventions::Conventions;
pub use error::{GenError, Result};
pub use generate::{GenerateOptions, Generated, generate};
pub use loader::load_spec;
pub use manifest::{BANNER, ManifestFormat, build_manifest, render_manifest};
pub use model::*;
pub use parser::parse_kdl_string;
pub use routing::{Route, render_routing};
