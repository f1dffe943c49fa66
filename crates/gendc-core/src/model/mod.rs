//! モデル定義
//!
//! gendcで使用されるデータモデルを定義します。
//! 入力（環境定義）と出力（コンテナ定義・マニフェスト）をモジュールに分離しています。

mod container;
mod spec;

// Re-exports
pub use container::*;
pub use spec::*;
