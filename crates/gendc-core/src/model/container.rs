//! コンテナ定義とマニフェスト

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// コンテナ定義
///
/// 生成されるマニフェストの1エントリ。フィールドの宣言順がそのまま
/// 出力のキー順になるため、並べ替えないこと。
/// 他エントリへの参照は名前（文字列）のみで、解決はオーケストレーター側が行う。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerDefinition {
    pub image: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub command: Vec<String>,
    /// `"内側:外側"` 形式
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_signal: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub environment: BTreeMap<String, String>,
    /// `"ホスト側:コンテナ側"` 形式
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
}

impl ContainerDefinition {
    /// イメージだけを指定した空の定義を作成
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            ..Default::default()
        }
    }
}

/// マニフェスト（docker-compose.yml の中身）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub services: BTreeMap<String, ContainerDefinition>,
}

impl Manifest {
    /// 定義を追加する
    ///
    /// 同名のエントリがあれば上書きし、以前の定義を返す。
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        definition: ContainerDefinition,
    ) -> Option<ContainerDefinition> {
        self.services.insert(name.into(), definition)
    }
}
