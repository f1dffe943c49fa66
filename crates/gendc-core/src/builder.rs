//! コンテナ定義のポート・ボリューム組み立て
//!
//! 値の検証は行わない。不正な値はそのまま出力され、
//! マニフェストを読み込むオーケストレーター側で初めて検出される。

use crate::model::ContainerDefinition;
use std::fmt::Display;

impl ContainerDefinition {
    /// ホストとコンテナで同じポートを公開
    pub fn expose_port(&mut self, port: impl Display + Copy) -> &mut Self {
        self.map_port(port, port)
    }

    /// ポートを対応付ける
    ///
    /// 出力書式は位置で意味が決まるため、コンテナ側のポートを先に書く（`"container:host"`）。
    pub fn map_port(&mut self, host: impl Display, container: impl Display) -> &mut Self {
        self.ports.push(format!("{}:{}", container, host));
        self
    }

    /// ボリュームを追加（`"host:container"`）
    pub fn add_volume(&mut self, host: impl Display, container: impl Display) -> &mut Self {
        self.volumes.push(format!("{}:{}", host, container));
        self
    }
}
