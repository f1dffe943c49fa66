//! 環境定義ファイルのローダー

use crate::error::{GenError, Result};
use crate::model::EnvironmentSpec;
use crate::parser::parse_kdl_string;
use std::path::Path;
use tracing::{info, instrument};

/// 環境定義ファイルを読み込んでパース
#[instrument(skip(path), fields(path = %path.display()))]
pub fn load_spec(path: &Path) -> Result<EnvironmentSpec> {
    let content = std::fs::read_to_string(path).map_err(|e| GenError::IoError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let spec = parse_kdl_string(&content)?;
    info!(
        services = spec.services.len(),
        apps = spec.apps.len(),
        frontends = spec.frontends.len(),
        "Environment spec loaded"
    );

    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_spec() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gendc.kdl");
        std::fs::write(
            &path,
            r#"
services "postgresql"

app "api" {
    depends_on "postgresql"
}

js "web"
"#,
        )
        .unwrap();

        let spec = load_spec(&path).unwrap();
        assert_eq!(spec.services, vec!["postgresql"]);
        assert_eq!(spec.apps[0].depends_on, vec!["postgresql"]);
        assert_eq!(spec.frontends[0].name, "web");
    }

    #[test]
    fn test_load_spec_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.kdl");

        let err = load_spec(&path).unwrap_err();
        match err {
            GenError::IoError { path: p, .. } => assert_eq!(p, path),
            other => panic!("Expected IoError, got {other:?}"),
        }
    }
}
