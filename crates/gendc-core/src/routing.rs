//! リバースプロキシ（Caddy）のルーティング設定
//!
//! テンプレート本体は `templates/Caddyfile.tera` にあり、ロジックは
//! (アプリ, ドメイン) の組を列挙するだけ。

use crate::error::{GenError, Result};
use crate::model::EnvironmentSpec;
use serde::Serialize;
use tera::{Context, Tera};
use tracing::debug;

const TEMPLATE_NAME: &str = "Caddyfile";
const TEMPLATE: &str = include_str!("../templates/Caddyfile.tera");

/// アプリコンテナが待ち受けるポート
pub const APP_PORT: u16 = 8080;

/// ドメインからコンテナへの1ルート
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub app: String,
    pub domain: String,
    pub port: u16,
}

/// 全アプリのルートを宣言順（アプリ→ドメイン）で列挙
pub fn routes(spec: &EnvironmentSpec) -> Vec<Route> {
    spec.apps
        .iter()
        .flat_map(|app| {
            app.domains.iter().map(|domain| Route {
                app: app.name.clone(),
                domain: domain.clone(),
                port: APP_PORT,
            })
        })
        .collect()
}

/// ルーティング設定を生成
///
/// リバースプロキシが要求されていなければ `None`。
pub fn render_routing(spec: &EnvironmentSpec) -> Result<Option<String>> {
    if !spec.requests_proxy() {
        debug!("Proxy service not requested, skipping routing config");
        return Ok(None);
    }

    let routes = routes(spec);
    debug!(routes = routes.len(), "Rendering routing config");

    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)
        .map_err(|e| GenError::TemplateRenderError(e.to_string()))?;

    let mut context = Context::new();
    context.insert("routes", &routes);

    tera.render(TEMPLATE_NAME, &context)
        .map(Some)
        .map_err(|e| GenError::TemplateRenderError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Application;

    fn spec_with(services: &[&str]) -> EnvironmentSpec {
        let mut spec = EnvironmentSpec {
            services: services.iter().map(|s| s.to_string()).collect(),
            apps: vec![
                Application {
                    domains: vec!["admin".to_string(), "backoffice".to_string()],
                    ..Application::new("api")
                },
                Application::new("auth"),
            ],
            ..Default::default()
        };
        spec.resolve_defaults();
        spec
    }

    #[test]
    fn test_routes_order() {
        let routes = routes(&spec_with(&["caddy"]));

        let pairs: Vec<_> = routes
            .iter()
            .map(|r| (r.app.as_str(), r.domain.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![("api", "admin"), ("api", "backoffice"), ("auth", "auth")]
        );
    }

    #[test]
    fn test_render_routing_skipped_without_proxy() {
        let out = render_routing(&spec_with(&["postgresql"])).unwrap();
        assert!(out.is_none());
    }

    #[test]
    fn test_render_routing_blocks() {
        let out = render_routing(&spec_with(&["caddy"])).unwrap().unwrap();

        assert!(out.starts_with("# AUTOGENERATED. DO NOT MODIFY.\n"));
        assert!(out.contains(
            "admin.dev.localhost, admin.dev.remote {\n\ttls /opt/tls/cert.pem /opt/tls/key.pem\n\treverse_proxy api:8080\n}\n"
        ));
        assert!(out.contains("auth.dev.localhost, auth.dev.remote {"));
        assert!(out.contains("reverse_proxy auth:8080"));

        let admin = out.find("admin.dev.localhost").unwrap();
        let backoffice = out.find("backoffice.dev.localhost").unwrap();
        let auth = out.find("auth.dev.localhost").unwrap();
        assert!(admin < backoffice && backoffice < auth);
    }

    #[test]
    fn test_render_routing_without_apps() {
        let spec = EnvironmentSpec {
            services: vec!["caddy".to_string()],
            ..Default::default()
        };

        let out = render_routing(&spec).unwrap().unwrap();
        assert!(!out.contains("reverse_proxy"));
    }
}
