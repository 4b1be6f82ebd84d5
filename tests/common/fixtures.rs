//! Reusable config content for CLI tests.

pub const SITE_INDEX: &str = "<h1>hello</h1>\n";

/// One `local` target copying into `mirror/`
pub const LOCAL_DEPLOY_YAML: &str = r#"title: My Blog
deploy:
  type: local
  dest: mirror
"#;

/// A known target followed by an unregistered one
pub const LOCAL_AND_GHOST_YAML: &str = r#"deploy:
  - type: local
    dest: mirror
  - type: ghost
"#;
