use scroblcli::config::{Config, ConfigError, parse_sections};
use tempfile::tempdir;

const SAMPLE: &str = "\
# scroblcli configuration
[core]
user = alice

[api]
key = 0123456789abcdef
secret = fedcba9876543210
";

#[test]
fn test_parse_sections() {
    let sections = parse_sections(SAMPLE).unwrap();

    assert_eq!(sections["core"]["user"], "alice");
    assert_eq!(sections["api"]["key"], "0123456789abcdef");
    assert_eq!(sections["api"]["secret"], "fedcba9876543210");
}

#[test]
fn test_parse_sections_skips_comments_and_blanks() {
    let content = "; semicolon comment\n\n# hash comment\n[core]\n  user =  bob  \n";
    let sections = parse_sections(content).unwrap();

    // Values and keys are trimmed
    assert_eq!(sections["core"]["user"], "bob");
}

#[test]
fn test_parse_sections_rejects_garbage() {
    let result = parse_sections("[core]\nthis is not a pair\n");
    assert!(matches!(result, Err(ConfigError::Malformed { line: 2, .. })));
}

#[tokio::test]
async fn test_load_from_directory() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("config"), SAMPLE).unwrap();

    let cfg = Config::load(Some(dir.path().to_path_buf())).await.unwrap();
    assert_eq!(cfg.user, "alice");
    assert_eq!(cfg.api_key, "0123456789abcdef");
    assert_eq!(cfg.api_secret, "fedcba9876543210");
}

#[tokio::test]
async fn test_load_reports_missing_key() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("config"), "[core]\nuser = alice\n").unwrap();

    let result = Config::load(Some(dir.path().to_path_buf())).await;
    assert!(matches!(
        result,
        Err(ConfigError::MissingKey {
            section: "api",
            key: "key"
        })
    ));
}

#[tokio::test]
async fn test_load_with_missing_file() {
    let dir = tempdir().unwrap();

    // No config file and no environment values: the first lookup fails
    let result = Config::load(Some(dir.path().to_path_buf())).await;
    assert!(matches!(result, Err(ConfigError::MissingKey { .. })));
}

#[tokio::test]
async fn test_load_rejects_empty_values() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("config"),
        "[core]\nuser =\n[api]\nkey = k\nsecret = s\n",
    )
    .unwrap();

    let result = Config::load(Some(dir.path().to_path_buf())).await;
    assert!(matches!(
        result,
        Err(ConfigError::MissingKey {
            section: "core",
            key: "user"
        })
    ));
}
