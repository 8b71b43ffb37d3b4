use docserve::config::{Config, DEFAULT_LISTEN_ADDR, DEFAULT_MAX_REQUEST_BYTES};
use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn test_config_defaults() {
    let cfg = Config::from_lookup(lookup_from(&[])).unwrap();

    assert_eq!(cfg.listen_addr, DEFAULT_LISTEN_ADDR);
    assert_eq!(cfg.max_request_bytes, DEFAULT_MAX_REQUEST_BYTES);
    assert!(cfg.document_root.ends_with("www"));
    assert!(cfg.document_root.is_absolute());
}

#[test]
fn test_config_custom_address_from_env() {
    let cfg = Config::from_lookup(lookup_from(&[("LISTEN", "0.0.0.0:3000")])).unwrap();

    assert_eq!(cfg.listen_addr, "0.0.0.0:3000");
}

#[test]
fn test_config_document_root_and_limit_from_env() {
    let cfg = Config::from_lookup(lookup_from(&[
        ("DOC_ROOT", "/srv/site"),
        ("MAX_REQUEST_BYTES", "4096"),
    ]))
    .unwrap();

    assert_eq!(cfg.document_root, PathBuf::from("/srv/site"));
    assert_eq!(cfg.max_request_bytes, 4096);
}

#[test]
fn test_config_rejects_bad_limit() {
    assert!(Config::from_lookup(lookup_from(&[("MAX_REQUEST_BYTES", "lots")])).is_err());
    assert!(Config::from_lookup(lookup_from(&[("MAX_REQUEST_BYTES", "0")])).is_err());
}

#[test]
fn test_config_from_yaml_with_partial_fields() {
    let cfg = Config::from_yaml("listen_addr: \"0.0.0.0:9000\"\n").unwrap();

    assert_eq!(cfg.listen_addr, "0.0.0.0:9000");
    assert_eq!(cfg.max_request_bytes, DEFAULT_MAX_REQUEST_BYTES);
}

#[test]
fn test_config_from_yaml_rejects_unknown_fields() {
    assert!(Config::from_yaml("listen: \"0.0.0.0:9000\"\n").is_err());
}

#[test]
fn test_config_file_then_env_override() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "listen_addr: \"127.0.0.1:7000\"\ndocument_root: /var/www\nmax_request_bytes: 2048"
    )
    .unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let cfg = Config::from_lookup(lookup_from(&[
        ("SERVER_CONFIG", path.as_str()),
        ("LISTEN", "127.0.0.1:7001"),
    ]))
    .unwrap();

    assert_eq!(cfg.listen_addr, "127.0.0.1:7001");
    assert_eq!(cfg.document_root, PathBuf::from("/var/www"));
    assert_eq!(cfg.max_request_bytes, 2048);
}

#[test]
fn test_config_missing_file_is_an_error() {
    let result = Config::from_lookup(lookup_from(&[(
        "SERVER_CONFIG",
        "/definitely/not/here.yaml",
    )]));

    assert!(result.is_err());
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1, cfg2);
}
