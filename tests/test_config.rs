use std::io::Write;
use std::path::PathBuf;

use statico::config::ServerConfig;

#[test]
fn test_config_defaults() {
    let cfg = ServerConfig::default();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.document_root, PathBuf::from("./StaticFiles"));
    assert_eq!(cfg.log_directory, PathBuf::from("./Logs"));
}

#[test]
fn test_config_missing_file_falls_back_to_defaults() {
    let cfg = ServerConfig::load_from("/definitely/not/a/real/statico.yaml").unwrap();
    assert_eq!(cfg.port, 8080);
}

#[test]
fn test_config_loads_yaml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "port: 3000").unwrap();
    writeln!(file, "document_root: /srv/www").unwrap();
    writeln!(file, "log_directory: /var/log/statico").unwrap();

    let cfg = ServerConfig::load_from(file.path().to_str().unwrap()).unwrap();
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.document_root, PathBuf::from("/srv/www"));
    assert_eq!(cfg.log_directory, PathBuf::from("/var/log/statico"));
}

#[test]
fn test_config_partial_yaml_fills_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "port: 9090").unwrap();

    let cfg = ServerConfig::load_from(file.path().to_str().unwrap()).unwrap();
    assert_eq!(cfg.port, 9090);
    assert_eq!(cfg.document_root, PathBuf::from("./StaticFiles"));
    assert_eq!(cfg.log_directory, PathBuf::from("./Logs"));
}

#[test]
fn test_config_invalid_yaml_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "port: [not a number").unwrap();

    assert!(ServerConfig::load_from(file.path().to_str().unwrap()).is_err());
}

#[test]
fn test_listen_addr_binds_all_interfaces() {
    let cfg = ServerConfig {
        port: 3000,
        ..ServerConfig::default()
    };
    assert_eq!(cfg.listen_addr(), "0.0.0.0:3000");
}

#[test]
fn test_config_clone() {
    let cfg1 = ServerConfig::default();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.port, cfg2.port);
    assert_eq!(cfg1.document_root, cfg2.document_root);
}
