use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_applies_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/todos")])).unwrap();
    assert_eq!(cfg.database_url, "postgres://localhost/todos");
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
    assert_eq!(cfg.bind_addr(), "0.0.0.0:5000");
}

#[test]
fn from_lookup_requires_database_url() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "8080")])).unwrap_err();
    assert_eq!(err, ConfigError::MissingVar("DATABASE_URL"));
}

#[test]
fn from_lookup_rejects_blank_database_url() {
    let err = ServerConfig::from_lookup(lookup(&[("DATABASE_URL", "  ")])).unwrap_err();
    assert_eq!(err, ConfigError::MissingVar("DATABASE_URL"));
}

#[test]
fn from_lookup_reads_port() {
    let cfg = ServerConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://x"), ("PORT", "8080")])).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.bind_addr(), "0.0.0.0:8080");
}

#[test]
fn from_lookup_treats_empty_port_as_default() {
    let cfg = ServerConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://x"), ("PORT", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn from_lookup_rejects_invalid_port() {
    let err = ServerConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://x"), ("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "http".into() });
    assert_eq!(err.to_string(), "invalid value for PORT: \"http\"");
}

#[test]
fn from_lookup_ignores_bad_max_connections() {
    for raw in ["zero", "0", "-3"] {
        let cfg =
            ServerConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://x"), ("DB_MAX_CONNECTIONS", raw)])).unwrap();
        assert_eq!(cfg.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
    }
}

#[test]
fn from_lookup_reads_max_connections() {
    let cfg =
        ServerConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://x"), ("DB_MAX_CONNECTIONS", "12")])).unwrap();
    assert_eq!(cfg.db_max_connections, 12);
}
