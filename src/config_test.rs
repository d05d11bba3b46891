use super::*;

fn lookup_from(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned())
}

#[test]
fn defaults_when_unset() {
    let config = ServerConfig::from_lookup(lookup_from(&[])).expect("defaults");
    assert_eq!(config.port, 3000);
    assert_eq!(config.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn reads_host_and_port() {
    let config = ServerConfig::from_lookup(lookup_from(&[("HOST", "127.0.0.1"), ("PORT", " 8080 ")]))
        .expect("valid config");
    assert_eq!(config.addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn rejects_non_numeric_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).expect_err("bad port");
    assert!(matches!(err, ConfigError::InvalidPort(raw) if raw == "eighty"));
}

#[test]
fn rejects_out_of_range_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).expect_err("bad port");
    assert!(matches!(err, ConfigError::InvalidPort(_)));
}

#[test]
fn rejects_bad_host() {
    let err = ServerConfig::from_lookup(lookup_from(&[("HOST", "localhost")])).expect_err("bad host");
    assert!(matches!(err, ConfigError::InvalidHost(raw) if raw == "localhost"));
}
