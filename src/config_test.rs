use super::*;

use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.bind.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.site_root, DEFAULT_SITE_ROOT);
}

#[test]
fn parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("ROSTER_BIND_ADDR", "127.0.0.1"),
        ("ROSTER_SITE_ROOT", "/srv/roster"),
    ]))
    .unwrap();
    assert_eq!(cfg.bind.to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.site_root, "/srv/roster");
}

#[test]
fn accepts_ipv6_bind_addr() {
    let cfg = ServerConfig::from_lookup(lookup(&[("ROSTER_BIND_ADDR", "::1"), ("PORT", "9000")])).unwrap();
    assert_eq!(cfg.bind.to_string(), "[::1]:9000");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("ROSTER_SITE_ROOT", "")])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
}

#[test]
fn rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert!(matches!(err, ServerConfigError::InvalidPort { ref value, .. } if value == "http"));
    assert!(err.to_string().starts_with("invalid PORT \"http\""));
}

#[test]
fn rejects_out_of_range_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ServerConfigError::InvalidPort { .. }));
}

#[test]
fn rejects_bad_bind_addr() {
    let err = ServerConfig::from_lookup(lookup(&[("ROSTER_BIND_ADDR", "localhost")])).unwrap_err();
    assert!(matches!(err, ServerConfigError::InvalidBindAddr { .. }));
}

#[test]
fn leptos_options_point_at_site_root() {
    let cfg = ServerConfig { site_root: "/srv/roster".into(), ..ServerConfig::default() };
    let options = cfg.leptos_options();
    assert_eq!(options.output_name.as_ref(), OUTPUT_NAME);
    assert_eq!(options.site_root.as_ref(), "/srv/roster");
}

#[test]
fn from_env_reads_process_environment() {
    // SAFETY: the only test in this binary touching these variables.
    unsafe {
        std::env::set_var("PORT", "4321");
        std::env::remove_var("ROSTER_BIND_ADDR");
        std::env::remove_var("ROSTER_SITE_ROOT");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.bind.port(), 4321);
    assert_eq!(cfg.site_root, DEFAULT_SITE_ROOT);

    unsafe { std::env::remove_var("PORT") };
}
