use crate::Config;

#[test]
fn given_default_config_when_validated_then_fails_fast_on_auth() {
    // Defaults carry no signing secret or hash cost; startup must refuse.
    let config = Config::default();

    assert!(config.validate().is_err());
}

#[test]
fn given_minimal_toml_when_parsed_then_validates() {
    let config: Config = toml::from_str(
        r#"
        [auth]
        jwt_secret = "test-secret-key-at-least-32-bytes"
        hash_cost = 3
        "#,
    )
    .unwrap();

    assert!(config.validate().is_ok());
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.auth.token_ttl_secs, 3600);
    assert_eq!(config.auth.hash_cost, Some(3));
}

#[test]
fn given_low_port_when_validated_then_fails() {
    let config: Config = toml::from_str(
        r#"
        [server]
        port = 80

        [auth]
        jwt_secret = "test-secret-key-at-least-32-bytes"
        hash_cost = 3
        "#,
    )
    .unwrap();

    assert!(config.validate().is_err());
}

#[test]
fn given_escaping_database_path_when_validated_then_fails() {
    let config: Config = toml::from_str(
        r#"
        [database]
        path = "../outside.db"

        [auth]
        jwt_secret = "test-secret-key-at-least-32-bytes"
        hash_cost = 3
        "#,
    )
    .unwrap();

    assert!(config.validate().is_err());
}
