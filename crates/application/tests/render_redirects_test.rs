use split_horizon_application::use_cases::RenderRedirectsUseCase;
use split_horizon_domain::{Config, DomainError};

#[test]
fn test_default_template_sorted_by_wan() {
    let config = Config::from_toml_str(
        r#"
        [interfaces.eth0]
        "203.0.113.2/31" = "10.0.0.2/31"

        [interfaces.eth1]
        "100.64.0.1/32" = "192.168.7.1/32"
        "#,
    )
    .unwrap();

    let lines = RenderRedirectsUseCase::new().execute(&config).unwrap();

    assert_eq!(
        lines,
        vec![
            "rdr on wan0 proto tcp to 100.64.0.1 -> 192.168.7.1",
            "rdr on wan0 proto tcp to 203.0.113.2 -> 10.0.0.2",
            "rdr on wan0 proto tcp to 203.0.113.3 -> 10.0.0.3",
        ]
    );
}

#[test]
fn test_custom_template() {
    let config = Config::from_toml_str(
        r#"
        redirect = "{lan} <- {wan}"

        [interfaces.eth0]
        "203.0.113.9/32" = "10.0.0.9/32"
        "#,
    )
    .unwrap();

    let lines = RenderRedirectsUseCase::new().execute(&config).unwrap();
    assert_eq!(lines, vec!["10.0.0.9 <- 203.0.113.9"]);
}

#[test]
fn test_renders_without_interface_discovery() {
    let config = Config::from_toml_str(
        r#"
        [interfaces.does-not-exist]
        "203.0.113.0/30" = "10.0.0.0/30"
        "#,
    )
    .unwrap();

    let lines = RenderRedirectsUseCase::new().execute(&config).unwrap();
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_invalid_pair_is_config_error() {
    let config = Config::from_toml_str(
        r#"
        [interfaces.eth0]
        "203.0.113.0/30" = "10.0.0.0/28"
        "#,
    )
    .unwrap();

    let result = RenderRedirectsUseCase::new().execute(&config);
    assert!(matches!(result, Err(DomainError::ConfigError(_))));
}
