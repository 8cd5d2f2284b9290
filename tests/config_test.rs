// Environment-backed configuration; kept in its own test binary since it
// mutates the process environment

use pharmacy::config::{cli, Config, ADMIN_PASSWORD_ENV};

#[test]
fn test_admin_password_from_environment() {
    std::env::set_var(ADMIN_PASSWORD_ENV, "from-env-secret");

    let matches = cli().try_get_matches_from(["pharmacy"]).unwrap();
    let from_env = Config::from_matches(&matches);

    // An explicit flag still wins over the environment
    let matches = cli()
        .try_get_matches_from(["pharmacy", "--admin-password", "from-flag"])
        .unwrap();
    let from_flag = Config::from_matches(&matches);

    std::env::remove_var(ADMIN_PASSWORD_ENV);

    assert_eq!(from_env.admin.password, "from-env-secret");
    assert_eq!(from_flag.admin.password, "from-flag");

    let matches = cli().try_get_matches_from(["pharmacy"]).unwrap();
    assert_eq!(Config::from_matches(&matches).admin.password, "admin123");
}

#[test]
fn test_help_hides_password_value() {
    let help = cli().render_long_help().to_string();

    assert!(help.contains(ADMIN_PASSWORD_ENV));
    // The other test may have the variable set right now
    assert!(!help.contains("from-env-secret"));
}
