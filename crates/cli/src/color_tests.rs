use super::*;
use serial_test::serial;

#[test]
#[serial]
fn no_color_env_var_disables_colorization() {
    std::env::set_var("NO_COLOR", "1");
    std::env::remove_var("COLOR");
    assert!(!should_colorize());
    std::env::remove_var("NO_COLOR");
}

#[test]
#[serial]
fn color_env_var_forces_colorization() {
    std::env::remove_var("NO_COLOR");
    std::env::set_var("COLOR", "1");
    assert!(should_colorize());
    std::env::remove_var("COLOR");
}

#[test]
#[serial]
fn header_is_plain_when_colorization_is_disabled() {
    std::env::set_var("NO_COLOR", "1");
    assert_eq!(header("title"), "title");
    std::env::remove_var("NO_COLOR");
}

#[test]
#[serial]
fn header_wraps_text_in_ansi_codes_when_colorization_is_forced() {
    std::env::remove_var("NO_COLOR");
    std::env::set_var("COLOR", "1");
    let colored = header("title");
    assert!(colored.starts_with("\x1b[38;5;74m"));
    assert!(colored.ends_with("\x1b[0m"));
    assert!(colored.contains("title"));
    std::env::remove_var("COLOR");
}
