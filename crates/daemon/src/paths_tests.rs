use super::*;
use serial_test::serial;

#[test]
#[serial]
fn data_dir_defaults_to_dot_data_outside_docker() {
    std::env::remove_var("HARNESS_DOCKER");
    if !std::path::Path::new("/app/.data").is_dir() {
        assert_eq!(data_dir(), PathBuf::from(".data"));
    }
}

#[test]
#[serial]
fn harness_docker_env_var_selects_app_data() {
    std::env::set_var("HARNESS_DOCKER", "1");
    assert_eq!(data_dir(), PathBuf::from("/app/.data"));
    std::env::remove_var("HARNESS_DOCKER");
}

#[test]
fn daemon_state_path_is_under_data_dir() {
    assert_eq!(daemon_state_path(), data_dir().join("daemon_state.json"));
}
