use super::*;
use serial_test::serial;
use tempfile::TempDir;

fn clear_env() {
    for var in LLM_CREDENTIAL_VARS {
        std::env::remove_var(var);
    }
    std::env::remove_var(GITLAB_TOKEN_VAR);
}

#[test]
#[serial]
fn check_session_environment_fails_with_no_credentials_set() {
    clear_env();
    let err = check_session_environment().unwrap_err();
    assert_eq!(err.code, 1);
    assert!(err.message.contains("CLAUDE_CODE_OAUTH_TOKEN"));
}

#[test]
#[serial]
fn check_session_environment_fails_without_gitlab_token() {
    clear_env();
    std::env::set_var("ANTHROPIC_API_KEY", "sk-test");
    let err = check_session_environment().unwrap_err();
    assert!(err.message.contains("GITLAB_PERSONAL_ACCESS_TOKEN"));
    clear_env();
}

#[test]
#[serial]
fn check_session_environment_passes_with_either_llm_credential() {
    clear_env();
    std::env::set_var("CLAUDE_CODE_OAUTH_TOKEN", "tok");
    std::env::set_var("GITLAB_PERSONAL_ACCESS_TOKEN", "tok");
    assert!(check_session_environment().is_ok());
    clear_env();
}

#[test]
fn check_project_preconditions_fails_on_missing_spec_file() {
    let dir = TempDir::new().unwrap();
    let err = check_project_preconditions(&dir.path().join("nope.txt"), dir.path()).unwrap_err();
    assert!(err.message.contains("spec file not found"));
}

#[test]
fn check_project_preconditions_fails_outside_a_git_repository() {
    let dir = TempDir::new().unwrap();
    let spec = dir.path().join("spec.txt");
    std::fs::write(&spec, "hello").unwrap();
    let err = check_project_preconditions(&spec, dir.path()).unwrap_err();
    assert!(err.message.contains("not a git repository"));
}

#[test]
fn check_project_preconditions_passes_inside_a_git_repository() {
    let dir = TempDir::new().unwrap();
    let spec = dir.path().join("spec.txt");
    std::fs::write(&spec, "hello").unwrap();
    std::process::Command::new("git").arg("init").arg("-q").current_dir(dir.path()).status().unwrap();
    assert!(check_project_preconditions(&spec, dir.path()).is_ok());
}
