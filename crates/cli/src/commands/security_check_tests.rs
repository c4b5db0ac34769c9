use super::*;

#[tokio::test]
async fn allow_prints_allow_and_exits_cleanly() {
    let args = SecurityCheckArgs { command: vec!["ls".to_string(), "-la".to_string()] };
    assert!(security_check(args).await.is_ok());
}

#[tokio::test]
async fn deny_surfaces_a_denial_exit_error() {
    let args = SecurityCheckArgs { command: vec!["rm".to_string(), "-rf".to_string(), "/".to_string()] };
    let err = security_check(args).await.unwrap_err();
    let exit_err = err.downcast_ref::<ExitError>().expect("expected an ExitError");
    assert_eq!(exit_err.code, DENIED);
}
