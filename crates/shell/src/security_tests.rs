use super::*;
use std::path::PathBuf;

fn cwd() -> PathBuf {
    std::env::current_dir().unwrap()
}

#[test]
fn allows_plain_allowlisted_command() {
    assert_eq!(check_command("ls -la", &cwd()), SecurityVerdict::Allow);
}

#[test]
fn allows_chain_of_allowlisted_commands() {
    assert_eq!(
        check_command("git status && npm test || echo done", &cwd()),
        SecurityVerdict::Allow
    );
}

#[test]
fn allows_pipeline_where_every_stage_is_allowlisted() {
    assert_eq!(check_command("cat file.txt | grep foo | wc -l", &cwd()), SecurityVerdict::Allow);
}

#[test]
fn denies_command_not_in_allowlist() {
    assert!(matches!(check_command("rm -rf /", &cwd()), SecurityVerdict::Deny(_)));
}

#[test]
fn denies_command_substitution() {
    assert!(matches!(check_command("echo $(whoami)", &cwd()), SecurityVerdict::Deny(_)));
}

#[test]
fn denies_backtick_substitution() {
    assert!(matches!(check_command("echo `whoami`", &cwd()), SecurityVerdict::Deny(_)));
}

#[test]
fn denies_process_substitution() {
    assert!(matches!(check_command("diff <(ls) <(ls -a)", &cwd()), SecurityVerdict::Deny(_)));
}

#[test]
fn denies_oversized_command() {
    let huge = "echo ".to_string() + &"a".repeat(10_001);
    assert!(matches!(check_command(&huge, &cwd()), SecurityVerdict::Deny(_)));
}

#[test]
fn denies_nul_byte() {
    let cmd = format!("echo{}", '\0');
    assert!(matches!(check_command(&cmd, &cwd()), SecurityVerdict::Deny(_)));
}

#[test]
fn denies_unparseable_command() {
    assert!(matches!(check_command("echo \"unterminated", &cwd()), SecurityVerdict::Deny(_)));
}

#[test]
fn variable_assignment_prefix_is_skipped_not_checked() {
    assert_eq!(check_command("FOO=bar echo hi", &cwd()), SecurityVerdict::Allow);
}

#[test]
fn denies_command_name_that_is_a_variable_reference() {
    assert!(matches!(check_command("$CMD arg", &cwd()), SecurityVerdict::Deny(_)));
}

#[test]
fn pkill_allows_known_process_target() {
    assert_eq!(check_command("pkill -f node", &cwd()), SecurityVerdict::Allow);
}

#[test]
fn pkill_allows_quoted_multiword_target_by_first_word() {
    assert_eq!(check_command("pkill -f \"node server.js\"", &cwd()), SecurityVerdict::Allow);
}

#[test]
fn pkill_denies_unlisted_target() {
    assert!(matches!(check_command("pkill -f sshd", &cwd()), SecurityVerdict::Deny(_)));
}

#[test]
fn chmod_allows_exec_bit_grant_on_a_file() {
    assert_eq!(check_command("chmod u+x init.sh", &cwd()), SecurityVerdict::Allow);
}

#[test]
fn chmod_denies_flags() {
    assert!(matches!(check_command("chmod -R u+x dir", &cwd()), SecurityVerdict::Deny(_)));
}

#[test]
fn chmod_denies_non_exec_mode() {
    assert!(matches!(check_command("chmod 777 file", &cwd()), SecurityVerdict::Deny(_)));
}

#[test]
fn chmod_denies_missing_file_operand() {
    assert!(matches!(check_command("chmod u+x", &cwd()), SecurityVerdict::Deny(_)));
}

#[test]
fn init_sh_requires_exact_dot_slash_prefix() {
    assert!(matches!(check_command("init.sh", &cwd()), SecurityVerdict::Deny(_)));
    assert!(matches!(check_command("/abs/init.sh", &cwd()), SecurityVerdict::Deny(_)));
}

#[test]
fn init_sh_denies_argument_with_shell_metacharacter() {
    assert!(matches!(check_command("./init.sh \"a;b\"", &cwd()), SecurityVerdict::Deny(_)));
}

#[test]
fn init_sh_denies_parent_traversal_argument() {
    assert!(matches!(check_command("./init.sh ../secrets", &cwd()), SecurityVerdict::Deny(_)));
}

#[test]
fn init_sh_denies_too_many_arguments() {
    let args: Vec<String> = (0..51).map(|i| i.to_string()).collect();
    let cmd = format!("./init.sh {}", args.join(" "));
    assert!(matches!(check_command(&cmd, &cwd()), SecurityVerdict::Deny(_)));
}

#[test]
fn start_sh_allows_known_subcommand() {
    assert_eq!(check_command("./start.sh dev", &cwd()), SecurityVerdict::Allow);
}

#[test]
fn start_sh_denies_unknown_subcommand() {
    assert!(matches!(check_command("./start.sh deploy-prod", &cwd()), SecurityVerdict::Deny(_)));
}

#[test]
fn start_sh_with_no_arguments_is_allowed() {
    assert_eq!(check_command("./start.sh", &cwd()), SecurityVerdict::Allow);
}

#[test]
fn shell_keyword_used_as_a_bare_word_is_skipped_not_denied() {
    assert_eq!(check_command("done", &cwd()), SecurityVerdict::Allow);
}

#[test]
fn empty_command_is_denied_fail_safe() {
    assert!(matches!(check_command(";", &cwd()), SecurityVerdict::Deny(_)));
}
