// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The Security Filter: gates a candidate shell command line against an
//! allow-list and a handful of per-command rules before it is ever handed
//! to a real shell.
//!
//! This never executes anything. It parses the command with [`Parser`]
//! and walks the resulting AST, which gives POSIX-correct quoting and
//! word-splitting for free instead of hand-rolled string scanning.
//!
//! Callers invoke this synchronously; the evaluation itself is pure CPU-
//! bound parsing and expected to complete in microseconds. A hard 60s
//! budget is a caller-side concern (e.g. wrapped in `tokio::time::timeout`
//! around the tool dispatch) and is not implemented here.

use std::path::Path;

use crate::ast::{BraceGroup, Command, CommandList, Pipeline, SimpleCommand, Subshell, Word, WordPart};
use crate::parser::Parser;

/// Commands a session is permitted to run, frozen by spec.
const ALLOWLIST: &[&str] = &[
    "ls", "cat", "head", "tail", "wc", "grep", "cp", "mkdir", "chmod", "pwd", "npm", "node", "git",
    "ps", "lsof", "sleep", "pkill", "init.sh", "start.sh", "cd", "gh", "echo",
];

/// Shell syntax words that never name a real invoked program under this
/// grammar (which has no compound-statement support); encountering one as
/// a command name is skipped rather than denied or allow-listed.
const SKIPPED_KEYWORDS: &[&str] = &[
    "if", "then", "else", "elif", "fi", "for", "while", "until", "do", "done", "case", "esac",
    "in", "!", "{", "}",
];

const MAX_COMMAND_BYTES: usize = 10_000;
const PKILL_ALLOWED_TARGETS: &[&str] = &["node", "npm", "npx", "vite", "next"];
const START_SH_SUBCOMMANDS: &[&str] = &[
    "dev", "prod", "restart-dev", "stop", "check", "typecheck", "lint", "lint-fix", "build",
    "clean", "install", "setup", "test",
];
const SENSITIVE_ARG_CHARS: &[char] = &[';', '&', '|', '\\', '`', '$', '(', ')', '<', '>', '\n', '\r'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecurityVerdict {
    Allow,
    Deny(String),
}

impl SecurityVerdict {
    pub fn is_allow(&self) -> bool {
        matches!(self, SecurityVerdict::Allow)
    }

    fn deny(reason: impl Into<String>) -> Self {
        SecurityVerdict::Deny(reason.into())
    }
}

/// Evaluate a candidate shell command line. `cwd` is used only for the
/// symlink-safe path containment check on `init.sh`/`start.sh` invocations.
pub fn check_command(command: &str, cwd: &Path) -> SecurityVerdict {
    if command.len() > MAX_COMMAND_BYTES {
        return SecurityVerdict::deny(format!(
            "command exceeds the maximum length of {MAX_COMMAND_BYTES} bytes"
        ));
    }
    if command.contains('\0') {
        return SecurityVerdict::deny("command contains a NUL byte");
    }
    if command.contains("$(") || command.contains('`') || command.contains("<(") {
        return SecurityVerdict::deny(
            "command substitution and process substitution are not permitted",
        );
    }

    let ast = match Parser::parse(command) {
        Ok(ast) => ast,
        Err(err) => return SecurityVerdict::deny(format!("command failed to parse: {err}")),
    };

    let mut commands = Vec::new();
    collect_simple_commands(&ast, &mut commands);

    if commands.is_empty() {
        return SecurityVerdict::deny("command contains no recognizable command token");
    }

    for cmd in commands {
        if let SecurityVerdict::Deny(reason) = check_simple_command(cmd, cwd) {
            return SecurityVerdict::Deny(reason);
        }
    }

    SecurityVerdict::Allow
}

fn collect_simple_commands<'a>(list: &'a CommandList, out: &mut Vec<&'a SimpleCommand>) {
    for and_or in &list.commands {
        collect_from_command(&and_or.first.command, out);
        for (_, item) in &and_or.rest {
            collect_from_command(&item.command, out);
        }
    }
}

fn collect_from_command<'a>(command: &'a Command, out: &mut Vec<&'a SimpleCommand>) {
    match command {
        Command::Simple(simple) => out.push(simple),
        Command::Pipeline(Pipeline { commands, .. }) => out.extend(commands.iter()),
        Command::Subshell(Subshell { body, .. }) => collect_simple_commands(body, out),
        Command::BraceGroup(BraceGroup { body, .. }) => collect_simple_commands(body, out),
    }
}

/// Concatenates a word's literal text, or `None` if any part is a
/// variable reference or command substitution — such a word's runtime
/// value can't be statically determined, so callers must treat it
/// conservatively (deny).
fn literal_text(word: &Word) -> Option<String> {
    let mut out = String::new();
    for part in &word.parts {
        match part {
            WordPart::Literal { value, .. } => out.push_str(value),
            WordPart::Variable { .. } | WordPart::CommandSubstitution { .. } => return None,
        }
    }
    Some(out)
}

fn base_name(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

fn check_simple_command(cmd: &SimpleCommand, cwd: &Path) -> SecurityVerdict {
    let Some(name_text) = literal_text(&cmd.name) else {
        return SecurityVerdict::deny(
            "command name must be a literal token, not a variable or substitution",
        );
    };

    if SKIPPED_KEYWORDS.contains(&name_text.as_str()) {
        return SecurityVerdict::Allow;
    }

    let base = base_name(&name_text);
    if !ALLOWLIST.contains(&base) {
        return SecurityVerdict::deny(format!("command '{base}' is not in the allowed commands list"));
    }

    let args: Vec<Option<String>> = cmd.args.iter().map(literal_text).collect();

    match base {
        "pkill" => check_pkill(&args),
        "chmod" => check_chmod(&args),
        "init.sh" | "start.sh" => check_script_invocation(base, &name_text, &args, cwd),
        _ => SecurityVerdict::Allow,
    }
}

fn check_pkill(args: &[Option<String>]) -> SecurityVerdict {
    let target = args.iter().find_map(|arg| {
        let arg = arg.as_ref()?;
        if arg.starts_with('-') {
            None
        } else {
            Some(arg.split_whitespace().next().unwrap_or(arg.as_str()).to_string())
        }
    });

    match target {
        Some(target) if PKILL_ALLOWED_TARGETS.contains(&target.as_str()) => SecurityVerdict::Allow,
        Some(target) => SecurityVerdict::deny(format!("pkill target '{target}' is not permitted")),
        None => SecurityVerdict::deny("pkill requires a recognizable non-flag target"),
    }
}

fn check_chmod(args: &[Option<String>]) -> SecurityVerdict {
    if args.iter().any(|arg| match arg.as_deref() {
        Some(a) => a.starts_with('-'),
        None => true,
    }) {
        return SecurityVerdict::deny("chmod flags are not permitted");
    }
    let literals: Vec<&str> = args.iter().map(|a| a.as_deref().unwrap_or("")).collect();
    let Some((mode, files)) = literals.split_first() else {
        return SecurityVerdict::deny("chmod requires a mode and at least one file");
    };
    if files.is_empty() {
        return SecurityVerdict::deny("chmod requires at least one file argument");
    }
    if !is_valid_chmod_mode(mode) {
        return SecurityVerdict::deny(format!("chmod mode '{mode}' must match [ugoa]*+x"));
    }
    SecurityVerdict::Allow
}

/// Matches `^[ugoa]*\+x$` without pulling in the `regex` crate for one rule.
fn is_valid_chmod_mode(mode: &str) -> bool {
    match mode.strip_suffix("+x") {
        Some(prefix) => prefix.chars().all(|c| matches!(c, 'u' | 'g' | 'o' | 'a')),
        None => false,
    }
}

fn check_script_invocation(
    base: &str,
    name_text: &str,
    args: &[Option<String>],
    cwd: &Path,
) -> SecurityVerdict {
    let expected = format!("./{base}");
    if name_text != expected {
        return SecurityVerdict::deny(format!("{base} must be invoked as '{expected}'"));
    }

    if let SecurityVerdict::Deny(reason) = check_script_stays_under_cwd(base, cwd) {
        return SecurityVerdict::Deny(reason);
    }

    if args.len() > 50 {
        return SecurityVerdict::deny(format!("{base} takes at most 50 arguments"));
    }

    for arg in args {
        let Some(arg) = arg else {
            return SecurityVerdict::deny(format!("{base} arguments must be literal tokens"));
        };
        if arg.len() > 1000 {
            return SecurityVerdict::deny(format!("{base} argument exceeds 1000 bytes"));
        }
        if arg.contains(SENSITIVE_ARG_CHARS) {
            return SecurityVerdict::deny(format!("{base} argument contains a disallowed character"));
        }
        if arg.contains("../") || arg.contains("/..") {
            return SecurityVerdict::deny(format!("{base} argument must not traverse parent directories"));
        }
    }

    if base == "start.sh" {
        if let Some(Some(first)) = args.first() {
            if !START_SH_SUBCOMMANDS.contains(&first.as_str()) {
                return SecurityVerdict::deny(format!("start.sh subcommand '{first}' is not permitted"));
            }
        }
    }

    SecurityVerdict::Allow
}

fn check_script_stays_under_cwd(base: &str, cwd: &Path) -> SecurityVerdict {
    let candidate = cwd.join(base);
    let resolved_cwd = match cwd.canonicalize() {
        Ok(path) => path,
        Err(_) => return SecurityVerdict::deny(format!("could not resolve working directory for {base}")),
    };
    match candidate.canonicalize() {
        Ok(resolved) if resolved.starts_with(&resolved_cwd) => SecurityVerdict::Allow,
        Ok(_) => SecurityVerdict::deny(format!("{base} resolves outside the working directory")),
        // A script that doesn't exist yet can't escape the working directory either;
        // the non-existent-file case is left to whatever actually tries to run it.
        Err(_) => SecurityVerdict::Allow,
    }
}

#[cfg(test)]
#[path = "security_tests.rs"]
mod tests;
