//! `sw connect` and `sw run`.
//!
//! Both resolve a label to its address and hand the terminal to the ssh
//! client until the session ends. The "Connecting to ..." line has to reach
//! the user before ssh takes over, so it goes through `notify` right away
//! rather than being queued on the result.

use crate::commands::helpers::{Guard, check};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Keyring;
use crate::runner::{ProcessRunner, SshInvocation};

pub const CONNECT_GUARDS: &[Guard] = &[Guard::LabelExists, Guard::ArgCount(1)];
pub const RUN_GUARDS: &[Guard] = &[Guard::LabelExists, Guard::ArgCount(2)];

/// `sw connect LABEL`
pub fn connect<R: ProcessRunner>(
    keyring: Keyring,
    args: &[String],
    program: &str,
    runner: &mut R,
    notify: &mut dyn FnMut(CmdMessage),
) -> Result<CmdResult> {
    if let Some(message) = check(&keyring, args, CONNECT_GUARDS) {
        return Ok(CmdResult::rejected(keyring, message));
    }

    let address = resolve(&keyring, &args[0]);
    let invocation = SshInvocation::connect(program, &address);
    session(keyring, &address, &invocation, runner, notify)
}

/// `sw run LABEL COMMAND`
pub fn run<R: ProcessRunner>(
    keyring: Keyring,
    args: &[String],
    program: &str,
    runner: &mut R,
    notify: &mut dyn FnMut(CmdMessage),
) -> Result<CmdResult> {
    if let Some(message) = check(&keyring, args, RUN_GUARDS) {
        return Ok(CmdResult::rejected(keyring, message));
    }

    let address = resolve(&keyring, &args[0]);
    let invocation = SshInvocation::run(program, &address, &args[1]);
    session(keyring, &address, &invocation, runner, notify)
}

fn resolve(keyring: &Keyring, label: &str) -> String {
    // Guarded by LabelExists.
    keyring.get(label).unwrap_or_default().to_string()
}

fn session<R: ProcessRunner>(
    keyring: Keyring,
    address: &str,
    invocation: &SshInvocation,
    runner: &mut R,
    notify: &mut dyn FnMut(CmdMessage),
) -> Result<CmdResult> {
    notify(CmdMessage::info(format!("Connecting to {}...", address)));
    runner.run(invocation)?;

    let mut result = CmdResult::unchanged(keyring);
    result.add_message(CmdMessage::info("ssh session finished"));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::RecordingRunner;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn keyring() -> Keyring {
        [("db", "admin@10.0.0.1")].into_iter().collect()
    }

    #[test]
    fn connect_invokes_ssh_with_address() {
        let mut runner = RecordingRunner::new();
        let mut notified = Vec::new();

        let result = connect(keyring(), &args(&["db"]), "ssh", &mut runner, &mut |m| {
            notified.push(m)
        })
        .unwrap();

        assert_eq!(runner.invocations.len(), 1);
        assert_eq!(runner.invocations[0].program, "ssh");
        assert_eq!(runner.invocations[0].args, vec!["admin@10.0.0.1"]);
        assert_eq!(notified[0].content, "Connecting to admin@10.0.0.1...");
        assert_eq!(result.messages[0].content, "ssh session finished");
        assert!(!result.modified);
    }

    #[test]
    fn connect_unknown_label_does_not_run() {
        let mut runner = RecordingRunner::new();
        let mut notified = Vec::new();

        let result = connect(keyring(), &args(&["ghost"]), "ssh", &mut runner, &mut |m| {
            notified.push(m)
        })
        .unwrap();

        assert!(runner.invocations.is_empty());
        assert!(notified.is_empty());
        assert_eq!(result.messages[0].content, "ghost is not a valid label!");
    }

    #[test]
    fn run_forces_tty_and_passes_command() {
        let mut runner = RecordingRunner::new();

        run(
            keyring(),
            &args(&["db", "tail -f /var/log/syslog"]),
            "ssh",
            &mut runner,
            &mut |_| {},
        )
        .unwrap();

        assert_eq!(
            runner.invocations[0].args,
            vec!["-t", "admin@10.0.0.1", "tail -f /var/log/syslog"]
        );
    }

    #[test]
    fn run_without_command_reports_argument_count() {
        let mut runner = RecordingRunner::new();

        let result = run(keyring(), &args(&["db"]), "ssh", &mut runner, &mut |_| {}).unwrap();

        assert!(runner.invocations.is_empty());
        assert_eq!(result.messages[0].content, "This action requires 2 arguments!");
    }

    #[test]
    fn failing_session_still_finishes() {
        let mut runner = RecordingRunner::exiting_with(255);

        let result = connect(keyring(), &args(&["db"]), "ssh", &mut runner, &mut |_| {}).unwrap();

        assert_eq!(result.messages[0].content, "ssh session finished");
    }

    #[test]
    fn uses_configured_program() {
        let mut runner = RecordingRunner::new();

        connect(keyring(), &args(&["db"]), "/usr/bin/ssh", &mut runner, &mut |_| {}).unwrap();

        assert_eq!(runner.invocations[0].program, "/usr/bin/ssh");
    }
}
