use crate::commands::helpers::{Guard, check};
use crate::commands::{CmdMessage, CmdResult};
use crate::model::Keyring;

pub const GUARDS: &[Guard] = &[Guard::LabelExists, Guard::ArgCount(1)];

/// `sw remove LABEL`
pub fn run(mut keyring: Keyring, args: &[String]) -> CmdResult {
    if let Some(message) = check(&keyring, args, GUARDS) {
        return CmdResult::rejected(keyring, message);
    }

    let label = &args[0];
    keyring.remove(label);

    let mut result = CmdResult::modified(keyring);
    result.add_message(CmdMessage::success(format!("Removed {}", label)));
    result
}
