use crate::commands::helpers::{Guard, check};
use crate::commands::{CmdMessage, CmdResult};
use crate::model::Keyring;

pub const GUARDS: &[Guard] = &[Guard::LabelAbsent, Guard::ArgCount(2), Guard::LabelNotEmpty];

/// `sw add LABEL ADDR`
pub fn run(mut keyring: Keyring, args: &[String]) -> CmdResult {
    if let Some(message) = check(&keyring, args, GUARDS) {
        return CmdResult::rejected(keyring, message);
    }

    let (label, address) = (&args[0], &args[1]);
    keyring.insert(label.as_str(), address.as_str());

    let mut result = CmdResult::modified(keyring);
    result.add_message(CmdMessage::success(format!("Added {}", label)));
    result
}
