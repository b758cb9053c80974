//! Validation guards shared by the commands.
//!
//! Each command declares the guards it needs, in the order they must run.
//! [`check`] walks them and stops at the first violation, returning the
//! message to show. Commands that take a label always list the label guard
//! before the argument-count guard: the label is checked against whatever
//! arguments are present, and the count is only checked once the label passes.

use crate::commands::CmdMessage;
use crate::model::Keyring;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// The first argument must be a registered label.
    LabelExists,
    /// The first argument must not be a registered label.
    LabelAbsent,
    /// Exactly this many positional arguments.
    ArgCount(usize),
    /// The first argument must not be the empty string.
    LabelNotEmpty,
}

/// Runs `guards` in order against `args`, returning the first violation.
pub fn check(keyring: &Keyring, args: &[String], guards: &[Guard]) -> Option<CmdMessage> {
    guards
        .iter()
        .find_map(|guard| violation(keyring, args, *guard))
}

fn violation(keyring: &Keyring, args: &[String], guard: Guard) -> Option<CmdMessage> {
    match guard {
        // With no label at all there is nothing to look up; the count guard
        // reports that case.
        Guard::LabelExists => {
            let label = args.first()?;
            (!keyring.contains(label)).then(|| not_a_valid_label(label))
        }
        Guard::LabelAbsent => {
            let label = args.first()?;
            keyring
                .contains(label)
                .then(|| CmdMessage::error(format!("The label {} is already registered!", label)))
        }
        Guard::ArgCount(required) => (args.len() != required).then(|| {
            CmdMessage::error(format!("This action requires {} arguments!", required))
        }),
        Guard::LabelNotEmpty => args
            .first()
            .filter(|label| label.is_empty())
            .map(|_| CmdMessage::error("A label cannot be empty!")),
    }
}

pub fn not_a_valid_label(label: &str) -> CmdMessage {
    CmdMessage::error(format!("{} is not a valid label!", label))
}
