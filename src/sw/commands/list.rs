use crate::commands::{CmdResult, Entry};
use crate::model::Keyring;

pub fn run(keyring: Keyring) -> CmdResult {
    let entries = keyring
        .iter()
        .map(|(label, address)| Entry {
            label: label.to_string(),
            address: address.to_string(),
        })
        .collect();
    CmdResult::unchanged(keyring).with_listed_entries(entries)
}
