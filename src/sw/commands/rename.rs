use crate::commands::helpers::{Guard, check, not_a_valid_label};
use crate::commands::{CmdMessage, CmdResult, add, remove};
use crate::model::Keyring;

pub const GUARDS: &[Guard] = &[Guard::ArgCount(2)];

/// `sw rename LABEL NEWLABEL`
///
/// Composed from `add` and `remove`. If either step is rejected, the rename
/// stops there and the keyring the failed step returned (the unchanged input)
/// is handed back with that step's message.
pub fn run(keyring: Keyring, args: &[String]) -> CmdResult {
    if let Some(message) = check(&keyring, args, GUARDS) {
        return CmdResult::rejected(keyring, message);
    }

    let (label, new_label) = (&args[0], &args[1]);
    let Some(address) = keyring.get(label).map(str::to_string) else {
        return CmdResult::rejected(keyring, not_a_valid_label(label));
    };

    let added = add::run(keyring.clone(), &[new_label.clone(), address]);
    if !added.modified {
        return CmdResult {
            keyring,
            messages: added.messages,
            ..Default::default()
        };
    }

    let removed = remove::run(added.keyring, std::slice::from_ref(label));
    if !removed.modified {
        return CmdResult {
            keyring,
            messages: removed.messages,
            ..Default::default()
        };
    }

    let mut result = CmdResult::modified(removed.keyring);
    result.add_message(CmdMessage::success(format!(
        "Renamed {} to {}",
        label, new_label
    )));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn moves_address_to_new_label() {
        let keyring: Keyring = [("a", "me@host")].into_iter().collect();
        let result = run(keyring, &args(&["a", "b"]));

        assert!(result.modified);
        assert_eq!(result.keyring.get("b"), Some("me@host"));
        assert!(!result.keyring.contains("a"));
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, "Renamed a to b");
    }

    #[test]
    fn existing_target_aborts() {
        let keyring: Keyring = [("a", "1"), ("b", "2")].into_iter().collect();
        let result = run(keyring.clone(), &args(&["a", "b"]));

        assert!(!result.modified);
        assert_eq!(result.keyring, keyring);
        assert_eq!(result.messages[0].content, "The label b is already registered!");
    }

    #[test]
    fn unknown_source_is_rejected() {
        let keyring: Keyring = [("a", "1")].into_iter().collect();
        let result = run(keyring.clone(), &args(&["ghost", "b"]));

        assert!(!result.modified);
        assert_eq!(result.keyring, keyring);
        assert_eq!(result.messages[0].content, "ghost is not a valid label!");
    }

    #[test]
    fn rename_to_itself_is_rejected() {
        let keyring: Keyring = [("a", "1")].into_iter().collect();
        let result = run(keyring.clone(), &args(&["a", "a"]));
        assert!(!result.modified);
        assert_eq!(result.keyring, keyring);
    }

    #[test]
    fn argument_count_checked_first() {
        let result = run(Keyring::new(), &args(&["ghost"]));
        assert_eq!(result.messages[0].content, "This action requires 2 arguments!");
    }
}
