use crate::commands::helpers::{Guard, check};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SwError};
use crate::model::Keyring;
use std::fs;
use std::path::Path;

pub const GUARDS: &[Guard] = &[Guard::ArgCount(1)];

/// `sw import FILE`
///
/// Unlike loading the keyring itself, a missing or malformed import file is a
/// hard error.
pub fn run(
    keyring: Keyring,
    args: &[String],
    notify: &mut dyn FnMut(CmdMessage),
) -> Result<CmdResult> {
    if let Some(message) = check(&keyring, args, GUARDS) {
        return Ok(CmdResult::rejected(keyring, message));
    }

    notify(CmdMessage::info(
        "Merging current keyring and external keyring...",
    ));
    let incoming = read_keyring(Path::new(&args[0]))?;
    let count = incoming.len();

    let mut result = CmdResult::modified(keyring.merge(incoming));
    result.add_message(CmdMessage::success(format!("Imported {} entries", count)));
    Ok(result)
}

fn read_keyring(path: &Path) -> Result<Keyring> {
    let content = fs::read_to_string(path).map_err(|e| SwError::Import {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| SwError::Import {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, content: &str) -> String {
        let path = dir.path().join("incoming.json");
        fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn merges_with_incoming_winning() {
        let dir = TempDir::new().unwrap();
        let file = write_file(&dir, r#"{"x":"1"}"#);
        let existing: Keyring = [("x", "0"), ("y", "2")].into_iter().collect();
        let mut notified = Vec::new();

        let result = run(existing, &[file], &mut |m| notified.push(m)).unwrap();

        let expected: Keyring = [("x", "1"), ("y", "2")].into_iter().collect();
        assert_eq!(result.keyring, expected);
        assert!(result.modified);
        assert_eq!(
            notified[0].content,
            "Merging current keyring and external keyring..."
        );
        assert_eq!(result.messages[0].content, "Imported 1 entries");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.json").to_string_lossy().into_owned();

        let err = run(Keyring::new(), &[missing], &mut |_| {}).unwrap_err();
        assert!(matches!(err, SwError::Import { .. }));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let file = write_file(&dir, "{ broken");

        let err = run(Keyring::new(), &[file], &mut |_| {}).unwrap_err();
        assert!(matches!(err, SwError::Import { .. }));
    }

    #[test]
    fn missing_argument_is_soft_failure() {
        let keyring: Keyring = [("a", "1")].into_iter().collect();
        let mut notified = Vec::new();

        let result = run(keyring.clone(), &[], &mut |m| notified.push(m)).unwrap();

        assert!(!result.modified);
        assert_eq!(result.keyring, keyring);
        assert!(notified.is_empty());
        assert_eq!(result.messages[0].content, "This action requires 1 arguments!");
    }
}
