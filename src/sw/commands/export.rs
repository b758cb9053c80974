use crate::commands::CmdResult;
use crate::error::{Result, SwError};
use crate::model::Keyring;

/// `sw export`: the whole keyring as one compact JSON line.
pub fn run(keyring: Keyring) -> Result<CmdResult> {
    let json = serde_json::to_string(&keyring).map_err(SwError::Serialization)?;
    Ok(CmdResult::unchanged(keyring).with_exported(json))
}
