use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Overwrites the live products with the factory defaults.
///
/// The caller's in-memory list is not reloaded; the session ends right after a reset.
pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let restored = store.reset_to_defaults()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::warning("RESETTING DEFAULTS"));
    result.add_message(CmdMessage::info(format!(
        "{} products restored to {}",
        restored.len(),
        store.location().display()
    )));
    Ok(result.with_affected_products(restored))
}
