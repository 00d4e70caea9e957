use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, name: &str, url: &str) -> Result<CmdResult> {
    let existed = store.contains(name, url)?;
    store.remove(name, url)?;

    let mut result = CmdResult::default();
    if existed {
        result.add_message(CmdMessage::success(format!("Bookmark removed: {}", name)));
    } else {
        // Removing a pair that is not stored is not an error.
        result.add_message(CmdMessage::info("No matching bookmark."));
    }
    Ok(result)
}
