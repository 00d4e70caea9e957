use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use crate::validator;

pub fn run<S: DataStore>(store: &mut S, name: &str, url: &str) -> Result<CmdResult> {
    // First failing check aborts before anything is persisted.
    let bookmark = validator::validate(store, name, url)?;
    store.append(&bookmark)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Bookmark added."));
    result.bookmarks.push(bookmark);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::error::KeeplinkError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_a_normalized_bookmark() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "Docs", "example.com/api").unwrap();
        assert_eq!(result.bookmarks[0].url, "https://example.com/api");

        let listed = list::run(&store).unwrap();
        assert_eq!(listed.bookmarks.len(), 1);
        assert_eq!(listed.bookmarks[0].name, "Docs");
    }

    #[test]
    fn duplicate_submission_stores_nothing() {
        let mut store = InMemoryStore::new();
        run(&mut store, "Docs", "example.com/api").unwrap();

        let err = run(&mut store, "Docs", "example.com/api").unwrap_err();
        assert!(matches!(err, KeeplinkError::Duplicate { .. }));
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn rejected_input_stores_nothing() {
        let mut store = InMemoryStore::new();
        assert!(run(&mut store, "a", "not a url").is_err());
        assert!(run(&mut store, "", "http://x.com").is_err());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn appends_in_submission_order() {
        let mut store = InMemoryStore::new();
        run(&mut store, "b", "http://b.com").unwrap();
        run(&mut store, "a", "http://a.com").unwrap();

        let list = store.load().unwrap();
        assert_eq!(list[0].name, "b");
        assert_eq!(list[1].name, "a");
    }
}
