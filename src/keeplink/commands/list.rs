use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let bookmarks = store.load()?;
    Ok(CmdResult::default().with_bookmarks(bookmarks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_in_insertion_order() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "a", "http://a.com").unwrap();
        add::run(&mut store, "b", "http://b.com").unwrap();

        let result = run(&store).unwrap();
        assert_eq!(result.bookmarks.len(), 2);
        assert_eq!(result.bookmarks[0].name, "a");
        assert_eq!(result.bookmarks[1].name, "b");
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = InMemoryStore::new();
        let result = run(&store).unwrap();
        assert!(result.bookmarks.is_empty());
    }
}
