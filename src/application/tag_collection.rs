// src/application/tag_collection.rs
use crate::application::store::{load_records, save_records};
use crate::application::{IdGenerator, KeyValueStore};
use crate::constants::TAGS_KEY;
use crate::domain::{DomainError, Tag};
use tracing::{debug, info, instrument};

const SEED_TAGS: [&str; 2] = ["job-hunting", "books"];

/// Ordered tag list mirrored to its own store key.
pub struct TagCollection<S: KeyValueStore, G: IdGenerator> {
    store: S,
    ids: G,
    tags: Vec<Tag>,
}

impl<S: KeyValueStore, G: IdGenerator> TagCollection<S, G> {
    pub fn load(store: S, ids: G) -> Result<Self, DomainError> {
        let mut collection = Self {
            store,
            ids,
            tags: Vec::new(),
        };
        collection.reload()?;
        Ok(collection)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn reload(&mut self) -> Result<(), DomainError> {
        self.tags = load_records(&self.store, TAGS_KEY)?;
        if self.tags.is_empty() {
            info!("Seeding default tags");
            self.tags = SEED_TAGS
                .iter()
                .map(|name| Tag::new(self.ids.generate(), *name))
                .collect();
            self.persist()?;
        }
        debug!(count = self.tags.len(), "Loaded tags");
        Ok(())
    }

    pub fn persist(&mut self) -> Result<(), DomainError> {
        save_records(&mut self.store, TAGS_KEY, &self.tags)
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(|t| t.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::{MemoryStore, SequentialIds};

    #[test]
    fn given_empty_store_when_loading_then_seeds_default_tags() {
        let store = MemoryStore::new();

        let tags = TagCollection::load(store.clone(), SequentialIds::new("tag")).unwrap();

        assert_eq!(tags.names().collect::<Vec<_>>(), ["job-hunting", "books"]);
        assert!(store.raw(TAGS_KEY).unwrap().contains("job-hunting"));
    }

    #[test]
    fn given_stored_tags_when_loading_then_keeps_ids_and_order() {
        let store = MemoryStore::builder()
            .with_value(TAGS_KEY, r#"[{"id":"z","name":"later"},{"id":"a","name":"earlier"}]"#)
            .build();

        let tags = TagCollection::load(store, SequentialIds::new("tag")).unwrap();

        assert_eq!(tags.tags(), [Tag::new("z", "later"), Tag::new("a", "earlier")]);
    }

    #[test]
    fn given_seeded_tags_when_reloading_then_ids_are_stable() {
        let store = MemoryStore::new();
        let first = TagCollection::load(store.clone(), SequentialIds::new("tag")).unwrap();

        let second = TagCollection::load(store, SequentialIds::new("other")).unwrap();

        assert_eq!(first.tags(), second.tags());
    }

    #[test]
    fn given_failing_store_when_seeding_then_returns_error() {
        let store = MemoryStore::builder().with_write_failure().build();

        let result = TagCollection::load(store, SequentialIds::new("tag"));

        assert!(matches!(result, Err(DomainError::StorageWrite { .. })));
    }
}
