// src/util/testing.rs

use anyhow::Result;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::env;
use std::rc::Rc;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{IdGenerator, KeyValueStore};
use crate::domain::DomainError;

#[derive(Default)]
struct MemoryState {
    values: HashMap<String, String>,
    fail_writes: Cell<bool>,
    writes: Cell<usize>,
}

/// In-memory key-value store for tests
///
/// Clones share the same contents, so a test can keep one handle for
/// inspection while the collections under test own the others.
///
/// # Examples
///
/// ```
/// use notecards::util::testing::MemoryStore;
///
/// let store = MemoryStore::builder()
///     .with_value("myTagList", r#"[{"id":"1","name":"books"}]"#)
///     .build();
/// assert!(store.raw("myTagList").is_some());
/// ```
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> MemoryStoreBuilder {
        MemoryStoreBuilder::new()
    }

    /// Raw stored string for `key`
    pub fn raw(&self, key: &str) -> Option<String> {
        self.state.borrow().values.get(key).cloned()
    }

    /// Number of successful writes so far
    pub fn writes(&self) -> usize {
        self.state.borrow().writes.get()
    }

    /// Make every following `set` fail, as a full quota would
    pub fn fail_writes(&self, fail: bool) {
        self.state.borrow().fail_writes.set(fail);
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.raw(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        let mut state = self.state.borrow_mut();
        if state.fail_writes.get() {
            return Err(DomainError::storage_write(key, "quota exceeded"));
        }
        state.values.insert(key.to_string(), value.to_string());
        state.writes.set(state.writes.get() + 1);
        Ok(())
    }
}

/// Builder for MemoryStore
pub struct MemoryStoreBuilder {
    values: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStoreBuilder {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            fail_writes: false,
        }
    }

    /// Pre-populate `key` with a raw string
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    /// Configure every write to fail
    pub fn with_write_failure(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn build(self) -> MemoryStore {
        let store = MemoryStore {
            state: Rc::new(RefCell::new(MemoryState {
                values: self.values,
                ..Default::default()
            })),
        };
        store.fail_writes(self.fail_writes);
        store
    }
}

impl Default for MemoryStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Predictable ids: `<prefix>-1`, `<prefix>-2`, ...
///
/// Clones continue the same sequence.
#[derive(Clone)]
pub struct SequentialIds {
    prefix: String,
    next: Rc<Cell<u64>>,
}

impl SequentialIds {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            next: Rc::new(Cell::new(1)),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn generate(&mut self) -> String {
        let n = self.next.get();
        self.next.set(n + 1);
        format!("{}-{}", self.prefix, n)
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    let noisy_modules = ["rstest"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
