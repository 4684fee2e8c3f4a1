use crate::{MemoryStore, ResultEngine, TripStore};

mod expenses;
mod trips;

pub use expenses::{ExpenseAdded, Settlement};

/// Trip ledger facade: records expenses through a [`TripStore`] and derives
/// settlements from them.
#[derive(Debug)]
pub struct Engine<S = MemoryStore> {
    store: S,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

impl<S: TripStore> Engine<S> {
    /// Engine backed by a custom store.
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    store: Option<MemoryStore>,
}

impl EngineBuilder {
    /// Pass a pre-populated store
    pub fn store(mut self, store: MemoryStore) -> EngineBuilder {
        self.store = Some(store);
        self
    }

    /// Construct `Engine`
    pub fn build(self) -> ResultEngine<Engine> {
        Ok(Engine::with_store(self.store.unwrap_or_default()))
    }
}
