//! Trip storage.
//!
//! The engine talks to storage through [`TripStore`]. Implementations own
//! their concurrency discipline: updates of one trip are serialised, updates
//! of different trips must not block each other.

use std::{collections::HashMap, future::Future, sync::Arc};

use tokio::sync::{Mutex, RwLock};

use crate::{EngineError, ResultEngine, Trip};

pub trait TripStore: Send + Sync {
    /// Insert a new trip. Fails with [`EngineError::ExistingKey`] when the id
    /// is already taken.
    fn create(&self, trip: Trip) -> impl Future<Output = ResultEngine<()>> + Send;

    /// Snapshot of a trip.
    fn get(&self, trip_id: &str) -> impl Future<Output = ResultEngine<Trip>> + Send;

    /// Run `f` on the trip while holding its lock and return its result.
    fn update<T, F>(&self, trip_id: &str, f: F) -> impl Future<Output = ResultEngine<T>> + Send
    where
        T: Send,
        F: FnOnce(&mut Trip) -> ResultEngine<T> + Send;
}

/// In-memory store with one lock per trip.
///
/// The outer lock only guards the id → trip map; it is released before a
/// trip is read or mutated.
#[derive(Debug, Default)]
pub struct MemoryStore {
    trips: RwLock<HashMap<String, Arc<Mutex<Trip>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn handle(&self, trip_id: &str) -> ResultEngine<Arc<Mutex<Trip>>> {
        self.trips
            .read()
            .await
            .get(trip_id)
            .cloned()
            .ok_or_else(|| EngineError::KeyNotFound(trip_id.to_string()))
    }

    pub async fn len(&self) -> usize {
        self.trips.read().await.len()
    }
}

impl TripStore for MemoryStore {
    async fn create(&self, trip: Trip) -> ResultEngine<()> {
        let mut trips = self.trips.write().await;
        if trips.contains_key(&trip.id) {
            return Err(EngineError::ExistingKey(trip.id));
        }
        trips.insert(trip.id.clone(), Arc::new(Mutex::new(trip)));
        Ok(())
    }

    async fn get(&self, trip_id: &str) -> ResultEngine<Trip> {
        let handle = self.handle(trip_id).await?;
        let trip = handle.lock().await;
        Ok(trip.clone())
    }

    async fn update<T, F>(&self, trip_id: &str, f: F) -> ResultEngine<T>
    where
        T: Send,
        F: FnOnce(&mut Trip) -> ResultEngine<T> + Send,
    {
        let handle = self.handle(trip_id).await?;
        let mut trip = handle.lock().await;
        // Work on a copy so a failed update leaves the trip untouched.
        let mut draft = trip.clone();
        let value = f(&mut draft)?;
        *trip = draft;
        Ok(value)
    }
}
