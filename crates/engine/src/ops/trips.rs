use crate::{ResultEngine, Trip, TripStore};

use super::Engine;

impl<S: TripStore> Engine<S> {
    /// Create a trip. A missing or blank title becomes "Weekend Trip".
    pub async fn new_trip(&self, title: Option<&str>) -> ResultEngine<Trip> {
        let trip = Trip::new(title);
        self.store.create(trip.clone()).await?;
        tracing::info!("created trip {} ({})", trip.id, trip.title);
        Ok(trip)
    }

    pub async fn trip(&self, trip_id: &str) -> ResultEngine<Trip> {
        self.store.get(trip_id).await
    }

    /// Change the title of a trip. Blank titles are rejected.
    pub async fn rename_trip(&self, trip_id: &str, title: &str) -> ResultEngine<Trip> {
        self.store
            .update(trip_id, |trip| {
                trip.rename(title)?;
                Ok(trip.clone())
            })
            .await
    }
}
