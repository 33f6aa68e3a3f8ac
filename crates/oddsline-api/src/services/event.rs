// Event service for business logic

use anyhow::{anyhow, Result};
use oddsline_contracts::{CreateEventRequest, Event, EventStatus};
use oddsline_storage::{CreateEventRow, EventRow, EventStore};
use std::sync::Arc;

use crate::publish::UpdatePublisher;

pub struct EventService {
    store: Arc<dyn EventStore>,
    publisher: Arc<dyn UpdatePublisher>,
}

impl EventService {
    pub fn new(store: Arc<dyn EventStore>, publisher: Arc<dyn UpdatePublisher>) -> Self {
        Self { store, publisher }
    }

    /// Page of events in insertion order. Negative skip or limit is
    /// treated permissively as an empty page, never an error.
    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Event>> {
        if skip < 0 || limit < 0 {
            return Ok(Vec::new());
        }

        let rows = self.store.list_events(skip, limit).await?;
        rows.into_iter().map(Self::row_to_event).collect()
    }

    pub async fn get(&self, id: i64) -> Result<Option<Event>> {
        let row = self.store.get_event(id).await?;
        row.map(Self::row_to_event).transpose()
    }

    /// Persist a new event. Status is always uncompleted regardless of
    /// anything the caller sent.
    pub async fn create(&self, req: CreateEventRequest) -> Result<Event> {
        let input = CreateEventRow {
            name: req.name,
            odds: req.odds,
            deadline: req.deadline,
        };
        let row = self.store.create_event(input).await?;
        Self::row_to_event(row)
    }

    /// Overwrite the status of an existing event. The existence read
    /// comes first, so an unknown id never issues a write; the
    /// publisher is notified only after the update persisted.
    pub async fn update_status(&self, id: i64, status: EventStatus) -> Result<Option<Event>> {
        if self.store.get_event(id).await?.is_none() {
            return Ok(None);
        }

        let Some(row) = self
            .store
            .update_event_status(id, &status.to_string())
            .await?
        else {
            // Row gone despite the existence read; report not found.
            return Ok(None);
        };

        let event = Self::row_to_event(row)?;
        if let Err(e) = self.publisher.publish_event_update(&event).await {
            tracing::warn!(
                event_id = event.id,
                "Failed to publish event update: {:#}",
                e
            );
        }

        Ok(Some(event))
    }

    fn row_to_event(row: EventRow) -> Result<Event> {
        let status = row
            .status
            .parse::<EventStatus>()
            .map_err(|_| anyhow!("unrecognized stored status label: {:?}", row.status))?;

        Ok(Event {
            id: row.id,
            name: row.name,
            odds: row.odds,
            deadline: row.deadline,
            status,
        })
    }
}
