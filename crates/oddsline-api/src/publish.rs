// Update notification capability
//
// Status changes are announced to an external sink (a message queue in
// production). The transport is injected so the service never depends
// on its availability.

use anyhow::Result;
use async_trait::async_trait;
use oddsline_contracts::Event;

/// Fire-and-forget sink for event change notifications
#[async_trait]
pub trait UpdatePublisher: Send + Sync {
    /// Announce that an event's status changed. No delivery guarantee.
    async fn publish_event_update(&self, event: &Event) -> Result<()>;
}

/// Publisher that only logs the notification; stands in for a real
/// message-queue producer.
#[derive(Debug, Default)]
pub struct LogUpdatePublisher;

#[async_trait]
impl UpdatePublisher for LogUpdatePublisher {
    async fn publish_event_update(&self, event: &Event) -> Result<()> {
        tracing::info!(
            event_id = event.id,
            status = %event.status,
            "Event update published"
        );
        Ok(())
    }
}
