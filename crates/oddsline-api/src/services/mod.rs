// Services layer for business logic
// Services own orchestration and row mapping, calling storage through
// the EventStore seam

pub mod event;

pub use event::EventService;
