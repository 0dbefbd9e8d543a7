mod app;
mod event_dispatcher;

pub use app::{App, BoxedDraftManager};
pub use event_dispatcher::EventDispatcher;
