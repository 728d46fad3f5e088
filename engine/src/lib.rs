//! Client-side listing engine: keeps a page's inquiry, its URL and its
//! fetched results in step, and reconciles like/follow toggles by refetching.
//!
//! Nothing here touches a UI toolkit. The page adapter supplies the remote
//! list service, the navigator, a task spawner and a timer.

pub mod config;
pub mod debounce;
pub mod error;
pub mod location;
pub mod notify;
pub mod query_engine;
pub mod runtime;
pub mod service;
pub mod session;
pub mod toggle;

pub use config::EngineConfig;
pub use debounce::{DebounceTicket, Debouncer};
pub use error::{ListingError, RemoteError};
pub use location::{HistoryMode, ListingLocation, Navigator};
pub use notify::{Notification, NotificationKind, NotificationSink};
pub use query_engine::{EnginePorts, ListingState, QueryEngine};
pub use runtime::{Spawner, Timer};
pub use service::{ListFuture, ListService};
pub use session::{SessionCell, SessionView};
pub use toggle::{ToggleCoordinator, ToggleKind, ToggleOutcome};
