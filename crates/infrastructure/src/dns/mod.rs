pub mod listener;
pub mod orchestrator;
pub mod responder;
pub mod server;
pub mod signal;

pub use listener::{resolve_bind_address, Listener, DEFAULT_DNS_PORT};
pub use orchestrator::{ListenerOrchestrator, ListenerOutcome};
pub use server::RecordTableHandler;
