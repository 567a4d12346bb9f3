// Adapter layer: wire protocol, WebSocket plumbing, and outbound clients.

pub mod clients;
pub mod net;
pub mod protocol;
pub mod state;

pub use net::ws_handler;
