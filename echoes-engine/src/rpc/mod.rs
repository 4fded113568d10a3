//! JSON-RPC 2.0 bridge to an embedding web page.
//!
//! When the experience runs inside an iframe, the parent page can follow the
//! reader's progress and drive the ambient audio over `postMessage`.
//!
//! ## Message Flow
//!
//! ```text
//! Host page (parent window)  <──postMessage──>  Bevy (iframe)
//!        │                                        │
//!        ├─ Request (with ID) ──────────────────> │
//!        │                                        ├─ Process request
//!        │ <───────────────── Response (with ID) ─┤
//!        │                                        │
//!        │ <────────── Notification (no ID) ─────┤
//! ```
//!
//! ## Methods
//!
//! - `get_progress`: returns `{ "index", "total" }`
//! - `toggle_mute`: flips the ambient audio and returns `{ "muted" }`
//!
//! ## Notifications
//!
//! - `stanza_changed`: `{ "index", "total" }` after every advance
//!
//! ## Error Handling
//!
//! - `-32601`: Method not found
//! - `-32602`: Invalid params
//! - `-32603`: Internal error
//!
//! On native targets outgoing messages are dropped.

/// Request handling, notifications and the WASM message listener.
pub mod web_rpc;
