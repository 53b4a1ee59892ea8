//! JSON-RPC 2.0 bridge to an embedding page.
//!
//! When the viewer runs inside an iframe, the parent window talks to it over
//! `postMessage`:
//!
//! ```text
//! Parent page  <──postMessage──>  Viewer (iframe)
//!      │                               │
//!      ├─ Request (with ID) ─────────> │
//!      │ <──────── Response (with ID) ─┤
//!      │ <───── Notification (no ID) ──┤
//! ```
//!
//! ## Notifications sent
//! - `hotspot_hovered { id | null }`
//! - `hotspot_clicked { id, url }`
//! - `loading_progress { stage }`
//! - `model_load_failed { message }`
//!
//! ## Requests handled
//! - `get_hotspots`: list of `{ id, label, target_url }`
//! - `get_hover`: hovered hotspot id or `null`
//!
//! Unknown methods answer with `-32601 Method not found`. Native builds keep
//! the queues but drop outgoing messages.

pub mod web_rpc;
