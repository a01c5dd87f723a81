//! pz-pair: terminal pairing panel for the PointZerver status service.
//!
//! An external client with no special access to the server: it polls the
//! local status endpoint (`GET http://127.0.0.1:45460/status`) on a fixed
//! interval and renders one of two mutually exclusive views.
//!
//! ```text
//! ┌ POINTZERVER PAIRING ────────────────────────────────┐
//! │ Status: ● CONNECTED                                 │
//! ├ CONNECTION ─────────────────────────────────────────┤
//! │ Hostname:        host1                              │
//! │ IP Address:      10.0.0.5                           │
//! │ Discovery Port:  9000                               │
//! │ Command Port:    9001                               │
//! │ Download:        https://example.com/app            │
//! ├ SCAN TO DOWNLOAD ───────────────────────────────────┤
//! │                 ▄▄▄▄▄ ▄ ▄▄▄▄▄                       │
//! │                 █ ▄ █ ▀ █ ▄ █   (QR code)           │
//! ├─────────────────────────────────────────────────────┤
//! │ [R] Refresh  [Q] Quit │ http://127.0.0.1:45460/...  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Only the very first failed poll surfaces the error view; later failures
//! leave the last rendered view untouched (configurable, see
//! [`domain::App`]).

pub mod api;
pub mod domain;
pub mod poller;
pub mod qr;
pub mod ui;

pub use api::client::{StatusClient, StatusError};
pub use api::types::PairingStatus;
pub use domain::{App, View};
pub use poller::Poller;
