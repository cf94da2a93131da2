//! Rubiks Transformation Service
//!
//! Stateless HTTP front for the permutation engine. A client posts the layout it
//! currently shows together with a move string and gets the resulting layout back.
//!
//! ```text
//! POST /cube  {"CubeLayout": [54 codes], "Transformation": "F"}  ->  [54 codes]
//! ```
//!
//! Unknown move symbols are skipped; the service never judges whether a layout is
//! reachable from the solved cube.

pub mod config;
pub mod error;
pub mod server;

pub use config::ServiceConfig;
pub use error::{Error, Result};
pub use server::TransformServer;
