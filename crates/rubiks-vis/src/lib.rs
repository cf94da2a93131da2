//! Rubiks Visualiser
//!
//! Drives a 3x3x3 puzzle display: 26 sub-cube meshes recoloured from a 54-facelet
//! state, moves sent to a transformation service one at a time or played from a
//! typed queue, and a hover inspector that identifies raw mesh vertices.
//!
//! # Architecture
//!
//! - [`mapper`]: facelet state to sub-cube colour buffers
//! - [`store`]: the current state and numbered requests against it
//! - [`client`]: HTTP and in-process transformation clients
//! - [`sequencer`]: queue playback state machine
//! - [`hover`]: marker picking, debounced tooltip and clipboard text
//! - [`session`]: the event loop that owns all of the above
//!
//! Rendering is left to the caller, which reads colour buffers from
//! [`CubeMeshes`] and supplies pointer positions.

pub mod camera;
pub mod client;
pub mod clipboard;
pub mod command;
pub mod config;
pub mod error;
pub mod hover;
pub mod mapper;
pub mod mesh;
pub mod sequencer;
pub mod session;
pub mod store;
pub mod timer;

pub use camera::{OrbitCamera, Ray, Viewport};
pub use client::{HttpTransformClient, LocalTransformClient, TransformClient};
pub use clipboard::{ClipboardSink, MemoryClipboard};
pub use command::Command;
pub use config::VisConfig;
pub use error::{Error, Result};
pub use hover::{HoverInspector, MarkerCloud, Tooltip};
pub use mapper::{recolor, CubeMeshes};
pub use mesh::ColoredMesh;
pub use sequencer::{PlaybackState, PlaybackStatus, Sequencer};
pub use session::{Session, SessionEvent, SessionHandle, SessionSnapshot};
pub use store::CubeStore;
