//! Request and response payloads of the transformation service.

use serde::{Deserialize, Serialize};

use crate::facelet::FaceletState;

/// Body of `POST /cube`: the current layout and the move symbols to apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformRequest {
    #[serde(rename = "CubeLayout")]
    pub cube_layout: FaceletState,
    #[serde(rename = "Transformation")]
    pub transformation: String,
}

impl TransformRequest {
    pub fn new(cube_layout: FaceletState, symbol: char) -> Self {
        Self {
            cube_layout,
            transformation: symbol.to_string(),
        }
    }
}

/// Response to `POST /cube`: the new layout as a bare array.
///
/// Kept as raw codes so the receiving side decides how to reject a malformed
/// layout.
pub type TransformResponse = Vec<u8>;
