//! Vertex hover inspector.
//!
//! A small marker box sits on every vertex of a reference geometry. Pointer moves
//! cast a ray against the markers; hovering one marker long enough reveals a
//! tooltip with its index and position and copies the indices of every vertex at
//! that position to the clipboard.
//!
//! The inspector itself is synchronous. It tells the caller whether to start or
//! cancel the reveal timer through [`HoverAction`], and [`HoverInspector::reveal`]
//! is called when that timer fires.

use std::collections::HashMap;

use glam::{Vec2, Vec3};

use crate::camera::{OrbitCamera, Ray, Viewport};
use crate::mesh::{ColoredMesh, BODY_VERTICES};

/// Edge length of a marker box.
pub const MARKER_SIZE: f32 = 0.01;

/// Gap in pixels between the hovered point and the tooltip's bottom edge.
pub const TOOLTIP_GAP: f32 = 5.0;

/// A marker on one source vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Offset of the vertex in the flat coordinate array (three per vertex)
    pub source_index: usize,
    pub position: Vec3,
    group: usize,
}

/// Markers for a vertex list, with vertices at identical positions grouped
/// when the cloud is built.
#[derive(Debug, Clone)]
pub struct MarkerCloud {
    markers: Vec<Marker>,
    groups: Vec<Vec<usize>>,
    half_size: f32,
}

fn position_key(p: [f32; 3]) -> [u32; 3] {
    // Adding zero folds -0.0 into 0.0
    p.map(|v| (v + 0.0).to_bits())
}

impl MarkerCloud {
    pub fn from_vertices(vertices: &[[f32; 3]]) -> Self {
        let mut by_position: HashMap<[u32; 3], usize> = HashMap::new();
        let mut groups: Vec<Vec<usize>> = Vec::new();
        let mut markers = Vec::with_capacity(vertices.len());

        for (n, &vertex) in vertices.iter().enumerate() {
            let source_index = 3 * n;
            let group = *by_position.entry(position_key(vertex)).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[group].push(source_index);
            markers.push(Marker {
                source_index,
                position: Vec3::from_array(vertex),
                group,
            });
        }

        Self {
            markers,
            groups,
            half_size: MARKER_SIZE / 2.0,
        }
    }

    /// Markers on the wireframe of a box with the given edge length.
    pub fn box_wireframe(edge: f32) -> Self {
        let body = ColoredMesh::sub_cube(Vec3::ZERO, edge);
        Self::from_vertices(&wireframe_vertices(&body.positions()[..BODY_VERTICES]))
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn get(&self, marker: usize) -> Option<&Marker> {
        self.markers.get(marker)
    }

    /// Source indices of every vertex at the same position as `marker`,
    /// including its own.
    pub fn duplicates(&self, marker: usize) -> &[usize] {
        self.markers
            .get(marker)
            .map(|m| self.groups[m.group].as_slice())
            .unwrap_or(&[])
    }

    /// Nearest marker the ray passes through.
    pub fn pick(&self, ray: &Ray) -> Option<Hit> {
        let half = Vec3::splat(self.half_size);
        self.markers
            .iter()
            .enumerate()
            .filter_map(|(i, m)| {
                ray_box(ray, m.position - half, m.position + half).map(|t| Hit {
                    marker: i,
                    point: ray.at(t),
                    distance: t,
                })
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}

/// Slab test. Returns the entry distance, or zero if the origin is inside.
fn ray_box(ray: &Ray, min: Vec3, max: Vec3) -> Option<f32> {
    let mut near = 0.0f32;
    let mut far = f32::INFINITY;
    for axis in 0..3 {
        let origin = ray.origin[axis];
        let direction = ray.direction[axis];
        if direction == 0.0 {
            // Parallel to this slab pair: either always between them or never
            if origin < min[axis] || origin > max[axis] {
                return None;
            }
            continue;
        }
        let t1 = (min[axis] - origin) / direction;
        let t2 = (max[axis] - origin) / direction;
        near = near.max(t1.min(t2));
        far = far.min(t1.max(t2));
        if near > far {
            return None;
        }
    }
    Some(near)
}

/// Line-segment endpoints for the unique edges of a triangle list, two
/// vertices per edge.
pub fn wireframe_vertices(triangles: &[[f32; 3]]) -> Vec<[f32; 3]> {
    let mut seen = std::collections::HashSet::new();
    let mut lines = Vec::new();
    for tri in triangles.chunks_exact(3) {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            let (ka, kb) = (position_key(a), position_key(b));
            let key = if ka <= kb { (ka, kb) } else { (kb, ka) };
            if seen.insert(key) {
                lines.push(a);
                lines.push(b);
            }
        }
    }
    lines
}

/// Where a pointer ray met a marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Index into [`MarkerCloud::markers`]
    pub marker: usize,
    /// Intersection point in world space
    pub point: Vec3,
    pub distance: f32,
}

/// Approximate text box metrics used to centre the tooltip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipStyle {
    pub char_width: f32,
    pub line_height: f32,
    pub padding: f32,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            char_width: 7.0,
            line_height: 16.0,
            padding: 4.0,
        }
    }
}

impl TooltipStyle {
    pub fn measure(&self, text: &str) -> Vec2 {
        Vec2::new(
            text.chars().count() as f32 * self.char_width + 2.0 * self.padding,
            self.line_height + 2.0 * self.padding,
        )
    }
}

/// A visible tooltip, positioned in page pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub text: String,
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Result of a reveal: the tooltip to show and the text to copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Reveal {
    pub tooltip: Tooltip,
    pub clipboard: String,
}

/// What the caller should do with the reveal timer after a pointer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverAction {
    /// Nothing under the pointer: cancel the timer, the tooltip is hidden
    Hide,
    /// A different marker is hovered: restart the timer, the tooltip is hidden
    StartReveal,
    /// Still on the same marker: leave the timer alone
    Track,
}

pub struct HoverInspector {
    cloud: MarkerCloud,
    style: TooltipStyle,
    hovered: Option<Hit>,
    pending: bool,
    tooltip: Option<Tooltip>,
}

impl HoverInspector {
    pub fn new(cloud: MarkerCloud, style: TooltipStyle) -> Self {
        Self {
            cloud,
            style,
            hovered: None,
            pending: false,
            tooltip: None,
        }
    }

    pub fn cloud(&self) -> &MarkerCloud {
        &self.cloud
    }

    pub fn hovered(&self) -> Option<&Hit> {
        self.hovered.as_ref()
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    /// Whether a reveal is waiting on the timer.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn pointer_moved(&mut self, ray: &Ray) -> HoverAction {
        match (self.cloud.pick(ray), self.hovered) {
            (None, _) => {
                self.hovered = None;
                self.pending = false;
                self.tooltip = None;
                HoverAction::Hide
            }
            (Some(hit), Some(previous)) if hit.marker == previous.marker => {
                self.hovered = Some(hit);
                HoverAction::Track
            }
            (Some(hit), _) => {
                self.hovered = Some(hit);
                self.pending = true;
                self.tooltip = None;
                HoverAction::StartReveal
            }
        }
    }

    /// The reveal timer fired. Returns `None` if nothing is pending.
    pub fn reveal(&mut self, camera: &OrbitCamera, viewport: &Viewport) -> Option<Reveal> {
        if !std::mem::take(&mut self.pending) {
            return None;
        }
        let hit = self.hovered?;
        let marker = self.cloud.get(hit.marker)?;

        let text = tooltip_text(marker);
        let size = self.style.measure(&text);
        let ndc = camera.project(hit.point, viewport.aspect()).truncate();
        let anchor = viewport.to_screen(ndc);

        let tooltip = Tooltip {
            left: anchor.x - size.x / 2.0,
            top: anchor.y - size.y - TOOLTIP_GAP,
            width: size.x,
            height: size.y,
            text,
        };
        self.tooltip = Some(tooltip.clone());

        Some(Reveal {
            tooltip,
            clipboard: clipboard_text(self.cloud.duplicates(hit.marker)),
        })
    }
}

fn fixed3(v: f32) -> String {
    format!("{:.3}", v + 0.0)
}

/// `idx: <source index>, pos: [x,y,z]` with three decimals.
pub fn tooltip_text(marker: &Marker) -> String {
    let [x, y, z] = marker.position.to_array();
    format!(
        "idx: {}, pos: [{},{},{}]",
        marker.source_index,
        fixed3(x),
        fixed3(y),
        fixed3(z)
    )
}

/// Bracketed, comma separated index list.
pub fn clipboard_text(indices: &[usize]) -> String {
    let joined: Vec<String> = indices.iter().map(usize::to_string).collect();
    format!("[{}]", joined.join(","))
}
