//! Orbit camera, viewport mapping and picking rays.

use glam::{Mat4, Vec2, Vec3};

/// Canvas size and its offset within the page, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    /// Offset of the canvas from the left edge of the page
    pub left: f32,
    /// Offset of the canvas from the top edge of the page
    pub top: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            left: 0.0,
            top: 0.0,
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Pointer position in page pixels to normalised device coordinates.
    ///
    /// Samples the centre of the pixel under the pointer.
    pub fn to_ndc(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(
            ((x - self.left + 0.5) / self.width) * 2.0 - 1.0,
            -((y - self.top + 0.5) / self.height) * 2.0 + 1.0,
        )
    }

    /// The pointer position that [`Viewport::to_ndc`] maps to `ndc`.
    pub fn pointer_at(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.width - 0.5 + self.left,
            (1.0 - ndc.y) * 0.5 * self.height - 0.5 + self.top,
        )
    }

    /// Normalised device coordinates to page pixels.
    pub fn to_screen(&self, ndc: Vec2) -> Vec2 {
        let half_width = self.width / 2.0;
        let half_height = self.height / 2.0;
        Vec2::new(
            ndc.x * half_width + half_width + self.left,
            -ndc.y * half_height + half_height + self.top,
        )
    }
}

/// A half-line in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Camera orbiting a fixed target. Dragging rotates, scrolling zooms, there is
/// no panning.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Point the camera looks at and orbits around
    pub target: Vec3,
    /// Distance from the target
    pub distance: f32,
    /// Azimuth in radians, zero looking down -Z
    pub yaw: f32,
    /// Elevation in radians
    pub pitch: f32,
    /// Vertical field of view in radians
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub zoom_speed: f32,
    pub rotate_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            distance: 5.0,
            yaw: 0.0,
            pitch: 0.0,
            fov: 75f32.to_radians(),
            near: 0.1,
            far: 1000.0,
            zoom_speed: 0.3,
            rotate_speed: 1.0,
            min_distance: 0.5,
            max_distance: 100.0,
        }
    }
}

impl OrbitCamera {
    /// Camera position in world space.
    pub fn position(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target + Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw) * self.distance
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov, aspect, self.near, self.far)
    }

    pub fn view_projection_matrix(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// World point to normalised device coordinates.
    pub fn project(&self, point: Vec3, aspect: f32) -> Vec3 {
        self.view_projection_matrix(aspect).project_point3(point)
    }

    /// Ray from the camera through a point given in normalised device coordinates.
    pub fn ray_through(&self, ndc: Vec2, aspect: f32) -> Ray {
        let inverse = self.view_projection_matrix(aspect).inverse();
        let origin = self.position();
        let through = inverse.project_point3(ndc.extend(0.5));
        Ray::new(origin, through - origin)
    }

    /// Rotate by a pointer drag delta in pixels. A full viewport height of
    /// travel turns one revolution.
    pub fn orbit(&mut self, dx: f32, dy: f32, viewport: &Viewport) {
        let turn = std::f32::consts::TAU * self.rotate_speed / viewport.height;
        self.yaw -= dx * turn;
        self.pitch += dy * turn;

        // Keep off the poles
        let max_pitch = std::f32::consts::FRAC_PI_2 - 0.01;
        self.pitch = self.pitch.clamp(-max_pitch, max_pitch);
    }

    /// Scroll wheel zoom. Negative deltas (scrolling up) move closer.
    pub fn zoom(&mut self, delta: f32) {
        let scale = 0.95f32.powf(self.zoom_speed);
        if delta < 0.0 {
            self.distance *= scale;
        } else if delta > 0.0 {
            self.distance /= scale;
        }
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);
    }
}
