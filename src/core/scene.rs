//! Hero sculpture scene
//!
//! A canned, declarative scene graph (two tori, two accent spheres, ambient and
//! directional light, orbit controls) plus the math needed to turn it into
//! depth-sorted 2D primitives for a canvas:
//! - `Scene::sculpture()` describes the scene
//! - `OrbitState` tracks the orbiting camera (auto-rotate and pointer drag)
//! - `Scene::render()` projects and shades one frame at a given elapsed time

use std::f64::consts::{PI, TAU};
use std::ops::{Add, Mul, Neg, Sub};

/// Error raised while attaching the renderer to a canvas element
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    #[error("browser window is unavailable")]
    WindowUnavailable,

    #[error("2d rendering context is unavailable")]
    ContextUnavailable,

    #[error("canvas draw call failed: {0}")]
    Draw(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction; zero-length vectors are returned unchanged
    pub fn normalize(self) -> Vec3 {
        let len = self.length();
        if len < f64::EPSILON { self } else { self * (1.0 / len) }
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, k: f64) -> Vec3 {
        Vec3::new(self.x * k, self.y * k, self.z * k)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

/// Euler rotation in radians, applied in XYZ order (`Rx · Ry · Rz · v`)
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Euler {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Euler {
    pub fn apply(&self, v: Vec3) -> Vec3 {
        let (sz, cz) = self.z.sin_cos();
        let v = Vec3::new(v.x * cz - v.y * sz, v.x * sz + v.y * cz, v.z);
        let (sy, cy) = self.y.sin_cos();
        let v = Vec3::new(v.x * cy + v.z * sy, v.y, -v.x * sy + v.z * cy);
        let (sx, cx) = self.x.sin_cos();
        Vec3::new(v.x, v.y * cx - v.z * sx, v.y * sx + v.z * cx)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Build from a `0xRRGGBB` literal
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS colour after applying diffuse and specular light terms
    pub fn lit(&self, diffuse: f64, specular: f64) -> String {
        let channel = |c: u8| -> u8 {
            (f64::from(c) * diffuse + 255.0 * specular)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        format!(
            "rgb({}, {}, {})",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Geometry {
    /// Ring lying in the local XY plane
    Torus {
        radius: f64,
        tube: f64,
        radial_segments: u32,
        tubular_segments: u32,
    },
    Sphere {
        radius: f64,
        width_segments: u32,
        height_segments: u32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Color,
    pub metalness: f64,
    pub roughness: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mesh {
    pub geometry: Geometry,
    pub material: Material,
    pub position: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Light {
    Ambient { intensity: f64 },
    /// Shines from `position` towards the origin
    Directional { position: Vec3, intensity: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view in degrees
    pub fov_deg: f64,
    pub near: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitControls {
    pub enable_zoom: bool,
    pub enable_pan: bool,
    pub enable_rotate: bool,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f64,
    pub rotate_speed: f64,
}

/// Gentle bob-and-wobble wrapper around the sculpture
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatMotion {
    pub speed: f64,
    pub rotation_intensity: f64,
    pub float_intensity: f64,
}

impl FloatMotion {
    pub fn rotation(&self, t: f64) -> Euler {
        let phase = t / 4.0 * self.speed;
        Euler {
            x: phase.cos() / 8.0 * self.rotation_intensity,
            y: phase.sin() / 8.0 * self.rotation_intensity,
            z: phase.sin() / 20.0 * self.rotation_intensity,
        }
    }

    /// Vertical offset, within ±0.1 scaled by the float intensity
    pub fn lift(&self, t: f64) -> f64 {
        (t / 4.0 * self.speed).sin() / 10.0 * self.float_intensity
    }
}

/// Rotation of the sculpture group after `t` seconds
pub fn sculpture_rotation(t: f64) -> Euler {
    Euler {
        x: (t * 0.3).sin() * 0.1,
        y: t * 0.25,
        z: 0.0,
    }
}

/// Azimuth change per second produced by auto-rotate at the given speed
pub fn auto_rotate_rate(speed: f64) -> f64 {
    TAU / 60.0 * speed
}

const POLAR_EPSILON: f64 = 1e-3;

/// Spherical camera coordinates around the orbit target
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitState {
    pub radius: f64,
    /// Angle around the vertical axis, measured from +Z towards +X
    pub azimuth: f64,
    /// Angle from the +Y axis
    pub polar: f64,
}

impl OrbitState {
    pub fn from_camera(camera: &Camera) -> Self {
        let offset = camera.position - camera.target;
        let radius = offset.length();
        let polar = if radius < f64::EPSILON {
            PI / 2.0
        } else {
            (offset.y / radius).clamp(-1.0, 1.0).acos()
        };
        Self {
            radius,
            azimuth: offset.x.atan2(offset.z),
            polar: polar.clamp(POLAR_EPSILON, PI - POLAR_EPSILON),
        }
    }

    /// Apply auto-rotation for `dt` seconds
    pub fn advance(&mut self, dt: f64, controls: &OrbitControls) {
        if controls.auto_rotate && dt > 0.0 {
            self.rotate_left(auto_rotate_rate(controls.auto_rotate_speed) * dt);
        }
    }

    /// Apply a pointer drag of `(dx, dy)` pixels on a viewport of the given height
    pub fn drag(&mut self, dx: f64, dy: f64, viewport_height: f64, controls: &OrbitControls) {
        if !controls.enable_rotate || viewport_height <= 0.0 {
            return;
        }
        self.rotate_left(TAU * dx / viewport_height * controls.rotate_speed);
        self.polar = (self.polar - TAU * dy / viewport_height * controls.rotate_speed)
            .clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
    }

    fn rotate_left(&mut self, angle: f64) {
        self.azimuth = (self.azimuth - angle + PI).rem_euclid(TAU) - PI;
    }

    pub fn eye(&self, target: Vec3) -> Vec3 {
        let (sp, cp) = self.polar.sin_cos();
        let (sa, ca) = self.azimuth.sin_cos();
        target + Vec3::new(self.radius * sp * sa, self.radius * cp, self.radius * sp * ca)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    /// Distance along the view direction
    pub depth: f64,
}

/// Perspective projection for a camera looking at a target
#[derive(Clone, Copy, Debug)]
pub struct Projector {
    eye: Vec3,
    right: Vec3,
    up: Vec3,
    forward: Vec3,
    focal: f64,
    near: f64,
    center_x: f64,
    center_y: f64,
}

impl Projector {
    pub fn new(eye: Vec3, target: Vec3, fov_deg: f64, near: f64, viewport: Viewport) -> Self {
        let forward = (target - eye).normalize();
        let mut right = forward.cross(Vec3::UP);
        if right.length() < f64::EPSILON {
            right = Vec3::new(1.0, 0.0, 0.0);
        }
        let right = right.normalize();
        let up = right.cross(forward);
        let focal = (viewport.height / 2.0) / (fov_deg.to_radians() / 2.0).tan();
        Self {
            eye,
            right,
            up,
            forward,
            focal,
            near,
            center_x: viewport.width / 2.0,
            center_y: viewport.height / 2.0,
        }
    }

    /// Screen position of a world point, `None` when behind the near plane
    pub fn project(&self, p: Vec3) -> Option<Projected> {
        let d = p - self.eye;
        let depth = d.dot(self.forward);
        if depth <= self.near {
            return None;
        }
        Some(Projected {
            x: self.center_x + d.dot(self.right) * self.focal / depth,
            y: self.center_y - d.dot(self.up) * self.focal / depth,
            depth,
        })
    }

    /// Pixels per world unit at the given depth
    pub fn scale_at(&self, depth: f64) -> f64 {
        self.focal / depth
    }
}

/// A shaded 2D draw call
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Arc {
        points: Vec<(f64, f64)>,
        color: String,
        width: f64,
        depth: f64,
    },
    Disc {
        x: f64,
        y: f64,
        radius: f64,
        color: String,
        highlight: String,
        depth: f64,
    },
}

impl Primitive {
    pub fn depth(&self) -> f64 {
        match self {
            Primitive::Arc { depth, .. } | Primitive::Disc { depth, .. } => *depth,
        }
    }
}

/// Cross-section rings drawn per tubular segment
const TORUS_RING_STRIDE: u32 = 4;
/// Loops drawn along the ring at fixed tube angles
const TORUS_MERIDIANS: u32 = 8;
/// Arcs each loop is split into for shading and back-face culling
const TORUS_ARCS: u32 = 4;
const MERIDIAN_ARCS: u32 = 16;

/// Transform from mesh-local to world space for one frame
#[derive(Clone, Copy, Debug)]
struct Pose {
    group: Euler,
    float: Euler,
    lift: f64,
}

impl Pose {
    fn point(&self, local: Vec3) -> Vec3 {
        self.group
            .apply(self.float.apply(local) + Vec3::new(0.0, self.lift, 0.0))
    }

    fn normal(&self, local: Vec3) -> Vec3 {
        self.group.apply(self.float.apply(local)).normalize()
    }
}

struct FrameContext<'a> {
    pose: Pose,
    projector: Projector,
    eye: Vec3,
    lights: &'a [Light],
}

impl FrameContext<'_> {
    /// Diffuse and specular terms for a surface point
    fn shade(&self, material: &Material, normal: Vec3, point: Vec3) -> (f64, f64) {
        let view = (self.eye - point).normalize();
        let shininess = 2.0 + (1.0 - material.roughness) * 62.0;
        let mut diffuse = 0.0;
        let mut specular = 0.0;
        for light in self.lights {
            match *light {
                Light::Ambient { intensity } => diffuse += intensity,
                Light::Directional {
                    position,
                    intensity,
                } => {
                    let to_light = position.normalize();
                    diffuse += intensity * normal.dot(to_light).max(0.0);
                    let half = (to_light + view).normalize();
                    specular += intensity * normal.dot(half).max(0.0).powf(shininess);
                }
            }
        }
        let diffuse = diffuse * (1.0 - 0.4 * material.metalness);
        let specular = specular * material.metalness * (1.0 - material.roughness) * 0.6;
        (diffuse.clamp(0.0, 1.6), specular.clamp(0.0, 1.0))
    }

    /// Emit a closed parametric loop as culled, shaded arcs.
    ///
    /// `surface(s)` maps `s ∈ [0, 1)` to a mesh-local point and normal.
    fn push_loop<F>(
        &self,
        out: &mut Vec<Primitive>,
        material: &Material,
        samples: u32,
        arcs: u32,
        width: f64,
        surface: F,
    ) where
        F: Fn(f64) -> (Vec3, Vec3),
    {
        let arcs = arcs.max(1);
        let steps = (samples / arcs).max(2);
        for a in 0..arcs {
            let (mid_local, mid_normal) = surface((f64::from(a) + 0.5) / f64::from(arcs));
            let mid = self.pose.point(mid_local);
            let normal = self.pose.normal(mid_normal);
            if normal.dot(self.eye - mid) <= 0.0 {
                continue;
            }
            let Some(center) = self.projector.project(mid) else {
                continue;
            };

            let points: Option<Vec<(f64, f64)>> = (0..=steps)
                .map(|k| {
                    let s = (f64::from(a) + f64::from(k) / f64::from(steps)) / f64::from(arcs);
                    let (local, _) = surface(s);
                    self.projector
                        .project(self.pose.point(local))
                        .map(|p| (p.x, p.y))
                })
                .collect();
            let Some(points) = points else {
                continue;
            };

            let (diffuse, specular) = self.shade(material, normal, mid);
            out.push(Primitive::Arc {
                points,
                color: material.color.lit(diffuse, specular),
                width: (width * self.projector.scale_at(center.depth)).max(1.0),
                depth: center.depth,
            });
        }
    }

    fn push_mesh(&self, out: &mut Vec<Primitive>, mesh: &Mesh) {
        match mesh.geometry {
            Geometry::Torus {
                radius,
                tube,
                radial_segments,
                tubular_segments,
            } => {
                let torus = move |u: f64, v: f64| -> (Vec3, Vec3) {
                    let (su, cu) = (u * TAU).sin_cos();
                    let (sv, cv) = (v * TAU).sin_cos();
                    let normal = Vec3::new(cv * cu, cv * su, sv);
                    let center = Vec3::new(radius * cu, radius * su, 0.0);
                    (mesh.position + center + normal * tube, normal)
                };
                let width = tube * 0.18;

                let rings = (tubular_segments / TORUS_RING_STRIDE).max(3);
                for i in 0..rings {
                    let u = f64::from(i) / f64::from(rings);
                    self.push_loop(out, &mesh.material, radial_segments, TORUS_ARCS, width, |v| {
                        torus(u, v)
                    });
                }
                for j in 0..TORUS_MERIDIANS {
                    let v = f64::from(j) / f64::from(TORUS_MERIDIANS);
                    self.push_loop(
                        out,
                        &mesh.material,
                        tubular_segments,
                        MERIDIAN_ARCS,
                        width,
                        |u| torus(u, v),
                    );
                }
            }
            Geometry::Sphere { radius, .. } => {
                let center = self.pose.point(mesh.position);
                let Some(projected) = self.projector.project(center) else {
                    return;
                };
                let to_eye = (self.eye - center).normalize();
                let (diffuse, specular) = self.shade(&mesh.material, to_eye, center);

                let key = self
                    .lights
                    .iter()
                    .find_map(|l| match *l {
                        Light::Directional { position, .. } => Some(position.normalize()),
                        Light::Ambient { .. } => None,
                    })
                    .unwrap_or(Vec3::UP);
                let lit_normal = (to_eye + key).normalize();
                let (hd, hs) = self.shade(&mesh.material, lit_normal, center);

                out.push(Primitive::Disc {
                    x: projected.x,
                    y: projected.y,
                    radius: radius * self.projector.scale_at(projected.depth),
                    color: mesh.material.color.lit(diffuse, specular),
                    highlight: mesh.material.color.lit(hd, hs),
                    depth: projected.depth,
                });
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub camera: Camera,
    pub lights: Vec<Light>,
    pub meshes: Vec<Mesh>,
    pub float: FloatMotion,
    pub controls: OrbitControls,
}

impl Scene {
    /// The hero sculpture: two metallic tori with floating accent spheres
    pub fn sculpture() -> Self {
        let metal = |rgb: u32, roughness: f64| Material {
            color: Color::hex(rgb),
            metalness: 0.9,
            roughness,
        };

        Self {
            camera: Camera {
                position: Vec3::new(0.0, 1.6, 4.0),
                target: Vec3::ZERO,
                fov_deg: 45.0,
                near: 0.1,
            },
            lights: vec![
                Light::Ambient { intensity: 0.6 },
                Light::Directional {
                    position: Vec3::new(5.0, 5.0, 5.0),
                    intensity: 1.0,
                },
            ],
            meshes: vec![
                Mesh {
                    geometry: Geometry::Torus {
                        radius: 1.2,
                        tube: 0.18,
                        radial_segments: 32,
                        tubular_segments: 128,
                    },
                    material: metal(0x7C3AED, 0.2),
                    position: Vec3::new(0.0, 0.2, 0.0),
                },
                Mesh {
                    geometry: Geometry::Torus {
                        radius: 0.8,
                        tube: 0.12,
                        radial_segments: 30,
                        tubular_segments: 120,
                    },
                    material: metal(0x06B6D4, 0.2),
                    position: Vec3::ZERO,
                },
                Mesh {
                    geometry: Geometry::Sphere {
                        radius: 0.12,
                        width_segments: 32,
                        height_segments: 32,
                    },
                    material: metal(0xF59E0B, 0.1),
                    position: Vec3::new(1.6, 0.4, 0.4),
                },
                Mesh {
                    geometry: Geometry::Sphere {
                        radius: 0.14,
                        width_segments: 32,
                        height_segments: 32,
                    },
                    material: metal(0xEF4444, 0.1),
                    position: Vec3::new(-1.5, -0.2, -0.5),
                },
            ],
            float: FloatMotion {
                speed: 1.0,
                rotation_intensity: 0.6,
                float_intensity: 1.0,
            },
            controls: OrbitControls {
                enable_zoom: false,
                enable_pan: false,
                enable_rotate: true,
                auto_rotate: true,
                auto_rotate_speed: 0.35,
                rotate_speed: 1.0,
            },
        }
    }

    pub fn initial_orbit(&self) -> OrbitState {
        OrbitState::from_camera(&self.camera)
    }

    /// Project and shade the scene `t` seconds after mount.
    ///
    /// Primitives are ordered far to near so they can be painted in sequence.
    pub fn render(&self, t: f64, orbit: &OrbitState, viewport: Viewport) -> Vec<Primitive> {
        if viewport.is_empty() {
            return Vec::new();
        }

        let eye = orbit.eye(self.camera.target);
        let frame = FrameContext {
            pose: Pose {
                group: sculpture_rotation(t),
                float: self.float.rotation(t),
                lift: self.float.lift(t),
            },
            projector: Projector::new(
                eye,
                self.camera.target,
                self.camera.fov_deg,
                self.camera.near,
                viewport,
            ),
            eye,
            lights: &self.lights,
        };

        let mut out = Vec::new();
        for mesh in &self.meshes {
            frame.push_mesh(&mut out, mesh);
        }
        out.sort_by(|a, b| b.depth().total_cmp(&a.depth()));
        out
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::sculpture()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn viewport() -> Viewport {
        Viewport {
            width: 800.0,
            height: 600.0,
        }
    }

    #[test]
    fn test_sculpture_rotation_at_start() {
        let r = sculpture_rotation(0.0);
        assert!(r.x.abs() < EPS);
        assert!(r.y.abs() < EPS);
    }

    #[test]
    fn test_sculpture_rotation_progresses() {
        assert!((sculpture_rotation(4.0).y - 1.0).abs() < EPS);
        for i in 0..200 {
            let r = sculpture_rotation(f64::from(i) * 0.37);
            assert!(r.x.abs() <= 0.1 + EPS);
        }
    }

    #[test]
    fn test_float_motion_at_start() {
        let float = Scene::sculpture().float;
        let r = float.rotation(0.0);
        assert!((r.x - 0.075).abs() < EPS);
        assert!(r.y.abs() < EPS);
        assert!(r.z.abs() < EPS);
        assert!(float.lift(0.0).abs() < EPS);
        assert!(float.lift(2.0 * PI).abs() <= 0.1 + EPS);
    }

    #[test]
    fn test_euler_rotates_about_y() {
        let r = Euler {
            x: 0.0,
            y: PI / 2.0,
            z: 0.0,
        };
        let v = r.apply(Vec3::new(1.0, 0.0, 0.0));
        assert!(v.x.abs() < EPS);
        assert!((v.z + 1.0).abs() < EPS);
    }

    #[test]
    fn test_color_hex() {
        assert_eq!(Color::hex(0x7C3AED).to_hex(), "#7c3aed");
        assert_eq!(Color::hex(0xF59E0B).lit(1.0, 0.0), "rgb(245, 158, 11)");
        assert_eq!(Color::hex(0x808080).lit(10.0, 0.0), "rgb(255, 255, 255)");
    }

    #[test]
    fn test_orbit_from_camera() {
        let scene = Scene::sculpture();
        let orbit = scene.initial_orbit();
        assert!((orbit.radius - (1.6f64 * 1.6 + 16.0).sqrt()).abs() < EPS);
        assert!(orbit.azimuth.abs() < EPS);

        let eye = orbit.eye(scene.camera.target);
        assert!((eye - scene.camera.position).length() < 1e-6);
    }

    #[test]
    fn test_auto_rotate_rate() {
        assert!((auto_rotate_rate(0.35) - TAU / 60.0 * 0.35).abs() < EPS);

        let scene = Scene::sculpture();
        let mut orbit = scene.initial_orbit();
        orbit.advance(1.0, &scene.controls);
        assert!((orbit.azimuth + auto_rotate_rate(0.35)).abs() < EPS);
    }

    #[test]
    fn test_auto_rotate_disabled() {
        let mut scene = Scene::sculpture();
        scene.controls.auto_rotate = false;
        let mut orbit = scene.initial_orbit();
        orbit.advance(10.0, &scene.controls);
        assert!(orbit.azimuth.abs() < EPS);
    }

    #[test]
    fn test_azimuth_stays_bounded() {
        let scene = Scene::sculpture();
        let mut orbit = scene.initial_orbit();
        for _ in 0..10_000 {
            orbit.advance(1.0, &scene.controls);
        }
        assert!(orbit.azimuth >= -PI && orbit.azimuth < PI);
    }

    #[test]
    fn test_drag_clamps_polar() {
        let scene = Scene::sculpture();
        let mut orbit = scene.initial_orbit();
        orbit.drag(0.0, 10_000.0, 600.0, &scene.controls);
        assert!(orbit.polar > 0.0);
        orbit.drag(0.0, -10_000.0, 600.0, &scene.controls);
        assert!(orbit.polar < PI);
    }

    #[test]
    fn test_drag_ignored_when_rotate_disabled() {
        let mut scene = Scene::sculpture();
        scene.controls.enable_rotate = false;
        let before = scene.initial_orbit();
        let mut orbit = before;
        orbit.drag(120.0, 40.0, 600.0, &scene.controls);
        assert_eq!(orbit, before);
    }

    #[test]
    fn test_target_projects_to_center() {
        let scene = Scene::sculpture();
        let eye = scene.initial_orbit().eye(Vec3::ZERO);
        let projector = Projector::new(eye, Vec3::ZERO, 45.0, 0.1, viewport());
        let p = projector.project(Vec3::ZERO).unwrap();
        assert!((p.x - 400.0).abs() < 1e-6);
        assert!((p.y - 300.0).abs() < 1e-6);
    }

    #[test]
    fn test_points_behind_camera_are_culled() {
        let projector = Projector::new(
            Vec3::new(0.0, 0.0, 4.0),
            Vec3::ZERO,
            45.0,
            0.1,
            viewport(),
        );
        assert!(projector.project(Vec3::new(0.0, 0.0, 10.0)).is_none());
    }

    #[test]
    fn test_render_is_depth_sorted() {
        let scene = Scene::sculpture();
        let frame = scene.render(1.5, &scene.initial_orbit(), viewport());
        assert!(!frame.is_empty());
        assert!(frame.windows(2).all(|w| w[0].depth() >= w[1].depth()));
    }

    #[test]
    fn test_render_draws_both_spheres() {
        let scene = Scene::sculpture();
        let frame = scene.render(0.0, &scene.initial_orbit(), viewport());
        let discs = frame
            .iter()
            .filter(|p| matches!(p, Primitive::Disc { .. }))
            .count();
        assert_eq!(discs, 2);
    }

    #[test]
    fn test_render_empty_viewport() {
        let scene = Scene::sculpture();
        let frame = scene.render(
            0.0,
            &scene.initial_orbit(),
            Viewport {
                width: 0.0,
                height: 300.0,
            },
        );
        assert!(frame.is_empty());
    }

    #[test]
    fn test_scene_error_messages() {
        assert_eq!(
            SceneError::ContextUnavailable.to_string(),
            "2d rendering context is unavailable"
        );
        assert!(SceneError::Draw("boom".into()).to_string().contains("boom"));
    }
}
