use glam::Vec3;
use std::f32::consts::TAU;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    fn new(p: Vec3, n: Vec3) -> Self {
        Self {
            position: p.to_array(),
            normal: n.normalize_or_zero().to_array(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

/// Flat-shaded octahedron: one triangle per octant, outward winding.
pub fn octahedron(radius: f32) -> MeshData {
    let mut m = MeshData::default();
    for sx in [1.0_f32, -1.0] {
        for sy in [1.0_f32, -1.0] {
            for sz in [1.0_f32, -1.0] {
                let a = Vec3::X * sx * radius;
                let mut b = Vec3::Y * sy * radius;
                let mut c = Vec3::Z * sz * radius;
                if sx * sy * sz < 0.0 {
                    std::mem::swap(&mut b, &mut c);
                }
                let n = Vec3::new(sx, sy, sz);
                let base = m.vertices.len() as u16;
                m.vertices
                    .extend([Vertex::new(a, n), Vertex::new(b, n), Vertex::new(c, n)]);
                m.indices.extend([base, base + 1, base + 2]);
            }
        }
    }
    m
}

/// Ring around +Z in the XY plane; `radial` segments across the tube,
/// `tubular` segments around the ring.
pub fn torus(radius: f32, tube: f32, radial: u32, tubular: u32) -> MeshData {
    let mut m = MeshData::default();
    for j in 0..=radial {
        let v = j as f32 / radial as f32 * TAU;
        for i in 0..=tubular {
            let u = i as f32 / tubular as f32 * TAU;
            let p = Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );
            let centre = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            m.vertices.push(Vertex::new(p, p - centre));
        }
    }
    let row = (tubular + 1) as u16;
    for j in 1..=radial as u16 {
        for i in 1..=tubular as u16 {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            m.indices.extend([a, b, d, b, c, d]);
        }
    }
    m
}

/// Axis-aligned cube with per-face normals.
pub fn cube(size: f32) -> MeshData {
    let h = size * 0.5;
    // (normal, u, v) with u × v = normal
    let faces = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::Y, Vec3::X),
    ];
    let mut m = MeshData::default();
    for (n, u, v) in faces {
        let base = m.vertices.len() as u16;
        for (su, sv) in [(-1.0_f32, -1.0_f32), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            m.vertices.push(Vertex::new((n + u * su + v * sv) * h, n));
        }
        m.indices
            .extend([base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    m
}
