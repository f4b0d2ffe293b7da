//! Pointer picking against animated word nodes.

use glam::Vec3;
use smallvec::SmallVec;

use crate::animate::NodeTransform;
use crate::scene::WordNode;

/// Ray/sphere intersection. Returns the near-hit parameter `t >= 0`, if any.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Pick the node under the pointer ray, testing each node's hit sphere at
/// its rendered (animated) position. The nearest hit wins.
pub fn pick_node(
    nodes: &[WordNode],
    transforms: &[NodeTransform],
    ray_origin: Vec3,
    ray_dir: Vec3,
) -> Option<usize> {
    let mut hits: SmallVec<[(usize, f32); 8]> = SmallVec::new();
    for (i, (node, transform)) in nodes.iter().zip(transforms).enumerate() {
        if let Some(t) = ray_sphere(ray_origin, ray_dir, transform.translation, node.pick_radius())
        {
            hits.push((i, t));
        }
    }
    hits.iter()
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|&(i, _)| i)
}
