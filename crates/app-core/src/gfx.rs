//! GPU-facing vertex/uniform layouts shared with the frontends.
//!
//! Field order matches the vertex attribute layouts declared against
//! `SCENE_WGSL`.

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    pub view_proj: [[f32; 4]; 4],
}

/// World-space glyph quad vertex (words in the 3D scene).
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TextVertex {
    pub pos: [f32; 3],
    pub uv: [f32; 2],
    pub color: [f32; 4],
}

/// Screen-space vertex (hover overlay panel and text), positions in NDC.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct OverlayVertex {
    pub pos_ndc: [f32; 2],
    pub uv: [f32; 2],
    pub color: [f32; 4],
}
