//! Per-frame orchestration: word-set swaps, camera, animation, hover
//! picking, and geometry building for the renderer.

use std::time::Instant;

use app_core::{
    pick_node, tick, CursorAffordance, NodeTransform, NodeVisual, OrbitCamera, OverlayVertex,
    TextVertex, Uniforms, WordScene,
};
use glam::{Mat3, Vec3};
use winit::window::CursorIcon;

use crate::fetch::{self, WordMailbox};
use crate::gpu::GpuState;
use crate::text::{ndc_from_px, GlyphAtlas, GlyphQuad, ATLAS_FONT_PX};

// Overlay layout, in surface pixels / atlas-relative scales.
const OVERLAY_TITLE_SCALE: f32 = 0.55;
const OVERLAY_DETAIL_SCALE: f32 = 0.42;
const OVERLAY_PADDING: f32 = 14.0;
const OVERLAY_LINE_GAP: f32 = 6.0;
const OVERLAY_BORDER: f32 = 2.0;
const OVERLAY_LIFT: f32 = 16.0;

pub struct FrameContext {
    pub scene: WordScene,
    pub camera: OrbitCamera,
    mailbox: WordMailbox,
    cursor: Option<(f32, f32)>,
    start: Instant,
    last_frame: Instant,
    transforms: Vec<NodeTransform>,
    draw_order: Vec<usize>,
    quads: Vec<GlyphQuad>,
    word_verts: Vec<TextVertex>,
    panel_verts: Vec<OverlayVertex>,
    overlay_verts: Vec<OverlayVertex>,
}

impl FrameContext {
    pub fn new(mailbox: WordMailbox) -> Self {
        let now = Instant::now();
        Self {
            scene: WordScene::new(),
            camera: OrbitCamera::new(),
            mailbox,
            cursor: None,
            start: now,
            last_frame: now,
            transforms: Vec::new(),
            draw_order: Vec::new(),
            quads: Vec::new(),
            word_verts: Vec::new(),
            panel_verts: Vec::new(),
            overlay_verts: Vec::new(),
        }
    }

    pub fn on_cursor_moved(&mut self, x: f32, y: f32) {
        if let Some((px, py)) = self.cursor {
            let (dx, dy) = (x - px, y - py);
            if self.camera.is_rotating() {
                self.camera.rotate(dx, dy);
            } else if self.camera.is_panning() {
                self.camera.pan(dx, dy);
            }
        }
        self.cursor = Some((x, y));
    }

    pub fn on_rotate_button(&mut self, pressed: bool) {
        if pressed {
            self.camera.begin_rotate();
        } else {
            self.camera.end_rotate();
        }
    }

    pub fn on_pan_button(&mut self, pressed: bool) {
        if pressed {
            self.camera.begin_pan();
        } else {
            self.camera.end_pan();
        }
    }

    pub fn on_scroll(&mut self, lines: f32) {
        self.camera.zoom(lines);
    }

    pub fn frame(
        &mut self,
        gpu: &mut GpuState<'_>,
        atlas: &mut GlyphAtlas,
    ) -> Result<(), wgpu::SurfaceError> {
        // Swap in a freshly delivered word set, whole or not at all.
        if let Some(entries) = fetch::take(&self.mailbox) {
            for entry in &entries {
                atlas.ensure_chars(&entry.word);
            }
            self.scene.set_words(entries);
        }
        atlas.upload_if_dirty(&gpu.queue);

        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        let t = (now - self.start).as_secs_f32();

        self.camera.advance(dt);
        tick(&self.scene, t, &mut self.transforms);

        // Hover resolution from the last known pointer position. Skipped
        // while a drag owns the pointer.
        if !self.camera.is_rotating() && !self.camera.is_panning() {
            if let Some((x, y)) = self.cursor {
                let (origin, dir) = self.camera.screen_to_world_ray(
                    x,
                    y,
                    gpu.width as f32,
                    gpu.height as f32,
                );
                let hit = pick_node(self.scene.nodes(), &self.transforms, origin, dir);
                if let Some(affordance) = self.scene.set_hovered(hit) {
                    gpu.window.set_cursor_icon(match affordance {
                        CursorAffordance::Pointer => CursorIcon::Pointer,
                        CursorAffordance::Default => CursorIcon::Default,
                    });
                }
            }
        }

        self.build_word_geometry(atlas);
        self.build_overlay_geometry(atlas, gpu.width as f32, gpu.height as f32);

        let uniforms = Uniforms {
            view_proj: self
                .camera
                .view_proj(gpu.width as f32 / gpu.height.max(1) as f32)
                .to_cols_array_2d(),
        };
        gpu.render(
            uniforms,
            &self.word_verts,
            &self.panel_verts,
            &self.overlay_verts,
        )
    }

    /// Build world-space glyph quads for every word, farthest first so alpha
    /// blending composes correctly without a depth buffer.
    fn build_word_geometry(&mut self, atlas: &GlyphAtlas) {
        self.word_verts.clear();
        let eye = self.camera.eye();

        self.draw_order.clear();
        self.draw_order.extend(0..self.scene.nodes().len());
        let transforms = &self.transforms;
        self.draw_order.sort_by(|&a, &b| {
            let da = (transforms[a].translation - eye).length_squared();
            let db = (transforms[b].translation - eye).length_squared();
            db.total_cmp(&da)
        });

        for &i in &self.draw_order {
            let node = &self.scene.nodes()[i];
            let transform = self.transforms[i];
            let visual = node.visual();
            atlas.layout_line(&node.text, &mut self.quads);
            if self.quads.is_empty() {
                continue;
            }
            let width_px = atlas.line_width(&node.text);
            let scale = node.display_scale() / ATLAS_FONT_PX;
            let rotation = Mat3::from_rotation_y(transform.spin);

            // Outline under-draw: the glyph layer re-emitted around the
            // compass directions at the outline width.
            let offset_px = visual.outline_width * ATLAS_FONT_PX;
            for (ox, oy) in [
                (1.0, 0.0),
                (-1.0, 0.0),
                (0.0, 1.0),
                (0.0, -1.0),
                (1.0, 1.0),
                (1.0, -1.0),
                (-1.0, 1.0),
                (-1.0, -1.0),
            ] {
                push_word_layer(
                    &mut self.word_verts,
                    &self.quads,
                    width_px,
                    atlas.ascent(),
                    scale,
                    rotation,
                    transform.translation,
                    [ox * offset_px, oy * offset_px],
                    with_alpha(visual.outline_color, 1.0),
                );
            }
            push_word_layer(
                &mut self.word_verts,
                &self.quads,
                width_px,
                atlas.ascent(),
                scale,
                rotation,
                transform.translation,
                [0.0, 0.0],
                with_alpha(visual.fill, 1.0),
            );
        }
    }

    /// Build the screen-space hover overlay: a bordered panel with the word
    /// and its relevance, anchored above the node's projected position.
    fn build_overlay_geometry(&mut self, atlas: &GlyphAtlas, width: f32, height: f32) {
        self.panel_verts.clear();
        self.overlay_verts.clear();

        let Some(index) = self.scene.hovered_index() else {
            return;
        };
        let node = &self.scene.nodes()[index];
        let NodeVisual {
            overlay: Some(overlay),
            ..
        } = node.visual()
        else {
            return;
        };
        let transform = self.transforms[index];

        let anchor_world = transform.translation + Vec3::Y * (node.display_scale() * 0.7);
        let clip = self.camera.view_proj(width / height.max(1.0))
            * anchor_world.extend(1.0);
        if clip.w <= 0.0 {
            return;
        }
        let ndc = clip.truncate() / clip.w;
        if ndc.x < -1.2 || ndc.x > 1.2 || ndc.y < -1.2 || ndc.y > 1.2 {
            return;
        }
        let anchor_x = (ndc.x * 0.5 + 0.5) * width;
        let anchor_y = (1.0 - (ndc.y * 0.5 + 0.5)) * height;

        let line_h = atlas.ascent() * 1.25;
        let title_w = atlas.line_width(&overlay.title) * OVERLAY_TITLE_SCALE;
        let detail_w = atlas.line_width(&overlay.detail) * OVERLAY_DETAIL_SCALE;
        let panel_w = title_w.max(detail_w) + OVERLAY_PADDING * 2.0;
        let panel_h = line_h * (OVERLAY_TITLE_SCALE + OVERLAY_DETAIL_SCALE)
            + OVERLAY_LINE_GAP
            + OVERLAY_PADDING * 2.0;

        let left = anchor_x - panel_w * 0.5;
        let bottom = anchor_y - OVERLAY_LIFT;
        let top = bottom - panel_h;

        // Border behind, then the panel fill inset by the border width.
        push_rect(
            &mut self.panel_verts,
            left - OVERLAY_BORDER,
            top - OVERLAY_BORDER,
            panel_w + OVERLAY_BORDER * 2.0,
            panel_h + OVERLAY_BORDER * 2.0,
            width,
            height,
            with_alpha(node.color, 1.0),
        );
        push_rect(
            &mut self.panel_verts,
            left,
            top,
            panel_w,
            panel_h,
            width,
            height,
            [0.0, 0.0, 0.0, 0.8],
        );

        let title_baseline = top + OVERLAY_PADDING + atlas.ascent() * OVERLAY_TITLE_SCALE;
        atlas.layout_line(&overlay.title, &mut self.quads);
        push_screen_text(
            &mut self.overlay_verts,
            &self.quads,
            anchor_x - title_w * 0.5,
            title_baseline,
            OVERLAY_TITLE_SCALE,
            width,
            height,
            [1.0, 1.0, 1.0, 1.0],
        );

        let detail_baseline = title_baseline + OVERLAY_LINE_GAP + line_h * OVERLAY_DETAIL_SCALE;
        atlas.layout_line(&overlay.detail, &mut self.quads);
        push_screen_text(
            &mut self.overlay_verts,
            &self.quads,
            anchor_x - detail_w * 0.5,
            detail_baseline,
            OVERLAY_DETAIL_SCALE,
            width,
            height,
            [1.0, 1.0, 1.0, 0.85],
        );
    }
}

fn with_alpha(rgb: [f32; 3], a: f32) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], a]
}

/// Emit one colored copy of a word's glyph quads into world space.
///
/// Pixel-space quads are centered on the pen line, flipped to y-up, scaled
/// to world units, spun about the node's vertical axis and translated to the
/// node's animated position.
fn push_word_layer(
    verts: &mut Vec<TextVertex>,
    quads: &[GlyphQuad],
    width_px: f32,
    ascent: f32,
    scale: f32,
    rotation: Mat3,
    translation: Vec3,
    offset_px: [f32; 2],
    color: [f32; 4],
) {
    let to_world = |qx: f32, qy: f32| -> [f32; 3] {
        let local = Vec3::new(
            (qx + offset_px[0] - width_px * 0.5) * scale,
            (-(qy + offset_px[1]) - ascent * 0.5) * scale,
            0.0,
        );
        (translation + rotation * local).to_array()
    };
    for quad in quads {
        let p_tl = to_world(quad.min[0], quad.min[1]);
        let p_tr = to_world(quad.max[0], quad.min[1]);
        let p_br = to_world(quad.max[0], quad.max[1]);
        let p_bl = to_world(quad.min[0], quad.max[1]);
        let uv_tl = quad.uv_min;
        let uv_tr = [quad.uv_max[0], quad.uv_min[1]];
        let uv_br = quad.uv_max;
        let uv_bl = [quad.uv_min[0], quad.uv_max[1]];
        for (pos, uv) in [
            (p_tl, uv_tl),
            (p_tr, uv_tr),
            (p_br, uv_br),
            (p_tl, uv_tl),
            (p_br, uv_br),
            (p_bl, uv_bl),
        ] {
            verts.push(TextVertex { pos, uv, color });
        }
    }
}

/// Emit glyph quads in screen space at `scale`, pen starting at
/// `(start_x, baseline_y)` pixels.
fn push_screen_text(
    verts: &mut Vec<OverlayVertex>,
    quads: &[GlyphQuad],
    start_x: f32,
    baseline_y: f32,
    scale: f32,
    width: f32,
    height: f32,
    color: [f32; 4],
) {
    for quad in quads {
        let x0 = start_x + quad.min[0] * scale;
        let y0 = baseline_y + quad.min[1] * scale;
        let x1 = start_x + quad.max[0] * scale;
        let y1 = baseline_y + quad.max[1] * scale;
        let p_tl = ndc_from_px(x0, y0, width, height);
        let p_tr = ndc_from_px(x1, y0, width, height);
        let p_br = ndc_from_px(x1, y1, width, height);
        let p_bl = ndc_from_px(x0, y1, width, height);
        let uv_tl = quad.uv_min;
        let uv_tr = [quad.uv_max[0], quad.uv_min[1]];
        let uv_br = quad.uv_max;
        let uv_bl = [quad.uv_min[0], quad.uv_max[1]];
        for (pos_ndc, uv) in [
            (p_tl, uv_tl),
            (p_tr, uv_tr),
            (p_br, uv_br),
            (p_tl, uv_tl),
            (p_br, uv_br),
            (p_bl, uv_bl),
        ] {
            verts.push(OverlayVertex { pos_ndc, uv, color });
        }
    }
}

/// Emit a solid rectangle in screen space.
#[allow(clippy::too_many_arguments)]
fn push_rect(
    verts: &mut Vec<OverlayVertex>,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    width: f32,
    height: f32,
    color: [f32; 4],
) {
    let p_tl = ndc_from_px(x, y, width, height);
    let p_tr = ndc_from_px(x + w, y, width, height);
    let p_br = ndc_from_px(x + w, y + h, width, height);
    let p_bl = ndc_from_px(x, y + h, width, height);
    let uv = [0.0, 0.0];
    for pos_ndc in [p_tl, p_tr, p_br, p_tl, p_br, p_bl] {
        verts.push(OverlayVertex { pos_ndc, uv, color });
    }
}

#[cfg(test)]
mod tests {
    use super::with_alpha;

    #[test]
    fn with_alpha_extends_rgb() {
        assert_eq!(with_alpha([0.1, 0.2, 0.3], 0.8), [0.1, 0.2, 0.3, 0.8]);
    }
}
