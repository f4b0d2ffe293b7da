//! CPU glyph atlas and text layout.
//!
//! Glyphs are rasterized once per character into a single-channel texture;
//! label geometry is rebuilt from the atlas every frame. This keeps the
//! renderer free of any heavyweight text stack while still giving kerned,
//! proportional labels.

use std::collections::HashMap;

use ab_glyph::{Font, FontArc, Glyph, PxScale, ScaleFont};

/// Rasterization size of one glyph in the atlas, pixels per em-ish unit.
/// World-space text maps `ATLAS_FONT_PX` pixels onto one display-scale unit.
pub const ATLAS_FONT_PX: f32 = 48.0;

const ATLAS_SIZE: u32 = 1024;

struct GlyphInfo {
    uv_min: [f32; 2],
    uv_max: [f32; 2],
    bounds_min: [f32; 2],
    size: [f32; 2],
    advance: f32,
    id: ab_glyph::GlyphId,
}

/// One laid-out glyph quad in pixel units.
///
/// Coordinates are relative to the pen origin with the baseline at y = 0 and
/// y growing downward (screen convention); `min` is the top-left corner.
#[derive(Clone, Copy, Debug)]
pub struct GlyphQuad {
    pub min: [f32; 2],
    pub max: [f32; 2],
    pub uv_min: [f32; 2],
    pub uv_max: [f32; 2],
}

pub struct GlyphAtlas {
    font: FontArc,
    scale: PxScale,
    ascent: f32,
    glyphs: HashMap<char, GlyphInfo>,
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    sampler: wgpu::Sampler,
    cpu: Vec<u8>,
    cursor_x: u32,
    cursor_y: u32,
    row_h: u32,
    dirty: bool,
}

impl GlyphAtlas {
    pub fn new(device: &wgpu::Device, font: FontArc) -> Self {
        let scale = PxScale {
            x: ATLAS_FONT_PX,
            y: ATLAS_FONT_PX,
        };
        let ascent = font.as_scaled(scale).ascent();

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("glyph-atlas"),
            size: wgpu::Extent3d {
                width: ATLAS_SIZE,
                height: ATLAS_SIZE,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::R8Unorm,
            view_formats: &[],
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("glyph-sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let mut atlas = Self {
            font,
            scale,
            ascent,
            glyphs: HashMap::new(),
            texture,
            view,
            sampler,
            cpu: vec![0u8; (ATLAS_SIZE * ATLAS_SIZE) as usize],
            cursor_x: 1,
            cursor_y: 1,
            row_h: 0,
            dirty: false,
        };
        // Seed the printable ASCII range used by labels and the overlay.
        for ch in (0x20u8..0x7f).map(char::from) {
            atlas.rasterize(ch);
        }
        atlas
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    pub fn sampler(&self) -> &wgpu::Sampler {
        &self.sampler
    }

    pub fn ascent(&self) -> f32 {
        self.ascent
    }

    /// Rasterize any characters of `text` not yet in the atlas.
    pub fn ensure_chars(&mut self, text: &str) {
        for ch in text.chars() {
            if !self.glyphs.contains_key(&ch) {
                self.rasterize(ch);
            }
        }
    }

    /// Push pending CPU raster changes to the GPU texture.
    pub fn upload_if_dirty(&mut self, queue: &wgpu::Queue) {
        if !self.dirty {
            return;
        }
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &self.cpu,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(ATLAS_SIZE),
                rows_per_image: Some(ATLAS_SIZE),
            },
            wgpu::Extent3d {
                width: ATLAS_SIZE,
                height: ATLAS_SIZE,
                depth_or_array_layers: 1,
            },
        );
        self.dirty = false;
    }

    /// Advance width of `text` in pixels, kerning included.
    pub fn line_width(&self, text: &str) -> f32 {
        let scaled = self.font.as_scaled(self.scale);
        let mut width = 0.0f32;
        let mut prev: Option<ab_glyph::GlyphId> = None;
        for ch in text.chars() {
            if let Some(info) = self.glyphs.get(&ch) {
                if let Some(pg) = prev {
                    width += scaled.kern(pg, info.id);
                }
                width += info.advance;
                prev = Some(info.id);
            }
        }
        width
    }

    /// Lay `text` out as glyph quads starting at the pen origin.
    /// Characters missing from the atlas (and whitespace) advance the pen
    /// without emitting a quad.
    pub fn layout_line(&self, text: &str, out: &mut Vec<GlyphQuad>) {
        out.clear();
        let scaled = self.font.as_scaled(self.scale);
        let mut pen_x = 0.0f32;
        let mut prev: Option<ab_glyph::GlyphId> = None;
        for ch in text.chars() {
            let Some(info) = self.glyphs.get(&ch) else {
                continue;
            };
            if let Some(pg) = prev {
                pen_x += scaled.kern(pg, info.id);
            }
            if info.size[0] > 0.0 && info.size[1] > 0.0 {
                let x = pen_x + info.bounds_min[0];
                let y = info.bounds_min[1] - self.ascent;
                out.push(GlyphQuad {
                    min: [x, y],
                    max: [x + info.size[0], y + info.size[1]],
                    uv_min: info.uv_min,
                    uv_max: info.uv_max,
                });
            }
            pen_x += info.advance;
            prev = Some(info.id);
        }
    }

    fn rasterize(&mut self, ch: char) {
        let gid = self.font.glyph_id(ch);
        let scaled = self.font.as_scaled(self.scale);
        let advance = scaled.h_advance(gid);
        let glyph = Glyph {
            id: gid,
            scale: self.scale,
            position: ab_glyph::point(0.0, self.ascent),
        };
        let Some(outlined) = self.font.outline_glyph(glyph) else {
            // No outline (whitespace): record the advance only.
            self.glyphs.insert(
                ch,
                GlyphInfo {
                    uv_min: [0.0, 0.0],
                    uv_max: [0.0, 0.0],
                    bounds_min: [0.0, 0.0],
                    size: [0.0, 0.0],
                    advance,
                    id: gid,
                },
            );
            return;
        };

        let bounds = outlined.px_bounds();
        let gw = (bounds.width().ceil() as u32).max(1);
        let gh = (bounds.height().ceil() as u32).max(1);
        if self.cursor_x + gw + 1 >= ATLAS_SIZE {
            self.cursor_x = 1;
            self.cursor_y += self.row_h + 1;
            self.row_h = 0;
        }
        if self.cursor_y + gh + 1 >= ATLAS_SIZE {
            log::warn!("glyph atlas full; {ch:?} will render as blank");
            return;
        }

        let off_x = (-bounds.min.x.floor() as i32).max(0);
        let off_y = (-bounds.min.y.floor() as i32).max(0);
        let ox = self.cursor_x as i32 + off_x;
        let oy = self.cursor_y as i32 + off_y;
        let cpu = &mut self.cpu;
        outlined.draw(|x, y, v| {
            let px = ox + x as i32;
            let py = oy + y as i32;
            if px >= 0 && py >= 0 && (px as u32) < ATLAS_SIZE && (py as u32) < ATLAS_SIZE {
                let idx = (py as u32 * ATLAS_SIZE + px as u32) as usize;
                cpu[idx] = cpu[idx].max((v * 255.0) as u8);
            }
        });

        self.glyphs.insert(
            ch,
            GlyphInfo {
                uv_min: [
                    ox as f32 / ATLAS_SIZE as f32,
                    oy as f32 / ATLAS_SIZE as f32,
                ],
                uv_max: [
                    (ox as f32 + gw as f32) / ATLAS_SIZE as f32,
                    (oy as f32 + gh as f32) / ATLAS_SIZE as f32,
                ],
                bounds_min: [bounds.min.x, bounds.min.y],
                size: [gw as f32, gh as f32],
                advance,
                id: gid,
            },
        );
        self.cursor_x += gw + 1;
        self.row_h = self.row_h.max(gh);
        self.dirty = true;
    }
}

/// Convert surface pixel coordinates (origin top-left) to NDC.
#[inline]
pub fn ndc_from_px(x: f32, y: f32, width: f32, height: f32) -> [f32; 2] {
    [
        (x / width.max(1.0)) * 2.0 - 1.0,
        1.0 - (y / height.max(1.0)) * 2.0,
    ]
}

/// Locate a usable TTF font: `LEXIS_FONT` first, then common system paths.
pub fn load_font() -> anyhow::Result<FontArc> {
    let mut candidates: Vec<String> = Vec::new();
    if let Ok(path) = std::env::var("LEXIS_FONT") {
        candidates.push(path);
    }
    candidates.extend(
        [
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
            "/System/Library/Fonts/Supplemental/Arial.ttf",
            "C:\\Windows\\Fonts\\arial.ttf",
        ]
        .iter()
        .map(|s| s.to_string()),
    );
    for path in &candidates {
        if let Ok(bytes) = std::fs::read(path) {
            match FontArc::try_from_vec(bytes) {
                Ok(font) => {
                    log::info!("using font {path}");
                    return Ok(font);
                }
                Err(e) => log::warn!("could not parse font {path}: {e}"),
            }
        }
    }
    anyhow::bail!("no usable font found; set LEXIS_FONT to a .ttf path")
}

#[cfg(test)]
mod tests {
    use super::ndc_from_px;

    #[test]
    fn ndc_maps_surface_corners() {
        assert_eq!(ndc_from_px(0.0, 0.0, 800.0, 600.0), [-1.0, 1.0]);
        assert_eq!(ndc_from_px(800.0, 600.0, 800.0, 600.0), [1.0, -1.0]);
        let center = ndc_from_px(400.0, 300.0, 800.0, 600.0);
        assert!(center[0].abs() < 1e-6 && center[1].abs() < 1e-6);
    }

    #[test]
    fn ndc_y_axis_points_up() {
        let top = ndc_from_px(0.0, 100.0, 800.0, 600.0);
        let bottom = ndc_from_px(0.0, 500.0, 800.0, 600.0);
        assert!(top[1] > bottom[1]);
    }
}
