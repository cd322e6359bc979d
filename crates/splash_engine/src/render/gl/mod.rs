//! OpenGL sprite backend
//!
//! One shader program, one dynamic vertex buffer holding a four-vertex triangle
//! strip, and a table of live textures. Every GL call assumes the context handed
//! to [`GlSpriteBackend::new`] is current on the calling thread.

pub mod shader;

use std::collections::HashMap;

use glow::HasContext;
use image::RgbaImage;

use super::backend::{BackendResult, Quad, SpriteBackend, TextureId};
use super::text::Rgba;
use super::{RenderError, SurfaceSize};

/// Floats per vertex: clip-space x, y then u, v
const VERTEX_FLOATS: usize = 4;
const VERTEX_STRIDE: i32 = (VERTEX_FLOATS * std::mem::size_of::<f32>()) as i32;

struct GlTexture {
    texture: glow::NativeTexture,
    width: u32,
    height: u32,
}

/// Sprite backend drawing through OpenGL 3.3 core
pub struct GlSpriteBackend {
    gl: glow::Context,
    program: glow::NativeProgram,
    vertex_array: glow::NativeVertexArray,
    vertex_buffer: glow::NativeBuffer,
    textures: HashMap<TextureId, GlTexture>,
    next_id: u64,
}

impl GlSpriteBackend {
    /// Build the quad pipeline on a current context
    pub fn new(gl: glow::Context) -> Result<Self, RenderError> {
        let program = shader::link_program(&gl)?;

        unsafe {
            let vertex_array = gl.create_vertex_array().map_err(RenderError::Resource)?;
            let vertex_buffer = gl.create_buffer().map_err(RenderError::Resource)?;

            gl.bind_vertex_array(Some(vertex_array));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vertex_buffer));
            gl.buffer_data_size(glow::ARRAY_BUFFER, VERTEX_STRIDE * 4, glow::DYNAMIC_DRAW);

            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 2, glow::FLOAT, false, VERTEX_STRIDE, 0);
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(1, 2, glow::FLOAT, false, VERTEX_STRIDE, 2 * std::mem::size_of::<f32>() as i32);

            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);

            gl.use_program(Some(program));
            if let Some(sampler) = gl.get_uniform_location(program, "u_texture") {
                gl.uniform_1_i32(Some(&sampler), 0);
            }
            gl.use_program(None);

            gl.enable(glow::BLEND);
            gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);

            log::info!(
                "GL sprite backend ready: {}",
                gl.get_parameter_string(glow::VERSION)
            );

            Ok(Self {
                gl,
                program,
                vertex_array,
                vertex_buffer,
                textures: HashMap::new(),
                next_id: 0,
            })
        }
    }

    /// Set the viewport to the surface and clear it
    pub fn begin_frame(&mut self, surface: &SurfaceSize, clear_color: Rgba) {
        let [r, g, b, a] = clear_color.to_f32();
        unsafe {
            self.gl.viewport(0, 0, surface.width_px as i32, surface.height_px as i32);
            self.gl.clear_color(r, g, b, a);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }
    }

    /// Number of textures uploaded and not yet released
    pub fn live_textures(&self) -> usize {
        self.textures.len()
    }
}

impl SpriteBackend for GlSpriteBackend {
    fn upload(&mut self, image: &RgbaImage) -> BackendResult<TextureId> {
        let (width, height) = image.dimensions();
        let gl = &self.gl;

        let texture = unsafe {
            let texture = gl.create_texture().map_err(RenderError::Upload)?;
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, glow::LINEAR as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, glow::LINEAR as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::CLAMP_TO_EDGE as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::CLAMP_TO_EDGE as i32);
            gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA8 as i32,
                width as i32,
                height as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                Some(image.as_raw()),
            );
            gl.bind_texture(glow::TEXTURE_2D, None);
            texture
        };

        self.next_id += 1;
        let id = TextureId(self.next_id);
        self.textures.insert(id, GlTexture { texture, width, height });
        log::trace!("Uploaded texture {:?} ({}x{})", id, width, height);
        Ok(id)
    }

    fn draw(&mut self, texture: TextureId, surface: &SurfaceSize, quad: &Quad) -> BackendResult<()> {
        let entry = self.textures.get(&texture).ok_or(RenderError::UnknownTexture(texture))?;
        if surface.width_pt <= 0.0 || surface.height_pt <= 0.0 {
            return Err(RenderError::Draw(format!(
                "surface has no area ({}x{} pt)",
                surface.width_pt, surface.height_pt
            )));
        }
        let vertices = quad_vertices(quad, surface);
        let gl = &self.gl;

        unsafe {
            gl.use_program(Some(self.program));
            gl.active_texture(glow::TEXTURE0);
            gl.bind_texture(glow::TEXTURE_2D, Some(entry.texture));
            gl.bind_vertex_array(Some(self.vertex_array));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.vertex_buffer));
            gl.buffer_sub_data_u8_slice(glow::ARRAY_BUFFER, 0, bytemuck::cast_slice(&vertices));
            gl.draw_arrays(glow::TRIANGLE_STRIP, 0, 4);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_vertex_array(None);
            gl.bind_texture(glow::TEXTURE_2D, None);
            gl.use_program(None);

            let error = gl.get_error();
            if error != glow::NO_ERROR {
                return Err(RenderError::Draw(format!(
                    "GL error 0x{error:04X} drawing {}x{} texture",
                    entry.width, entry.height
                )));
            }
        }
        Ok(())
    }

    fn release(&mut self, texture: TextureId) {
        if let Some(entry) = self.textures.remove(&texture) {
            unsafe { self.gl.delete_texture(entry.texture) };
        }
    }
}

impl Drop for GlSpriteBackend {
    fn drop(&mut self) {
        if !self.textures.is_empty() {
            log::warn!("{} textures still live at backend shutdown", self.textures.len());
        }
        unsafe {
            for (_, entry) in self.textures.drain() {
                self.gl.delete_texture(entry.texture);
            }
            self.gl.delete_buffer(self.vertex_buffer);
            self.gl.delete_vertex_array(self.vertex_array);
            self.gl.delete_program(self.program);
        }
    }
}

/// Triangle-strip vertices (clip-space position, texture coordinate) for a quad
///
/// Surface points have their origin at the top-left with y growing downwards;
/// clip space has y growing upwards.
pub fn quad_vertices(quad: &Quad, surface: &SurfaceSize) -> [f32; 4 * VERTEX_FLOATS] {
    let to_clip = |x: f32, y: f32| [x / surface.width_pt * 2.0 - 1.0, 1.0 - y / surface.height_pt * 2.0];

    let bottom_right = quad.bottom_right();
    let corners = [
        (to_clip(quad.top_left.x, quad.top_left.y), [0.0, 0.0]),
        (to_clip(quad.top_right.x, quad.top_right.y), [1.0, 0.0]),
        (to_clip(quad.bottom_left.x, quad.bottom_left.y), [0.0, 1.0]),
        (to_clip(bottom_right.x, bottom_right.y), [1.0, 1.0]),
    ];

    let mut vertices = [0.0; 4 * VERTEX_FLOATS];
    for (chunk, ([x, y], [u, v])) in vertices.chunks_exact_mut(VERTEX_FLOATS).zip(corners) {
        chunk.copy_from_slice(&[x, y, u, v]);
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point2;

    #[test]
    fn test_full_surface_quad_maps_to_clip_corners() {
        let surface = SurfaceSize::new(1080, 1920, 3.0);
        let quad = Quad {
            top_left: Point2::new(0.0, 0.0),
            top_right: Point2::new(surface.width_pt, 0.0),
            bottom_left: Point2::new(0.0, surface.height_pt),
        };

        let expected = [
            -1.0, 1.0, 0.0, 0.0, //
            1.0, 1.0, 1.0, 0.0, //
            -1.0, -1.0, 0.0, 1.0, //
            1.0, -1.0, 1.0, 1.0,
        ];
        for (got, want) in quad_vertices(&quad, &surface).iter().zip(expected) {
            assert_relative_eq!(*got, want, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_band_quad_covers_top_slice() {
        let surface = SurfaceSize::new(800, 800, 1.0);
        let quad = Quad {
            top_left: Point2::new(0.0, 200.0),
            top_right: Point2::new(800.0, 200.0),
            bottom_left: Point2::new(0.0, 400.0),
        };

        let vertices = quad_vertices(&quad, &surface);
        // top edge at y = 200pt -> 0.5 in clip space, bottom edge at 400pt -> 0.0
        assert_relative_eq!(vertices[1], 0.5);
        assert_relative_eq!(vertices[9], 0.0);
        assert_relative_eq!(vertices[12], 1.0);
    }
}
