//! Textured-quad shader program

use glow::HasContext;

use crate::render::RenderError;

/// Vertex stage: positions arrive already in clip space
pub const VERTEX_SHADER: &str = r"#version 330 core
layout(location = 0) in vec2 a_position;
layout(location = 1) in vec2 a_tex_coord;
out vec2 v_tex_coord;

void main() {
    v_tex_coord = a_tex_coord;
    gl_Position = vec4(a_position, 0.0, 1.0);
}
";

/// Fragment stage: straight texture lookup
pub const FRAGMENT_SHADER: &str = r"#version 330 core
in vec2 v_tex_coord;
uniform sampler2D u_texture;
out vec4 frag_color;

void main() {
    frag_color = texture(u_texture, v_tex_coord);
}
";

/// Compile both stages and link them into a program
///
/// The context passed in must be current on this thread.
pub fn link_program(gl: &glow::Context) -> Result<glow::NativeProgram, RenderError> {
    unsafe {
        let program = gl.create_program().map_err(RenderError::Shader)?;

        let mut shaders = Vec::with_capacity(2);
        for (stage, source) in [(glow::VERTEX_SHADER, VERTEX_SHADER), (glow::FRAGMENT_SHADER, FRAGMENT_SHADER)] {
            let shader = match compile_stage(gl, stage, source) {
                Ok(shader) => shader,
                Err(err) => {
                    for shader in shaders {
                        gl.delete_shader(shader);
                    }
                    gl.delete_program(program);
                    return Err(err);
                }
            };
            gl.attach_shader(program, shader);
            shaders.push(shader);
        }

        gl.link_program(program);
        let linked = gl.get_program_link_status(program);
        let link_log = gl.get_program_info_log(program);

        for shader in shaders {
            gl.detach_shader(program, shader);
            gl.delete_shader(shader);
        }

        if !linked {
            gl.delete_program(program);
            return Err(RenderError::Shader(format!("program link failed: {link_log}")));
        }

        log::debug!("Linked textured-quad shader program");
        Ok(program)
    }
}

unsafe fn compile_stage(gl: &glow::Context, stage: u32, source: &str) -> Result<glow::NativeShader, RenderError> {
    let shader = gl.create_shader(stage).map_err(RenderError::Shader)?;
    gl.shader_source(shader, source);
    gl.compile_shader(shader);

    if gl.get_shader_compile_status(shader) {
        Ok(shader)
    } else {
        let info = gl.get_shader_info_log(shader);
        gl.delete_shader(shader);
        let name = if stage == glow::VERTEX_SHADER { "vertex" } else { "fragment" };
        Err(RenderError::Shader(format!("{name} shader compile failed: {info}")))
    }
}
