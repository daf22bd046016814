use std::ffi::{c_void, CString};
use std::fs::File;
use std::io::Read;
use std::mem::size_of;
use std::path::Path;
use std::ptr::null;

use gl;
use gl::types::*;

use super::utils::{compile_stage, program_info_log};

pub enum GlShaderKind {
    Vertex = gl::VERTEX_SHADER as isize,
    Fragment = gl::FRAGMENT_SHADER as isize,
}

/// A compiled shader stage.
pub struct GlShader {
    id: GLuint,
}

impl GlShader {
    pub fn id(&self) -> GLuint { self.id }

    /// Reads and compiles a shader source file. A missing or unreadable
    /// file fails before the compiler is ever invoked.
    pub fn from_file(path: &Path, kind: GlShaderKind) -> Result<Self, String> {
        let source = read_source(path)?;
        let id = compile_stage(&source, kind as GLenum)?;

        Ok(Self { id })
    }
}

impl Drop for GlShader {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteShader(self.id);
        }
    }
}

/// Reads a whole shader source file into a `CString` ready to hand to the
/// compiler.
pub fn read_source(path: &Path) -> Result<CString, String> {
    let mut contents: Vec<u8> = vec![];
    File::open(path)
        .and_then(|mut f| f.read_to_end(&mut contents))
        .map_err(|e| format!("error reading {}: {}", path.display(), e))?;

    CString::new(contents)
        .map_err(|_| format!("{}: shader source contains a NUL byte", path.display()))
}

/// A linked shader program.
pub struct GlProgram {
    id: GLuint,
}

impl GlProgram {
    pub fn id(&self) -> GLuint { self.id }

    pub fn from_shaders(shaders: &[GlShader]) -> Result<Self, String> {
        let id = unsafe { gl::CreateProgram() };

        unsafe {
            for shader in shaders {
                gl::AttachShader(id, shader.id());
            }

            gl::LinkProgram(id);

            let mut success: GLint = 1;
            gl::GetProgramiv(id, gl::LINK_STATUS, &mut success);

            if success == 0 {
                return Err(program_info_log(id));
            }

            for shader in shaders {
                gl::DetachShader(id, shader.id());
            }
        }

        Ok(Self { id })
    }

    pub fn set_used(&self) {
        unsafe {
            gl::UseProgram(self.id);
        }
    }
}

impl Drop for GlProgram {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.id);
        }
    }
}

/// A vertex array object describing one attribute layout.
pub struct GlVertexArray {
    id: GLuint,
}

impl GlVertexArray {
    pub fn id(&self) -> GLuint { self.id }

    pub fn generate() -> Self {
        let mut vao = 0u32;
        unsafe { gl::GenVertexArrays(1, &mut vao) };
        Self { id: vao }
    }

    pub fn bind(&self) {
        unsafe { gl::BindVertexArray(self.id) };
    }
}

impl Drop for GlVertexArray {
    fn drop(&mut self) {
        unsafe { gl::DeleteVertexArrays(1, &self.id) };
    }
}

/// A vertex buffer object holding static vertex data.
pub struct GlVertexBuffer {
    id: GLuint,
}

impl GlVertexBuffer {
    pub fn id(&self) -> GLuint { self.id }

    pub fn init(data: &[f32]) -> Self {
        let vbo = Self::generate();
        vbo.bind();
        unsafe {
            gl::BufferData(
                gl::ARRAY_BUFFER,
                (data.len() * size_of::<f32>()) as GLsizeiptr,
                data.as_ptr() as *const c_void,
                gl::STATIC_DRAW,
            );
        }

        vbo
    }

    pub fn generate() -> Self {
        let mut vbo = 0u32;
        unsafe { gl::GenBuffers(1, &mut vbo) };
        Self { id: vbo }
    }

    pub fn bind(&self) {
        unsafe { gl::BindBuffer(gl::ARRAY_BUFFER, self.id) };
    }
}

impl Drop for GlVertexBuffer {
    fn drop(&mut self) {
        unsafe { gl::DeleteBuffers(1, &self.id) };
    }
}

/// Describes attribute `index` as `components` tightly packed floats
/// starting at the beginning of the bound buffer.
pub fn set_vertex_attrib(index: GLuint, components: GLint) {
    unsafe {
        gl::EnableVertexAttribArray(index);
        gl::VertexAttribPointer(index, components, gl::FLOAT, gl::FALSE, 0, null());
    }
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use super::read_source;

    #[test]
    fn read_source_loads_an_existing_file() {
        // Any text file tracked by the repo will do
        let source = read_source(Path::new("Cargo.toml")).unwrap();

        assert!(!source.as_bytes().is_empty());
    }

    #[test]
    fn read_source_names_the_missing_file() {
        let err = read_source(Path::new("no_such_shader.glsl")).unwrap_err();

        assert!(err.contains("no_such_shader.glsl"));
    }
}
