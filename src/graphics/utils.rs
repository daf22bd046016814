use std::ffi::{CStr, CString};
use std::ptr::{null, null_mut};

use gl;
use gl::types::*;

/// Compiles a single shader stage. On failure the driver's info log is
/// returned as the error text.
pub fn compile_stage(source: &CStr, kind: GLenum) -> Result<GLuint, String> {
    let id: GLuint = unsafe { gl::CreateShader(kind) };
    unsafe {
        gl::ShaderSource(id, 1, &source.as_ptr(), null());
        gl::CompileShader(id);
    }

    let mut success: GLint = 1;
    unsafe {
        gl::GetShaderiv(id, gl::COMPILE_STATUS, &mut success);
    }

    if success == 0 {
        let mut len: GLint = 0;
        unsafe {
            gl::GetShaderiv(id, gl::INFO_LOG_LENGTH, &mut len);
        }

        let log = whitespace_cstring(len as usize);
        unsafe {
            gl::GetShaderInfoLog(id, len, null_mut(), log.as_ptr() as *mut GLchar);
        }

        return Err(log.to_string_lossy().into_owned());
    }

    Ok(id)
}

/// Retrieves a program object's info log after a failed link.
pub fn program_info_log(id: GLuint) -> String {
    let mut len: GLint = 0;
    unsafe {
        gl::GetProgramiv(id, gl::INFO_LOG_LENGTH, &mut len);
    }

    let log = whitespace_cstring(len as usize);
    unsafe {
        gl::GetProgramInfoLog(id, len, null_mut(), log.as_ptr() as *mut GLchar);
    }

    log.to_string_lossy().into_owned()
}

/// The major/minor version of the current context.
pub fn context_version() -> (GLint, GLint) {
    let (mut major, mut minor) = (0, 0);
    unsafe {
        gl::GetIntegerv(gl::MAJOR_VERSION, &mut major);
        gl::GetIntegerv(gl::MINOR_VERSION, &mut minor);
    }
    (major, minor)
}

pub fn whitespace_cstring(len: usize) -> CString {
    let mut buf: Vec<u8> = Vec::with_capacity(len + 1);
    buf.extend([b' '].iter().cycle().take(len)); // Fills the buffer with spaces
    unsafe { CString::from_vec_unchecked(buf) }
}

#[cfg(test)]
mod test {
    use super::whitespace_cstring;

    #[test]
    fn whitespace_cstring_has_requested_length() {
        let s = whitespace_cstring(24);

        assert_eq!(s.as_bytes().len(), 24);
        assert!(s.as_bytes().iter().all(|&b| b == b' '));
    }

    #[test]
    fn whitespace_cstring_of_zero_length_is_empty() {
        assert_eq!(whitespace_cstring(0).as_bytes().len(), 0);
    }
}
