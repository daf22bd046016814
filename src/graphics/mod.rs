//! A simple set of wrappers around the OpenGL API.
//!
//! All this program ever draws is a handful of vertices from three static
//! buffers, which is nowhere near enough to justify a full rendering
//! library. The raw calls it does need are cryptic and unsafe, though, so
//! this module wraps them in a small safe interface: shader and program
//! objects that surface the driver's info log when compilation or linking
//! fails, and vertex array/buffer objects that release themselves on drop.

pub mod opengl;
pub mod utils;
