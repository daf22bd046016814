//! Window and context setup plus the blocking render loop.

use glutin::{
    event::{ElementState, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
    Api, ContextBuilder, GlProfile, GlRequest,
};
use log::info;

use crate::graphics::opengl::{GlProgram, GlShader, GlShaderKind};
use crate::graphics::utils::context_version;
use crate::interface::cli::Config;
use crate::scene::geometry;
use crate::scene::selector::{draw_plan, DrawTarget};

const INITIAL_WIDTH: f64 = 640.0;
const INITIAL_HEIGHT: f64 = 480.0;
const TITLE: &str = "Lab 1";

/// Builds the window, compiles the shaders, uploads the geometry, and runs
/// the event loop. Only startup can fail; once the loop is entered the
/// process exits through the close request.
pub fn run(config: Config) -> Result<(), String> {
    let events = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(TITLE)
        .with_inner_size(glutin::dpi::LogicalSize::new(INITIAL_WIDTH, INITIAL_HEIGHT));

    let context = ContextBuilder::new()
        .with_gl_profile(GlProfile::Core)
        .with_gl(GlRequest::Specific(Api::OpenGl, (3, 3)))
        .with_vsync(true)
        .build_windowed(window, &events)
        .map_err(|e| format!("error creating window: {}", e))?;

    let context = unsafe {
        context
            .make_current()
            .map_err(|(_, e)| format!("error activating GL context: {}", e))?
    };

    gl::load_with(|s| context.get_proc_address(s) as *const std::ffi::c_void);

    let (major, minor) = context_version();
    info!("using OpenGL {}.{}", major, minor);

    let size = context.window().inner_size();
    unsafe { gl::Viewport(0, 0, size.width as i32, size.height as i32) };

    let vert = GlShader::from_file(&config.vert_path, GlShaderKind::Vertex)?;
    let frag = GlShader::from_file(&config.frag_path, GlShaderKind::Fragment)?;
    let program = GlProgram::from_shaders(&[vert, frag])?;

    let sets = geometry::upload_all();
    let cascade = config.cascade;
    let mut selected = DrawTarget::Triangle;

    unsafe { gl::ClearColor(0.0, 0.0, 0.0, 1.0) };

    events.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::Resized(size) => {
                    context.resize(size);
                    unsafe { gl::Viewport(0, 0, size.width as i32, size.height as i32) };
                }
                WindowEvent::MouseInput { state: ElementState::Pressed, .. } => {
                    selected.advance();
                }
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                _ => {}
            },
            Event::MainEventsCleared => context.window().request_redraw(),
            Event::RedrawRequested(_) => {
                program.set_used();
                sets[selected.index()].bind();

                unsafe { gl::Clear(gl::COLOR_BUFFER_BIT) };

                // In cascade mode the later draws read from the selected
                // vertex array too, exactly like the original switch did.
                for &target in draw_plan(selected, cascade) {
                    unsafe {
                        gl::DrawArrays(target.mode(), 0, sets[target.index()].vertex_count());
                    }
                }

                context.swap_buffers().unwrap();
            }
            _ => {}
        }
    })
}
