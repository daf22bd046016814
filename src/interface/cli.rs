use std::path::{Path, PathBuf};

use clap::{App, Arg};

/// Startup configuration resolved from the command line.
pub struct Config {
    pub vert_path: PathBuf,
    pub frag_path: PathBuf,
    pub cascade: bool,
}

pub fn parse() -> Config {
    let matches = App::new("primview")
        .version(crate_version!())
        .about("Draws a triangle, a line, or two points; click to cycle between them")
        .arg(Arg::with_name("assets")
            .long("assets")
            .short("a")
            .value_name("DIR")
            .help("Directory the shader files are resolved against")
            .takes_value(true))
        .arg(Arg::with_name("vert")
            .long("vert")
            .value_name("FILE")
            .help("Vertex shader file name")
            .takes_value(true))
        .arg(Arg::with_name("frag")
            .long("frag")
            .value_name("FILE")
            .help("Fragment shader file name")
            .takes_value(true))
        .arg(Arg::with_name("cascade")
            .long("cascade")
            .help("Cascade the draw calls the way the original lab demo did"))
        .get_matches();

    resolve(
        matches.value_of("assets"),
        matches.value_of("vert"),
        matches.value_of("frag"),
        matches.is_present("cascade"),
    )
}

fn resolve(
    assets: Option<&str>,
    vert: Option<&str>,
    frag: Option<&str>,
    cascade: bool,
) -> Config {
    let root = Path::new(assets.unwrap_or("."));

    Config {
        vert_path: root.join(vert.unwrap_or("vert.glsl")),
        frag_path: root.join(frag.unwrap_or("frag.glsl")),
        cascade,
    }
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use super::resolve;

    #[test]
    fn defaults_resolve_to_the_original_relative_names() {
        let config = resolve(None, None, None, false);

        assert_eq!(config.vert_path, Path::new("./vert.glsl"));
        assert_eq!(config.frag_path, Path::new("./frag.glsl"));
        assert!(!config.cascade);
    }

    #[test]
    fn asset_dir_reroots_both_shader_paths() {
        let config = resolve(Some("shaders"), None, None, false);

        assert_eq!(config.vert_path, Path::new("shaders/vert.glsl"));
        assert_eq!(config.frag_path, Path::new("shaders/frag.glsl"));
    }

    #[test]
    fn explicit_file_names_override_the_defaults() {
        let config = resolve(Some("assets"), Some("v.glsl"), Some("f.glsl"), true);

        assert_eq!(config.vert_path, Path::new("assets/v.glsl"));
        assert_eq!(config.frag_path, Path::new("assets/f.glsl"));
        assert!(config.cascade);
    }
}
