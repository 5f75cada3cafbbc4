//! Command-line front end: load an OBJ file and print what it contains

mod sink;

use clap::Parser;
use log::LevelFilter;
use objmesh::{Curve, Diagnostics, Face, Line, Mesh, ObjLoader, Point, Texture, Vertex};
use std::path::PathBuf;
use std::process::ExitCode;


#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the OBJ file to load
    #[arg(value_name = "FILE")]
    file_path: PathBuf,

    /// File the log is appended to
    #[arg(short, long, value_name = "PATH", default_value = "objmesh.log")]
    log_file: PathBuf,

    /// Also log debug messages (material names, skipped libraries)
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut output = match sink::install(&args.log_file, args.level()) {
        Ok(output) => output,
        Err(err) => {
            eprintln!("Cannot open log file {}: {}", args.log_file.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let mut diagnostics = Diagnostics::new();
    let status = match ObjLoader::new().load(&args.file_path, &mut diagnostics) {
        Ok(mesh) => {
            display_mesh(&mesh);
            ExitCode::SUCCESS
        }
        Err(err) => {
            diagnostics.error(&err);
            ExitCode::FAILURE
        }
    };

    output.plain(diagnostics.summary());
    status
}

fn display_mesh(mesh: &Mesh) {
    println!("┌─ Mesh ─────────────────────────────────────────────────┐");
    println!("│ Vertices:             {:<34} │", mesh.vertices().len());
    println!("│ Normals:              {:<34} │", mesh.normals().len());
    println!("│ Texture coordinates:  {:<34} │", mesh.textures().len());
    println!("│ Faces:                {:<34} │", mesh.faces().len());
    println!("│ Groups:               {:<34} │", mesh.groups().len());
    println!("│ Objects:              {:<34} │", mesh.objects().len());
    println!("│ Smoothing groups:     {:<34} │", mesh.smoothing_groups().len());
    println!("└────────────────────────────────────────────────────────┘");
    println!();

    for group in mesh.groups() {
        println!("Group '{}' ({} faces)", group.name, group.faces.len());
        for (i, face) in mesh.resolve_faces(&group.faces).enumerate() {
            display_face(i, face);
        }
        println!();
    }

    if !mesh.points().is_empty() {
        println!("Points");
        for (i, point) in mesh.points().iter().enumerate() {
            display_point(i, point);
        }
        println!();
    }

    if !mesh.lines().is_empty() {
        println!("Lines");
        for (i, line) in mesh.lines().iter().enumerate() {
            display_line(i, line);
        }
        println!();
    }

    if !mesh.curves().is_empty() {
        println!("Curves");
        for (i, curve) in mesh.curves().iter().enumerate() {
            display_curve(i, curve);
        }
        println!();
    }

    if !mesh.materials().is_empty() {
        println!("Materials");
        for material in mesh.materials() {
            println!("  {}", material.name);
        }
        println!();
    }
}

fn vertices(vertices: &[Vertex]) -> String {
    vertices
        .iter()
        .map(|v| format!("({}, {}, {})", v.x, v.y, v.z))
        .collect::<Vec<_>>()
        .join(" ")
}

fn textures(textures: &[Texture]) -> String {
    textures
        .iter()
        .map(|t| format!("({}, {})", t.u, t.v))
        .collect::<Vec<_>>()
        .join(" ")
}

fn display_face(index: usize, face: &Face) {
    println!("  Face {}", index);
    println!("    v:  {}", vertices(&face.vertices));
    if !face.textures.is_empty() {
        println!("    vt: {}", textures(&face.textures));
    }
    if !face.normals.is_empty() {
        let normals: Vec<String> = face
            .normals
            .iter()
            .map(|n| format!("({}, {}, {})", n.x, n.y, n.z))
            .collect();
        println!("    vn: {}", normals.join(" "));
    }
}

fn display_point(index: usize, point: &Point) {
    println!("  Point {}: {}", index, vertices(&point.vertices));
    if !point.textures.is_empty() {
        println!("    vt: {}", textures(&point.textures));
    }
}

fn display_line(index: usize, line: &Line) {
    println!("  Line {}: {}", index, vertices(&line.vertices));
    if !line.textures.is_empty() {
        println!("    vt: {}", textures(&line.textures));
    }
}

fn display_curve(index: usize, curve: &Curve) {
    let range = if curve.has_range() {
        let [start, end] = curve.global_parameter_range;
        format!("[{}, {}]", start, end)
    } else {
        "unspecified".to_string()
    };
    println!(
        "  Curve {}: {} degree {}, range {}",
        index, curve.curve_type, curve.degree, range
    );
    println!("    control points: {}", vertices(&curve.control_points));
    if curve.has_parameters {
        let parameters: Vec<String> = curve.parameters.iter().map(f32::to_string).collect();
        println!("    parameters: {}", parameters.join(" "));
    }
}
