use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use sculpt_studio_lib::export::{export_filename, export_obj, format_file_size, ExportFormat};
use sculpt_studio_lib::geometry::RotationMode;
use sculpt_studio_lib::state::{SceneState, StudioSettings};
use sculpt_studio_lib::validation::ObjDocument;
use sculpt_studio_lib::Result;

#[derive(Parser, Debug)]
#[command(name = "sculpt-studio")]
#[command(about = "Export a Sculpt Studio scene document as OBJ")]
#[command(version)]
struct Args {
    /// Scene document (JSON)
    #[arg(short, long)]
    scene: PathBuf,

    /// Output file, or `-` for stdout (default: derived from the scene name)
    #[arg(short, long)]
    out: Option<String>,

    /// Settings file (default: the user config dir)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// How object rotation reaches exported vertices
    #[arg(long, value_enum)]
    rotation: Option<RotationMode>,

    /// Emit sphere and cylinder faces
    #[arg(long)]
    close_surfaces: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sculpt_studio=info".into()),
        )
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Export failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut settings = match &args.settings {
        Some(path) => StudioSettings::load_from(path)?,
        None => StudioSettings::load(),
    };
    if let Some(rotation) = args.rotation {
        settings.export.rotation = rotation;
    }
    if args.close_surfaces {
        settings.export.close_surfaces = true;
    }

    let (state, scene) = SceneState::load_scene_from_file(&args.scene)?;
    tracing::info!("Loaded scene from {} ({} objects)", args.scene.display(), state.len());

    let obj = export_obj(state.objects(), &settings.export.export_options());

    let doc = ObjDocument::parse(&obj)?;
    for problem in doc.validate_all() {
        tracing::warn!("{problem}");
    }

    let out = args
        .out
        .clone()
        .unwrap_or_else(|| export_filename(&scene.name, ExportFormat::Obj));
    if out == "-" {
        print!("{obj}");
    } else {
        std::fs::write(&out, &obj)?;
    }

    tracing::info!(
        "Exported {} vertices, {} faces in {} groups ({}) to {}",
        doc.vertex_count(),
        doc.face_count(),
        doc.group_count(),
        format_file_size(obj.len() as u64),
        if out == "-" { "stdout" } else { out.as_str() },
    );
    Ok(())
}
