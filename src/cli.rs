use std::path::PathBuf;

use anyhow::{Context as _, anyhow};
use clap::Parser;
use itertools::Itertools as _;
use log::LevelFilter;
use raycast::{
    Mesh, Ray, Scene, SceneSettings, Shading, ZeroTest,
    geometry::{FloatType, WorldPoint, WorldVector},
};

/// Casts a single ray at a mesh and prints the closest hit.
#[derive(Parser)]
#[command(name = "raycast-cli")]
struct Args {
    /// Wavefront OBJ file to load
    obj: PathBuf,

    /// Ray origin, as "x,y,z"
    #[arg(long, value_parser = parse_vector, allow_hyphen_values = true)]
    origin: WorldVector,

    /// Ray direction, as "x,y,z", doesn't need to be normalized
    #[arg(long, value_parser = parse_vector, allow_hyphen_values = true)]
    direction: WorldVector,

    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    t_min: FloatType,

    #[arg(long, default_value_t = FloatType::INFINITY)]
    t_max: FloatType,

    /// Interpolate vertex normals instead of using flat triangle normals
    #[arg(long)]
    smooth: bool,

    /// Treat determinants up to this magnitude as zero instead of testing for exact zero
    #[arg(long)]
    epsilon: Option<FloatType>,

    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn parse_vector(s: &str) -> anyhow::Result<WorldVector> {
    let (x, y, z) = s
        .split(',')
        .map(|c| c.trim().parse::<FloatType>())
        .collect_tuple()
        .ok_or_else(|| anyhow!("expected three comma separated numbers, got {s:?}"))?;
    Ok(WorldVector::new(x?, y?, z?))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level)
        .init();

    let mesh = Mesh::load_obj(&args.obj)
        .with_context(|| format!("Loading {}", args.obj.display()))?;

    let settings = SceneSettings::builder()
        .zero_test(args.epsilon.map_or(ZeroTest::Exact, ZeroTest::Epsilon))
        .build();
    let mut scene = Scene::new(settings);
    let material = scene.add_material(args.obj.display().to_string());
    let shading = if args.smooth {
        Shading::Smooth
    } else {
        Shading::Flat
    };
    scene.extend(mesh.triangles(material, shading));
    log::info!("Scene has {} triangles", scene.shape_count());

    let ray = Ray::new(WorldPoint::from(args.origin), args.direction);
    match scene.intersect(&ray, args.t_min, args.t_max) {
        Some(hit) => {
            println!("hit t={}", hit.t);
            println!("position {:?}", hit.position.coords.as_slice());
            println!("normal {:?}", hit.normal.as_slice());
            println!("material {}", scene.material(hit.material));
        }
        None => println!("miss"),
    }

    Ok(())
}
