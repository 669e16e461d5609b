//! Demo reading an ASCII PLY file into columnar form
//!
//! Prints each decoded block with its fields, then runs the kurtosis
//! extractor over the whole point block.

use anyhow::Context;
use pointfield_features::{FeatureExtractor, KurtosisZExtractor, Volume};
use pointfield_io::read_point_cloud;
use std::env;
use std::process;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <ply_file>", args[0]);
        process::exit(1);
    }

    let path = &args[1];
    let cloud = read_point_cloud(path).with_context(|| format!("reading {}", path))?;

    println!("Read {}: {} block(s)", path, cloud.len());
    for (element_name, block) in cloud.blocks() {
        println!("  {} (rows: {})", element_name, block.row_count());
        for (name, column) in block.iter() {
            println!("    - {} ({})", name, column.scalar_type().name());
        }
    }

    if let Some(points) = cloud.points() {
        let neighborhood: Vec<usize> = (0..points.row_count()).collect();
        let extractor = KurtosisZExtractor;
        let kurto_z = extractor.extract(
            &cloud,
            &neighborhood,
            &cloud,
            0,
            &Volume::Sphere { radius: f64::INFINITY },
        );
        println!("kurto_z over all points: {}", kurto_z);
    }

    Ok(())
}
