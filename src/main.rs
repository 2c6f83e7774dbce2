use line_dataset::build_dataset;
use line_dataset::config::{load_config, DatasetToolConfig};
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let config = match args.as_slice() {
        [flag] if flag == "-h" || flag == "--help" => {
            println!("{}", usage());
            return Ok(());
        }
        [config] => load_config(Path::new(config))?,
        [src, dst] => DatasetToolConfig::from_dirs(src, dst),
        _ => return Err(usage().into()),
    };

    let report = build_dataset(&config)?;
    for batch in &report.batches {
        println!(
            "{}: {} images, {} lines -> {}",
            batch.name,
            batch.images,
            batch.annotations,
            batch.annotation_file.display()
        );
    }
    println!(
        "Done: {} images, {} lines in {:.1} ms",
        report.total_images(),
        report.total_annotations(),
        report.timing.total_ms
    );
    Ok(())
}

fn usage() -> String {
    "Usage:\n    build_line_dataset <src> <dst>\n    build_line_dataset <config.json>\n    build_line_dataset (-h | --help)".to_string()
}
