//! Film Grain Lab - CLI front end.
//!
//! Usage: film_grain_lab <input> <output> [options]
//!
//! Options:
//!   --iso <n>            film speed: 100/200/400/800/1600/3200 (default 800)
//!   --strength <f>       grain strength, typically 0-1 (default 0.5)
//!   --grain-size <f>     grain size multiplier (default 1.0)
//!   --fast               use the fast, non-deterministic grain strategy
//!   --lut <file.cube>    apply a 3D LUT after the grain stage
//!   --lut-strength <f>   LUT blend strength in 0-1 (default 1.0)

use std::path::PathBuf;
use std::process::ExitCode;

use film_grain_lab::lut::cube;
use film_grain_lab::{pipeline, GrainSettings, GrainStrategy, LutCache, LutSettings, image_io};

struct CliArgs {
    input: PathBuf,
    output: PathBuf,
    grain: GrainSettings,
    lut_file: Option<PathBuf>,
    lut_strength: f32,
}

fn parse_args() -> Result<CliArgs, String> {
    let mut positional: Vec<String> = Vec::new();
    let mut grain = GrainSettings::default();
    let mut lut_file = None;
    let mut lut_strength = 1.0f32;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--iso" => {
                let v = args.next().ok_or("--iso needs a value")?;
                grain.iso = v.parse().map_err(|_| format!("bad --iso value: {v}"))?;
            }
            "--strength" => {
                let v = args.next().ok_or("--strength needs a value")?;
                grain.strength = v.parse().map_err(|_| format!("bad --strength value: {v}"))?;
            }
            "--grain-size" => {
                let v = args.next().ok_or("--grain-size needs a value")?;
                grain.grain_size = v
                    .parse()
                    .map_err(|_| format!("bad --grain-size value: {v}"))?;
            }
            "--fast" => grain.strategy = GrainStrategy::Fast,
            "--lut" => {
                let v = args.next().ok_or("--lut needs a file path")?;
                lut_file = Some(PathBuf::from(v));
            }
            "--lut-strength" => {
                let v = args.next().ok_or("--lut-strength needs a value")?;
                lut_strength = v
                    .parse()
                    .map_err(|_| format!("bad --lut-strength value: {v}"))?;
            }
            other if other.starts_with("--") => {
                return Err(format!("unknown option: {other}"));
            }
            other => positional.push(other.to_string()),
        }
    }

    if positional.len() != 2 {
        return Err("expected <input> and <output> paths".to_string());
    }
    if grain.grain_size <= 0.0 {
        return Err("--grain-size must be positive".to_string());
    }

    Ok(CliArgs {
        input: PathBuf::from(&positional[0]),
        output: PathBuf::from(&positional[1]),
        grain,
        lut_file,
        lut_strength,
    })
}

fn run(args: CliArgs) -> Result<(), String> {
    let source = image_io::load_rgba(&args.input)?;

    let mut cache = LutCache::new();
    let mut lut_settings = LutSettings::default();
    if let Some(path) = &args.lut_file {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read LUT {}: {e}", path.display()))?;
        let table = cube::parse_cube(&text).map_err(|e| format!("LUT parse failed: {e}"))?;
        let id = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "lut".to_string());
        log::info!(
            "loaded LUT '{}' ({}): size {}",
            id,
            table.title,
            table.size
        );
        cache.insert(id.clone(), table);
        lut_settings = LutSettings {
            selected: id,
            strength: args.lut_strength,
            apply: true,
        };
    }

    let result = pipeline::process(&source, &args.grain, &lut_settings, &mut cache)
        .map_err(|e| e.to_string())?;
    for warning in &result.warnings {
        eprintln!("warning: {warning:?}");
    }

    image_io::save_rgba(&result.buffer, &args.output)?;
    println!(
        "{} -> {} ({}x{}, iso {}, strength {})",
        args.input.display(),
        args.output.display(),
        result.buffer.width,
        result.buffer.height,
        args.grain.iso,
        args.grain.strength,
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("error: {msg}");
            eprintln!("usage: film_grain_lab <input> <output> [--iso N] [--strength F] [--grain-size F] [--fast] [--lut FILE] [--lut-strength F]");
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("error: {msg}");
            ExitCode::FAILURE
        }
    }
}
