//! drishti-frames readout tool
//!
//! Computes the tag vector in the field, robot, and camera frames for one
//! scene snapshot and prints the readout panel (text or JSON).
//!
//! # Usage
//!
//! ```bash
//! # With default config
//! cargo run
//!
//! # With custom config file
//! cargo run -- --config drishti-frames.toml
//!
//! # With command line overrides
//! cargo run -- --robot 100 100 0 --tag 100 200 0 --camera 0 0
//!
//! # JSON output, robot frame only
//! cargo run -- --json --hide field --hide camera
//! ```

use std::fs;
use std::io::Write;

use drishti_frames::{FrameKind, Point2D, Pose2D, SceneConfig, VectorReadouts, VectorVisibility};

// ============================================================================
// CLI Arguments
// ============================================================================

struct Args {
    config_path: Option<String>,
    robot: Option<(f64, f64, f64)>,
    camera: Option<(f64, f64)>,
    tag: Option<(f64, f64, f64)>,
    hidden: Vec<FrameKind>,
    json: bool,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut result = Args {
        config_path: None,
        robot: None,
        camera: None,
        tag: None,
        hidden: Vec::new(),
        json: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    result.config_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--robot" => {
                let v = take_values(&args, i, 3, "--robot X Y DEG");
                result.robot = Some((v[0], v[1], v[2]));
                i += 3;
            }
            "--camera" => {
                let v = take_values(&args, i, 2, "--camera X Y");
                result.camera = Some((v[0], v[1]));
                i += 2;
            }
            "--tag" => {
                let v = take_values(&args, i, 3, "--tag X Y DEG");
                result.tag = Some((v[0], v[1], v[2]));
                i += 3;
            }
            "--hide" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse::<FrameKind>() {
                        Ok(kind) => result.hidden.push(kind),
                        Err(e) => {
                            eprintln!("{}", e);
                            std::process::exit(1);
                        }
                    }
                    i += 1;
                }
            }
            "--json" => {
                result.json = true;
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    result
}

/// Pull `count` numeric values following the flag at `at`.
fn take_values(args: &[String], at: usize, count: usize, usage: &str) -> Vec<f64> {
    let mut values = Vec::with_capacity(count);
    for offset in 1..=count {
        match args.get(at + offset).map(|s| s.parse::<f64>()) {
            Some(Ok(value)) => values.push(value),
            _ => {
                eprintln!("{} requires {} values (usage: {})", args[at], count, usage);
                std::process::exit(1);
            }
        }
    }
    values
}

fn print_help() {
    println!("drishti-frames - frame vector readouts for the field/robot/camera/tag scene");
    println!();
    println!("USAGE:");
    println!("    drishti-frames [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <FILE>     Configuration file (default: drishti-frames.toml)");
    println!("    --robot <X> <Y> <DEG>   Override robot pose");
    println!("    --camera <X> <Y>        Override camera offset");
    println!("    --tag <X> <Y> <DEG>     Override tag pose");
    println!("    --hide <FRAME>          Hide one readout (field, robot, camera); repeatable");
    println!("    --json                  Emit the readouts as pretty JSON");
    println!("    -h, --help              Print help information");
    println!();
    println!("CONFIGURATION:");
    println!("    Scene defaults come from the TOML config file:");
    println!("    - [robot] x, y, rotation_degrees");
    println!("    - [camera] x, y");
    println!("    - [tag] x, y, rotation_degrees");
    println!("    - [limits] position/rotation input ranges");
}

fn load_config(args: &Args) -> SceneConfig {
    match &args.config_path {
        Some(path) => match SceneConfig::from_file(path) {
            Ok(cfg) => {
                log::info!("Loaded config from {}", path);
                cfg
            }
            Err(e) => {
                log::warn!("{}", e);
                SceneConfig::default()
            }
        },
        None => {
            // Try default paths
            for path in &["drishti-frames.toml", "/etc/drishti-frames.toml"] {
                if let Ok(contents) = fs::read_to_string(path)
                    && let Ok(cfg) = basic_toml::from_str(&contents)
                {
                    log::info!("Loaded config from {}", path);
                    return cfg;
                }
            }
            SceneConfig::default()
        }
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let args = parse_args();
    let config = load_config(&args);
    let limits = config.limits();

    let mut scene = config.scene();
    if let Some((x, y, deg)) = args.robot {
        scene.robot = limits.clamp_pose(Pose2D::new(x, y, deg));
    }
    if let Some((x, y)) = args.camera {
        scene.camera_offset = limits.clamp_offset(Point2D::new(x, y));
    }
    if let Some((x, y, deg)) = args.tag {
        scene.tag = limits.clamp_pose(Pose2D::new(x, y, deg));
    }

    let mut visibility = VectorVisibility::default();
    for kind in &args.hidden {
        visibility.set(*kind, false);
    }

    log::info!(
        "Scene: robot ({:.1}, {:.1}) @ {:.1}°, camera offset ({:.1}, {:.1}), tag ({:.1}, {:.1}) @ {:.1}°",
        scene.robot.x,
        scene.robot.y,
        scene.robot.rotation_degrees,
        scene.camera_offset.x,
        scene.camera_offset.y,
        scene.tag.x,
        scene.tag.y,
        scene.tag.rotation_degrees
    );

    let readouts = VectorReadouts::compute(&scene);

    if args.json {
        print_json(&readouts, &visibility);
    } else {
        print_panel(&readouts, &visibility);
    }
}

// ============================================================================
// Output
// ============================================================================

fn print_panel(readouts: &VectorReadouts, visibility: &VectorVisibility) {
    println!("Tag vector readouts:");
    for kind in FrameKind::ALL {
        if !visibility.is_visible(kind) {
            continue;
        }
        let vector = readouts.get(kind);
        println!(
            "  {:<6}  |v| = {:>7.1}   {}",
            kind.name(),
            vector.magnitude,
            vector.label()
        );
    }
}

fn print_json(readouts: &VectorReadouts, visibility: &VectorVisibility) {
    let mut panel = serde_json::Map::new();
    for kind in FrameKind::ALL {
        if !visibility.is_visible(kind) {
            continue;
        }
        let value = serde_json::to_value(readouts.get(kind)).expect("readout serializes");
        panel.insert(kind.name().to_string(), value);
    }
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::Value::Object(panel)).expect("panel serializes")
    );
}
