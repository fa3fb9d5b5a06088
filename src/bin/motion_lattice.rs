// Motion lattice exploration demo
//
// Expands the steering x velocity lattice around a few obstacles, logs the
// layer sizes and the chosen trajectory, and saves a plot of the lattice.
use clap::Parser;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use motion_lattice::common::{Point2D, RoboticsResult, Visualizable};
use motion_lattice::path_planning::motion_lattice::{
    Explorer, ExplorerConfig, Obstacle, State, VehicleFootprint,
};
use motion_lattice::utils::Visualizer;

#[derive(Parser, Debug)]
#[command(version, about = "Explore a motion lattice around obstacles", long_about = None)]
struct CliArgs {
    /// Number of layers to expand
    #[arg(short = 'n', long, default_value_t = 2)]
    horizon: usize,

    /// Seed of the random obstacles
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Directory to save the plots
    #[arg(short, long, default_value = "img/path_planning")]
    output_dir: String,
}

fn scene(rng: &mut StdRng) -> Vec<Obstacle> {
    let mut obstacles = vec![
        Obstacle::rectangle(3.5, 1.5, 0.0, 1.0, 3.0),
        Obstacle::rectangle(6.0, -2.5, 0.4, 2.0, 1.5),
    ];
    for _ in 0..3 {
        obstacles.push(Obstacle::rectangle(
            rng.gen_range(2.0..10.0),
            rng.gen_range(-5.0..5.0),
            rng.gen_range(-1.5..1.5),
            rng.gen_range(0.5..1.5),
            rng.gen_range(0.5..1.5),
        ));
    }
    obstacles
}

fn run(args: &CliArgs) -> RoboticsResult<()> {
    let mut rng = StdRng::seed_from_u64(args.seed);
    let obstacles = scene(&mut rng);
    let goal = Point2D::new(8.0, 0.5);
    let footprint = VehicleFootprint::new(1.0, 0.5, 0.05);
    let config = ExplorerConfig {
        footprint: Some(footprint),
        ..ExplorerConfig::default()
    };

    let mut explorer = Explorer::new(config, goal, obstacles, State::origin())?;
    for layer_number in 0..args.horizon {
        let layer = explorer.iterate_layer(layer_number)?;
        let colliding = layer.iter().filter(|s| s.is_colliding()).count();
        info!(
            "layer {}: {} segments, {} colliding",
            layer_number + 1,
            layer.len(),
            colliding
        );
    }

    let mut vis = Visualizer::new();
    vis.set_title("Motion Lattice Exploration");
    explorer.visualize(&mut vis);

    match explorer.get_best_trajectory() {
        Some(best) if best.cost.is_finite() => {
            if let Some(last) = best.final_state() {
                info!(
                    "best trajectory: cost {:.3}, ends at ({:.2}, {:.2}) heading {:.2} rad after {:.1} s",
                    best.cost,
                    last.x,
                    last.y,
                    last.angle,
                    best.duration()
                );
                vis.plot_vehicle(last, &footprint);
            }
            best.visualize(&mut vis);
        }
        Some(_) => warn!("every explored trajectory collides"),
        None => warn!("no trajectory found"),
    }

    std::fs::create_dir_all(&args.output_dir)?;
    let png = format!("{}/motion_lattice.png", args.output_dir);
    let svg = format!("{}/motion_lattice.svg", args.output_dir);
    vis.save_png(&png, 800, 600)?;
    vis.save_svg(&svg)?;
    info!("Plot saved to: {} and {}", png, svg);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();

    if let Err(e) = run(&args) {
        eprintln!("motion_lattice failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let args = CliArgs::try_parse_from(["motion_lattice"]).unwrap();
        assert_eq!(args.horizon, 2);
        assert_eq!(args.seed, 42);
        assert_eq!(args.output_dir, "img/path_planning");
    }

    #[test]
    fn test_cli_overrides_and_rejects_garbage() {
        let args =
            CliArgs::try_parse_from(["motion_lattice", "--horizon", "4", "-s", "7", "-o", "out"]).unwrap();
        assert_eq!(args.horizon, 4);
        assert_eq!(args.seed, 7);
        assert_eq!(args.output_dir, "out");

        assert!(CliArgs::try_parse_from(["motion_lattice", "--horizon", "two"]).is_err());
    }
}
