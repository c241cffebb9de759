use anthill_sim::prelude::*;
use anthill_sim::simulation::Eater;
use anthill_sim::world::{load_map, write_map};
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let rng = if let Some(seed) = args.seed {
        fastrand::Rng::with_seed(seed)
    } else {
        fastrand::Rng::new()
    };

    // Load or generate the world
    let grid = match &args.map {
        Some(path) => {
            let grid = load_map(path)?;
            log::info!("Map {}x{} loaded from {}", grid.width(), grid.height(), path);
            grid
        }
        None => {
            let grid = TileGrid::bordered(usize::from(args.width), usize::from(args.height));
            log::info!("Map {}x{} generated", grid.width(), grid.height());
            grid
        }
    };

    let mut engine = SimulationEngine::new(grid, args.sim_config(), rng)?;
    if let Some(path) = &args.save_map {
        write_map(engine.grid(), path)?;
        log::info!("Map written to {}", path);
    }

    engine.grant_food(args.starting_food);
    engine.player_mut().set_controls(args.velocity, args.turn);

    // Run simulation
    let simulation_time = engine.run(args.ticks, args.auto_upgrade, |event| {
        if !args.suppress_events {
            print_event(event);
        }
    });

    engine.print_summary(simulation_time);
    if args.print_map {
        print!("{}", engine.grid().render_ascii());
    }
    Ok(())
}

/// Print the events worth a line in the run log
fn print_event(event: &GameEvent) {
    match event {
        GameEvent::FoodConsumed { by: Eater::Player, row, col } => {
            println!("{} {}", "🍃".green(), format!("player ate food at ({}, {})", row, col).green());
        }
        GameEvent::Upgraded { level, cost, spawned } => println!(
            "{} {} {}",
            "⬆️".yellow(),
            format!("anthill reached level {}", level).bright_yellow(),
            format!("(-{} food, +{} ants)", cost, spawned).dimmed()
        ),
        GameEvent::Won => println!("{}", "🏆 Congratulations! You won!".bright_green().bold()),
        _ => {}
    }
}
