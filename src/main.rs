use clap::{Args, Parser, Subcommand};
#[cfg(feature = "plot")]
use std::path::{Path, PathBuf};
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use u_evolve::experiment::{render_sweep, sweep_mutation_rates};
use u_evolve::ga::{GaConfig, GaProblem, GaRunner, TracingReporter};
#[cfg(feature = "plot")]
use u_evolve::ga::ConvergenceTrace;
use u_evolve::random::rng_from;
use u_evolve::scan::grid_maximum;
#[cfg(feature = "plot")]
use u_evolve::scan::{sample_curve, ScanPoint};
use u_evolve::schedule::{render_schedule, ScheduleDomain, ScheduleProblem};
#[cfg(feature = "plot")]
use u_evolve::tsp::Point;
use u_evolve::tsp::TspProblem;
use u_evolve::Result;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Grid-search the maximum of f(x) = x² - 3x + 4
    Maximum(MaximumArgs),
    /// Evolve a tour through random cities in the unit square
    Tsp(TspArgs),
    /// Evolve a school timetable for the classic school week
    Schedule(ScheduleArgs),
}

#[derive(Args, Debug)]
struct MaximumArgs {
    #[arg(long, default_value_t = -100.0, allow_hyphen_values = true)]
    lo: f64,

    #[arg(long, default_value_t = 100.0, allow_hyphen_values = true)]
    hi: f64,

    #[arg(long, default_value_t = 1000)]
    samples: usize,

    /// Write SVG charts into this directory
    #[cfg(feature = "plot")]
    #[arg(long)]
    plot_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct TspArgs {
    #[arg(long, default_value_t = 10)]
    cities: usize,

    #[arg(long, default_value_t = 100)]
    population: usize,

    #[arg(long, default_value_t = 100)]
    generations: usize,

    #[arg(long, default_value_t = 0.02)]
    mutation_rate: f64,

    #[arg(short = 'S', long)]
    seed: Option<u64>,

    /// Also compare mutation rates 0.01, 0.05, 0.1 and 0.2 over 50 generations
    #[arg(long, default_value_t = false)]
    sweep: bool,

    /// Write SVG charts into this directory
    #[cfg(feature = "plot")]
    #[arg(long)]
    plot_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ScheduleArgs {
    #[arg(long, default_value_t = 50)]
    population: usize,

    #[arg(long, default_value_t = 100)]
    generations: usize,

    #[arg(long, default_value_t = 0.1)]
    mutation_rate: f64,

    #[arg(short = 'S', long)]
    seed: Option<u64>,

    /// Also compare mutation rates 0.05, 0.1, 0.2 and 0.3 over 50 generations
    #[arg(long, default_value_t = false)]
    sweep: bool,

    /// Write SVG charts into this directory
    #[cfg(feature = "plot")]
    #[arg(long)]
    plot_dir: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Maximum(args) => run_maximum(args),
        Commands::Tsp(args) => run_tsp(args),
        Commands::Schedule(args) => run_schedule(args),
    };

    if let Err(e) = outcome {
        error!("{e}");
        process::exit(1);
    }
}

fn quadratic(x: f64) -> f64 {
    x * x - 3.0 * x + 4.0
}

fn run_maximum(args: MaximumArgs) -> Result<()> {
    let best = grid_maximum(quadratic, args.lo, args.hi, args.samples)?;

    println!("Function: f(x) = x² - 3x + 4");
    println!("Global maximum on [{}, {}]:", args.lo, args.hi);
    println!("x = {:.2}", best.x);
    println!("f(x) = {:.2}", best.y);

    #[cfg(feature = "plot")]
    if let Some(dir) = &args.plot_dir {
        let curve = sample_curve(quadratic, args.lo, args.hi, args.samples);
        plot_curve(&curve, best, dir)?;
    }
    Ok(())
}

fn run_tsp(args: TspArgs) -> Result<()> {
    let mut rng = rng_from(args.seed);
    let problem = TspProblem::random(args.cities, &mut rng)?;

    println!("Cities:");
    for (i, c) in problem.cities().iter().enumerate() {
        println!("  City {i}: ({:.3}, {:.3})", c.x, c.y);
    }

    let config = GaConfig::tsp()
        .with_population_size(args.population)
        .with_generations(args.generations)
        .with_mutation_rate(args.mutation_rate);
    info!(
        "Starting TSP GA: {} cities, population {}, {} generations, mutation {}",
        args.cities, args.population, args.generations, args.mutation_rate
    );

    let mut reporter = TracingReporter::new("tsp");
    let result = GaRunner::run_with_rng(&problem, &config, &mut rng, &mut reporter)?;
    let distance = problem.route_length(&result.best);

    println!("\nBest route: {:?}", result.best);
    println!("Total distance: {distance:.4}");

    #[cfg(feature = "plot")]
    if let Some(dir) = &args.plot_dir {
        plot_trace(&result.trace, "Convergence - TSP", dir, "tsp_convergence.svg")?;
        plot_route(problem.cities(), &result.best, distance, dir)?;
    }

    if args.sweep {
        let base = config.with_generations(50).with_seed(args.seed.unwrap_or(42));
        sweep(&problem, &base, &[0.01, 0.05, 0.1, 0.2])?;
    }
    Ok(())
}

fn run_schedule(args: ScheduleArgs) -> Result<()> {
    let problem = ScheduleProblem::new(ScheduleDomain::school_week())?;
    let mut rng = rng_from(args.seed);

    let initial = problem.create_genome(&mut rng);
    let initial_score = problem.evaluate_schedule(&initial);
    println!("Initial random timetable score: {initial_score}");

    let config = GaConfig::schedule()
        .with_population_size(args.population)
        .with_generations(args.generations)
        .with_mutation_rate(args.mutation_rate);
    info!(
        "Starting timetable GA: population {}, {} generations, mutation {}",
        args.population, args.generations, args.mutation_rate
    );

    let mut reporter = TracingReporter::new("schedule");
    let result = GaRunner::run_with_rng(&problem, &config, &mut rng, &mut reporter)?;

    println!("Optimized timetable score: {}", result.best_fitness);
    println!("Improvement: {} points", result.best_fitness - initial_score);
    println!(
        "\n{}",
        render_schedule(problem.domain(), &initial, "Initial timetable (random)")
    );
    println!(
        "{}",
        render_schedule(problem.domain(), &result.best, "Optimized timetable")
    );

    #[cfg(feature = "plot")]
    if let Some(dir) = &args.plot_dir {
        plot_trace(&result.trace, "Convergence - Timetable", dir, "schedule_convergence.svg")?;
    }

    if args.sweep {
        let base = config.with_generations(50).with_seed(args.seed.unwrap_or(42));
        sweep(&problem, &base, &[0.05, 0.1, 0.2, 0.3])?;
    }
    Ok(())
}

fn sweep<P: GaProblem>(problem: &P, base: &GaConfig, rates: &[f64]) -> Result<()> {
    info!("Comparing mutation rates {rates:?}");
    let outcomes = sweep_mutation_rates(problem, base, rates)?;
    println!("\nMutation rate comparison:\n{}", render_sweep(&outcomes));
    Ok(())
}

#[cfg(feature = "plot")]
fn plot_trace(trace: &ConvergenceTrace, title: &str, dir: &Path, file: &str) -> Result<()> {
    let path = dir.join(file);
    u_evolve::plot::draw_convergence(trace, title, &path)?;
    info!("Wrote {}", path.display());
    Ok(())
}

#[cfg(feature = "plot")]
fn plot_route(cities: &[Point], route: &[usize], distance: f64, dir: &Path) -> Result<()> {
    let path = dir.join("tsp_route.svg");
    let title = format!("Best route - distance {distance:.4}");
    u_evolve::plot::draw_route(cities, route, &title, &path)?;
    info!("Wrote {}", path.display());
    Ok(())
}

#[cfg(feature = "plot")]
fn plot_curve(curve: &[ScanPoint], best: ScanPoint, dir: &Path) -> Result<()> {
    let path = dir.join("maximum.svg");
    let title = format!("Maximum at ({:.2}, {:.2})", best.x, best.y);
    u_evolve::plot::draw_curve(curve, Some(best), &title, &path)?;
    info!("Wrote {}", path.display());
    Ok(())
}
