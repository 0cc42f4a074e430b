use clap::{Parser, Subcommand};
use serde::Serialize;
use std::{fmt::Display, path::PathBuf, process::ExitCode};
use tilesearch::{
    problems::{cube::Cube, river_crossing::RiverCrossing},
    search::{
        search_engines::{SearchEngineName, SearchResult},
        validate, Problem, SearchError, Verbosity,
    },
};
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Solve a search problem with one of the tilesearch engines.
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(
        help = "The output plan file, written as JSON if the extension is \
        `json` and as one action per line otherwise",
        short = 'o',
        long = "output",
        id = "OUTPUT",
        global = true
    )]
    plan: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The search engine to use",
        short = 'e',
        long = "engine",
        id = "ENGINE",
        global = true,
        default_value_t = SearchEngineName::AStar
    )]
    search_engine_name: SearchEngineName,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        global = true,
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(
        help = "Whether to use coloured output",
        short = 'c',
        long = "colour",
        global = true
    )]
    colour: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a tile-cube puzzle read from a JSON or TOML description.
    Cube {
        #[arg(help = "The cube description file")]
        path: PathBuf,
    },
    /// Solve a missionaries and cannibals river crossing.
    River {
        #[arg(help = "Number of missionaries", short = 'm', long = "missionaries")]
        missionaries: u32,
        #[arg(help = "Number of cannibals", short = 'n', long = "cannibals")]
        cannibals: u32,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let outcome = match &cli.command {
        Commands::Cube { path } => Cube::from_path(path).and_then(|cube| {
            println!("Initial state:\n{}", cube.initial());
            solve(&cli, &cube)
        }),
        Commands::River {
            missionaries,
            cannibals,
        } => solve(&cli, &RiverCrossing::new(*missionaries, *cannibals)),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn solve<P>(cli: &Cli, problem: &P) -> Result<(), SearchError>
where
    P: Problem,
    P::Action: Display + Serialize,
{
    let result = cli.search_engine_name.search(problem)?;

    match result {
        SearchResult::Success(plan) => {
            info!("validating plan");
            let cost = validate(problem, &plan).into_cost()?;
            info!("plan is valid");
            info!(plan_length = plan.len(), plan_cost = %cost);

            println!("Plan found:");
            println!("{}", plan);
            println!("Plan length: {}", plan.len());
            println!("Plan cost: {}", cost);

            if let Some(plan_path) = &cli.plan {
                let contents = match plan_path.extension().and_then(|e| e.to_str()) {
                    Some("json") => serde_json::to_string_pretty(&plan)?,
                    _ => plan.to_string(),
                };
                std::fs::write(plan_path, contents)?;
                info!(path = %plan_path.display(), "plan written");
            }
        }
        SearchResult::ProvablyUnsolvable => {
            info!("no plan found");
            println!("No plan found: the problem is unsolvable");
        }
    }
    Ok(())
}
