use std::path::PathBuf;
use std::process;

use chrono::Utc;
use clap::{Args, Parser, Subcommand};

use smartstudy::error::PlanError;
use smartstudy::inputs::{Difficulty, LearningStyle, StudyInputs};
use smartstudy::logging;
use smartstudy::pipelines;
use smartstudy::planner;
use smartstudy::report::{self, store};
use smartstudy::state::app::AppState;

#[derive(Parser)]
#[command(name = "smartstudy")]
#[command(about = "AI-assisted study planner", long_about = None)]
struct Cli {
    /// Path to planner.toml (defaults to ./planner.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// Daily study hours (1-6)
    #[arg(long)]
    hours: f32,

    /// Subject difficulty: easy, medium, or hard
    #[arg(long)]
    difficulty: String,

    /// Days left until the exam (3-30)
    #[arg(long)]
    days: u32,

    /// Learning style: visual, auditory, or kinesthetic
    #[arg(long)]
    style: String,

    /// Also write the report to a text file
    #[arg(long)]
    save: bool,

    /// Directory for saved reports
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the focus/review hour breakdown from the trained model
    Breakdown(InputArgs),
    /// Ask the generative service for a full free-form study plan
    AiPlan(InputArgs),
}

fn parse_inputs(args: &InputArgs) -> Result<StudyInputs, PlanError> {
    let difficulty: Difficulty = args.difficulty.parse()?;
    let style: LearningStyle = args.style.parse()?;
    StudyInputs::new(args.hours, difficulty, args.days, style)
}

async fn run(cli: Cli) -> Result<(), PlanError> {
    let state = AppState::init(cli.config.as_deref())?;

    match cli.command {
        Commands::Breakdown(args) => {
            let inputs = parse_inputs(&args)?;
            let breakdown = planner::build_breakdown(&state, &inputs)?;
            let text = report::render_breakdown(
                &breakdown,
                Utc::now().date_naive(),
                &state.config.report_title,
            );
            println!("{text}");

            if args.save {
                let path =
                    store::save_report(&args.out_dir, store::BREAKDOWN_FILENAME, &text).await?;
                println!("Saved to {}", path.display());
            }
        }
        Commands::AiPlan(args) => {
            let inputs = parse_inputs(&args)?;
            let plan = pipelines::generate_full_plan(&state, &inputs).await?;
            let text = report::render_ai_report(&plan);
            println!("{text}");

            if args.save {
                let path =
                    store::save_report(&args.out_dir, store::AI_PLAN_FILENAME, &text).await?;
                println!("Saved to {}", path.display());
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    logging::init_logging();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
