use std::path::PathBuf;

use clap::{Parser, Subcommand};
use taskheap::output::Format;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "taskheap",
    version,
    about = "Priority-ordered task tracker with completion dependencies"
)]
struct Cli {
    /// Snapshot file holding pending and completed tasks
    #[arg(long, global = true, env = "TASKHEAP_FILE", default_value = "tasks.json")]
    file: PathBuf,
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "pretty")]
    format: Format,
    /// Shorthand for --format pretty
    #[arg(long, global = true, hide = true)]
    pretty: bool,
    /// Log at debug level when RUST_LOG sets no level of its own
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a pending task
    Add {
        /// Task name (unique among pending tasks)
        name: String,
        /// Priority; lower is more urgent
        #[arg(long, short, allow_hyphen_values = true)]
        priority: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: String,
        /// Names of tasks that must be completed first (comma-separated)
        #[arg(long, value_delimiter = ',')]
        depends_on: Vec<String>,
    },
    /// List pending tasks, most urgent first
    List,
    /// Complete a named task, or the most urgent one when no name is given
    Complete {
        /// Task name
        name: Option<String>,
    },
    /// Show the most urgent pending task without completing it
    Next,
    /// List completed tasks in completion order
    Completed,
    /// Add a small demonstration backlog
    Seed,
    /// Interactive menu (default)
    Menu,
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli, format: Format) -> taskheap::error::Result<()> {
    let file = cli.file;
    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Add {
            name,
            priority,
            due,
            depends_on,
        } => taskheap::commands::add::run(&file, name, priority, due, depends_on, format),
        Commands::List => taskheap::commands::list::run(&file, format),
        Commands::Complete { name } => taskheap::commands::complete::run(&file, name, format),
        Commands::Next => taskheap::commands::next::run(&file, format),
        Commands::Completed => taskheap::commands::completed::run(&file, format),
        Commands::Seed => taskheap::commands::seed::run(&file, format),
        Commands::Menu => taskheap::commands::menu::run(&file, format),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let format = if cli.pretty {
        Format::Pretty
    } else {
        cli.format
    };
    if let Err(e) = run(cli, format) {
        match format {
            Format::Json => {
                eprintln!(
                    "{}",
                    serde_json::json!({
                        "error": e.code(),
                        "message": e.to_string()
                    })
                );
            }
            _ => eprintln!("error: {e}"),
        }
        std::process::exit(1);
    }
}
