//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use taskflow::output::OutputMode;

mod commands;

/// taskflow - Task management with urgency classification and notifications
#[derive(Parser, Debug)]
#[command(
    name = "taskflow",
    version,
    about = "Task management with urgency classification and smart notifications",
    long_about = "Manage tasks in the current workspace.\n\n\
                  The classifier derives stats and urgency buckets from your tasks.\n\
                  Sweeps turn due-soon and overdue tasks into notifications, once each."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize taskflow in the current directory
    Init {
        /// Overwrite an existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Add a task
    Add {
        /// Task title
        title: String,

        /// Longer description
        #[arg(short = 'D', long)]
        description: Option<String>,

        /// Priority: low, medium, high, urgent
        #[arg(short, long, default_value = "medium")]
        priority: String,

        /// Due date: RFC3339, YYYY-MM-DD, or relative (+12h, +3d)
        #[arg(short, long)]
        due: Option<String>,

        /// Owning project id
        #[arg(long)]
        project: Option<String>,
    },

    /// List tasks in canonical order
    List {
        /// Only tasks in this status
        #[arg(short, long)]
        status: Option<String>,

        /// Case-insensitive substring search
        #[arg(short = 'q', long)]
        search: Option<String>,
    },

    /// Show one task with its comments
    Show {
        /// Task ID
        id: String,
    },

    /// Change a task's status
    Status {
        /// Task ID
        id: String,

        /// New status: todo, in_progress, review, done
        status: String,
    },

    /// Mark a task done (shorthand for `status <id> done`)
    Done {
        /// Task ID
        id: String,
    },

    /// Comment on a task
    Comment {
        /// Task ID
        id: String,

        /// Comment text
        text: String,

        /// Comment author (defaults to the configured user)
        #[arg(short, long)]
        author: Option<String>,
    },

    /// List open tasks due within the upcoming window
    Upcoming {
        /// Window in days (defaults to the configured window)
        #[arg(short, long)]
        window: Option<i64>,
    },

    /// Show status counts and completion rate
    Stats,

    /// Show the full dashboard summary
    Analytics,

    /// Issue due-soon and overdue notifications
    Sweep,

    /// List notifications
    Notifications {
        /// Only unread notifications
        #[arg(short, long)]
        unread: bool,
    },

    /// Mark a notification read
    Read {
        /// Notification ID
        id: String,
    },

    /// Serve the JSON API over HTTP
    #[cfg(feature = "api")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 8321)]
        port: u16,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Init { force }) => commands::init(force, output_mode),
        Some(Command::Add {
            title,
            description,
            priority,
            due,
            project,
        }) => commands::add(&title, description, &priority, due.as_deref(), project, output_mode),
        Some(Command::List { status, search }) => {
            commands::list(status.as_deref(), search.as_deref(), output_mode)
        },
        Some(Command::Show { id }) => commands::show(&id, output_mode),
        Some(Command::Status { id, status }) => commands::set_status(&id, &status, output_mode),
        Some(Command::Done { id }) => commands::set_status(&id, "done", output_mode),
        Some(Command::Comment { id, text, author }) => {
            commands::comment(&id, &text, author.as_deref(), output_mode)
        },
        Some(Command::Upcoming { window }) => commands::upcoming(window, output_mode),
        Some(Command::Stats) => commands::stats(output_mode),
        Some(Command::Analytics) => commands::analytics(output_mode),
        Some(Command::Sweep) => commands::sweep(output_mode),
        Some(Command::Notifications { unread }) => commands::notifications(unread, output_mode),
        Some(Command::Read { id }) => commands::mark_read(&id, output_mode),
        #[cfg(feature = "api")]
        Some(Command::Serve { port }) => commands::serve(port),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("taskflow v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("taskflow v{}", env!("CARGO_PKG_VERSION"));
                println!("Use --help for usage");
            }
            Ok(())
        },
    }
}
