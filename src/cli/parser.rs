use clap::{Parser, Subcommand};

/// Command-line interface definition for schooltasks
/// CLI application to track school assignments with SQLite
#[derive(Parser)]
#[command(
    name = "schooltasks",
    version = env!("CARGO_PKG_VERSION"),
    about = "A school task monitoring CLI: assignment calendar, comments and progress reports using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init {
        /// Sign-in email of the local user
        #[arg(long = "email")]
        email: Option<String>,

        /// Display name of the local user
        #[arg(long = "name")]
        name: Option<String>,

        /// Register the local user as administrator
        #[arg(long = "admin")]
        admin: bool,
    },

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print rows from the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a new task (administrator only)
    Add {
        /// Task title
        title: String,

        #[arg(long = "subject", help = "Subject label, e.g. Math")]
        subject: String,

        #[arg(long = "desc", help = "Task description", default_value = "")]
        description: String,

        /// Assignment date (YYYY-MM-DD, default today)
        #[arg(long = "assigned")]
        assigned: Option<String>,

        /// Delivery date (YYYY-MM-DD, default tomorrow)
        #[arg(long = "due")]
        due: Option<String>,

        /// Attach a local file (repeatable; order is preserved)
        #[arg(long = "file", value_name = "PATH")]
        files: Vec<String>,
    },

    /// Render the monthly calendar with binned tasks
    Calendar {
        /// Month to display, 1-12 (default: current month)
        #[arg(long = "month")]
        month: Option<u32>,

        /// Year to display (default: current year)
        #[arg(long = "year")]
        year: Option<i32>,
    },

    /// Change the status of a task
    Status {
        /// Task id
        task_id: i64,

        /// New status: pending, in_progress or completed
        status: String,
    },

    /// Delete a task by id
    Del {
        task_id: i64,
    },

    /// List or add comments on a task
    Comment {
        /// Task id
        task_id: i64,

        #[arg(long = "add", value_name = "TEXT", help = "Add a comment")]
        add: Option<String>,
    },

    /// Show the progress report (task, parent and session metrics)
    Report,

    /// Record or list parent access events
    Access {
        #[arg(long = "log", help = "Record an access event for the current user")]
        log: bool,

        #[arg(long = "device", help = "Device label stored with --log")]
        device: Option<String>,

        #[arg(long = "list", help = "List the most recent access events")]
        list: bool,
    },

    /// Send due-tomorrow reminders to every parent
    Remind {
        #[arg(long = "force", help = "Ignore the once-per-day guard")]
        force: bool,
    },
}
