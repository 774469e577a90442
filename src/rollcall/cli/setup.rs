use chrono::NaiveDate;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use rollcall::export::ExportFormat;
use rollcall::model::StudentStatus;
use rollcall::pipeline::{SortField, SortOrder};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "rollcall",
    bin_name = "rollcall",
    version = get_version(),
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Browse and manage a school's student roster", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Backend base URL (overrides config and ROLLCALL_API_URL)
    #[arg(long, global = true, value_name = "URL", help_heading = "Options")]
    pub api_url: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,

    /// Date used to compute ages, YYYY-MM-DD
    #[arg(long, global = true, hide = true, value_name = "DATE")]
    pub today: Option<NaiveDate>,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Core,
    Student,
    Data,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Core => "Core Commands:",
            CommandGroup::Student => "Student Commands:",
            CommandGroup::Data => "Data Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "list" | "stats" | "sort" => Some(CommandGroup::Core),
            "add" | "edit" | "remove" | "enroll" => Some(CommandGroup::Student),
            "export" => Some(CommandGroup::Data),
            "config" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Core,
            CommandGroup::Student,
            CommandGroup::Data,
            CommandGroup::Misc,
        ]
    }
}

pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("rollcall {version}\n"));
    output.push_str("Browse and manage a school's student roster\n");
    output.push('\n');
    output.push_str("Usage: rollcall [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("      --api-url <URL>  Backend base URL\n");
    output.push_str("  -v, --verbose        Verbose output\n");
    output.push_str("  -h, --help           Print help\n");
    output.push_str("  -V, --version        Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Core(c) => match c {
            CoreCommands::List { .. } => "list",
            CoreCommands::Stats => "stats",
            CoreCommands::Sort { .. } => "sort",
        },
        Commands::Student(c) => match c {
            StudentCommands::Add { .. } => "add",
            StudentCommands::Edit { .. } => "edit",
            StudentCommands::Remove { .. } => "remove",
            StudentCommands::Enroll { .. } => "enroll",
        },
        Commands::Data(c) => match c {
            DataCommands::Export { .. } => "export",
        },
        Commands::Misc(c) => match c {
            MiscCommands::Config { .. } => "config",
            MiscCommands::Help { .. } => "help",
        },
    }
}

/// Prints clap's help for one subcommand, or the grouped help for an unknown name.
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name || subcmd.get_all_aliases().any(|a| a == name) {
            print!("{}", subcmd.render_help());
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Student(StudentCommands),

    #[command(flatten)]
    Data(DataCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

/// Narrowing shared by `list` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only students in this class (class id)
    #[arg(short, long, value_name = "CLASS_ID")]
    pub class: Option<String>,

    /// Only students with this status (active, inactive)
    #[arg(long)]
    pub status: Option<StudentStatus>,

    /// Case-insensitive text to look for in names
    #[arg(short, long)]
    pub search: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum CoreCommands {
    /// List students
    #[command(alias = "ls", display_order = 1)]
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show total, active and per-class counts
    #[command(display_order = 2)]
    Stats,

    /// Show or change the sort order
    #[command(display_order = 3)]
    Sort {
        /// Field to sort by; without --order the current order is flipped
        #[arg(value_enum)]
        field: Option<SortFieldArg>,

        /// Sort order
        #[arg(short, long, value_enum)]
        order: Option<SortOrderArg>,
    },
}

#[derive(Subcommand, Debug)]
pub enum StudentCommands {
    /// Add a student
    #[command(alias = "n", display_order = 10)]
    Add {
        /// Full name (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// Birth date, YYYY-MM-DD
        #[arg(short, long, value_name = "DATE")]
        born: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        /// Class id
        #[arg(short, long, value_name = "CLASS_ID")]
        class: Option<String>,

        #[arg(long, default_value = "active")]
        status: StudentStatus,
    },

    /// Edit a student; only the given fields change
    #[command(alias = "e", display_order = 11)]
    Edit {
        /// Student id
        id: String,

        #[arg(short, long)]
        name: Option<String>,

        /// Birth date, YYYY-MM-DD
        #[arg(short, long, value_name = "DATE")]
        born: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        /// Class id
        #[arg(short, long, value_name = "CLASS_ID")]
        class: Option<String>,

        #[arg(long)]
        status: Option<StudentStatus>,
    },

    /// Remove a student
    #[command(alias = "rm", display_order = 12)]
    Remove {
        /// Student id
        id: String,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Enroll a student in a class
    #[command(display_order = 13)]
    Enroll {
        /// Student id
        student: String,

        /// Class id
        class: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// Export the listed students as CSV or JSON
    #[command(display_order = 20)]
    Export {
        #[arg(value_enum)]
        format: FormatArg,

        /// Destination file, or - for stdout (default: students.<format> here)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Compress with gzip
        #[arg(short = 'z', long)]
        gzip: bool,

        #[command(flatten)]
        filters: FilterArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (api-url, timeout)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print help for rollcall or a subcommand
    #[command(display_order = 31)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortFieldArg {
    Name,
    Age,
}

impl From<SortFieldArg> for SortField {
    fn from(arg: SortFieldArg) -> Self {
        match arg {
            SortFieldArg::Name => SortField::Name,
            SortFieldArg::Age => SortField::Age,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortOrderArg {
    Asc,
    Desc,
}

impl From<SortOrderArg> for SortOrder {
    fn from(arg: SortOrderArg) -> Self {
        match arg {
            SortOrderArg::Asc => SortOrder::Asc,
            SortOrderArg::Desc => SortOrder::Desc,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Json,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Json => ExportFormat::Json,
        }
    }
}
