//! Dispatch from parsed arguments to the API, and from `CmdResult`s to the
//! terminal. Business rules live in the library; handlers here only decide
//! what to fetch, what to ask the user and where output goes.

use super::print::TerminalRenderer;
use super::setup::{
    command_name, print_grouped_help, print_help_for_command, Cli, Commands, CoreCommands,
    DataCommands, FilterArgs, MiscCommands, StudentCommands,
};
use chrono::{Local, NaiveDate};
use directories::ProjectDirs;
use rollcall::api::{RollcallApi, SortAction};
use rollcall::commands::config::{self as config_cmd, ConfigAction};
use rollcall::config::RollcallConfig;
use rollcall::error::{RollcallError, Result};
use rollcall::export::ExportFormat;
use rollcall::model::{ClassId, StudentDraft, StudentId, StudentPatch, StudentStatus};
use rollcall::pipeline::{FilterCriteria, SortField, SortOrder, SortSpec};
use rollcall::render::RosterRenderer;
use rollcall::source::http::HttpSource;
use rollcall::store::fs::FileKvStore;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

pub const HOME_ENV: &str = "ROLLCALL_HOME";

struct AppContext {
    api: RollcallApi<HttpSource, FileKvStore>,
    today: NaiveDate,
    out: TerminalRenderer<std::io::Stdout>,
}

pub fn run(cli: Cli) -> Result<()> {
    if cli.help {
        match &cli.command {
            Some(command) => print_help_for_command(command_name(command)),
            None => print_grouped_help(),
        }
        return Ok(());
    }

    let home = home_dir()?;

    // Neither of these needs the backend.
    match &cli.command {
        Some(Commands::Misc(MiscCommands::Help { command })) => {
            match command {
                Some(name) => print_help_for_command(name),
                None => print_grouped_help(),
            }
            return Ok(());
        }
        Some(Commands::Misc(MiscCommands::Config { key, value })) => {
            return handle_config(&home, key.clone(), value.clone());
        }
        _ => {}
    }

    let mut ctx = init_context(&cli, &home)?;

    match cli.command {
        Some(Commands::Core(cmd)) => match cmd {
            CoreCommands::List { filters } => handle_list(&mut ctx, filters),
            CoreCommands::Stats => handle_stats(&mut ctx),
            CoreCommands::Sort { field, order } => {
                handle_sort(&mut ctx, field.map(Into::into), order.map(Into::into))
            }
        },
        Some(Commands::Student(cmd)) => match cmd {
            StudentCommands::Add {
                name,
                born,
                email,
                class,
                status,
            } => handle_add(&mut ctx, name.join(" "), born, email, class, status),
            StudentCommands::Edit {
                id,
                name,
                born,
                email,
                class,
                status,
            } => {
                let patch = StudentPatch {
                    name,
                    birth_date: born,
                    email,
                    status,
                    class_id: class.map(ClassId::new),
                };
                handle_edit(&mut ctx, StudentId::new(id), patch)
            }
            StudentCommands::Remove { id, yes } => handle_remove(&mut ctx, StudentId::new(id), yes),
            StudentCommands::Enroll { student, class } => {
                handle_enroll(&mut ctx, StudentId::new(student), ClassId::new(class))
            }
        },
        Some(Commands::Data(cmd)) => match cmd {
            DataCommands::Export {
                format,
                output,
                gzip,
                filters,
            } => handle_export(&mut ctx, format.into(), output, gzip, filters),
        },
        // Handled before the context was built.
        Some(Commands::Misc(_)) => Ok(()),
        None => handle_list(&mut ctx, FilterArgs::default()),
    }
}

/// `ROLLCALL_HOME`, else the platform data directory.
fn home_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|h| !h.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "rollcall", "rollcall")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RollcallError::Config("Could not determine a data directory".into()))
}

fn init_context(cli: &Cli, home: &Path) -> Result<AppContext> {
    let mut config = RollcallConfig::load(home)?.with_env(|key| std::env::var(key).ok());
    if let Some(url) = &cli.api_url {
        config
            .set("api-url", url)
            .map_err(RollcallError::Config)?;
    }

    let source = HttpSource::new(&config.api_url, config.timeout())?;
    let store = FileKvStore::new(home);

    Ok(AppContext {
        api: RollcallApi::new(source, store),
        today: cli.today.unwrap_or_else(|| Local::now().date_naive()),
        out: TerminalRenderer::stdout(),
    })
}

fn criteria(filters: FilterArgs) -> FilterCriteria {
    FilterCriteria {
        class_id: filters.class.map(ClassId::new),
        status: filters.status,
        search: filters.search,
    }
}

fn handle_list(ctx: &mut AppContext, filters: FilterArgs) -> Result<()> {
    ctx.api.refresh()?;
    let result = ctx.api.list_students(criteria(filters), ctx.today)?;
    ctx.out.render_students(&result.listed_students)?;
    ctx.out.render_messages(&result.messages)
}

fn handle_stats(ctx: &mut AppContext) -> Result<()> {
    ctx.api.refresh()?;
    let result = ctx.api.stats()?;
    if let Some(summary) = &result.summary {
        ctx.out.render_summary(summary, &result.classes)?;
    }
    ctx.out.render_messages(&result.messages)
}

fn handle_sort(
    ctx: &mut AppContext,
    field: Option<SortField>,
    order: Option<SortOrder>,
) -> Result<()> {
    let action = match (field, order) {
        (None, None) => SortAction::Show,
        (Some(field), None) => SortAction::Toggle(field),
        (Some(field), Some(order)) => SortAction::Set(SortSpec::new(field, order)),
        (None, Some(order)) => SortAction::Set(SortSpec::new(ctx.api.state().sort.field, order)),
    };
    let result = ctx.api.sort(action)?;
    ctx.out.render_messages(&result.messages)
}

fn handle_add(
    ctx: &mut AppContext,
    name: String,
    born: Option<String>,
    email: Option<String>,
    class: Option<String>,
    status: StudentStatus,
) -> Result<()> {
    let draft = StudentDraft {
        name,
        birth_date: born.unwrap_or_default(),
        email: email.unwrap_or_default(),
        status,
        class_id: class.map(ClassId::new),
    };
    let result = ctx.api.create_student(draft, ctx.today)?;
    ctx.out.render_messages(&result.messages)
}

fn handle_edit(ctx: &mut AppContext, id: StudentId, patch: StudentPatch) -> Result<()> {
    ctx.api.refresh()?;
    let result = ctx.api.update_student(&id, patch, ctx.today)?;
    ctx.out.render_messages(&result.messages)
}

fn handle_remove(ctx: &mut AppContext, id: StudentId, yes: bool) -> Result<()> {
    ctx.api.refresh()?;

    if !yes {
        let name = ctx
            .api
            .state()
            .student(&id)
            .map(|s| s.name.clone())
            .ok_or_else(|| RollcallError::StudentNotFound(id.clone()))?;
        if !confirm(&format!("Remove {} ({})?", name, id))? {
            println!("Aborted.");
            return Ok(());
        }
    }

    let result = ctx.api.delete_student(&id)?;
    ctx.out.render_messages(&result.messages)
}

fn handle_enroll(ctx: &mut AppContext, student: StudentId, class: ClassId) -> Result<()> {
    ctx.api.refresh()?;
    let result = ctx.api.enroll(&student, &class)?;
    ctx.out.render_messages(&result.messages)
}

fn handle_export(
    ctx: &mut AppContext,
    format: ExportFormat,
    output: Option<PathBuf>,
    gzip: bool,
    filters: FilterArgs,
) -> Result<()> {
    ctx.api.refresh()?;
    let result = ctx
        .api
        .export(criteria(filters), format, gzip, ctx.today)?;
    let export = result
        .export
        .as_ref()
        .ok_or_else(|| RollcallError::Export("nothing was exported".into()))?;

    let to_stdout = output.as_deref() == Some(Path::new("-"));
    if to_stdout {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&export.content)?;
        stdout.flush()?;
        // Keep stdout clean for the data.
        let mut err = TerminalRenderer::new(std::io::stderr(), false);
        return err.render_messages(&result.messages);
    }

    let path = output.unwrap_or_else(|| PathBuf::from(&export.filename));
    std::fs::write(&path, &export.content)?;

    ctx.out.render_messages(&result.messages)?;
    println!("Exported {} students to {}", export.count, path.display());
    Ok(())
}

fn handle_config(home: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let show_all = matches!(action, ConfigAction::ShowAll);
    let result = config_cmd::run(home, action)?;
    if show_all {
        if let Some(config) = &result.config {
            for key in rollcall::config::KEYS {
                if let Some(value) = config.get(key) {
                    println!("{} = {}", key, value);
                }
            }
        }
    }
    TerminalRenderer::stdout().render_messages(&result.messages)
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
