//! Command dispatch and handlers.

pub mod attach;
pub mod detach;
pub mod fmt;
pub mod list;
pub mod new;
pub mod render;
pub mod show;
pub mod validate;
pub mod walk;

use crate::cli::Command;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::store::DraftStore;

/// Dispatch a parsed command to its handler using the live context.
///
/// Configuration comes from the environment (and `.env`); flags on the
/// command override it.
///
/// # Errors
///
/// Returns an error string if configuration is invalid or the handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let config = Config::from_env().map_err(|e| e.to_string())?;
    let ctx = ServiceContext::live();
    dispatch_with_context(command, &ctx, &config)
}

/// Dispatch a command with the given service context and configuration.
///
/// # Errors
///
/// Returns an error string if the selected handler fails.
pub fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    config: &Config,
) -> Result<(), String> {
    let store = DraftStore::new(ctx, &config.store_root);
    match command {
        Command::New { sample } => new::run(&store, *sample),
        Command::List => list::run(&store),
        Command::Show { id, mode } => show::run(&store, id, mode.unwrap_or(config.strictness)),
        Command::Validate { id, step, mode } => {
            validate::run(&store, id, *step, mode.unwrap_or(config.strictness))
        }
        Command::Walk { id, mode } => walk::run(&store, id, mode.unwrap_or(config.strictness)),
        Command::Attach { id, ui, image } => attach::run(ctx, &store, id, *ui, image),
        Command::Detach { id, ui } => detach::run(&store, id, *ui),
        Command::Fmt { id } => fmt::run(&store, id),
        Command::Render { id, dialect, mode } => render::run(
            &store,
            id,
            dialect.unwrap_or(config.dialect),
            mode.unwrap_or(config.strictness),
        ),
    }
}
