mod args;
mod fetch;
mod params;
mod patch;
mod resolved_command;
mod show_config;

pub use args::{Args, Command, parse_args};
pub use fetch::run_fetch;
pub use params::{FetchParams, PatchParams, ShowConfigParams};
pub use patch::run_patch;
pub use resolved_command::{ResolvedCommand, resolve_command};
pub use show_config::{render_effective_config, run_show_config};
