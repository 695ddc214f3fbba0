use clap::Args;
use serde::Serialize;

use stampr::console::Console;
use stampr::defaults::DEFAULT_ROOT;
use stampr::log_status;
use stampr::walk::LocalTree;
use stampr::{Error, RenameMode, RenameRequest, Renamer, RunReport};

use super::CmdResult;

#[derive(Args, Debug)]
pub struct RenameArgs {
    /// Glob pattern matched against file names (e.g. '*.jpg')
    pub pattern: String,

    /// Recursively process files in subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Show what would be renamed without actually renaming
    #[arg(short, long)]
    pub dry_run: bool,

    /// Rename without prompting for confirmation
    #[arg(short, long)]
    pub force: bool,
}

impl RenameArgs {
    pub fn request(&self) -> stampr::Result<RenameRequest> {
        if self.pattern.is_empty() {
            return Err(Error::validation_invalid_argument(
                "pattern",
                "File pattern must not be empty",
            ));
        }

        Ok(RenameRequest::new(
            DEFAULT_ROOT,
            self.pattern.clone(),
            RenameMode {
                dry_run: self.dry_run,
                force: self.force,
                recursive: self.recursive,
            },
        ))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameOutput {
    pub command: &'static str,
    pub request: RenameRequest,
    pub report: RunReport,
}

pub fn run(
    args: RenameArgs,
    _global: &super::GlobalArgs,
    console: impl Console,
) -> CmdResult<RenameOutput> {
    let request = args.request()?;

    if !request.mode.force && !request.mode.dry_run && !crate::tty::is_stdin_tty() {
        log_status!("rename", "stdin is not a terminal; answers are read from it line by line");
    }

    let mut renamer = Renamer::new(LocalTree::new(), console);
    let report = renamer.run(&request)?;

    Ok((
        RenameOutput {
            command: "rename",
            request,
            report,
        },
        0,
    ))
}
