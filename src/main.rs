use clap::Parser;

mod commands;
mod output;
mod tty;

use commands::{rename, GlobalArgs};
use tty::{Stream, TerminalConsole};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "stampr")]
#[command(version = VERSION)]
#[command(about = "Prefix file names with their last-modified timestamp")]
#[command(args_override_self = true)]
struct Cli {
    #[command(flatten)]
    rename: rename::RenameArgs,

    /// Print a JSON summary instead of the completion message
    #[arg(long)]
    json: bool,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs { json: cli.json };

    let stream = if global.json {
        Stream::Stderr
    } else {
        Stream::Stdout
    };
    let console = TerminalConsole::new(stream);

    let result = rename::run(cli.rename, &global, console);

    let exit_code = match &result {
        Ok((_, code)) => *code,
        Err(err) => output::exit_code_for_error(err.code),
    };

    if global.json {
        let data = result.map(|(data, _)| data);
        if let Err(err) = output::print_result(&data) {
            output::print_error(&err);
            return std::process::ExitCode::from(exit_code_to_u8(1));
        }
    } else {
        match &result {
            Ok(_) => println!("Files processed successfully."),
            Err(err) => output::print_error(err),
        }
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
