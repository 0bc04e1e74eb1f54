use std::collections::HashMap;
use std::process::ExitCode;

use clap::Command;
use libschooldesk::util::logging;

pub mod cmd;
pub mod helpers;
pub mod render;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init_logging("warn");

    let cmds: Vec<Box<dyn cmd::RunCmd>> = vec![
        Box::new(cmd::ConfigCmd),
        Box::new(cmd::InvoicesCmd::new()),
        Box::new(cmd::LoginCmd),
        Box::new(cmd::LogoutCmd),
        Box::new(cmd::MeCmd),
        Box::new(cmd::RegisterCmd),
        Box::new(cmd::SchoolsCmd::new()),
        Box::new(cmd::StudentsCmd::new()),
        Box::new(cmd::SummaryCmd),
        Box::new(cmd::UsersCmd),
    ];

    let mut command = Command::new("schooldesk")
        .version(libschooldesk::constants::SCHOOLDESK_VERSION)
        .about("🏫 Back office console for schools, students and invoices")
        .subcommand_required(true)
        .arg_required_else_help(true);

    let mut runners: HashMap<String, Box<dyn cmd::RunCmd>> = HashMap::new();
    for cmd in cmds {
        command = command.subcommand(cmd.args());
        runners.insert(cmd.name().to_string(), cmd);
    }

    let matches = command.get_matches();
    let Some((name, args)) = matches.subcommand() else {
        return ExitCode::FAILURE;
    };
    let Some(runner) = runners.get(name) else {
        eprintln!("Unknown command `schooldesk {name}`");
        return ExitCode::FAILURE;
    };

    match runner.run(args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
