use async_trait::async_trait;
use clap::{Arg, ArgMatches, Command};

use libschooldesk::api;
use libschooldesk::error::SchoolDeskError;

use crate::cmd::RunCmd;
use crate::helpers;
use crate::render;

pub const NAME: &str = "users";
pub struct UsersCmd;

#[async_trait]
impl RunCmd for UsersCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME)
            .about("Look up user accounts (admin only)")
            .subcommand_required(true)
            .arg_required_else_help(true)
            .subcommand(Command::new("list").about("List every user"))
            .subcommand(
                Command::new("get")
                    .about("Show one user")
                    .arg(Arg::new("ID").required(true)),
            )
    }

    async fn run(&self, args: &ArgMatches) -> Result<(), SchoolDeskError> {
        let client = helpers::api_client()?;
        match args.subcommand() {
            Some(("list", _)) => {
                let users = api::client::users::list(&client).await?;
                println!("{}", render::users_table(&users));
            }
            Some(("get", sub_args)) => {
                let id = helpers::required_str(sub_args, "ID")?;
                let user = api::client::users::get(&client, id).await?;
                println!("{}", serde_json::to_string_pretty(&user)?);
            }
            Some((name, _)) => {
                return Err(SchoolDeskError::basic_str(format!(
                    "Unknown users subcommand {name}"
                )));
            }
            None => {
                return Err(SchoolDeskError::basic_str("Usage: schooldesk users <list|get>"));
            }
        }
        Ok(())
    }
}
