use async_trait::async_trait;
use clap::{Arg, Command};

use libschooldesk::controller::AuthController;
use libschooldesk::error::SchoolDeskError;
use libschooldesk::view::UserNew;

use crate::cmd::RunCmd;
use crate::helpers;

pub const NAME: &str = "register";
pub struct RegisterCmd;

#[async_trait]
impl RunCmd for RegisterCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME)
            .about("Create a new user account")
            .arg(Arg::new("USERNAME").required(true))
            .arg(
                Arg::new("email")
                    .long("email")
                    .short('e')
                    .required(true)
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("password")
                    .long("password")
                    .short('p')
                    .required(true)
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("name")
                    .long("name")
                    .help("Full name")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("role")
                    .long("role")
                    .action(clap::ArgAction::Set),
            )
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), SchoolDeskError> {
        let user = UserNew {
            username: helpers::required_str(args, "USERNAME")?.to_string(),
            email: helpers::required_str(args, "email")?.to_string(),
            password: helpers::required_str(args, "password")?.to_string(),
            full_name: args.get_one::<String>("name").cloned(),
            role: args.get_one::<String>("role").cloned(),
        };

        let auth = AuthController::new(helpers::api_client()?);
        let created = auth.register(&user).await?;
        println!("Registered {created}, log in with `schooldesk login {}`", user.username);
        Ok(())
    }
}
