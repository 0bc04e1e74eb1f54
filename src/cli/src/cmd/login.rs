use async_trait::async_trait;
use clap::{Arg, Command};
use dialoguer::Password;

use libschooldesk::controller::AuthController;
use libschooldesk::error::SchoolDeskError;
use libschooldesk::view::LoginRequest;

use crate::cmd::RunCmd;
use crate::helpers;

pub const NAME: &str = "login";
pub struct LoginCmd;

#[async_trait]
impl RunCmd for LoginCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME)
            .about("Log in and store the session tokens")
            .arg(Arg::new("USERNAME").required(true))
            .arg(
                Arg::new("password")
                    .long("password")
                    .short('p')
                    .help("Password, prompted for when left out")
                    .action(clap::ArgAction::Set),
            )
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), SchoolDeskError> {
        let username = helpers::required_str(args, "USERNAME")?;
        let password = match args.get_one::<String>("password") {
            Some(password) => password.to_owned(),
            None => prompt_password()?,
        };

        let auth = AuthController::new(helpers::api_client()?);
        let user = auth.login(&LoginRequest::new(username, password)).await?;
        println!("Logged in as {user}");
        Ok(())
    }
}

fn prompt_password() -> Result<String, SchoolDeskError> {
    match Password::new().with_prompt("Password").interact() {
        Ok(password) => Ok(password),
        Err(e) => Err(SchoolDeskError::basic_str(format!(
            "Error reading password: {e}"
        ))),
    }
}
