use async_trait::async_trait;
use clap::Command;

use libschooldesk::controller::AuthController;
use libschooldesk::error::SchoolDeskError;

use crate::cmd::RunCmd;
use crate::helpers;

pub const NAME: &str = "logout";
pub struct LogoutCmd;

#[async_trait]
impl RunCmd for LogoutCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME).about("End the session and forget the stored tokens")
    }

    async fn run(&self, _args: &clap::ArgMatches) -> Result<(), SchoolDeskError> {
        let auth = AuthController::new(helpers::api_client()?);
        auth.logout().await;
        println!("Logged out");
        Ok(())
    }
}
