use async_trait::async_trait;
use clap::{Arg, Command};

use libschooldesk::api;
use libschooldesk::controller::AuthController;
use libschooldesk::error::SchoolDeskError;
use libschooldesk::view::{PasswordChange, ProfileUpdate};

use crate::cmd::RunCmd;
use crate::helpers;

pub const NAME: &str = "me";
pub struct MeCmd;

#[async_trait]
impl RunCmd for MeCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME)
            .about("Show or edit the logged in user")
            .arg(
                Arg::new("email")
                    .long("email")
                    .help("Set a new email")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("name")
                    .long("name")
                    .help("Set a new full name")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("change-password")
                    .long("change-password")
                    .number_of_values(2)
                    .value_names(["CURRENT", "NEW"])
                    .help("Change the password")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("json")
                    .long("json")
                    .help("Print the profile as json")
                    .action(clap::ArgAction::SetTrue),
            )
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), SchoolDeskError> {
        let client = helpers::api_client()?;
        if !client.session().has_session() {
            return Err(SchoolDeskError::session_not_found());
        }

        if let Some(passwords) = args.get_many::<String>("change-password") {
            if let [current, new] = passwords.collect::<Vec<_>>()[..] {
                let change = PasswordChange {
                    current_password: current.to_owned(),
                    new_password: new.to_owned(),
                };
                let response = api::client::auth::change_password(&client, &change).await?;
                println!("{}", response.message);
            } else {
                return Err(SchoolDeskError::invalid_input(
                    "invalid arguments for --change-password",
                ));
            }
        }

        let update = ProfileUpdate {
            email: args.get_one::<String>("email").cloned(),
            full_name: args.get_one::<String>("name").cloned(),
            is_active: None,
        };
        let user = if update == ProfileUpdate::default() {
            let auth = AuthController::new(client);
            match auth.load_current_user().await {
                Some(user) => user,
                None => {
                    let message = auth.error().unwrap_or_else(|| String::from("Not logged in"));
                    return Err(SchoolDeskError::basic_str(message));
                }
            }
        } else {
            api::client::auth::update_profile(&client, &update).await?
        };

        if args.get_flag("json") {
            println!("{}", serde_json::to_string_pretty(&user)?);
        } else {
            println!("{user}");
            if let Some(role) = &user.role {
                println!("role: {role}");
            }
        }
        Ok(())
    }
}
