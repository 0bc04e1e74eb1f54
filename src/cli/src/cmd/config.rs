use async_trait::async_trait;
use clap::{value_parser, Arg, Command};

use libschooldesk::config::ClientConfig;
use libschooldesk::error::SchoolDeskError;

use crate::cmd::RunCmd;
pub const NAME: &str = "config";
pub struct ConfigCmd;

#[async_trait]
impl RunCmd for ConfigCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME)
            .about("Shows or sets the client configuration in schooldesk/config.toml")
            .arg(
                Arg::new("api-url")
                    .long("api-url")
                    .short('u')
                    .help("Base url of the API, for example http://localhost:8000/api/v1")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("timeout")
                    .long("timeout")
                    .short('t')
                    .value_parser(value_parser!(u64).range(1..))
                    .help("Request timeout in seconds, at least 1")
                    .action(clap::ArgAction::Set),
            )
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), SchoolDeskError> {
        let path = ClientConfig::default_path()?;
        let mut config = ClientConfig::load(&path)?;

        let api_url = args.get_one::<String>("api-url");
        let timeout = args.get_one::<u64>("timeout");
        if api_url.is_none() && timeout.is_none() {
            println!("config: {}", path.display());
            println!("api_url: {}", config.api_url);
            println!("timeout_secs: {}", config.timeout_secs);
            return Ok(());
        }

        if let Some(api_url) = api_url {
            url::Url::parse(api_url)?;
            config.api_url = api_url.to_owned();
        }
        if let Some(timeout) = timeout {
            config.timeout_secs = *timeout;
        }
        config.save(&path)?;
        println!("Saved {}", path.display());
        Ok(())
    }
}
