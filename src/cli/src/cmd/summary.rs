use async_trait::async_trait;
use clap::{Arg, Command};

use libschooldesk::api;
use libschooldesk::error::SchoolDeskError;

use crate::cmd::RunCmd;
use crate::helpers;
use crate::render;

pub const NAME: &str = "summary";
pub struct SummaryCmd;

#[async_trait]
impl RunCmd for SummaryCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME)
            .about("Dashboard totals for schools, students, invoices and revenue")
            .arg(
                Arg::new("json")
                    .long("json")
                    .help("Print the summary as json")
                    .action(clap::ArgAction::SetTrue),
            )
    }

    async fn run(&self, args: &clap::ArgMatches) -> Result<(), SchoolDeskError> {
        let client = helpers::api_client()?;
        let summary = api::client::dashboard::summary(&client).await?;
        if args.get_flag("json") {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            println!("{}", render::summary_table(&summary));
        }
        Ok(())
    }
}
