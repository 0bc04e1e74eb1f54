use clap::{value_parser, Arg, ArgMatches};
use comfy_table::Table;

use libschooldesk::api::client::schools::Schools;
use libschooldesk::error::SchoolDeskError;
use libschooldesk::model::School;
use libschooldesk::opts::{ListQuery, SchoolQuery};

use crate::cmd::resource::{CliResource, CrudCmd};
use crate::helpers;
use crate::render;

pub const NAME: &str = "schools";
pub type SchoolsCmd = CrudCmd<Schools>;

impl CliResource for Schools {
    const COMMAND: &'static str = NAME;
    const ABOUT: &'static str = "Manage the schools of the district";

    fn filter_args() -> Vec<Arg> {
        vec![
            Arg::new("name")
                .long("name")
                .help("Only schools whose name contains this")
                .action(clap::ArgAction::Set),
            Arg::new("city")
                .long("city")
                .action(clap::ArgAction::Set),
            Arg::new("active")
                .long("active")
                .value_parser(value_parser!(bool))
                .help("true or false")
                .action(clap::ArgAction::Set),
        ]
    }

    fn query(args: &ArgMatches) -> Result<SchoolQuery, SchoolDeskError> {
        let query = SchoolQuery {
            name: args.get_one::<String>("name").cloned(),
            city: args.get_one::<String>("city").cloned(),
            is_active: args.get_one::<bool>("active").copied(),
            ..Default::default()
        };
        Ok(query.with_pagination(helpers::paginate_opts(args)))
    }

    fn table(items: &[School]) -> Table {
        render::schools_table(items)
    }
}
