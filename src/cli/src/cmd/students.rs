use clap::{value_parser, Arg, ArgMatches};
use comfy_table::Table;

use libschooldesk::api::client::students::Students;
use libschooldesk::error::SchoolDeskError;
use libschooldesk::model::Student;
use libschooldesk::opts::{ListQuery, StudentQuery};

use crate::cmd::resource::{CliResource, CrudCmd};
use crate::helpers;
use crate::render;

pub const NAME: &str = "students";
pub type StudentsCmd = CrudCmd<Students>;

impl CliResource for Students {
    const COMMAND: &'static str = NAME;
    const ABOUT: &'static str = "Manage enrolled students";

    fn filter_args() -> Vec<Arg> {
        vec![
            Arg::new("first-name")
                .long("first-name")
                .action(clap::ArgAction::Set),
            Arg::new("last-name")
                .long("last-name")
                .action(clap::ArgAction::Set),
            Arg::new("school")
                .long("school")
                .value_name("SCHOOL_ID")
                .help("Only students of this school")
                .action(clap::ArgAction::Set),
            Arg::new("grade")
                .long("grade")
                .action(clap::ArgAction::Set),
            Arg::new("active")
                .long("active")
                .value_parser(value_parser!(bool))
                .help("true or false")
                .action(clap::ArgAction::Set),
        ]
    }

    fn query(args: &ArgMatches) -> Result<StudentQuery, SchoolDeskError> {
        let query = StudentQuery {
            first_name: args.get_one::<String>("first-name").cloned(),
            last_name: args.get_one::<String>("last-name").cloned(),
            school_id: args.get_one::<String>("school").cloned(),
            grade_level: args.get_one::<String>("grade").cloned(),
            is_active: args.get_one::<bool>("active").copied(),
            ..Default::default()
        };
        Ok(query.with_pagination(helpers::paginate_opts(args)))
    }

    fn table(items: &[Student]) -> Table {
        render::students_table(items)
    }
}
