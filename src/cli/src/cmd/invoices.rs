use clap::{value_parser, Arg, ArgMatches};
use comfy_table::Table;

use libschooldesk::api::client::invoices::Invoices;
use libschooldesk::error::SchoolDeskError;
use libschooldesk::model::{Invoice, InvoiceStatus};
use libschooldesk::opts::{InvoiceQuery, ListQuery};

use crate::cmd::resource::{CliResource, CrudCmd};
use crate::helpers;
use crate::render;

pub const NAME: &str = "invoices";
pub type InvoicesCmd = CrudCmd<Invoices>;

impl CliResource for Invoices {
    const COMMAND: &'static str = NAME;
    const ABOUT: &'static str = "Manage school invoices";

    fn filter_args() -> Vec<Arg> {
        vec![
            Arg::new("number")
                .long("number")
                .value_name("INVOICE_NUMBER")
                .action(clap::ArgAction::Set),
            Arg::new("school")
                .long("school")
                .value_name("SCHOOL_ID")
                .action(clap::ArgAction::Set),
            Arg::new("status")
                .long("status")
                .value_parser(["pending", "paid", "overdue", "cancelled"])
                .action(clap::ArgAction::Set),
            Arg::new("min")
                .long("min")
                .value_parser(value_parser!(f64))
                .help("Smallest amount")
                .action(clap::ArgAction::Set),
            Arg::new("max")
                .long("max")
                .value_parser(value_parser!(f64))
                .help("Largest amount")
                .action(clap::ArgAction::Set),
        ]
    }

    fn query(args: &ArgMatches) -> Result<InvoiceQuery, SchoolDeskError> {
        let status = match args.get_one::<String>("status") {
            Some(status) => Some(status.parse::<InvoiceStatus>()?),
            None => None,
        };
        let query = InvoiceQuery {
            invoice_number: args.get_one::<String>("number").cloned(),
            school_id: args.get_one::<String>("school").cloned(),
            status,
            amount_min: args.get_one::<f64>("min").copied(),
            amount_max: args.get_one::<f64>("max").copied(),
            ..Default::default()
        };
        Ok(query.with_pagination(helpers::paginate_opts(args)))
    }

    fn table(items: &[Invoice]) -> Table {
        render::invoices_table(items)
    }
}
