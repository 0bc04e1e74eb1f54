//! `list | get | create | update | delete` for any API resource
//!

use async_trait::async_trait;
use clap::{value_parser, Arg, ArgMatches, Command};
use comfy_table::Table;
use dialoguer::Confirm;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

use libschooldesk::api::client::{Resource, ResourceClient};
use libschooldesk::error::SchoolDeskError;

use crate::cmd::RunCmd;
use crate::helpers;
use crate::render;

/// How a resource shows up on the command line
pub trait CliResource: Resource {
    const COMMAND: &'static str;
    const ABOUT: &'static str;

    /// Filter flags accepted by `list`
    fn filter_args() -> Vec<Arg>;

    /// Builds the list query from the filter flags and `--page` / `--size`
    fn query(args: &ArgMatches) -> Result<Self::Query, SchoolDeskError>;

    fn table(items: &[Self::Item]) -> Table;
}

pub struct CrudCmd<R: CliResource> {
    _resource: PhantomData<fn() -> R>,
}

impl<R: CliResource> CrudCmd<R> {
    pub fn new() -> CrudCmd<R> {
        CrudCmd {
            _resource: PhantomData,
        }
    }
}

impl<R: CliResource> Default for CrudCmd<R> {
    fn default() -> Self {
        CrudCmd::new()
    }
}

fn id_arg() -> Arg {
    Arg::new("ID").required(true).help("Id of the record")
}

fn data_arg() -> Arg {
    Arg::new("data")
        .long("data")
        .short('d')
        .required(true)
        .value_name("JSON")
        .help("Record as JSON, or @path to a JSON file")
        .action(clap::ArgAction::Set)
}

fn pagination_args() -> Vec<Arg> {
    vec![
        Arg::new("page")
            .long("page")
            .short('p')
            .value_parser(value_parser!(usize))
            .help("Page to fetch, starting at 1")
            .action(clap::ArgAction::Set),
        Arg::new("size")
            .long("size")
            .short('s')
            .value_parser(value_parser!(usize))
            .help("Records per page, at most 100")
            .action(clap::ArgAction::Set),
    ]
}

#[async_trait]
impl<R: CliResource> RunCmd for CrudCmd<R>
where
    R::Item: Serialize,
    R::New: DeserializeOwned,
    R::Update: DeserializeOwned,
{
    fn name(&self) -> &str {
        R::COMMAND
    }

    fn args(&self) -> Command {
        let list = Command::new("list")
            .about(format!("List {}", R::COMMAND))
            .args(pagination_args())
            .args(R::filter_args());

        Command::new(R::COMMAND)
            .about(R::ABOUT)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .subcommand(list)
            .subcommand(
                Command::new("get")
                    .about(format!("Show one {}", R::NAME))
                    .arg(id_arg()),
            )
            .subcommand(
                Command::new("create")
                    .about(format!("Create a {}", R::NAME))
                    .arg(data_arg()),
            )
            .subcommand(
                Command::new("update")
                    .about(format!("Update fields of a {}, absent fields are left as is", R::NAME))
                    .arg(id_arg())
                    .arg(data_arg()),
            )
            .subcommand(
                Command::new("delete")
                    .about(format!("Delete a {}", R::NAME))
                    .arg(id_arg())
                    .arg(
                        Arg::new("yes")
                            .long("yes")
                            .short('y')
                            .help("Do not ask for confirmation")
                            .action(clap::ArgAction::SetTrue),
                    ),
            )
    }

    async fn run(&self, args: &ArgMatches) -> Result<(), SchoolDeskError> {
        let client = ResourceClient::<R>::new(helpers::api_client()?);
        match args.subcommand() {
            Some(("list", sub_args)) => {
                let query = R::query(sub_args)?;
                let page = client.list(&query).await?;
                println!("{}", R::table(&page.items));
                println!("{}", render::pagination_line(&page.pagination()));
            }
            Some(("get", sub_args)) => {
                let item = client.get(helpers::required_str(sub_args, "ID")?).await?;
                println!("{}", serde_json::to_string_pretty(&item)?);
            }
            Some(("create", sub_args)) => {
                let input: R::New = helpers::parse_data(sub_args)?;
                let item = client.create(&input).await?;
                println!("{}", serde_json::to_string_pretty(&item)?);
            }
            Some(("update", sub_args)) => {
                let id = helpers::required_str(sub_args, "ID")?;
                let patch: R::Update = helpers::parse_data(sub_args)?;
                let item = client.update(id, &patch).await?;
                println!("{}", serde_json::to_string_pretty(&item)?);
            }
            Some(("delete", sub_args)) => {
                let id = helpers::required_str(sub_args, "ID")?;
                if !sub_args.get_flag("yes") && !confirm_delete(R::NAME, id)? {
                    return Ok(());
                }
                client.delete(id).await?;
                println!("Deleted {} {}", R::NAME, id);
            }
            Some((name, _)) => {
                return Err(SchoolDeskError::basic_str(format!(
                    "Unknown {} subcommand {name}",
                    R::COMMAND
                )));
            }
            None => {
                return Err(SchoolDeskError::basic_str(format!(
                    "Usage: schooldesk {} <list|get|create|update|delete>",
                    R::COMMAND
                )));
            }
        }
        Ok(())
    }
}

fn confirm_delete(noun: &str, id: &str) -> Result<bool, SchoolDeskError> {
    match Confirm::new()
        .with_prompt(format!("Are you sure you want to delete {noun} {id}?"))
        .interact()
    {
        Ok(answer) => Ok(answer),
        Err(e) => Err(SchoolDeskError::basic_str(format!(
            "Error confirming deletion: {e}"
        ))),
    }
}
