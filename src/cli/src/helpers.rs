use clap::ArgMatches;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;

use libschooldesk::api::client::ApiClient;
use libschooldesk::config::ClientConfig;
use libschooldesk::error::SchoolDeskError;
use libschooldesk::opts::PaginateOpts;
use libschooldesk::session::FileSession;
use libschooldesk::util;

/// Client for the configured API, authenticated with the stored session
pub fn api_client() -> Result<ApiClient, SchoolDeskError> {
    let config = ClientConfig::get()?;
    let session = FileSession::open_default()?;
    ApiClient::new(&config, Arc::new(session))
}

pub fn required_str<'a>(args: &'a ArgMatches, name: &str) -> Result<&'a str, SchoolDeskError> {
    match args.get_one::<String>(name) {
        Some(value) => Ok(value.as_str()),
        None => Err(SchoolDeskError::invalid_input(format!("Must supply {name}"))),
    }
}

/// `--data` holds inline JSON, or `@path` to read it from a file
pub fn parse_data<T: DeserializeOwned>(args: &ArgMatches) -> Result<T, SchoolDeskError> {
    let data = required_str(args, "data")?;
    let raw = match data.strip_prefix('@') {
        Some(path) => util::fs::read_from_path(Path::new(path))?,
        None => data.to_string(),
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(err) => Err(SchoolDeskError::invalid_input(format!(
            "Invalid --data: {err}"
        ))),
    }
}

pub fn paginate_opts(args: &ArgMatches) -> PaginateOpts {
    let defaults = PaginateOpts::default();
    let page = args.get_one::<usize>("page").copied().unwrap_or(defaults.page);
    let size = args.get_one::<usize>("size").copied().unwrap_or(defaults.size);
    PaginateOpts::new(page, size)
}
