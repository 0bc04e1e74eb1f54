use libschooldesk::error::SchoolDeskError;

use async_trait::async_trait;

pub mod config;
pub use config::ConfigCmd;

pub mod invoices;
pub use invoices::InvoicesCmd;

pub mod login;
pub use login::LoginCmd;

pub mod logout;
pub use logout::LogoutCmd;

pub mod me;
pub use me::MeCmd;

pub mod register;
pub use register::RegisterCmd;

pub mod resource;

pub mod schools;
pub use schools::SchoolsCmd;

pub mod students;
pub use students::StudentsCmd;

pub mod summary;
pub use summary::SummaryCmd;

pub mod users;
pub use users::UsersCmd;

#[async_trait]
pub trait RunCmd {
    fn name(&self) -> &str;
    fn args(&self) -> clap::Command;
    async fn run(&self, args: &clap::ArgMatches) -> Result<(), SchoolDeskError>;
}
