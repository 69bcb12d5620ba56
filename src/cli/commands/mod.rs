mod account;
mod catalog;
mod init;
mod list;

pub use account::cmd_account_add;
pub use catalog::{cmd_planet_add, cmd_starship_add};
pub use init::cmd_init;
pub use list::cmd_list;
