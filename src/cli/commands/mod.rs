mod check;
mod init;
mod serve;

pub use check::cmd_check;
pub use init::cmd_init;
pub use serve::cmd_serve;
