mod dispatch;
mod filter;

pub use dispatch::{cmd_dispatch, exit_status};
pub use filter::cmd_filter;
