mod connect;
mod execute;
mod output;

pub use connect::connect;
pub use execute::execute;
pub use output::print_payload;
