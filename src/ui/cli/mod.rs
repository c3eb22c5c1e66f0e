pub mod args;
pub mod drivers;
pub mod wizard;

pub use args::CliArgs;
