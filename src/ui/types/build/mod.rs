mod error;
mod train_test;

pub use error::BuildError;
pub use train_test::build_task;
