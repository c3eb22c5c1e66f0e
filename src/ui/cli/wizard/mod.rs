mod wizard;

pub use wizard::{prompt_path_until_ok, prompt_run_config, validate_path_str};
