use anyhow::Result;
use env_logger::{Env, Target};
use txedit::config::Config;
use txedit::session::run;

fn main() -> Result<()> {
    let config = Config::from_args_and_env()?;

    // Logs go to stderr so they stay out of the editor's own output
    env_logger::Builder::from_env(Env::default().default_filter_or(config.log_level.as_str()))
        .target(Target::Stderr)
        .init();

    run(config)
}
