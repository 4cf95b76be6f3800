use anyhow::Result;
use login_form_engine::config::Config;
use login_form_engine::shim::serve;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_args_and_env()?;

    // Logs go to stderr; stdout carries the rendered records
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    serve(config).await
}
