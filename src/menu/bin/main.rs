use tokio::io::BufReader;
use library_checkout::circulation::factory::create_library_service;
use library_checkout::core::domain::Configuration;
use library_checkout::menu::controller::MenuController;
use library_checkout::utils::logs::setup_tracing;

const BRANCH_ID: &str = "main";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, rejected) = Configuration::from_env(BRANCH_ID);
    setup_tracing(config.log_level);
    for setting in &rejected {
        setting.log();
    }
    tracing::info!(branch_id = config.branch_id.as_str(), borrow_limit = config.borrow_limit, "starting library menu");

    let svc = create_library_service(&config);
    let mut menu = MenuController::new(svc, BufReader::new(tokio::io::stdin()), tokio::io::stdout());
    menu.run().await?;
    Ok(())
}
