use log::debug;
use recipe_finder::{render_with_config, ApiConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Optional search term from command-line arguments
    let args: Vec<String> = env::args().skip(1).collect();
    let query = (!args.is_empty()).then(|| args.join(" "));

    let config = ApiConfig::load()?;
    debug!("Using endpoint {}", config.base_url);

    let page = render_with_config(config, query.as_deref()).await?;
    println!("{}", page);

    Ok(())
}
