use anyhow::Context;
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use dataspace_core::navigation::{default_company, default_menu, ConsoleShell};
use dataspace_infrastructure::ConsoleServices;
use dataspace_shared::config::AppConfig;

mod command;

use command::Command;

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

async fn list(services: &ConsoleServices, store: &str) -> anyhow::Result<()> {
    match store {
        "data-sources" => print_json(&services.data_sources.get_all().await?),
        "products" => print_json(
            &services
                .products
                .get_all_with_sources(&services.data_sources)
                .await?,
        ),
        "orders" => print_json(&services.orders.get_all().await?),
        "organizations" => print_json(&services.organizations.get_all().await?),
        "roles" => print_json(&services.roles.get_all().await?),
        "trust-spaces" => print_json(&services.trust_spaces.get_all().await?),
        "users" => print_json(&services.users.get_all().await?),
        other => {
            warn!("Unknown store: {}", other);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let _guard = dataspace_shared::telemetry::init_telemetry(&config.logging)?;

    info!("{} starting ({})", config.app.name, config.app.env);

    let services = ConsoleServices::initialize(&config).await?;
    let mut shell = ConsoleShell::new(default_company(), default_menu()?);
    shell.navigate(&config.shell.initial_route);
    print_json(&shell.snapshot())?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                warn!("{}", e);
                continue;
            }
        };

        match command {
            Command::Navigate(path) => {
                shell.navigate(&path);
            }
            Command::SelectTop(id) => {
                if let Err(e) = shell.select_top_menu(&id) {
                    warn!("{}", e);
                }
            }
            Command::Click(id) => {
                if let Err(e) = shell.click(&id) {
                    warn!("{}", e);
                }
            }
            Command::Toggle => shell.toggle_sidebar(),
            Command::Show => {}
            Command::List(store) => {
                list(&services, &store).await?;
                continue;
            }
            Command::Quit => break,
        }
        print_json(&shell.snapshot())?;
    }

    info!("Console shell stopped");
    Ok(())
}
