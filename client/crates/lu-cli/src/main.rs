//! linkup - LinkUp client shell
//!
//! Runs one command against the locally stored session and prints JSON.
//!
//! # Examples
//!
//! ```bash
//! linkup login --email demo@example.com --password secret
//! linkup open /profile/demo_user --pretty
//! linkup compose "Hello, LinkUp!"
//! linkup logout
//! ```

use lu_cli::{App, Cli, CliResult, Commands, ThemeCommands, logger};
use lu_config::Config;
use lu_core::Registration;
use lu_session::Route;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let app = match bootstrap() {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Commands::Status => app.status(),
        Commands::Login { email, password } => app.login(&email, &password).await,
        Commands::Signup {
            username,
            email,
            password,
            display_name,
        } => {
            app.signup(&Registration {
                username,
                email,
                password,
                display_name,
            })
            .await
        }
        Commands::Logout => app.logout(),
        Commands::Open { path } => app.open(&path),
        Commands::Feed => app.navigate(&Route::Home),
        Commands::Explore => app.navigate(&Route::Explore),
        Commands::Notifications => app.navigate(&Route::Notifications),
        Commands::Messages => app.navigate(&Route::Messages),
        Commands::Profile { username } => app.profile(username.as_deref()),
        Commands::Compose { text } => app.compose(&text),
        Commands::Tweet { id, action } => app.interact(id, action),
        Commands::Follow { username } => app.follow(&username),
        Commands::Theme { action } => match action {
            ThemeCommands::Get => app.theme(),
            ThemeCommands::Set { theme } => app.set_theme(&theme),
            ThemeCommands::Toggle => app.toggle_theme(),
        },
    };

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            log::debug!("{e}");
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

/// Load config, start logging and restore the stored session.
fn bootstrap() -> CliResult<App> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let app = App::from_config(&config)?;
    app.start();
    Ok(app)
}
