use std::path::PathBuf;

use clap::{Parser, Subcommand};

use cctodo::controller::Controller;
use cctodo::net::api::{ApiClient, ApiError, TodoApi};
use cctodo::state::ui::AuthMode;
use cctodo::store::{FileStore, StoreError};
use cctodo::view;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("storage unavailable: {0}")]
    Store(#[from] StoreError),
    #[error("health check failed: {0}")]
    Health(#[source] ApiError),
}

#[derive(Parser, Debug)]
#[command(name = "cctodo", about = "Cloud Campus todo API client")]
struct Cli {
    /// Base URL of the todo API server.
    #[arg(long, env = "CCTODO_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    /// Directory for cached credentials (defaults to the user config dir).
    #[arg(long, env = "CCTODO_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the server is reachable and ready.
    Ping,
    /// Create an account and sign in.
    Register {
        #[arg(long)]
        email: String,
        #[arg(long, env = "CCTODO_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        name: String,
    },
    /// Sign in with an existing account.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "CCTODO_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Drop the cached session.
    Logout,
    /// Show the cached session and current task list.
    Status,
    /// List tasks.
    List,
    /// Add a task.
    Add { title: String },
    /// Delete a task by identifier.
    Rm { id: String },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let api = ApiClient::new(&cli.base_url);

    if let Command::Ping = cli.command {
        api.health().await.map_err(CliError::Health)?;
        println!("ok");
        return Ok(());
    }

    let dir = cli.data_dir.unwrap_or_else(FileStore::default_dir);
    let store = FileStore::open(dir)?;
    let mut controller = Controller::new(api, store);

    match cli.command {
        Command::Ping => unreachable!("handled above"),
        Command::Register {
            email,
            password,
            name,
        } => {
            controller.ui.switch_mode(AuthMode::Register);
            controller.ui.email = email;
            controller.ui.password = password;
            controller.ui.name = name;
            controller.register().await;
        }
        Command::Login { email, password } => {
            controller.ui.email = email;
            controller.ui.password = password;
            controller.login().await;
        }
        Command::Logout => {
            controller.restore();
            controller.logout();
        }
        Command::Status | Command::List => {
            controller.bootstrap().await;
        }
        Command::Add { title } => {
            controller.bootstrap().await;
            controller.ui.new_task_title = title;
            controller.add_task().await;
        }
        Command::Rm { id } => {
            controller.bootstrap().await;
            controller.delete_task(&id).await;
        }
    }

    print!(
        "{}",
        view::render(&controller.session, &controller.tasks, &controller.ui)
    );
    Ok(())
}
