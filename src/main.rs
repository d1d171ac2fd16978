use clap::{Parser, Subcommand};
use serde::Serialize;

use fb_test_users::{
    config::Config, startup, CreateTestUser, Error, ListTestUsers, TestUser, TestUserService,
};

#[derive(Parser)]
#[command(name = "fb-test-users", version, about = "Manage Facebook Graph API test users")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a test user and print it, including its email and password
    Create {
        #[arg(long)]
        name: Option<String>,
        /// Permission scope to grant; repeat for several
        #[arg(long = "permission")]
        permissions: Vec<String>,
        #[arg(long)]
        locale: Option<String>,
        /// Create the user without the application installed
        #[arg(long)]
        not_installed: bool,
    },
    /// List existing test users
    List {
        #[arg(long)]
        limit: Option<u32>,
        /// Cursor printed by a previous `list`
        #[arg(long)]
        after: Option<String>,
    },
    /// Delete a test user
    Delete { id: String },
    /// Make two test users friends
    Befriend { id: String, other_id: String },
    /// Print the profile of a test user
    Me { id: String },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli.command, &config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(command: Command, config: &Config) -> Result<(), Error> {
    let graph = startup::build_graph_client(config)?;
    let service = TestUserService::new(&graph, &config.application_id);

    match command {
        Command::Create {
            name,
            permissions,
            locale,
            not_installed,
        } => {
            let mut params = CreateTestUser::new().permissions(permissions);
            params.name = name;
            params.locale = locale;
            if not_installed {
                params = params.installed(false);
            }

            print_json(&service.create(&params).await?)
        }
        Command::List { limit, after } => {
            let page = service
                .users_page(&ListTestUsers { limit, after })
                .await?;

            #[derive(Serialize)]
            struct Listing {
                data: Vec<TestUser>,
                after: Option<String>,
            }

            print_json(&Listing {
                data: page.users,
                after: page.after,
            })
        }
        Command::Delete { id } => service.delete_by_id(&id).await,
        Command::Befriend { id, other_id } => {
            let user = service.find(&id).await?;
            let other = service.find(&other_id).await?;

            service.befriend(&user, &other).await
        }
        Command::Me { id } => {
            let user = service.find(&id).await?;

            print_json(&service.me(&user).await?)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
