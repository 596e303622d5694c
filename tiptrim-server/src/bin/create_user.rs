//! Provision login accounts
//!
//! ```text
//! create-user owner <username> <password>
//! create-user employee <username> <password> <name> <cashier|barber>
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use shared::models::{EmployeeCreate, EmployeeRole};
use tiptrim_server::services::account;
use tiptrim_server::utils::init_logger;
use tiptrim_server::DbService;

#[derive(Parser)]
#[command(name = "create-user", about = "Create TipTrim login accounts")]
struct Cli {
    /// SQLite database URL
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite:tiptrim.db")]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create an owner account
    Owner { username: String, password: String },
    /// Create an employee and its login account
    Employee {
        username: String,
        password: String,
        name: String,
        #[arg(value_enum)]
        role: RoleArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RoleArg {
    Cashier,
    Barber,
}

impl From<RoleArg> for EmployeeRole {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Cashier => EmployeeRole::Cashier,
            RoleArg::Barber => EmployeeRole::Barber,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_logger(false, None)?;

    let db = DbService::new(&cli.database_url, 1).await?;

    let result = match cli.command {
        Command::Owner { username, password } => {
            account::create_owner(&db.pool, &username, &password)
                .await
                .map(|a| format!("Owner '{}' created (account {})", a.username, a.id))
        }
        Command::Employee {
            username,
            password,
            name,
            role,
        } => account::create_employee(
            &db.pool,
            &EmployeeCreate {
                name,
                role: role.into(),
                username,
                password,
            },
        )
        .await
        .map(|d| {
            format!(
                "Employee '{}' ({}) created with login '{}'",
                d.employee.name,
                d.employee.role.as_str(),
                d.account.map(|a| a.username).unwrap_or_default()
            )
        }),
    };
    db.close().await;

    println!("{}", result?);
    Ok(())
}
