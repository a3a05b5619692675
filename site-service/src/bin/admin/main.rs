//! Operator commands for the account table.

use std::sync::Arc;

use anyhow::Context;
use clap::Arg;
use clap::ArgMatches;
use clap::Command;
use site_service::config::Config;
use site_service::domain::account::models::Account;
use site_service::domain::account::models::CreateAccountCommand;
use site_service::domain::account::models::EmailAddress;
use site_service::domain::account::models::Username;
use site_service::domain::account::ports::AccountServicePort;
use site_service::domain::account::service::AccountService;
use site_service::outbound::repositories::PostgresAccountRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Debug)]
enum Action {
    CreateAccount {
        username: String,
        email: String,
        password: String,
        superuser: bool,
    },
    ResetPassword {
        username: String,
        password: String,
    },
    SetActive {
        username: String,
        active: bool,
    },
    SetSuperuser {
        username: String,
        superuser: bool,
    },
}

fn username_arg() -> Arg {
    Arg::new("username")
        .help("Account username")
        .required(true)
}

fn password_arg() -> Arg {
    Arg::new("password")
        .long("password")
        .help("New plaintext password")
        .env("SITE_ADMIN_PASSWORD")
        .required(true)
}

fn flag_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .help(help)
        .required(true)
        .value_parser(clap::value_parser!(bool))
}

fn command() -> Command {
    Command::new("site-admin")
        .about("Account maintenance for the site service")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("create-account")
                .about("Create an active account")
                .arg(username_arg())
                .arg(
                    Arg::new("email")
                        .long("email")
                        .help("Account email address")
                        .required(true),
                )
                .arg(password_arg())
                .arg(
                    Arg::new("superuser")
                        .long("superuser")
                        .help("Grant the superuser flag")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("reset-password")
                .about("Replace an account's password")
                .arg(username_arg())
                .arg(password_arg()),
        )
        .subcommand(
            Command::new("set-active")
                .about("Activate or deactivate an account")
                .arg(username_arg())
                .arg(flag_arg("active", "true to activate, false to deactivate")),
        )
        .subcommand(
            Command::new("set-superuser")
                .about("Grant or revoke the superuser flag")
                .arg(username_arg())
                .arg(flag_arg("superuser", "true to grant, false to revoke")),
        )
}

fn string(matches: &ArgMatches, name: &str) -> anyhow::Result<String> {
    matches
        .get_one::<String>(name)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("missing required argument: {name}"))
}

fn flag(matches: &ArgMatches, name: &str) -> anyhow::Result<bool> {
    matches
        .get_one::<bool>(name)
        .copied()
        .ok_or_else(|| anyhow::anyhow!("missing required argument: {name}"))
}

fn dispatch(matches: &ArgMatches) -> anyhow::Result<Action> {
    match matches.subcommand() {
        Some(("create-account", sub)) => Ok(Action::CreateAccount {
            username: string(sub, "username")?,
            email: string(sub, "email")?,
            password: string(sub, "password")?,
            superuser: sub.get_flag("superuser"),
        }),
        Some(("reset-password", sub)) => Ok(Action::ResetPassword {
            username: string(sub, "username")?,
            password: string(sub, "password")?,
        }),
        Some(("set-active", sub)) => Ok(Action::SetActive {
            username: string(sub, "username")?,
            active: flag(sub, "active")?,
        }),
        Some(("set-superuser", sub)) => Ok(Action::SetSuperuser {
            username: string(sub, "username")?,
            superuser: flag(sub, "superuser")?,
        }),
        _ => anyhow::bail!("unknown command"),
    }
}

async fn execute(service: &dyn AccountServicePort, action: Action) -> anyhow::Result<Account> {
    let account = match action {
        Action::CreateAccount {
            username,
            email,
            password,
            superuser,
        } => {
            service
                .create_account(CreateAccountCommand {
                    username: Username::new(username)?,
                    email: EmailAddress::new(email)?,
                    password,
                    is_superuser: superuser,
                })
                .await?
        }
        Action::ResetPassword { username, password } => {
            service
                .reset_password(&Username::new(username)?, &password)
                .await?
        }
        Action::SetActive { username, active } => {
            service.set_active(&Username::new(username)?, active).await?
        }
        Action::SetSuperuser {
            username,
            superuser,
        } => {
            service
                .set_superuser(&Username::new(username)?, superuser)
                .await?
        }
    };

    Ok(account)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "site_service=info,site_admin=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let action = dispatch(&command().get_matches())?;
    let config = Config::load().context("failed to load configuration")?;

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&config.database.url)
        .await
        .context("failed to connect to database")?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let service = AccountService::new(Arc::new(PostgresAccountRepository::new(pool)));
    let account = execute(&service, action).await?;

    tracing::info!(
        username = %account.username,
        is_active = account.is_active,
        is_superuser = account.is_superuser,
        "Account updated"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<Action> {
        let matches = command().try_get_matches_from(args)?;
        dispatch(&matches)
    }

    #[test]
    fn test_command_definition_is_valid() {
        command().debug_assert();
    }

    #[test]
    fn test_parse_create_account() {
        let action = parse(&[
            "site-admin",
            "create-account",
            "editor",
            "--email",
            "editor@yiran-huanxin.com",
            "--password",
            "s3cret",
        ])
        .unwrap();

        assert!(matches!(
            action,
            Action::CreateAccount { ref username, superuser: false, .. } if username == "editor"
        ));
    }

    #[test]
    fn test_parse_set_active_flag() {
        let action = parse(&["site-admin", "set-active", "editor", "false"]).unwrap();
        assert!(matches!(action, Action::SetActive { active: false, .. }));
    }

    #[test]
    fn test_parse_rejects_non_boolean_flag() {
        assert!(parse(&["site-admin", "set-superuser", "editor", "maybe"]).is_err());
    }
}
