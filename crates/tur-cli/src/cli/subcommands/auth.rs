use clap::{Args, Subcommand};
use tur_core::Role;

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with email and password.
    Login(AuthLoginArgs),
    /// Clear the session and stored credentials.
    Logout,
    /// Show current auth status.
    Status,
    /// Print the authenticated identity (fails without a session).
    Whoami,
    /// Create an account.
    Register(AuthRegisterArgs),
    /// Confirm an email address with a verification token.
    VerifyEmail(AuthTokenArgs),
    /// Request a password reset email.
    ForgotPassword(AuthForgotArgs),
    /// Set a new password with a reset token.
    ResetPassword(AuthResetArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Clone, Debug, Args)]
pub struct AuthRegisterArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    /// Wire role: cliente or emprendedor.
    #[arg(long, value_parser = parse_register_role)]
    pub role: Role,
    #[arg(long)]
    pub phone: Option<String>,
    /// Business name (entrepreneurs).
    #[arg(long)]
    pub business_name: Option<String>,
    /// Address (clients).
    #[arg(long)]
    pub address: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AuthTokenArgs {
    #[arg(long)]
    pub token: String,
}

#[derive(Clone, Debug, Args)]
pub struct AuthForgotArgs {
    #[arg(long)]
    pub email: String,
}

#[derive(Clone, Debug, Args)]
pub struct AuthResetArgs {
    #[arg(long)]
    pub token: String,
    #[arg(long)]
    pub password: String,
}

/// Administrator accounts are provisioned by the backend, never self-registered.
fn parse_register_role(value: &str) -> Result<Role, String> {
    match value.parse::<Role>().map_err(|e| e.to_string())? {
        Role::Admin => Err(format!("cannot register as {}", Role::Admin)),
        role => Ok(role),
    }
}
