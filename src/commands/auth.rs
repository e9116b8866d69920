//! Account commands: login, register, logout, me, subscription.

use clap::Args;
use pea_client::components::login_form::LoginForm;
use pea_client::components::register_form::RegisterForm;

use super::Context;
use crate::CliError;
use crate::render;
use crate::terminal::value_or_prompt;

#[derive(Args, Debug)]
pub struct LoginArgs {
    #[arg(long, short)]
    pub username: Option<String>,
    /// Read from stdin when omitted.
    #[arg(long, env = "PEA_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long, short)]
    pub username: Option<String>,
    #[arg(long, short)]
    pub email: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
    /// Defaults to `--password` when that is given on the command line.
    #[arg(long)]
    pub confirm_password: Option<String>,
}

pub async fn login(ctx: &Context, args: LoginArgs) -> Result<(), CliError> {
    let username = value_or_prompt(args.username, "username")?;
    let password = value_or_prompt(args.password, "password")?;
    LoginForm::new(username, password).submit(&ctx.api).await?;
    println!("logged in");
    Ok(())
}

pub async fn register(ctx: &Context, args: RegisterArgs) -> Result<(), CliError> {
    let confirm_password = match (&args.confirm_password, &args.password) {
        (None, Some(password)) => Some(password.clone()),
        (confirm, _) => confirm.clone(),
    };
    let form = RegisterForm {
        username: value_or_prompt(args.username, "username")?,
        email: value_or_prompt(args.email, "email")?,
        password: value_or_prompt(args.password, "password")?,
        confirm_password: value_or_prompt(confirm_password, "confirm password")?,
    };
    let response = form.submit(&ctx.api).await?;
    match response.message {
        Some(message) => println!("{message}"),
        None => println!("account created"),
    }
    Ok(())
}

pub fn logout(ctx: &Context) -> Result<(), CliError> {
    ctx.api.logout()?;
    Ok(())
}

pub async fn me(ctx: &Context) -> Result<(), CliError> {
    let profile = ctx.api.me().await?;
    ctx.emit(&profile, render::user)
}

pub async fn subscription(ctx: &Context) -> Result<(), CliError> {
    println!("{}", ctx.api.subscription().await?);
    Ok(())
}
