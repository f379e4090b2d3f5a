//! Account command handlers

use anyhow::Result;

use showcase_core::{accounts, AuthState, Backend, SignupForm};

use crate::output::{print_json, Output, OutputFormat};

/// Create an account and log in
pub async fn signup<B: Backend>(
    backend: &B,
    username: String,
    email: String,
    password: String,
    output: &Output,
) -> Result<()> {
    let form = SignupForm::new(username, email, password);
    let user = accounts::signup(backend, &form).await?;

    output.success(&format!("Welcome, {}! You are now logged in.", user.username));
    output.print_user(&user);
    Ok(())
}

/// Log in by email
pub async fn login<B: Backend>(backend: &B, email: String, output: &Output) -> Result<()> {
    let user = accounts::login(backend, &email).await?;

    output.success(&format!("Logged in as {}", user.username));
    Ok(())
}

/// Log out
pub async fn logout<B: Backend>(backend: &B, output: &Output) -> Result<()> {
    accounts::logout(backend).await?;
    output.success("Logged out");
    Ok(())
}

/// Show the logged-in user
pub async fn whoami<B: Backend>(backend: &B, output: &Output) -> Result<()> {
    match AuthState::restore(backend).await? {
        AuthState::Authenticated(user) => output.print_user(&user),
        _ => match output.format {
            OutputFormat::Json => print_json(&serde_json::Value::Null),
            _ => output.message("Not logged in."),
        },
    }
    Ok(())
}
