//! Interactive event loop
//!
//! One pass of the loop handles one interaction on the current screen. The
//! catalog fetch runs on its own task so only the home screen waits for it.

use super::prompt::Prompter;
use super::{App, Screen};
use crate::auth::{FieldOutcome, LoginRequest, SignupForm};
use crate::catalog::{CatalogClient, CatalogState};
use crate::core::error::Result;

const LOGIN_MENU: [&str; 3] = ["Play now", "Sign up", "Quit"];

/// Drive `app` until the user quits from the login screen
pub async fn run<P: Prompter>(app: &mut App, client: &CatalogClient, prompter: &mut P) -> Result<()> {
    prompter.info("Fun Bun")?;

    loop {
        match app.screen().clone() {
            Screen::Login => {
                if !login_screen(app, prompter)? {
                    break;
                }
            }
            Screen::SignUp => signup_screen(app, prompter)?,
            Screen::Home { username } => home_screen(app, client, prompter, &username).await?,
        }
    }

    tracing::info!("Session ended");
    Ok(())
}

/// Returns false when the user chose to quit
fn login_screen<P: Prompter>(app: &mut App, prompter: &mut P) -> Result<bool> {
    let options: Vec<String> = LOGIN_MENU.iter().map(|s| s.to_string()).collect();

    match prompter.select("Welcome", &options)? {
        0 => {
            let username = prompter.input("Enter Username")?;
            let password = prompter.password("Enter Password")?;
            if let Err(e) = app.submit_login(&LoginRequest::new(username, password)) {
                prompter.error(&e.to_string())?;
            }
        }
        1 => app.open_signup(),
        _ => return Ok(false),
    }

    Ok(true)
}

fn signup_screen<P: Prompter>(app: &mut App, prompter: &mut P) -> Result<()> {
    prompter.info("Sign Up")?;

    let form = SignupForm {
        username: prompter.input("Username")?,
        email: prompter.input("Email")?,
        phone: prompter.input("Phone Number")?,
        password: prompter.password("Password")?,
        confirm_password: prompter.password("Confirm Password")?,
    };

    let report = app.submit_signup(&form);
    for (_, outcome) in report.fields() {
        match outcome {
            FieldOutcome::Missing(msg) | FieldOutcome::Invalid(msg) => prompter.error(msg)?,
            FieldOutcome::Valid(Some(msg)) => prompter.success(msg)?,
            FieldOutcome::Valid(None) => {}
        }
    }

    if report.is_valid() {
        prompter.success("Account created successfully!")?;
    } else if !prompter.confirm("Try again?")? {
        app.open_login();
    }

    Ok(())
}

async fn home_screen<P: Prompter>(
    app: &mut App,
    client: &CatalogClient,
    prompter: &mut P,
    username: &str,
) -> Result<()> {
    if app.catalog().loading {
        prompter.info("Loading...")?;
        let handle = client.spawn_load();
        let catalog = match handle.await {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::error!(error = %e, "Catalog task failed");
                CatalogState::loaded(Vec::new())
            }
        };
        app.catalog_loaded(catalog);
    }

    prompter.info(&format!(
        "Fun Bun | {} | selected: {}",
        username,
        app.store().state().item_count()
    ))?;

    let items = app.catalog().items.clone();
    if items.is_empty() {
        prompter.info("No items available")?;
    }

    let mut options: Vec<String> = items
        .iter()
        .map(|item| {
            let marker = if app.is_selected(&item.id) { "[x]" } else { "[ ]" };
            format!(
                "{} {}: {} (Difficulty Level: {})",
                marker,
                item.name,
                item.description,
                item.difficulty_label()
            )
        })
        .collect();
    options.push("Log out".to_string());

    let choice = prompter.select("Pick items", &options)?;
    match items.get(choice) {
        Some(item) => app.toggle_item(item.id.clone()),
        None => {
            if prompter.confirm("Are you sure you want to log out?")? {
                app.logout();
            }
        }
    }

    Ok(())
}
