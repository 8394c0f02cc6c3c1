use std::fmt;

use secrecy::ExposeSecret;

use super::{AppState, AuthMode, AuthState};

/// Terminal rendering of the client, a pure function of [`AppState`].
pub struct View<'a>(pub &'a AppState);

pub fn render(state: &AppState) -> String {
    View(state).to_string()
}

fn masked(secret: &secrecy::Secret<String>) -> String {
    "*".repeat(secret.expose_secret().chars().count())
}

fn auth_form(f: &mut fmt::Formatter<'_>, auth: &AuthState) -> fmt::Result {
    match auth.mode {
        AuthMode::Login => writeln!(f, "-- Login --")?,
        AuthMode::Signup => writeln!(f, "-- Signup --")?,
    }
    writeln!(f, "  username: {}", auth.username)?;
    writeln!(f, "  password: {}", masked(&auth.password))?;
    if auth.mode == AuthMode::Signup {
        writeln!(f, "  confirm:  {}", masked(&auth.confirm_password))?;
    }

    match auth.mode {
        AuthMode::Login => {
            writeln!(f, "  `submit` to login")?;
            writeln!(f, "  New user? `toggle-mode` to signup here")
        }
        AuthMode::Signup => {
            writeln!(f, "  `submit` to signup")?;
            writeln!(f, "  Already have an account? `toggle-mode` to login here")
        }
    }
}

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;

        match &state.auth {
            Some(auth) => {
                writeln!(f, "== Secure Todo App ==")?;
                if !auth.session.is_authenticated() {
                    auth_form(f, auth)?;
                } else {
                    writeln!(f, "  `logout`")?;
                }
            }
            None => writeln!(f, "== Todo App ==")?,
        }

        if state.shows_tasks() {
            writeln!(f, "  new task: {}", state.tasks.title)?;
        }

        for (index, task) in state.tasks.items.iter().enumerate() {
            let mark = if task.completed { "x" } else { " " };
            writeln!(f, "{}. {} [{}]", index + 1, task.title, mark)?;
        }

        Ok(())
    }
}
