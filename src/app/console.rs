use std::str::FromStr;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use super::error::{AppError, AppResult};
use super::{ui, App};
use crate::store::TokenStore;

/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Username(String),
    Password(String),
    Confirm(String),
    ToggleMode,
    Submit,
    Title(String),
    Add,
    Toggle(usize),
    Delete(usize),
    Refresh,
    Logout,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (name, argument) = match line.split_once(' ') {
            Some((name, argument)) => (name, argument),
            None => (line, ""),
        };

        let position = |argument: &str| -> Result<usize, String> {
            match argument.trim().parse::<usize>() {
                Ok(n) if n > 0 => Ok(n),
                _ => Err(format!("`{}` expects a task number", name)),
            }
        };

        match name {
            "username" => Ok(Self::Username(argument.to_owned())),
            "password" => Ok(Self::Password(argument.to_owned())),
            "confirm" => Ok(Self::Confirm(argument.to_owned())),
            "toggle-mode" => Ok(Self::ToggleMode),
            "submit" => Ok(Self::Submit),
            "title" => Ok(Self::Title(argument.to_owned())),
            "add" => Ok(Self::Add),
            "done" => position(argument).map(Self::Toggle),
            "delete" => position(argument).map(Self::Delete),
            "refresh" => Ok(Self::Refresh),
            "logout" => Ok(Self::Logout),
            "quit" | "exit" => Ok(Self::Quit),
            "" => Err("empty command".to_owned()),
            other => Err(format!("unknown command `{}`", other)),
        }
    }
}

impl<S: TokenStore> App<S> {
    /// Run a single command against the client.
    pub async fn execute(&mut self, command: Command) -> AppResult<()> {
        match command {
            Command::Username(username) => self.set_username(username),
            Command::Password(password) => self.set_password(password),
            Command::Confirm(password) => self.set_confirm_password(password),
            Command::ToggleMode => self.toggle_mode().map(|_| ()),
            Command::Submit => self.submit_auth().await,
            Command::Title(title) => {
                self.require_task_view()?;
                self.set_title(title);
                Ok(())
            }
            Command::Add => {
                self.require_task_view()?;
                self.add_task().await
            }
            Command::Toggle(position) => {
                let task = self.task_at(position)?;
                self.toggle_complete(&task).await
            }
            Command::Delete(position) => {
                let task = self.task_at(position)?;
                self.delete_task(&task.id).await
            }
            Command::Refresh => self.fetch_tasks().await,
            Command::Logout => self.logout().await,
            Command::Quit => Ok(()),
        }
    }

    fn require_task_view(&self) -> AppResult<()> {
        if self.state.shows_tasks() {
            Ok(())
        } else {
            Err(AppError::Unavailable("Log in to manage tasks."))
        }
    }

    fn task_at(&self, position: usize) -> AppResult<crate::domain::task::Task> {
        position
            .checked_sub(1)
            .and_then(|index| self.state.tasks.items.get(index))
            .cloned()
            .ok_or_else(|| AppError::ValidationError(format!("there is no task {}", position)))
    }
}

/// Read commands line by line until `quit` or end of input, printing the
/// raised notices and the view after each one.
pub async fn run<S, R, W>(app: &mut App<S>, input: R, mut output: W) -> std::io::Result<()>
where
    S: TokenStore,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(ui::render(app.state()).as_bytes()).await?;
    output.flush().await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                output.write_all(format!("{}\n", e).as_bytes()).await?;
                output.flush().await?;
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }

        if let Err(e) = app.execute(command).await {
            if e.is_user_facing() {
                output.write_all(format!("{}\n", e).as_bytes()).await?;
            } else {
                tracing::error!(error = ?e, "command failed");
            }
        }

        for notice in app.drain_notices() {
            output.write_all(format!("! {}\n", notice).as_bytes()).await?;
        }
        output.write_all(ui::render(app.state()).as_bytes()).await?;
        output.flush().await?;
    }

    Ok(())
}
