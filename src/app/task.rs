use reqwest::StatusCode;

use super::error::{AppError, AppResult};
use super::App;
use crate::domain::task::{NewTask, Task, TaskId, TaskTitle};
use crate::store::TokenStore;

impl<S: TokenStore> App<S> {
    /// Replace the local list with whatever the service holds.
    ///
    /// On failure the list is left as it was.
    #[tracing::instrument(name = "Fetch tasks", skip(self))]
    pub async fn fetch_tasks(&mut self) -> AppResult<()> {
        let tasks = self.api.list_tasks(self.bearer()?).await?;
        tracing::debug!(count = tasks.len(), "task list replaced");
        self.state.tasks.items = tasks;

        Ok(())
    }

    /// Submit the pending title as a new task.
    #[tracing::instrument(name = "Add task", skip(self), fields(title = %self.state.tasks.title))]
    pub async fn add_task(&mut self) -> AppResult<()> {
        let title = TaskTitle::try_from(self.state.tasks.title.clone())
            .map_err(AppError::ValidationError)?;

        let status = self
            .api
            .create_task(self.bearer()?, &NewTask::new(title))
            .await?;
        self.state.tasks.title.clear();

        self.refresh_after("add", status).await
    }

    #[tracing::instrument(name = "Toggle task", skip(self, task), fields(id = %task.id))]
    pub async fn toggle_complete(&mut self, task: &Task) -> AppResult<()> {
        let status = self
            .api
            .update_task(self.bearer()?, &task.toggled())
            .await?;

        self.refresh_after("toggle", status).await
    }

    #[tracing::instrument(name = "Delete task", skip(self))]
    pub async fn delete_task(&mut self, id: &TaskId) -> AppResult<()> {
        let status = self.api.delete_task(self.bearer()?, id).await?;

        self.refresh_after("delete", status).await
    }

    /// Second stage of every mutation. The mutation's status is not
    /// surfaced: the refreshed list is the only feedback.
    async fn refresh_after(
        &mut self,
        operation: &'static str,
        status: StatusCode,
    ) -> AppResult<()> {
        if !status.is_success() {
            tracing::warn!(operation, %status, "service did not accept the change");
        }

        self.fetch_tasks().await
    }
}
