use log::{debug, warn};
use thiserror::Error;

use super::{load_table, RenderOutcome, Sequencer, Ticket};
use crate::{
    api_interfaces::{error_text, user_queues::UserQueues, ApiResult},
    constants::QUEUES_LOADING_TEXT,
    error::{GetError, PostError},
    ids::QueueId,
    view::{TableView, TextView},
    Client,
};

/// The queues card: a status line above a data table of the user's call queues.
pub struct UserQueuesWidget<S, T> {
    client: Client,
    status: S,
    table: T,
    sequencer: Sequencer,
}

impl<S: TextView, T: TableView> UserQueuesWidget<S, T> {
    pub fn new(client: Client, status: S, table: T) -> Self {
        Self {
            client,
            status,
            table,
            sequencer: Sequencer::default(),
        }
    }

    pub fn status(&self) -> &S {
        &self.status
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    pub fn begin(&self) -> Ticket {
        self.status.set_text(QUEUES_LOADING_TEXT);
        self.sequencer.issue()
    }

    pub fn apply(&self, ticket: Ticket, result: ApiResult<UserQueues>) -> RenderOutcome {
        if !self.sequencer.is_latest(ticket) {
            debug!("user queues: dropping stale response {:?}", ticket);
            return RenderOutcome::Stale;
        }
        match result {
            ApiResult::Success(queues) => {
                self.status.set_text("");
                load_table(&self.table, &queues.rows);
                RenderOutcome::Loaded
            }
            ApiResult::Failure { message } => {
                warn!("user queues: server reported failure: {}", message);
                self.status.set_text(&error_text(&message));
                RenderOutcome::Failed(message)
            }
        }
    }

    pub async fn refresh(&self) -> Result<RenderOutcome, GetError> {
        let ticket = self.begin();
        let result = self.client.get_user_queues().await?;
        Ok(self.apply(ticket, result))
    }

    /// Join or leave `queue`, then reload the table so it shows the new state.
    ///
    /// A rejected change is shown in the status line and the table is left as is.
    pub async fn set_joined(
        &self,
        queue: &QueueId,
        joined: bool,
    ) -> Result<RenderOutcome, SetJoinedError> {
        match self.client.set_queue_joined(queue, joined).await? {
            ApiResult::Success(_) => Ok(self.refresh().await?),
            ApiResult::Failure { message } => {
                warn!("user queues: updating {} failed: {}", queue, message);
                self.status.set_text(&error_text(&message));
                Ok(RenderOutcome::Failed(message))
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum SetJoinedError {
    #[error("unable to update the queue: {0}")]
    Update(#[from] PostError),
    #[error("unable to reload the queues: {0}")]
    Reload(#[from] GetError),
}
