use log::{debug, warn};

use super::{load_table, RenderOutcome, Sequencer, Ticket};
use crate::{
    api_interfaces::{error_text, user_phones::UserPhones, ApiResult},
    constants::PHONES_LOADING_TEXT,
    error::GetError,
    view::{TableView, TextView},
    Client,
};

/// The phones card: a status line above a data table of the user's devices.
pub struct UserPhonesWidget<S, T> {
    client: Client,
    status: S,
    table: T,
    sequencer: Sequencer,
}

impl<S: TextView, T: TableView> UserPhonesWidget<S, T> {
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

    /// Show the loading text and take a ticket for the coming response.
    pub fn begin(&self) -> Ticket {
        self.status.set_text(PHONES_LOADING_TEXT);
        self.sequencer.issue()
    }

    pub fn apply(&self, ticket: Ticket, result: ApiResult<UserPhones>) -> RenderOutcome {
        if !self.sequencer.is_latest(ticket) {
            debug!("user phones: dropping stale response {:?}", ticket);
            return RenderOutcome::Stale;
        }
        match result {
            ApiResult::Success(phones) => {
                self.status.set_text("");
                load_table(&self.table, &phones.rows);
                RenderOutcome::Loaded
            }
            ApiResult::Failure { message } => {
                warn!("user phones: server reported failure: {}", message);
                self.status.set_text(&error_text(&message));
                RenderOutcome::Failed(message)
            }
        }
    }

    pub async fn refresh(&self) -> Result<RenderOutcome, GetError> {
        let ticket = self.begin();
        let result = self.client.get_user_phones().await?;
        Ok(self.apply(ticket, result))
    }
}
