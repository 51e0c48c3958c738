//! Fetch-and-render controllers, one per portal card or modal.
//!
//! Every widget follows the same cycle: [`begin`] takes a ticket (and shows
//! loading text where the widget has a status line), the client fetches, and
//! [`apply`] renders the result. Only the most recently issued ticket may
//! render; responses for older tickets are dropped as [`RenderOutcome::Stale`].
//!
//! [`begin`]: UserPhonesWidget::begin
//! [`apply`]: UserPhonesWidget::apply

mod user_info;
mod user_options;
mod user_phones;
mod user_queues;

pub use user_info::UserInfoWidget;
pub use user_options::UserOptionsWidget;
pub use user_phones::UserPhonesWidget;
pub use user_queues::{SetJoinedError, UserQueuesWidget};

use std::sync::atomic::{AtomicU64, Ordering};

use crate::view::{TableRow, TableView};

/// Sequence number of one refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Hands out increasing tickets and remembers the newest one.
#[derive(Debug, Default)]
pub struct Sequencer {
    latest: AtomicU64,
}

impl Sequencer {
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

/// What a widget did with a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The views show the response.
    Loaded,
    /// The server reported a failure; carries the server's message.
    Failed(String),
    /// A newer refresh was started, the response was dropped.
    Stale,
}

/// Replace a data table's content with `rows`, keeping their order.
fn load_table<R: TableRow>(table: &impl TableView, rows: &[R]) {
    table.clear();
    table.add_rows(rows.iter().map(TableRow::cells).collect());
    table.redraw();
}
