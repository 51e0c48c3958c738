use log::{debug, warn};

use super::{RenderOutcome, Sequencer, Ticket};
use crate::{
    api_interfaces::{user_info::UserInfo, ApiResult},
    error::GetError,
    view::{TableRow, TableView, TextView},
    Client,
};

/// The user info modal: a table of the user's numbers and a location label.
pub struct UserInfoWidget<T, L> {
    client: Client,
    numbers: T,
    location: L,
    sequencer: Sequencer,
}

impl<T: TableView, L: TextView> UserInfoWidget<T, L> {
    pub fn new(client: Client, numbers: T, location: L) -> Self {
        Self {
            client,
            numbers,
            location,
            sequencer: Sequencer::default(),
        }
    }

    pub fn numbers(&self) -> &T {
        &self.numbers
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn begin(&self) -> Ticket {
        self.sequencer.issue()
    }

    pub fn apply(&self, ticket: Ticket, result: ApiResult<UserInfo>) -> RenderOutcome {
        if !self.sequencer.is_latest(ticket) {
            debug!("user info: dropping stale response {:?}", ticket);
            return RenderOutcome::Stale;
        }
        let info = match result {
            ApiResult::Success(info) => info,
            ApiResult::Failure { message } => {
                warn!("user info: server reported failure: {}", message);
                return RenderOutcome::Failed(message);
            }
        };
        self.numbers.clear();
        for number in &info.numbers {
            self.numbers.append_row(number.cells());
        }
        self.location.set_text(&info.location_label());
        RenderOutcome::Loaded
    }

    pub async fn refresh(&self) -> Result<RenderOutcome, GetError> {
        let ticket = self.begin();
        let result = self.client.get_user_info().await?;
        Ok(self.apply(ticket, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constants::USER_INFO_PATH,
        view::{MemoryTable, MemoryText},
    };
    use httpmock::prelude::*;
    use serde_json::json;

    fn widget(base_url: &str) -> UserInfoWidget<MemoryTable, MemoryText> {
        let client = Client::new(reqwest::Client::new(), base_url, None, None).unwrap();
        UserInfoWidget::new(
            client,
            MemoryTable::with_rows(vec![vec!["old".to_string()]]),
            MemoryText::new("Location:"),
        )
    }

    fn info(numbers: serde_json::Value, location_name: &str) -> ApiResult<UserInfo> {
        serde_json::from_value(json!({"numbers": numbers, "location_name": location_name}))
            .unwrap()
    }

    #[test]
    fn apply_replaces_rows_and_label() {
        let widget = widget("http://localhost");
        let ticket = widget.begin();

        let outcome = widget.apply(
            ticket,
            info(
                json!([{
                    "phone_number": "555-1234",
                    "extension": "10",
                    "location": {"name": "HQ"},
                    "phone_number_type": "Desk"
                }]),
                "Main",
            ),
        );

        assert_eq!(outcome, RenderOutcome::Loaded);
        assert_eq!(widget.numbers().rows(), vec![vec!["555-1234", "10", "HQ", "Desk"]]);
        assert_eq!(widget.location().text(), "Location: Main");
    }

    #[test]
    fn apply_twice_does_not_duplicate_rows() {
        let widget = widget("http://localhost");
        let numbers = json!([
            {"value": "+1 555 0100", "type": "work", "primary": true},
            {"value": "+1 555 0101", "type": "mobile", "primary": false}
        ]);

        let first = widget.begin();
        widget.apply(first, info(numbers.clone(), "Branch"));
        let after_first = widget.numbers().rows();
        let second = widget.begin();
        widget.apply(second, info(numbers, "Branch"));

        assert_eq!(widget.numbers().rows(), after_first);
        assert_eq!(widget.numbers().len(), 2);
        assert_eq!(widget.numbers().rows()[1][0], "+1 555 0101");
    }

    #[test]
    fn apply_drops_stale_ticket() {
        let widget = widget("http://localhost");
        let older = widget.begin();
        let newer = widget.begin();

        let newer_outcome = widget.apply(newer, info(json!([]), "New"));
        let older_outcome = widget.apply(older, info(json!([]), "Old"));

        assert_eq!(newer_outcome, RenderOutcome::Loaded);
        assert_eq!(older_outcome, RenderOutcome::Stale);
        assert_eq!(widget.location().text(), "Location: New");
    }

    #[tokio::test]
    async fn refresh_renders_server_response() {
        // Arrange
        let server = MockServer::start_async().await;
        let info_mock = server
            .mock_async(|when, then| {
                when.method(GET).path(USER_INFO_PATH);
                then.status(200).json_body(json!({
                    "numbers": [
                        {
                            "phone_number": "+14085550100",
                            "extension": "100",
                            "location": {"name": "San Jose"},
                            "phone_number_type": "PRIMARY"
                        },
                        {
                            "phone_number": null,
                            "extension": "101",
                            "location": {"name": "San Jose"},
                            "phone_number_type": "ALTERNATE"
                        }
                    ],
                    "location_name": "San Jose"
                }));
            })
            .await;
        let widget = widget(&server.base_url());

        // Act
        let outcome = widget.refresh().await;

        // Assert
        assert!(matches!(outcome, Ok(RenderOutcome::Loaded)));
        assert_eq!(
            widget.numbers().rows(),
            vec![
                vec!["+14085550100", "100", "San Jose", "PRIMARY"],
                vec!["", "101", "San Jose", "ALTERNATE"],
            ]
        );
        info_mock.assert();
    }

    #[tokio::test]
    async fn refresh_transport_failure_leaves_views() {
        // Arrange
        let server = MockServer::start_async().await;
        let info_mock = server
            .mock_async(|when, then| {
                when.path(USER_INFO_PATH);
                then.status(500);
            })
            .await;
        let widget = widget(&server.base_url());

        // Act
        let outcome = widget.refresh().await;

        // Assert
        assert!(matches!(outcome, Err(GetError::ResponseError(_))));
        assert_eq!(widget.numbers().rows(), vec![vec!["old"]]);
        assert_eq!(widget.location().text(), "Location:");
        info_mock.assert();
    }
}
