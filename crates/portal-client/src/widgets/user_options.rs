use log::{debug, warn};

use super::{RenderOutcome, Sequencer, Ticket};
use crate::{
    api_interfaces::{user_options::UserOptions, Acknowledged, ApiResult},
    error::{GetError, PostError},
    ids::OptionId,
    view::CheckboxView,
    Client,
};

/// The user options card: one checkbox per call feature.
pub struct UserOptionsWidget<C> {
    client: Client,
    call_intercept: C,
    call_waiting: C,
    sequencer: Sequencer,
}

impl<C: CheckboxView> UserOptionsWidget<C> {
    pub fn new(client: Client, call_intercept: C, call_waiting: C) -> Self {
        Self {
            client,
            call_intercept,
            call_waiting,
            sequencer: Sequencer::default(),
        }
    }

    pub fn checkbox(&self, id: OptionId) -> &C {
        match id {
            OptionId::CallIntercept => &self.call_intercept,
            OptionId::CallWaiting => &self.call_waiting,
        }
    }

    pub fn begin(&self) -> Ticket {
        self.sequencer.issue()
    }

    /// A failure leaves the checkboxes as they were; the card has no status line.
    pub fn apply(&self, ticket: Ticket, result: ApiResult<UserOptions>) -> RenderOutcome {
        if !self.sequencer.is_latest(ticket) {
            debug!("user options: dropping stale response {:?}", ticket);
            return RenderOutcome::Stale;
        }
        match result {
            ApiResult::Success(options) => {
                for id in OptionId::ALL {
                    self.checkbox(id).set_checked(options.get(id));
                }
                RenderOutcome::Loaded
            }
            ApiResult::Failure { message } => {
                warn!("user options: server reported failure: {}", message);
                RenderOutcome::Failed(message)
            }
        }
    }

    pub async fn refresh(&self) -> Result<RenderOutcome, GetError> {
        let ticket = self.begin();
        let result = self.client.get_user_options().await?;
        Ok(self.apply(ticket, result))
    }

    /// Flip one option the way a click on its checkbox does.
    ///
    /// The checkbox shows the new state right away and goes back to its
    /// previous state if the server does not accept the change. Refreshes
    /// still in flight are dropped so they cannot undo the toggle.
    pub async fn toggle(
        &self,
        id: OptionId,
        checked: bool,
    ) -> Result<ApiResult<Acknowledged>, PostError> {
        self.sequencer.issue();
        let checkbox = self.checkbox(id);
        let previous = checkbox.is_checked();
        checkbox.set_checked(checked);
        let result = self.client.set_user_option(id, checked).await;
        match &result {
            Ok(ApiResult::Success(_)) => {}
            Ok(ApiResult::Failure { message }) => {
                warn!("user options: updating {} failed: {}", id, message);
                checkbox.set_checked(previous);
            }
            Err(e) => {
                warn!("user options: updating {} failed: {}", id, e);
                checkbox.set_checked(previous);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{constants::USER_OPTIONS_PATH, view::MemoryCheckbox};
    use httpmock::prelude::*;
    use serde_json::json;

    fn widget(base_url: &str) -> UserOptionsWidget<MemoryCheckbox> {
        let client = Client::new(reqwest::Client::new(), base_url, None, None).unwrap();
        UserOptionsWidget::new(client, MemoryCheckbox::new(false), MemoryCheckbox::new(true))
    }

    fn checked(widget: &UserOptionsWidget<MemoryCheckbox>) -> (bool, bool) {
        (
            widget.checkbox(OptionId::CallIntercept).is_checked(),
            widget.checkbox(OptionId::CallWaiting).is_checked(),
        )
    }

    #[test]
    fn apply_sets_checkboxes_from_flags() {
        let widget = widget("http://localhost");
        for (intercept, waiting) in [(true, false), (false, true), (true, true), (false, false)] {
            let ticket = widget.begin();
            let outcome = widget.apply(
                ticket,
                ApiResult::Success(UserOptions {
                    call_intercept: intercept,
                    call_waiting: waiting,
                }),
            );
            assert_eq!(outcome, RenderOutcome::Loaded);
            assert_eq!(checked(&widget), (intercept, waiting));
        }
    }

    #[test]
    fn apply_failure_keeps_checkboxes() {
        let widget = widget("http://localhost");
        let ticket = widget.begin();

        let outcome = widget.apply(
            ticket,
            ApiResult::Failure {
                message: "forbidden".to_string(),
            },
        );

        assert_eq!(outcome, RenderOutcome::Failed("forbidden".to_string()));
        assert_eq!(checked(&widget), (false, true));
    }

    #[tokio::test]
    async fn refresh_renders_server_flags() {
        // Arrange
        let server = MockServer::start_async().await;
        let options_mock = server
            .mock_async(|when, then| {
                when.method(GET).path(USER_OPTIONS_PATH);
                then.status(200).json_body(json!({
                    "success": true,
                    "callIntercept": true,
                    "callWaiting": false
                }));
            })
            .await;
        let widget = widget(&server.base_url());

        // Act
        let outcome = widget.refresh().await;

        // Assert
        assert!(matches!(outcome, Ok(RenderOutcome::Loaded)));
        assert_eq!(checked(&widget), (true, false));
        options_mock.assert();
    }

    #[tokio::test]
    async fn toggle_keeps_accepted_state() {
        // Arrange
        let server = MockServer::start_async().await;
        let update_mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(USER_OPTIONS_PATH)
                    .json_body(json!({"id": "callIntercept", "checked": true}));
                then.status(200).json_body(json!({"success": true}));
            })
            .await;
        let widget = widget(&server.base_url());

        // Act
        let result = widget.toggle(OptionId::CallIntercept, true).await;

        // Assert
        assert!(matches!(result, Ok(ApiResult::Success(_))));
        assert_eq!(checked(&widget), (true, true));
        update_mock.assert();
    }

    #[tokio::test]
    async fn toggle_reverts_rejected_state() {
        // Arrange
        let server = MockServer::start_async().await;
        let update_mock = server
            .mock_async(|when, then| {
                when.method(POST).path(USER_OPTIONS_PATH);
                then.status(200).json_body(json!({
                    "success": false,
                    "message": "unexpected checkbox id"
                }));
            })
            .await;
        let widget = widget(&server.base_url());

        // Act
        let result = widget.toggle(OptionId::CallWaiting, false).await;

        // Assert
        assert!(matches!(result, Ok(ApiResult::Failure { .. })));
        assert_eq!(checked(&widget), (false, true));
        update_mock.assert();
    }

    #[tokio::test]
    async fn toggle_reverts_on_transport_error() {
        // Arrange
        let server = MockServer::start_async().await;
        let update_mock = server
            .mock_async(|when, then| {
                when.method(POST).path(USER_OPTIONS_PATH);
                then.status(502);
            })
            .await;
        let widget = widget(&server.base_url());

        // Act
        let result = widget.toggle(OptionId::CallIntercept, true).await;

        // Assert
        assert!(matches!(
            result,
            Err(PostError::ResponseError(status)) if status.as_u16() == 502
        ));
        assert_eq!(checked(&widget), (false, true));
        update_mock.assert();
    }

    #[tokio::test]
    async fn toggle_drops_refresh_started_before_it() {
        let widget = widget("http://test.invalid");
        let refresh_ticket = widget.begin();
        // no server: the post fails and the checkbox reverts, but the ticket is spent
        let result = widget.toggle(OptionId::CallIntercept, true).await;
        assert!(result.is_err());
        assert_eq!(checked(&widget), (false, true));

        let outcome = widget.apply(
            refresh_ticket,
            ApiResult::Success(UserOptions {
                call_intercept: true,
                call_waiting: false,
            }),
        );

        assert_eq!(outcome, RenderOutcome::Stale);
    }
}
