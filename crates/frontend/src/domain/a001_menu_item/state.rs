//! Menu item widget - headless state
//!
//! All transitions of the widget live here, free of any DOM or reactive
//! types, so the view only has to call them and render the fields.

use super::api::FetchFailure;
use contracts::domain::a001_menu_item::{ItemDetailsRequest, ItemDetailsResponse};
use contracts::enums::GenerationModel;

pub const EMPTY_NAME_MESSAGE: &str = "Please enter a food item name";
pub const GENERATED_MESSAGE: &str = "Content generated successfully!";
pub const COPIED_MESSAGE: &str = "Copied to clipboard!";
pub const RATE_LIMIT_MESSAGE: &str =
    "Rate limit exceeded. Please wait a moment before trying again.";
pub const SERVER_ERROR_MESSAGE: &str = "Server error. Please try again later.";
pub const CONNECTION_MESSAGE: &str =
    "Failed to generate content. Please check your connection and try again.";

/// Время жизни уведомления о копировании, мс
pub const COPY_NOTICE_MS: u32 = 2000;

/// Причина неудачной отправки формы
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Пустое имя, до сети дело не дошло
    Validation,
    /// Сервер сам объяснил, что пошло не так
    Reported(String),
    RateLimited,
    ServerError,
    NetworkOrUnknown,
}

impl SubmitError {
    /// Classify a failed call. A non-empty `error` in the body always wins
    /// over the status code.
    pub fn from_failure(failure: &FetchFailure) -> Self {
        if let Some(body) = &failure.body {
            if !body.error.is_empty() {
                return SubmitError::Reported(body.error.clone());
            }
        }
        match failure.status {
            Some(429) => SubmitError::RateLimited,
            Some(500) => SubmitError::ServerError,
            _ => SubmitError::NetworkOrUnknown,
        }
    }

    pub fn message(&self) -> String {
        match self {
            SubmitError::Validation => EMPTY_NAME_MESSAGE.to_string(),
            SubmitError::Reported(msg) => msg.clone(),
            SubmitError::RateLimited => RATE_LIMIT_MESSAGE.to_string(),
            SubmitError::ServerError => SERVER_ERROR_MESSAGE.to_string(),
            SubmitError::NetworkOrUnknown => CONNECTION_MESSAGE.to_string(),
        }
    }
}

/// A submission that passed validation and is waiting for its response.
///
/// `seq` ties the response back to the submission; only the latest one
/// issued is allowed to change the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    seq: u64,
    pub request: ItemDetailsRequest,
}

impl SubmitTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetState {
    pub input_value: String,
    pub selected_model: GenerationModel,
    pub is_loading: bool,
    pub last_error: Option<String>,
    pub last_success_message: Option<String>,
    pub last_result: Option<ItemDetailsResponse>,
    latest_seq: u64,
}

impl WidgetState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_item_name(&mut self, text: impl Into<String>) {
        self.input_value = text.into();
    }

    pub fn toggle_model(&mut self) {
        self.selected_model = self.selected_model.toggled();
    }

    /// Кнопка отправки активна только с непустым именем и без запроса в полёте
    pub fn can_submit(&self) -> bool {
        !self.is_loading && !self.input_value.trim().is_empty()
    }

    /// Start a submission.
    ///
    /// Returns `None` when the trimmed name is empty; the validation message
    /// is set and nothing else changes. Otherwise the previous outcome is
    /// cleared, loading starts and the caller must send `ticket.request` and
    /// hand the outcome to [`WidgetState::finish`].
    pub fn begin_submit(&mut self) -> Option<SubmitTicket> {
        let item_name = self.input_value.trim();
        if item_name.is_empty() {
            self.last_error = Some(SubmitError::Validation.message());
            return None;
        }

        let request = ItemDetailsRequest::new(item_name, self.selected_model);
        self.last_error = None;
        self.last_success_message = None;
        self.last_result = None;
        self.is_loading = true;
        self.latest_seq += 1;

        Some(SubmitTicket {
            seq: self.latest_seq,
            request,
        })
    }

    /// Apply the outcome of a submission. Returns `false` (and leaves the
    /// state untouched) for a ticket superseded by a newer submission.
    pub fn finish(
        &mut self,
        ticket: &SubmitTicket,
        outcome: Result<ItemDetailsResponse, FetchFailure>,
    ) -> bool {
        if ticket.seq != self.latest_seq {
            return false;
        }

        self.is_loading = false;
        match outcome {
            Ok(result) => {
                self.last_error = None;
                self.last_result = Some(result);
                self.last_success_message = Some(GENERATED_MESSAGE.to_string());
            }
            Err(failure) => {
                self.last_result = None;
                self.last_error = Some(SubmitError::from_failure(&failure).message());
            }
        }
        true
    }

    /// Записать уведомление о копировании; снимается через [`COPY_NOTICE_MS`]
    pub fn notify_copied(&mut self) {
        self.last_success_message = Some(COPIED_MESSAGE.to_string());
    }

    /// Fired by the copy timer. Clears whatever success message is showing.
    pub fn expire_copy_notice(&mut self) {
        self.last_success_message = None;
    }

    pub fn description(&self) -> Option<&str> {
        self.last_result.as_ref().map(|r| r.description.as_str())
    }

    pub fn upsell_suggestion(&self) -> Option<&str> {
        self.last_result.as_ref().map(|r| r.upsell_suggestion.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_menu_item::api::ItemDetailsClient;
    use contracts::domain::a001_menu_item::ErrorResponse;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Клиент-заглушка: отдаёт заранее подготовленные ответы и запоминает запросы
    #[derive(Default)]
    struct FakeClient {
        calls: RefCell<Vec<ItemDetailsRequest>>,
        outcomes: RefCell<VecDeque<Result<ItemDetailsResponse, FetchFailure>>>,
    }

    impl FakeClient {
        fn answering(outcome: Result<ItemDetailsResponse, FetchFailure>) -> Self {
            let client = Self::default();
            client.outcomes.borrow_mut().push_back(outcome);
            client
        }
    }

    impl ItemDetailsClient for FakeClient {
        async fn generate(
            &self,
            request: &ItemDetailsRequest,
        ) -> Result<ItemDetailsResponse, FetchFailure> {
            self.calls.borrow_mut().push(request.clone());
            self.outcomes
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(FetchFailure::no_response()))
        }
    }

    /// The same sequence the view runs on submit.
    fn run_submit(state: &mut WidgetState, client: &FakeClient) {
        if let Some(ticket) = state.begin_submit() {
            let outcome = block_on(client.generate(&ticket.request));
            state.finish(&ticket, outcome);
        }
    }

    fn pizza() -> ItemDetailsResponse {
        ItemDetailsResponse {
            item_name: "Margherita Pizza".to_string(),
            description: "Fresh mozzarella, basil, and tomato sauce on crispy crust".to_string(),
            upsell_suggestion: "Pair it with a refreshing Italian soda for the perfect meal!"
                .to_string(),
            model_used: "gpt-3.5-turbo".to_string(),
            generated_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    fn assert_exactly_one_outcome(state: &WidgetState) {
        assert!(!state.is_loading);
        assert!(state.last_error.is_some() != state.last_result.is_some());
    }

    #[test]
    fn test_empty_or_blank_name_never_calls_backend() {
        for input in ["", "   ", "\t\n"] {
            let client = FakeClient::answering(Ok(pizza()));
            let mut state = WidgetState::new();
            state.set_item_name(input);

            run_submit(&mut state, &client);

            assert!(client.calls.borrow().is_empty());
            assert_eq!(state.last_error.as_deref(), Some(EMPTY_NAME_MESSAGE));
            assert!(!state.is_loading);
        }
    }

    #[test]
    fn test_validation_keeps_previous_result() {
        let client = FakeClient::answering(Ok(pizza()));
        let mut state = WidgetState::new();
        state.set_item_name("Margherita Pizza");
        run_submit(&mut state, &client);

        state.set_item_name("  ");
        run_submit(&mut state, &client);

        assert_eq!(client.calls.borrow().len(), 1);
        assert_eq!(state.last_error.as_deref(), Some(EMPTY_NAME_MESSAGE));
        assert!(state.last_result.is_some());
    }

    #[test]
    fn test_success_sends_trimmed_name_and_renders_fields_verbatim() {
        let client = FakeClient::answering(Ok(pizza()));
        let mut state = WidgetState::new();
        state.set_item_name("  Margherita Pizza ");

        run_submit(&mut state, &client);

        let calls = client.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            serde_json::to_string(&calls[0]).unwrap(),
            r#"{"item_name":"Margherita Pizza","model":"gpt-3.5-turbo"}"#
        );
        assert_eq!(state.description(), Some(pizza().description.as_str()));
        assert_eq!(
            state.upsell_suggestion(),
            Some(pizza().upsell_suggestion.as_str())
        );
        assert_eq!(state.last_success_message.as_deref(), Some(GENERATED_MESSAGE));
        assert_exactly_one_outcome(&state);
    }

    #[test]
    fn test_toggled_model_is_sent() {
        let client = FakeClient::answering(Ok(pizza()));
        let mut state = WidgetState::new();
        state.set_item_name("Paneer Tikka Pizza");
        state.toggle_model();

        run_submit(&mut state, &client);

        assert_eq!(client.calls.borrow()[0].model, GenerationModel::Gpt4);
    }

    #[test]
    fn test_begin_submit_clears_previous_outcome_and_sets_loading() {
        let mut state = WidgetState::new();
        state.last_error = Some("old".to_string());
        state.last_success_message = Some("old".to_string());
        state.last_result = Some(pizza());
        state.set_item_name("Chicken Burger");

        let ticket = state.begin_submit().unwrap();

        assert!(state.is_loading);
        assert!(state.last_error.is_none());
        assert!(state.last_success_message.is_none());
        assert!(state.last_result.is_none());
        assert!(!state.can_submit());
        assert_eq!(ticket.request.item_name, "Chicken Burger");
    }

    #[test]
    fn test_rate_limit_with_empty_body() {
        let client = FakeClient::answering(Err(FetchFailure::http(429, None)));
        let mut state = WidgetState::new();
        state.set_item_name("Margherita Pizza");

        run_submit(&mut state, &client);

        assert_eq!(state.last_error.as_deref(), Some(RATE_LIMIT_MESSAGE));
        assert_exactly_one_outcome(&state);
    }

    #[test]
    fn test_body_error_wins_over_status() {
        for status in [400, 429, 500, 503] {
            let failure =
                FetchFailure::http(status, Some(ErrorResponse::new("Custom backend message")));
            let client = FakeClient::answering(Err(failure));
            let mut state = WidgetState::new();
            state.set_item_name("Margherita Pizza");

            run_submit(&mut state, &client);

            assert_eq!(state.last_error.as_deref(), Some("Custom backend message"));
            assert_exactly_one_outcome(&state);
        }
    }

    #[test]
    fn test_status_fallbacks() {
        let cases = [
            (FetchFailure::http(500, None), SERVER_ERROR_MESSAGE),
            (FetchFailure::http(404, None), CONNECTION_MESSAGE),
            (FetchFailure::no_response(), CONNECTION_MESSAGE),
            (
                FetchFailure::http(500, Some(ErrorResponse::new(""))),
                SERVER_ERROR_MESSAGE,
            ),
        ];
        for (failure, expected) in cases {
            assert_eq!(SubmitError::from_failure(&failure).message(), expected);
        }
    }

    #[test]
    fn test_failure_allows_resubmit() {
        let client = FakeClient::default();
        client
            .outcomes
            .borrow_mut()
            .push_back(Err(FetchFailure::http(500, None)));
        client.outcomes.borrow_mut().push_back(Ok(pizza()));
        let mut state = WidgetState::new();
        state.set_item_name("Margherita Pizza");

        run_submit(&mut state, &client);
        assert_eq!(state.last_error.as_deref(), Some(SERVER_ERROR_MESSAGE));
        assert!(state.can_submit());

        run_submit(&mut state, &client);
        assert_eq!(client.calls.borrow().len(), 2);
        assert!(state.last_error.is_none());
        assert_exactly_one_outcome(&state);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = WidgetState::new();
        state.set_item_name("Margherita Pizza");
        let first = state.begin_submit().unwrap();
        state.set_item_name("Chicken Burger");
        let second = state.begin_submit().unwrap();
        assert!(second.seq() > first.seq());

        let applied = state.finish(&first, Err(FetchFailure::http(500, None)));
        assert!(!applied);
        assert!(state.is_loading);
        assert!(state.last_error.is_none());

        let mut burger = pizza();
        burger.item_name = "Chicken Burger".to_string();
        assert!(state.finish(&second, Ok(burger)));
        assert_eq!(
            state.last_result.as_ref().map(|r| r.item_name.as_str()),
            Some("Chicken Burger")
        );
        assert_exactly_one_outcome(&state);
    }

    #[test]
    fn test_copy_notice_set_and_expired() {
        let mut state = WidgetState::new();
        state.notify_copied();
        assert_eq!(state.last_success_message.as_deref(), Some(COPIED_MESSAGE));

        state.expire_copy_notice();
        assert!(state.last_success_message.is_none());
        assert_eq!(COPY_NOTICE_MS, 2000);
    }

    #[test]
    fn test_toggle_model_only_two_states() {
        let mut state = WidgetState::new();
        assert_eq!(state.selected_model, GenerationModel::Gpt35Turbo);
        state.toggle_model();
        assert_eq!(state.selected_model, GenerationModel::Gpt4);
        state.toggle_model();
        assert_eq!(state.selected_model, GenerationModel::Gpt35Turbo);
    }
}
