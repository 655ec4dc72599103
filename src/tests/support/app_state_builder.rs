use crate::contact::application::ports::incoming::use_cases::SubmitContactMessageUseCase;
use crate::portfolio::application::ports::incoming::use_cases::GetPortfolioDataUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    get_portfolio_data: Option<Arc<dyn GetPortfolioDataUseCase + Send + Sync>>,
    submit_contact_message: Option<Arc<dyn SubmitContactMessageUseCase + Send + Sync>>,
    admin_url: String,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            get_portfolio_data: Some(Arc::new(StubGetPortfolioDataUseCase::unavailable(
                "not used in this test",
            ))),
            submit_contact_message: Some(Arc::new(StubSubmitContactMessageUseCase::echo())),
            admin_url: "/admin".to_string(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_portfolio_data(
        mut self,
        uc: impl GetPortfolioDataUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_portfolio_data = Some(Arc::new(uc));
        self
    }

    pub fn with_submit_contact_message(
        mut self,
        uc: impl SubmitContactMessageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submit_contact_message = Some(Arc::new(uc));
        self
    }

    pub fn with_admin_url(mut self, admin_url: &str) -> Self {
        self.admin_url = admin_url.to_string();
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            get_portfolio_data_use_case: self
                .get_portfolio_data
                .expect("get_portfolio_data not set"),
            submit_contact_message_use_case: self
                .submit_contact_message
                .expect("submit_contact_message not set"),
            admin_url: self.admin_url,
        })
    }
}
