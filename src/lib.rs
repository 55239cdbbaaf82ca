pub mod config;
pub mod domain {
    pub mod event;
    pub mod report;
}
pub mod expiry;
pub mod http {
    pub mod handlers {
        pub mod ops;
        pub mod products;
    }
}
pub mod repo {
    pub mod product_events_repo;
    pub mod user_events_repo;
}
pub mod resolve {
    pub mod borrow_state;
    pub mod payment_methods;
}
pub mod service {
    pub mod report_service;
}

#[derive(Clone)]
pub struct AppState {
    pub report_service: service::report_service::ReportService,
}
