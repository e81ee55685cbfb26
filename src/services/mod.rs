pub mod pricing_service;
pub mod store;
pub mod trip_request_service;
pub mod validation_service;
