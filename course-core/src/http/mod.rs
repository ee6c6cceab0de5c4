pub mod payload;
pub mod request_handler;
pub mod response;
pub mod router;
