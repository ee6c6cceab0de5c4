pub mod api_key;
pub mod local_crypto;
