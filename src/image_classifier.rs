pub mod fallback;
pub mod gateway;
pub mod impl_fake;
pub mod impl_http;
pub mod interface;
