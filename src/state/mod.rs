//! Client-side state read by the router.

pub mod session;
