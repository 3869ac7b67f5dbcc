//! Session authentication

pub(crate) mod handlers;
pub(crate) mod middleware;

pub(crate) use handlers::{current, login, logout};
