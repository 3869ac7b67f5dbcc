//! Auth Handlers

pub(crate) mod current;
pub(crate) mod login;
pub(crate) mod logout;
