//! solde-api: typed client for the remote banking service.
//!
//! Every call goes through an explicit [`Session`] handed to the caller by
//! [`Session::login`] or rebuilt from a stored token; there is no ambient
//! authentication state.

pub mod accounts;
pub mod predictions;
pub mod profile;
pub mod session;
pub mod transactions;

pub use session::Session;
