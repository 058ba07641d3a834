//! Shared model and pure logic for the email template composer.
//!
//! Everything in this crate is free of browser and server dependencies so the
//! frontend and backend agree on wire types and the merge rules can be tested
//! natively.

pub mod composer;
pub mod editor;
pub mod error;
pub mod export;
pub mod model;
pub mod render;
pub mod requests;
