pub mod email_config;
pub mod layout;
