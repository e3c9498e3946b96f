pub mod credentials;
pub mod events;
pub mod issues;
pub mod sheets;
