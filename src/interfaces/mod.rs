//! Transports and serializers sitting at the edge of the application.

pub mod console;
pub mod csv;
pub mod telegram;
