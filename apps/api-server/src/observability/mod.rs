//! Observability - alert dispatch for critical errors.

mod alert;

pub use alert::{AlertLayer, AlertMessage, AlertSender};
