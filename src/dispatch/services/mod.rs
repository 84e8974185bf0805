//! Delivery dispatch services.

mod dispatcher;

pub use dispatcher::Dispatcher;
