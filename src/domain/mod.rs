//! Domain layer: entities, pure pricing/fraud rules, and the ports the
//! application layer is wired through.

pub mod fraud;
pub mod payment;
pub mod ports;
pub mod pricing;
pub mod transaction;
