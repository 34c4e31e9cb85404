//! Application layer containing the core business logic orchestration.
//!
//! This module defines the `PaymentOrchestrator` which acts as the primary
//! entry point for charging and refunding payments. It is wired with boxed
//! port implementations so the same pipeline runs against any gateway,
//! notifier, or analytics backend.

pub mod orchestrator;
