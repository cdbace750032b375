//! Simulation Module
//!
//! Callers that exercise the table the way an application would.
//!
//! # Simulations
//! - Session cache: logins, keep-alive reads and logouts over discrete ticks

mod session;

pub use session::{run, Session, SimulationReport, TickReport};
