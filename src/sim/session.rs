//! Session Cache Simulation
//!
//! Drives a session table through a fixed schedule of logins, keep-alive
//! reads and one explicit logout, advancing the table one tick per step.

use std::cell::Cell;
use std::rc::Rc;

use serde::Serialize;
use tracing::info;

use crate::config::Config;
use crate::error::{display_key, Result};
use crate::table::{TableStats, TtlHash};

/// Keys and usernames of the simulated sessions, in login order.
const SESSIONS: [(&[u8], &str); 4] = [
    (b"sess_a", "alice"),
    (b"sess_b", "bob"),
    (b"sess_c", "carol"),
    (b"sess_d", "dave"),
];

const FIRST_SESSION_ID: u32 = 1000;

/// Ticks on which alice's session is read to keep it alive.
const KEEP_ALIVE_TICKS: [u32; 4] = [2, 4, 6, 8];

// == Session ==
/// A logged-in user, owned by the table until released.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub session_id: u32,
    pub username: String,
}

impl Session {
    pub fn new(session_id: u32, username: impl Into<String>) -> Self {
        Self {
            session_id,
            username: username.into(),
        }
    }
}

// == Reports ==
/// Sessions found active during one step, before that step's tick.
#[derive(Debug, Clone, Serialize)]
pub struct TickReport {
    pub tick: u32,
    pub active: Vec<String>,
}

/// Outcome of a full simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub ticks: Vec<TickReport>,
    /// Sessions handed back by the table on any path
    pub released: usize,
    pub stats: TableStats,
}

// == Run ==
/// Runs the session schedule for `config.sim_ticks` steps, then closes the table.
///
/// # Schedule
/// - tick 1: alice and bob log in
/// - tick 3: carol logs in, bob logs out
/// - tick 5: dave logs in
/// - ticks 2, 4, 6, 8: alice's session is read
/// - every tick: all four sessions are looked up (which also refreshes them)
pub fn run(config: &Config) -> Result<SimulationReport> {
    let released = Rc::new(Cell::new(0usize));
    let counter = released.clone();

    let mut cache: TtlHash<Session> = TtlHash::from_config(
        config,
        Some(Box::new(move |key: &[u8], session: Session| {
            info!(
                id = session.session_id,
                key = %display_key(key),
                user = %session.username,
                "session released"
            );
            counter.set(counter.get() + 1);
        })),
    )?;

    let mut next_id = FIRST_SESSION_ID;
    let mut login = |cache: &mut TtlHash<Session>, (key, user): (&[u8], &str)| -> Result<()> {
        cache.put(key, Session::new(next_id, user))?;
        next_id += 1;
        info!(user, "session added");
        Ok(())
    };

    let mut reports = Vec::with_capacity(config.sim_ticks as usize);

    for tick in 1..=config.sim_ticks {
        info!(tick, "simulation step");

        match tick {
            1 => {
                login(&mut cache, SESSIONS[0])?;
                login(&mut cache, SESSIONS[1])?;
            }
            3 => login(&mut cache, SESSIONS[2])?,
            5 => login(&mut cache, SESSIONS[3])?,
            _ => {}
        }

        if KEEP_ALIVE_TICKS.contains(&tick) && cache.get(SESSIONS[0].0).is_some() {
            info!("accessed alice's session (ttl reset)");
        }

        if tick == 3 && cache.rem(SESSIONS[1].0).is_ok() {
            info!("bob logged out explicitly");
        }

        let active: Vec<String> = SESSIONS
            .iter()
            .filter(|(key, _)| cache.get(key).is_some())
            .map(|(_, user)| user.to_string())
            .collect();
        info!(tick, active = ?active, "active sessions");
        reports.push(TickReport { tick, active });

        cache.tick();
    }

    let stats = cache.close();
    info!(released = released.get(), "session cache closed");

    Ok(SimulationReport {
        ticks: reports,
        released: released.get(),
        stats,
    })
}
