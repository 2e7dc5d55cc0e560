//! Runtime configuration
//!
//! Environment-variable overrides with sensible defaults; no config files.

use std::env;
use std::net::SocketAddr;

use crate::types::AddActivityRequest;

/// Voting mode for a deployment
///
/// The two modes are incompatible by design: a deployment picks one and its
/// clients use only the matching endpoint, rather than mixing semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteMode {
    /// Each client holds at most one vote; casting retracts the previous one
    SingleChoice,
    /// Each client holds a set of votes, toggled independently
    MultiChoice,
}

impl VoteMode {
    /// Parse from `POLL_VOTE_MODE` (`single` | `multi`), defaulting to single
    pub fn from_env() -> Self {
        match env::var("POLL_VOTE_MODE").as_deref() {
            Ok("multi") => VoteMode::MultiChoice,
            _ => VoteMode::SingleChoice,
        }
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (`POLL_BIND_ADDR`, default `0.0.0.0:5228`)
    pub bind_addr: SocketAddr,
    /// Deployment voting mode (`POLL_VOTE_MODE`)
    pub vote_mode: VoteMode,
    /// Seed the store with demo activities on boot (`POLL_SEED_DEMO`)
    pub seed_demo: bool,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let bind_addr = env::var("POLL_BIND_ADDR")
            .ok()
            .and_then(|addr| addr.parse().ok())
            .unwrap_or_else(|| "0.0.0.0:5228".parse().expect("static addr"));

        let seed_demo = matches!(
            env::var("POLL_SEED_DEMO").as_deref(),
            Ok("1") | Ok("true") | Ok("yes")
        );

        Self {
            bind_addr,
            vote_mode: VoteMode::from_env(),
            seed_demo,
        }
    }
}

/// The demo activity list the original server booted with
pub fn demo_activities() -> Vec<AddActivityRequest> {
    let mut escape = AddActivityRequest::new("Escape Game en ville", "https://www.prizoners.com/");
    escape.description = Some("Résolvez des énigmes en équipe.".to_string());
    escape.tags = vec!["Indoor".to_string(), "90 min".to_string()];

    let mut karting = AddActivityRequest::new("Karting Team Sprint", "https://green-kart.com/");
    karting.description = Some("Courses en relais.".to_string());
    karting.tags = vec!["Outdoor".to_string(), "Adrénaline".to_string()];

    let mut bowling = AddActivityRequest::new(
        "Bowling",
        "https://grenoble.sevensquares.fr/bowling-grenoble/",
    );
    bowling.description = Some("Un bowling interactif unique à Grenoble !".to_string());
    bowling.tags = vec!["Indoor".to_string(), "fun".to_string()];

    vec![escape, karting, bowling]
}
