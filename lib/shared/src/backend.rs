use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a selectable backend integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendId {
    Google,
    Supabase,
}

impl BackendId {
    /// All known backends, in catalog order.
    pub const ALL: [BackendId; 2] = [BackendId::Google, BackendId::Supabase];

    pub fn as_str(&self) -> &'static str {
        match self {
            BackendId::Google => "google",
            BackendId::Supabase => "supabase",
        }
    }
}

impl fmt::Display for BackendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBackend(pub String);

impl fmt::Display for UnknownBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown backend '{}'", self.0)
    }
}

impl std::error::Error for UnknownBackend {}

impl FromStr for BackendId {
    type Err = UnknownBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "google" => Ok(BackendId::Google),
            "supabase" => Ok(BackendId::Supabase),
            other => Err(UnknownBackend(other.to_string())),
        }
    }
}

/// Last known reachability of a backend.
///
/// Non-exhaustive so rendering code keeps a fallback arm for values it does
/// not recognize.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendStatus {
    Online,
    Offline,
    #[default]
    Checking,
}

impl BackendStatus {
    /// Map a settled probe result to a status. A failed probe counts the same
    /// as a negative one.
    pub fn from_probe<E>(result: Result<bool, E>) -> Self {
        match result {
            Ok(true) => BackendStatus::Online,
            Ok(false) | Err(_) => BackendStatus::Offline,
        }
    }
}

/// Display record for one backend: static comparison copy plus the status
/// from the most recent health poll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendDescriptor {
    pub id: BackendId,
    pub name: String,
    pub description: String,
    pub status: BackendStatus,
    pub features: Vec<String>,
    pub advantages: Vec<String>,
    pub considerations: Vec<String>,
}

impl BackendDescriptor {
    /// Build the fixed two-entry catalog, both entries `Checking` until the
    /// first poll settles.
    pub fn catalog() -> Vec<BackendDescriptor> {
        vec![
            BackendDescriptor {
                id: BackendId::Google,
                name: "Google Apps Script".to_string(),
                description: "Sheets-backed storage running as a Google Apps Script web app."
                    .to_string(),
                status: BackendStatus::Checking,
                features: strings(&[
                    "Data lives in Google Sheets",
                    "Runs on Google infrastructure",
                    "No separate hosting to manage",
                    "Single web app endpoint",
                ]),
                advantages: strings(&[
                    "Zero hosting cost",
                    "Data editable directly in Sheets",
                    "Easy to audit by hand",
                ]),
                considerations: strings(&[
                    "Apps Script daily quotas",
                    "Slow cold starts",
                    "Coarse-grained sharing permissions",
                ]),
            },
            BackendDescriptor {
                id: BackendId::Supabase,
                name: "Supabase".to_string(),
                description: "Postgres-backed storage behind Supabase's managed REST API."
                    .to_string(),
                status: BackendStatus::Checking,
                features: strings(&[
                    "Dedicated Postgres database",
                    "Auto-generated REST API",
                    "Row-level security policies",
                    "Realtime change subscriptions",
                ]),
                advantages: strings(&[
                    "Fast queries at scale",
                    "Proper relational model",
                    "First-class SQL access",
                ]),
                considerations: strings(&[
                    "Requires a Supabase project",
                    "Free tier pauses on inactivity",
                    "API keys to manage",
                ]),
            },
        ]
    }
}

fn strings(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}

/// Outcome of asking to switch to a backend.
#[derive(Debug, Clone, PartialEq)]
pub enum SwitchDecision {
    /// Target is already the active backend; nothing to do.
    AlreadyActive,
    /// Target was last seen offline; the request must not be forwarded.
    Refused { name: String },
    /// Forward the request to the owner of the selection.
    Forward,
}

/// Gate a switch request against the catalog's last-known statuses.
///
/// Only `Offline` refuses; `Checking` is forwarded optimistically, the owner
/// decides what actually happens.
pub fn evaluate_switch(
    catalog: &[BackendDescriptor],
    active: BackendId,
    target: BackendId,
) -> SwitchDecision {
    if target == active {
        return SwitchDecision::AlreadyActive;
    }

    match catalog.iter().find(|entry| entry.id == target) {
        Some(entry) if entry.status == BackendStatus::Offline => SwitchDecision::Refused {
            name: entry.name.clone(),
        },
        _ => SwitchDecision::Forward,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_with(google: BackendStatus, supabase: BackendStatus) -> Vec<BackendDescriptor> {
        let mut catalog = BackendDescriptor::catalog();
        catalog[0].status = google;
        catalog[1].status = supabase;
        catalog
    }

    #[test]
    fn catalog_has_both_backends_checking() {
        let catalog = BackendDescriptor::catalog();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].id, BackendId::Google);
        assert_eq!(catalog[1].id, BackendId::Supabase);
        assert!(catalog
            .iter()
            .all(|entry| entry.status == BackendStatus::Checking));
    }

    #[test]
    fn id_round_trips_through_display_and_parse() {
        for id in BackendId::ALL {
            assert_eq!(id.to_string().parse::<BackendId>(), Ok(id));
        }
        assert!("postgres".parse::<BackendId>().is_err());
    }

    #[test]
    fn probe_result_maps_to_status() {
        assert_eq!(
            BackendStatus::from_probe::<String>(Ok(true)),
            BackendStatus::Online
        );
        assert_eq!(
            BackendStatus::from_probe::<String>(Ok(false)),
            BackendStatus::Offline
        );
        assert_eq!(
            BackendStatus::from_probe(Err("connection refused".to_string())),
            BackendStatus::Offline
        );
    }

    #[test]
    fn switch_to_active_backend_is_a_noop() {
        let catalog = catalog_with(BackendStatus::Online, BackendStatus::Online);
        assert_eq!(
            evaluate_switch(&catalog, BackendId::Google, BackendId::Google),
            SwitchDecision::AlreadyActive
        );
    }

    #[test]
    fn switch_to_offline_backend_is_refused_by_name() {
        let catalog = catalog_with(BackendStatus::Online, BackendStatus::Offline);
        assert_eq!(
            evaluate_switch(&catalog, BackendId::Google, BackendId::Supabase),
            SwitchDecision::Refused {
                name: "Supabase".to_string()
            }
        );
    }

    #[test]
    fn switch_to_online_or_checking_backend_is_forwarded() {
        let catalog = catalog_with(BackendStatus::Checking, BackendStatus::Online);
        assert_eq!(
            evaluate_switch(&catalog, BackendId::Supabase, BackendId::Google),
            SwitchDecision::Forward
        );
        assert_eq!(
            evaluate_switch(&catalog, BackendId::Google, BackendId::Supabase),
            SwitchDecision::Forward
        );
    }
}
