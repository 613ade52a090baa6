//! # maestro Records
//!
//! The domain / agent / process hierarchy as served by the maestro API.
//!
//! The server is written against Go structs, so JSON field names are
//! PascalCase (`AdminState`, `ProcessClass`) and empty slices arrive as
//! `null`. Every collection field therefore goes through [`null_as_default`].
//!
//! Records are read-only snapshots: a view model holds one until the next
//! fetch or patch response replaces it wholesale.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::key::decode_key_path;

/// Deserialize a field that may be `null` into its `Default` value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// RunState
// ============================================================================

/// Administrative (desired) or operational (observed) run state of a process.
///
/// The wire form is a bare string: `"on"`, `"off"` or `""`. Anything else is
/// kept verbatim in [`RunState::Other`] so an unexpected server value is
/// displayed rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RunState {
    On,
    Off,
    #[default]
    Unset,
    Other(String),
}

impl RunState {
    pub fn as_str(&self) -> &str {
        match self {
            RunState::On => "on",
            RunState::Off => "off",
            RunState::Unset => "",
            RunState::Other(s) => s,
        }
    }

    pub fn is_on(&self) -> bool {
        matches!(self, RunState::On)
    }
}

impl From<String> for RunState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "on" => RunState::On,
            "off" => RunState::Off,
            "" => RunState::Unset,
            _ => RunState::Other(value),
        }
    }
}

impl From<&str> for RunState {
    fn from(value: &str) -> Self {
        RunState::from(value.to_string())
    }
}

impl From<RunState> for String {
    fn from(value: RunState) -> Self {
        match value {
            RunState::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::Unset => write!(f, "-"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

// ============================================================================
// ProcessRecord
// ============================================================================

/// A managed process as reported by the maestro API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProcessRecord {
    pub name: String,
    pub key: String,
    pub command: String,
    pub arguments: String,
    pub process_class: String,
    /// Desired state, set by the operator.
    pub admin_state: RunState,
    /// Observed state, reported by the agent.
    pub oper_state: RunState,
    /// OS process id, `0` when not running.
    pub pid: i64,
}

impl ProcessRecord {
    pub fn is_running(&self) -> bool {
        self.pid != 0
    }

    /// Store path the key was derived from, if the key decodes.
    pub fn key_path(&self) -> Option<String> {
        decode_key_path(&self.key)
    }

    /// `Command` followed by `Arguments`, as the agent would launch it.
    pub fn command_line(&self) -> String {
        if self.arguments.is_empty() {
            self.command.clone()
        } else {
            format!("{} {}", self.command, self.arguments)
        }
    }
}

// ============================================================================
// AgentRecord
// ============================================================================

/// A maestro agent: the host-side daemon that runs processes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AgentRecord {
    pub name: String,
    pub key: String,
    pub agent_class: String,
    #[serde(rename = "OS")]
    pub os: String,
    /// Ephemeral registration node; non-empty while the agent is connected.
    pub eph: String,
    #[serde(deserialize_with = "null_as_default")]
    pub processes: Vec<ProcessRecord>,
}

impl AgentRecord {
    pub fn is_connected(&self) -> bool {
        !self.eph.is_empty()
    }

    pub fn key_path(&self) -> Option<String> {
        decode_key_path(&self.key)
    }
}

// ============================================================================
// DomainRecord
// ============================================================================

/// Agents currently registered with a domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RuntimeConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub agents: Vec<AgentRecord>,
}

/// Configured agents and domain-level process definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StaticConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub agents: Vec<AgentRecord>,
    #[serde(deserialize_with = "null_as_default")]
    pub processes: Vec<ProcessRecord>,
}

/// Top-level maestro domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DomainRecord {
    pub name: String,
    pub key: String,
    pub runtime: RuntimeConfig,
    pub config: StaticConfig,
}

impl DomainRecord {
    pub fn key_path(&self) -> Option<String> {
        decode_key_path(&self.key)
    }

    /// Find an agent by key in either the runtime or the config sub-tree.
    ///
    /// Runtime agents are searched first since they carry live process state.
    pub fn find_agent(&self, key: &str) -> Option<&AgentRecord> {
        self.runtime
            .agents
            .iter()
            .chain(self.config.agents.iter())
            .find(|a| a.key == key)
    }

    /// Total number of processes across every agent and the domain config.
    pub fn process_count(&self) -> usize {
        let agent_procs: usize = self
            .runtime
            .agents
            .iter()
            .chain(self.config.agents.iter())
            .map(|a| a.processes.len())
            .sum();
        agent_procs + self.config.processes.len()
    }
}

// ============================================================================
// ProcessPatch
// ============================================================================

/// Partial update for a process, sent as a JSON merge-patch.
///
/// Only `AdminState` is writable from the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProcessPatch {
    pub admin_state: RunState,
}

impl ProcessPatch {
    /// Ask the agent to run the process.
    pub fn start() -> Self {
        Self {
            admin_state: RunState::On,
        }
    }

    /// Ask the agent to stop the process.
    pub fn stop() -> Self {
        Self {
            admin_state: RunState::Off,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROCESS_JSON: &str = r#"{
        "Name": "p01",
        "Key": "L21hZXN0cm8vZDAxL2NvbmZpZy9wcm9jZXNzZXMvcDAx",
        "Command": "/usr/bin/sleep",
        "Arguments": "3600",
        "ProcessClass": "batch",
        "AdminState": "on",
        "OperState": "on",
        "Pid": 6116
    }"#;

    #[test]
    fn test_process_deserializes_go_field_names() {
        let process: ProcessRecord = serde_json::from_str(PROCESS_JSON).unwrap();
        assert_eq!(process.name, "p01");
        assert_eq!(process.process_class, "batch");
        assert_eq!(process.admin_state, RunState::On);
        assert_eq!(process.pid, 6116);
        assert!(process.is_running());
        assert_eq!(process.command_line(), "/usr/bin/sleep 3600");
        assert_eq!(
            process.key_path().as_deref(),
            Some("/maestro/d01/config/processes/p01")
        );
    }

    #[test]
    fn test_run_state_wire_values() {
        assert_eq!(RunState::from("on"), RunState::On);
        assert_eq!(RunState::from("off"), RunState::Off);
        assert_eq!(RunState::from(""), RunState::Unset);
        assert_eq!(
            RunState::from("starting"),
            RunState::Other("starting".to_string())
        );
        assert_eq!(
            serde_json::to_string(&RunState::Other("starting".into())).unwrap(),
            "\"starting\""
        );
    }

    #[test]
    fn test_empty_admin_state_is_unset() {
        let process: ProcessRecord =
            serde_json::from_str(r#"{"Name":"p","AdminState":"","OperState":"","Pid":0}"#)
                .unwrap();
        assert_eq!(process.admin_state, RunState::Unset);
        assert!(!process.is_running());
        assert_eq!(process.admin_state.to_string(), "-");
    }

    #[test]
    fn test_domain_with_null_slices() {
        let json = r#"{
            "Name": "d01",
            "Key": "L21hZXN0cm8vZDAx",
            "Runtime": {"Agents": null},
            "Config": {"Agents": [{"Name": "a01", "Key": "k-a01", "AgentClass": "linux",
                                   "OS": "linux", "Eph": "", "Processes": null}],
                       "Processes": null}
        }"#;
        let domain: DomainRecord = serde_json::from_str(json).unwrap();
        assert!(domain.runtime.agents.is_empty());
        assert_eq!(domain.config.agents.len(), 1);
        assert_eq!(domain.config.agents[0].os, "linux");
        assert!(domain.config.agents[0].processes.is_empty());
        assert!(!domain.config.agents[0].is_connected());
        assert_eq!(domain.key_path().as_deref(), Some("/maestro/d01"));
    }

    #[test]
    fn test_find_agent_prefers_runtime() {
        let runtime_agent = AgentRecord {
            name: "runtime".into(),
            key: "k1".into(),
            ..Default::default()
        };
        let config_agent = AgentRecord {
            name: "config".into(),
            key: "k1".into(),
            ..Default::default()
        };
        let domain = DomainRecord {
            runtime: RuntimeConfig {
                agents: vec![runtime_agent],
            },
            config: StaticConfig {
                agents: vec![config_agent],
                processes: vec![ProcessRecord::default()],
            },
            ..Default::default()
        };
        assert_eq!(domain.find_agent("k1").unwrap().name, "runtime");
        assert!(domain.find_agent("missing").is_none());
        assert_eq!(domain.process_count(), 1);
    }

    #[test]
    fn test_process_patch_body() {
        assert_eq!(
            serde_json::to_string(&ProcessPatch::start()).unwrap(),
            r#"{"AdminState":"on"}"#
        );
        assert_eq!(
            serde_json::to_string(&ProcessPatch::stop()).unwrap(),
            r#"{"AdminState":"off"}"#
        );
    }
}
