//! In-memory [`ResourceClient`] for demo mode and tests.
//!
//! Serves a fixed domain hierarchy and plays the server's part on `PATCH`:
//! the patch's `AdminState` is applied to the stored process and the updated
//! record is returned. Every request is recorded so tests can assert on the
//! exact calls a controller issued.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use maestro_core::prelude::*;
use maestro_core::{
    encode_path_key, AgentRecord, DomainRecord, ProcessRecord, RunState, RuntimeConfig,
    StaticConfig,
};

use crate::client::ResourceClient;
use crate::paths::ResourcePath;

/// HTTP method of a recorded request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Patch,
}

/// A request seen by the fixture client.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: ResourcePath,
    /// JSON body of a `PATCH`.
    pub body: Option<Value>,
}

/// Failure injected for a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureFailure {
    Transport(String),
    Status(u16, String),
    Parse(String),
}

impl FixtureFailure {
    fn to_error(&self) -> Error {
        match self {
            FixtureFailure::Transport(msg) => Error::transport(msg.clone()),
            FixtureFailure::Status(status, msg) => Error::http_status(*status, msg.clone()),
            FixtureFailure::Parse(msg) => Error::parse(msg.clone()),
        }
    }
}

#[derive(Debug, Default)]
struct FixtureStore {
    domains: Vec<DomainRecord>,
    requests: Vec<RecordedRequest>,
    failures: HashMap<ResourcePath, FixtureFailure>,
}

impl FixtureStore {
    fn processes_mut(&mut self) -> impl Iterator<Item = &mut ProcessRecord> {
        self.domains.iter_mut().flat_map(|d| {
            d.runtime
                .agents
                .iter_mut()
                .chain(d.config.agents.iter_mut())
                .flat_map(|a| a.processes.iter_mut())
                .chain(d.config.processes.iter_mut())
        })
    }

    fn find_process(&mut self, key: &str) -> Option<ProcessRecord> {
        self.processes_mut().find(|p| p.key == key).cloned()
    }

    /// Apply `AdminState` to every copy of the process.
    ///
    /// The same process can appear under a runtime agent and in the domain
    /// config; both share one store node on the server.
    fn set_admin_state(&mut self, key: &str, state: RunState) -> Option<ProcessRecord> {
        let mut updated = None;
        for process in self.processes_mut().filter(|p| p.key == key) {
            process.admin_state = state.clone();
            updated = Some(process.clone());
        }
        updated
    }
}

/// [`ResourceClient`] backed by fixture records.
///
/// Cloning shares the underlying store.
#[derive(Debug, Clone, Default)]
pub struct FixtureResourceClient {
    store: Arc<Mutex<FixtureStore>>,
}

impl FixtureResourceClient {
    pub fn new(domains: Vec<DomainRecord>) -> Self {
        Self {
            store: Arc::new(Mutex::new(FixtureStore {
                domains,
                ..Default::default()
            })),
        }
    }

    /// Client serving [`demo_domains`].
    pub fn demo() -> Self {
        Self::new(demo_domains())
    }

    fn lock(&self) -> MutexGuard<'_, FixtureStore> {
        // A panic in another test thread must not hide this client's data.
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Every request issued so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    /// Requests with the given method.
    pub fn requests_with(&self, method: Method) -> Vec<RecordedRequest> {
        self.lock()
            .requests
            .iter()
            .filter(|r| r.method == method)
            .cloned()
            .collect()
    }

    /// Make every request to `path` fail until [`clear_failure`] is called.
    ///
    /// [`clear_failure`]: Self::clear_failure
    pub fn fail(&self, path: ResourcePath, failure: FixtureFailure) {
        self.lock().failures.insert(path, failure);
    }

    pub fn clear_failure(&self, path: &ResourcePath) {
        self.lock().failures.remove(path);
    }

    /// Current stored copy of a process.
    pub fn process(&self, key: &str) -> Option<ProcessRecord> {
        self.lock().find_process(key)
    }

    fn respond(&self, method: Method, path: &ResourcePath, body: Option<Value>) -> Result<Value> {
        let mut store = self.lock();
        store.requests.push(RecordedRequest {
            method,
            path: path.clone(),
            body: body.clone(),
        });

        if let Some(failure) = store.failures.get(path) {
            return Err(failure.to_error());
        }

        let not_found = || Error::http_status(404, format!("{path} not found"));

        match (method, path) {
            (Method::Get, ResourcePath::Domains) => Ok(serde_json::to_value(&store.domains)?),
            (Method::Get, ResourcePath::Domain(key)) => {
                let domain = store
                    .domains
                    .iter()
                    .find(|d| &d.key == key)
                    .ok_or_else(not_found)?;
                // Single domains come back wrapped in an array.
                Ok(serde_json::to_value(vec![domain])?)
            }
            (Method::Get, ResourcePath::Process(key)) => {
                let process = store.find_process(key).ok_or_else(not_found)?;
                Ok(serde_json::to_value(process)?)
            }
            (Method::Patch, ResourcePath::Process(key)) => {
                let admin_state = body
                    .as_ref()
                    .and_then(|b| b.get("AdminState"))
                    .and_then(Value::as_str)
                    .map(RunState::from);
                let updated = match admin_state {
                    Some(state) => store.set_admin_state(key, state),
                    None => store.find_process(key),
                };
                let process = updated.ok_or_else(not_found)?;
                Ok(serde_json::to_value(process)?)
            }
            (Method::Patch, _) => Err(Error::http_status(405, format!("PATCH {path} not allowed"))),
        }
    }
}

fn from_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| Error::parse(e.to_string()))
}

impl ResourceClient for FixtureResourceClient {
    async fn fetch<T>(&self, path: &ResourcePath) -> Result<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        trace!("fixture GET {}", path);
        let value = self.respond(Method::Get, path, None)?;
        from_value(value)
    }

    async fn update<P, T>(&self, path: &ResourcePath, patch: &P) -> Result<T>
    where
        P: Serialize + Sync,
        T: DeserializeOwned + Send + 'static,
    {
        let body = serde_json::to_value(patch)?;
        trace!("fixture PATCH {} {}", path, body);
        let value = self.respond(Method::Patch, path, Some(body))?;
        from_value(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Fixture data
// ─────────────────────────────────────────────────────────────────────────────

/// Store path of the demo domain.
pub const DEMO_DOMAIN_PATH: &str = "/maestro/d01";
/// Store path of the demo process that is running.
pub const DEMO_RUNNING_PROCESS_PATH: &str = "/maestro/d01/config/processes/p01";
/// Store path of the demo process that is stopped.
pub const DEMO_STOPPED_PROCESS_PATH: &str = "/maestro/d01/config/processes/p02";

fn demo_process(path: &str, name: &str, state: RunState, pid: i64) -> ProcessRecord {
    ProcessRecord {
        name: name.to_string(),
        key: encode_path_key(path),
        command: "/usr/bin/sleep".to_string(),
        arguments: "3600".to_string(),
        process_class: "batch".to_string(),
        admin_state: state.clone(),
        oper_state: state,
        pid,
    }
}

fn demo_processes() -> Vec<ProcessRecord> {
    vec![
        demo_process(DEMO_RUNNING_PROCESS_PATH, "p01", RunState::On, 6116),
        demo_process(DEMO_STOPPED_PROCESS_PATH, "p02", RunState::Off, 0),
    ]
}

/// The agent shown by the agent view when no loaded domain has the key.
pub fn demo_agent() -> AgentRecord {
    AgentRecord {
        name: "a01".to_string(),
        key: encode_path_key("/maestro/d01/runtime/agents/a01"),
        agent_class: "linux".to_string(),
        os: "linux".to_string(),
        eph: "/maestro/d01/runtime/agents/a01/eph".to_string(),
        processes: demo_processes(),
    }
}

/// One domain `d01` with agent `a01` running `p01` (Pid 6116) and a stopped
/// `p02`.
pub fn demo_domains() -> Vec<DomainRecord> {
    let config_agent = AgentRecord {
        key: encode_path_key("/maestro/d01/config/agents/a01"),
        eph: String::new(),
        processes: Vec::new(),
        ..demo_agent()
    };

    vec![DomainRecord {
        name: "d01".to_string(),
        key: encode_path_key(DEMO_DOMAIN_PATH),
        runtime: RuntimeConfig {
            agents: vec![demo_agent()],
        },
        config: StaticConfig {
            agents: vec![config_agent],
            processes: demo_processes(),
        },
    }]
}
