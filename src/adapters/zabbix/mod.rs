//! Zabbix adapter
//!
//! Implements `TriggerSource` on top of the Zabbix JSON-RPC API.
//!
//! - [`rpc`] - wire types and their conversion into domain models

pub mod rpc;

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use anyhow::Context;
use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::config::ServerConfig;
use crate::core::models::{Trigger, TriggerQuery};
use crate::core::ports::TriggerSource;

use rpc::{
    ACKNOWLEDGE_WITH_MESSAGE, AcknowledgeParams, JSONRPC_VERSION, LoginParams, RpcRequest,
    RpcResponse, WireTrigger,
};

/// Path of the JSON-RPC endpoint below the frontend address
const API_PATH: &str = "api_jsonrpc.php";

/// Zabbix-backed trigger source
///
/// Logs in lazily on the first call; the session token lives as long as the
/// client.
pub struct ZabbixClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    username: String,
    password: String,
    ack_message: String,
    token: OnceLock<String>,
    next_id: AtomicU64,
}

impl std::fmt::Debug for ZabbixClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZabbixClient")
            .field("endpoint", &self.endpoint)
            .field("username", &self.username)
            .field("authenticated", &self.token.get().is_some())
            .finish_non_exhaustive()
    }
}

impl ZabbixClient {
    /// Create a client for a server; no request is made yet
    pub fn new(server: &ServerConfig, ack_message: &str) -> anyhow::Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(server.timeout_secs))
            .user_agent(concat!("zabbixctl/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("can't create http client")?;

        Ok(Self {
            http,
            endpoint: endpoint(&server.address),
            username: server.username.clone(),
            password: server.password.clone(),
            ack_message: ack_message.to_string(),
            token: OnceLock::new(),
            next_id: AtomicU64::new(1),
        })
    }

    /// JSON-RPC endpoint URL
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn call<P, T>(&self, method: &str, params: P, auth: Option<&str>) -> anyhow::Result<T>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        let request = RpcRequest {
            jsonrpc: JSONRPC_VERSION,
            method,
            params,
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            auth,
        };

        debug!("zabbix: {method} (id {})", request.id);

        let response: RpcResponse<T> = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .with_context(|| format!("can't send {method} request to {}", self.endpoint))?
            .json()
            .with_context(|| format!("can't decode {method} response"))?;

        if let Some(err) = response.error {
            return Err(err).with_context(|| format!("{method} failed"));
        }

        response.result.with_context(|| format!("{method} response has no result"))
    }

    fn token(&self) -> anyhow::Result<&str> {
        if let Some(token) = self.token.get() {
            return Ok(token);
        }

        let params = LoginParams {
            username: &self.username,
            password: &self.password,
        };
        let token: String = self
            .call("user.login", params, None)
            .with_context(|| format!("can't authenticate as '{}'", self.username))?;

        Ok(self.token.get_or_init(|| token))
    }
}

impl TriggerSource for ZabbixClient {
    fn get_triggers(&self, query: &TriggerQuery) -> anyhow::Result<Vec<Trigger>> {
        let mut params = serde_json::to_value(query).context("can't encode trigger query")?;
        if let Value::Object(map) = &mut params {
            map.insert("output".to_string(), json!("extend"));
            map.insert("selectHosts".to_string(), json!(["host"]));
            map.insert("selectLastEvent".to_string(), json!("extend"));
            map.insert("expandDescription".to_string(), json!(true));
        }

        let token = self.token()?;
        let triggers: Vec<WireTrigger> = self.call("trigger.get", params, Some(token))?;
        debug!("zabbix: received {} triggers", triggers.len());

        Ok(triggers.into_iter().map(Trigger::from).collect())
    }

    fn acknowledge(&self, event_ids: &[String]) -> anyhow::Result<()> {
        let params = AcknowledgeParams {
            eventids: event_ids,
            action: ACKNOWLEDGE_WITH_MESSAGE,
            message: &self.ack_message,
        };

        let token = self.token()?;
        let _: Value = self.call("event.acknowledge", params, Some(token))?;
        Ok(())
    }
}

/// Append the API path to a frontend address unless it is already there
fn endpoint(address: &str) -> String {
    let address = address.trim_end_matches('/');
    if address.ends_with(API_PATH) {
        address.to_string()
    } else {
        format!("{address}/{API_PATH}")
    }
}
