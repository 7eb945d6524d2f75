//! Soroban RPC client — polls `getEvents` and decodes campaign events.
//!
//! ## Resilience
//!
//! * Exponential back-off is applied when the RPC returns an error or
//!   rate-limit response, up to [`MAX_BACKOFF_SECS`] seconds.
//! * Transient network errors (connection reset, timeout) are retried
//!   silently.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::errors::{IndexerError, Result};
use crate::events::{CampaignEvent, EventKind};

const MAX_BACKOFF_SECS: u64 = 60;
const INITIAL_BACKOFF_SECS: u64 = 2;

// ─────────────────────────────────────────────────────────
// JSON-RPC response shapes
// ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    pub result: Option<EventsResult>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct EventsResult {
    pub events: Vec<RawEvent>,
    pub cursor: Option<String>,
    #[serde(rename = "latestLedger")]
    pub latest_ledger: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
#[allow(dead_code)]
pub struct RawEvent {
    /// XDR-decoded topic list
    pub topic: Vec<String>,
    /// XDR-decoded event data
    pub value: Value,
    #[serde(rename = "contractId")]
    pub contract_id: Option<String>,
    #[serde(rename = "txHash")]
    pub tx_hash: Option<String>,
    pub id: Option<String>,
    pub ledger: Option<u64>,
    #[serde(rename = "ledgerClosedAt")]
    pub ledger_closed_at: Option<String>,
    #[serde(rename = "inSuccessfulContractCall")]
    pub in_successful_contract_call: Option<bool>,
    #[serde(rename = "pagingToken")]
    pub paging_token: Option<String>,
}

// ─────────────────────────────────────────────────────────
// Public API
// ─────────────────────────────────────────────────────────

/// Fetch a page of events from the RPC.
///
/// * `start_ledger` — the ledger sequence to scan from (inclusive).
/// * `cursor`       — opaque pagination cursor from a previous response.
/// * `limit`        — maximum number of events to return.
///
/// Returns `(events, next_cursor, latest_ledger)`. Retries transient
/// failures internally with exponential back-off; only hard RPC errors
/// (malformed request, unknown method) surface to the caller.
pub async fn fetch_events(
    client: &Client,
    rpc_url: &str,
    contract_id: &str,
    start_ledger: u32,
    cursor: Option<&str>,
    limit: u32,
) -> Result<(Vec<RawEvent>, Option<String>, Option<u64>)> {
    let mut backoff = INITIAL_BACKOFF_SECS;

    loop {
        let request = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "getEvents",
            "params": build_params(contract_id, start_ledger, cursor, limit),
        });

        let response = match client.post(rpc_url).json(&request).send().await {
            Ok(resp) => resp,
            Err(e) => {
                warn!("RPC request failed (will retry in {backoff}s): {e}");
                backoff = sleep_backoff(backoff).await;
                continue;
            }
        };

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!("Rate-limited by RPC (will retry in {backoff}s)");
            backoff = sleep_backoff(backoff).await;
            continue;
        }

        let body: RpcResponse = response.json().await?;

        if let Some(err) = body.error {
            // -32600 (invalid request) and -32601 (unknown method) will
            // never succeed on retry.
            if err.code == -32600 || err.code == -32601 {
                return Err(IndexerError::Decode(format!(
                    "RPC hard error {}: {}",
                    err.code, err.message
                )));
            }
            warn!(
                "RPC soft error (will retry in {backoff}s): {} {}",
                err.code, err.message
            );
            backoff = sleep_backoff(backoff).await;
            continue;
        }

        let result = body
            .result
            .ok_or_else(|| IndexerError::Decode("Empty result from getEvents".to_string()))?;

        debug!(
            "Fetched {} events (latest_ledger={:?})",
            result.events.len(),
            result.latest_ledger
        );

        return Ok((result.events, result.cursor, result.latest_ledger));
    }
}

async fn sleep_backoff(current: u64) -> u64 {
    tokio::time::sleep(Duration::from_secs(current)).await;
    (current * 2).min(MAX_BACKOFF_SECS)
}

fn build_params(contract_id: &str, start_ledger: u32, cursor: Option<&str>, limit: u32) -> Value {
    let mut params = json!({
        "filters": [
            {
                "type": "contract",
                "contractIds": [contract_id]
            }
        ],
        "pagination": {
            "limit": limit
        }
    });

    if let Some(cur) = cursor {
        params["pagination"]["cursor"] = json!(cur);
    } else {
        params["startLedger"] = json!(start_ledger);
    }

    params
}

// ─────────────────────────────────────────────────────────
// Event decoding
// ─────────────────────────────────────────────────────────

/// Decode a list of raw RPC events into [`CampaignEvent`] structs.
pub fn decode_events(raw: &[RawEvent], contract_id: &str) -> Vec<CampaignEvent> {
    raw.iter()
        .filter_map(|e| decode_single(e, contract_id))
        .collect()
}

fn decode_single(raw: &RawEvent, contract_id: &str) -> Option<CampaignEvent> {
    // Topic layout is (event symbol, campaign id).
    let first_topic = raw.topic.first()?;
    let kind = EventKind::from_topic(&extract_symbol(first_topic));
    let campaign_id = raw.topic.get(1).map(|t| extract_u64_or_raw(t));

    let ledger = raw.ledger.unwrap_or(0) as i64;
    let timestamp = raw
        .ledger_closed_at
        .as_deref()
        .and_then(parse_iso_to_unix)
        .unwrap_or(0);

    let (actor, amount) = decode_data(&raw.value, kind);

    Some(CampaignEvent {
        event_type: kind.as_str().to_string(),
        campaign_id,
        actor,
        amount,
        ledger,
        timestamp,
        contract_id: raw
            .contract_id
            .clone()
            .unwrap_or_else(|| contract_id.to_string()),
        tx_hash: raw.tx_hash.clone(),
    })
}

/// Pull the interesting fields out of the XDR-decoded data struct.
///
/// The contract publishes `#[contracttype]` structs, which the RPC decodes
/// into JSON objects keyed by field name.
fn decode_data(value: &Value, kind: EventKind) -> (Option<String>, Option<String>) {
    match kind {
        EventKind::CampaignCreated => (
            extract_field(value, "creator"),
            extract_field(value, "goal"),
        ),
        EventKind::DonationMade => (
            extract_field(value, "donor"),
            extract_field(value, "amount"),
        ),
        EventKind::FundsClaimed => (
            extract_field(value, "creator"),
            extract_field(value, "payout"),
        ),
        EventKind::Unknown => (None, None),
    }
}

/// Look up `key` in the decoded data object, descending into nested
/// objects if the top level doesn't carry it.
fn extract_field(value: &Value, key: &str) -> Option<String> {
    if let Some(v) = value.get(key) {
        return value_to_string(v);
    }
    if let Value::Object(map) = value {
        for nested in map.values() {
            if let Some(found) = extract_field(nested, key) {
                return Some(found);
            }
        }
    }
    None
}

fn value_to_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => v.get("value").and_then(value_to_string),
    }
}

/// Extract a Soroban Symbol from an XDR-decoded topic entry.
/// The RPC may return `{"type":"symbol","value":"donated"}` or the raw string.
fn extract_symbol(raw: &str) -> String {
    if let Ok(v) = serde_json::from_str::<Value>(raw) {
        if let Some(s) = v.get("value").and_then(|x| x.as_str()) {
            return s.to_string();
        }
    }
    raw.to_string()
}

/// Extract the campaign id from a topic entry that might be a JSON object
/// or a raw number/string.
fn extract_u64_or_raw(raw: &str) -> String {
    if let Ok(v) = serde_json::from_str::<Value>(raw) {
        if let Some(n) = v.get("value").and_then(|x| x.as_u64()) {
            return n.to_string();
        }
        if let Some(s) = v.get("value").and_then(|x| x.as_str()) {
            return s.to_string();
        }
    }
    raw.to_string()
}

/// Parse an ISO-8601 timestamp string into a Unix epoch (seconds).
fn parse_iso_to_unix(s: &str) -> Option<i64> {
    chrono::DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.timestamp())
}

// ─────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────
