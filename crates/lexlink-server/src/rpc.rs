//! JSON-RPC 2.0 framing over stdio.
//!
//! One request per line on stdin, one response per line on stdout. Stdout
//! carries nothing but protocol frames; all logging goes to stderr.
//! Notifications (requests without an `id`) are consumed silently.

use anyhow::{Context, Result};
use serde_json::{Map, Value, json};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::tools::{self, Catalogue};

pub const PROTOCOL_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "lexlink";

pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;

/// Read requests from stdin until it closes.
pub async fn serve() -> Result<()> {
    let catalogue = Catalogue::new().context("failed to build the outbound HTTP client")?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    info!("tool server listening on stdio");
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let Some(response) = handle_line(&catalogue, &line).await else {
            continue;
        };
        stdout.write_all(response.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }
    info!("stdin closed, shutting down");

    Ok(())
}

/// Handle one raw line. `None` means no response goes out.
pub async fn handle_line(catalogue: &Catalogue, line: &str) -> Option<String> {
    let request: Value = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "request line is not valid JSON");
            return Some(error_response(Value::Null, PARSE_ERROR, "Parse error").to_string());
        }
    };
    handle_request(catalogue, &request)
        .await
        .map(|response| response.to_string())
}

/// Handle one parsed request. `None` for notifications.
pub async fn handle_request(catalogue: &Catalogue, request: &Value) -> Option<Value> {
    let method = request.get("method").and_then(Value::as_str);

    // A request without an id is a notification; it never gets a response,
    // whatever its method.
    let id = request.get("id").filter(|id| !id.is_null()).cloned();
    let Some(id) = id else {
        debug!(method = method.unwrap_or("<none>"), "notification consumed");
        return None;
    };
    let Some(method) = method else {
        return Some(error_response(id, INVALID_REQUEST, "Invalid Request"));
    };

    debug!(method, "request");
    match method {
        "initialize" => Some(result_response(
            id,
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {"tools": {}},
                "serverInfo": {"name": SERVER_NAME, "version": env!("CARGO_PKG_VERSION")},
            }),
        )),
        "ping" => Some(result_response(id, json!({}))),
        "tools/list" => Some(result_response(
            id,
            json!({"tools": tools::definitions()}),
        )),
        "tools/call" => Some(handle_tool_call(catalogue, id, request.get("params")).await),
        _ => Some(error_response(
            id,
            METHOD_NOT_FOUND,
            &format!("method not found: {method}"),
        )),
    }
}

async fn handle_tool_call(catalogue: &Catalogue, id: Value, params: Option<&Value>) -> Value {
    let Some(name) = params
        .and_then(|p| p.get("name"))
        .and_then(Value::as_str)
    else {
        return error_response(id, INVALID_PARAMS, "tools/call requires a tool name");
    };

    let empty = Map::new();
    let arguments = params
        .and_then(|p| p.get("arguments"))
        .and_then(Value::as_object)
        .unwrap_or(&empty);

    match catalogue.call(name, arguments).await {
        Ok(text) => result_response(
            id,
            json!({
                "content": [{"type": "text", "text": text}],
                "isError": false,
            }),
        ),
        Err(e) => {
            warn!(tool = name, error = %e, "tool call rejected");
            error_response(id, INVALID_PARAMS, &e.to_string())
        }
    }
}

fn result_response(id: Value, result: Value) -> Value {
    json!({"jsonrpc": "2.0", "id": id, "result": result})
}

fn error_response(id: Value, code: i64, message: &str) -> Value {
    json!({"jsonrpc": "2.0", "id": id, "error": {"code": code, "message": message}})
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogue() -> Catalogue {
        Catalogue::new().unwrap()
    }

    #[tokio::test]
    async fn initialize_reports_server_info() {
        let request = json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}});
        let response = handle_request(&catalogue(), &request).await.unwrap();
        assert_eq!(response["id"], 1);
        assert_eq!(response["result"]["serverInfo"]["name"], "lexlink");
        assert_eq!(response["result"]["protocolVersion"], PROTOCOL_VERSION);
    }

    #[tokio::test]
    async fn notifications_never_get_a_response() {
        let request = json!({"jsonrpc": "2.0", "method": "notifications/initialized"});
        assert!(handle_request(&catalogue(), &request).await.is_none());
    }

    #[tokio::test]
    async fn ping_returns_an_empty_object() {
        let request = json!({"jsonrpc": "2.0", "id": 7, "method": "ping"});
        let response = handle_request(&catalogue(), &request).await.unwrap();
        assert_eq!(response["result"], json!({}));
    }

    #[tokio::test]
    async fn unparseable_line_answers_with_null_id() {
        let response = handle_line(&catalogue(), "{not json").await.unwrap();
        let response: Value = serde_json::from_str(&response).unwrap();
        assert_eq!(response["error"]["code"], PARSE_ERROR);
        assert!(response["id"].is_null());
    }

    #[tokio::test]
    async fn missing_method_is_an_invalid_request() {
        let request = json!({"jsonrpc": "2.0", "id": 2});
        let response = handle_request(&catalogue(), &request).await.unwrap();
        assert_eq!(response["error"]["code"], INVALID_REQUEST);
    }

    #[tokio::test]
    async fn unknown_method_is_method_not_found() {
        let request = json!({"jsonrpc": "2.0", "id": 3, "method": "resources/list"});
        let response = handle_request(&catalogue(), &request).await.unwrap();
        assert_eq!(response["error"]["code"], METHOD_NOT_FOUND);
    }

    #[tokio::test]
    async fn tools_list_returns_the_catalogue() {
        let request = json!({"jsonrpc": "2.0", "id": 4, "method": "tools/list"});
        let response = handle_request(&catalogue(), &request).await.unwrap();
        let listed = response["result"]["tools"].as_array().unwrap();
        assert_eq!(listed.len(), tools::definitions().len());
        assert!(listed.iter().any(|t| t["name"] == "get_judgment"));
        assert!(listed[0]["inputSchema"]["type"] == "object");
    }

    #[tokio::test]
    async fn tool_call_wraps_the_text_in_content() {
        let request = json!({
            "jsonrpc": "2.0", "id": 5, "method": "tools/call",
            "params": {"name": "get_cpr", "arguments": {"part": "54"}},
        });
        let response = handle_request(&catalogue(), &request).await.unwrap();
        let result = &response["result"];
        assert_eq!(result["isError"], false);
        assert_eq!(result["content"][0]["type"], "text");
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("part54"));
    }

    #[tokio::test]
    async fn unknown_tool_is_invalid_params() {
        let request = json!({
            "jsonrpc": "2.0", "id": 6, "method": "tools/call",
            "params": {"name": "get_star_chamber_rolls", "arguments": {}},
        });
        let response = handle_request(&catalogue(), &request).await.unwrap();
        assert_eq!(response["error"]["code"], INVALID_PARAMS);
        let message = response["error"]["message"].as_str().unwrap();
        assert!(message.contains("get_star_chamber_rolls"));
    }

    #[tokio::test]
    async fn missing_required_argument_is_invalid_params() {
        let request = json!({
            "jsonrpc": "2.0", "id": 8, "method": "tools/call",
            "params": {"name": "search_cases"},
        });
        let response = handle_request(&catalogue(), &request).await.unwrap();
        assert_eq!(response["error"]["code"], INVALID_PARAMS);
        assert!(response["error"]["message"].as_str().unwrap().contains("query"));
    }

    #[tokio::test]
    async fn tool_name_missing_is_invalid_params() {
        let request = json!({
            "jsonrpc": "2.0", "id": 9, "method": "tools/call",
            "params": {"arguments": {"query": "x"}},
        });
        let response = handle_request(&catalogue(), &request).await.unwrap();
        assert_eq!(response["error"]["code"], INVALID_PARAMS);
    }
}
