//! Shared test helpers: a scripted JSON-RPC node serving `SanDigital_4Funds`.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use alloy::hex;
use alloy::primitives::U256;
use alloy::sol_types::{SolCall, SolValue};
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use sandigital_tools::blockchain::contract::ISanDigital4Funds;

/// Anvil's default chain ID.
#[allow(dead_code)]
pub const CHAIN_ID: u64 = 31337;

/// Fixed test addresses (Anvil deployment and second account).
#[allow(dead_code)]
pub const CONTRACT: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
#[allow(dead_code)]
pub const USER: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";

/// How the node misbehaves on one contract method.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// JSON-RPC error payload, as a node reports a revert.
    Revert,
    /// Close the connection without answering.
    Disconnect,
}

/// State the node reports, plus an optional failing method.
#[derive(Debug, Clone)]
pub struct NodeScript {
    pub active_positions: u64,
    pub user_positions: usize,
    pub user_balance: u64,
    pub fail_on: Option<(&'static str, Failure)>,
}

impl Default for NodeScript {
    fn default() -> Self {
        Self {
            active_positions: 3,
            user_positions: 2,
            user_balance: 1_500_000,
            fail_on: None,
        }
    }
}

/// A running mock node.
pub struct MockNode {
    pub url: String,
    /// Contract methods (or raw RPC methods) in the order they were served.
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockNode {
    #[allow(dead_code)]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

/// Start a node on an ephemeral port.
pub async fn start_mock_node(script: NodeScript) -> MockNode {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    let calls = Arc::new(Mutex::new(Vec::new()));
    let script = Arc::new(script);

    let served = calls.clone();
    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let script = script.clone();
                    let served = served.clone();
                    tokio::spawn(async move {
                        handle_connection(socket, &script, &served).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    MockNode {
        url: format!("http://{}", addr),
        calls,
    }
}

async fn handle_connection(mut socket: TcpStream, script: &NodeScript, served: &Mutex<Vec<String>>) {
    let Some(body) = read_request_body(&mut socket).await else {
        return;
    };
    let Ok(request) = serde_json::from_slice::<Value>(&body) else {
        return;
    };

    let id = request["id"].clone();
    let method = request["method"].as_str().unwrap_or_default().to_string();
    let (name, outcome) = dispatch(&method, &request["params"], script);
    served.lock().unwrap().push(name);

    let payload = match outcome {
        Ok(result) => json!({"jsonrpc": "2.0", "id": id, "result": result}),
        Err(Failure::Revert) => json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": {"code": 3, "message": "execution reverted", "data": "0x"}
        }),
        Err(Failure::Disconnect) => {
            let _ = socket.shutdown().await;
            return;
        }
    };

    let body = payload.to_string();
    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}

fn dispatch(method: &str, params: &Value, script: &NodeScript) -> (String, Result<Value, Failure>) {
    match method {
        "eth_chainId" => (method.to_string(), Ok(json!(format!("0x{:x}", CHAIN_ID)))),
        "eth_call" => {
            let call = &params[0];
            let input = call["input"]
                .as_str()
                .or_else(|| call["data"].as_str())
                .unwrap_or_default();
            let data = hex::decode(input).unwrap_or_default();
            let selector: [u8; 4] = match data.get(..4).and_then(|s| s.try_into().ok()) {
                Some(selector) => selector,
                None => return ("eth_call".to_string(), Err(Failure::Revert)),
            };

            let (name, encoded) = if selector == ISanDigital4Funds::getSystemStateCall::SELECTOR {
                (
                    "getSystemState",
                    (
                        U256::from(script.active_positions),
                        U256::from(10u64),
                        U256::from(25_000_000u64),
                        U256::from(4_000_000u64),
                    )
                        .abi_encode_params(),
                )
            } else if selector == ISanDigital4Funds::getUserPositionsCall::SELECTOR {
                let positions: Vec<U256> = (0..script.user_positions).map(U256::from).collect();
                ("getUserPositions", (positions,).abi_encode_params())
            } else if selector == ISanDigital4Funds::getUserTotalBalanceCall::SELECTOR {
                (
                    "getUserTotalBalance",
                    (U256::from(script.user_balance),).abi_encode_params(),
                )
            } else {
                return ("unknown".to_string(), Err(Failure::Revert));
            };

            if let Some((failing, failure)) = script.fail_on {
                if failing == name {
                    return (name.to_string(), Err(failure));
                }
            }
            (name.to_string(), Ok(json!(hex::encode_prefixed(encoded))))
        }
        other => (other.to_string(), Err(Failure::Revert)),
    }
}

async fn read_request_body(socket: &mut TcpStream) -> Option<Vec<u8>> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
            let length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            let start = end + 4;
            if buf.len() >= start + length {
                return Some(buf[start..start + length].to_vec());
            }
        }
    }
}
