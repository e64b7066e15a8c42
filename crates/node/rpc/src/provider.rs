//! Transport for the validator client.

use crate::{
    CallMessageArgs, CallMessageReply, ClientError, ClientResult, FindLogsArgs, FindLogsReply,
    GetAssertionCountReply, GetMessageResultArgs, GetMessageResultReply, GetValidatorListReply,
    GetVmInfoReply, SendMessageArgs, SendMessageReply,
};
use alloy_primitives::B256;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::{
    fmt::Debug,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};
use url::Url;

/// Raw access to the `Validator` service.
///
/// The [`crate::ValidatorClient`] decodes what a provider returns. The trait exists so the client
/// can be driven by a mock in tests.
#[async_trait]
pub trait ValidatorProvider: Debug + Send + Sync {
    /// Fetches the raw result of a message.
    async fn get_message_result(&self, tx_hash: B256) -> ClientResult<GetMessageResultReply>;

    /// Submits a signed message.
    async fn send_message(&self, args: SendMessageArgs) -> ClientResult<SendMessageReply>;

    /// Executes a read-only call.
    async fn call_message(&self, args: CallMessageArgs) -> ClientResult<CallMessageReply>;

    /// Fetches the logs matching a filter.
    async fn find_logs(&self, args: FindLogsArgs) -> ClientResult<FindLogsReply>;

    /// Fetches the id of the VM.
    async fn vm_id(&self) -> ClientResult<String>;

    /// Fetches the number of assertions made.
    async fn assertion_count(&self) -> ClientResult<u64>;

    /// Fetches the validators of the VM.
    async fn validator_list(&self) -> ClientResult<Vec<String>>;
}

/// Params of a method that takes no arguments.
const NO_PARAMS: [(); 0] = [];

/// A JSON-RPC 1.0 request. There is no `jsonrpc` version member.
#[derive(Debug, Serialize)]
struct Request<'a, P> {
    method: &'a str,
    params: P,
    id: u64,
}

/// A JSON-RPC 1.0 reply.
///
/// Exactly one of `result` and `error` is non-null. The validator reports errors as plain
/// strings.
#[derive(Debug, Deserialize)]
struct Response<R> {
    result: Option<R>,
    error: Option<serde_json::Value>,
}

/// A [`ValidatorProvider`] speaking JSON-RPC 1.0 over HTTP.
#[derive(Clone, Debug)]
pub struct HttpValidatorProvider {
    /// The HTTP client.
    client: Client,
    /// The validator RPC URL.
    url: Url,
    /// The id of the next request.
    next_id: Arc<AtomicU64>,
}

impl HttpValidatorProvider {
    /// Creates a provider posting requests to the validator at `url`.
    pub fn new(client: Client, url: Url) -> Self {
        Self { client, url, next_id: Arc::new(AtomicU64::new(0)) }
    }

    /// Returns the validator RPC URL.
    pub const fn url(&self) -> &Url {
        &self.url
    }

    async fn request<P, R>(&self, method: &str, params: P) -> ClientResult<R>
    where
        P: Serialize + Send,
        R: DeserializeOwned + Send,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        trace!(target: "validator_client", method, id, "Sending request");

        let response: Response<R> = self
            .client
            .post(self.url.clone())
            .json(&Request { method, params, id })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        match response {
            Response { error: Some(error), .. } => {
                let message = match error {
                    serde_json::Value::String(message) => message,
                    other => other.to_string(),
                };
                debug!(
                    target: "validator_client",
                    method, id, %message,
                    "Validator returned an error"
                );
                Err(ClientError::Rpc(message))
            }
            Response { result: Some(result), .. } => Ok(result),
            Response { result: None, .. } => Err(ClientError::EmptyReply),
        }
    }
}

#[async_trait]
impl ValidatorProvider for HttpValidatorProvider {
    async fn get_message_result(&self, tx_hash: B256) -> ClientResult<GetMessageResultReply> {
        self.request("Validator.GetMessageResult", [GetMessageResultArgs { tx_hash }]).await
    }

    async fn send_message(&self, args: SendMessageArgs) -> ClientResult<SendMessageReply> {
        self.request("Validator.SendMessage", [args]).await
    }

    async fn call_message(&self, args: CallMessageArgs) -> ClientResult<CallMessageReply> {
        self.request("Validator.CallMessage", [args]).await
    }

    async fn find_logs(&self, args: FindLogsArgs) -> ClientResult<FindLogsReply> {
        self.request("Validator.FindLogs", [args]).await
    }

    async fn vm_id(&self) -> ClientResult<String> {
        let reply: GetVmInfoReply = self.request("Validator.GetVMInfo", NO_PARAMS).await?;
        Ok(reply.vm_id)
    }

    async fn assertion_count(&self) -> ClientResult<u64> {
        let reply: GetAssertionCountReply =
            self.request("Validator.GetAssertionCount", NO_PARAMS).await?;
        Ok(reply.assertion_count)
    }

    async fn validator_list(&self) -> ClientResult<Vec<String>> {
        let reply: GetValidatorListReply =
            self.request("Validator.GetValidatorList", NO_PARAMS).await?;
        Ok(reply.validators)
    }
}
