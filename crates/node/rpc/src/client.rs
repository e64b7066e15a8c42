//! The validator client façade.

use crate::{
    CallMessageArgs, ClientError, ClientResult, FindLogsArgs, LogInfo, SendMessageArgs,
    ValidatorProvider,
};
use alloy_primitives::{Address, B256, Bytes, U256};
use avm_protocol::ExecutionResult;
use avm_value::Value;
use serde::Serialize;

/// The decoded result of a message together with its proof metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResult {
    /// The log accumulator before the result.
    pub log_pre_hash: String,
    /// The log accumulator after the result.
    pub log_post_hash: String,
    /// The hashes of the logs in the same assertion.
    pub log_val_hashes: Vec<String>,
    /// The hash of the transaction that confirmed the assertion on chain.
    pub on_chain_tx_hash: String,
    /// The partial hash of the assertion.
    pub partial_hash: String,
    /// The raw result value.
    pub val: Value,
    /// The validator signatures over the assertion.
    pub validator_sigs: Vec<String>,
    /// The id of the VM that produced the result.
    pub vm_id: String,
    /// The decoded result.
    pub evm_val: ExecutionResult,
}

/// A client for an AVM validator that decodes the value trees it returns.
#[derive(Debug, Clone)]
pub struct ValidatorClient<P> {
    provider: P,
}

impl<P: ValidatorProvider> ValidatorClient<P> {
    /// Creates a new [`ValidatorClient`] over the given provider.
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns the provider backing this client.
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Fetches and decodes the result of the message carried by `tx_hash`.
    ///
    /// Returns `None` if the validator has no result for the message yet.
    pub async fn get_message_result(&self, tx_hash: B256) -> ClientResult<Option<MessageResult>> {
        let reply = self.provider.get_message_result(tx_hash).await?;
        if !reply.found {
            debug!(target: "validator_client", %tx_hash, "Message result not found");
            return Ok(None);
        }

        let vm_id = self.provider.vm_id().await?;
        let val = Value::from_hex(&reply.raw_val)?;
        let evm_val = ExecutionResult::decode(&val)?;
        debug!(
            target: "validator_client",
            %tx_hash,
            code = ?evm_val.code(),
            logs = evm_val.logs().len(),
            "Decoded message result"
        );

        Ok(Some(MessageResult {
            log_pre_hash: reply.log_pre_hash,
            log_post_hash: reply.log_post_hash,
            log_val_hashes: reply.log_val_hashes.unwrap_or_default(),
            on_chain_tx_hash: reply.on_chain_tx_hash,
            partial_hash: reply.partial_hash,
            val,
            validator_sigs: reply.validator_sigs,
            vm_id,
            evm_val,
        }))
    }

    /// Submits a signed message and returns the hash it can be looked up by.
    pub async fn send_message(
        &self,
        to: Address,
        sequence_num: U256,
        value: U256,
        data: Bytes,
        signature: Bytes,
        pubkey: Bytes,
    ) -> ClientResult<B256> {
        let args = SendMessageArgs { to, sequence_num, value, data, signature, pubkey };
        let reply = self.provider.send_message(args).await?;
        trace!(target: "validator_client", tx_hash = %reply.tx_hash, "Sent message");
        Ok(reply.tx_hash)
    }

    /// Executes a read-only call of `contract` from `sender`.
    ///
    /// Returns the returned data, or empty bytes if execution stopped. Any other outcome is a
    /// [`ClientError::CallReverted`].
    pub async fn call(
        &self,
        contract: Address,
        sender: Address,
        data: Bytes,
    ) -> ClientResult<Bytes> {
        let args = CallMessageArgs { contract_address: contract, data, sender };
        let reply = self.provider.call_message(args).await?;
        let result = ExecutionResult::decode(&Value::from_hex(&reply.raw_val)?)?;
        match result {
            ExecutionResult::Return(ret) => Ok(ret.data),
            ExecutionResult::Stop(_) => Ok(Bytes::new()),
            other => {
                warn!(
                    target: "validator_client",
                    %contract,
                    code = ?other.code(),
                    "Call was reverted"
                );
                Err(ClientError::CallReverted(other.code()))
            }
        }
    }

    /// Returns the logs of `address` between two heights that match `topics`.
    pub async fn find_logs(
        &self,
        from_height: u64,
        to_height: u64,
        address: Address,
        topics: Vec<B256>,
    ) -> ClientResult<Vec<LogInfo>> {
        let args = FindLogsArgs { address, from_height, to_height, topics };
        Ok(self.provider.find_logs(args).await?.logs)
    }

    /// Returns the id of the VM.
    pub async fn vm_id(&self) -> ClientResult<String> {
        self.provider.vm_id().await
    }

    /// Returns the number of assertions the validator has made.
    pub async fn assertion_count(&self) -> ClientResult<u64> {
        self.provider.assertion_count().await
    }

    /// Returns the validators of the VM.
    pub async fn validator_list(&self) -> ClientResult<Vec<String>> {
        self.provider.validator_list().await
    }
}
