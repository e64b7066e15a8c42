//! Message variants carried in a bridge message payload.

use crate::{DecodeError, DecodeResult};
use alloy_primitives::{Address, Bytes, U256};
use avm_value::{Value, ValueResult, bytestack_to_bytes};

/// The wire type codes of bridge messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MessageType {
    /// A sequenced transaction from an externally owned account.
    SequencedTx = 0,
    /// A deposit of ETH.
    EthTransfer = 1,
    /// A deposit of ERC-20 tokens.
    Erc20Transfer = 2,
    /// A deposit of an ERC-721 token.
    Erc721Transfer = 3,
    /// A transaction sent by a contract.
    ContractTx = 4,
    /// A read-only call.
    Call = 5,
}

impl TryFrom<U256> for MessageType {
    type Error = DecodeError;

    fn try_from(code: U256) -> DecodeResult<Self> {
        match code.try_into() {
            Ok(0u8) => Ok(Self::SequencedTx),
            Ok(1) => Ok(Self::EthTransfer),
            Ok(2) => Ok(Self::Erc20Transfer),
            Ok(3) => Ok(Self::Erc721Transfer),
            Ok(4) => Ok(Self::ContractTx),
            Ok(5) => Ok(Self::Call),
            _ => Err(DecodeError::UnknownMessageType(code)),
        }
    }
}

/// The token standard of a [`TokenTransferMessage`].
///
/// Both kinds share one payload layout and decode to the same variant; the kind keeps the wire
/// code visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// Fungible tokens, wire code 2.
    Erc20,
    /// A non-fungible token, wire code 3.
    Erc721,
}

/// A read-only call. Payload `[to, data]`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct CallMessage {
    /// The called contract.
    pub to: Address,
    /// The call data.
    pub data: Bytes,
}

/// A sequenced transaction. Payload `[to, sequence_num, amount, data]`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct SequencedTxMessage {
    /// The destination.
    pub to: Address,
    /// The sender's sequence number.
    pub sequence_num: U256,
    /// The value transferred.
    pub amount: U256,
    /// The call data.
    pub data: Bytes,
}

/// An ETH deposit. Payload `[dest, amount]`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct EthTransferMessage {
    /// The recipient.
    pub dest: Address,
    /// The value transferred.
    pub amount: U256,
}

/// A token deposit. Payload `[token_address, dest, amount]`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct TokenTransferMessage {
    /// The token standard named by the wire code.
    pub kind: TokenKind,
    /// The token contract.
    pub token_address: Address,
    /// The recipient.
    pub dest: Address,
    /// The amount, or the token id for ERC-721.
    pub amount: U256,
}

/// A transaction sent by a contract. Payload `[to, amount, data]`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ContractTxMessage {
    /// The destination.
    pub to: Address,
    /// The value transferred.
    pub amount: U256,
    /// The call data.
    pub data: Bytes,
}

impl TryFrom<&Value> for CallMessage {
    type Error = avm_value::ValueError;

    fn try_from(payload: &Value) -> ValueResult<Self> {
        let [to, data] = payload.fields::<2>()?;
        Ok(Self { to: to.as_address()?, data: bytestack_to_bytes(data)? })
    }
}

impl TryFrom<&Value> for SequencedTxMessage {
    type Error = avm_value::ValueError;

    fn try_from(payload: &Value) -> ValueResult<Self> {
        let [to, sequence_num, amount, data] = payload.fields::<4>()?;
        Ok(Self {
            to: to.as_address()?,
            sequence_num: sequence_num.as_int()?,
            amount: amount.as_int()?,
            data: bytestack_to_bytes(data)?,
        })
    }
}

impl TryFrom<&Value> for EthTransferMessage {
    type Error = avm_value::ValueError;

    fn try_from(payload: &Value) -> ValueResult<Self> {
        let [dest, amount] = payload.fields::<2>()?;
        Ok(Self { dest: dest.as_address()?, amount: amount.as_int()? })
    }
}

impl TokenTransferMessage {
    fn decode(payload: &Value, kind: TokenKind) -> ValueResult<Self> {
        let [token_address, dest, amount] = payload.fields::<3>()?;
        Ok(Self {
            kind,
            token_address: token_address.as_address()?,
            dest: dest.as_address()?,
            amount: amount.as_int()?,
        })
    }
}

impl TryFrom<&Value> for ContractTxMessage {
    type Error = avm_value::ValueError;

    fn try_from(payload: &Value) -> ValueResult<Self> {
        let [to, amount, data] = payload.fields::<3>()?;
        Ok(Self { to: to.as_address()?, amount: amount.as_int()?, data: bytestack_to_bytes(data)? })
    }
}

/// A decoded bridge message payload.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "camelCase")
)]
pub enum MessageVariant {
    /// A read-only call (type 5).
    Call(CallMessage),
    /// A sequenced transaction (type 0).
    SequencedTx(SequencedTxMessage),
    /// An ETH deposit (type 1).
    EthTransfer(EthTransferMessage),
    /// A token deposit (types 2 and 3).
    TokenTransfer(TokenTransferMessage),
    /// A contract transaction (type 4).
    ContractTx(ContractTxMessage),
}

impl MessageVariant {
    /// Decodes the payload of a bridge message with the given wire type code.
    pub fn decode(type_code: U256, payload: &Value) -> DecodeResult<Self> {
        let message_type = MessageType::try_from(type_code)?;
        let decoded = match message_type {
            MessageType::SequencedTx => {
                SequencedTxMessage::try_from(payload).map(Self::SequencedTx)
            }
            MessageType::EthTransfer => {
                EthTransferMessage::try_from(payload).map(Self::EthTransfer)
            }
            MessageType::Erc20Transfer => {
                TokenTransferMessage::decode(payload, TokenKind::Erc20).map(Self::TokenTransfer)
            }
            MessageType::Erc721Transfer => {
                TokenTransferMessage::decode(payload, TokenKind::Erc721).map(Self::TokenTransfer)
            }
            MessageType::ContractTx => ContractTxMessage::try_from(payload).map(Self::ContractTx),
            MessageType::Call => CallMessage::try_from(payload).map(Self::Call),
        };
        decoded.map_err(|source| DecodeError::MalformedPayload { message_type, source })
    }

    /// Returns the wire type of this message.
    pub const fn message_type(&self) -> MessageType {
        match self {
            Self::Call(_) => MessageType::Call,
            Self::SequencedTx(_) => MessageType::SequencedTx,
            Self::EthTransfer(_) => MessageType::EthTransfer,
            Self::TokenTransfer(TokenTransferMessage { kind: TokenKind::Erc20, .. }) => {
                MessageType::Erc20Transfer
            }
            Self::TokenTransfer(TokenTransferMessage { kind: TokenKind::Erc721, .. }) => {
                MessageType::Erc721Transfer
            }
            Self::ContractTx(_) => MessageType::ContractTx,
        }
    }

    /// Returns the destination address of this message.
    pub const fn dest(&self) -> Address {
        match self {
            Self::Call(msg) => msg.to,
            Self::SequencedTx(msg) => msg.to,
            Self::EthTransfer(msg) => msg.dest,
            Self::TokenTransfer(msg) => msg.dest,
            Self::ContractTx(msg) => msg.to,
        }
    }
}
