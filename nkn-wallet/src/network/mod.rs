//! Remote node access
//!
//! The wallet talks to nodes through the [`NodeClient`] trait; [`RpcClient`]
//! is the JSON-RPC implementation.

mod client;
mod rpc;

pub use client::*;
pub use rpc::*;
