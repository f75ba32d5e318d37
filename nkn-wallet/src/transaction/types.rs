//! Protobuf wire messages submitted to NKN nodes

/// Ledger payload types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PayloadType {
    Coinbase = 0,
    TransferAsset = 1,
    SigChainTxn = 2,
    RegisterName = 3,
    TransferName = 4,
    DeleteName = 5,
    Subscribe = 6,
    Unsubscribe = 7,
    GenerateId = 8,
    NanoPay = 9,
    IssueAsset = 10,
    GenerateId2 = 11,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Payload {
    #[prost(enumeration = "PayloadType", tag = "1")]
    pub r#type: i32,
    #[prost(bytes = "vec", tag = "2")]
    pub data: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UnsignedTx {
    #[prost(message, optional, tag = "1")]
    pub payload: Option<Payload>,
    #[prost(uint64, tag = "2")]
    pub nonce: u64,
    #[prost(int64, tag = "3")]
    pub fee: i64,
    #[prost(bytes = "vec", tag = "4")]
    pub attributes: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Program {
    #[prost(bytes = "vec", tag = "1")]
    pub code: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub parameter: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Transaction {
    #[prost(message, optional, tag = "1")]
    pub unsigned_tx: Option<UnsignedTx>,
    #[prost(message, repeated, tag = "2")]
    pub programs: Vec<Program>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransferAsset {
    #[prost(bytes = "vec", tag = "1")]
    pub sender: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub recipient: Vec<u8>,
    #[prost(int64, tag = "3")]
    pub amount: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RegisterName {
    #[prost(bytes = "vec", tag = "1")]
    pub registrant: Vec<u8>,
    #[prost(string, tag = "2")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteName {
    #[prost(bytes = "vec", tag = "1")]
    pub registrant: Vec<u8>,
    #[prost(string, tag = "2")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Subscribe {
    #[prost(bytes = "vec", tag = "1")]
    pub subscriber: Vec<u8>,
    #[prost(string, tag = "2")]
    pub identifier: String,
    #[prost(string, tag = "3")]
    pub topic: String,
    /// Deprecated on the ledger; zero is omitted on the wire
    #[prost(uint32, tag = "4")]
    pub bucket: u32,
    #[prost(uint32, tag = "5")]
    pub duration: u32,
    #[prost(string, tag = "6")]
    pub meta: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Unsubscribe {
    #[prost(bytes = "vec", tag = "1")]
    pub subscriber: Vec<u8>,
    #[prost(string, tag = "2")]
    pub identifier: String,
    #[prost(string, tag = "3")]
    pub topic: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NanoPay {
    #[prost(bytes = "vec", tag = "1")]
    pub sender: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub recipient: Vec<u8>,
    #[prost(uint64, tag = "3")]
    pub id: u64,
    #[prost(int64, tag = "4")]
    pub amount: i64,
    #[prost(uint32, tag = "5")]
    pub txn_expiration: u32,
    #[prost(uint32, tag = "6")]
    pub nano_pay_expiration: u32,
}
