//! Wallet implementation

use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::WalletConfig;
use crate::crypto::encryption::Envelope;
use crate::crypto::hash::random_u64;
use crate::crypto::keys::PublicKey;
use crate::error::{Error, Result};
use crate::network::{NodeClient, RpcClient};
use crate::transaction::{
    build_transaction, new_delete_name, new_nano_pay, new_register_name, new_subscribe,
    new_transfer, new_unsubscribe, Amount, Payload, Transaction,
};
use super::address::{address_to_program_hash, ProgramHash};
use super::identity::Account;
use super::keystore::WalletFile;

/// Per-call transaction settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionOptions {
    /// Nonce to use instead of asking the node
    pub nonce: Option<u64>,
    /// Transaction fee
    pub fee: Amount,
    /// Raw transaction attributes
    pub attributes: Vec<u8>,
}

impl TransactionOptions {
    /// Options with an explicit fee
    pub fn with_fee(fee: Amount) -> Self {
        Self {
            fee,
            ..Self::default()
        }
    }

    /// Options with an explicit nonce
    pub fn with_nonce(nonce: u64) -> Self {
        Self {
            nonce: Some(nonce),
            ..Self::default()
        }
    }
}

/// A loaded wallet: one account, its encrypted seed and a node connection.
///
/// Transaction operations never change the persisted fields; [`Wallet::to_json`]
/// returns the same document before and after any of them. A loaded wallet
/// keeps the file it was read from, field for field.
#[derive(Clone)]
pub struct Wallet {
    account: Account,
    envelope: Envelope,
    file: WalletFile,
    config: WalletConfig,
    client: Option<Arc<dyn NodeClient>>,
}

impl Wallet {
    /// Create a wallet with a new random account
    pub fn create(password: &str, config: WalletConfig) -> Result<Self> {
        let account = Account::new()?;
        debug!(address = account.address(), "Creating wallet");
        Self::seal(account, password, config)
    }

    /// Create a wallet for an existing hex seed
    pub fn restore_from_seed(seed: &str, password: &str, config: WalletConfig) -> Result<Self> {
        let account = Account::restore(seed)?;
        debug!(address = account.address(), "Restoring wallet from seed");
        Self::seal(account, password, config)
    }

    /// Load a wallet from its JSON form
    pub fn from_json(json: &str, password: &str, config: WalletConfig) -> Result<Self> {
        let file = WalletFile::from_json(json).map_err(|e| {
            warn!(error = %e, "Rejected wallet file");
            e
        })?;

        let envelope = file.envelope()?;
        let opened = envelope.open(password).map_err(|e| {
            warn!(address = %file.address, error = %e, "Failed to open wallet");
            e
        })?;

        let account = Account::from_seed(&opened.seed)?;
        if account.address() != file.address {
            warn!(address = %file.address, "Decrypted seed does not match wallet address");
            return Err(Error::InvalidWalletFormat(
                "decrypted seed does not match wallet address".to_string(),
            ));
        }

        debug!(address = account.address(), "Loaded wallet");
        Self::assemble(account, envelope, file, config)
    }

    fn seal(account: Account, password: &str, config: WalletConfig) -> Result<Self> {
        let envelope = Envelope::seal(&account.seed(), password)?;
        let file = WalletFile::new(&account, &envelope);
        Self::assemble(account, envelope, file, config)
    }

    fn assemble(account: Account, envelope: Envelope, file: WalletFile, config: WalletConfig) -> Result<Self> {
        let mut wallet = Self {
            account,
            envelope,
            file,
            config: WalletConfig::disabled(),
            client: None,
        };
        wallet.configure(config)?;
        Ok(wallet)
    }

    /// Point the wallet at another node
    pub fn configure(&mut self, config: WalletConfig) -> Result<()> {
        self.client = match config.rpc_server_addr {
            Some(_) => Some(Arc::new(RpcClient::new(&config)?) as Arc<dyn NodeClient>),
            None => None,
        };
        self.config = config;
        Ok(())
    }

    /// Use a custom node client instead of JSON-RPC
    pub fn with_client(mut self, client: Arc<dyn NodeClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Persisted form
    pub fn to_wallet_file(&self) -> WalletFile {
        self.file.clone()
    }

    /// Persisted JSON form
    pub fn to_json(&self) -> Result<String> {
        self.to_wallet_file().to_json()
    }

    /// Check a password against this wallet
    pub fn verify_password(&self, password: &str) -> bool {
        match self.envelope.open(password) {
            Ok(opened) => Account::from_seed(&opened.seed)
                .map(|account| account.address() == self.account.address())
                .unwrap_or(false),
            Err(_) => false,
        }
    }

    /// Re-encrypt under a new password, keeping the seed, master key and IV
    pub fn change_password(&self, old_password: &str, new_password: &str) -> Result<Self> {
        let opened = self.envelope.open(old_password)?;
        let envelope = Envelope::seal_with(&opened.seed, new_password, &opened.master_key, &self.envelope.iv)?;
        debug!(address = self.address(), "Changed wallet password");

        Ok(Self {
            file: WalletFile::new(&self.account, &envelope),
            envelope,
            ..self.clone()
        })
    }

    /// Get the wallet file version
    pub fn version(&self) -> u32 {
        self.file.version
    }

    /// Get the account
    pub fn account(&self) -> &Account {
        &self.account
    }

    /// Get the Base58 address
    pub fn address(&self) -> &str {
        self.account.address()
    }

    /// Get the program hash
    pub fn program_hash(&self) -> &ProgramHash {
        self.account.program_hash()
    }

    /// Get the public key
    pub fn public_key(&self) -> &PublicKey {
        self.account.public_key()
    }

    /// Get the node configuration
    pub fn config(&self) -> &WalletConfig {
        &self.config
    }

    fn client(&self) -> Result<&dyn NodeClient> {
        self.client.as_deref().ok_or(Error::NoRpcServer)
    }

    /// Balance of this wallet in NKN
    pub async fn get_balance(&self) -> Result<Decimal> {
        self.client()?.get_balance(self.address()).await
    }

    /// Next nonce for this wallet
    pub async fn get_nonce(&self) -> Result<u64> {
        self.client()?.get_nonce(self.address()).await
    }

    /// Transfer `amount` to an address, returning the transaction hash
    pub async fn transfer_to(&self, to: &str, amount: Amount, options: TransactionOptions) -> Result<String> {
        let recipient = address_to_program_hash(to)?;
        self.ensure_balance(amount).await?;

        let payload = new_transfer(self.program_hash(), &recipient, amount)?;
        self.submit(payload, options).await
    }

    /// Transfer `amount` to the address a name is registered to
    pub async fn transfer_to_name(&self, name: &str, amount: Amount, options: TransactionOptions) -> Result<String> {
        let address = self
            .client()?
            .get_address_by_name(name)
            .await?
            .ok_or_else(|| Error::InvalidAddress(format!("name {} is not registered", name)))?;

        debug!(name, address = %address, "Resolved name");
        self.transfer_to(&address, amount, options).await
    }

    /// Register a name to this wallet's public key
    pub async fn register_name(&self, name: &str, options: TransactionOptions) -> Result<String> {
        let payload = new_register_name(self.public_key(), name)?;
        self.submit(payload, options).await
    }

    /// Delete a name registered to this wallet's public key
    pub async fn delete_name(&self, name: &str, options: TransactionOptions) -> Result<String> {
        let payload = new_delete_name(self.public_key(), name)?;
        self.submit(payload, options).await
    }

    /// Subscribe `identifier` of this wallet to a topic for `duration` blocks
    pub async fn subscribe(
        &self,
        topic: &str,
        bucket: u32,
        duration: u32,
        identifier: &str,
        meta: &str,
        options: TransactionOptions,
    ) -> Result<String> {
        let payload = new_subscribe(self.public_key(), identifier, topic, bucket, duration, meta)?;
        self.submit(payload, options).await
    }

    /// Unsubscribe `identifier` of this wallet from a topic
    pub async fn unsubscribe(&self, topic: &str, identifier: &str, options: TransactionOptions) -> Result<String> {
        let payload = new_unsubscribe(self.public_key(), identifier, topic)?;
        self.submit(payload, options).await
    }

    /// Build and sign a nano pay transaction without submitting it.
    ///
    /// A random id is used when `id` is `None`.
    pub async fn create_nano_pay(
        &self,
        to: &str,
        amount: Amount,
        expiration: u32,
        id: Option<u64>,
        options: TransactionOptions,
    ) -> Result<Transaction> {
        let recipient = address_to_program_hash(to)?;
        self.ensure_balance(amount).await?;

        let id = id.unwrap_or_else(random_u64);
        let payload = new_nano_pay(self.program_hash(), &recipient, id, amount, expiration, expiration)?;
        self.build(payload, options).await
    }

    /// Submit a signed transaction, returning its hash
    pub async fn send_transaction(&self, txn: &Transaction) -> Result<String> {
        let client = self.client()?;
        debug!(hash = %txn.hash_hex(), nonce = txn.nonce(), "Submitting transaction");
        client.send_raw_transaction(&txn.to_hex()).await
    }

    async fn ensure_balance(&self, amount: Amount) -> Result<()> {
        let balance = self.get_balance().await?;
        let amount = amount.to_decimal();
        if balance < amount {
            return Err(Error::NotEnoughBalance { balance, amount });
        }
        Ok(())
    }

    async fn build(&self, payload: Payload, options: TransactionOptions) -> Result<Transaction> {
        let nonce = match options.nonce {
            Some(nonce) => nonce,
            None => self.get_nonce().await?,
        };

        debug!(payload_type = ?payload.payload_type(), nonce, "Building transaction");
        build_transaction(&self.account, payload, nonce, options.fee, &options.attributes)
    }

    async fn submit(&self, payload: Payload, options: TransactionOptions) -> Result<String> {
        let txn = self.build(payload, options).await?;
        self.send_transaction(&txn).await
    }
}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
