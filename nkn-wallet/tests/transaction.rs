//! Tests for transaction building and signing

use nkn_wallet::account::ProgramHash;
use nkn_wallet::transaction::*;
use nkn_wallet::Account;

mod common;

#[test]
fn test_transfer_conformance_vector() {
    let account = Account::restore(common::ZERO_SEED).unwrap();
    let payload = new_transfer(
        account.program_hash(),
        &ProgramHash::new([0x11; 20]),
        "1.23456789".parse().unwrap(),
    )
    .unwrap();
    let txn = build_transaction(&account, payload, 7, "0.1".parse().unwrap(), &[]).unwrap();

    assert_eq!(txn.hash_hex(), "5d044eba9cf07d0dce88871fea6fc092cb638d70e24a8065d5886fa69c8e7a67");
    assert_eq!(
        txn.to_hex(),
        "0a3e0a35080112310a14e0a326820cd09c36ebe248bd58cf4a64ea9418901214111111111111111111111111111111111111111118959aef3a10071880ade20412670a22203b6a27bcceb6a42d62a3a8d02a6f0d73653215771de243a63ac048a18b59da29ac124140430911bdd67d37554c7f56fbb9280d19c281000b91a9f1323bf0d76d6fb436da8c66e73b75711db3825b08fdfc927f388339c00b1a9f4cb0e950affdccc7ae05"
    );
}

#[test]
fn test_wire_preimage_matches_builder() {
    let account = Account::new().unwrap();
    let payload = new_register_name(account.public_key(), "somename").unwrap();
    let txn = build_transaction(&account, payload, 42, Amount::ZERO, &[1, 2, 3]).unwrap();

    let decoded = common::decode_transaction(&txn.to_hex());
    assert_eq!(common::preimage(&decoded), txn.unsigned().serialize());
    assert_eq!(decoded.programs[0].code, account.redeem_script().to_vec());
}

#[test]
fn test_signatures_valid_for_every_payload() {
    let account = Account::new().unwrap();
    let other = ProgramHash::new([0x5a; 20]);
    let key = account.public_key();

    let payloads = vec![
        new_transfer(account.program_hash(), &other, "0.00000001".parse().unwrap()).unwrap(),
        new_register_name(key, "name").unwrap(),
        new_delete_name(key, "name").unwrap(),
        new_subscribe(key, "client", "topic", 0, 400, "meta").unwrap(),
        new_subscribe(key, "", "topic", 3, 1, "").unwrap(),
        new_unsubscribe(key, "client", "topic").unwrap(),
        new_nano_pay(account.program_hash(), &other, u64::MAX, "5".parse().unwrap(), 100, 200).unwrap(),
    ];

    for (i, payload) in payloads.into_iter().enumerate() {
        let fee = Amount::from_units(i as i64 * 1_000).unwrap();
        let txn = build_transaction(&account, payload, i as u64 * 1_000_003, fee, &[]).unwrap();

        assert!(txn.verify(key));
        let decoded = common::decode_transaction(&txn.to_hex());
        assert!(common::verify_wire_signature(&decoded, key));
    }
}

#[test]
fn test_payload_type_tags() {
    let account = Account::new().unwrap();
    let payload = new_unsubscribe(account.public_key(), "", "topic").unwrap();
    let txn = build_transaction(&account, payload, 1, Amount::ZERO, &[]).unwrap();

    let decoded = common::decode_transaction(&txn.to_hex());
    let wire_type = decoded.unsigned_tx.unwrap().payload.unwrap().r#type;
    assert_eq!(wire_type, PayloadType::Unsubscribe as i32);
    assert_eq!(&txn.unsigned().serialize()[..4], &[7, 0, 0, 0]);
}
