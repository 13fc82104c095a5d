//! # Integration Test Flows
//!
//! Exercises the scheduler and the transaction-authentication gate the
//! way the block-production loop composes them: a periodic unit drains
//! pending transactions, authenticates each, and includes only the
//! accepted ones; an immediate unit runs lower-priority housekeeping
//! whenever the loop is otherwise idle.

#[cfg(test)]
mod tests {
    use crate::init_tracing;
    use k256::ecdsa::SigningKey;
    use mn_01_task_scheduler::{ImmediateTask, PeriodicTask, ScheduledUnit};
    use mn_02_tx_auth::{address_from_verifying_key, sha3_256, TxAuthService, TxAuthenticationApi};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    /// A pending transaction as the intake loop sees it: raw wire bytes
    /// plus the claimed sender.
    #[derive(Clone, Debug)]
    struct PendingTx {
        digest: [u8; 32],
        signature: Vec<u8>,
        sender: String,
    }

    /// Sign a payload, producing a well-formed pending transaction whose
    /// claimed sender is the signer's own address.
    fn signed_tx(key: &SigningKey, payload: &[u8]) -> PendingTx {
        let digest = sha3_256(payload);
        let (sig, recovery_id) = key
            .sign_prehash_recoverable(&digest)
            .expect("signing failed");
        let mut signature = sig.to_bytes().to_vec();
        signature.push(recovery_id.to_byte());

        PendingTx {
            digest,
            signature,
            sender: address_from_verifying_key(key.verifying_key()).to_string(),
        }
    }

    fn keypair() -> SigningKey {
        SigningKey::random(&mut rand::thread_rng())
    }

    // =========================================================================
    // INTEGRATION TESTS: PERIODIC INTAKE -> AUTHENTICATION GATE
    // =========================================================================

    /// The production tick pulls pending transactions through the gate:
    /// properly signed transactions reach the ledger, a transaction
    /// claiming someone else's address does not.
    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_intake_tick_includes_only_authenticated_transactions() {
        init_tracing();

        let alice = keypair();
        let bob = keypair();
        let mallory = keypair();

        let mut forged = signed_tx(&mallory, b"mallory pays mallory");
        // Mallory claims the transfer came from Alice.
        forged.sender = address_from_verifying_key(alice.verifying_key()).to_string();

        let mempool: Arc<Mutex<Vec<PendingTx>>> = Arc::new(Mutex::new(vec![
            signed_tx(&alice, b"alice pays bob 10"),
            forged,
            signed_tx(&bob, b"bob pays alice 3"),
        ]));
        let ledger: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

        let gate = TxAuthService::new();
        let mempool_cb = Arc::clone(&mempool);
        let ledger_cb = Arc::clone(&ledger);

        let producer = PeriodicTask::new("block-producer", Duration::from_millis(20), move || {
            let gate = gate.clone();
            let mempool = Arc::clone(&mempool_cb);
            let ledger = Arc::clone(&ledger_cb);
            async move {
                let pending: Vec<PendingTx> = mempool.lock().unwrap().drain(..).collect();
                for tx in pending {
                    if gate.verify(&tx.digest, &tx.signature, &tx.sender) {
                        ledger.lock().unwrap().push(tx.sender.clone());
                    }
                }
                Ok(())
            }
        });

        producer.start();
        tokio::time::sleep(Duration::from_millis(150)).await;
        producer.stop().await;

        let ledger = ledger.lock().unwrap();
        assert_eq!(ledger.len(), 2, "exactly the two honest transactions land");
        for sender in ledger.iter() {
            // Everything the gate admits is a well-formed canonical address.
            shared_types::Address::parse(sender).expect("ledger holds canonical addresses");
        }
        assert!(ledger.contains(&address_from_verifying_key(alice.verifying_key()).to_string()));
        assert!(ledger.contains(&address_from_verifying_key(bob.verifying_key()).to_string()));
        assert!(mempool.lock().unwrap().is_empty());
    }

    /// A gate failure inside the tick is loud: the unit stops ticking
    /// and retains the fault for the owning loop.
    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_intake_tick_fault_is_surfaced() {
        init_tracing();

        let producer = PeriodicTask::new("flaky-producer", Duration::from_millis(10), || async {
            Err("state root unavailable".into())
        });

        producer.start();
        tokio::time::sleep(Duration::from_millis(80)).await;

        assert!(!producer.is_running());
        assert!(producer.has_fault());
        producer.stop().await;
    }

    // =========================================================================
    // INTEGRATION TESTS: IMMEDIATE HOUSEKEEPING
    // =========================================================================

    /// Housekeeping work queued while the node is busy runs LIFO once
    /// the unit starts, and work queued after stop waits for a restart.
    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_housekeeping_drains_lifo_across_restarts() {
        init_tracing();

        let order: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));
        let housekeeping = ImmediateTask::new("housekeeping");

        for label in ["compact-storage", "prune-peers", "flush-metrics"] {
            let order = Arc::clone(&order);
            housekeeping.add(async move {
                order.lock().unwrap().push(label);
                Ok(())
            });
        }

        housekeeping.start();
        tokio::time::sleep(Duration::from_millis(50)).await;
        housekeeping.stop().await;

        assert_eq!(
            *order.lock().unwrap(),
            vec!["flush-metrics", "prune-peers", "compact-storage"]
        );

        // Queued while stopped; runs only after the next start.
        let order_cb = Arc::clone(&order);
        housekeeping.add(async move {
            order_cb.lock().unwrap().push("rotate-logs");
            Ok(())
        });
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(order.lock().unwrap().len(), 3);

        housekeeping.start();
        tokio::time::sleep(Duration::from_millis(30)).await;
        housekeeping.stop().await;
        assert_eq!(order.lock().unwrap().last(), Some(&"rotate-logs"));
    }

    // =========================================================================
    // INTEGRATION TESTS: TAMPER SENSITIVITY SWEEP
    // =========================================================================

    /// Flipping any single bit of the digest or the signature never
    /// authenticates.
    #[test]
    fn test_single_bit_flips_never_authenticate() {
        init_tracing();

        let gate = TxAuthService::new();
        let key = keypair();
        let tx = signed_tx(&key, b"canonical transfer payload");
        assert!(gate.verify(&tx.digest, &tx.signature, &tx.sender));

        for byte in 0..tx.digest.len() {
            for bit in 0..8 {
                let mut digest = tx.digest;
                digest[byte] ^= 1 << bit;
                assert!(
                    !gate.verify(&digest, &tx.signature, &tx.sender),
                    "digest bit {}:{} authenticated",
                    byte,
                    bit
                );
            }
        }
        for byte in 0..tx.signature.len() {
            for bit in 0..8 {
                let mut signature = tx.signature.clone();
                signature[byte] ^= 1 << bit;
                assert!(
                    !gate.verify(&tx.digest, &signature, &tx.sender),
                    "signature bit {}:{} authenticated",
                    byte,
                    bit
                );
            }
        }
    }
}
