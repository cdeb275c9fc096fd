// Build pipeline benchmarks.
//
// Covers address derivation, payload building, Sabre transaction signing,
// and batch building at various sizes.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use transact_sdk::addressing::{compute_contract_address, compute_deployment_address};
use transact_sdk::crypto::{Ed25519PrivateKey, Ed25519Signer};
use transact_sdk::protos::Transaction;
use transact_sdk::sabre::{Action, SabrePayloadBuilder, SabreTransactionBuilder};
use transact_sdk::transaction::{BatchBuilder, BuildTransaction, TransactionBuilder};

fn xo_take() -> SabrePayloadBuilder {
    let game = compute_deployment_address("xo", "game1");
    SabrePayloadBuilder::new()
        .with_action(Action::ExecuteContract)
        .with_contract_name("xo")
        .with_contract_version("0.3.3")
        .with_inputs([game.clone()])
        .with_outputs([game])
        .with_execute_contract_payload(b"game1,take,1".to_vec())
}

fn bench_addressing(c: &mut Criterion) {
    c.bench_function("addressing/contract_address", |b| {
        b.iter(|| compute_contract_address("xo", "0.3.3"));
    });
    c.bench_function("addressing/deployment_address", |b| {
        b.iter(|| compute_deployment_address("xo", "game1"));
    });
}

fn bench_payload(c: &mut Criterion) {
    let builder = xo_take();
    c.bench_function("sabre/build_payload", |b| {
        b.iter(|| builder.build());
    });
}

fn bench_sabre_transaction(c: &mut Criterion) {
    let signer = Ed25519Signer::new(Ed25519PrivateKey::generate());
    let builder = SabreTransactionBuilder::new()
        .with_payload_builder(xo_take())
        .with_transaction_builder(TransactionBuilder::new());

    c.bench_function("sabre/build_transaction", |b| {
        b.iter(|| builder.build(&signer));
    });
}

fn bench_batch(c: &mut Criterion) {
    let signer = Ed25519Signer::new(Ed25519PrivateKey::generate());
    let txn_builder = SabreTransactionBuilder::new()
        .with_payload_builder(xo_take())
        .with_transaction_builder(TransactionBuilder::new());

    let mut group = c.benchmark_group("batch/build");
    for size in [1usize, 10, 100] {
        let txns: Vec<Transaction> = (0..size)
            .filter_map(|_| txn_builder.build(&signer).ok())
            .collect();
        let batch = BatchBuilder::new().with_transactions(txns);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &batch, |b, batch| {
            b.iter(|| batch.build(&signer));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_addressing,
    bench_payload,
    bench_sabre_transaction,
    bench_batch
);
criterion_main!(benches);
