//! Comparison benchmarks between qdatastream and other serialization libraries
//!
//! Run with: cargo bench comparison_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qdatastream::{Config, Element, Reader, Result, TypeTag, Writer};
use serde::{Deserialize, Serialize};

// Test data structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct TradeMessage {
    seq: u32,
    timestamp_ns: u64,
    price: f64,
    quantity: u32,
    symbol: String,
    tags: Vec<u16>,
}

#[derive(Debug, Clone, PartialEq, borsh::BorshSerialize, borsh::BorshDeserialize)]
struct TradeMessageBorsh {
    seq: u32,
    timestamp_ns: u64,
    price: f64,
    quantity: u32,
    symbol: String,
    tags: Vec<u16>,
}

impl TradeMessage {
    fn new_minimal() -> Self {
        Self {
            seq: 12345,
            timestamp_ns: 1_700_000_000_000_000_000,
            price: 50.0,
            quantity: 100,
            symbol: String::new(),
            tags: Vec::new(),
        }
    }

    fn new_full() -> Self {
        Self {
            seq: 12345,
            timestamp_ns: 1_700_000_000_000_000_000,
            price: 50.25,
            quantity: 100,
            symbol: "AAPL".to_string(),
            tags: vec![1, 2, 3, 4],
        }
    }
}

impl From<&TradeMessage> for TradeMessageBorsh {
    fn from(trade: &TradeMessage) -> Self {
        Self {
            seq: trade.seq,
            timestamp_ns: trade.timestamp_ns,
            price: trade.price,
            quantity: trade.quantity,
            symbol: trade.symbol.clone(),
            tags: trade.tags.clone(),
        }
    }
}

fn tag_element() -> Element<u16> {
    Element::tag(TypeTag::UInt16)
}

fn qds_encode(trade: &TradeMessage, writer: &mut Writer) -> Result<()> {
    writer.write_uint32(trade.seq)?;
    writer.write_uint64(trade.timestamp_ns)?;
    writer.write_double(trade.price)?;
    writer.write_uint32(trade.quantity)?;
    writer.write_str(&trade.symbol)?;
    writer.write_list(&trade.tags, &tag_element())
}

fn qds_decode(buf: &[u8]) -> Result<TradeMessage> {
    let mut reader = Reader::new(buf);
    Ok(TradeMessage {
        seq: reader.read_uint32()?,
        timestamp_ns: reader.read_uint64()?,
        price: reader.read_double()?,
        quantity: reader.read_uint32()?,
        symbol: reader.read_string()?,
        tags: reader.read_list(&tag_element())?,
    })
}

fn qds_to_vec(trade: &TradeMessage) -> Vec<u8> {
    let mut writer = Writer::with_capacity(64, Config::new());
    qds_encode(trade, &mut writer).unwrap();
    writer.into_inner()
}

fn bench_encoding_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding_comparison");

    let test_cases = [
        ("minimal", TradeMessage::new_minimal()),
        ("full", TradeMessage::new_full()),
    ];

    for (name, trade) in &test_cases {
        // qdatastream
        group.bench_with_input(BenchmarkId::new("qdatastream", name), trade, |b, trade| {
            let mut writer = Writer::with_capacity(1024, Config::new());
            b.iter(|| {
                writer.reset();
                qds_encode(black_box(trade), &mut writer).unwrap();
                black_box(writer.len());
            });
        });

        // Bincode
        group.bench_with_input(BenchmarkId::new("bincode", name), trade, |b, trade| {
            b.iter(|| {
                let encoded = bincode::serialize(black_box(trade)).unwrap();
                black_box(encoded);
            });
        });

        // MessagePack (rmp-serde)
        group.bench_with_input(BenchmarkId::new("messagepack", name), trade, |b, trade| {
            b.iter(|| {
                let encoded = rmp_serde::to_vec(black_box(trade)).unwrap();
                black_box(encoded);
            });
        });

        // Postcard
        group.bench_with_input(BenchmarkId::new("postcard", name), trade, |b, trade| {
            b.iter(|| {
                let encoded = postcard::to_allocvec(black_box(trade)).unwrap();
                black_box(encoded);
            });
        });

        // Borsh
        let trade_borsh: TradeMessageBorsh = trade.into();
        group.bench_with_input(BenchmarkId::new("borsh", name), &trade_borsh, |b, trade| {
            b.iter(|| {
                let encoded = borsh::to_vec(black_box(trade)).unwrap();
                black_box(encoded);
            });
        });

        // JSON (for comparison)
        group.bench_with_input(BenchmarkId::new("json", name), trade, |b, trade| {
            b.iter(|| {
                let encoded = serde_json::to_vec(black_box(trade)).unwrap();
                black_box(encoded);
            });
        });
    }

    group.finish();
}

fn bench_decoding_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("decoding_comparison");

    let test_cases = [
        ("minimal", TradeMessage::new_minimal()),
        ("full", TradeMessage::new_full()),
    ];

    for (name, trade) in &test_cases {
        // Pre-encode data for each format
        let qds_data = qds_to_vec(trade);
        let bincode_data = bincode::serialize(trade).unwrap();
        let messagepack_data = rmp_serde::to_vec(trade).unwrap();
        let postcard_data = postcard::to_allocvec(trade).unwrap();
        let trade_borsh: TradeMessageBorsh = trade.into();
        let borsh_data = borsh::to_vec(&trade_borsh).unwrap();
        let json_data = serde_json::to_vec(trade).unwrap();

        group.bench_with_input(BenchmarkId::new("qdatastream", name), &qds_data, |b, data| {
            b.iter(|| {
                let decoded = qds_decode(black_box(data)).unwrap();
                black_box(decoded);
            });
        });

        group.bench_with_input(BenchmarkId::new("bincode", name), &bincode_data, |b, data| {
            b.iter(|| {
                let decoded: TradeMessage = bincode::deserialize(black_box(data)).unwrap();
                black_box(decoded);
            });
        });

        group.bench_with_input(
            BenchmarkId::new("messagepack", name),
            &messagepack_data,
            |b, data| {
                b.iter(|| {
                    let decoded: TradeMessage = rmp_serde::from_slice(black_box(data)).unwrap();
                    black_box(decoded);
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("postcard", name), &postcard_data, |b, data| {
            b.iter(|| {
                let decoded: TradeMessage = postcard::from_bytes(black_box(data)).unwrap();
                black_box(decoded);
            });
        });

        group.bench_with_input(BenchmarkId::new("borsh", name), &borsh_data, |b, data| {
            b.iter(|| {
                let decoded: TradeMessageBorsh =
                    <TradeMessageBorsh as borsh::BorshDeserialize>::try_from_slice(black_box(data))
                        .unwrap();
                black_box(decoded);
            });
        });

        group.bench_with_input(BenchmarkId::new("json", name), &json_data, |b, data| {
            b.iter(|| {
                let decoded: TradeMessage = serde_json::from_slice(black_box(data)).unwrap();
                black_box(decoded);
            });
        });
    }

    group.finish();
}

fn bench_size_comparison(c: &mut Criterion) {
    println!("\n=== SERIALIZED SIZE COMPARISON ===");

    for (name, trade) in [
        ("minimal", TradeMessage::new_minimal()),
        ("full", TradeMessage::new_full()),
    ] {
        println!("\n{} message:", name);
        println!("  QDataStream: {} bytes", qds_to_vec(&trade).len());
        println!(
            "  Bincode:     {} bytes",
            bincode::serialize(&trade).unwrap().len()
        );
        println!(
            "  MessagePack: {} bytes",
            rmp_serde::to_vec(&trade).unwrap().len()
        );
        println!(
            "  Postcard:    {} bytes",
            postcard::to_allocvec(&trade).unwrap().len()
        );
        let trade_borsh: TradeMessageBorsh = (&trade).into();
        println!(
            "  Borsh:       {} bytes",
            borsh::to_vec(&trade_borsh).unwrap().len()
        );
        println!(
            "  JSON:        {} bytes",
            serde_json::to_vec(&trade).unwrap().len()
        );
    }

    // Dummy benchmark just to include in the suite
    c.bench_function("size_comparison_dummy", |b| {
        b.iter(|| {
            black_box(42);
        });
    });
}

criterion_group!(
    benches,
    bench_encoding_comparison,
    bench_decoding_comparison,
    bench_size_comparison
);
criterion_main!(benches);
