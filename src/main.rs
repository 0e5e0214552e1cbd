//! Protowire Demo - Encode Request & Micro-Benchmark
//!
//! Encode request satu field (`id`, field 1, varint) persis seperti yang
//! dikirim client RPC, lalu benchmark operasi tulis output stream.
//! Tidak ada network; bytes hanya dicetak sebagai hex.
//!
//! Usage:
//!   cargo run --release -- [OPTIONS]

use std::time::Instant;

use protowire::protocol::{
    decode_tag, decode_varint, make_tag, varint32_size, varint64_size, WireType,
};
use protowire::{OutputStream, WireError};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Demo configuration
struct DemoConfig {
    user_id: u64,
    iterations: usize,
    verbose: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            user_id: 97,
            iterations: 1_000_000,
            verbose: false,
        }
    }
}

/// Field number `id` di request
const ID_FIELD: u32 = 1;

/// Encode request `{ id: user_id }` ke stream yang ukurannya pas
fn encode_request(user_id: u64) -> protowire::Result<OutputStream> {
    let tag = make_tag(ID_FIELD, WireType::Varint);
    let size = varint32_size(tag) + varint64_size(user_id);

    let mut stream = OutputStream::new(size);
    stream.write_tag(tag)?;
    stream.write_varint64(user_id)?;

    debug!(size, position = stream.position(), "request encoded");
    Ok(stream)
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

fn demo_request(config: &DemoConfig) -> protowire::Result<()> {
    println!("📦 Request Encoding");
    println!("-------------------");

    let stream = encode_request(config.user_id)?;
    let bytes = stream.data();
    println!("  id:      {}", config.user_id);
    println!("  bytes:   {} ({} bytes)", hex(bytes), bytes.len());

    // Decode balik untuk verifikasi
    let decoded = decode_tag(bytes).and_then(|(field, wire_type, tag_len)| {
        decode_varint(&bytes[tag_len..])
            .map(|(value, _)| (field, wire_type, value))
    });
    match decoded {
        Some((field, wire_type, value)) => {
            println!("  decoded: field {} ({:?}) = {}\n", field, wire_type, value);
        }
        None => error!(bytes = %hex(bytes), "encoded request failed to decode"),
    }

    Ok(())
}

fn demo_overflow() {
    println!("⚠️  Overflow Handling");
    println!("--------------------");

    let mut stream = OutputStream::new(3);
    match stream.write_fixed32(1) {
        Err(WireError::BufferOverflow {
            requested,
            available,
        }) => {
            println!(
                "  fixed32 into 3-byte stream rejected: requested {}, available {}",
                requested, available
            );
            println!("  buffer untouched: {}\n", hex(stream.data()));
        }
        Ok(()) => error!("fixed32 unexpectedly fit into a 3-byte stream"),
    }
}

fn benchmark_writes(config: &DemoConfig) -> protowire::Result<()> {
    println!("📊 Output Stream Benchmark");
    println!("--------------------------");

    // tag + varint32 + varint64 + fixed32 + fixed64, ukuran worst-case
    const RECORD_SIZE: usize = 1 + 5 + 10 + 4 + 8;
    let iterations = config.iterations;

    let start = Instant::now();
    let mut total_bytes = 0usize;
    for i in 0..iterations {
        let mut stream = OutputStream::new(RECORD_SIZE);
        stream.write_tag(make_tag(1, WireType::Varint))?;
        stream.write_varint32(i as u32)?;
        stream.write_varint64((i as u64) << 32)?;
        stream.write_fixed32(i as u32)?;
        stream.write_fixed64(i as u64)?;
        total_bytes += stream.position();
    }
    let duration = start.elapsed();

    let ns_per_record = duration.as_nanos() as f64 / iterations.max(1) as f64;

    println!("  Records: {}", iterations);
    println!("  Bytes written: {}", total_bytes);
    println!(
        "  Encode latency: {:.2} ns/record ({:.3} μs/record)",
        ns_per_record,
        ns_per_record / 1000.0
    );
    println!(
        "  Throughput: {:.2} M records/sec",
        iterations as f64 / duration.as_secs_f64() / 1_000_000.0
    );

    info!(iterations, total_bytes, ?duration, "benchmark finished");
    Ok(())
}

fn parse_args() -> DemoConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = DemoConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--id" => {
                if i + 1 < args.len() {
                    config.user_id = args[i + 1].parse().unwrap_or(97);
                    i += 1;
                }
            }
            "--iterations" | "-n" => {
                if i + 1 < args.len() {
                    config.iterations = args[i + 1].parse().unwrap_or(1_000_000);
                    i += 1;
                }
            }
            "--verbose" | "-v" => {
                config.verbose = true;
            }
            "--help" | "-h" => {
                println!("Protowire - Fixed-Capacity Protocol Buffer Wire Writer\n");
                println!("Usage: protowire [OPTIONS]\n");
                println!("Options:");
                println!("      --id <N>          Request id to encode (default: 97)");
                println!("  -n, --iterations <N>  Benchmark iterations (default: 1000000)");
                println!("  -v, --verbose         Debug logging (overridden by RUST_LOG)");
                println!("  -h, --help            Show this help");
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    let config = parse_args();
    init_tracing(config.verbose);

    println!("🚀 Protowire - Wire Writer Demo");
    println!("===============================\n");

    demo_overflow();

    let result = demo_request(&config).and_then(|()| benchmark_writes(&config));
    if let Err(e) = result {
        error!(error = %e, "encoding failed");
        std::process::exit(1);
    }

    println!("\n✅ Done!");
}
