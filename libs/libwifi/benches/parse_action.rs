use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::{thread_rng, Rng};

use libwifi::parse_frame;

// Public action frame with a handful of elements
const ACTION_PAYLOAD: [u8; 82] = [
    // Header
    208, 0, // FrameControl
    58, 1, // Duration id
    255, 255, 255, 255, 255, 255, // First address
    248, 50, 228, 173, 71, 184, // Second address
    255, 255, 255, 255, 255, 255, // Third address
    96, 119, // SequencControl
    // Fixed fields
    4,  // Category
    9,  // Action
    // Tagged parameters
    0, 0, // Wildcard SSID
    1, 8, 130, 132, 139, 150, 36, 48, 72, 108, // Supported rates
    3, 1, 6, // DS parameter set
    221, 18, 80, 111, 154, 9, 2, 2, 0, 37, 0, 13, 6, 0, 44, 1, 200, 0, 20, 0, // Vendor specific
    221, 9, 0, 16, 24, 2, 5, 0, 28, 0, 0, //
    127, 8, 1, 0, 0, 0, 0, 0, 0, 64, // Extended capabilities
];

pub fn parse_action(crit: &mut Criterion) {
    let mut rng = thread_rng();
    let random: u8 = rng.gen();
    let mut payload = ACTION_PAYLOAD;

    // Log raw byte throughput
    let mut group = crit.benchmark_group("parsers");
    group.throughput(Throughput::Bytes(ACTION_PAYLOAD.len() as u64));

    group.bench_function("Parse action", |bencher| {
        bencher.iter(|| {
            payload[80] = random;
            assert!(parse_frame(&payload, false).is_ok())
        })
    });
    group.finish()
}

pub fn encode_action(crit: &mut Criterion) {
    use libwifi::FrameNode;

    let frame = parse_frame(&ACTION_PAYLOAD, false).expect("Benchmark payload is valid");

    let mut group = crit.benchmark_group("encoders");
    group.throughput(Throughput::Bytes(ACTION_PAYLOAD.len() as u64));

    group.bench_function("Encode action", |bencher| {
        bencher.iter(|| assert_eq!(frame.encode().len(), ACTION_PAYLOAD.len()))
    });
    group.finish()
}

criterion_group!(benches, parse_action, encode_action);
criterion_main!(benches);
