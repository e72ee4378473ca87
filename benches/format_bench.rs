use criterion::{Criterion, black_box, criterion_group, criterion_main};

use phonenorm::{PHONE_NUMBER_UTIL, PhoneNumberFormat};

use phonenumber::{
    self as rlp, Mode,
    country::Id::{self, AU, GB, IT, RU, US},
};

type TestEntity = (&'static str, &'static str, Id);

fn setup_numbers() -> Vec<TestEntity> {
    vec![
        ("0011 44 20 7031 3000 ext. 1234", "AU", AU),
        ("(415) 555-2671", "US", US),
        ("+44 20 7031 3000", "GB", GB),
        ("020 7031 3000", "GB", GB),
        ("8 (912) 345-67-89", "RU", RU),
        ("02 3661 8300", "IT", IT),
    ]
}

fn convert_to_rlp_numbers(numbers: &[TestEntity]) -> Vec<rlp::PhoneNumber> {
    numbers
        .iter()
        .filter_map(|s| rlp::parse(Some(s.2), s.0).ok())
        .collect()
}

fn convert_to_phonenorm_numbers(numbers: &[TestEntity]) -> Vec<phonenorm::PhoneNumber> {
    numbers
        .iter()
        .map(|s| PHONE_NUMBER_UTIL.parse(s.0, Some(s.1)).unwrap())
        .collect()
}

// Groupings come from different plan data, so outputs are not compared.
fn formatting_benchmark(c: &mut Criterion) {
    // RUST_LOG=phonenorm=trace shows parse decisions
    let _ = env_logger::try_init();
    let numbers = setup_numbers();
    let rlp_numbers = convert_to_rlp_numbers(&numbers);
    let numbers = convert_to_phonenorm_numbers(&numbers);

    let mut group = c.benchmark_group("Formatting Comparison");

    let mut test = |format_a: PhoneNumberFormat, format_b: Mode| {
        group.bench_function(format!("phonenorm: format({})", format_a), |b| {
            b.iter(|| {
                for number in &numbers {
                    PHONE_NUMBER_UTIL.format(black_box(number), black_box(format_a));
                }
            })
        });

        group.bench_function(format!("rust-phonenumber: format({:?})", format_b), |b| {
            b.iter(|| {
                for number in &rlp_numbers {
                    rlp::format(black_box(number)).mode(format_b).to_string();
                }
            })
        });
    };

    test(PhoneNumberFormat::E164, Mode::E164);
    test(PhoneNumberFormat::International, Mode::International);
    test(PhoneNumberFormat::National, Mode::National);
    test(PhoneNumberFormat::RFC3966, Mode::Rfc3966);
    group.finish();
}

criterion_group!(benches, formatting_benchmark);
criterion_main!(benches);
