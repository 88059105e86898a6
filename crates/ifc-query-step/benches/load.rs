// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ifc_query_model::{EntityId, RelationshipKind};
use ifc_query_step::StepParser;

const SAMPLE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ifc-query/tests/models/sample.ifc"
));

fn bench_load(c: &mut Criterion) {
    c.bench_function("load/indexed", |b| {
        b.iter(|| {
            let model = StepParser::new().parse(black_box(SAMPLE)).expect("parse sample");
            black_box(model.entity_count());
        });
    });

    c.bench_function("load/no_inverse_index", |b| {
        let parser = StepParser::new().with_inverse_index(false);
        b.iter(|| {
            let model = parser.parse(black_box(SAMPLE)).expect("parse sample");
            black_box(model.entity_count());
        });
    });
}

fn bench_inverse_lookup(c: &mut Criterion) {
    let indexed = StepParser::new().parse(SAMPLE).expect("parse sample");
    let scanning = StepParser::new()
        .with_inverse_index(false)
        .parse(SAMPLE)
        .expect("parse sample");
    let storey = EntityId(138);

    c.bench_function("inverse/indexed", |b| {
        b.iter(|| black_box(indexed.inverse(storey, RelationshipKind::ContainedInSpatialStructure)));
    });

    c.bench_function("inverse/scan", |b| {
        b.iter(|| black_box(scanning.inverse(storey, RelationshipKind::ContainedInSpatialStructure)));
    });
}

criterion_group!(benches, bench_load, bench_inverse_lookup);
criterion_main!(benches);
