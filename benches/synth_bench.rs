//! Synthesis Benchmark
//!
//! Measures dispatch throughput (members/sec) over a component-sized batch of
//! descriptors.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use declass::{Expr, MemberDescriptor, Modifier, SynthesisOptions, create_instance_prop_decorators};

// =============================================================================
// Test Members
// =============================================================================

fn component_members(options: &SynthesisOptions) -> Vec<MemberDescriptor> {
    vec![
        MemberDescriptor::from_raw_names(["computed"], options)
            .with_call_args(vec![
                Expr::string("firstName"),
                Expr::string("lastName"),
                Expr::func(vec![], "{ return `${this.firstName} ${this.lastName}`; }"),
            ])
            .with_modifier(Modifier::bare("readOnly")),
        MemberDescriptor::from_raw_names(["className"], options).with_prop_list(["is-active"]),
        MemberDescriptor::from_raw_names(["attribute"], options),
        MemberDescriptor::from_raw_names(["action"], options),
        MemberDescriptor::from_raw_names(["alias"], options)
            .with_call_args(vec![Expr::string("model.name")]),
        MemberDescriptor::from_raw_names(["computed"], options)
            .with_call_args(vec![Expr::func(vec![], "{ return Date.now(); }")])
            .volatile_read_only(),
    ]
}

fn bench_dispatch(c: &mut Criterion) {
    let options = SynthesisOptions::default();
    let base = component_members(&options);
    let mut group = c.benchmark_group("dispatch");

    for copies in [1usize, 16, 256] {
        let members: Vec<MemberDescriptor> = base
            .iter()
            .cycle()
            .take(base.len() * copies)
            .cloned()
            .collect();
        group.throughput(Throughput::Elements(members.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(members.len()), &members, |b, members| {
            b.iter(|| {
                for member in members {
                    black_box(create_instance_prop_decorators(black_box(member)));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
