use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use reckon_calculator::{AllowList, Calculator, Operand, Operation};

fn bench_operations(c: &mut Criterion) {
    let calc = Calculator::new(AllowList::new(["user1"]));
    let mut group = c.benchmark_group("operations");

    for op in Operation::ALL {
        let args: Vec<Operand> = match op.arity() {
            1 => vec![Operand::Integer(1_000)],
            _ => vec![Operand::Integer(12), Operand::Float(3.5)],
        };
        group.bench_with_input(BenchmarkId::new("evaluate", op), &args, |b, args| {
            b.iter(|| {
                let _ = black_box(calc.evaluate(op, black_box(args)));
            });
        });
    }
    group.finish();
}

fn bench_type_rejection(c: &mut Criterion) {
    let calc = Calculator::new(AllowList::new(["user1"]));
    c.bench_function("add_rejects_string", |b| {
        b.iter(|| black_box(calc.add(black_box("2"), black_box(2))).is_err());
    });
}

criterion_group!(benches, bench_operations, bench_type_rejection);
criterion_main!(benches);
