//! Engine round benchmarks.
//!
//! Measures single rounds and full fixpoint runs over synthetic modules of
//! growing size.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use squash_ast::{Expr, Module, Pattern, Stmt, VarKind};
use squash_optimizer::{OptionSet, optimize, optimize_to_fixpoint};

/// One function exercising most passes:
///
/// ```js
/// var handlerN = function (firstArgument, secondArgument) {
///     var unusedLocal = 1000000;
///     debugger;
///     if (firstArgument) { return secondArgument; } else { return undefined; }
/// };
/// ```
fn handler(index: usize) -> Stmt {
    let body = vec![
        Stmt::var(VarKind::Var, "unusedLocal", Some(Expr::num("1000000"))),
        Stmt::Debugger,
        Stmt::if_else(
            Expr::ident("firstArgument"),
            Stmt::block(vec![Stmt::ret(Expr::ident("secondArgument"))]),
            Some(Stmt::block(vec![Stmt::ret(Expr::ident("undefined"))])),
        ),
    ];
    let func = Expr::func(
        vec![
            Pattern::ident("firstArgument"),
            Pattern::ident("secondArgument"),
        ],
        body,
    );
    Stmt::var(VarKind::Var, format!("handler{index}"), Some(func))
}

fn synthetic_module(functions: usize) -> Module {
    Module {
        body: (0..functions).map(handler).collect(),
    }
}

fn bench_single_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize_round");
    for size in [10, 100, 1000] {
        let module = synthetic_module(size);
        group.bench_with_input(BenchmarkId::new("all_passes", size), &module, |b, module| {
            b.iter_batched(
                || module.clone(),
                |mut module| {
                    let stats = optimize(&mut module, OptionSet::all());
                    black_box(stats)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_fixpoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize_fixpoint");
    for size in [10, 100, 1000] {
        let module = synthetic_module(size);
        group.bench_with_input(BenchmarkId::new("all_passes", size), &module, |b, module| {
            b.iter_batched(
                || module.clone(),
                |mut module| {
                    let rounds = optimize_to_fixpoint(&mut module, OptionSet::all());
                    black_box(rounds)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_round, bench_fixpoint);
criterion_main!(benches);
