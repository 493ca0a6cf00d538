//! Benchmarks the rewrite loop on a handful of representative programs:
//! plain text passthrough, a recursive form expansion, and segmentation +
//! substitution.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use trac::{BatchSource, BufSink, Interpreter};

fn run(program: &str) -> String {
    let source = Box::new(BatchSource::new(program));
    let sink = Box::new(BufSink::default());
    let mut interp = Interpreter::new(source, sink);
    interp.run();
    String::new()
}

fn bench_plain_text(c: &mut Criterion) {
    let program = "hello world, this is plain text with no calls at all'";
    c.bench_function("plain_text_passthrough", |b| {
        b.iter(|| run(black_box(program)))
    });
}

fn bench_factorial(c: &mut Criterion) {
    let program = "#(ds,Factorial,(#(eq,X,1,1,(#(ml,X,#(cl,Factorial,#(su,X,1)))))))'\
                    #(ss,Factorial,X)'#(cl,Factorial,20)'";
    c.bench_function("recursive_factorial_expansion", |b| {
        b.iter(|| run(black_box(program)))
    });
}

fn bench_segmentation(c: &mut Criterion) {
    let program = "#(ds,F,abXcdYefXghYij)'#(ss,F,X,Y)'#(cl,F,1,2)'";
    c.bench_function("segmentation_and_cl", |b| {
        b.iter(|| run(black_box(program)))
    });
}

criterion_group!(benches, bench_plain_text, bench_factorial, bench_segmentation);
criterion_main!(benches);
