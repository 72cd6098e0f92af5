use std::hint::black_box;

use callq_foundation::{DynArray, Queue, Result, Stack};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn filled_array(size: usize) -> Result<DynArray<usize>> {
    let mut array = DynArray::new();
    for value in 0..size {
        array.push_back(black_box(value))?;
    }
    Ok(array)
}

fn primed_queue(depth: u64) -> Result<Queue<u64>> {
    let mut queue = Queue::new();
    for value in 0..depth {
        queue.enqueue(value)?;
    }
    Ok(queue)
}

fn benchmark_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("dynarray_append");

    for size in [16usize, 1_024, 65_536] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| black_box(filled_array(size)));
        });
    }

    group.finish();
}

fn benchmark_queue_steady_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_steady_state");

    group.bench_function("enqueue_dequeue_depth_64", |b| {
        let Ok(mut queue) = primed_queue(64) else {
            return;
        };
        let mut next = 64u64;
        b.iter(|| {
            let front = queue.dequeue();
            let appended = queue.enqueue(black_box(next));
            next += 1;
            black_box((front, appended))
        });
    });

    group.finish();
}

fn benchmark_stack_push_pop(c: &mut Criterion) {
    c.bench_function("stack_push_pop_1024", |b| {
        b.iter(|| {
            let mut stack = Stack::new();
            for value in 0..1_024u32 {
                stack.push(black_box(value));
            }
            while let Some(value) = stack.try_pop() {
                black_box(value);
            }
        });
    });
}

criterion_group!(
    benches,
    benchmark_append,
    benchmark_queue_steady_state,
    benchmark_stack_push_pop
);
criterion_main!(benches);
