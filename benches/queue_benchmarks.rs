use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use natqueue::Queue;

fn words(n: usize) -> Vec<String> {
  // a fixed permutation, so every run sorts the same input.
  (0..n).map(|i| format!("item{}", (i * 7919) % n)).collect()
}

fn filled(words: &[String]) -> Queue {
  let mut queue = Queue::new();
  queue.extend(words.iter().map(String::as_str));
  queue
}

/// benchmark: insert at the tail, then drain from the head
fn bench_insert_remove(c: &mut Criterion) {
  let mut group = c.benchmark_group("insert_remove");

  for size in [1_000, 10_000, 100_000] {
    let words = words(size);
    group.throughput(Throughput::Elements(size as u64));
    group.bench_with_input(BenchmarkId::from_parameter(size), &words, |b, words| {
      b.iter(|| {
        let mut queue = filled(words);
        let mut buf = [0u8; 16];
        while queue.pop_front_into(Some(&mut buf)).is_ok() {
          black_box(&buf);
        }
      });
    });
  }
  group.finish();
}

/// benchmark: in-place reversal
fn bench_reverse(c: &mut Criterion) {
  let mut group = c.benchmark_group("reverse");

  for size in [1_000, 10_000, 100_000] {
    let mut queue = filled(&words(size));
    group.throughput(Throughput::Elements(size as u64));
    group.bench_function(BenchmarkId::from_parameter(size), |b| {
      b.iter(|| black_box(&mut queue).reverse());
    });
  }
  group.finish();
}

/// benchmark: natural-order merge sort of a shuffled queue
fn bench_sort(c: &mut Criterion) {
  let mut group = c.benchmark_group("sort");

  for size in [1_000, 10_000, 100_000] {
    let words = words(size);
    group.throughput(Throughput::Elements(size as u64));
    group.bench_with_input(BenchmarkId::from_parameter(size), &words, |b, words| {
      b.iter_batched(
        || filled(words),
        |mut queue| {
          queue.sort();
          queue
        },
        criterion::BatchSize::LargeInput,
      );
    });
  }
  group.finish();
}

criterion_group!(benches, bench_insert_remove, bench_reverse, bench_sort);

criterion_main!(benches);
