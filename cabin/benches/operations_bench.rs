use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use cabin::{GridDims, NameSource, ReservationManager, SeatId};

const GRID_SIZES: &[(u16, u16)] = &[(5, 3), (10, 10), (40, 25)];
const WAITLIST_SIZES: &[usize] = &[10, 100, 1000];

struct SequentialNames {
    next: usize,
}

impl NameSource for SequentialNames {
    fn next_name(&mut self) -> String {
        let name = format!("Passenger{}", self.next);
        self.next += 1;
        name
    }
}

fn setup_manager(rows: u16, columns: u16, waitlist: usize) -> ReservationManager {
    let dims = GridDims::new(rows, columns).expect("failed to build grid dimensions");
    ReservationManager::new(dims, waitlist)
}

fn setup_booked_manager(rows: u16, columns: u16, waiting: usize) -> ReservationManager {
    let mut manager = setup_manager(rows, columns, waiting.max(1));
    let mut names = SequentialNames { next: 0 };
    manager.fill_grid(&mut names);
    if waiting > 0 {
        manager.fill_waiting_list(&mut names);
    }
    manager
}

fn bench_book_single(c: &mut Criterion) {
    c.bench_function("book_single", |b| {
        b.iter_batched(
            || setup_manager(5, 3, 10),
            |mut manager| {
                let seat = manager
                    .book_seat(SeatId::new(2, 1), "Alice")
                    .expect("booking should succeed on an empty grid");
                black_box(seat);
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_fill_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_grid");

    for &(rows, columns) in GRID_SIZES {
        let seats = usize::from(rows) * usize::from(columns);
        group.bench_with_input(
            BenchmarkId::from_parameter(seats),
            &(rows, columns),
            |b, &(rows, columns)| {
                b.iter_batched(
                    || setup_manager(rows, columns, 10),
                    |mut manager| {
                        let mut names = SequentialNames { next: 0 };
                        let assigned = manager.fill_grid(&mut names);
                        black_box(assigned);
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_cancel_with_promotion(c: &mut Criterion) {
    c.bench_function("cancel_with_promotion", |b| {
        b.iter_batched(
            || setup_booked_manager(5, 3, 10),
            |mut manager| {
                let outcome = manager
                    .cancel_seat(SeatId::new(0, 0))
                    .expect("cancellation should succeed on a booked seat");
                black_box(outcome);
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_grid_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_snapshot");

    for &(rows, columns) in GRID_SIZES {
        let seats = usize::from(rows) * usize::from(columns);
        group.bench_with_input(
            BenchmarkId::from_parameter(seats),
            &(rows, columns),
            |b, &(rows, columns)| {
                let manager = setup_booked_manager(rows, columns, 0);
                b.iter(|| {
                    let entries = manager.grid_snapshot();
                    black_box(entries);
                });
            },
        );
    }

    group.finish();
}

fn bench_waiting_list_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("waiting_list_snapshot");

    for &size in WAITLIST_SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let manager = setup_booked_manager(5, 3, size);
            b.iter(|| {
                let slots = manager.waiting_list_snapshot();
                black_box(slots);
            });
        });
    }

    group.finish();
}

criterion_group!(
    operations_bench,
    bench_book_single,
    bench_fill_grid,
    bench_cancel_with_promotion,
    bench_grid_snapshot,
    bench_waiting_list_snapshot
);
criterion_main!(operations_bench);
