use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use flowshop::memetic::{update_population, MemeticOptions};
use flowshop::neighborhood::{create_insert_neighbors, create_swap_neighbors};
use flowshop::operators::initial::initial_pop;
use flowshop::schedule::makespan;
use flowshop::Flowshop;
use taillard_parser::parse_taillard;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("memetic");
    group.sample_size(50);
    group.sampling_mode(criterion::SamplingMode::Flat);

    let contents = std::fs::read_to_string("../demos/ta20_5.txt").unwrap();
    let instance = parse_taillard(contents.as_str()).unwrap();
    let flowshop = Flowshop::new(&instance);

    let sequence: Vec<usize> = (0..flowshop.jobs()).collect();
    group.bench_function("makespan/ta20_5", |b| {
        b.iter(|| makespan(&flowshop, &sequence))
    });

    let swap_neighbors = create_swap_neighbors(&flowshop);
    let insert_neighbors = create_insert_neighbors(&flowshop);

    for use_ls in [false, true] {
        let options = MemeticOptions {
            pop_init_size: 20,
            use_ls,
            ..Default::default()
        };
        let population = initial_pop(
            &flowshop,
            options.random_prop,
            options.deter_prop,
            options.best_deter,
            options.pop_init_size,
        );

        group.bench_with_input(
            BenchmarkId::new(
                "generation",
                if use_ls { "memetic" } else { "genetic" },
            ),
            &options,
            |b, options| {
                b.iter(|| {
                    update_population(
                        &flowshop,
                        population.clone(),
                        options,
                        &swap_neighbors,
                        &insert_neighbors,
                    )
                    .unwrap()
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
