/*!
 * Simulation Benchmarks
 *
 * Cost of a single run per policy and of the event sink and averaging paths.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use schedsim::scheduler::{simulate, EventLog, NullSink};
use schedsim::{Policy, ProcessDefinition, ScenarioId, SimConfig, Simulation, Workload};

/// Synthetic workload with `n` processes and an I/O burst every 2 units of CPU
fn synthetic(n: usize) -> Workload {
    let processes = (0..n)
        .map(|i| {
            let demand = 4.0 + (i % 7) as f64;
            let io = (1..demand as usize / 2)
                .map(|k| schedsim::IoEvent::new(k as f64 * 2.0, 0.1 * (k % 3 + 1) as f64))
                .collect();
            ProcessDefinition::new(format!("P{i}"), demand, io)
        })
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    Workload::new("synthetic", processes).unwrap()
}

/// Benchmark: one run of every policy on every built-in scenario
fn bench_builtin_scenarios(c: &mut Criterion) {
    let config = SimConfig::default();

    for id in ScenarioId::all() {
        let workload = id.workload().unwrap();
        let mut group = c.benchmark_group(format!("simulate/scenario_{id}"));

        for policy in Policy::ALL {
            let scheduler = policy.scheduler(&config);
            group.bench_with_input(
                BenchmarkId::from_parameter(policy),
                workload.processes(),
                |b, defs| b.iter(|| black_box(simulate(scheduler.as_ref(), defs, &mut NullSink))),
            );
        }

        group.finish();
    }
}

/// Benchmark: scaling with process count
fn bench_process_count(c: &mut Criterion) {
    let config = SimConfig::default();
    let mut group = c.benchmark_group("simulate/process_count");

    for n in [8, 64, 256].iter() {
        let workload = synthetic(*n);
        for policy in [Policy::RoundRobin, Policy::Mlfq] {
            let scheduler = policy.scheduler(&config);
            group.bench_with_input(
                BenchmarkId::new(policy.as_str(), n),
                workload.processes(),
                |b, defs| b.iter(|| black_box(simulate(scheduler.as_ref(), defs, &mut NullSink))),
            );
        }
    }

    group.finish();
}

/// Benchmark: recording every event versus discarding them
fn bench_event_log(c: &mut Criterion) {
    let workload = synthetic(64);
    let scheduler = Policy::Mlfq.scheduler(&SimConfig::default());

    c.bench_function("events/null_sink", |b| {
        b.iter(|| black_box(simulate(scheduler.as_ref(), workload.processes(), &mut NullSink)))
    });

    c.bench_function("events/event_log", |b| {
        b.iter(|| {
            let mut log = EventLog::new();
            let outcome = simulate(scheduler.as_ref(), workload.processes(), &mut log);
            black_box((outcome, log.len()))
        })
    });
}

/// Benchmark: repeated runs with averaging
fn bench_repeated_runs(c: &mut Criterion) {
    let workload = ScenarioId::new(2).unwrap().workload().unwrap();
    let config = SimConfig::builder().with_repeat(10).build().unwrap();
    let sim = Simulation::new(workload, config);

    c.bench_function("runner/rr_repeat_10", |b| {
        b.iter(|| black_box(sim.run(Policy::RoundRobin).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_builtin_scenarios,
    bench_process_count,
    bench_event_log,
    bench_repeated_runs,
);

criterion_main!(benches);
