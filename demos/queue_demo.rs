use queuesim::{
    expected_wait_mmn, run_replications, ConcurrencyMode, Discipline, ServiceModel,
    SimulationConfig, SimulationParams, SimulationRun,
};

const CUSTOMERS: u64 = 50_000;
const LOAD: f64 = 0.9;
const SERVICE_RATE: f64 = 1.0;

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .init();

    println!("Queueing station comparison");
    println!("  customers={} rho={} mu={}", CUSTOMERS, LOAD, SERVICE_RATE);
    println!();

    let stations = [
        ("M/M/n", Discipline::Fifo, ServiceModel::Exponential),
        ("M/D/n", Discipline::Fifo, ServiceModel::Deterministic),
        (
            "M/H2/n",
            Discipline::Fifo,
            ServiceModel::HyperExponential {
                rates: [1.0, 1.0 / 5.0],
                p: 0.75,
            },
        ),
        ("M/M/n SJF", Discipline::ShortestServiceFirst, ServiceModel::Exponential),
    ];

    for servers in [1, 2, 4] {
        let reference = expected_wait_mmn(LOAD, SERVICE_RATE, servers)?;
        println!("n={} (M/M/n closed form: {:.4})", servers, reference);

        for (label, discipline, model) in stations {
            let params = SimulationParams::new(CUSTOMERS, LOAD, SERVICE_RATE, servers)
                .with_discipline(discipline)
                .with_service_model(model)
                .with_seed(1);
            let waits = SimulationRun::new(params)?.run()?;
            println!(
                "  {:<10} {} waits, mean {:.4}",
                label,
                waits.len(),
                mean(waits.as_slice())
            );
        }
    }

    println!();
    let seeds: Vec<u64> = (1..=8).collect();
    let config = SimulationConfig::new().with_concurrency(ConcurrencyMode::Rayon);
    let params = SimulationParams::new(CUSTOMERS, LOAD, SERVICE_RATE, 1);
    let logs = run_replications(&params, &seeds, &config)?;
    for (seed, log) in seeds.iter().zip(&logs) {
        println!("  M/M/1 seed {}: mean {:.4}", seed, mean(log.as_slice()));
    }

    Ok(())
}
