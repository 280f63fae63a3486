use bank_ledger::run::run;

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "operations.csv".to_string());
    let input = std::fs::File::open(path).expect("cannot open the operations file");

    run(input, std::io::stdout()).expect("failed to write the balances");
}
