use bangalore_traffic::{AnalyzerConfig, BangaloreTrafficAnalyzer};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut analyzer = BangaloreTrafficAnalyzer::new(AnalyzerConfig::default());
    if let Err(e) = analyzer.run_analysis() {
        eprintln!("An error occurred during Bangalore traffic analysis: {}", e);
    }
}
