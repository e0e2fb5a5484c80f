use crate::core::{Pipeline, Result};
use crate::utils::monitor::SystemMonitor;

pub struct CheckEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> CheckEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        println!("Starting domain check...");

        // Extract
        println!("Reading domain list...");
        let domains = self.pipeline.extract().await?;
        println!("Read {} domains", domains.len());
        self.monitor.log_stats("Extract");

        // Transform
        println!("Classifying domains...");
        let result = self.pipeline.transform(domains).await?;
        println!("Classified {} domains", result.records.len());
        self.monitor.log_stats("Classify");

        // Load
        println!("Writing result buckets...");
        let output_path = self.pipeline.load(result).await?;
        println!("Output saved to: {}", output_path);
        self.monitor.log_stats("Load");

        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
