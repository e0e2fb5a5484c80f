use serde::Serialize;

use crate::core::{
    ClassifiedDomain, ClassifyResult, ConfigProvider, Label, Pipeline, Prober, Result, Storage,
};

pub const CN_FILE: &str = "direct_cn";
pub const OK_FILE: &str = "direct_ok";
pub const FAIL_FILE: &str = "direct_fail";
pub const SUMMARY_FILE: &str = "summary.json";

pub struct DirectPipeline<S: Storage, C: ConfigProvider, N: Prober> {
    storage: S,
    config: C,
    prober: N,
}

impl<S: Storage, C: ConfigProvider, N: Prober> DirectPipeline<S, C, N> {
    pub fn new(storage: S, config: C, prober: N) -> Self {
        Self {
            storage,
            config,
            prober,
        }
    }
}

/// One-run report written alongside the bucket files.
#[derive(Debug, Serialize)]
struct RunSummary<'a> {
    input_file: &'a str,
    mode: &'a str,
    generated_at: chrono::DateTime<chrono::Utc>,
    cn: usize,
    ok: usize,
    fail: usize,
    total: usize,
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, N: Prober> Pipeline for DirectPipeline<S, C, N> {
    async fn extract(&self) -> Result<Vec<String>> {
        tracing::debug!("Reading domain list from: {}", self.config.input_file());
        let data = self.storage.read_file(self.config.input_file()).await?;

        // 與原始行為一致:不過濾空行,不修剪空白
        let domains: Vec<String> = String::from_utf8_lossy(&data)
            .lines()
            .map(str::to_string)
            .collect();

        Ok(domains)
    }

    async fn transform(&self, domains: Vec<String>) -> Result<ClassifyResult> {
        let mut records = Vec::with_capacity(domains.len());
        let mut cn_output = String::new();
        let mut ok_output = String::new();
        let mut fail_output = String::new();

        // 按文件順序逐個處理,一次一個探測
        for domain in domains {
            let label = if domain.ends_with(".cn") {
                Label::Cn
            } else if self.prober.is_reachable(&domain).await? {
                Label::Ok
            } else {
                Label::Fail
            };

            tracing::info!("{} -> {}", domain, label);

            match label {
                Label::Cn => {
                    cn_output.push_str(&domain);
                    cn_output.push('\n');
                }
                Label::Ok => {
                    ok_output.push_str(&domain);
                    ok_output.push('\n');
                }
                Label::Fail => {
                    fail_output.push_str(&domain);
                    fail_output.push('\n');
                }
            }

            records.push(ClassifiedDomain { domain, label });
        }

        Ok(ClassifyResult {
            records,
            cn_output,
            ok_output,
            fail_output,
        })
    }

    async fn load(&self, result: ClassifyResult) -> Result<String> {
        let append = self.config.append();
        tracing::debug!(
            "Writing buckets ({} mode) to: {}",
            if append { "append" } else { "overwrite" },
            self.config.output_path()
        );

        let buckets = [
            (CN_FILE, result.cn_output.as_bytes()),
            (OK_FILE, result.ok_output.as_bytes()),
            (FAIL_FILE, result.fail_output.as_bytes()),
        ];

        for (name, body) in buckets {
            if append {
                self.storage.append_file(name, body).await?;
            } else {
                self.storage.write_file(name, body).await?;
            }
        }

        // summary 描述單次運行,追加模式下也覆蓋
        let summary = RunSummary {
            input_file: self.config.input_file(),
            mode: if append { "append" } else { "overwrite" },
            generated_at: chrono::Utc::now(),
            cn: result.count(Label::Cn),
            ok: result.count(Label::Ok),
            fail: result.count(Label::Fail),
            total: result.records.len(),
        };
        let summary_json = serde_json::to_string_pretty(&summary)?;
        self.storage
            .write_file(SUMMARY_FILE, summary_json.as_bytes())
            .await?;

        Ok(self.config.output_path().to_string())
    }
}
