use crate::domain::model::ClassifyResult;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn append_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_file(&self) -> &str;
    fn output_path(&self) -> &str;
    fn append(&self) -> bool;
    fn probe_count(&self) -> u32;
}

/// Network reachability checker. The production implementation shells out to
/// the system `ping`; tests substitute a fake so classification logic runs
/// without touching the network.
///
/// Returns `Err` only when the probe could not be carried out at all
/// (spawn/environment failure). A probe that ran and came back negative is
/// `Ok(false)`, not an error.
pub trait Prober: Send + Sync {
    fn is_reachable(&self, domain: &str)
        -> impl std::future::Future<Output = Result<bool>> + Send;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<String>>;
    async fn transform(&self, domains: Vec<String>) -> Result<ClassifyResult>;
    async fn load(&self, result: ClassifyResult) -> Result<String>;
}
