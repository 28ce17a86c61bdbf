use crate::domain::model::LatticeSource;
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn lattice_source(&self) -> Result<LatticeSource>;
    fn energy_j(&self) -> i64;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
}
