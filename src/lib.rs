pub mod angles;
pub mod decomposition;
pub mod order;
pub mod transforms;

pub use angles::EulerAngles;
pub use decomposition::EulerDecomposition;
pub use order::EulerOrder;
