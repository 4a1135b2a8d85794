pub mod files;
pub mod storage;
pub mod store;

pub use files::{config_file, ensure_data_dir, init_local_data_dir, logs_dir};
pub use storage::FileStorage;
pub use store::Store;
