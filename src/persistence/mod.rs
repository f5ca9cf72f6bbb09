pub mod files;
pub mod kv;
pub mod tasks;

pub use files::{
    config_file, ensure_dir, init_data_dir, init_local_data_dir, log_file, resolve_data_dir,
};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use tasks::{load_tasks, save_tasks};
