pub mod assign;
pub mod config;
pub mod context;
pub mod generate;
pub mod init;

pub use assign::{assign_output, run_assign, run_assign_impl};
pub use config::{format_config, run_config, run_config_show_impl, run_config_validate_impl};
pub use generate::{generate_output, run_generate, run_generate_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
