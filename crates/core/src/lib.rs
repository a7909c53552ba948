mod config;
mod formula;
mod ignore;
mod scan;
mod traverse;

pub use config::{
    app_paths, load_config, load_config_from, AppConfig, AppPaths, DEFAULT_PAD_WIDTH,
    DEFAULT_START,
};
pub use formula::{Formula, FormulaError, CURRENT_TOKEN, INCREMENT_TOKEN};
pub use ignore::{split_entries, IgnoreList};
pub use scan::{list_files, read_entries, DirEntries};
pub use traverse::{run_naming, run_rollback, NamingScope, RunOptions};
