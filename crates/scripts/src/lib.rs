//! Script storage and launching for kort.
//!
//! A script is a flat file: one platform header line, the body, one trailing
//! newline. Scripts live in a single directory and are launched in a new
//! terminal window.

mod launch;
mod platform;
mod store;

pub use launch::{open_folder, reap_finished, run_in_terminal, runner_script};
pub use platform::Platform;
pub use store::{
    delete_script, ensure_scripts_dir, list_scripts, read_script_body, script_file_name,
    strip_header, write_script, ScriptEntry,
};
