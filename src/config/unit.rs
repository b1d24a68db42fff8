//! Unit file generation for systemd
//!
//! Renders the fixed `[Unit]`/`[Service]`/`[Install]` template for a
//! [`ServiceSpec`].

use std::path::{Path, PathBuf};

use super::spec::ServiceSpec;

/// Directory systemd reads system unit files from
pub const SERVICE_DIR: &str = "/etc/systemd/system";

pub const RESTART_SEC: u32 = 5;

pub fn unit_file_name(name: &str) -> String {
    format!("{}.service", name)
}

pub fn unit_path(service_dir: &Path, name: &str) -> PathBuf {
    service_dir.join(unit_file_name(name))
}

pub fn render_unit(spec: &ServiceSpec) -> String {
    let working_dir = if spec.working_dir.is_empty() {
        String::new()
    } else {
        format!("WorkingDirectory={}\n", spec.working_dir)
    };

    format!(
        r#"[Unit]
Description={description}

[Service]
Type=simple
ExecStart={exec}
Restart={restart}
RestartSec={restart_sec}
{working_dir}
[Install]
WantedBy=multi-user.target
"#,
        description = spec.description,
        exec = spec.exec_path,
        restart = spec.restart_policy,
        restart_sec = RESTART_SEC,
        working_dir = working_dir,
    )
}
