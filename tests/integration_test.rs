use std::cell::RefCell;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use svcreg::cli::prompt::Prompter;
use svcreg::config::spec::{RestartPolicy, ServiceSpec};
use svcreg::config::unit::render_unit;
use svcreg::error::RegistrarError;
use svcreg::service::error::SupervisorError;
use svcreg::service::lookup::ExecutableLookup;
use svcreg::service::registrar::Registrar;
use svcreg::service::supervisor::{ActivationStep, Supervisor, Systemctl};
use tempfile::TempDir;

struct Resolves(bool);

impl ExecutableLookup for Resolves {
    fn resolve(&self, command: &str) -> Option<PathBuf> {
        self.0.then(|| PathBuf::from(command))
    }
}

#[derive(Default)]
struct Recorder {
    calls: RefCell<Vec<String>>,
}

impl Supervisor for Recorder {
    fn run(&self, step: ActivationStep, unit: &str) -> Result<(), SupervisorError> {
        self.calls
            .borrow_mut()
            .push(format!("systemctl {}", step.args(unit).join(" ")));
        Ok(())
    }
}

fn webapp() -> ServiceSpec {
    ServiceSpec::new("webapp", "/usr/bin/myserver --port 8080")
        .with_description("My App")
        .with_restart_policy(RestartPolicy::Always)
}

/// Helper to get the binary path
fn get_svcreg_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_svcreg"))
}

#[test]
fn test_prompted_spec_is_written_and_activated() {
    let temp_dir = TempDir::new().unwrap();
    let input = "webapp\nMy App\n/usr/bin/myserver --port 8080\n/srv/app\n\n";
    let mut output = Vec::new();
    let spec = Prompter::new(input.as_bytes(), &mut output)
        .collect_spec()
        .unwrap();

    let registrar = Registrar::new()
        .with_service_dir(temp_dir.path())
        .with_supervisor(Recorder::default())
        .with_lookup(Resolves(true));
    let report = registrar.register(&spec).unwrap();
    assert!(report.activated());

    let content = fs::read_to_string(temp_dir.path().join("webapp.service")).unwrap();
    assert_eq!(content, render_unit(&spec));
    assert!(content.contains("ExecStart=/usr/bin/myserver --port 8080\n"));
    assert!(content.contains("Restart=always\n"));
    assert_eq!(content.matches("WorkingDirectory=/srv/app\n").count(), 1);
}

#[test]
fn test_create_service_twice_is_rejected_as_duplicate() {
    let temp_dir = TempDir::new().unwrap();
    let registrar = Registrar::new()
        .with_service_dir(temp_dir.path())
        .with_supervisor(Recorder::default())
        .with_lookup(Resolves(true));
    let unit = temp_dir.path().join("webapp.service");

    assert!(registrar.create_service(&webapp()));
    let first = fs::read_to_string(&unit).unwrap();

    let changed = webapp().with_working_dir("/srv/other");
    assert!(!registrar.create_service(&changed));
    assert!(matches!(
        registrar.register(&changed),
        Err(RegistrarError::AlreadyExists { .. })
    ));
    assert_eq!(fs::read_to_string(&unit).unwrap(), first);
}

#[test]
fn test_existing_unit_is_not_overwritten() {
    let temp_dir = TempDir::new().unwrap();
    let unit = temp_dir.path().join("webapp.service");
    fs::write(&unit, "[Unit]\nDescription=hand written\n").unwrap();

    let registrar = Registrar::new()
        .with_service_dir(temp_dir.path())
        .with_supervisor(Recorder::default())
        .with_lookup(Resolves(true));

    assert!(!registrar.create_service(&webapp()));
    assert_eq!(
        fs::read_to_string(&unit).unwrap(),
        "[Unit]\nDescription=hand written\n"
    );
}

#[test]
fn test_empty_fields_write_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let registrar = Registrar::new()
        .with_service_dir(temp_dir.path())
        .with_supervisor(Recorder::default())
        .with_lookup(Resolves(true));

    assert!(!registrar.create_service(&ServiceSpec::new("", "/bin/true")));
    assert!(!registrar.create_service(&ServiceSpec::new("webapp", "")));
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_unresolved_command_still_creates_service() {
    let temp_dir = TempDir::new().unwrap();
    let registrar = Registrar::new()
        .with_service_dir(temp_dir.path())
        .with_supervisor(Recorder::default())
        .with_lookup(Resolves(false));

    assert!(registrar.create_service(&webapp()));
    assert!(temp_dir.path().join("webapp.service").exists());
}

#[test]
fn test_failed_activation_keeps_unit_and_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let registrar = Registrar::new()
        .with_service_dir(temp_dir.path())
        .with_supervisor(Systemctl::with_program("false"))
        .with_lookup(Resolves(true));

    let report = registrar.register(&webapp()).unwrap();
    assert!(report.file_written);
    assert!(!report.reloaded);
    assert!(report.activation_failure.is_some());
    assert!(report.unit_path.exists());

    let other = ServiceSpec {
        name: "webapp2".to_string(),
        ..webapp()
    };
    assert!(registrar.create_service(&other));
    assert!(temp_dir.path().join("webapp2.service").exists());
}

#[test]
fn test_unreachable_supervisor_still_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let registrar = Registrar::new()
        .with_service_dir(temp_dir.path())
        .with_supervisor(Systemctl::with_program("/nonexistent/systemctl"))
        .with_lookup(Resolves(true));

    assert!(registrar.create_service(&webapp()));
    assert!(temp_dir.path().join("webapp.service").exists());
}

#[test]
#[ignore] // Needs root and a live systemd. Run with: cargo test --test integration_test -- --ignored
fn test_binary_end_to_end() {
    let mut child = Command::new(get_svcreg_binary())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run svcreg");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"svcreg-it-sleep\nsvcreg integration test\nsleep 600\n\n3\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let unit = PathBuf::from("/etc/systemd/system/svcreg-it-sleep.service");
    assert!(unit.exists());

    // Cleanup
    let _ = Command::new("systemctl")
        .args(["disable", "--now", "svcreg-it-sleep"])
        .status();
    let _ = fs::remove_file(&unit);
    let _ = Command::new("systemctl").arg("daemon-reload").status();
}

#[test]
#[ignore] // Must run as a non-root user. Run with: cargo test --test integration_test -- --ignored
fn test_binary_rejects_unprivileged_user() {
    assert!(
        !nix::unistd::Uid::effective().is_root(),
        "run this test as a non-root user"
    );
    let output = Command::new(get_svcreg_binary())
        .stdin(Stdio::null())
        .output()
        .expect("Failed to run svcreg");
    assert!(!output.status.success());
}

