//! Service parameters collected for a single registration.

use std::fmt;

/// Restart behaviour written to the unit's `Restart=` key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RestartPolicy {
    #[default]
    Always,
    OnFailure,
    No,
}

impl RestartPolicy {
    /// Value as systemd expects it in `Restart=`
    pub fn as_str(&self) -> &'static str {
        match self {
            RestartPolicy::Always => "always",
            RestartPolicy::OnFailure => "on-failure",
            RestartPolicy::No => "no",
        }
    }

    /// Map a restart menu choice. Empty input selects the default.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "" | "1" => Some(RestartPolicy::Always),
            "2" => Some(RestartPolicy::OnFailure),
            "3" => Some(RestartPolicy::No),
            _ => None,
        }
    }
}

impl fmt::Display for RestartPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything needed to render one unit file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServiceSpec {
    /// Unit name without the `.service` suffix
    pub name: String,
    pub description: String,
    /// Full command line for `ExecStart=`
    pub exec_path: String,
    pub restart_policy: RestartPolicy,
    /// Empty means no `WorkingDirectory=` line
    pub working_dir: String,
}

impl ServiceSpec {
    pub fn new(name: impl Into<String>, exec_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exec_path: exec_path.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_restart_policy(mut self, policy: RestartPolicy) -> Self {
        self.restart_policy = policy;
        self
    }

    pub fn with_working_dir(mut self, dir: impl Into<String>) -> Self {
        self.working_dir = dir.into();
        self
    }

    /// First whitespace-delimited token of the command line
    pub fn command(&self) -> Option<&str> {
        self.exec_path.split_whitespace().next()
    }
}
