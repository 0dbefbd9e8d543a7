use anyhow::{Context, Result, bail};
use std::process::{Command, Stdio};

/// Hands a URI to whatever application the OS has registered for its scheme.
pub trait UriOpener {
    fn open(&mut self, uri: &str) -> Result<()>;
}

impl<O: UriOpener + ?Sized> UriOpener for Box<O> {
    fn open(&mut self, uri: &str) -> Result<()> {
        (**self).open(uri)
    }
}

/// Spawns the platform opener (or a configured command) without waiting on it.
#[derive(Debug, Clone)]
pub struct SystemOpener {
    program: String,
    args: Vec<String>,
}

impl SystemOpener {
    pub fn new() -> Self {
        let (program, args): (&str, &[&str]) = if cfg!(target_os = "macos") {
            ("open", &[])
        } else if cfg!(windows) {
            ("cmd", &["/C", "start", ""])
        } else {
            ("xdg-open", &[])
        };

        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Use `command` (split on whitespace) instead of the platform default.
    pub fn with_command(command: &str) -> Self {
        let mut parts = command.split_whitespace().map(String::from);
        match parts.next() {
            Some(program) => Self {
                program,
                args: parts.collect(),
            },
            None => Self::new(),
        }
    }

    pub fn from_config(command: Option<&str>) -> Self {
        match command {
            Some(cmd) => Self::with_command(cmd),
            None => Self::new(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Default for SystemOpener {
    fn default() -> Self {
        Self::new()
    }
}

impl UriOpener for SystemOpener {
    fn open(&mut self, uri: &str) -> Result<()> {
        if uri.is_empty() {
            bail!("Refusing to open an empty URI");
        }

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(uri)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to launch {}", self.program))?;

        // Reap in the background; the result of the external app is not our concern.
        std::thread::spawn(move || {
            let _ = child.wait();
        });

        Ok(())
    }
}
