//! External editor integration for journal notes

use crate::error::{MoodlogError, Result};
use std::fs;
use std::path::Path;
use std::process::Command;

/// Runs the user's editor on a draft file and reads the result back
pub struct EditorSession {
    command: String,
}

impl EditorSession {
    pub fn new(editor_command: String) -> Self {
        EditorSession {
            command: editor_command,
        }
    }

    /// Seed `draft` with `initial`, block until the editor exits, return the edited text.
    ///
    /// The draft file is removed afterwards. Trailing whitespace is trimmed.
    pub fn edit(&self, draft: &Path, initial: &str) -> Result<String> {
        fs::write(draft, initial)?;

        let outcome = self.run(draft);
        let edited = outcome.and_then(|_| fs::read_to_string(draft).map_err(MoodlogError::from));

        if let Err(e) = fs::remove_file(draft) {
            log::debug!("could not remove draft {}: {}", draft.display(), e);
        }

        Ok(edited?.trim_end().to_string())
    }

    fn run(&self, file_path: &Path) -> Result<()> {
        let (program, mut args) = self.parse_command();
        args.push(file_path.to_string_lossy().to_string());

        // On Windows, go through cmd so .bat and .cmd editors resolve
        #[cfg(windows)]
        let status = Command::new("cmd")
            .arg("/C")
            .arg(&program)
            .args(&args)
            .status();

        #[cfg(not(windows))]
        let status = Command::new(&program).args(&args).status();

        let status = status.map_err(|e| {
            MoodlogError::Editor(format!("Failed to launch editor '{}': {}", program, e))
        })?;

        if !status.success() {
            return Err(MoodlogError::Editor(format!(
                "Editor '{}' exited with {}",
                program, status
            )));
        }

        Ok(())
    }

    /// Split the command into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let mut parts = self.command.split_whitespace().map(str::to_string);

        match parts.next() {
            Some(program) => (program, parts.collect()),
            None if cfg!(windows) => ("notepad".to_string(), vec![]),
            None => ("nano".to_string(), vec![]),
        }
    }
}
