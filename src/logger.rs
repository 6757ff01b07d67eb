use anyhow::Result;
use chrono::Local;
use colored::*;
use std::{fs::{self, File}, io::Write, path::PathBuf};

/// Writes one numbered `devlog(N).txt` per counting phase and echoes it to the console.
pub struct DevLogger {
    dir: Option<PathBuf>,
    color: bool,
    step: bool,
    max_logs: usize,
    counter: usize,
}

impl DevLogger {
    pub fn new(dir: impl Into<PathBuf>, color: bool, step: bool, max_logs: usize) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir: Some(dir), color, step, max_logs, counter: 0 })
    }

    /// Logger that neither writes files nor prints.
    pub fn silent() -> Self { Self { dir: None, color: false, step: false, max_logs: 0, counter: 0 } }

    pub fn written(&self) -> usize { self.counter }

    pub fn log(&mut self, title: &str, details: &str) -> Result<()> {
        let Some(dir) = &self.dir else { return Ok(()) };
        if self.max_logs != 0 && self.counter >= self.max_logs { return Ok(()); }
        self.counter += 1;
        let path = dir.join(format!("devlog({}).txt", self.counter));

        let ts = Local::now().format("%Y-%m-%d %H:%M:%S");
        let mut f = File::create(&path)?;
        writeln!(f, "[{}] {}\n\n{}", ts, title, details)?;

        if self.color {
            println!("{} {}\n{}", "➤".blue().bold(), title.bold(), details);
        } else {
            println!("➤ {}\n{}", title, details);
        }

        if self.step {
            print!("-- press Enter to continue --");
            use std::io::{self, Write as _};
            io::stdout().flush().ok();
            let mut s = String::new();
            io::stdin().read_line(&mut s).ok();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_files_capped() {
        let dir = std::env::temp_dir().join(format!("gridwalk_logger_{}", std::process::id()));
        let mut logger = DevLogger::new(&dir, false, false, 2).unwrap();
        for i in 0..4 { logger.log("phase", &format!("entry {i}")).unwrap(); }
        assert_eq!(logger.written(), 2);
        let second = fs::read_to_string(dir.join("devlog(2).txt")).unwrap();
        assert!(second.contains("phase\n\nentry 1"));
        assert!(!dir.join("devlog(3).txt").exists());
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn silent_logger_writes_nothing() {
        let mut logger = DevLogger::silent();
        logger.log("phase", "ignored").unwrap();
        assert_eq!(logger.written(), 0);
    }
}
