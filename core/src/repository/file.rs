use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ScheduleError, ScheduleResult};
use crate::model::schedule::Schedule;
use crate::repository::traits::ScheduleRepository;

const DEFAULT_DIR_NAME: &str = ".weekplan";
const DEFAULT_FILE_NAME: &str = "schedule.txt";

/// Stores a schedule as the plain text format of [`Schedule::to_lines`].
#[derive(Clone, Debug)]
pub struct FileScheduleRepository {
    file_path: PathBuf,
}

impl FileScheduleRepository {
    /// Repository for `schedule.txt` inside `base_dir`, or `~/.weekplan`
    /// when no directory is given. The directory is created if missing.
    pub fn new(base_dir: Option<PathBuf>) -> ScheduleResult<Self> {
        let dir = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir().ok_or_else(|| {
                    let source = io::Error::new(
                        io::ErrorKind::NotFound,
                        "could not determine home directory",
                    );
                    ScheduleError::persistence("~", source)
                })?;
                home_dir.join(DEFAULT_DIR_NAME)
            }
        };
        fs::create_dir_all(&dir).map_err(|e| ScheduleError::persistence(&dir, e))?;

        Ok(Self::with_path(dir.join(DEFAULT_FILE_NAME)))
    }

    /// Repository for an explicit file. Nothing is touched until load/save.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        FileScheduleRepository {
            file_path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn read_lines(&self) -> io::Result<Vec<String>> {
        let file = File::open(&self.file_path)?;
        BufReader::new(file).lines().collect()
    }

    fn write_lines(&self, lines: &[String]) -> io::Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        for line in lines {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()
    }
}

impl ScheduleRepository for FileScheduleRepository {
    fn load(&self) -> ScheduleResult<Option<Schedule>> {
        let lines = match self.read_lines() {
            Ok(lines) => lines,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.file_path.display(), "no schedule file yet");
                return Ok(None);
            }
            Err(e) => return Err(ScheduleError::persistence(&self.file_path, e)),
        };

        let schedule = Schedule::from_lines(&lines)?;
        debug!(
            path = %self.file_path.display(),
            activities = schedule.len(),
            "schedule file parsed"
        );
        Ok(Some(schedule))
    }

    fn save(&self, schedule: &Schedule) -> ScheduleResult<()> {
        self.write_lines(&schedule.to_lines())
            .map_err(|e| ScheduleError::persistence(&self.file_path, e))?;
        info!(
            path = %self.file_path.display(),
            activities = schedule.len(),
            "schedule saved"
        );
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.file_path.clone()
    }
}
