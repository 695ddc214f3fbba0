#![allow(dead_code)]

use chrono::{DateTime, Local, TimeZone};
use std::collections::VecDeque;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use stampr::console::Console;
use stampr::{Error, Result};

pub fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(y, mo, d, h, mi, s)
        .single()
        .expect("unambiguous local time")
}

/// 2024-03-05 14:30:00 local time.
pub fn march_fifth() -> DateTime<Local> {
    local(2024, 3, 5, 14, 30, 0)
}

/// Create `dir/name` and pin its modification time.
pub fn touch(dir: &Path, name: &str, modified: DateTime<Local>) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, name).unwrap();
    let time: SystemTime = modified.into();
    File::options()
        .write(true)
        .open(&path)
        .unwrap()
        .set_modified(time)
        .unwrap();
    path
}

pub fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Console that answers prompts from a script and records everything shown.
#[derive(Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    pub lines: Vec<String>,
    pub prompts: Vec<String>,
}

impl ScriptedConsole {
    pub fn answering(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| format!("{}\n", a)).collect(),
            ..Self::default()
        }
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, line: &str) -> Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }

    fn prompt(&mut self, message: &str) -> Result<String> {
        self.prompts.push(message.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| Error::console_read_failed(None))
    }
}
