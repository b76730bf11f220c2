//! `device`: what this machine is.

use std::env;
use std::thread;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub os: String,
    pub family: String,
    pub arch: String,
    pub cpus: Option<usize>,
    pub user: Option<String>,
}

impl DeviceInfo {
    pub fn collect() -> Self {
        let user = env::var("USER")
            .ok()
            .or_else(|| env::var("USERNAME").ok())
            .filter(|u| !u.trim().is_empty());
        Self {
            os: env::consts::OS.to_string(),
            family: env::consts::FAMILY.to_string(),
            arch: env::consts::ARCH.to_string(),
            cpus: thread::available_parallelism().ok().map(|n| n.get()),
            user,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            "Device information:".to_string(),
            format!("  OS: {}", self.os),
            format!("  Family: {}", self.family),
            format!("  Architecture: {}", self.arch),
        ];
        if let Some(n) = self.cpus {
            lines.push(format!("  Logical CPUs: {n}"));
        }
        if let Some(user) = &self.user {
            lines.push(format!("  User: {user}"));
        }
        lines
    }
}
