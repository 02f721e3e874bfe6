//! POSIX network retrieval

use crate::models::NativeCommand;
use crate::platform::traits::NetworkOps;

#[derive(Debug, Default)]
pub struct PosixNetwork;

impl PosixNetwork {
    pub fn new() -> Self {
        Self
    }
}

impl NetworkOps for PosixNetwork {
    fn download(&self, url: &str, output: &str) -> NativeCommand {
        NativeCommand::new("wget").args(["-O", output, url])
    }
}
