//! Windows network retrieval

use super::{powershell, ps_literal};
use crate::models::NativeCommand;
use crate::platform::traits::NetworkOps;

#[derive(Debug, Default)]
pub struct WindowsNetwork;

impl WindowsNetwork {
    pub fn new() -> Self {
        Self
    }
}

impl NetworkOps for WindowsNetwork {
    fn download(&self, url: &str, output: &str) -> NativeCommand {
        powershell(format!(
            "Invoke-WebRequest -Uri {} -OutFile {}",
            ps_literal(url),
            ps_literal(output)
        ))
    }
}
