//! Plain-text export of a rendered report

use std::io::Write;
use std::process::{Command, Stdio};

use super::report::RenderedReport;
use crate::utils::{ArgusError, Result};

/// The multi-line block copied by "Copy report"
pub fn clipboard_text(report: &RenderedReport, explorer_url: &str) -> String {
    format!(
        "ARGUS SHIELD - Contract Report\n\
         ==============================\n\
         \n\
         Address: {address}\n\
         Risk: {score}/100 ({label})\n\
         \n\
         Details\n\
         -------\n\
         Name: {name}\n\
         Verified: {verified}\n\
         Created: {created}\n\
         Age: {age}\n\
         \n\
         Etherscan: {explorer}\n\
         \n\
         Scanned with Argus Shield\n\
         argusshield.io",
        address = report.address,
        score = report.score,
        label = report.risk.label,
        name = report.name,
        verified = report.verified_text,
        created = report.created_text,
        age = report.age_text,
        explorer = explorer_url,
    )
}

/// Destination for copied text
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Pipes text into the first platform copy command that works
pub struct SystemClipboard {
    candidates: Vec<(&'static str, Vec<&'static str>)>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self {
            candidates: vec![
                ("pbcopy", vec![]),
                ("wl-copy", vec![]),
                ("xclip", vec!["-selection", "clipboard"]),
                ("xsel", vec!["--clipboard", "--input"]),
                ("clip", vec![]),
            ],
        }
    }
    
    fn try_command(program: &str, args: &[&str], text: &str) -> std::io::Result<bool> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        
        if let Some(stdin) = child.stdin.as_mut() {
            stdin.write_all(text.as_bytes())?;
        }
        
        Ok(child.wait()?.success())
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        for (program, args) in &self.candidates {
            match Self::try_command(program, args, text) {
                Ok(true) => {
                    tracing::debug!("Copied {} bytes via {}", text.len(), program);
                    return Ok(());
                }
                Ok(false) => tracing::debug!("{} exited with failure", program),
                Err(e) => tracing::trace!("{} unavailable: {}", program, e),
            }
        }
        
        Err(ArgusError::ClipboardUnavailable("no clipboard command found".to_string()))
    }
}
