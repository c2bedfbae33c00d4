#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use argus_shield::models::{ContractAddress, ContractReport, ReportSubmission};
use argus_shield::render::{Clipboard, RenderedReport};
use argus_shield::validation::FieldHint;
use argus_shield::view::*;
use argus_shield::{ArgusError, ContractResolver, ReportSink, Result};

/// Everything a view was told, in order
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCall {
    State(ViewState),
    Trigger(bool),
    Report(String),
    Clear,
    Toast(Toast),
    Submitting(bool),
    Hint(FieldHint),
    Panel(ReportPanel),
    Open(bool),
}

#[derive(Debug, Default)]
pub struct RecordingView {
    pub calls: Vec<ViewCall>,
}

impl RecordingView {
    pub fn states(&self) -> Vec<ViewState> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ViewCall::State(s) => Some(*s),
                _ => None,
            })
            .collect()
    }
    
    pub fn toasts(&self) -> Vec<Toast> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ViewCall::Toast(t) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }
    
    pub fn last_hint(&self) -> Option<&FieldHint> {
        self.calls.iter().rev().find_map(|c| match c {
            ViewCall::Hint(h) => Some(h),
            _ => None,
        })
    }
}

impl ScannerView for RecordingView {
    fn on_state(&mut self, state: ViewState) {
        self.calls.push(ViewCall::State(state));
    }
    
    fn set_trigger_enabled(&mut self, enabled: bool) {
        self.calls.push(ViewCall::Trigger(enabled));
    }
    
    fn show_report(&mut self, report: &RenderedReport) {
        self.calls.push(ViewCall::Report(report.address.clone()));
    }
    
    fn clear(&mut self) {
        self.calls.push(ViewCall::Clear);
    }
    
    fn toast(&mut self, toast: Toast) {
        self.calls.push(ViewCall::Toast(toast));
    }
}

impl ReportView for RecordingView {
    fn on_state(&mut self, state: ViewState) {
        self.calls.push(ViewCall::State(state));
    }
    
    fn set_submitting(&mut self, submitting: bool) {
        self.calls.push(ViewCall::Submitting(submitting));
    }
    
    fn set_hint(&mut self, hint: &FieldHint) {
        self.calls.push(ViewCall::Hint(hint.clone()));
    }
    
    fn show_panel(&mut self, panel: ReportPanel) {
        self.calls.push(ViewCall::Panel(panel));
    }
    
    fn set_open(&mut self, open: bool) {
        self.calls.push(ViewCall::Open(open));
    }
    
    fn toast(&mut self, toast: Toast) {
        self.calls.push(ViewCall::Toast(toast));
    }
}

/// Resolver that always fails, counting attempts
#[derive(Default)]
pub struct FailingResolver {
    pub calls: AtomicUsize,
}

#[async_trait]
impl ContractResolver for FailingResolver {
    fn name(&self) -> &'static str {
        "failing"
    }
    
    async fn resolve(&self, _address: &ContractAddress) -> Result<ContractReport> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ArgusError::ResolutionFailed("API request failed (500)".to_string()))
    }
}

/// Sink that records submissions and optionally fails
#[derive(Default)]
pub struct RecordingSink {
    pub fail: bool,
    pub submitted: std::sync::Mutex<Vec<ReportSubmission>>,
}

impl RecordingSink {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
    
    pub fn count(&self) -> usize {
        self.submitted.lock().unwrap().len()
    }
}

#[async_trait]
impl ReportSink for RecordingSink {
    fn name(&self) -> &'static str {
        "recording"
    }
    
    async fn submit(&self, submission: &ReportSubmission) -> Result<()> {
        self.submitted.lock().unwrap().push(submission.clone());
        if self.fail {
            Err(ArgusError::ResolutionFailed("API request failed (503)".to_string()))
        } else {
            Ok(())
        }
    }
}

#[derive(Default)]
pub struct MemoryClipboard {
    pub text: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.text = Some(text.to_string());
        Ok(())
    }
}

pub struct BrokenClipboard;

impl Clipboard for BrokenClipboard {
    fn write_text(&mut self, _text: &str) -> Result<()> {
        Err(ArgusError::ClipboardUnavailable("denied".to_string()))
    }
}

pub const TETHER: &str = "0xdAC17F958D2ee523a2206206994597C13D831ec7";
pub const RANDOM: &str = "0x1234567890123456789012345678901234567890";
