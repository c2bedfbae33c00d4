//! View handles and view state
//!
//! Pipelines never render anything themselves. They push state changes,
//! rendered reports, hints and notices into a view handle supplied by the
//! caller: a terminal printer in the binary, a recorder in tests.

pub mod animation;
mod state;
pub mod terminal;

pub use animation::{FrameClock, ScoreAnimation, SteppedClock, TokioFrameClock};
pub use state::{ViewEvent, ViewMachine, ViewState};
pub use terminal::{TerminalReportView, TerminalScannerView};

use crate::render::RenderedReport;
use crate::validation::FieldHint;

pub const MSG_GENERIC_FAILURE: &str = "Something went wrong. Try again.";
pub const MSG_ENTER_VALID_ADDRESS: &str = "Enter a valid Ethereum address";
pub const MSG_COPIED: &str = "Copied!";
pub const MSG_COPY_FAILED: &str = "Could not copy";
pub const MSG_DEMO_MODE: &str = "Demo mode: results are simulated";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// Transient notice. Replaces any notice already showing; how long it stays
/// up is up to the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Success, message: message.into() }
    }
    
    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Error, message: message.into() }
    }
    
    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Info, message: message.into() }
    }
}

/// Panels of the report modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPanel {
    Form,
    Success,
}

/// Handle onto the scanner page
pub trait ScannerView: Send {
    fn on_state(&mut self, state: ViewState);
    
    /// Enable or disable the scan button
    fn set_trigger_enabled(&mut self, enabled: bool);
    
    /// Fill the results panel
    fn show_report(&mut self, report: &RenderedReport);
    
    /// Hide results, bring back the info panel and clear the input
    fn clear(&mut self);
    
    fn toast(&mut self, toast: Toast);
}

/// Handle onto the report modal
pub trait ReportView: Send {
    fn on_state(&mut self, state: ViewState);
    
    /// Disable the submit button and show the spinner
    fn set_submitting(&mut self, submitting: bool);
    
    fn set_hint(&mut self, hint: &FieldHint);
    
    fn show_panel(&mut self, panel: ReportPanel);
    
    fn set_open(&mut self, open: bool);
    
    fn toast(&mut self, toast: Toast);
}
