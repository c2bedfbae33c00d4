//! Terminal rendering of both pipelines

use std::io::Write;

use super::*;
use crate::validation::FieldHint;

const GAUGE_WIDTH: usize = 20;

/// Filled cells of the score gauge, read off the ring's stroke offset
fn gauge_cells(value: u8) -> usize {
    let drawn = 1.0 - ScoreAnimation::ring_offset(value) / animation::RING_CIRCUMFERENCE;
    ((drawn * GAUGE_WIDTH as f64).round() as usize).min(GAUGE_WIDTH)
}

fn toast_line(toast: &Toast) -> String {
    let icon = match toast.kind {
        ToastKind::Success => "✅",
        ToastKind::Error => "❌",
        ToastKind::Info => "ℹ️",
    };
    format!("{} {}", icon, toast.message)
}

/// Prints the scanner page to stdout
#[derive(Debug, Default)]
pub struct TerminalScannerView {
    verbose: bool,
}

impl TerminalScannerView {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
    
    /// Redraw the score line in place
    pub fn score_frame(&self, value: u8, label: &str) {
        let filled = gauge_cells(value);
        print!(
            "\r   Risk Score: {:>3}/100  [{}{}]  {}",
            value,
            "█".repeat(filled),
            "░".repeat(GAUGE_WIDTH - filled),
            label
        );
        let _ = std::io::stdout().flush();
    }
}

impl ScannerView for TerminalScannerView {
    fn on_state(&mut self, state: ViewState) {
        if state == ViewState::Loading {
            println!("⏳ Analyzing contract...\n");
        }
    }
    
    fn set_trigger_enabled(&mut self, _enabled: bool) {}
    
    fn show_report(&mut self, report: &RenderedReport) {
        println!("╔══════════════════════════════════════════════════════╗");
        println!("║              CONTRACT SCAN RESULTS                   ║");
        println!("╚══════════════════════════════════════════════════════╝\n");
        
        println!("🎯 Address: {}", report.address);
        println!("{} {}\n", report.risk.level.emoji(), report.risk.label);
        
        println!("📄 Contract");
        println!("   • Name:     {}", report.name);
        println!("   • Type:     {}", report.contract_type);
        println!("   • Compiler: {}", report.compiler);
        println!("   • Verified: {}", report.verified_text);
        println!("   • Proxy:    {}", report.proxy_text);
        println!("   • License:  {}", report.license);
        
        println!("\n📅 Timeline");
        println!("   • Created:  {}", report.created_text);
        println!("   • Age:      {}", report.age_text);
        if self.verbose {
            println!("   • Deployer: {}", report.deployer_full);
        } else {
            println!("   • Deployer: {}", report.deployer_short);
        }
        
        println!("\n📊 Activity");
        println!("   • Transactions:  {}", report.tx_count_text);
        println!("   • Balance:       {}", report.balance_text);
        println!("   • Last activity: {}", report.last_activity);
        
        if report.warnings_visible() {
            println!("\n⚠️  Warnings");
            for warning in &report.warnings {
                println!("   • {}", warning);
            }
        }
        
        println!("\n🔗 {}\n", report.explorer_url);
    }
    
    fn clear(&mut self) {}
    
    fn toast(&mut self, toast: Toast) {
        println!("{}", toast_line(&toast));
    }
}

/// Prints the report modal to stdout
#[derive(Debug, Default)]
pub struct TerminalReportView;

impl ReportView for TerminalReportView {
    fn on_state(&mut self, _state: ViewState) {}
    
    fn set_submitting(&mut self, submitting: bool) {
        if submitting {
            println!("⏳ Submitting...");
        }
    }
    
    fn set_hint(&mut self, hint: &FieldHint) {
        if hint.is_error() {
            println!("❌ {:?}: {}", hint.field, hint.text());
        }
    }
    
    fn show_panel(&mut self, panel: ReportPanel) {
        if panel == ReportPanel::Success {
            println!("✅ Report received. Thanks for helping keep the ecosystem safe.");
        }
    }
    
    fn set_open(&mut self, _open: bool) {}
    
    fn toast(&mut self, toast: Toast) {
        println!("{}", toast_line(&toast));
    }
}
