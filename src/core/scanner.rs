use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use url::Url;

use crate::core::ContractResolver;
use crate::models::ContractReport;
use crate::render::{clipboard_text, render_report, Clipboard, RenderedReport};
use crate::utils::{ArgusError, Result};
use crate::validation::validate_address;
use crate::view::*;

/// What a successful scan hands back to the caller
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub report: ContractReport,
    pub rendered: RenderedReport,
    /// Count-up for the score card, driven by whoever owns the frame clock
    pub animation: ScoreAnimation,
}

/// Puts the page back to an interactive `Idle` if a pending scan is dropped
/// before the resolver answers
struct PendingScan<'a, V: ScannerView> {
    machine: &'a mut ViewMachine,
    view: &'a mut V,
    settled: bool,
}

impl<V: ScannerView> Drop for PendingScan<'_, V> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        
        tracing::warn!("Scan abandoned while loading");
        if let Ok(state) = self.machine.apply(ViewEvent::Reset) {
            self.view.on_state(state);
        }
        self.view.set_trigger_enabled(true);
    }
}

/// Scanner page controller: validate, resolve, render
pub struct ContractScanner<V: ScannerView> {
    resolver: Arc<dyn ContractResolver>,
    view: V,
    machine: ViewMachine,
    explorer_base: Url,
    today: Option<NaiveDate>,
    current: Option<RenderedReport>,
}

impl<V: ScannerView> ContractScanner<V> {
    pub fn new(resolver: Arc<dyn ContractResolver>, view: V, explorer_base: Url) -> Self {
        Self {
            resolver,
            view,
            machine: ViewMachine::new(),
            explorer_base,
            today: None,
            current: None,
        }
    }
    
    /// Pin the date used for age calculations
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }
    
    pub fn state(&self) -> ViewState {
        self.machine.state()
    }
    
    pub fn view(&self) -> &V {
        &self.view
    }
    
    /// The report currently on screen, if any
    pub fn current(&self) -> Option<&RenderedReport> {
        self.current.as_ref()
    }
    
    fn transition(&mut self, event: ViewEvent) -> Result<()> {
        let state = self.machine.apply(event)?;
        self.view.on_state(state);
        Ok(())
    }
    
    /// Scan whatever is in the address box
    pub async fn scan(&mut self, input: &str) -> Result<ScanOutcome> {
        let address = match validate_address(input.trim()) {
            Ok(address) => address,
            Err(e) => {
                self.view.toast(Toast::error(MSG_ENTER_VALID_ADDRESS));
                return Err(e);
            }
        };
        
        self.transition(ViewEvent::Submit)?;
        self.view.set_trigger_enabled(false);
        
        let resolver = Arc::clone(&self.resolver);
        tracing::info!("🔍 Scanning {} via {}", address, resolver.name());
        
        let mut pending = PendingScan {
            machine: &mut self.machine,
            view: &mut self.view,
            settled: false,
        };
        let resolved = resolver.resolve(&address).await;
        pending.settled = true;
        drop(pending);
        
        self.view.set_trigger_enabled(true);
        
        match resolved {
            Ok(report) => {
                let today = self.today.unwrap_or_else(|| Utc::now().date_naive());
                let rendered = render_report(&report, today, &self.explorer_base);
                
                self.transition(ViewEvent::Resolved)?;
                self.view.show_report(&rendered);
                self.current = Some(rendered.clone());
                
                tracing::info!(
                    "{} {} scored {}/100 ({})",
                    rendered.risk.level.emoji(),
                    address,
                    report.risk_score,
                    rendered.risk.label
                );
                
                Ok(ScanOutcome {
                    animation: ScoreAnimation::new(report.risk_score),
                    report,
                    rendered,
                })
            }
            Err(e) => {
                tracing::error!("Scanner error: {}", e);
                
                self.transition(ViewEvent::Failed)?;
                self.view.toast(Toast::error(MSG_GENERIC_FAILURE));
                self.transition(ViewEvent::Dismiss)?;
                
                Err(e)
            }
        }
    }
    
    /// "Scan another": back to the empty form
    pub fn reset(&mut self) -> Result<()> {
        if self.machine.is_loading() {
            return Err(ArgusError::Busy);
        }
        
        self.transition(ViewEvent::Reset)?;
        self.current = None;
        self.view.clear();
        Ok(())
    }
    
    /// Copy the text report of what is on screen
    pub fn copy_report(&mut self, clipboard: &mut dyn Clipboard) -> Result<()> {
        let rendered = self.current.as_ref().ok_or(ArgusError::InvalidTransition {
            from: self.machine.state(),
            event: "copy",
        })?;
        
        let text = clipboard_text(rendered, &rendered.explorer_url);
        
        match clipboard.write_text(&text) {
            Ok(()) => {
                self.view.toast(Toast::success(MSG_COPIED));
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Copy failed: {}", e);
                self.view.toast(Toast::error(MSG_COPY_FAILED));
                Err(e)
            }
        }
    }
}
