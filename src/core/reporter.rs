use std::sync::Arc;

use crate::core::ReportSink;
use crate::models::ReportSubmission;
use crate::utils::{ArgusError, Result};
use crate::validation::*;
use crate::view::*;

/// Re-enables the form if a pending submission is dropped mid-flight
struct PendingSubmit<'a, V: ReportView> {
    machine: &'a mut ViewMachine,
    view: &'a mut V,
    settled: bool,
}

impl<V: ReportView> Drop for PendingSubmit<'_, V> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        
        tracing::warn!("Report submission abandoned while sending");
        if let Ok(state) = self.machine.apply(ViewEvent::Reset) {
            self.view.on_state(state);
        }
        self.view.set_submitting(false);
    }
}

/// Report modal controller
pub struct AddressReporter<V: ReportView> {
    sink: Arc<dyn ReportSink>,
    view: V,
    machine: ViewMachine,
    hints: FieldHints,
    open: bool,
}

impl<V: ReportView> AddressReporter<V> {
    pub fn new(sink: Arc<dyn ReportSink>, view: V) -> Self {
        Self {
            sink,
            view,
            machine: ViewMachine::new(),
            hints: FieldHints::new(),
            open: false,
        }
    }
    
    pub fn state(&self) -> ViewState {
        self.machine.state()
    }
    
    pub fn is_open(&self) -> bool {
        self.open
    }
    
    pub fn hints(&self) -> &FieldHints {
        &self.hints
    }
    
    pub fn view(&self) -> &V {
        &self.view
    }
    
    fn transition(&mut self, event: ViewEvent) -> Result<()> {
        let state = self.machine.apply(event)?;
        self.view.on_state(state);
        Ok(())
    }
    
    fn set_error(&mut self, field: FormField, message: &str) {
        self.hints.set_error(field, message);
        self.view.set_hint(&self.hints.hint(field));
    }
    
    fn clear_error(&mut self, field: FormField) {
        self.hints.clear(field);
        self.view.set_hint(&self.hints.hint(field));
    }
    
    fn reset_form(&mut self) {
        self.hints.clear_all();
        for field in [FormField::Address, FormField::Email] {
            self.view.set_hint(&self.hints.hint(field));
        }
        self.view.show_panel(ReportPanel::Form);
    }
    
    /// Show the modal with a fresh form
    pub fn open(&mut self) {
        self.open = true;
        self.view.set_open(true);
        self.view.show_panel(ReportPanel::Form);
    }
    
    /// Hide the modal and forget everything typed into it
    pub fn close(&mut self) -> Result<()> {
        if self.machine.is_loading() {
            return Err(ArgusError::Busy);
        }
        
        self.open = false;
        self.view.set_open(false);
        self.transition(ViewEvent::Reset)?;
        self.reset_form();
        Ok(())
    }
    
    /// Address field lost focus
    pub fn on_address_blur(&mut self, input: &str) -> bool {
        match check_address_on_blur(input.trim()) {
            Some(message) => {
                self.set_error(FormField::Address, message);
                false
            }
            None => {
                self.clear_error(FormField::Address);
                true
            }
        }
    }
    
    /// Validate the form and send the report
    pub async fn submit(&mut self, address: &str, description: &str, email: &str) -> Result<()> {
        let address = match validate_address(address.trim()) {
            Ok(address) => {
                self.clear_error(FormField::Address);
                address
            }
            Err(e) => {
                self.set_error(FormField::Address, INVALID_ADDRESS);
                return Err(e);
            }
        };
        
        let email = match validate_email(email.trim()) {
            Ok(email) => {
                self.clear_error(FormField::Email);
                email
            }
            Err(e) => {
                self.set_error(FormField::Email, INVALID_EMAIL);
                return Err(e);
            }
        };
        
        let submission = ReportSubmission::new(address)
            .with_description(description.trim())
            .with_email(email);
        
        self.transition(ViewEvent::Submit)?;
        self.view.set_submitting(true);
        
        let sink = Arc::clone(&self.sink);
        let mut pending = PendingSubmit {
            machine: &mut self.machine,
            view: &mut self.view,
            settled: false,
        };
        let result = sink.submit(&submission).await;
        pending.settled = true;
        drop(pending);
        
        self.view.set_submitting(false);
        
        match result {
            Ok(()) => {
                self.transition(ViewEvent::Resolved)?;
                self.view.show_panel(ReportPanel::Success);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Report submission error: {}", e);
                
                self.transition(ViewEvent::Failed)?;
                self.view.toast(Toast::error(MSG_GENERIC_FAILURE));
                self.transition(ViewEvent::Dismiss)?;
                
                Err(e)
            }
        }
    }
}
