mod common;

use std::sync::Arc;
use std::time::Duration;

use argus_shield::resolvers::DemoReportSink;
use argus_shield::validation::*;
use argus_shield::view::*;
use argus_shield::{AddressReporter, ArgusError};
use common::*;

fn reporter(sink: Arc<RecordingSink>) -> AddressReporter<RecordingView> {
    let mut reporter = AddressReporter::new(sink, RecordingView::default());
    reporter.open();
    reporter
}

#[tokio::test]
async fn test_successful_report() {
    let sink = Arc::new(RecordingSink::default());
    let mut reporter = reporter(sink.clone());
    
    reporter
        .submit(RANDOM, "  drained my wallet  ", " alice@example.com ")
        .await
        .unwrap();
    
    assert_eq!(reporter.state(), ViewState::Results);
    assert_eq!(
        reporter.view().states(),
        vec![ViewState::Loading, ViewState::Results]
    );
    assert_eq!(reporter.view().calls.last(), Some(&ViewCall::Panel(ReportPanel::Success)));
    
    let submitted = sink.submitted.lock().unwrap();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].address.as_str(), RANDOM);
    assert_eq!(submitted[0].description.as_deref(), Some("drained my wallet"));
    assert_eq!(submitted[0].email.as_deref(), Some("alice@example.com"));
}

#[tokio::test]
async fn test_anonymous_report_without_description() {
    let sink = Arc::new(RecordingSink::default());
    let mut reporter = reporter(sink.clone());
    
    reporter.submit(RANDOM, "", "").await.unwrap();
    
    let submitted = sink.submitted.lock().unwrap();
    assert_eq!(submitted[0].description, None);
    assert_eq!(submitted[0].email, None);
}

#[tokio::test]
async fn test_bad_address_never_reaches_loading() {
    let sink = Arc::new(RecordingSink::default());
    let mut reporter = reporter(sink.clone());
    
    let err = reporter.submit("not-an-address", "", "").await.unwrap_err();
    
    assert!(matches!(err, ArgusError::InvalidFormat { field: FormField::Address, .. }));
    assert_eq!(sink.count(), 0);
    assert!(reporter.view().states().is_empty());
    assert!(!reporter.view().calls.contains(&ViewCall::Submitting(true)));
    assert_eq!(reporter.hints().error(FormField::Address), Some(INVALID_ADDRESS));
    assert_eq!(reporter.view().last_hint().unwrap().text(), INVALID_ADDRESS);
}

#[tokio::test]
async fn test_bad_email_blocks_submission() {
    let sink = Arc::new(RecordingSink::default());
    let mut reporter = reporter(sink.clone());
    
    let err = reporter.submit(RANDOM, "", "not-an-email").await.unwrap_err();
    
    assert!(matches!(err, ArgusError::InvalidFormat { field: FormField::Email, .. }));
    assert_eq!(sink.count(), 0);
    assert_eq!(reporter.hints().error(FormField::Email), Some(INVALID_EMAIL));
    assert_eq!(reporter.hints().error(FormField::Address), None);
}

#[tokio::test]
async fn test_failed_submission_shows_toast_and_returns_to_idle() {
    let sink = Arc::new(RecordingSink::failing());
    let mut reporter = reporter(sink.clone());
    
    let err = reporter.submit(RANDOM, "", "").await.unwrap_err();
    
    assert!(matches!(err, ArgusError::ResolutionFailed(_)));
    assert_eq!(reporter.state(), ViewState::Idle);
    assert_eq!(
        reporter.view().states(),
        vec![ViewState::Loading, ViewState::Error, ViewState::Idle]
    );
    assert_eq!(reporter.view().toasts(), vec![Toast::error(MSG_GENERIC_FAILURE)]);
    assert!(reporter.view().calls.contains(&ViewCall::Submitting(false)));
    assert!(!reporter.view().calls.contains(&ViewCall::Panel(ReportPanel::Success)));
}

#[tokio::test]
async fn test_blur_validation() {
    let sink = Arc::new(RecordingSink::default());
    let mut reporter = reporter(sink);
    
    assert!(!reporter.on_address_blur("0x123"));
    assert_eq!(reporter.hints().error(FormField::Address), Some(INVALID_ADDRESS_FORMAT));
    
    // Emptying the field clears the complaint
    assert!(reporter.on_address_blur(""));
    assert_eq!(reporter.view().last_hint().unwrap().text(), ADDRESS_HINT);
    
    assert!(reporter.on_address_blur(RANDOM));
    assert_eq!(reporter.hints().error(FormField::Address), None);
}

#[tokio::test]
async fn test_close_resets_modal() {
    let sink = Arc::new(RecordingSink::default());
    let mut reporter = reporter(sink);
    
    reporter.submit("bad", "", "bad").await.unwrap_err();
    reporter.submit(RANDOM, "", "still-bad").await.unwrap_err();
    assert!(reporter.hints().error(FormField::Email).is_some());
    
    reporter.close().unwrap();
    
    assert!(!reporter.is_open());
    assert_eq!(reporter.state(), ViewState::Idle);
    assert_eq!(reporter.hints().error(FormField::Address), None);
    assert_eq!(reporter.hints().error(FormField::Email), None);
    assert_eq!(reporter.view().calls.last(), Some(&ViewCall::Panel(ReportPanel::Form)));
    
    reporter.open();
    assert!(reporter.is_open());
}

#[tokio::test]
async fn test_close_after_success_allows_new_report() {
    let sink = Arc::new(RecordingSink::default());
    let mut reporter = reporter(sink.clone());
    
    reporter.submit(RANDOM, "", "").await.unwrap();
    reporter.close().unwrap();
    reporter.open();
    reporter.submit(TETHER, "", "").await.unwrap();
    
    assert_eq!(sink.count(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_abandoned_submission_reenables_form() {
    let sink = DemoReportSink::new().with_delay(Duration::from_secs(5));
    let mut reporter = AddressReporter::new(Arc::new(sink), RecordingView::default());
    reporter.open();
    
    let abandoned = tokio::time::timeout(Duration::from_millis(10), reporter.submit(RANDOM, "", "")).await;
    assert!(abandoned.is_err());
    
    assert_eq!(reporter.state(), ViewState::Idle);
    assert_eq!(reporter.view().calls.last(), Some(&ViewCall::Submitting(false)));
    assert!(reporter.view().states().ends_with(&[ViewState::Loading, ViewState::Idle]));
    
    reporter.close().unwrap();
    reporter.open();
    reporter.submit(RANDOM, "", "").await.unwrap();
    assert_eq!(reporter.view().calls.last(), Some(&ViewCall::Panel(ReportPanel::Success)));
}
