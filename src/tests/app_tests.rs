use super::*;

use crate::console::NOT_AUTHENTICATED_MESSAGE;
use crate::session::AcceptAnyAuthenticator;
use crate::test_support::disk1;

fn state() -> AppState {
    AppState::new(&ClientConfig::default()).expect("app state")
}

#[test]
fn submit_is_gated_on_the_session() {
    let mut app = state();
    assert!(matches!(app.submit(), SubmitOutcome::Rejected));
    assert_eq!(
        app.console().output().output_text,
        NOT_AUTHENTICATED_MESSAGE
    );

    app.login("ana", "123", None, &AcceptAnyAuthenticator)
        .expect("login");
    let SubmitOutcome::Dispatched(ticket) = app.submit() else {
        panic!("expected dispatch");
    };
    assert_eq!(ticket.session.username, "ana");
}

#[test]
fn logout_clears_script_output_and_navigation() {
    let mut app = state();
    app.login("ana", "123", Some("781A".to_string()), &AcceptAnyAuthenticator)
        .expect("login");
    app.console_mut()
        .script_mut()
        .replace("mkdisk".to_string());
    let SubmitOutcome::Dispatched(t) = app.submit() else {
        panic!("expected dispatch");
    };
    app.complete_execution(crate::console::ExecutionCompleted {
        generation: t.generation,
        result: crate::model::ExecutionResult::new("MKDISK: ok"),
    });
    app.open_disk(disk1());

    app.logout();
    assert!(app.session().is_none());
    assert_eq!(app.console().script().as_str(), "");
    assert_eq!(app.console().output().output_text, "");
    assert!(app.router().navigation_store().is_empty());
}

#[test]
fn bad_extension_raises_an_alert_and_keeps_the_script() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("script.txt");
    std::fs::write(&path, "mkdisk")?;

    let mut app = state();
    app.console_mut()
        .script_mut()
        .replace("previous".to_string());
    assert!(app.load_script(&path).is_err());
    assert_eq!(app.console().script().as_str(), "previous");
    assert!(app.alert().is_some_and(|a| a.contains(".smia")));

    app.dismiss_alert();
    assert!(app.alert().is_none());
    Ok(())
}

#[test]
fn empty_login_raises_the_fill_both_fields_alert() {
    let mut app = state();
    assert!(app.login("", "", None, &AcceptAnyAuthenticator).is_err());
    assert_eq!(app.alert(), Some("Por favor, completa ambos campos."));
    assert!(app.session().is_none());
}
