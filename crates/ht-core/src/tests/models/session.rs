use crate::Session;

use chrono::Utc;

fn sample_session() -> Session {
    Session {
        id: "recS01".into(),
        user_id: "recU01".into(),
        user_email: "a@b.com".into(),
        device_id: "dev1".into(),
        session_token: "tok1".into(),
        revoked: false,
        created_at: Utc::now(),
    }
}

#[test]
fn test_session_is_active() {
    let mut session = sample_session();

    assert!(session.is_active());

    session.revoked = true;
    assert!(!session.is_active());
}
