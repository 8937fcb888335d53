use http::StatusCode;
use jsonws_core::{
    CallSpecification, ClassifiedError, InvokeError, RemoteFailure, Session, Transport,
};
use serde_json::{Value, json};

/// An in-memory portal: records the compiled payload it receives and replays a
/// scripted outcome. No outcome scripted means the connection "never completes".
struct ScriptedTransport {
    outcome: Option<Result<Value, RemoteFailure>>,
    sent: Option<CallSpecification>,
}

impl ScriptedTransport {
    fn replying(outcome: Result<Value, RemoteFailure>) -> Self {
        Self {
            outcome: Some(outcome),
            sent: None,
        }
    }

    fn unreachable() -> Self {
        Self {
            outcome: None,
            sent: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("connection refused")]
struct ConnectionRefused;

impl Transport for ScriptedTransport {
    type Error = ConnectionRefused;

    async fn send(
        &mut self,
        payload: &CallSpecification,
    ) -> Result<Result<Value, RemoteFailure>, Self::Error> {
        self.sent = Some(payload.clone());
        self.outcome.take().ok_or(ConnectionRefused)
    }
}

fn spec(value: Value) -> CallSpecification {
    value.as_object().expect("spec must be an object").clone()
}

#[tokio::test]
async fn test_invoke_compiles_the_spec_before_sending() {
    let transport = ScriptedTransport::replying(Ok(json!({ "userId": 7 })));
    let mut session = Session::new(transport);

    let result = session
        .invoke(&spec(json!({
            "$user = /user/get-user-by-id": {
                "fullURL": 123,
                "@contactId": "$other.id"
            }
        })))
        .await
        .unwrap();

    assert_eq!(result, json!({ "userId": 7 }));

    let sent = session.into_transport().sent.unwrap();
    assert_eq!(
        Value::Object(sent),
        json!({
            "$user = /user/get-user-by-id": {
                "fullUrl": 123,
                "@contactId": "$other.id"
            }
        })
    );
}

#[tokio::test]
async fn test_invoke_classifies_http_unauthorized() {
    let transport = ScriptedTransport::replying(Err(RemoteFailure {
        status: StatusCode::UNAUTHORIZED,
        body: json!({}),
    }));
    let mut session = Session::new(transport);

    let err = session
        .invoke(&spec(json!({ "/user/get-user-by-id": { "userId": 1 } })))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        InvokeError::Remote(ClassifiedError::Unauthorized { .. })
    ));
}

#[tokio::test]
async fn test_invoke_classifies_missing_entity_reported_as_200() {
    let transport = ScriptedTransport::replying(Ok(json!({
        "exception": "com.liferay.portlet.messageboards.NoSuchMessageException"
    })));
    let mut session = Session::new(transport);

    let err = session
        .invoke(&spec(json!({ "/mbmessage/get-message": { "messageId": 99999999 } })))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        InvokeError::Remote(ClassifiedError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_invoke_classifies_unresolvable_service_paths() {
    let transport = ScriptedTransport::replying(Ok(json!({
        "exception": "No JSON web service action with path /i-do-not-exists/neither-i"
    })));
    let mut session = Session::new(transport);

    let err = session
        .invoke(&spec(json!({ "/i-do-not-exists/neither-i": {} })))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        InvokeError::Remote(ClassifiedError::BadRequest { .. })
    ));
}

#[tokio::test]
async fn test_invoke_keeps_the_raw_body_for_unknown_failures() {
    let body = json!({ "exception": "something odd happened" });
    let transport = ScriptedTransport::replying(Ok(body.clone()));
    let mut session = Session::new(transport);

    let err = session
        .invoke(&spec(json!({ "/some/path": {} })))
        .await
        .unwrap_err();

    match err {
        InvokeError::Remote(ClassifiedError::Unknown {
            status,
            body: raw_body,
        }) => {
            assert_eq!(status, StatusCode::OK);
            assert_eq!(raw_body, body);
        }
        other => panic!("expected an Unknown classification, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_invoke_surfaces_transport_failures_unclassified() {
    let mut session = Session::new(ScriptedTransport::unreachable());

    let err = session
        .invoke(&spec(json!({ "/some/path": {} })))
        .await
        .unwrap_err();

    assert!(matches!(err, InvokeError::Transport(ConnectionRefused)));
}
