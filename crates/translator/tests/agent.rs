//! The translator served through a session, end to end.

mod common;

use babel_session::{ChannelTransport, Session, SessionConfig};
use babel_tools::ToolRegistry;
use common::{Reply, StubProvider, llm};
use core::time::Duration;
use serde_json::{Value, json};
use std::collections::HashMap;
use translator::TranslateTool;

/// Uppercases the quoted text of a translation prompt.
fn shout(prompt: &str) -> String {
    let start = prompt.find("Text to translate: \"").map_or(0, |i| i + 20);
    let end = prompt.rfind("\"\n\n").unwrap_or(prompt.len());
    prompt[start..end].to_uppercase()
}

fn session(provider: std::sync::Arc<StubProvider>) -> Session {
    let mut tools = ToolRegistry::new();
    tools.register(TranslateTool::new(llm(provider)));
    Session::builder(SessionConfig::new("ws://localhost:8080/ws"))
        .with_tools(tools)
        .build()
        .unwrap()
}

fn invoke(id: &str, text: &str) -> Value {
    json!({
        "message_type": "agent_invoke",
        "invocation_id": id,
        "tool_name": "translate_text",
        "arguments": {"text": text, "source_language": "English", "target_language": "French"}
    })
}

#[tokio::test]
async fn registers_translate_text() {
    let session = session(StubProvider::text("unused"));
    let (mut transport, mut peer) = ChannelTransport::pair();

    let orchestrator = async move {
        let frame = peer.next_json().await.unwrap();
        assert_eq!(frame["message_type"], "agent_register");
        assert_eq!(frame["tools"][0]["name"], "translate_text");
        assert_eq!(
            frame["tools"][0]["description"],
            "Translate text from one language to another."
        );
        assert_eq!(
            frame["tools"][0]["parameters"]["required"],
            json!(["text", "source_language", "target_language"])
        );
    };

    let (served, ()) = tokio::join!(session.serve(&mut transport), orchestrator);
    served.unwrap();
}

#[tokio::test]
async fn concurrent_invocations_each_get_their_own_translation() {
    let provider = StubProvider::delayed(Reply::Echo(shout), Duration::from_millis(50));
    let session = session(provider.clone());
    let (mut transport, mut peer) = ChannelTransport::pair();

    let orchestrator = async move {
        peer.next_json().await.unwrap();
        peer.send_json(&invoke("a", "good morning"));
        peer.send_json(&invoke("b", "good night"));

        let mut replies = HashMap::new();
        for _ in 0..2 {
            let reply = peer.next_json().await.unwrap();
            replies.insert(
                reply["invocation_id"].as_str().unwrap().to_string(),
                reply["response"].clone(),
            );
        }
        assert_eq!(replies["a"], json!({"translated_text": "GOOD MORNING"}));
        assert_eq!(replies["b"], json!({"translated_text": "GOOD NIGHT"}));
    };

    let (served, ()) = tokio::join!(session.serve(&mut transport), orchestrator);
    served.unwrap();
    assert_eq!(provider.prompts().len(), 2);
}

#[tokio::test]
async fn bad_arguments_are_answered_with_an_error() {
    let session = session(StubProvider::text("unused"));
    let (mut transport, mut peer) = ChannelTransport::pair();

    let orchestrator = async move {
        peer.next_json().await.unwrap();
        peer.send_json(&json!({
            "message_type": "agent_invoke",
            "invocation_id": "x",
            "tool_name": "translate_text",
            "arguments": {"text": "hi"}
        }));
        let reply = peer.next_json().await.unwrap();
        assert_eq!(reply["invocation_id"], "x");
        let error = reply["response"]["error"].as_str().unwrap();
        assert!(error.contains("source_language"), "got: {error}");
    };

    let (served, ()) = tokio::join!(session.serve(&mut transport), orchestrator);
    served.unwrap();
}
