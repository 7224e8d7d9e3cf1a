//! Orchestrator operation tests over a scripted completion client
//!
//! The mock counts calls so validation failures can be asserted to have
//! made no network attempt.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use uuid::Uuid;

use ideastorm::clients::CompletionClient;
use ideastorm::config::{AiConfig, DEFAULT_API_URL, DEFAULT_MODEL};
use ideastorm::error::{IdeaStormError, Result};
use ideastorm::orchestrator::{Orchestrator, validate_key};
use ideastorm::schemas::{
    ExpansionRequest, GenerationRequest, PerspectiveRequest, RefinementRequest,
};

#[derive(Debug, Clone)]
enum Script {
    Reply(String),
    Upstream { status: u16, message: String },
}

struct MockClient {
    calls: AtomicUsize,
    script: Script,
}

impl MockClient {
    fn replying(raw: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            script: Script::Reply(raw.to_string()),
        })
    }

    fn failing(status: u16, message: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            script: Script::Upstream {
                status,
                message: message.to_string(),
            },
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionClient for MockClient {
    async fn complete(&self, _system: &str, _user: &str, _config: &AiConfig) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            Script::Reply(raw) => Ok(raw.clone()),
            Script::Upstream { status, message } => Err(IdeaStormError::Upstream {
                status: Some(*status),
                message: message.clone(),
            }),
        }
    }
}

fn config() -> AiConfig {
    AiConfig {
        api_key: "test-key".to_string(),
        api_url: DEFAULT_API_URL.to_string(),
        model: DEFAULT_MODEL.to_string(),
    }
}

fn orchestrator(client: Arc<MockClient>) -> Orchestrator {
    Orchestrator::with_client(&config(), None, client).unwrap()
}

fn generation(session_id: Option<Uuid>, prompt: &str) -> GenerationRequest {
    GenerationRequest {
        session_id,
        prompt: prompt.to_string(),
        context: None,
        technique: None,
        count: None,
    }
}

#[tokio::test]
async fn missing_session_id_is_rejected_without_a_call() {
    let client = MockClient::replying("[]");
    let orch = orchestrator(client.clone());

    let err = orch.generate(&generation(None, "topic")).await.unwrap_err();
    assert!(matches!(err, IdeaStormError::Validation { .. }));
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn missing_prompt_is_rejected_without_a_call() {
    let client = MockClient::replying("[]");
    let orch = orchestrator(client.clone());

    let err = orch
        .generate(&generation(Some(Uuid::new_v4()), "   "))
        .await
        .unwrap_err();
    assert!(matches!(err, IdeaStormError::Validation { .. }));
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn zero_count_is_rejected_without_a_call() {
    let client = MockClient::replying("[]");
    let orch = orchestrator(client.clone());

    let mut req = generation(Some(Uuid::new_v4()), "topic");
    req.count = Some(0);
    let err = orch.generate(&req).await.unwrap_err();
    assert!(matches!(err, IdeaStormError::Validation { .. }));
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn generate_maps_a_well_formed_response() {
    let client = MockClient::replying(
        r#"[{"content":"A","description":"B","position":{"x":1,"y":2},"categoryId":"c1"}]"#,
    );
    let orch = orchestrator(client.clone());
    let sid = Uuid::new_v4();

    let drafts = orch.generate(&generation(Some(sid), "topic")).await.unwrap();
    assert_eq!(client.calls(), 1);
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].content, "A\n\nB");
    assert_eq!(drafts[0].position.x, 1.0);
    assert_eq!(drafts[0].position.y, 2.0);
    assert_eq!(drafts[0].category_id.as_deref(), Some("c1"));
    assert!(drafts[0].is_ai_generated);
    assert_eq!(drafts[0].session_id, sid);
}

#[tokio::test]
async fn generate_downgrades_garbage_to_a_fallback_draft() {
    let client = MockClient::replying("not json");
    let orch = orchestrator(client.clone());

    let drafts = orch
        .generate(&generation(Some(Uuid::new_v4()), "topic"))
        .await
        .unwrap();
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].content, "AI idea generation failed. Please try again.");
    assert!(drafts[0].is_ai_generated);
    assert!(drafts[0].category_id.is_none());

    // Repeat invocations produce the identical fallback
    let again = orch
        .generate(&generation(Some(Uuid::new_v4()), "topic"))
        .await
        .unwrap();
    assert_eq!(again[0].content, drafts[0].content);
    assert_eq!(client.calls(), 2);
}

#[tokio::test]
async fn generate_accepts_a_valid_empty_array() {
    let client = MockClient::replying("[]");
    let orch = orchestrator(client.clone());

    let drafts = orch
        .generate(&generation(Some(Uuid::new_v4()), "topic"))
        .await
        .unwrap();
    assert!(drafts.is_empty());
}

#[tokio::test]
async fn expand_requires_idea_id() {
    let client = MockClient::replying("[]");
    let orch = orchestrator(client.clone());

    let req = ExpansionRequest {
        idea_id: None,
        session_id: Some(Uuid::new_v4()),
        source_content: "X".to_string(),
        depth: Some(2),
    };
    let err = orch.expand(&req).await.unwrap_err();
    assert!(matches!(err, IdeaStormError::Validation { .. }));
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn expand_maps_each_element() {
    let client = MockClient::replying(
        r#"[{"content":"First","description":"one"},{"content":"Second","description":"two"}]"#,
    );
    let orch = orchestrator(client.clone());

    let req = ExpansionRequest {
        idea_id: Some(Uuid::new_v4()),
        session_id: Some(Uuid::new_v4()),
        source_content: "X".to_string(),
        depth: None,
    };
    let drafts = orch.expand(&req).await.unwrap();
    assert_eq!(drafts.len(), 2);
    assert_eq!(drafts[0].content, "First\n\none");
    assert_eq!(drafts[1].content, "Second\n\ntwo");
}

#[tokio::test]
async fn perspectives_falls_back_with_its_own_message() {
    let client = MockClient::replying("{\"oops\": true}");
    let orch = orchestrator(client.clone());

    let req = PerspectiveRequest {
        idea_id: Some(Uuid::new_v4()),
        session_id: Some(Uuid::new_v4()),
        source_content: "X".to_string(),
        count: None,
    };
    let drafts = orch.perspectives(&req).await.unwrap();
    assert_eq!(drafts.len(), 1);
    assert_eq!(
        drafts[0].content,
        "AI perspective generation failed. Please try again."
    );
}

#[tokio::test]
async fn refine_requires_instructions() {
    let client = MockClient::replying("{}");
    let orch = orchestrator(client.clone());

    let req = RefinementRequest {
        idea_id: Some(Uuid::new_v4()),
        session_id: Some(Uuid::new_v4()),
        source_content: "X".to_string(),
        instructions: "".to_string(),
    };
    let err = orch.refine(&req).await.unwrap_err();
    assert!(matches!(err, IdeaStormError::Validation { .. }));
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn refine_returns_a_single_draft() {
    let client =
        MockClient::replying(r#"{"content":"Refined","description":"better version"}"#);
    let orch = orchestrator(client.clone());
    let sid = Uuid::new_v4();

    let req = RefinementRequest {
        idea_id: Some(Uuid::new_v4()),
        session_id: Some(sid),
        source_content: "X".to_string(),
        instructions: "improve it".to_string(),
    };
    let draft = orch.refine(&req).await.unwrap();
    assert_eq!(draft.content, "Refined\n\nbetter version");
    assert_eq!(draft.session_id, sid);
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn upstream_failures_propagate_with_their_message() {
    let client = MockClient::failing(429, "rate limited");
    let orch = orchestrator(client.clone());

    let err = orch
        .generate(&generation(Some(Uuid::new_v4()), "topic"))
        .await
        .unwrap_err();
    match err {
        IdeaStormError::Upstream { status, message } => {
            assert_eq!(status, Some(429));
            assert!(message.contains("rate limited"));
        }
        other => panic!("expected upstream error, got {:?}", other),
    }
    assert_eq!(client.calls(), 1);
}

#[test]
fn construction_fails_without_any_key() {
    let mut cfg = config();
    cfg.api_key = String::new();

    let client = MockClient::replying("[]");
    let err = match Orchestrator::with_client(&cfg, None, client.clone()) {
        Err(e) => e,
        Ok(_) => panic!("construction must fail without a key"),
    };
    assert!(matches!(err, IdeaStormError::Config { .. }));
    assert_eq!(client.calls(), 0);

    // A per-request override rescues an unconfigured default
    assert!(Orchestrator::with_client(&cfg, Some("header-key"), client).is_ok());
}

#[test]
fn validate_key_reports_without_calling_upstream() {
    let mut cfg = config();
    assert!(validate_key(&cfg, None));
    assert!(validate_key(&cfg, Some("override")));

    cfg.api_key = String::new();
    assert!(!validate_key(&cfg, None));
    assert!(!validate_key(&cfg, Some("")));
    assert!(validate_key(&cfg, Some("header-key")));
}
