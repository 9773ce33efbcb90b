//! Shared fakes for session tests
#![allow(dead_code)]

use rg_auth::{IdentityError, IdentityProvider, Result as IdentityResult, SignedInIdentity};
use rg_core::{Identity, IdentityMode};
use rg_gen::{GenError, GenerationService, Result as GenResult};

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

/// Identity provider fake: hands out a fixed identity, a fresh identity per
/// call, or always fails.
pub enum FakeProviderMode {
    Fixed(String),
    Sequential(String),
    Failing,
}

pub struct FakeProvider {
    mode: FakeProviderMode,
    pub calls: AtomicUsize,
}

impl FakeProvider {
    pub fn succeeding(identity: &str) -> Self {
        Self {
            mode: FakeProviderMode::Fixed(identity.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Each sign-in mints "{prefix}-{n}", like a real anonymous provider.
    pub fn sequential(prefix: &str) -> Self {
        Self {
            mode: FakeProviderMode::Sequential(prefix.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            mode: FakeProviderMode::Failing,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl IdentityProvider for FakeProvider {
    async fn sign_in(&self, _credential: Option<&str>) -> IdentityResult<SignedInIdentity> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        match &self.mode {
            FakeProviderMode::Fixed(id) => Ok(SignedInIdentity {
                identity: Identity::new(id.clone()),
                mode: IdentityMode::Anonymous,
            }),
            FakeProviderMode::Sequential(prefix) => Ok(SignedInIdentity {
                identity: Identity::new(format!("{prefix}-{call}")),
                mode: IdentityMode::Anonymous,
            }),
            FakeProviderMode::Failing => {
                Err(IdentityError::rejected(503, "provider unreachable"))
            }
        }
    }
}

/// One scripted response of the generation fake.
pub enum GenBehavior {
    Reply { delay_ms: u64, text: &'static str },
    Status(u16),
    Empty,
}

/// Generation service fake driven by a script of behaviors, consumed in
/// call order.
pub struct FakeGenerationService {
    script: Mutex<VecDeque<GenBehavior>>,
    pub calls: AtomicUsize,
}

impl FakeGenerationService {
    pub fn scripted(script: Vec<GenBehavior>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl GenerationService for FakeGenerationService {
    async fn generate(&self, _prompt: &str) -> GenResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let behavior = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .expect("generation fake called more times than scripted");

        match behavior {
            GenBehavior::Reply { delay_ms, text } => {
                if delay_ms > 0 {
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                }
                Ok(text.to_string())
            }
            GenBehavior::Status(status) => Err(GenError::service(status)),
            GenBehavior::Empty => Err(GenError::empty_result()),
        }
    }
}
