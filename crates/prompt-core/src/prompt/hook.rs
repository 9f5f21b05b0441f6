//! User callbacks and resolvable messages

use super::answers::Answers;
use crate::error::{PromptError, Result};
use futures::future::BoxFuture;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

type SyncFn<A, R> = dyn Fn(&A) -> anyhow::Result<R> + Send + Sync;
type AsyncFn<A, R> = dyn Fn(A) -> BoxFuture<'static, anyhow::Result<R>> + Send + Sync;

/// A user-supplied function, either plain or asynchronous.
///
/// Every callback the engine invokes (messages, `when` predicates,
/// validators, transforms, divergence selectors, acknowledgement handlers)
/// is a `Hook`. Failures are never retried: they end the prompt run with
/// [`PromptError::Callback`].
pub enum Hook<A, R> {
    Sync(Arc<SyncFn<A, R>>),
    Async(Arc<AsyncFn<A, R>>),
}

impl<A, R> Clone for Hook<A, R> {
    fn clone(&self) -> Self {
        match self {
            Hook::Sync(f) => Hook::Sync(Arc::clone(f)),
            Hook::Async(f) => Hook::Async(Arc::clone(f)),
        }
    }
}

impl<A, R> fmt::Debug for Hook<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hook::Sync(_) => f.write_str("Hook::Sync(..)"),
            Hook::Async(_) => f.write_str("Hook::Async(..)"),
        }
    }
}

impl<A, R> Hook<A, R>
where
    A: Send + 'static,
    R: Send + 'static,
{
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&A) -> anyhow::Result<R> + Send + Sync + 'static,
    {
        Hook::Sync(Arc::new(f))
    }

    pub fn from_async<F, Fut>(f: F) -> Self
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<R>> + Send + 'static,
    {
        Hook::Async(Arc::new(move |arg| Box::pin(f(arg))))
    }

    pub async fn call(&self, arg: A) -> Result<R> {
        match self {
            Hook::Sync(f) => f(&arg).map_err(PromptError::Callback),
            Hook::Async(f) => f(arg).await.map_err(PromptError::Callback),
        }
    }
}

/// Text that is either fixed or computed from the answers collected so far
#[derive(Clone, Debug)]
pub enum Message {
    Literal(String),
    Dynamic(Hook<Answers, String>),
}

impl Message {
    pub fn dynamic<F>(f: F) -> Self
    where
        F: Fn(&Answers) -> anyhow::Result<String> + Send + Sync + 'static,
    {
        Message::Dynamic(Hook::new(f))
    }

    pub fn dynamic_async<F, Fut>(f: F) -> Self
    where
        F: Fn(Answers) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<String>> + Send + 'static,
    {
        Message::Dynamic(Hook::from_async(f))
    }

    /// The concrete text at this point of the run.
    ///
    /// A literal is returned as is without calling anything.
    pub async fn resolve(&self, answers: &Answers) -> Result<String> {
        match self {
            Message::Literal(text) => Ok(text.clone()),
            Message::Dynamic(hook) => hook.call(answers.clone()).await,
        }
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::Literal(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Literal(text)
    }
}
