//! Interview session state machine: start → answer* → finish.
//!
//! All store access goes through the injected `SessionStore`. Mutations of one
//! session id are serialized by a per-session async lock held across the whole
//! read-modify-write, so racing answers cannot drop each other's turns.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::Mutex as AsyncMutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::coaching::coaching_for;
use crate::interview::models::{
    AnswerRequest, AnswerResponse, FinishResponse, PartialScore, Session, StartRequest,
    StartResponse, Turn,
};
use crate::interview::questions::{question_count, question_for, template_at};
use crate::interview::scoring::{final_score, improvements, strengths};
use crate::interview::store::SessionStore;

pub const DEFAULT_TONE: &str = "supportive";

type SessionLock = Arc<AsyncMutex<()>>;

pub struct InterviewService {
    store: Arc<dyn SessionStore>,
    locks: Mutex<HashMap<String, SessionLock>>,
}

impl InterviewService {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn store_backend(&self) -> &'static str {
        self.store.backend()
    }

    /// Allocates a new session and returns its first question.
    pub async fn start(&self, req: StartRequest) -> Result<StartResponse, AppError> {
        let session_id = Uuid::new_v4().to_string();
        let tone = req.tone.unwrap_or_else(|| DEFAULT_TONE.to_string());
        let question = question_for(0, &req.role).unwrap_or_default();

        let session = Session::new(session_id.clone(), req.resume_text, req.role, tone);
        info!(
            session_id = %session_id,
            role = %session.role,
            tone = %session.tone,
            "Interview session started"
        );
        self.store.put(session).await?;

        Ok(StartResponse {
            session_id,
            question,
        })
    }

    /// Records the answer to the current question and advances the session.
    ///
    /// The transcript keeps the raw template that was current; past the last
    /// question the answer is recorded against an empty question and
    /// `next_question` is `None`.
    pub async fn answer(&self, req: AnswerRequest) -> Result<AnswerResponse, AppError> {
        let session_id = req.session_id.clone();
        let lock = self.lock_for(&session_id);
        let guard = lock.lock().await;
        let result = self.answer_locked(req).await;
        drop(guard);
        self.release_if_idle(&session_id, &lock);
        result
    }

    async fn answer_locked(&self, req: AnswerRequest) -> Result<AnswerResponse, AppError> {
        let Some(mut session) = self.store.get(&req.session_id).await? else {
            warn!(session_id = %req.session_id, "Answer for unknown session");
            return Err(AppError::session_not_found());
        };

        let asked = template_at(session.question_index).unwrap_or_default();
        session.transcript.push(Turn {
            q: asked.to_string(),
            a: req.answer.clone(),
        });
        session.question_index += 1;

        let next_question = question_for(session.question_index, &session.role);
        let coaching = coaching_for(&req.answer);
        let depth = session.question_index;

        debug!(
            session_id = %session.id,
            answered = depth,
            exhausted = session.question_index >= question_count(),
            "Answer recorded"
        );
        self.store.put(session).await?;

        Ok(AnswerResponse {
            next_question,
            coaching,
            partial_score: PartialScore { depth },
        })
    }

    /// Removes the session and returns its final score and transcript.
    pub async fn finish(&self, session_id: &str) -> Result<FinishResponse, AppError> {
        let lock = self.lock_for(session_id);
        let guard = lock.lock().await;
        let removed = self.store.remove(session_id).await;
        drop(guard);
        self.release_if_idle(session_id, &lock);

        let Some(session) = removed? else {
            warn!(session_id = %session_id, "Finish for unknown session");
            return Err(AppError::session_not_found());
        };

        let final_score = final_score(session.transcript.len());
        info!(
            session_id = %session_id,
            turns = session.transcript.len(),
            depth = final_score.depth,
            "Interview session finished"
        );

        Ok(FinishResponse {
            final_score,
            strengths: strengths(),
            improvements: improvements(),
            transcript: session.transcript,
        })
    }

    fn lock_for(&self, session_id: &str) -> SessionLock {
        let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
        locks.entry(session_id.to_string()).or_default().clone()
    }

    /// Drops the table entry once only the table and the caller hold it.
    /// Clones are only handed out under the table mutex, so no new waiter can
    /// appear between the count check and the removal.
    fn release_if_idle(&self, session_id: &str, lock: &SessionLock) {
        let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
        let idle = locks
            .get(session_id)
            .is_some_and(|entry| Arc::ptr_eq(entry, lock) && Arc::strong_count(lock) == 2);
        if idle {
            locks.remove(session_id);
        }
    }

    #[cfg(test)]
    fn tracked_locks(&self) -> usize {
        self.locks.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}
