//! Per-session form state.
//!
//! Each user interaction happens inside a [`FormSession`] owned by the
//! [`ChemistrySessions`] store. A session starts in
//! [`SessionState::NoOutput`] and moves to [`SessionState::HasOutput`] on
//! its first successful submission; later submissions replace the stored
//! output instead of appending to it.

use std::collections::HashMap;
use std::fmt;

use bevy::prelude::*;

use crate::form::FormInput;
use crate::generator::{ChemistryGenerator, GenerateError};

// =============================================================================
// Types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session#{}", self.0)
    }
}

/// Result of the most recent successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutput {
    pub generated_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NoOutput,
    HasOutput,
}

#[derive(Debug, Default, Clone)]
pub struct FormSession {
    last_input: Option<FormInput>,
    output: Option<SessionOutput>,
    submissions: u64,
}

impl FormSession {
    /// Runs `generator` over the pattern and stores the result.
    ///
    /// On failure the previous output is kept and the error is returned.
    pub fn submit(
        &mut self,
        input: FormInput,
        generator: &dyn ChemistryGenerator,
    ) -> Result<&SessionOutput, GenerateError> {
        let generated_text = generator.generate(&input.pattern_text)?;
        self.last_input = Some(input);
        self.submissions += 1;
        Ok(&*self.output.insert(SessionOutput { generated_text }))
    }

    pub fn output(&self) -> Option<&SessionOutput> {
        self.output.as_ref()
    }

    pub fn last_input(&self) -> Option<&FormInput> {
        self.last_input.as_ref()
    }

    pub fn submissions(&self) -> u64 {
        self.submissions
    }

    pub fn state(&self) -> SessionState {
        if self.output.is_some() {
            SessionState::HasOutput
        } else {
            SessionState::NoOutput
        }
    }

    pub fn download_available(&self) -> bool {
        self.output.is_some()
    }
}

// =============================================================================
// Resources
// =============================================================================

/// The session the local UI is driving, if one has been started.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct ActiveSession(pub Option<SessionId>);

/// Every live session, keyed by id.
#[derive(Resource, Default, Debug)]
pub struct ChemistrySessions {
    sessions: HashMap<SessionId, FormSession>,
    next_id: u64,
}

impl ChemistrySessions {
    /// Starts a fresh session in the `NoOutput` state.
    ///
    /// Ids already taken by [`ChemistrySessions::submit`] are skipped.
    pub fn begin(&mut self) -> SessionId {
        let mut id = SessionId(self.next_id);
        while self.sessions.contains_key(&id) {
            id = SessionId(id.0.wrapping_add(1));
        }
        self.next_id = id.0.wrapping_add(1);
        self.sessions.insert(id, FormSession::default());
        info!("Started chemistry {id}");
        id
    }

    /// Returns the active session, starting one on first interaction.
    pub fn ensure(&mut self, active: &mut ActiveSession) -> SessionId {
        match active.0 {
            Some(id) if self.sessions.contains_key(&id) => id,
            _ => {
                let id = self.begin();
                active.0 = Some(id);
                id
            }
        }
    }

    pub fn get(&self, id: SessionId) -> Option<&FormSession> {
        self.sessions.get(&id)
    }

    /// Submits `input` to session `id`, creating the session if needed.
    pub fn submit(
        &mut self,
        id: SessionId,
        input: FormInput,
        generator: &dyn ChemistryGenerator,
    ) -> Result<&SessionOutput, GenerateError> {
        if id.0 >= self.next_id {
            // At u64::MAX the allocator stays put; `begin` skips live ids.
            if let Some(next) = id.0.checked_add(1) {
                self.next_id = next;
            }
        }
        self.sessions.entry(id).or_default().submit(input, generator)
    }

    /// Drops session `id` and its output. Returns whether it existed.
    pub fn end(&mut self, id: SessionId) -> bool {
        let existed = self.sessions.remove(&id).is_some();
        if existed {
            info!("Ended chemistry {id}");
        }
        existed
    }

    pub fn end_all(&mut self) {
        if !self.sessions.is_empty() {
            info!("Ending {} chemistry session(s)", self.sessions.len());
        }
        self.sessions.clear();
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
