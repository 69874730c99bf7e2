//! Domain events raised by the API
//!
//! Accepting an application has side effects beyond the application
//! itself. They are spelled out by [`ApplicationAccepted::plan`] so that a
//! server handler (or a mock server) can apply them explicitly.

use serde::Serialize;

use super::common::{AsapStatus, Id};
use super::error::ValidationError;

/// An owner accepted a pending application
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationAccepted {
    /// Posting the application belongs to
    pub paps_id: Id,
    /// The accepted application
    pub spap_id: Id,
    /// Applicant, who becomes the assignee
    pub applicant_id: Id,
    /// Posting owner
    pub owner_id: Id,
    /// Chat thread opened with the application
    pub chat_thread_id: Option<Id>,
}

/// Assignment to create for an accepted application
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewAssignment {
    /// Posting the work belongs to
    pub paps_id: Id,
    /// Application that was accepted
    pub spap_id: Id,
    /// Posting owner
    pub owner_id: Id,
    /// Accepted applicant
    pub accepted_user_id: Id,
    /// Always `active`
    pub status: AsapStatus,
}

/// Every effect of one acceptance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AcceptCascade {
    /// The assignment to create
    pub assignment: NewAssignment,
    /// Thread to move from the application to the new assignment
    pub move_chat_thread: Option<Id>,
    /// Sibling pending applications to reject (empty unless the posting is now full)
    pub reject_applications: Vec<Id>,
    /// Whether the posting closes
    pub close_paps: bool,
}

impl ApplicationAccepted {
    /// Work out the cascade given the posting's capacity
    ///
    /// `assigned` counts assignments that already exist for the posting;
    /// `pending` lists the posting's pending applications (the accepted one
    /// may be included, it is skipped). Fails when the posting is already
    /// full.
    pub fn plan(
        &self,
        max_assignees: u32,
        assigned: u32,
        pending: &[Id],
    ) -> Result<AcceptCascade, ValidationError> {
        if assigned >= max_assignees {
            return Err(ValidationError::cross_field(
                "max_assignees",
                format!("posting already has {assigned} of {max_assignees} assignees"),
            ));
        }

        let full = assigned + 1 >= max_assignees;
        let reject_applications = if full {
            pending.iter().filter(|id| **id != self.spap_id).cloned().collect()
        } else {
            Vec::new()
        };

        log::debug!(
            "spap {} accepted on paps {}: full={full}, rejecting {} sibling(s)",
            self.spap_id,
            self.paps_id,
            reject_applications.len()
        );

        Ok(AcceptCascade {
            assignment: NewAssignment {
                paps_id: self.paps_id.clone(),
                spap_id: self.spap_id.clone(),
                owner_id: self.owner_id.clone(),
                accepted_user_id: self.applicant_id.clone(),
                status: AsapStatus::Active,
            },
            move_chat_thread: self.chat_thread_id.clone(),
            reject_applications,
            close_paps: full,
        })
    }
}
