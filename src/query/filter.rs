//! Record filter
//!
//! A filter specification over the record list: by payment-status bucket,
//! by program, or both (logical AND). The filter is stable: matching records
//! come back in their input order, never re-sorted.
//!
//! The UI flow treats the two criteria as mutually exclusive (selecting one
//! clears the other), but that is shell policy; this layer accepts both at
//! once and combines them correctly.

use crate::store::types::{Participant, PaymentStatus, Program};

/// Filter specification for participant records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSpec {
    /// Keep only records in this payment-status bucket
    pub status: Option<PaymentStatus>,
    /// Keep only records enrolled in this program
    pub program: Option<Program>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: filter by payment-status bucket
    pub fn status(mut self, status: PaymentStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Builder: filter by program
    pub fn program(mut self, program: Program) -> Self {
        self.program = Some(program);
        self
    }

    /// Whether no criteria are set
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.program.is_none()
    }

    /// Check if a record matches this filter
    pub fn matches(&self, record: &Participant) -> bool {
        if let Some(status) = self.status {
            if record.payment_status != status {
                return false;
            }
        }

        if let Some(program) = self.program {
            if record.program != program {
                return false;
            }
        }

        true
    }

    /// Apply the filter, preserving relative order
    pub fn apply(&self, records: &[Participant]) -> Vec<Participant> {
        records
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect()
    }
}
