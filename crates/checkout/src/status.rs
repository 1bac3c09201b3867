//! Order lifecycle
//!
//! One canonical status vocabulary shared by the customer tracking view,
//! the restaurant portal, and staff dispatch. UI-facing label sets map
//! onto these states in the clients; nothing else is ever stored.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle stage of a persisted order.
///
/// Orders move one step forward at a time through the delivery sequence,
/// and may be cancelled from any non-terminal state. No backward move is
/// ever legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Created at checkout, waiting for dispatch.
    Pending,

    /// A driver has been assigned.
    Confirmed,

    /// The restaurant has acknowledged and is cooking.
    Preparing,

    /// Food is ready for pickup.
    Ready,

    /// The driver has picked the order up.
    OutForDelivery,

    /// Delivered to the customer. Terminal.
    Delivered,

    /// Cancelled before delivery. Terminal.
    Cancelled,
}

impl OrderStatus {
    /// Stable storage spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::OutForDelivery => "out_for_delivery",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    /// Terminal states accept no further transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// The next stage in the delivery sequence, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::Confirmed),
            Self::Confirmed => Some(Self::Preparing),
            Self::Preparing => Some(Self::Ready),
            Self::Ready => Some(Self::OutForDelivery),
            Self::OutForDelivery => Some(Self::Delivered),
            Self::Delivered | Self::Cancelled => None,
        }
    }

    /// Whether moving from `self` to `to` is legal: exactly one step
    /// forward in the sequence, or cancellation from any non-terminal
    /// state.
    #[must_use]
    pub fn can_transition(self, to: Self) -> bool {
        if to == Self::Cancelled {
            return !self.is_terminal();
        }

        self.next() == Some(to)
    }

    /// Apply a transition, yielding the new status.
    ///
    /// # Errors
    ///
    /// Returns a [`TransitionError`] naming both states when the move is
    /// not legal; the current status is left untouched.
    pub fn transition(self, to: Self) -> Result<Self, TransitionError> {
        if self.can_transition(to) {
            Ok(to)
        } else {
            Err(TransitionError { from: self, to })
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown status spelling in stored data.
#[derive(Debug, Error)]
#[error("unknown order status \"{0}\"")]
pub struct ParseOrderStatusError(String);

impl FromStr for OrderStatus {
    type Err = ParseOrderStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "preparing" => Ok(Self::Preparing),
            "ready" => Ok(Self::Ready),
            "out_for_delivery" => Ok(Self::OutForDelivery),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(ParseOrderStatusError(other.to_owned())),
        }
    }
}

/// Attempted move between two order states that the lifecycle does not
/// allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot move from {from} to {to}")]
pub struct TransitionError {
    /// The state the order was in.
    pub from: OrderStatus,

    /// The state the caller asked for.
    pub to: OrderStatus,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    use OrderStatus::{
        Cancelled, Confirmed, Delivered, OutForDelivery, Pending, Preparing, Ready,
    };

    const SEQUENCE: [OrderStatus; 6] = [
        Pending,
        Confirmed,
        Preparing,
        Ready,
        OutForDelivery,
        Delivered,
    ];

    #[test]
    fn every_adjacent_step_is_legal() -> TestResult {
        for pair in SEQUENCE.windows(2) {
            let [from, to] = pair else {
                panic!("windows(2) always yields pairs");
            };

            assert!(from.can_transition(*to), "{from} -> {to} must be legal");
            assert_eq!(from.transition(*to)?, *to);
        }

        Ok(())
    }

    #[test]
    fn skipping_ahead_is_rejected() {
        assert!(!Pending.can_transition(Preparing));
        assert!(!Confirmed.can_transition(OutForDelivery));
        assert!(!Pending.can_transition(Delivered));
    }

    #[test]
    fn backward_moves_are_rejected_without_mutation() {
        let err = Delivered
            .transition(Preparing)
            .expect_err("a backward move must fail");

        assert_eq!(err, TransitionError { from: Delivered, to: Preparing });
        assert_eq!(err.to_string(), "cannot move from delivered to preparing");
    }

    #[test]
    fn cancellation_is_reachable_from_every_non_terminal_state() {
        for from in [Pending, Confirmed, Preparing, Ready, OutForDelivery] {
            assert!(from.can_transition(Cancelled), "{from} must be cancellable");
        }
    }

    #[test]
    fn terminal_states_accept_nothing() {
        for from in [Delivered, Cancelled] {
            for to in SEQUENCE {
                assert!(!from.can_transition(to), "{from} -> {to} must be rejected");
            }

            assert!(!from.can_transition(Cancelled));
        }
    }

    #[test]
    fn pending_to_confirmed_is_the_dispatch_step() -> TestResult {
        assert_eq!(Pending.transition(Confirmed)?, Confirmed);

        Ok(())
    }

    #[test]
    fn storage_spellings_round_trip() -> TestResult {
        for status in [
            Pending,
            Confirmed,
            Preparing,
            Ready,
            OutForDelivery,
            Delivered,
            Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<OrderStatus>()?, status);
        }

        Ok(())
    }

    #[test]
    fn unknown_spellings_are_rejected() {
        let err = "Queued".parse::<OrderStatus>().expect_err("not canonical");

        assert_eq!(err.to_string(), "unknown order status \"Queued\"");
    }
}
