// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Marker-attribute vocabulary for declarative wiring.
//
// The priority order is operational, not cosmetic: click tracking fires
// first, clearing operations before additive ones (an element that removes
// all tags and adds new ones must never interleave the other way round),
// and navigation or dismissal last since those may tear the page down.

/// A recognised `data-handbill-*` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    ButtonLabel,
    RemoveAllTags,
    RemoveTag,
    UnsubscribeFromNotifications,
    AddTag,
    SubscribeToNotifications,
    TrackEvent,
    TriggerLocationPrompt,
    OpenAppRating,
    CallMethod,
    OpenDeepLink,
    OpenExternalUrl,
    Dismiss,
}

/// Every marker, in wiring priority order.
pub const WIRING_ORDER: [Marker; 13] = [
    Marker::ButtonLabel,
    Marker::RemoveAllTags,
    Marker::RemoveTag,
    Marker::UnsubscribeFromNotifications,
    Marker::AddTag,
    Marker::SubscribeToNotifications,
    Marker::TrackEvent,
    Marker::TriggerLocationPrompt,
    Marker::OpenAppRating,
    Marker::CallMethod,
    Marker::OpenDeepLink,
    Marker::OpenExternalUrl,
    Marker::Dismiss,
];

/// How a marker turns its attribute into a bridge invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    /// Fixed method; the attribute value travels verbatim as the sole
    /// argument.
    WithValue(&'static str),
    /// Fixed method with no arguments; the attribute's presence alone is
    /// the trigger.
    Parameterless(&'static str),
    /// The attribute value names the method to call, with no arguments.
    Dynamic,
}

impl Marker {
    /// The attribute page authors put on an element.
    pub fn attribute(self) -> &'static str {
        match self {
            Self::ButtonLabel => "data-handbill-button-label",
            Self::RemoveAllTags => "data-handbill-remove-all-tags",
            Self::RemoveTag => "data-handbill-remove-tag",
            Self::UnsubscribeFromNotifications => {
                "data-handbill-unsubscribe-from-notifications"
            }
            Self::AddTag => "data-handbill-add-tag",
            Self::SubscribeToNotifications => "data-handbill-subscribe-to-notifications",
            Self::TrackEvent => "data-handbill-track-event",
            Self::TriggerLocationPrompt => "data-handbill-trigger-location-prompt",
            Self::OpenAppRating => "data-handbill-open-app-rating",
            Self::CallMethod => "data-handbill-call-method",
            Self::OpenDeepLink => "data-handbill-open-deep-link",
            Self::OpenExternalUrl => "data-handbill-open-external-url",
            Self::Dismiss => "data-handbill-dismiss",
        }
    }

    /// The bridge invocation this marker performs on click.
    pub fn invocation(self) -> Invocation {
        match self {
            Self::ButtonLabel => Invocation::WithValue("trackClick"),
            Self::RemoveAllTags => Invocation::Parameterless("removeAllTags"),
            Self::RemoveTag => Invocation::WithValue("removeTag"),
            Self::UnsubscribeFromNotifications => {
                Invocation::Parameterless("unsubscribeFromNotifications")
            }
            Self::AddTag => Invocation::WithValue("addTag"),
            Self::SubscribeToNotifications => {
                Invocation::Parameterless("subscribeToNotifications")
            }
            Self::TrackEvent => Invocation::WithValue("trackEvent"),
            Self::TriggerLocationPrompt => {
                Invocation::Parameterless("triggerLocationPrompt")
            }
            Self::OpenAppRating => Invocation::Parameterless("openAppRating"),
            Self::CallMethod => Invocation::Dynamic,
            Self::OpenDeepLink => Invocation::WithValue("openDeepLink"),
            Self::OpenExternalUrl => Invocation::WithValue("openExternalUrl"),
            Self::Dismiss => Invocation::Parameterless("dismiss"),
        }
    }

    /// Look a marker up by its attribute name.
    pub fn from_attribute(name: &str) -> Option<Self> {
        WIRING_ORDER.into_iter().find(|m| m.attribute() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(marker: Marker) -> usize {
        WIRING_ORDER.iter().position(|m| *m == marker).unwrap()
    }

    #[test]
    fn order_covers_every_marker_once() {
        for marker in WIRING_ORDER {
            assert_eq!(
                WIRING_ORDER.iter().filter(|m| **m == marker).count(),
                1,
                "{marker:?} listed more than once"
            );
        }
    }

    #[test]
    fn clearing_operations_precede_additive_ones() {
        assert!(position(Marker::RemoveAllTags) < position(Marker::AddTag));
        assert!(position(Marker::RemoveTag) < position(Marker::AddTag));
        assert!(
            position(Marker::UnsubscribeFromNotifications)
                < position(Marker::SubscribeToNotifications)
        );
    }

    #[test]
    fn navigation_and_dismissal_come_last() {
        let last_non_navigation = position(Marker::CallMethod);
        assert!(position(Marker::OpenDeepLink) > last_non_navigation);
        assert!(position(Marker::OpenExternalUrl) > last_non_navigation);
        assert_eq!(position(Marker::Dismiss), WIRING_ORDER.len() - 1);
    }

    #[test]
    fn attributes_round_trip() {
        for marker in WIRING_ORDER {
            assert_eq!(Marker::from_attribute(marker.attribute()), Some(marker));
        }
        assert_eq!(Marker::from_attribute("data-handbill-unknown"), None);
    }

    #[test]
    fn parameterless_markers_ignore_their_value() {
        for marker in [
            Marker::Dismiss,
            Marker::RemoveAllTags,
            Marker::SubscribeToNotifications,
            Marker::UnsubscribeFromNotifications,
            Marker::OpenAppRating,
            Marker::TriggerLocationPrompt,
        ] {
            assert!(matches!(marker.invocation(), Invocation::Parameterless(_)));
        }
    }
}
