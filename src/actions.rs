//! Feature actions triggered from the map's nodes
//!
//! Each action is a call into the remote API. The API itself lives behind
//! [`FeatureApi`]; this module only maps action tags to the right method.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use thiserror::Error;

/// Every action a node can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureAction {
    CallsStart,
    CallsRecordings,
    MessagesInbox,
    MessagesBulk,
    MessagesEmail,
    CampaignsSchedule,
    CampaignsCompliance,
    NumbersBuy,
    NumbersAssign,
    AnalyticsVoice,
    AnalyticsMessaging,
}

impl FeatureAction {
    pub const ALL: [FeatureAction; 11] = [
        FeatureAction::CallsStart,
        FeatureAction::CallsRecordings,
        FeatureAction::MessagesInbox,
        FeatureAction::MessagesBulk,
        FeatureAction::MessagesEmail,
        FeatureAction::CampaignsSchedule,
        FeatureAction::CampaignsCompliance,
        FeatureAction::NumbersBuy,
        FeatureAction::NumbersAssign,
        FeatureAction::AnalyticsVoice,
        FeatureAction::AnalyticsMessaging,
    ];

    /// Wire key, e.g. `api.calls.start`
    pub fn key(&self) -> &'static str {
        match self {
            FeatureAction::CallsStart => "api.calls.start",
            FeatureAction::CallsRecordings => "api.calls.recordings",
            FeatureAction::MessagesInbox => "api.messages.inbox",
            FeatureAction::MessagesBulk => "api.messages.bulk",
            FeatureAction::MessagesEmail => "api.messages.email",
            FeatureAction::CampaignsSchedule => "api.campaigns.schedule",
            FeatureAction::CampaignsCompliance => "api.campaigns.compliance",
            FeatureAction::NumbersBuy => "api.numbers.buy",
            FeatureAction::NumbersAssign => "api.numbers.assign",
            FeatureAction::AnalyticsVoice => "api.analytics.voice",
            FeatureAction::AnalyticsMessaging => "api.analytics.messaging",
        }
    }
}

impl fmt::Display for FeatureAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown action '{0}'")]
pub struct UnknownAction(pub String);

impl FromStr for FeatureAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.key() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

/// The remote API, one method per capability
pub trait FeatureApi {
    type Error;

    fn start_call(&mut self, payload: Value) -> Result<Value, Self::Error>;
    fn list_recordings(&mut self, payload: Value) -> Result<Value, Self::Error>;
    fn inbox(&mut self, payload: Value) -> Result<Value, Self::Error>;
    fn bulk_send(&mut self, payload: Value) -> Result<Value, Self::Error>;
    fn email_blast(&mut self, payload: Value) -> Result<Value, Self::Error>;
    fn schedule_campaign(&mut self, payload: Value) -> Result<Value, Self::Error>;
    fn campaign_compliance(&mut self, payload: Value) -> Result<Value, Self::Error>;
    fn buy_number(&mut self, payload: Value) -> Result<Value, Self::Error>;
    fn assign_number(&mut self, payload: Value) -> Result<Value, Self::Error>;
    fn voice_analytics(&mut self, payload: Value) -> Result<Value, Self::Error>;
    fn messaging_analytics(&mut self, payload: Value) -> Result<Value, Self::Error>;
}

/// Run `action` against `api`
pub fn dispatch<A: FeatureApi + ?Sized>(
    api: &mut A,
    action: FeatureAction,
    payload: Value,
) -> Result<Value, A::Error> {
    match action {
        FeatureAction::CallsStart => api.start_call(payload),
        FeatureAction::CallsRecordings => api.list_recordings(payload),
        FeatureAction::MessagesInbox => api.inbox(payload),
        FeatureAction::MessagesBulk => api.bulk_send(payload),
        FeatureAction::MessagesEmail => api.email_blast(payload),
        FeatureAction::CampaignsSchedule => api.schedule_campaign(payload),
        FeatureAction::CampaignsCompliance => api.campaign_compliance(payload),
        FeatureAction::NumbersBuy => api.buy_number(payload),
        FeatureAction::NumbersAssign => api.assign_number(payload),
        FeatureAction::AnalyticsVoice => api.voice_analytics(payload),
        FeatureAction::AnalyticsMessaging => api.messaging_analytics(payload),
    }
}

/// Run the action named by `key`; unknown keys do nothing and yield `None`
pub fn trigger<A: FeatureApi + ?Sized>(
    api: &mut A,
    key: &str,
    payload: Value,
) -> Result<Option<Value>, A::Error> {
    match key.parse::<FeatureAction>() {
        Ok(action) => dispatch(api, action, payload).map(Some),
        Err(e) => {
            log::debug!("{}", e);
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Records which capability was called
    #[derive(Default)]
    struct Recorder {
        calls: Vec<&'static str>,
    }

    impl Recorder {
        fn hit(&mut self, name: &'static str, payload: Value) -> Result<Value, String> {
            self.calls.push(name);
            Ok(json!({ "called": name, "payload": payload }))
        }
    }

    impl FeatureApi for Recorder {
        type Error = String;

        fn start_call(&mut self, p: Value) -> Result<Value, String> {
            self.hit("start_call", p)
        }
        fn list_recordings(&mut self, p: Value) -> Result<Value, String> {
            self.hit("list_recordings", p)
        }
        fn inbox(&mut self, p: Value) -> Result<Value, String> {
            self.hit("inbox", p)
        }
        fn bulk_send(&mut self, p: Value) -> Result<Value, String> {
            self.hit("bulk_send", p)
        }
        fn email_blast(&mut self, p: Value) -> Result<Value, String> {
            self.hit("email_blast", p)
        }
        fn schedule_campaign(&mut self, p: Value) -> Result<Value, String> {
            self.hit("schedule_campaign", p)
        }
        fn campaign_compliance(&mut self, p: Value) -> Result<Value, String> {
            self.hit("campaign_compliance", p)
        }
        fn buy_number(&mut self, p: Value) -> Result<Value, String> {
            self.hit("buy_number", p)
        }
        fn assign_number(&mut self, _p: Value) -> Result<Value, String> {
            Err("number pool exhausted".to_string())
        }
        fn voice_analytics(&mut self, p: Value) -> Result<Value, String> {
            self.hit("voice_analytics", p)
        }
        fn messaging_analytics(&mut self, p: Value) -> Result<Value, String> {
            self.hit("messaging_analytics", p)
        }
    }

    #[test]
    fn test_keys_round_trip() {
        for action in FeatureAction::ALL {
            assert_eq!(action.key().parse::<FeatureAction>(), Ok(action));
        }
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(
            "api.nope".parse::<FeatureAction>(),
            Err(UnknownAction("api.nope".to_string()))
        );
    }

    #[test]
    fn test_trigger_dispatches_to_capability() {
        let mut api = Recorder::default();
        let out = trigger(&mut api, "api.numbers.buy", json!({ "number": "+15035550100" }))
            .unwrap()
            .unwrap();

        assert_eq!(out["called"], "buy_number");
        assert_eq!(out["payload"]["number"], "+15035550100");
        assert_eq!(api.calls, vec!["buy_number"]);
    }

    #[test]
    fn test_trigger_unknown_is_noop() {
        let mut api = Recorder::default();
        assert_eq!(trigger(&mut api, "api.unknown", Value::Null), Ok(None));
        assert!(api.calls.is_empty());
    }

    #[test]
    fn test_errors_propagate() {
        let mut api = Recorder::default();
        let err = dispatch(&mut api, FeatureAction::NumbersAssign, Value::Null).unwrap_err();
        assert_eq!(err, "number pool exhausted");
    }
}
