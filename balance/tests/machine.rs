//! Bot/bin state machine behaviour.
//!
//! Tests cover:
//! - Two-max retention (property-based)
//! - Readiness gating and clear semantics
//! - Target assignment idempotence
//! - Diff application and serialized shape

use balance::*;
use proptest::prelude::*;
use serde_json::json;
use std::sync::Mutex;

#[derive(Default)]
struct Capture(Mutex<Vec<Firing>>);

impl Observer for Capture {
    fn on_fire(&self, firing: &Firing) {
        self.0.lock().unwrap().push(*firing);
    }
}

fn routed_bot(id: u32) -> Bot {
    let mut bot = Bot::new(BotId(id));
    bot.set_targets(Target::Bin(BinId(0)), Target::Bot(BotId(9)));
    bot
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Readiness and firing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn fresh_bot_is_empty() {
    let bot = Bot::new(BotId(4));
    assert_eq!(bot.id(), BotId(4));
    assert_eq!(bot.low(), None);
    assert_eq!(bot.high(), None);
    assert_eq!(bot.low_target(), None);
    assert_eq!(bot.high_target(), None);
    assert!(!bot.is_ready());
}

#[test]
fn one_value_is_not_ready() {
    let mut bot = routed_bot(1);
    bot.receive(10);
    let capture = Capture::default();
    assert!(bot.try_fire(&capture).is_none());
    assert!(capture.0.lock().unwrap().is_empty());
}

#[test]
fn ready_bot_reports_firing() {
    let mut bot = routed_bot(1);
    bot.receive(17);
    bot.receive(61);
    let capture = Capture::default();

    let firing = bot.try_fire(&capture).expect("bot should fire");
    assert_eq!(firing.bot, BotId(1));
    assert_eq!(firing.low, 17);
    assert_eq!(firing.high, 61);
    assert_eq!(firing.low_target, Target::Bin(BinId(0)));
    assert_eq!(firing.high_target, Target::Bot(BotId(9)));
    assert_eq!(*capture.0.lock().unwrap(), vec![firing]);
}

#[test]
fn try_fire_does_not_drain() {
    let mut bot = routed_bot(1);
    bot.receive(1);
    bot.receive(2);
    bot.try_fire(&NoopObserver);
    assert_eq!((bot.low(), bot.high()), (Some(1), Some(2)));
}

#[test]
fn clear_keeps_targets() {
    let mut bot = routed_bot(2);
    bot.receive(3);
    bot.receive(4);
    bot.clear();

    assert_eq!(bot.low(), None);
    assert_eq!(bot.high(), None);
    assert_eq!(bot.low_target(), Some(Target::Bin(BinId(0))));
    assert_eq!(bot.high_target(), Some(Target::Bot(BotId(9))));

    bot.receive(8);
    bot.receive(6);
    assert!(bot.is_ready());
}

#[test]
fn single_target_setters_overwrite() {
    let mut bot = routed_bot(2);
    bot.set_low_target(Target::Bot(BotId(5)));
    bot.set_high_target(Target::Bin(BinId(7)));
    assert_eq!(bot.low_target(), Some(Target::Bot(BotId(5))));
    assert_eq!(bot.high_target(), Some(Target::Bin(BinId(7))));
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Diffs
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn value_diff_receives() {
    let mut bot = Bot::new(BotId(2));
    let diff = Diff::Value {
        bot: BotId(2),
        value: 5,
    };
    assert_eq!(diff.bot(), BotId(2));
    diff.apply(&mut bot);
    assert_eq!(bot.high(), Some(5));
}

#[test]
fn targets_diff_sets_both() {
    let mut bot = Bot::new(BotId(2));
    let diff = Diff::Targets {
        bot: BotId(2),
        low: Target::Bot(BotId(1)),
        high: Target::Bin(BinId(0)),
    };
    diff.apply(&mut bot);
    assert_eq!(bot.low_target(), Some(Target::Bot(BotId(1))));
    assert_eq!(bot.high_target(), Some(Target::Bin(BinId(0))));
}

#[test]
fn diff_serializes_with_tag() {
    let diff = Diff::Targets {
        bot: BotId(2),
        low: Target::Bot(BotId(1)),
        high: Target::Bin(BinId(0)),
    };
    assert_eq!(
        serde_json::to_value(diff).unwrap(),
        json!({
            "type": "targets",
            "bot": 2,
            "low": { "kind": "bot", "id": 1 },
            "high": { "kind": "bin", "id": 0 },
        })
    );
}

#[test]
fn target_display_uses_kind_word() {
    assert_eq!(Target::new(TargetKind::Bot, 3).to_string(), "bot 3");
    assert_eq!(Target::new(TargetKind::Bin, 3).to_string(), "bin 3");
    assert_eq!(Target::Bin(BinId(3)).raw_id(), 3);
}

#[test]
fn target_new_keeps_namespaces_apart() {
    assert_eq!(Target::new(TargetKind::Bot, 4), Target::Bot(BotId::new(4)));
    assert_eq!(Target::new(TargetKind::Bin, 4), Target::Bin(BinId::from(4)));
    assert_ne!(Target::new(TargetKind::Bot, 4), Target::new(TargetKind::Bin, 4));
    assert_eq!(BotId::from(7).get(), 7);
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Properties
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn arb_target() -> impl Strategy<Value = Target> {
    prop_oneof![
        any::<u32>().prop_map(|id| Target::Bot(BotId(id))),
        any::<u32>().prop_map(|id| Target::Bin(BinId(id))),
    ]
}

proptest! {
    #[test]
    fn keeps_two_largest(values in proptest::collection::vec(any::<u32>(), 1..32)) {
        let mut bot = Bot::new(BotId(0));
        for v in &values {
            bot.receive(*v);
            if let (Some(low), Some(high)) = (bot.low(), bot.high()) {
                prop_assert!(low <= high);
            }
        }

        let mut sorted = values.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(bot.high(), sorted.first().copied());
        prop_assert_eq!(bot.low(), sorted.get(1).copied());
    }

    #[test]
    fn targets_diff_is_idempotent(low in arb_target(), high in arb_target(), v in any::<u32>()) {
        let diff = Diff::Targets { bot: BotId(1), low, high };
        let mut once = Bot::new(BotId(1));
        once.receive(v);
        diff.apply(&mut once);

        let mut twice = once.clone();
        diff.apply(&mut twice);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn fires_only_when_full(
        values in proptest::collection::vec(any::<u32>(), 0..3),
        low in proptest::option::of(arb_target()),
        high in proptest::option::of(arb_target()),
    ) {
        let mut bot = Bot::new(BotId(1));
        for v in &values {
            bot.receive(*v);
        }
        if let Some(t) = low {
            bot.set_low_target(t);
        }
        if let Some(t) = high {
            bot.set_high_target(t);
        }
        let expect = values.len() >= 2 && low.is_some() && high.is_some();
        prop_assert_eq!(bot.try_fire(&NoopObserver).is_some(), expect);
    }
}
